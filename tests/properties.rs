//! Property tests for assetbook.
//!
//! Properties use randomized input generation to protect the schedule
//! invariants across the whole input space.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/depreciation.rs"]
mod depreciation;

#[path = "properties/valuation.rs"]
mod valuation;
