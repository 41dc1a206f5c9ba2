//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `calculate` - Resolve form inputs, validate, and compute a schedule
//! - `RegisterUseCase` - Add, revise, list, value and import register assets

pub mod calculate;
pub mod register;

pub use calculate::{calculate, CalculateOptions, Calculation, ScheduleSummary};
pub use register::{ImportReport, RegisterRow, RegisterUseCase, RejectedAsset};
