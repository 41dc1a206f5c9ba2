//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Register repositories (JSON file, in-memory)
//! - `export/` - CSV and JSON writers for schedules and the register

pub mod export;
pub mod repositories;

// Re-export for convenience
pub use repositories::{InMemoryRegisterRepository, JsonRegisterRepository};
