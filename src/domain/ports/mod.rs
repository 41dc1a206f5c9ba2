//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod register_repository;

pub use register_repository::{RegisterChange, RegisterError, RegisterRepository};
