//! Domain Layer
//!
//! The core of assetbook: depreciation arithmetic and the asset register,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `services/` - The depreciation engine (straight-line, declining-balance)
//! - `value_objects/` - Immutable value types (method, category, asset id)
//! - `entities/` - Assets and the register that holds them
//! - `policies/` - Input validation applied before the engine runs
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - The calculators are total and deterministic
//! 3. **Ports & Adapters** - Register storage goes through a trait-defined port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
