//! Repository Implementations
//!
//! Concrete implementations of the register repository port.

mod json_register;
mod memory;

pub use json_register::{
    parse_register, render_register, JsonRegisterRepository, REGISTER_PATH_ENV,
};
pub use memory::InMemoryRegisterRepository;
