//! In-memory Register Repository
//!
//! Keeps the register in process memory. Used by tests and by callers that
//! embed the library without touching disk.

use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::Register;
use crate::domain::ports::{RegisterChange, RegisterError, RegisterRepository};

#[derive(Debug, Default)]
pub struct InMemoryRegisterRepository {
    register: Mutex<Register>,
}

impl InMemoryRegisterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_register(register: Register) -> Self {
        Self {
            register: Mutex::new(register),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, Register>, RegisterError> {
        self.register.lock().map_err(|_| RegisterError::AccessError {
            message: "register lock poisoned".to_string(),
        })
    }
}

impl RegisterRepository for InMemoryRegisterRepository {
    fn load(&self) -> Result<Register, RegisterError> {
        Ok(self.guard()?.clone())
    }

    fn save(&self, register: &Register) -> Result<(), RegisterError> {
        *self.guard()? = register.clone();
        Ok(())
    }

    fn modify(&self, change: &mut RegisterChange<'_>) -> Result<(), RegisterError> {
        let mut guard = self.guard()?;
        // Work on a copy so a failed change leaves the register as it was.
        let mut working = guard.clone();
        change(&mut working)?;
        *guard = working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_change_is_discarded() {
        let repo = InMemoryRegisterRepository::new();
        let result = repo.modify(&mut |register| {
            register.version = 99;
            Err(RegisterError::AccessError {
                message: "boom".to_string(),
            })
        });

        assert!(result.is_err());
        assert_eq!(repo.load().unwrap().version, Register::CURRENT_VERSION);
    }

    #[test]
    fn save_replaces_contents() {
        let repo = InMemoryRegisterRepository::new();
        let mut register = Register::new();
        register.version = 2;
        repo.save(&register).unwrap();
        assert_eq!(repo.load().unwrap().version, 2);
    }
}
