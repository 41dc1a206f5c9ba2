//! RegisterRepository port
//!
//! Persists the asset register. The default adapter keeps it in
//! `~/.assetbook/register.json`.

use std::path::PathBuf;

use crate::domain::entities::{Asset, Register};
use crate::domain::value_objects::AssetId;

/// A change applied to the register while the repository holds it exclusively.
/// Returning an error abandons the change.
pub type RegisterChange<'a> = dyn FnMut(&mut Register) -> Result<(), RegisterError> + 'a;

pub trait RegisterRepository: Send + Sync {
    fn load(&self) -> Result<Register, RegisterError>;

    fn save(&self, register: &Register) -> Result<(), RegisterError>;

    /// Load, apply `change` and save as one step.
    fn modify(&self, change: &mut RegisterChange<'_>) -> Result<(), RegisterError>;

    fn upsert(&self, asset: Asset) -> Result<(), RegisterError> {
        let mut pending = Some(asset);
        self.modify(&mut |register| {
            if let Some(asset) = pending.take() {
                register.upsert(asset);
            }
            Ok(())
        })
    }

    fn remove(&self, id: &AssetId) -> Result<bool, RegisterError> {
        let mut removed = false;
        self.modify(&mut |register| {
            removed = register.remove(id);
            Ok(())
        })?;
        Ok(removed)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Failed to access register: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize register: {message}")]
    SerializationError { message: String },

    #[error(
        "register file corrupted: {path}\n  → Fix: restore a backup, or move the file aside to start an empty register\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("asset '{id}' is not in the register")]
    NotFound { id: AssetId },

    #[error("asset '{id}' is already in the register")]
    DuplicateId { id: AssetId },
}
