//! Register Use Case
//!
//! Application-layer orchestration for the saved asset register.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::application::calculate::calculate;
use crate::domain::entities::{Asset, AssetDraft, AssetValuation, Register, RegisterQuery};
use crate::domain::policies::{validate_asset_input, ValidationIssue};
use crate::domain::ports::{RegisterError, RegisterRepository};
use crate::domain::value_objects::{AssetCategory, AssetId};
use crate::error::{AssetbookError, AssetbookResult};

/// A listed asset with its valuation for the current year.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterRow {
    pub asset: Asset,
    pub valuation: AssetValuation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedAsset {
    pub name: String,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub rejected: Vec<RejectedAsset>,
}

pub struct RegisterUseCase {
    repository: Arc<dyn RegisterRepository>,
    default_rate: Option<f64>,
}

impl RegisterUseCase {
    pub fn new(repository: Arc<dyn RegisterRepository>) -> Self {
        Self {
            repository,
            default_rate: None,
        }
    }

    /// Declining rate given to revised assets that switch to declining-balance
    /// without one. Falls back to the category rate when unset.
    pub fn with_default_rate(mut self, rate: Option<f64>) -> Self {
        self.default_rate = rate;
        self
    }

    pub fn add_asset(&self, asset: Asset) -> AssetbookResult<()> {
        let mut pending = Some(asset);
        self.repository.modify(&mut |register| {
            let Some(asset) = pending.take() else {
                return Ok(());
            };
            let id = asset.id.clone();
            if register.insert(asset) {
                Ok(())
            } else {
                Err(RegisterError::DuplicateId { id })
            }
        })?;
        info!("asset added to register");
        Ok(())
    }

    /// Replace a stored asset. The schedule is recalculated from the asset's
    /// inputs so a stale schedule is never written.
    pub fn update_asset(&self, mut asset: Asset) -> AssetbookResult<()> {
        asset.schedule = asset.depreciation_input().schedule();
        let id = asset.id.clone();
        let mut pending = Some(asset);
        self.repository.modify(&mut |register| {
            let Some(asset) = pending.take() else {
                return Ok(());
            };
            if register.update(asset) {
                Ok(())
            } else {
                Err(RegisterError::NotFound { id: id.clone() })
            }
        })?;
        debug!(id = %id, "asset updated");
        Ok(())
    }

    /// Apply `edit` to a stored asset's inputs, validate, recalculate and
    /// store the result.
    pub fn revise_asset<F>(&self, id: &AssetId, edit: F) -> AssetbookResult<Asset>
    where
        F: FnOnce(&mut AssetDraft),
    {
        let current = self.get_asset(id)?;
        let mut draft = current.to_draft();
        edit(&mut draft);
        draft.fill_rate(self.default_rate);

        let revised = calculate(draft)?.into_asset(current.id, current.purchase_date);
        self.update_asset(revised.clone())?;
        Ok(revised)
    }

    pub fn remove_asset(&self, id: &AssetId) -> AssetbookResult<Asset> {
        let mut removed = None;
        self.repository.modify(&mut |register| {
            removed = register.get(id).cloned();
            if register.remove(id) {
                Ok(())
            } else {
                Err(RegisterError::NotFound { id: id.clone() })
            }
        })?;
        info!(id = %id, "asset removed from register");
        removed.ok_or_else(|| AssetbookError::AssetNotFound { id: id.clone() })
    }

    pub fn get_asset(&self, id: &AssetId) -> AssetbookResult<Asset> {
        self.repository
            .load()?
            .get(id)
            .cloned()
            .ok_or_else(|| AssetbookError::AssetNotFound { id: id.clone() })
    }

    pub fn list(&self, query: &RegisterQuery) -> AssetbookResult<Vec<Asset>> {
        let register = self.repository.load()?;
        Ok(register.query(query).into_iter().cloned().collect())
    }

    /// Listed assets with their book value in the year `today` falls in.
    pub fn valuations(
        &self,
        query: &RegisterQuery,
        today: NaiveDate,
    ) -> AssetbookResult<Vec<RegisterRow>> {
        Ok(self
            .list(query)?
            .into_iter()
            .map(|asset| {
                let valuation = asset.valuation_on(today);
                RegisterRow { asset, valuation }
            })
            .collect())
    }

    pub fn categories(&self) -> AssetbookResult<Vec<AssetCategory>> {
        Ok(self.repository.load()?.categories())
    }

    /// Upsert every valid asset from `incoming`. Schedules are recalculated;
    /// assets that fail validation are reported and left out.
    pub fn import(&self, incoming: Register) -> AssetbookResult<ImportReport> {
        let mut report = ImportReport::default();
        let mut accepted = Vec::new();

        for mut asset in incoming.assets {
            if let Err(issues) = validate_asset_input(&asset.to_draft()) {
                warn!(name = %asset.name, "skipping invalid asset on import");
                report.rejected.push(RejectedAsset {
                    name: asset.name,
                    issues,
                });
                continue;
            }
            asset.rate = asset.rate.filter(|_| asset.method.uses_rate());
            asset.schedule = asset.depreciation_input().schedule();
            accepted.push(asset);
        }

        report.imported = accepted.len();
        let mut pending = Some(accepted);
        self.repository.modify(&mut |register| {
            for asset in pending.take().unwrap_or_default() {
                register.upsert(asset);
            }
            Ok(())
        })?;

        info!(
            imported = report.imported,
            rejected = report.rejected.len(),
            "register import finished"
        );
        Ok(report)
    }
}
