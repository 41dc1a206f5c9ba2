//! Register entity
//!
//! The asset register: every saved asset keyed by its id, with the filter and
//! sort operations used by `assetbook list` and the register export.

use std::cmp::Ordering;

use super::Asset;
use crate::domain::value_objects::{AssetCategory, AssetId};

#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    pub version: u32,
    pub assets: Vec<Asset>,
}

/// Column a register listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Cost,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterQuery {
    pub category: Option<AssetCategory>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl Register {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            assets: Vec::new(),
        }
    }

    /// Adds `asset` unless its id is already taken. Returns whether it was added.
    pub fn insert(&mut self, asset: Asset) -> bool {
        if self.contains(&asset.id) {
            return false;
        }
        self.assets.push(asset);
        true
    }

    /// Replaces the asset with the same id. Returns whether one was found.
    pub fn update(&mut self, asset: Asset) -> bool {
        match self.assets.iter_mut().find(|a| a.id == asset.id) {
            Some(existing) => {
                *existing = asset;
                true
            }
            None => false,
        }
    }

    pub fn upsert(&mut self, asset: Asset) {
        if let Some(existing) = self.assets.iter_mut().find(|a| a.id == asset.id) {
            *existing = asset;
        } else {
            self.assets.push(asset);
        }
    }

    pub fn remove(&mut self, id: &AssetId) -> bool {
        let len_before = self.assets.len();
        self.assets.retain(|a| &a.id != id);
        self.assets.len() != len_before
    }

    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| &a.id == id)
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.get(id).is_some()
    }

    pub fn all(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<AssetCategory> {
        let mut seen = Vec::new();
        for asset in &self.assets {
            if !seen.contains(&asset.category) {
                seen.push(asset.category);
            }
        }
        seen
    }

    /// Assets matching the query's category filter, in the requested order.
    /// Ties keep register order.
    pub fn query(&self, query: &RegisterQuery) -> Vec<&Asset> {
        let mut selected: Vec<&Asset> = self
            .assets
            .iter()
            .filter(|a| query.category.map_or(true, |c| a.category == c))
            .collect();

        selected.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        selected
    }
}

impl Default for Register {
    fn default() -> Self {
        Self::new()
    }
}

fn compare(a: &Asset, b: &Asset, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Category => a.category.key().cmp(b.category.key()),
        SortKey::Cost => a.cost.total_cmp(&b.cost),
        SortKey::Date => a.purchase_date.cmp(&b.purchase_date),
    }
}

#[cfg(test)]
mod tests;
