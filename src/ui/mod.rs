//! Terminal rendering for the assetbook binary.

pub mod blocks;
pub mod context;
pub mod error;
pub mod format;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
