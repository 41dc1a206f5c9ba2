//! JSON Register Repository
//!
//! Persists the asset register at `~/.assetbook/register.json`.
//!
//! The file holds `{ "version": 1, "assets": [...] }`. A bare array of assets
//! (the format the browser app exported) is accepted when reading and is
//! rewritten as a versioned document on the next save.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::entities::{Asset, Register};
use crate::domain::ports::{RegisterChange, RegisterError, RegisterRepository};
use crate::domain::services::Schedule;
use crate::domain::value_objects::{AssetCategory, AssetId, DepreciationMethod};

/// Overrides the register location.
pub const REGISTER_PATH_ENV: &str = "ASSETBOOK_REGISTER_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAsset {
    id: AssetId,
    asset_name: String,
    asset_type: String,
    #[serde(deserialize_with = "lenient::number")]
    purchase_cost: f64,
    #[serde(deserialize_with = "lenient::number")]
    residual_value: f64,
    purchase_date: NaiveDate,
    #[serde(deserialize_with = "lenient::count")]
    useful_life: u32,
    method: DepreciationMethod,
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    depreciation_rate: Option<f64>,
    #[serde(default)]
    schedule: Schedule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonRegister {
    version: u32,
    #[serde(default)]
    assets: Vec<JsonAsset>,
}

pub struct JsonRegisterRepository {
    path: PathBuf,
}

impl JsonRegisterRepository {
    pub fn new() -> Self {
        Self {
            path: default_register_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn load_from_disk(&self) -> Result<Register, RegisterError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no register file yet");
            return Ok(Register::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access_error)?;
        parse_register(&content).map_err(|e| RegisterError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, register: &Register) -> Result<(), RegisterError> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir).map_err(access_error)?;

        let content =
            render_register(register).map_err(|e| RegisterError::SerializationError {
                message: e.to_string(),
            })?;

        // Write next to the target so the rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(&dir).map_err(access_error)?;
        tmp.write_all(content.as_bytes()).map_err(access_error)?;
        tmp.persist(&self.path).map_err(|e| access_error(e.error))?;

        debug!(
            path = %self.path.display(),
            assets = register.len(),
            "register saved"
        );
        Ok(())
    }

    fn with_lock<T>(
        &self,
        f: impl FnOnce() -> Result<T, RegisterError>,
    ) -> Result<T, RegisterError> {
        fs::create_dir_all(self.parent_dir()).map_err(access_error)?;

        let lock_file = fs::File::create(self.lock_path()).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }
}

impl Default for JsonRegisterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterRepository for JsonRegisterRepository {
    fn load(&self) -> Result<Register, RegisterError> {
        self.load_from_disk()
    }

    fn save(&self, register: &Register) -> Result<(), RegisterError> {
        self.with_lock(|| self.save_to_disk(register))
    }

    fn modify(&self, change: &mut RegisterChange<'_>) -> Result<(), RegisterError> {
        self.with_lock(|| {
            let mut register = self.load_from_disk()?;
            change(&mut register)?;
            self.save_to_disk(&register)
        })
    }
}

fn access_error(e: std::io::Error) -> RegisterError {
    RegisterError::AccessError {
        message: e.to_string(),
    }
}

fn default_register_path() -> PathBuf {
    // Lets tests and scripts point at a throwaway register.
    if let Ok(path) = std::env::var(REGISTER_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .map(|h| h.join(".assetbook/register.json"))
        .unwrap_or_else(|| PathBuf::from("~/.assetbook/register.json"))
}

/// Parse a register document or a bare array of assets.
///
/// Empty schedules are recalculated from the stored inputs.
pub fn parse_register(content: &str) -> Result<Register, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(Register::new());
    }

    let value: serde_json::Value = serde_json::from_str(content)?;
    let json_reg = if value.is_array() {
        JsonRegister {
            version: Register::CURRENT_VERSION,
            assets: serde_json::from_value(value)?,
        }
    } else {
        serde_json::from_value(value)?
    };

    Ok(from_json(json_reg))
}

/// Render the register as a pretty-printed versioned document.
pub fn render_register(register: &Register) -> Result<String, serde_json::Error> {
    let mut content = serde_json::to_string_pretty(&to_json(register))?;
    content.push('\n');
    Ok(content)
}

/// Numeric fields written by the browser app may hold form text such as
/// `"25"` instead of a number.
mod lenient {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    impl NumberOrText {
        fn into_f64<E: Error>(self) -> Result<Option<f64>, E> {
            match self {
                NumberOrText::Number(n) => Ok(Some(n)),
                NumberOrText::Text(text) if text.trim().is_empty() => Ok(None),
                NumberOrText::Text(text) => text
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| E::invalid_value(Unexpected::Str(&text), &"a number")),
            }
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        NumberOrText::deserialize(d)?
            .into_f64()?
            .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(""), &"a number"))
    }

    pub fn optional_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<NumberOrText>::deserialize(d)? {
            Some(value) => value.into_f64(),
            None => Ok(None),
        }
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let n = number(d)?;
        if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
            Ok(n as u32)
        } else {
            Err(D::Error::invalid_value(
                Unexpected::Float(n),
                &"a whole number of years",
            ))
        }
    }
}

fn from_json(json_reg: JsonRegister) -> Register {
    let mut register = Register::new();
    register.version = json_reg.version;
    register.assets = json_reg.assets.into_iter().map(asset_from_json).collect();
    register
}

fn asset_from_json(a: JsonAsset) -> Asset {
    let category = AssetCategory::from_key(&a.asset_type).unwrap_or_else(|| {
        warn!(
            asset = %a.id,
            asset_type = %a.asset_type,
            "unknown asset type, filed under 'other'"
        );
        AssetCategory::Other
    });

    let mut asset = Asset {
        id: a.id,
        name: a.asset_name,
        category,
        cost: a.purchase_cost,
        residual_value: a.residual_value,
        purchase_date: a.purchase_date,
        useful_life: a.useful_life,
        method: a.method,
        rate: a.depreciation_rate.filter(|_| a.method.uses_rate()),
        schedule: a.schedule,
    };
    if asset.schedule.is_empty() {
        asset.schedule = asset.depreciation_input().schedule();
    }
    asset
}

fn to_json(register: &Register) -> JsonRegister {
    JsonRegister {
        version: register.version,
        assets: register
            .all()
            .iter()
            .cloned()
            .map(|a| JsonAsset {
                id: a.id,
                asset_name: a.name,
                asset_type: a.category.key().to_string(),
                purchase_cost: a.cost,
                residual_value: a.residual_value,
                purchase_date: a.purchase_date,
                useful_life: a.useful_life,
                method: a.method,
                depreciation_rate: a.rate,
                schedule: a.schedule,
            })
            .collect(),
    }
}
