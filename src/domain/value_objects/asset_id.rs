//! Asset identifier value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key of an asset in the register.
///
/// New identifiers are time-ordered UUIDs; any non-blank string is accepted
/// when reading so registers written by other tools still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AssetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("asset id cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for AssetId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = AssetId::generate();
        let b = AssetId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn parse_trims_and_rejects_blank() {
        let id: AssetId = "  lq3k9x2abc  ".parse().unwrap();
        assert_eq!(id.as_str(), "lq3k9x2abc");
        assert!("   ".parse::<AssetId>().is_err());
    }

    #[test]
    fn deserialize_rejects_blank_id() {
        let id: AssetId = serde_json::from_str(r#""lq3k9x2abc""#).unwrap();
        assert_eq!(id.as_str(), "lq3k9x2abc");
        assert!(serde_json::from_str::<AssetId>(r#""""#).is_err());
        assert!(serde_json::from_str::<AssetId>(r#""  ""#).is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: AssetId = "van-1".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""van-1""#);
    }
}
