// Canned property values loaded from a JSON document

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::QueryGateway;
use crate::error::QueryError;
use crate::models::{PropertyKind, PropertyValue};

/// A property entry: either a failure with a message or a payload object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FixtureEntry {
    Failure(FixtureFailure),
    Value(serde_json::Value),
}

/// `{"error": ..}` and nothing else; payloads carrying an `error` field
/// alongside others are values.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFailure {
    error: String,
}

/// Gateway that replays fixed answers, e.g.
///
/// ```json
/// {
///   "BUILD": { "model": "QN55Q80", "platformVersion": "6.5" },
///   "DISPLAY": { "error": "display unavailable" }
/// }
/// ```
///
/// Properties missing from the document fail with "<KIND> not supported".
#[derive(Debug, Clone, Default)]
pub struct FixtureGateway {
    entries: BTreeMap<PropertyKind, Result<PropertyValue, QueryError>>,
}

impl FixtureGateway {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("fixture {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse a fixture document (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let raw: BTreeMap<String, FixtureEntry> = serde_json::from_str(s)?;
        let mut entries = BTreeMap::new();
        for (name, entry) in raw {
            let kind: PropertyKind = name.parse()?;
            let outcome = match entry {
                FixtureEntry::Failure(FixtureFailure { error }) => Err(QueryError::new(error)),
                FixtureEntry::Value(value) => Ok(PropertyValue::from_json(kind, value)
                    .map_err(|e| anyhow::anyhow!("fixture {}: {}", kind, e))?),
            };
            entries.insert(kind, outcome);
        }
        Ok(Self { entries })
    }
}

impl QueryGateway for FixtureGateway {
    async fn get_property_value(&self, kind: PropertyKind) -> Result<PropertyValue, QueryError> {
        self.entries
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Err(QueryError::new(format!("{} not supported", kind))))
    }
}
