// Storage unit models

use serde::{Deserialize, Serialize};

/// Unit type tag for built-in flash.
pub const INTERNAL_STORAGE_TYPE: &str = "INTERNAL";

/// One storage unit; capacities in megabytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUnit {
    /// `INTERNAL`, `USB_HOST`, `MMC`, or whatever the device reports.
    #[serde(rename = "type")]
    pub type_: String,
    pub capacity: u64,
    pub available_capacity: u64,
    #[serde(default)]
    pub is_removable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub units: Vec<StorageUnit>,
}

impl StorageInfo {
    /// First unit tagged `INTERNAL`, if any.
    pub fn internal_unit(&self) -> Option<&StorageUnit> {
        self.units
            .iter()
            .find(|unit| unit.type_ == INTERNAL_STORAGE_TYPE)
    }
}
