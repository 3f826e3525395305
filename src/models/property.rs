// Property kinds, typed query results and display categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    BuildInfo, CpuInfo, DisplayInfo, MemoryInfo, NetworkDetail, NetworkInfo, StorageInfo,
};
use crate::error::QueryError;

/// Property names understood by the device information API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyKind {
    Build,
    Display,
    Cpu,
    Memory,
    Network,
    Storage,
    WifiNetwork,
    EthernetNetwork,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 8] = [
        PropertyKind::Build,
        PropertyKind::Display,
        PropertyKind::Cpu,
        PropertyKind::Memory,
        PropertyKind::Network,
        PropertyKind::Storage,
        PropertyKind::WifiNetwork,
        PropertyKind::EthernetNetwork,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Build => "BUILD",
            PropertyKind::Display => "DISPLAY",
            PropertyKind::Cpu => "CPU",
            PropertyKind::Memory => "MEMORY",
            PropertyKind::Network => "NETWORK",
            PropertyKind::Storage => "STORAGE",
            PropertyKind::WifiNetwork => "WIFI_NETWORK",
            PropertyKind::EthernetNetwork => "ETHERNET_NETWORK",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| QueryError::new(format!("unknown property {}", s)))
    }
}

/// Independently queried and rendered group of targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Build,
    Display,
    Cpu,
    Memory,
    Network,
    Storage,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Build => "build",
            Category::Display => "display",
            Category::Cpu => "cpu",
            Category::Memory => "memory",
            Category::Network => "network",
            Category::Storage => "storage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successful query result.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Build(BuildInfo),
    Display(DisplayInfo),
    Cpu(CpuInfo),
    Memory(MemoryInfo),
    Network(NetworkInfo),
    Storage(StorageInfo),
    NetworkDetail(NetworkDetail),
}

impl PropertyValue {
    /// Decode a JSON payload as the value of `kind`.
    pub fn from_json(kind: PropertyKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            PropertyKind::Build => PropertyValue::Build(serde_json::from_value(value)?),
            PropertyKind::Display => PropertyValue::Display(serde_json::from_value(value)?),
            PropertyKind::Cpu => PropertyValue::Cpu(serde_json::from_value(value)?),
            PropertyKind::Memory => PropertyValue::Memory(serde_json::from_value(value)?),
            PropertyKind::Network => PropertyValue::Network(serde_json::from_value(value)?),
            PropertyKind::Storage => PropertyValue::Storage(serde_json::from_value(value)?),
            PropertyKind::WifiNetwork | PropertyKind::EthernetNetwork => {
                PropertyValue::NetworkDetail(serde_json::from_value(value)?)
            }
        })
    }

    fn variant_name(&self) -> &'static str {
        match self {
            PropertyValue::Build(_) => "build",
            PropertyValue::Display(_) => "display",
            PropertyValue::Cpu(_) => "cpu",
            PropertyValue::Memory(_) => "memory",
            PropertyValue::Network(_) => "network",
            PropertyValue::Storage(_) => "storage",
            PropertyValue::NetworkDetail(_) => "network detail",
        }
    }
}

macro_rules! impl_try_from_value {
    ($variant:ident, $payload:ty) => {
        impl TryFrom<PropertyValue> for $payload {
            type Error = QueryError;

            fn try_from(value: PropertyValue) -> Result<Self, Self::Error> {
                match value {
                    PropertyValue::$variant(inner) => Ok(inner),
                    other => Err(QueryError::new(format!(
                        "expected {} value, got {}",
                        stringify!($variant),
                        other.variant_name()
                    ))),
                }
            }
        }
    };
}

impl_try_from_value!(Build, BuildInfo);
impl_try_from_value!(Display, DisplayInfo);
impl_try_from_value!(Cpu, CpuInfo);
impl_try_from_value!(Memory, MemoryInfo);
impl_try_from_value!(Network, NetworkInfo);
impl_try_from_value!(Storage, StorageInfo);
impl_try_from_value!(NetworkDetail, NetworkDetail);
