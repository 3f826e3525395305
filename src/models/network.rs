// Network connection models

use serde::{Deserialize, Serialize};

use super::PropertyKind;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    /// `WIFI`, `ETHERNET`, `2G`..`4G`, `NONE`, `UNKNOWN`.
    #[serde(default)]
    pub network_type: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

impl NetworkInfo {
    /// Type-qualified property that can resolve the address, for WIFI and
    /// ETHERNET connections only.
    pub fn detail_kind(&self) -> Option<PropertyKind> {
        match self.network_type.as_deref() {
            Some("WIFI") => Some(PropertyKind::WifiNetwork),
            Some("ETHERNET") => Some(PropertyKind::EthernetNetwork),
            _ => None,
        }
    }

    /// Address from the primary result; empty strings count as absent.
    pub fn address(&self) -> Option<&str> {
        self.ip_address.as_deref().filter(|ip| !ip.is_empty())
    }
}

/// Result of a WIFI_NETWORK / ETHERNET_NETWORK query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDetail {
    #[serde(default)]
    pub ip_address: Option<String>,
}
