// Build, display, CPU and memory payloads

use serde::{Deserialize, Serialize};

/// Static build identity; fetched once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub model: String,
    pub platform_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayInfo {
    pub resolution_width: u32,
    pub resolution_height: u32,
}

/// Current CPU load as a fraction in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub load: f64,
}

/// Memory capacities in kilobytes. `available_capacity <= capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    pub capacity: u64,
    pub available_capacity: u64,
}
