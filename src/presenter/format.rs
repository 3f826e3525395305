// Pure formatting of query results into target text

use crate::models::{
    BuildInfo, CpuInfo, DisplayInfo, MemoryInfo, NetworkDetail, NetworkInfo, PropertyKind,
    StorageUnit,
};

pub const BUILD_ERROR: &str = "Build Info Error";
pub const DISPLAY_ERROR: &str = "Display Error";
pub const CPU_ERROR: &str = "CPU Error";
pub const MEMORY_ERROR: &str = "Memory Error";
pub const NETWORK_ERROR: &str = "Network Error";
pub const STORAGE_ERROR: &str = "Storage Error";
pub const STORAGE_NOT_FOUND: &str = "Internal Storage Not Found";
pub const IP_API_ERROR: &str = "IP: API Error";
pub const NOT_CONNECTED: &str = "Not Connected";
/// Fill width written when a bar's category fails.
pub const EMPTY_FILL: &str = "0%";

/// Fixed-point decimal string with ties rounded up.
pub fn to_fixed(value: f64, digits: u32) -> String {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", digits as usize, rounded)
}

/// `round(part / whole * 100)`; 0 when `whole` is 0.
pub fn percent_of(part: u64, whole: u64) -> i64 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as i64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildView {
    pub model: String,
    pub platform: String,
}

pub fn build_view(build: &BuildInfo) -> BuildView {
    BuildView {
        model: build.model.clone(),
        platform: format!("Platform: {}", build.platform_version),
    }
}

pub fn display_view(display: &DisplayInfo) -> String {
    format!(
        "{} x {} px",
        display.resolution_width, display.resolution_height
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuView {
    pub load_percent: i64,
    pub text: String,
    /// Same string as `text`.
    pub fill: String,
}

pub fn cpu_view(cpu: &CpuInfo) -> CpuView {
    let load_percent = (cpu.load * 100.0).round() as i64;
    let text = format!("{}%", load_percent);
    CpuView {
        load_percent,
        fill: text.clone(),
        text,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub total_gb: String,
    pub available_mb: String,
    pub used_percent: i64,
    pub total_text: String,
    pub available_text: String,
}

/// Capacities are in KB: total shown in GB (2 decimals), free in MB.
pub fn memory_view(memory: &MemoryInfo) -> MemoryView {
    let total_gb = to_fixed(memory.capacity as f64 / 1024.0 / 1024.0, 2);
    let available_mb = to_fixed(memory.available_capacity as f64 / 1024.0, 0);
    let used = memory.capacity.saturating_sub(memory.available_capacity);
    let used_percent = percent_of(used, memory.capacity);
    MemoryView {
        total_text: format!("{} GB Total", total_gb),
        available_text: format!("{} MB Free ({}% Used)", available_mb, used_percent),
        total_gb,
        available_mb,
        used_percent,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageView {
    pub total_gb: String,
    pub available_gb: String,
    pub usage_percent: i64,
    pub available_text: String,
    pub fill: String,
}

/// Storage capacities are in MB, so a single division gives GB.
pub fn storage_view(unit: &StorageUnit) -> StorageView {
    let total_gb = to_fixed(unit.capacity as f64 / 1024.0, 0);
    let available_gb = to_fixed(unit.available_capacity as f64 / 1024.0, 1);
    let used = unit.capacity.saturating_sub(unit.available_capacity);
    let usage_percent = percent_of(used, unit.capacity);
    StorageView {
        available_text: format!("{} GB Free ({}% Used)", available_gb, usage_percent),
        fill: format!("{}%", usage_percent),
        total_gb,
        available_gb,
        usage_percent,
    }
}

pub fn network_status_text(network: &NetworkInfo) -> String {
    let network_type = network
        .network_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("N/A");
    format!("Type: {}", network_type)
}

/// How the address target gets its value for a primary network result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressResolution {
    /// The primary result already carried an address.
    Known(String),
    /// Ask the type-qualified property.
    Lookup(PropertyKind),
    NotConnected,
}

pub fn resolve_address(network: &NetworkInfo) -> AddressResolution {
    if let Some(ip) = network.address() {
        return AddressResolution::Known(ip.to_string());
    }
    match network.detail_kind() {
        Some(kind) => AddressResolution::Lookup(kind),
        None => AddressResolution::NotConnected,
    }
}

pub fn ip_text(ip: &str) -> String {
    format!("IP: {}", ip)
}

pub fn detail_ip_text(detail: &NetworkDetail) -> String {
    let ip = detail
        .ip_address
        .as_deref()
        .filter(|ip| !ip.is_empty())
        .unwrap_or("Unknown");
    ip_text(ip)
}
