// Device properties read from the host via sysinfo

use std::sync::{Arc, Mutex};

use sysinfo::{Disks, Networks, System};

use super::QueryGateway;
use super::linux::{is_wireless, read_display_resolution_linux, read_product_name_linux};
use crate::error::QueryError;
use crate::models::*;

const NETWORK_TYPE_WIFI: &str = "WIFI";
const NETWORK_TYPE_ETHERNET: &str = "ETHERNET";
const NETWORK_TYPE_NONE: &str = "NONE";

const REMOVABLE_STORAGE_TYPE: &str = "USB_HOST";

/// Answers property queries from the local machine. Used on hosts that lack
/// the TV device API; the shapes match what the device returns.
pub struct SysinfoGateway {
    // Separate handles: the CPU sample sleeps while holding its lock.
    cpu: Arc<Mutex<System>>,
    memory: Arc<Mutex<System>>,
    disks: Arc<Mutex<Disks>>,
    networks: Arc<Mutex<Networks>>,
}

impl Default for SysinfoGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned(e: impl std::fmt::Display) -> QueryError {
    QueryError::new(format!("sysinfo lock poisoned: {}", e))
}

fn join_failed(e: tokio::task::JoinError) -> QueryError {
    QueryError::new(format!("sysinfo task join: {}", e))
}

/// Non-loopback interfaces holding an IPv4 address, sorted by name, with
/// that address.
fn connected_interfaces(networks: &Networks) -> Vec<(String, String)> {
    let mut found: Vec<(String, String)> = networks
        .list()
        .iter()
        .filter_map(|(name, data)| {
            data.ip_networks()
                .iter()
                .find(|n| n.addr.is_ipv4() && !n.addr.is_loopback())
                .map(|n| (name.clone(), n.addr.to_string()))
        })
        .collect();
    found.sort();
    found
}

fn network_type_of(interface_name: &str) -> &'static str {
    if is_wireless(interface_name) {
        NETWORK_TYPE_WIFI
    } else {
        NETWORK_TYPE_ETHERNET
    }
}

impl SysinfoGateway {
    pub fn new() -> Self {
        let mut cpu = System::new();
        cpu.refresh_cpu_all();
        let mut memory = System::new();
        memory.refresh_memory();
        Self {
            cpu: Arc::new(Mutex::new(cpu)),
            memory: Arc::new(Mutex::new(memory)),
            disks: Arc::new(Mutex::new(Disks::new_with_refreshed_list())),
            networks: Arc::new(Mutex::new(Networks::new_with_refreshed_list())),
        }
    }

    async fn get_build(&self) -> Result<BuildInfo, QueryError> {
        tokio::task::spawn_blocking(|| {
            let model = read_product_name_linux()
                .or_else(System::host_name)
                .ok_or_else(|| QueryError::new("model name unavailable"))?;
            let platform_version = System::os_version()
                .or_else(System::kernel_version)
                .unwrap_or_default();
            Ok(BuildInfo {
                model,
                platform_version,
            })
        })
        .await
        .map_err(join_failed)?
    }

    async fn get_display(&self) -> Result<DisplayInfo, QueryError> {
        tokio::task::spawn_blocking(|| {
            let (resolution_width, resolution_height) = read_display_resolution_linux()
                .ok_or_else(|| QueryError::new("no connected display found"))?;
            Ok(DisplayInfo {
                resolution_width,
                resolution_height,
            })
        })
        .await
        .map_err(join_failed)?
    }

    async fn get_cpu(&self) -> Result<CpuInfo, QueryError> {
        let sys = self.cpu.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys.lock().map_err(lock_poisoned)?;
            sys.refresh_cpu_all();
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            sys.refresh_cpu_all();
            let load = (sys.global_cpu_usage() as f64 / 100.0).clamp(0.0, 1.0);
            Ok(CpuInfo { load })
        })
        .await
        .map_err(join_failed)?
    }

    async fn get_memory(&self) -> Result<MemoryInfo, QueryError> {
        let sys = self.memory.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys.lock().map_err(lock_poisoned)?;
            sys.refresh_memory();
            let capacity = sys.total_memory() / 1024;
            let available_capacity = (sys.available_memory() / 1024).min(capacity);
            Ok(MemoryInfo {
                capacity,
                available_capacity,
            })
        })
        .await
        .map_err(join_failed)?
    }

    async fn get_storage(&self) -> Result<StorageInfo, QueryError> {
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut disks = disks.lock().map_err(lock_poisoned)?;
            disks.refresh(true);
            let units = disks
                .list()
                .iter()
                .map(|d| {
                    let capacity = d.total_space() / 1024 / 1024;
                    StorageUnit {
                        type_: if d.is_removable() {
                            REMOVABLE_STORAGE_TYPE.to_string()
                        } else {
                            INTERNAL_STORAGE_TYPE.to_string()
                        },
                        capacity,
                        available_capacity: (d.available_space() / 1024 / 1024).min(capacity),
                        is_removable: d.is_removable(),
                    }
                })
                .collect();
            Ok(StorageInfo { units })
        })
        .await
        .map_err(join_failed)?
    }

    /// Primary network result: connection type only. The address is left
    /// for the type-qualified query, as on the device.
    async fn get_network(&self) -> Result<NetworkInfo, QueryError> {
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks = networks.lock().map_err(lock_poisoned)?;
            networks.refresh(true);
            let network_type = connected_interfaces(&networks)
                .first()
                .map(|(name, _)| network_type_of(name))
                .unwrap_or(NETWORK_TYPE_NONE);
            Ok(NetworkInfo {
                network_type: Some(network_type.to_string()),
                ip_address: None,
            })
        })
        .await
        .map_err(join_failed)?
    }

    async fn get_network_detail(&self, wanted: &'static str) -> Result<NetworkDetail, QueryError> {
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks = networks.lock().map_err(lock_poisoned)?;
            networks.refresh(true);
            let ip_address = connected_interfaces(&networks)
                .into_iter()
                .find(|(name, _)| network_type_of(name) == wanted)
                .map(|(_, ip)| ip);
            Ok(NetworkDetail { ip_address })
        })
        .await
        .map_err(join_failed)?
    }
}

impl QueryGateway for SysinfoGateway {
    async fn get_property_value(&self, kind: PropertyKind) -> Result<PropertyValue, QueryError> {
        Ok(match kind {
            PropertyKind::Build => PropertyValue::Build(self.get_build().await?),
            PropertyKind::Display => PropertyValue::Display(self.get_display().await?),
            PropertyKind::Cpu => PropertyValue::Cpu(self.get_cpu().await?),
            PropertyKind::Memory => PropertyValue::Memory(self.get_memory().await?),
            PropertyKind::Network => PropertyValue::Network(self.get_network().await?),
            PropertyKind::Storage => PropertyValue::Storage(self.get_storage().await?),
            PropertyKind::WifiNetwork => {
                PropertyValue::NetworkDetail(self.get_network_detail(NETWORK_TYPE_WIFI).await?)
            }
            PropertyKind::EthernetNetwork => PropertyValue::NetworkDetail(
                self.get_network_detail(NETWORK_TYPE_ETHERNET).await?,
            ),
        })
    }
}
