// Device information payloads returned by the query gateway

mod network;
mod property;
mod storage;
mod system;

pub use network::{NetworkDetail, NetworkInfo};
pub use property::{Category, PropertyKind, PropertyValue};
pub use storage::{INTERNAL_STORAGE_TYPE, StorageInfo, StorageUnit};
pub use system::{BuildInfo, CpuInfo, DisplayInfo, MemoryInfo};
