// Presentation surface: addressable text / fill-width targets

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Stable keys of the page elements this system writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    ModelName,
    #[serde(rename = "tizen-version")]
    PlatformVersion,
    DisplayResolution,
    CpuLoad,
    CpuFill,
    MemoryTotal,
    MemoryAvailable,
    NetworkStatus,
    IpAddress,
    StorageAvailable,
    StorageFill,
}

impl Target {
    pub fn key(self) -> &'static str {
        match self {
            Target::ModelName => "model-name",
            Target::PlatformVersion => "tizen-version",
            Target::DisplayResolution => "display-resolution",
            Target::CpuLoad => "cpu-load",
            Target::CpuFill => "cpu-fill",
            Target::MemoryTotal => "memory-total",
            Target::MemoryAvailable => "memory-available",
            Target::NetworkStatus => "network-status",
            Target::IpAddress => "ip-address",
            Target::StorageAvailable => "storage-available",
            Target::StorageFill => "storage-fill",
        }
    }
}

/// Write-only sink for rendered values. Writes overwrite; last writer wins.
pub trait PresentationSurface: Send + Sync + 'static {
    fn set_text(&self, target: Target, text: &str);
    fn set_width(&self, target: Target, width: &str);
}

/// Which property of a target a write touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceProperty {
    Text,
    Width,
}

/// One surface write, as pushed to viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceUpdate {
    pub target: Target,
    pub property: SurfaceProperty,
    pub value: String,
}

/// Latest values of one target. A property never written is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// In-process surface: keeps the latest value per target and broadcasts each
/// write to attached viewers (slow viewers may lag).
pub struct SharedSurface {
    targets: RwLock<BTreeMap<Target, TargetState>>,
    tx: broadcast::Sender<SurfaceUpdate>,
}

impl SharedSurface {
    pub fn new(broadcast_capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(broadcast_capacity);
        Self {
            targets: RwLock::new(BTreeMap::new()),
            tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SurfaceUpdate> {
        self.tx.subscribe()
    }

    /// Current state of every target written so far.
    pub fn snapshot(&self) -> BTreeMap<Target, TargetState> {
        self.targets
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn text(&self, target: Target) -> Option<String> {
        self.read_target(target, |s| s.text.clone())
    }

    pub fn width(&self, target: Target) -> Option<String> {
        self.read_target(target, |s| s.width.clone())
    }

    fn read_target(
        &self,
        target: Target,
        field: impl FnOnce(&TargetState) -> Option<String>,
    ) -> Option<String> {
        let targets = self
            .targets
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        targets.get(&target).and_then(field)
    }

    fn write(&self, target: Target, property: SurfaceProperty, value: &str) {
        let mut targets = self
            .targets
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let state = targets.entry(target).or_default();
        let slot = match property {
            SurfaceProperty::Text => &mut state.text,
            SurfaceProperty::Width => &mut state.width,
        };
        *slot = Some(value.to_string());
        // Sent under the lock so viewers see writes in map order.
        let _ = self.tx.send(SurfaceUpdate {
            target,
            property,
            value: value.to_string(),
        });
    }
}

impl PresentationSurface for SharedSurface {
    fn set_text(&self, target: Target, text: &str) {
        self.write(target, SurfaceProperty::Text, text);
    }

    fn set_width(&self, target: Target, width: &str) {
        self.write(target, SurfaceProperty::Width, width);
    }
}
