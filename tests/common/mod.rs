// Shared test helpers

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tvstatus::error::QueryError;
use tvstatus::gateway::QueryGateway;
use tvstatus::models::*;

/// Scripted answer for one property.
#[derive(Debug, Clone)]
pub enum Response {
    Value(PropertyValue),
    Error(String),
    /// Resolves with the value after the delay.
    Delayed(Duration, PropertyValue),
    /// Never resolves.
    Pending,
}

/// In-memory gateway with per-property answers that can be changed between
/// poll cycles. Records every query it receives.
#[derive(Default)]
pub struct ScriptedGateway {
    responses: Mutex<HashMap<PropertyKind, Response>>,
    calls: Mutex<Vec<PropertyKind>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, kind: PropertyKind, response: Response) {
        self.responses.lock().unwrap().insert(kind, response);
    }

    pub fn set_value(&self, kind: PropertyKind, value: PropertyValue) {
        self.set(kind, Response::Value(value));
    }

    pub fn set_error(&self, kind: PropertyKind, message: &str) {
        self.set(kind, Response::Error(message.to_string()));
    }

    pub fn call_count(&self, kind: PropertyKind) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|k| **k == kind)
            .count()
    }
}

impl QueryGateway for ScriptedGateway {
    async fn get_property_value(&self, kind: PropertyKind) -> Result<PropertyValue, QueryError> {
        self.calls.lock().unwrap().push(kind);
        let response = self.responses.lock().unwrap().get(&kind).cloned();
        match response {
            Some(Response::Value(value)) => Ok(value),
            Some(Response::Error(message)) => Err(QueryError::new(message)),
            Some(Response::Delayed(delay, value)) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            Some(Response::Pending) => std::future::pending().await,
            None => Err(QueryError::new(format!("{} not scripted", kind))),
        }
    }
}

pub fn build(model: &str, platform_version: &str) -> PropertyValue {
    PropertyValue::Build(BuildInfo {
        model: model.into(),
        platform_version: platform_version.into(),
    })
}

pub fn display(width: u32, height: u32) -> PropertyValue {
    PropertyValue::Display(DisplayInfo {
        resolution_width: width,
        resolution_height: height,
    })
}

pub fn cpu(load: f64) -> PropertyValue {
    PropertyValue::Cpu(CpuInfo { load })
}

pub fn memory(capacity: u64, available_capacity: u64) -> PropertyValue {
    PropertyValue::Memory(MemoryInfo {
        capacity,
        available_capacity,
    })
}

pub fn unit(type_: &str, capacity: u64, available_capacity: u64) -> StorageUnit {
    StorageUnit {
        type_: type_.into(),
        capacity,
        available_capacity,
        is_removable: type_ != INTERNAL_STORAGE_TYPE,
    }
}

pub fn storage(units: Vec<StorageUnit>) -> PropertyValue {
    PropertyValue::Storage(StorageInfo { units })
}

pub fn network(network_type: Option<&str>, ip_address: Option<&str>) -> PropertyValue {
    PropertyValue::Network(NetworkInfo {
        network_type: network_type.map(str::to_string),
        ip_address: ip_address.map(str::to_string),
    })
}

pub fn network_detail(ip_address: Option<&str>) -> PropertyValue {
    PropertyValue::NetworkDetail(NetworkDetail {
        ip_address: ip_address.map(str::to_string),
    })
}

/// Gateway answering every property successfully.
pub fn healthy_gateway() -> ScriptedGateway {
    let gateway = ScriptedGateway::new();
    gateway.set_value(PropertyKind::Build, build("QN65QN90", "7.0"));
    gateway.set_value(PropertyKind::Display, display(3840, 2160));
    gateway.set_value(PropertyKind::Cpu, cpu(0.42));
    gateway.set_value(PropertyKind::Memory, memory(16_777_216, 8_388_608));
    gateway.set_value(PropertyKind::Network, network(Some("ETHERNET"), Some("192.168.1.20")));
    gateway.set_value(
        PropertyKind::Storage,
        storage(vec![unit("INTERNAL", 512_000, 128_000)]),
    );
    gateway
}
