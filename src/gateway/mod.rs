// Query gateway: the device information API seam

mod fixture;
mod host;
mod linux;

pub use fixture::FixtureGateway;
pub use host::SysinfoGateway;

use std::future::Future;

use crate::config::{GatewayBackend, GatewayConfig};
use crate::error::QueryError;
use crate::models::{PropertyKind, PropertyValue};

/// Asynchronous property queries against the device information API.
///
/// Each call resolves exactly once with either the value or an error. A call
/// that never resolves stalls only its caller.
pub trait QueryGateway: Send + Sync + 'static {
    fn get_property_value(
        &self,
        kind: PropertyKind,
    ) -> impl Future<Output = Result<PropertyValue, QueryError>> + Send;
}

/// Query `kind` and convert the result into its payload type.
pub async fn query<T, G>(gateway: &G, kind: PropertyKind) -> Result<T, QueryError>
where
    G: QueryGateway,
    T: TryFrom<PropertyValue, Error = QueryError>,
{
    gateway.get_property_value(kind).await.and_then(T::try_from)
}

/// Gateway selected by configuration.
pub enum DeviceGateway {
    Sysinfo(SysinfoGateway),
    Fixture(FixtureGateway),
}

impl QueryGateway for DeviceGateway {
    async fn get_property_value(&self, kind: PropertyKind) -> Result<PropertyValue, QueryError> {
        match self {
            DeviceGateway::Sysinfo(g) => g.get_property_value(kind).await,
            DeviceGateway::Fixture(g) => g.get_property_value(kind).await,
        }
    }
}

impl DeviceGateway {
    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        match config.backend {
            GatewayBackend::Sysinfo => Ok(DeviceGateway::Sysinfo(SysinfoGateway::new())),
            GatewayBackend::Fixture => {
                let path = config
                    .fixture_path
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("gateway.fixture_path is not set"))?;
                Ok(DeviceGateway::Fixture(FixtureGateway::load(path)?))
            }
        }
    }
}
