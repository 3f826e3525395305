use serde::Deserialize;

use crate::lifecycle::DEFAULT_CANCEL_KEY_CODE;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Where property queries are answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayBackend {
    /// The local machine via sysinfo.
    Sysinfo,
    /// A JSON fixture document.
    Fixture,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub backend: GatewayBackend,
    /// Required when backend = "fixture".
    #[serde(default)]
    pub fixture_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceConfig {
    /// Max number of target writes buffered for /ws/surface viewers (slow viewers may lag).
    pub broadcast_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LifecycleConfig {
    #[serde(default = "default_cancel_key_code")]
    pub cancel_key_code: u32,
}

fn default_cancel_key_code() -> u32 {
    DEFAULT_CANCEL_KEY_CODE
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            cancel_key_code: default_cancel_key_code(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        if self.gateway.backend == GatewayBackend::Fixture {
            anyhow::ensure!(
                self.gateway
                    .fixture_path
                    .as_deref()
                    .is_some_and(|p| !p.is_empty()),
                "gateway.fixture_path must be set when gateway.backend = \"fixture\""
            );
        }
        anyhow::ensure!(
            self.surface.broadcast_capacity > 0,
            "surface.broadcast_capacity must be > 0, got {}",
            self.surface.broadcast_capacity
        );
        Ok(())
    }
}
