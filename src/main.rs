use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use tvstatus::*;

/// Key events buffered between the viewer transport and lifecycle control.
const KEY_CHANNEL_CAPACITY: usize = 16;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(s) => s,
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::info!(
        name = version::NAME,
        version = version::VERSION,
        backend = ?app_config.gateway.backend,
        "Starting"
    );

    let gateway = Arc::new(gateway::DeviceGateway::from_config(&app_config.gateway)?);
    let surface = Arc::new(surface::SharedSurface::new(
        app_config.surface.broadcast_capacity,
    ));
    let presenter = presenter::Presenter::new(gateway, surface.clone());

    let (keys_tx, mut keys_rx) = mpsc::channel::<lifecycle::KeyEvent>(KEY_CHANNEL_CAPACITY);
    let mut control = lifecycle::LifecycleControl::init(
        &presenter,
        lifecycle::POLL_INTERVAL,
        app_config.lifecycle.cancel_key_code,
    );

    let app = routes::app(surface, keys_tx);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = control.handle_keys(&mut keys_rx) => {}
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
        }
    }
    control.shutdown().await;

    Ok(())
}
