// WebSocket viewer stream: surface writes out, key events in

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::lifecycle::KeyEvent;
use crate::surface::{SharedSurface, SurfaceUpdate, Target, TargetState};

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ViewerMessage {
    Snapshot {
        targets: BTreeMap<Target, TargetState>,
    },
    Update(SurfaceUpdate),
}

pub(super) async fn ws_surface(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let surface = state.surface.clone();
    let keys_tx = state.keys_tx.clone();
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_surface(socket, surface, keys_tx).await {
            tracing::info!("Surface stream error: {}", e);
        }
    })
}

async fn stream_surface(
    socket: WebSocket,
    surface: Arc<SharedSurface>,
    keys_tx: mpsc::Sender<KeyEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Viewer connected to surface stream");
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before the snapshot so no write falls between them.
    let mut rx = surface.subscribe();
    let snapshot = ViewerMessage::Snapshot {
        targets: surface.snapshot(),
    };
    let json = serde_json::to_string(&snapshot)?;
    let r = timeout(WS_SEND_TIMEOUT, sender.send(Message::Text(json.into()))).await;
    if r.is_err() || r.unwrap_or(Ok(())).is_err() {
        return Ok(());
    }

    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(update) => {
                        let json = serde_json::to_string(&ViewerMessage::Update(update))?;
                        let r = timeout(WS_SEND_TIMEOUT, sender.send(Message::Text(json.into()))).await;
                        if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("WebSocket /ws/surface viewer lagged, skipped {} updates", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<KeyEvent>(text.as_str()) {
                            Ok(event) => {
                                if keys_tx.send(event).await.is_err() {
                                    tracing::debug!("Key event channel closed");
                                }
                            }
                            Err(e) => tracing::debug!(error = %e, "Ignoring non-key viewer message"),
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(error = %e, "Viewer socket error");
                        break;
                    }
                }
            }
            _ = ping_interval.tick() => {
                let r = timeout(WS_SEND_TIMEOUT, sender.send(Message::Ping(Bytes::new()))).await;
                if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                    break;
                }
            }
        }
    }
    tracing::info!("Viewer disconnected from surface stream");
    Ok(())
}
