// Lifecycle control: start the polling timer, stop it on the cancel key.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};
use tracing::Instrument;

use crate::gateway::QueryGateway;
use crate::presenter::Presenter;
use crate::surface::PresentationSurface;

/// Period between dynamic-data polls. Not configurable.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Remote-control Back/Return key.
pub const DEFAULT_CANCEL_KEY_CODE: u32 = 10009;

/// A key press from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub key_code: u32,
}

impl KeyEvent {
    pub fn new(key_code: u32) -> Self {
        Self { key_code }
    }
}

/// Owned handle to the repeating poll timer. The timer stops on `stop` or
/// when the handle is dropped. Category tasks already in flight are not
/// cancelled and may still write afterwards.
pub struct PollingHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl PollingHandle {
    pub fn is_running(&self) -> bool {
        self.shutdown_tx.is_some()
    }

    /// Cancel the timer. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        match self.shutdown_tx.take() {
            Some(tx) => {
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }

    /// Wait for the timer task to exit (after `stop`).
    pub async fn join(self) {
        let PollingHandle { shutdown_tx, task } = self;
        drop(shutdown_tx);
        if let Err(e) = task.await {
            tracing::warn!(error = %e, "poll timer task did not complete");
        }
    }
}

/// Poll once now, then once per `period`.
pub fn start<G, S>(presenter: Presenter<G, S>, period: Duration) -> PollingHandle
where
    G: QueryGateway,
    S: PresentationSurface,
{
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
    let period_ms = period.as_millis() as u64;
    let span = tracing::span!(tracing::Level::DEBUG, "poller", period_ms);
    let task = tokio::spawn(
        async move {
            let mut tick = interval(period);
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Poll timer stopped");
                        break;
                    }
                    _ = tick.tick() => {
                        // Detached: cycles are never joined or cancelled here.
                        let _ = presenter.update_dynamic_data();
                    }
                }
            }
        }
        .instrument(span),
    );
    PollingHandle {
        shutdown_tx: Some(shutdown_tx),
        task,
    }
}

/// Cancel the timer owned by `handle`. Idempotent.
pub fn stop(handle: &mut PollingHandle) -> bool {
    handle.stop()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Running,
    Stopped,
}

/// Running once initialized; Stopped after the cancel key. There is no way
/// back to Running.
pub struct LifecycleControl {
    cancel_key_code: u32,
    polling: PollingHandle,
}

impl LifecycleControl {
    /// Fetch static info, then start polling dynamic data.
    pub fn init<G, S>(presenter: &Presenter<G, S>, period: Duration, cancel_key_code: u32) -> Self
    where
        G: QueryGateway,
        S: PresentationSurface,
    {
        tracing::info!(
            period_ms = period.as_millis() as u64,
            cancel_key_code,
            "System status module initialized; starting data polling"
        );
        let _ = presenter.fetch_static_info();
        let polling = start(presenter.clone(), period);
        Self {
            cancel_key_code,
            polling,
        }
    }

    pub fn state(&self) -> LifecycleState {
        if self.polling.is_running() {
            LifecycleState::Running
        } else {
            LifecycleState::Stopped
        }
    }

    /// React to a key press. Returns true only on the Running -> Stopped
    /// transition; other keys and repeated cancels are ignored.
    pub fn on_key(&mut self, event: KeyEvent) -> bool {
        if event.key_code != self.cancel_key_code {
            return false;
        }
        if stop(&mut self.polling) {
            tracing::info!(
                key_code = event.key_code,
                "Cancel key pressed; polling stopped"
            );
            true
        } else {
            tracing::debug!(key_code = event.key_code, "Cancel key ignored; already stopped");
            false
        }
    }

    /// Feed key events until the sender side closes.
    pub async fn handle_keys(&mut self, keys: &mut mpsc::Receiver<KeyEvent>) {
        while let Some(event) = keys.recv().await {
            self.on_key(event);
        }
        tracing::debug!("Key event channel closed");
    }

    /// Stop polling (if still running) and wait for the timer task.
    pub async fn shutdown(mut self) {
        self.polling.stop();
        self.polling.join().await;
    }
}
