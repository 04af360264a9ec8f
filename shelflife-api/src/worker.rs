//! Backend worker for ShelfLife Studio
//!
//! Runs all HTTP calls on a dedicated thread so the UI never blocks on the
//! network. Commands flow in over a bounded channel; completions are written
//! directly into the shared lifecycle containers (with their generation
//! tokens), and coarse request outcomes are emitted as events for the
//! status bar.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::data::{ChatMessage, PredictionRequest};
use crate::lifecycle::SharedAppState;

/// Commands sent from UI to the worker thread.
///
/// Each carries the generation token returned by the matching lifecycle
/// `begin`/`send` call; the container uses it to drop stale completions.
#[derive(Debug, Clone)]
pub enum ApiCommand {
    Predict {
        generation: u64,
        request: PredictionRequest,
    },
    SendChat {
        generation: u64,
        message: String,
        context: Option<String>,
    },
    Transcribe {
        generation: u64,
        wav: Vec<u8>,
    },
}

impl ApiCommand {
    fn endpoint(&self) -> &'static str {
        match self {
            ApiCommand::Predict { .. } => "predict",
            ApiCommand::SendChat { .. } => "chat",
            ApiCommand::Transcribe { .. } => "transcribe",
        }
    }
}

/// Events sent from the worker to the UI.
///
/// Panel data travels through [`SharedAppState`]; events only carry
/// coarse outcomes for backend-reachability display.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    /// A request completed with a 2xx response
    RequestSucceeded { endpoint: &'static str },
    /// A request failed (transport, timeout, status, or decode)
    RequestFailed {
        endpoint: &'static str,
        message: String,
    },
}

/// Capacity of the UI-to-worker command queue
const COMMAND_QUEUE_SIZE: usize = 100;

/// Error settled into a container when its command could not be queued
const QUEUE_FULL_ERROR: &str = "Too many requests in flight, try again";

/// Handle to the backend worker thread
pub struct ApiWorker {
    command_tx: Sender<ApiCommand>,
    event_rx: Receiver<ApiEvent>,
    event_tx: Sender<ApiEvent>,
    state: Arc<SharedAppState>,
    worker_handle: Option<thread::JoinHandle<()>>,
    stop_tx: Option<Sender<()>>,
}

impl ApiWorker {
    /// Spawn the worker thread against the given backend
    pub fn new(config: ApiConfig, state: Arc<SharedAppState>) -> Self {
        let (command_tx, command_rx) = bounded(COMMAND_QUEUE_SIZE);
        let (event_tx, event_rx) = bounded(100);
        let (stop_tx, stop_rx) = bounded(1);

        let handle = {
            let state = Arc::clone(&state);
            let event_tx = event_tx.clone();
            thread::spawn(move || {
                Self::run_worker(config, state, command_rx, event_tx, stop_rx);
            })
        };

        Self {
            command_tx,
            event_rx,
            event_tx,
            state,
            worker_handle: Some(handle),
            stop_tx: Some(stop_tx),
        }
    }

    /// Send a command to the worker without blocking the UI thread
    pub fn send_command(&self, cmd: ApiCommand) -> bool {
        self.command_tx.try_send(cmd).is_ok()
    }

    /// Dispatch a prediction request.
    /// A dispatch the queue cannot take settles the container as an error
    /// immediately, so nothing is ever left pending.
    pub fn predict(&self, generation: u64, request: PredictionRequest) -> bool {
        if self.send_command(ApiCommand::Predict {
            generation,
            request,
        }) {
            return true;
        }
        self.state
            .prediction
            .complete(generation, Err(QUEUE_FULL_ERROR.to_string()));
        self.report_rejected("predict")
    }

    /// Dispatch a chat message
    pub fn send_chat(&self, generation: u64, message: String, context: Option<String>) -> bool {
        if self.send_command(ApiCommand::SendChat {
            generation,
            message,
            context,
        }) {
            return true;
        }
        self.state
            .chat
            .complete(generation, Err(QUEUE_FULL_ERROR.to_string()));
        self.report_rejected("chat")
    }

    /// Dispatch a transcription of an assembled WAV clip
    pub fn transcribe(&self, generation: u64, wav: Vec<u8>) -> bool {
        if self.send_command(ApiCommand::Transcribe { generation, wav }) {
            return true;
        }
        self.state
            .voice
            .complete(generation, Err(QUEUE_FULL_ERROR.to_string()));
        self.report_rejected("transcribe")
    }

    /// Bookkeeping for a command the full queue rejected; always false
    fn report_rejected(&self, endpoint: &'static str) -> bool {
        log::warn!("{} dispatch rejected, command queue full", endpoint);
        let _ = self.event_tx.try_send(ApiEvent::RequestFailed {
            endpoint,
            message: QUEUE_FULL_ERROR.to_string(),
        });
        false
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<ApiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Worker thread main loop
    fn run_worker(
        config: ApiConfig,
        state: Arc<SharedAppState>,
        command_rx: Receiver<ApiCommand>,
        event_tx: Sender<ApiEvent>,
        stop_rx: Receiver<()>,
    ) {
        log::info!("API worker started, backend {}", config.base_url);

        let client = match ApiClient::new(&config) {
            Ok(client) => client,
            Err(e) => {
                // Without a client every command settles as an error.
                log::error!("Failed to build HTTP client: {}", e);
                Self::run_degraded(state, command_rx, event_tx, stop_rx, e.to_string());
                return;
            }
        };

        'main: loop {
            if stop_rx.try_recv().is_ok() {
                log::info!("API worker received stop signal");
                break;
            }

            while let Ok(cmd) = command_rx.try_recv() {
                Self::handle_command(&client, &state, &event_tx, cmd);
                // Drop the backlog when a stop arrives mid-drain
                if stop_rx.try_recv().is_ok() {
                    log::info!("API worker received stop signal");
                    break 'main;
                }
            }

            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        log::info!("API worker stopped");
    }

    fn handle_command(
        client: &ApiClient,
        state: &SharedAppState,
        event_tx: &Sender<ApiEvent>,
        cmd: ApiCommand,
    ) {
        let endpoint = cmd.endpoint();
        let failed_message;

        match cmd {
            ApiCommand::Predict {
                generation,
                request,
            } => {
                log::debug!("predict: {:?}", request);
                let outcome = client.predict(&request).map_err(|e| e.to_string());
                failed_message = outcome.as_ref().err().cloned();
                if !state.prediction.complete(generation, outcome) {
                    log::debug!("predict completion discarded (superseded)");
                    return;
                }
            }
            ApiCommand::SendChat {
                generation,
                message,
                context,
            } => {
                let outcome = client
                    .send_chat(&message, context.as_deref())
                    .map(|resp| ChatMessage::bot(resp.response))
                    .map_err(|e| e.to_string());
                failed_message = outcome.as_ref().err().cloned();
                if !state.chat.complete(generation, outcome) {
                    log::debug!("chat completion discarded (superseded or cleared)");
                    return;
                }
            }
            ApiCommand::Transcribe { generation, wav } => {
                log::debug!("transcribe: {} bytes", wav.len());
                let outcome = client
                    .transcribe(wav)
                    .map(|resp| resp.text)
                    .map_err(|e| e.to_string());
                failed_message = outcome.as_ref().err().cloned();
                if !state.voice.complete(generation, outcome) {
                    log::debug!("transcription discarded (reset)");
                    return;
                }
            }
        }

        let event = match failed_message {
            None => ApiEvent::RequestSucceeded { endpoint },
            Some(message) => {
                log::warn!("{} request failed: {}", endpoint, message);
                ApiEvent::RequestFailed { endpoint, message }
            }
        };
        let _ = event_tx.send(event);
    }

    /// Fallback loop when the HTTP client could not be constructed
    fn run_degraded(
        state: Arc<SharedAppState>,
        command_rx: Receiver<ApiCommand>,
        event_tx: Sender<ApiEvent>,
        stop_rx: Receiver<()>,
        error: String,
    ) {
        loop {
            if stop_rx.try_recv().is_ok() {
                break;
            }
            while let Ok(cmd) = command_rx.try_recv() {
                let endpoint = cmd.endpoint();
                match cmd {
                    ApiCommand::Predict { generation, .. } => {
                        state.prediction.complete(generation, Err(error.clone()));
                    }
                    ApiCommand::SendChat { generation, .. } => {
                        state.chat.complete(generation, Err(error.clone()));
                    }
                    ApiCommand::Transcribe { generation, .. } => {
                        state.voice.complete(generation, Err(error.clone()));
                    }
                }
                let _ = event_tx.send(ApiEvent::RequestFailed {
                    endpoint,
                    message: error.clone(),
                });
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
    }
}

impl Drop for ApiWorker {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FoodType, StorageType};
    use crate::lifecycle::Phase;
    use std::time::{Duration, Instant};

    fn unreachable_config() -> ApiConfig {
        // Discard port: connection refused without touching the network
        ApiConfig::from_parts("http://127.0.0.1:9", 2)
    }

    #[test]
    fn test_failed_predict_settles_error() {
        let state = SharedAppState::new();
        let worker = ApiWorker::new(unreachable_config(), Arc::clone(&state));

        let gen = state.prediction.begin();
        assert!(worker.predict(
            gen,
            PredictionRequest {
                food_type: FoodType::Meat,
                storage_type: StorageType::Freezer,
                temperature: -18.0,
                humidity: 30.0,
                days_stored: 10,
            }
        ));

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.prediction.snapshot().phase == Phase::Pending {
            assert!(Instant::now() < deadline, "prediction never settled");
            std::thread::sleep(Duration::from_millis(20));
        }

        let view = state.prediction.snapshot();
        assert_eq!(view.phase, Phase::Error);
        assert!(view.result.is_none());
        assert!(view.error.is_some());

        let events = worker.poll_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, ApiEvent::RequestFailed { endpoint, .. } if *endpoint == "predict")));
    }

    #[test]
    fn test_failed_chat_keeps_user_message() {
        let state = SharedAppState::new();
        let worker = ApiWorker::new(unreachable_config(), Arc::clone(&state));

        let gen = state.chat.send("anyone there?");
        assert!(worker.send_chat(gen, "anyone there?".to_string(), None));

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.chat.snapshot().phase == Phase::Pending {
            assert!(Instant::now() < deadline, "chat never settled");
            std::thread::sleep(Duration::from_millis(20));
        }

        let view = state.chat.snapshot();
        assert_eq!(view.messages.len(), 1);
        assert_eq!(view.phase, Phase::Error);
        assert!(view.error.is_some());
    }

    #[test]
    fn test_full_queue_settles_error_without_blocking() {
        // Accepts connections but never answers, so the worker stays busy
        // on its first request long enough for the queue to fill.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let config = ApiConfig::from_parts(format!("http://{}", addr), 1);

        let state = SharedAppState::new();
        let worker = ApiWorker::new(config, Arc::clone(&state));

        let request = PredictionRequest {
            food_type: FoodType::Dairy,
            storage_type: StorageType::Refrigerator,
            temperature: 4.0,
            humidity: 60.0,
            days_stored: 0,
        };

        // At most one command is in flight plus COMMAND_QUEUE_SIZE queued;
        // the tail of this burst must be rejected, not block the caller.
        let mut rejected = false;
        for _ in 0..COMMAND_QUEUE_SIZE + 2 {
            let gen = state.prediction.begin();
            if !worker.predict(gen, request.clone()) {
                rejected = true;
                break;
            }
        }
        assert!(rejected, "command queue never filled");

        // The rejected dispatch settles immediately instead of staying pending
        let view = state.prediction.snapshot();
        assert_eq!(view.phase, Phase::Error);
        assert!(view.error.is_some());

        let events = worker.poll_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, ApiEvent::RequestFailed { endpoint, .. } if *endpoint == "predict")));

        drop(listener);
    }

    #[test]
    fn test_worker_drop_joins_thread() {
        let state = SharedAppState::new();
        let worker = ApiWorker::new(unreachable_config(), Arc::clone(&state));
        drop(worker);
    }
}
