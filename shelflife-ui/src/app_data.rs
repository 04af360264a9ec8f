//! Shared App Data for Makepad Scope Injection
//!
//! `ShelfAppData` bundles the shared state every screen needs: the lifecycle
//! containers, the API worker handle, and the runtime theme.
//!
//! Makepad widgets cannot take constructor parameters, so the root app
//! creates a single instance and passes it down through `Scope`:
//!
//! ```rust,ignore
//! // In the root app
//! self.ui.handle_event(cx, event, &mut Scope::with_data(&mut self.app_data));
//!
//! // In a screen
//! if let Some(data) = scope.data.get::<ShelfAppData>() {
//!     if let Some(view) = data.state().prediction.read_if_dirty() {
//!         // re-render from the snapshot
//!     }
//! }
//! ```

use std::sync::Arc;

use shelflife_api::{ApiConfig, ApiWorker, PredictionRequest, SharedAppState};

use crate::theme::ShelfTheme;

/// Shared data passed through Makepad's Scope mechanism.
///
/// The lifecycle containers inside are thread-safe and shared with the
/// worker thread via `Arc::clone()`; this struct itself is used from the
/// UI thread only.
pub struct ShelfAppData {
    /// Panel lifecycle state (thread-safe, shareable)
    state: Arc<SharedAppState>,

    /// Handle to the backend worker thread
    worker: Arc<ApiWorker>,

    /// Current theme settings
    theme: ShelfTheme,

    /// Resolved backend configuration
    config: ApiConfig,
}

impl ShelfAppData {
    /// Create app data, spawning the backend worker against the config
    pub fn new(config: ApiConfig) -> Self {
        let state = SharedAppState::new();
        let worker = Arc::new(ApiWorker::new(config.clone(), Arc::clone(&state)));
        Self {
            state,
            worker,
            theme: ShelfTheme::default(),
            config,
        }
    }

    // --- Accessors ---

    /// Get shared panel state
    pub fn state(&self) -> &Arc<SharedAppState> {
        &self.state
    }

    /// Get the worker handle
    pub fn worker(&self) -> &Arc<ApiWorker> {
        &self.worker
    }

    /// Get current theme
    pub fn theme(&self) -> &ShelfTheme {
        &self.theme
    }

    /// Get mutable theme
    pub fn theme_mut(&mut self) -> &mut ShelfTheme {
        &mut self.theme
    }

    /// Get backend configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // --- Dispatch helpers ---
    //
    // Each pairs the lifecycle transition with the worker command so a
    // screen cannot forget the generation token. When the worker queue is
    // full the worker settles the container as an error itself, so a
    // rejected dispatch never leaves a panel stuck pending.

    /// Begin a prediction and hand it to the worker
    pub fn dispatch_predict(&self, request: PredictionRequest) {
        let generation = self.state.prediction.begin();
        if !self.worker.predict(generation, request) {
            log::warn!("prediction dispatch rejected");
        }
    }

    /// Append the user message, mark pending, and hand the send to the worker
    pub fn dispatch_chat(&self, message: String, context: Option<String>) {
        let generation = self.state.chat.send(message.clone());
        if !self.worker.send_chat(generation, message, context) {
            log::warn!("chat dispatch rejected");
        }
    }

    /// Move the voice session to processing and hand the clip to the worker.
    /// No-op unless a recording is active.
    pub fn dispatch_transcribe(&self, wav: Vec<u8>) {
        if let Some(generation) = self.state.voice.begin_processing() {
            if !self.worker.transcribe(generation, wav) {
                log::warn!("transcription dispatch rejected");
            }
        }
    }

    // --- Convenience ---

    /// Check if dark mode is enabled
    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Get dark mode animation value (0.0 = light, 1.0 = dark)
    pub fn dark_mode_value(&self) -> f64 {
        self.theme.dark_mode_anim
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.theme.toggle();
    }
}

impl Default for ShelfAppData {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelflife_api::{FoodType, Phase, StorageType, VoicePhase};

    fn test_data() -> ShelfAppData {
        // Discard port, connection refused without touching the network
        ShelfAppData::new(ApiConfig::from_parts("http://127.0.0.1:9", 2))
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut data = test_data();

        assert!(!data.is_dark_mode());
        data.toggle_dark_mode();
        assert!(data.is_dark_mode());
    }

    #[test]
    fn test_dispatch_predict_enters_pending() {
        let data = test_data();
        data.dispatch_predict(PredictionRequest {
            food_type: FoodType::Fruits,
            storage_type: StorageType::Pantry,
            temperature: 20.0,
            humidity: 50.0,
            days_stored: 1,
        });

        // Pending immediately; the worker settles it later
        let view = data.state().prediction.snapshot();
        assert!(matches!(view.phase, Phase::Pending | Phase::Error));
    }

    #[test]
    fn test_dispatch_chat_appends_user_message() {
        let data = test_data();
        data.dispatch_chat("is this cheese ok?".to_string(), None);
        assert_eq!(data.state().chat.len(), 1);
    }

    #[test]
    fn test_dispatch_transcribe_requires_recording() {
        let data = test_data();
        // No recording active: nothing happens
        data.dispatch_transcribe(vec![0u8; 44]);
        assert_eq!(data.state().voice.phase(), VoicePhase::Idle);

        data.state().voice.begin_recording();
        data.dispatch_transcribe(vec![0u8; 44]);
        assert_eq!(data.state().voice.phase(), VoicePhase::Processing);
    }
}
