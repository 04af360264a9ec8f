//! Shared request-lifecycle state for UI↔worker communication
//!
//! Each panel owns one container here. The worker thread writes completions
//! into the containers; screens poll them on a UI timer. Dirty tracking keeps
//! redraws cheap: a screen only rebuilds its view when something changed.
//!
//! Every container carries a generation token. Starting a request (or
//! clearing the container) bumps the generation; a completion carrying a
//! stale generation is discarded. This closes two races at once: a second
//! request superseding an in-flight one, and a response arriving after the
//! user cleared or reset the panel.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::data::{ChatMessage, PredictionResult};

/// Lifecycle status of a panel's most recent request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

#[derive(Default)]
struct PredictionInner {
    phase: Phase,
    result: Option<PredictionResult>,
    error: Option<String>,
    generation: u64,
}

/// Snapshot of the prediction panel state
#[derive(Debug, Clone, Default)]
pub struct PredictionView {
    pub phase: Phase,
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
}

/// Lifecycle container for the predict panel
pub struct PredictionState {
    inner: RwLock<PredictionInner>,
    dirty: AtomicBool,
}

impl PredictionState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PredictionInner::default()),
            dirty: AtomicBool::new(false),
        }
    }

    /// Enter pending, clearing any previous result and error.
    /// Returns the generation token the eventual completion must carry.
    pub fn begin(&self) -> u64 {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.phase = Phase::Pending;
        inner.result = None;
        inner.error = None;
        self.dirty.store(true, Ordering::Release);
        inner.generation
    }

    /// Settle a request. Returns false if the completion was stale
    /// (superseded by a newer begin or a reset) and was discarded.
    pub fn complete(&self, generation: u64, outcome: Result<PredictionResult, String>) -> bool {
        let mut inner = self.inner.write();
        if generation != inner.generation {
            return false;
        }
        match outcome {
            Ok(result) => {
                inner.phase = Phase::Success;
                inner.result = Some(result);
                inner.error = None;
            }
            Err(message) => {
                inner.phase = Phase::Error;
                inner.result = None;
                inner.error = Some(message);
            }
        }
        self.dirty.store(true, Ordering::Release);
        true
    }

    /// Return to idle. An in-flight request keeps running but its
    /// response will be discarded by the generation check.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.phase = Phase::Idle;
        inner.result = None;
        inner.error = None;
        self.dirty.store(true, Ordering::Release);
    }

    /// Snapshot the state if it changed since the last read
    pub fn read_if_dirty(&self) -> Option<PredictionView> {
        if self.dirty.swap(false, Ordering::AcqRel) {
            Some(self.snapshot())
        } else {
            None
        }
    }

    /// Snapshot the state unconditionally
    pub fn snapshot(&self) -> PredictionView {
        let inner = self.inner.read();
        PredictionView {
            phase: inner.phase,
            result: inner.result.clone(),
            error: inner.error.clone(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.read().phase == Phase::Pending
    }
}

impl Default for PredictionState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ChatInner {
    messages: Vec<ChatMessage>,
    phase: Phase,
    error: Option<String>,
    generation: u64,
}

/// Snapshot of the chat panel state
#[derive(Debug, Clone, Default)]
pub struct ChatView {
    pub messages: Vec<ChatMessage>,
    pub phase: Phase,
    pub error: Option<String>,
}

/// Lifecycle container for the chat panel.
///
/// The user message is appended synchronously in [`send`](Self::send),
/// before the network is touched, so it is visible even when the request
/// later fails. Exactly one bot message is appended per successful send.
pub struct ChatLog {
    inner: RwLock<ChatInner>,
    dirty: AtomicBool,
    max_messages: usize,
}

impl ChatLog {
    pub fn new(max_messages: usize) -> Self {
        Self {
            inner: RwLock::new(ChatInner::default()),
            dirty: AtomicBool::new(false),
            max_messages,
        }
    }

    /// Append the user message and enter pending.
    /// Returns the generation token for the completion.
    pub fn send(&self, text: impl Into<String>) -> u64 {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.phase = Phase::Pending;
        inner.error = None;
        inner.messages.push(ChatMessage::user(text));
        if inner.messages.len() > self.max_messages {
            inner.messages.remove(0);
        }
        self.dirty.store(true, Ordering::Release);
        inner.generation
    }

    /// Settle a send. On success the bot message is appended; on failure
    /// the error is stored and no message is added. Stale completions
    /// (after a newer send or a clear) are discarded.
    pub fn complete(&self, generation: u64, outcome: Result<ChatMessage, String>) -> bool {
        let mut inner = self.inner.write();
        if generation != inner.generation {
            return false;
        }
        match outcome {
            Ok(message) => {
                inner.phase = Phase::Success;
                inner.error = None;
                inner.messages.push(message);
                if inner.messages.len() > self.max_messages {
                    inner.messages.remove(0);
                }
            }
            Err(message) => {
                inner.phase = Phase::Error;
                inner.error = Some(message);
            }
        }
        self.dirty.store(true, Ordering::Release);
        true
    }

    /// Empty the conversation and clear any error.
    /// Bumps the generation so an in-flight reply cannot append to the
    /// emptied log.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.phase = Phase::Idle;
        inner.error = None;
        inner.messages.clear();
        self.dirty.store(true, Ordering::Release);
    }

    /// Snapshot the state if it changed since the last read
    pub fn read_if_dirty(&self) -> Option<ChatView> {
        if self.dirty.swap(false, Ordering::AcqRel) {
            Some(self.snapshot())
        } else {
            None
        }
    }

    /// Snapshot the state unconditionally
    pub fn snapshot(&self) -> ChatView {
        let inner = self.inner.read();
        ChatView {
            messages: inner.messages.clone(),
            phase: inner.phase,
            error: inner.error.clone(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.read().phase == Phase::Pending
    }

    pub fn len(&self) -> usize {
        self.inner.read().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().messages.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Voice
// ---------------------------------------------------------------------------

/// Phase of the voice panel's recording session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoicePhase {
    #[default]
    Idle,
    Recording,
    Processing,
}

#[derive(Default)]
struct VoiceInner {
    phase: VoicePhase,
    transcript: Option<String>,
    error: Option<String>,
    generation: u64,
}

/// Snapshot of the voice panel state
#[derive(Debug, Clone, Default)]
pub struct VoiceView {
    pub phase: VoicePhase,
    pub transcript: Option<String>,
    pub error: Option<String>,
}

/// Lifecycle container for the voice panel.
///
/// Owns the phase machine only; the audio stream itself is owned by the
/// screen's capture handle. Transitions that do not apply to the current
/// phase are no-ops.
pub struct VoiceState {
    inner: RwLock<VoiceInner>,
    dirty: AtomicBool,
}

impl VoiceState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(VoiceInner::default()),
            dirty: AtomicBool::new(false),
        }
    }

    /// Enter recording, clearing the previous attempt's transcript and
    /// error. Returns false (no state change) if already recording or
    /// processing.
    pub fn begin_recording(&self) -> bool {
        let mut inner = self.inner.write();
        if inner.phase != VoicePhase::Idle {
            return false;
        }
        inner.phase = VoicePhase::Recording;
        inner.transcript = None;
        inner.error = None;
        self.dirty.store(true, Ordering::Release);
        true
    }

    /// Record a capture-device acquisition failure: state stays idle,
    /// the error is surfaced to the panel.
    pub fn fail_capture(&self, message: impl Into<String>) {
        let mut inner = self.inner.write();
        inner.phase = VoicePhase::Idle;
        inner.error = Some(message.into());
        self.dirty.store(true, Ordering::Release);
    }

    /// Move from recording to processing. Valid only while recording;
    /// from any other phase this is a no-op and returns None.
    /// On success returns the generation token for the completion.
    pub fn begin_processing(&self) -> Option<u64> {
        let mut inner = self.inner.write();
        if inner.phase != VoicePhase::Recording {
            return None;
        }
        inner.generation += 1;
        inner.phase = VoicePhase::Processing;
        self.dirty.store(true, Ordering::Release);
        Some(inner.generation)
    }

    /// Settle a transcription. Stale completions are discarded.
    pub fn complete(&self, generation: u64, outcome: Result<String, String>) -> bool {
        let mut inner = self.inner.write();
        if generation != inner.generation {
            return false;
        }
        inner.phase = VoicePhase::Idle;
        match outcome {
            Ok(text) => {
                inner.transcript = Some(text);
                inner.error = None;
            }
            Err(message) => {
                inner.transcript = None;
                inner.error = Some(message);
            }
        }
        self.dirty.store(true, Ordering::Release);
        true
    }

    /// Clear transcript and error and discard any in-flight transcription.
    /// An active recording keeps running; stopping it stays explicit.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.transcript = None;
        inner.error = None;
        if inner.phase == VoicePhase::Processing {
            inner.phase = VoicePhase::Idle;
        }
        self.dirty.store(true, Ordering::Release);
    }

    /// Snapshot the state if it changed since the last read
    pub fn read_if_dirty(&self) -> Option<VoiceView> {
        if self.dirty.swap(false, Ordering::AcqRel) {
            Some(self.snapshot())
        } else {
            None
        }
    }

    /// Snapshot the state unconditionally
    pub fn snapshot(&self) -> VoiceView {
        let inner = self.inner.read();
        VoiceView {
            phase: inner.phase,
            transcript: inner.transcript.clone(),
            error: inner.error.clone(),
        }
    }

    pub fn phase(&self) -> VoicePhase {
        self.inner.read().phase
    }
}

impl Default for VoiceState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Shared root
// ---------------------------------------------------------------------------

/// Unified shared state for all panels.
///
/// Constructed once in the shell, shared with the worker thread via
/// `Arc::clone()`, and read by screens through scope-injected app data.
/// Containers outlive every view, so switching tabs never loses state.
pub struct SharedAppState {
    pub prediction: PredictionState,
    pub chat: ChatLog,
    pub voice: VoiceState,
}

impl SharedAppState {
    /// Create new shared state with default capacities
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            prediction: PredictionState::new(),
            chat: ChatLog::new(500),
            voice: VoiceState::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RiskLevel;

    fn sample_result(days: f64) -> PredictionResult {
        PredictionResult {
            predicted_shelf_life: days,
            freshness_score: 82.0,
            risk_level: RiskLevel::Low,
            recommendations: vec!["Keep refrigerated".to_string()],
        }
    }

    #[test]
    fn test_prediction_settles_success() {
        let state = PredictionState::new();
        assert!(state.read_if_dirty().is_none());

        let gen = state.begin();
        let view = state.read_if_dirty().unwrap();
        assert_eq!(view.phase, Phase::Pending);

        assert!(state.complete(gen, Ok(sample_result(5.0))));
        let view = state.read_if_dirty().unwrap();
        assert_eq!(view.phase, Phase::Success);
        assert_eq!(view.result.unwrap().shelf_life_label(), "5 days");
        assert!(view.error.is_none());

        // Dirty flag consumed
        assert!(state.read_if_dirty().is_none());
    }

    #[test]
    fn test_prediction_settles_error_without_result() {
        let state = PredictionState::new();
        let gen = state.begin();
        assert!(state.complete(gen, Err("HTTP 503: unavailable".to_string())));

        let view = state.snapshot();
        assert_eq!(view.phase, Phase::Error);
        assert!(view.result.is_none());
        assert_eq!(view.error.as_deref(), Some("HTTP 503: unavailable"));
    }

    #[test]
    fn test_second_predict_supersedes_first() {
        let state = PredictionState::new();
        let first = state.begin();
        let second = state.begin();

        // Second request resolves first
        assert!(state.complete(second, Ok(sample_result(3.0))));
        // First arrives late and is discarded
        assert!(!state.complete(first, Ok(sample_result(9.0))));

        let view = state.snapshot();
        assert_eq!(view.phase, Phase::Success);
        assert_eq!(view.result.unwrap().predicted_shelf_life, 3.0);
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let state = PredictionState::new();
        let gen = state.begin();
        state.complete(gen, Err("boom".to_string()));

        state.begin();
        let view = state.snapshot();
        assert_eq!(view.phase, Phase::Pending);
        assert!(view.result.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn test_reset_discards_in_flight_response() {
        let state = PredictionState::new();
        let gen = state.begin();
        state.reset();

        assert!(!state.complete(gen, Ok(sample_result(5.0))));
        let view = state.snapshot();
        assert_eq!(view.phase, Phase::Idle);
        assert!(view.result.is_none());
    }

    #[test]
    fn test_chat_appends_user_immediately_and_bot_on_success() {
        let chat = ChatLog::new(100);
        let gen = chat.send("How long does milk last?");

        let view = chat.snapshot();
        assert_eq!(view.messages.len(), 1);
        assert_eq!(view.messages[0].content, "How long does milk last?");
        assert_eq!(view.phase, Phase::Pending);

        assert!(chat.complete(gen, Ok(ChatMessage::bot("About a week refrigerated."))));
        let view = chat.snapshot();
        assert_eq!(view.messages.len(), 2);
        assert_eq!(view.messages[1].content, "About a week refrigerated.");
        assert_eq!(view.phase, Phase::Success);
    }

    #[test]
    fn test_chat_failure_keeps_user_message_no_bot() {
        let chat = ChatLog::new(100);
        let gen = chat.send("hello?");
        assert!(chat.complete(gen, Err("request failed: connection refused".to_string())));

        let view = chat.snapshot();
        assert_eq!(view.messages.len(), 1);
        assert_eq!(view.phase, Phase::Error);
        assert!(view.error.is_some());
    }

    #[test]
    fn test_chat_clear_discards_in_flight_reply() {
        let chat = ChatLog::new(100);
        let gen = chat.send("first");
        chat.clear();

        // Late reply must not repopulate the emptied log
        assert!(!chat.complete(gen, Ok(ChatMessage::bot("late reply"))));
        let view = chat.snapshot();
        assert!(view.messages.is_empty());
        assert_eq!(view.phase, Phase::Idle);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_chat_messages_keep_insertion_order() {
        let chat = ChatLog::new(100);
        let gen = chat.send("one");
        chat.complete(gen, Ok(ChatMessage::bot("reply one")));
        let gen = chat.send("two");
        chat.complete(gen, Ok(ChatMessage::bot("reply two")));

        let contents: Vec<_> = chat
            .snapshot()
            .messages
            .iter()
            .map(|m| m.content.clone())
            .collect();
        assert_eq!(contents, vec!["one", "reply one", "two", "reply two"]);
    }

    #[test]
    fn test_chat_max_size_enforced() {
        let chat = ChatLog::new(3);
        for i in 0..3 {
            let gen = chat.send(format!("q{}", i));
            chat.complete(gen, Ok(ChatMessage::bot(format!("a{}", i))));
        }
        assert_eq!(chat.len(), 3);
        // Oldest messages dropped first
        assert_eq!(chat.snapshot().messages[0].content, "a1");
    }

    #[test]
    fn test_voice_happy_path() {
        let voice = VoiceState::new();
        assert!(voice.begin_recording());
        assert_eq!(voice.phase(), VoicePhase::Recording);

        let gen = voice.begin_processing().unwrap();
        assert_eq!(voice.phase(), VoicePhase::Processing);

        assert!(voice.complete(gen, Ok("add milk to my list".to_string())));
        let view = voice.snapshot();
        assert_eq!(view.phase, VoicePhase::Idle);
        assert_eq!(view.transcript.as_deref(), Some("add milk to my list"));
        assert!(view.error.is_none());
    }

    #[test]
    fn test_voice_stop_from_idle_is_noop() {
        let voice = VoiceState::new();
        assert!(voice.begin_processing().is_none());
        assert_eq!(voice.phase(), VoicePhase::Idle);
        assert!(voice.read_if_dirty().is_none());
    }

    #[test]
    fn test_voice_start_while_recording_rejected() {
        let voice = VoiceState::new();
        assert!(voice.begin_recording());
        assert!(!voice.begin_recording());
        assert_eq!(voice.phase(), VoicePhase::Recording);
    }

    #[test]
    fn test_voice_capture_failure_stays_idle() {
        let voice = VoiceState::new();
        voice.fail_capture("capture unavailable: no input device");

        let view = voice.snapshot();
        assert_eq!(view.phase, VoicePhase::Idle);
        assert!(view.error.is_some());
    }

    #[test]
    fn test_voice_new_recording_clears_previous_attempt() {
        let voice = VoiceState::new();
        voice.begin_recording();
        let gen = voice.begin_processing().unwrap();
        voice.complete(gen, Ok("old transcript".to_string()));

        assert!(voice.begin_recording());
        let view = voice.snapshot();
        assert!(view.transcript.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn test_voice_reset_keeps_active_recording_but_drops_in_flight() {
        let voice = VoiceState::new();
        voice.begin_recording();
        voice.reset();
        // Recording is still active after reset
        assert_eq!(voice.phase(), VoicePhase::Recording);

        let gen = voice.begin_processing().unwrap();
        voice.reset();
        assert_eq!(voice.phase(), VoicePhase::Idle);
        // In-flight transcription is discarded
        assert!(!voice.complete(gen, Ok("stale".to_string())));
        assert!(voice.snapshot().transcript.is_none());
    }

    #[test]
    fn test_shared_state_construction() {
        let state = SharedAppState::new();
        assert!(state.chat.is_empty());
        assert!(!state.prediction.is_pending());
        assert_eq!(state.voice.phase(), VoicePhase::Idle);
    }
}
