//! # ShelfLife API - Backend Boundary and Shared State
//!
//! Everything between the ShelfLife Studio UI and the REST backend:
//! wire types, form validation, the blocking HTTP client, the shared
//! lifecycle containers, and the worker thread that ties them together.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        UI thread                         │
//! │  screens poll SharedAppState on a timer (read_if_dirty)  │
//! │  and dispatch commands through ApiWorker                 │
//! └──────────────┬───────────────────────────▲───────────────┘
//!                │ ApiCommand                │ state writes
//! ┌──────────────▼───────────────────────────┴───────────────┐
//! │                      worker thread                       │
//! │  ApiClient (blocking reqwest) → /api/predict             │
//! │                                 /api/chat                │
//! │                                 /api/voice/transcribe    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`data`] | Wire types and domain enums |
//! | [`form`] | Prediction form validation |
//! | [`config`] | Base URL and timeout resolution |
//! | [`client`] | Blocking HTTP client |
//! | [`lifecycle`] | Shared panel state with generation tokens |
//! | [`worker`] | Background request execution |
//! | [`error`] | Request error taxonomy |

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod form;
pub mod lifecycle;
pub mod worker;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use data::{
    current_timestamp, ChatMessage, ChatResponse, FoodType, MessageRole, PredictionRequest,
    PredictionResult, RiskLevel, StorageType, TranscriptionResponse,
};
pub use error::ApiError;
pub use form::{PredictionForm, ValidationError};
pub use lifecycle::{
    ChatLog, ChatView, Phase, PredictionState, PredictionView, SharedAppState, VoicePhase,
    VoiceState, VoiceView,
};
pub use worker::{ApiCommand, ApiEvent, ApiWorker};
