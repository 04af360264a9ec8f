//! Blocking HTTP client for the ShelfLife backend.
//!
//! Endpoints:
//!
//!   POST /api/predict          → shelf-life estimate for a validated form
//!   POST /api/chat             → assistant reply for a user message
//!   POST /api/voice/transcribe → text for a recorded WAV clip (multipart)
//!
//! All calls block the calling thread; the [`ApiWorker`](crate::worker::ApiWorker)
//! runs them on its own thread so the UI never waits on the network.

use std::time::Duration;

use crate::config::ApiConfig;
use crate::data::{
    ChatRequest, ChatResponse, PredictionRequest, PredictionResult, TranscriptionResponse,
};
use crate::error::ApiError;

/// Thin blocking client over the three backend endpoints
pub struct ApiClient {
    base_url: String,
    timeout_secs: u64,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            http,
        })
    }

    /// `POST /api/predict`
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        let url = format!("{}/api/predict", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| ApiError::from_reqwest(e, self.timeout_secs))?;

        Self::decode(resp)
    }

    /// `POST /api/chat`
    pub fn send_chat(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<ChatResponse, ApiError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            message: message.to_string(),
            context: context.map(str::to_string),
        };
        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| ApiError::from_reqwest(e, self.timeout_secs))?;

        Self::decode(resp)
    }

    /// `POST /api/voice/transcribe` with the recording as multipart field `audio`
    pub fn transcribe(&self, wav: Vec<u8>) -> Result<TranscriptionResponse, ApiError> {
        let url = format!("{}/api/voice/transcribe", self.base_url);
        let part = reqwest::blocking::multipart::Part::bytes(wav)
            .file_name("recording.wav")
            .mime_str("audio/wav")
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = reqwest::blocking::multipart::Form::new().part("audio", part);

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| ApiError::from_reqwest(e, self.timeout_secs))?;

        Self::decode(resp)
    }

    fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        resp.json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}
