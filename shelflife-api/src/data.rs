//! # Data Types for the ShelfLife Backend
//!
//! Core types exchanged between the ShelfLife Studio UI and the REST backend.
//!
//! ## Overview
//!
//! | Type | Purpose | Direction |
//! |------|---------|-----------|
//! | [`PredictionRequest`] | Validated shelf-life query | UI → API |
//! | [`PredictionResult`] | Shelf-life estimate | API → UI |
//! | [`ChatRequest`] / [`ChatResponse`] | Assistant conversation turn | Both |
//! | [`TranscriptionResponse`] | Voice-to-text result | API → UI |
//! | [`ChatMessage`] | Conversation messages for display | UI internal |

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Food category for a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    Dairy,
    Meat,
    Vegetables,
    Fruits,
    Bakery,
    Seafood,
}

impl FoodType {
    /// All variants, in dropdown display order
    pub const ALL: [FoodType; 6] = [
        FoodType::Dairy,
        FoodType::Meat,
        FoodType::Vegetables,
        FoodType::Fruits,
        FoodType::Bakery,
        FoodType::Seafood,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FoodType::Dairy => "Dairy",
            FoodType::Meat => "Meat",
            FoodType::Vegetables => "Vegetables",
            FoodType::Fruits => "Fruits",
            FoodType::Bakery => "Bakery",
            FoodType::Seafood => "Seafood",
        }
    }
}

/// Storage location for a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageType {
    Refrigerator,
    Freezer,
    Pantry,
}

impl StorageType {
    /// All variants, in dropdown display order
    pub const ALL: [StorageType; 3] = [
        StorageType::Refrigerator,
        StorageType::Freezer,
        StorageType::Pantry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StorageType::Refrigerator => "Refrigerator",
            StorageType::Freezer => "Freezer",
            StorageType::Pantry => "Pantry",
        }
    }
}

/// Spoilage risk as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Indicator color for shaders: 0 = green, 1 = amber, 2 = red
    pub fn severity(&self) -> f64 {
        match self {
            RiskLevel::Low => 0.0,
            RiskLevel::Medium => 1.0,
            RiskLevel::High => 2.0,
        }
    }
}

/// Body of `POST /api/predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    pub food_type: FoodType,
    pub storage_type: StorageType,
    pub temperature: f64,
    pub humidity: f64,
    pub days_stored: u32,
}

/// Response of `POST /api/predict`
///
/// Replaced wholesale on every successful prediction, never merged
/// field-by-field with a previous result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_shelf_life: f64,
    pub freshness_score: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    /// Remaining shelf life for display, e.g. "5 days" or "1 day"
    pub fn shelf_life_label(&self) -> String {
        let days = self.predicted_shelf_life.round().max(0.0) as u64;
        if days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", days)
        }
    }

    /// Freshness score for display, e.g. "82%"
    pub fn freshness_label(&self) -> String {
        format!("{}%", self.freshness_score.round().clamp(0.0, 100.0) as u64)
    }
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Response of `POST /api/chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response of `POST /api/voice/transcribe`
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

/// Chat message for conversation display.
///
/// Messages are append-only: once pushed into a [`ChatLog`](crate::ChatLog)
/// they are never edited or removed, only cleared wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique id, derived from the creation timestamp
    pub id: String,
    /// Message content
    pub content: String,
    /// Who authored the message
    pub role: MessageRole,
    /// Unix timestamp in milliseconds
    pub timestamp: u64,
}

impl ChatMessage {
    /// Create a user message timestamped now
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(content, MessageRole::User)
    }

    /// Create a bot message timestamped now
    pub fn bot(content: impl Into<String>) -> Self {
        Self::with_role(content, MessageRole::Bot)
    }

    fn with_role(content: impl Into<String>, role: MessageRole) -> Self {
        let timestamp = current_timestamp();
        Self {
            id: next_message_id(timestamp),
            content: content.into(),
            role,
            timestamp,
        }
    }

    /// Display name for the message author
    pub fn display_name(&self) -> &'static str {
        match self.role {
            MessageRole::User => "You",
            MessageRole::Bot => "ShelfLife AI",
        }
    }
}

/// Message author in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

/// Get current unix timestamp in milliseconds
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

// Sequence suffix keeps ids unique when two messages land in the same millisecond.
fn next_message_id(timestamp: u64) -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("msg-{}-{}", timestamp, seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_request_wire_format() {
        let request = PredictionRequest {
            food_type: FoodType::Dairy,
            storage_type: StorageType::Refrigerator,
            temperature: 4.0,
            humidity: 60.0,
            days_stored: 2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["food_type"], "Dairy");
        assert_eq!(json["storage_type"], "Refrigerator");
        assert_eq!(json["temperature"], 4.0);
        assert_eq!(json["humidity"], 60.0);
        assert_eq!(json["days_stored"], 2);
    }

    #[test]
    fn test_prediction_result_decodes_and_formats() {
        let json = r#"{
            "predicted_shelf_life": 5,
            "freshness_score": 82,
            "risk_level": "low",
            "recommendations": ["Keep refrigerated below 4C"]
        }"#;

        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.shelf_life_label(), "5 days");
        assert_eq!(result.freshness_label(), "82%");
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.risk_level.label(), "low");
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_shelf_life_label_singular() {
        let result = PredictionResult {
            predicted_shelf_life: 1.2,
            freshness_score: 40.0,
            risk_level: RiskLevel::High,
            recommendations: vec![],
        };
        assert_eq!(result.shelf_life_label(), "1 day");
    }

    #[test]
    fn test_chat_request_skips_missing_context() {
        let request = ChatRequest {
            message: "How long does milk last?".to_string(),
            context: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("context").is_none());

        let request = ChatRequest {
            message: "And frozen?".to_string(),
            context: Some("previous: milk".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["context"], "previous: milk");
    }

    #[test]
    fn test_message_ids_unique() {
        let a = ChatMessage::user("first");
        let b = ChatMessage::user("second");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("msg-"));
    }

    #[test]
    fn test_risk_level_roundtrip() {
        let level: RiskLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(level, RiskLevel::Medium);
        assert_eq!(level.severity(), 1.0);
    }
}
