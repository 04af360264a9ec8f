//! Prediction form state and validation.
//!
//! The form holds raw UI input (dropdown selections, text fields) and is the
//! only way to construct a [`PredictionRequest`]. Validation runs before any
//! network activity; a failed validation never produces a request.

use thiserror::Error;

use crate::data::{FoodType, PredictionRequest, StorageType};

/// A rejected form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("select a food type")]
    MissingFoodType,
    #[error("select a storage type")]
    MissingStorageType,
    #[error("temperature must be a number")]
    InvalidTemperature,
    #[error("humidity must be a number between 0 and 100")]
    InvalidHumidity,
    #[error("days stored must be a whole number, 0 or more")]
    InvalidDaysStored,
}

/// Raw prediction form input as entered in the UI
#[derive(Debug, Clone, Default)]
pub struct PredictionForm {
    pub food_type: Option<FoodType>,
    pub storage_type: Option<StorageType>,
    pub temperature: String,
    pub humidity: String,
    pub days_stored: String,
}

impl PredictionForm {
    /// Validate all fields, reporting the first problem in field order.
    ///
    /// Every field is mandatory. Numeric fields are parsed from their raw
    /// text; days must be a non-negative integer (fractions are rejected).
    pub fn validate(&self) -> Result<PredictionRequest, ValidationError> {
        let food_type = self.food_type.ok_or(ValidationError::MissingFoodType)?;
        let storage_type = self
            .storage_type
            .ok_or(ValidationError::MissingStorageType)?;

        let temperature: f64 = self
            .temperature
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidTemperature)?;
        if !temperature.is_finite() {
            return Err(ValidationError::InvalidTemperature);
        }

        let humidity: f64 = self
            .humidity
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidHumidity)?;
        if !humidity.is_finite() || !(0.0..=100.0).contains(&humidity) {
            return Err(ValidationError::InvalidHumidity);
        }

        // u32 parse rejects signs, fractions, and anything non-numeric
        let days_stored: u32 = self
            .days_stored
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidDaysStored)?;

        Ok(PredictionRequest {
            food_type,
            storage_type,
            temperature,
            humidity,
            days_stored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PredictionForm {
        PredictionForm {
            food_type: Some(FoodType::Dairy),
            storage_type: Some(StorageType::Refrigerator),
            temperature: "4".to_string(),
            humidity: "60".to_string(),
            days_stored: "2".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.food_type, FoodType::Dairy);
        assert_eq!(request.storage_type, StorageType::Refrigerator);
        assert_eq!(request.temperature, 4.0);
        assert_eq!(request.humidity, 60.0);
        assert_eq!(request.days_stored, 2);
    }

    #[test]
    fn test_missing_selections() {
        let mut form = filled_form();
        form.food_type = None;
        assert_eq!(form.validate(), Err(ValidationError::MissingFoodType));

        let mut form = filled_form();
        form.storage_type = None;
        assert_eq!(form.validate(), Err(ValidationError::MissingStorageType));
    }

    #[test]
    fn test_invalid_temperature() {
        let mut form = filled_form();
        form.temperature = "cold".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidTemperature));

        form.temperature = "".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidTemperature));

        // Negative temperatures are legitimate (freezer)
        form.temperature = "-18".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_humidity_range() {
        let mut form = filled_form();
        form.humidity = "101".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidHumidity));

        form.humidity = "-1".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidHumidity));

        form.humidity = "0".to_string();
        assert!(form.validate().is_ok());

        form.humidity = "100".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_days_stored_must_be_whole_and_non_negative() {
        let mut form = filled_form();
        form.days_stored = "-1".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidDaysStored));

        form.days_stored = "1.5".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidDaysStored));

        form.days_stored = "0".to_string();
        assert!(form.validate().is_ok());
    }
}
