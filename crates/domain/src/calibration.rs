//! Bottle-weight calibration: the empty and full reference weights of a
//! gas bottle standing on a scale.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// JSON key carrying the empty bottle weight.
pub const EMPTY_WEIGHT_KEY: &str = "emptyWeightGramms";
/// JSON key carrying the full bottle weight.
pub const FULL_WEIGHT_KEY: &str = "fullWeightGramms";
/// JSON key carrying a scale's reference weight.
pub const REFERENCE_WEIGHT_KEY: &str = "weight";

/// Two reference weights, in grams, for a bottle-weight sensor.
///
/// No ordering between `empty` and `full` is enforced here; consumers that
/// divide by the difference must handle `full <= empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationReading {
    pub empty_weight_gramms: u32,
    pub full_weight_gramms: u32,
}

impl CalibrationReading {
    /// Create a reading from the two reference weights.
    #[must_use]
    pub fn new(empty_weight_gramms: u32, full_weight_gramms: u32) -> Self {
        Self {
            empty_weight_gramms,
            full_weight_gramms,
        }
    }

    /// Mass of gas a full bottle holds, or `0` when `full <= empty`.
    #[must_use]
    pub fn capacity_gramms(&self) -> u32 {
        self.full_weight_gramms
            .saturating_sub(self.empty_weight_gramms)
    }
}

impl Default for CalibrationReading {
    /// An 11 kg aluminium propane bottle: 5.5 kg tare, 16.5 kg filled.
    fn default() -> Self {
        Self::new(5_500, 16_500)
    }
}

/// Acknowledgement returned after a calibration write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationAck {
    pub message: String,
}

impl CalibrationAck {
    /// The acknowledgement for an accepted bottle-weight update.
    #[must_use]
    pub fn bottle_weight_set() -> Self {
        Self {
            message: "New bottle weight set".to_string(),
        }
    }

    /// The acknowledgement for a scale whose zero point was reset.
    #[must_use]
    pub fn scale_tared() -> Self {
        Self {
            message: "Empty scale calibration done!".to_string(),
        }
    }

    /// The acknowledgement for a scale calibrated against a reference weight.
    #[must_use]
    pub fn setup_completed() -> Self {
        Self {
            message: "Setup completed".to_string(),
        }
    }
}

/// A calibration write that passed presence validation.
///
/// Only the presence of both keys is checked; the values are kept verbatim
/// so a source can decide what it accepts (see [`BottleWeightUpdate::grams`]).
#[derive(Debug, Clone, PartialEq)]
pub struct BottleWeightUpdate {
    empty: Value,
    full: Value,
}

impl BottleWeightUpdate {
    /// Validate a decoded request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCalibration`] if `body` is not an
    /// object or lacks either weight key.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or(ValidationError::InvalidCalibration)?;
        match (object.get(EMPTY_WEIGHT_KEY), object.get(FULL_WEIGHT_KEY)) {
            (Some(empty), Some(full)) => Ok(Self {
                empty: empty.clone(),
                full: full.clone(),
            }),
            _ => Err(ValidationError::InvalidCalibration),
        }
    }

    /// The submitted values as a [`CalibrationReading`], if both are
    /// non-negative integers that fit in `u32`.
    #[must_use]
    pub fn grams(&self) -> Option<CalibrationReading> {
        let empty = as_gramms(&self.empty)?;
        let full = as_gramms(&self.full)?;
        Some(CalibrationReading::new(empty, full))
    }
}

/// Known weight, in grams, placed on a tared scale to derive its scaling
/// factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceWeight(u32);

impl ReferenceWeight {
    /// Validate a decoded `{"weight": <grams>}` request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCalibration`] unless `body` is an
    /// object whose `weight` is a positive integer that fits in `u32`.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        body.get(REFERENCE_WEIGHT_KEY)
            .and_then(as_gramms)
            .filter(|grams| *grams > 0)
            .map(Self)
            .ok_or(ValidationError::InvalidCalibration)
    }

    /// The weight in grams, always non-zero.
    #[must_use]
    pub fn gramms(self) -> u32 {
        self.0
    }
}

fn as_gramms(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let reading = CalibrationReading::new(120, 8_500);
        let value = serde_json::to_value(reading).unwrap();
        assert_eq!(
            value,
            json!({ "emptyWeightGramms": 120, "fullWeightGramms": 8500 })
        );
    }

    #[test]
    fn should_compute_capacity() {
        assert_eq!(CalibrationReading::default().capacity_gramms(), 11_000);
    }

    #[test]
    fn should_saturate_capacity_when_full_not_above_empty() {
        assert_eq!(CalibrationReading::new(9_000, 4_000).capacity_gramms(), 0);
        assert_eq!(CalibrationReading::new(4_000, 4_000).capacity_gramms(), 0);
    }

    #[test]
    fn should_accept_body_with_both_keys() {
        let body = json!({ "emptyWeightGramms": 120, "fullWeightGramms": 8500 });
        let update = BottleWeightUpdate::from_json(&body).unwrap();
        assert_eq!(update.grams(), Some(CalibrationReading::new(120, 8_500)));
    }

    #[test]
    fn should_accept_body_with_values_of_any_type() {
        let body = json!({ "emptyWeightGramms": "heavy", "fullWeightGramms": null });
        let update = BottleWeightUpdate::from_json(&body).unwrap();
        assert_eq!(update.grams(), None);
    }

    #[test]
    fn should_reject_empty_object() {
        assert_eq!(
            BottleWeightUpdate::from_json(&json!({})),
            Err(ValidationError::InvalidCalibration)
        );
    }

    #[test]
    fn should_reject_body_missing_full_weight() {
        let body = json!({ "emptyWeightGramms": 120 });
        assert_eq!(
            BottleWeightUpdate::from_json(&body),
            Err(ValidationError::InvalidCalibration)
        );
    }

    #[test]
    fn should_reject_body_missing_empty_weight() {
        let body = json!({ "fullWeightGramms": 8500 });
        assert_eq!(
            BottleWeightUpdate::from_json(&body),
            Err(ValidationError::InvalidCalibration)
        );
    }

    #[test]
    fn should_reject_non_object_body() {
        assert_eq!(
            BottleWeightUpdate::from_json(&json!([120, 8500])),
            Err(ValidationError::InvalidCalibration)
        );
    }

    #[test]
    fn should_not_convert_negative_or_oversized_values() {
        let body = json!({ "emptyWeightGramms": -1, "fullWeightGramms": 8500 });
        assert_eq!(BottleWeightUpdate::from_json(&body).unwrap().grams(), None);

        let body = json!({ "emptyWeightGramms": 1, "fullWeightGramms": 5_000_000_000_u64 });
        assert_eq!(BottleWeightUpdate::from_json(&body).unwrap().grams(), None);
    }

    #[test]
    fn should_accept_integer_reference_weight() {
        let weight = ReferenceWeight::from_json(&json!({ "weight": 2000 })).unwrap();
        assert_eq!(weight.gramms(), 2_000);
    }

    #[test]
    fn should_reject_reference_weight_that_is_not_a_positive_integer() {
        for body in [
            json!({}),
            json!({ "weight": "2000" }),
            json!({ "weight": 12.5 }),
            json!({ "weight": -5 }),
            json!({ "weight": 0 }),
            json!(null),
        ] {
            assert_eq!(
                ReferenceWeight::from_json(&body),
                Err(ValidationError::InvalidCalibration),
                "{body}"
            );
        }
    }

    #[test]
    fn should_acknowledge_scale_setup_with_fixed_messages() {
        assert_eq!(CalibrationAck::scale_tared().message, "Empty scale calibration done!");
        assert_eq!(CalibrationAck::setup_completed().message, "Setup completed");
    }

    #[test]
    fn should_acknowledge_with_fixed_message() {
        let ack = serde_json::to_value(CalibrationAck::bottle_weight_set()).unwrap();
        assert_eq!(ack, json!({ "message": "New bottle weight set" }));
    }
}
