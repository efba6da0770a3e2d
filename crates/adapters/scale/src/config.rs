//! Scale source configuration.

use serde::Deserialize;

use gasscale_domain::calibration::CalibrationReading;

/// Configuration for the scale reading source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Number of attached scales.
    pub count: u8,
    /// Initial empty bottle weight, in grams.
    pub empty_weight_grams: u32,
    /// Initial full bottle weight, in grams.
    pub full_weight_grams: u32,
    /// Weights reported by the simulated load cell, one per scale.
    ///
    /// Scales without an entry read as `0`.
    pub simulated_weights_grams: Vec<i64>,
}

impl ScaleConfig {
    /// The configured initial calibration.
    #[must_use]
    pub fn calibration(&self) -> CalibrationReading {
        CalibrationReading::new(self.empty_weight_grams, self.full_weight_grams)
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        let calibration = CalibrationReading::default();
        Self {
            count: 2,
            empty_weight_grams: calibration.empty_weight_gramms,
            full_weight_grams: calibration.full_weight_gramms,
            simulated_weights_grams: vec![16_500, 11_000],
        }
    }
}
