//! Fill level of a gas bottle.

use serde::{Deserialize, Serialize};

use crate::calibration::CalibrationReading;

/// Highest percentage a level can report.
pub const MAX_LEVEL_PERCENT: u8 = 100;

/// Current reading of one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelReading {
    /// 0-based scale index.
    pub id: u8,
    /// Remaining gas in percent, `0..=100`.
    pub level: u8,
    /// Raw sensor value in sensor units.
    pub sensor_value: i64,
    /// Estimated remaining gas mass in grams.
    pub gas_weight: u32,
}

impl LevelReading {
    /// Derive a consistent reading from a single measurement.
    ///
    /// `raw_gramms` is the total mass on the scale (bottle plus gas). Gas
    /// mass is whatever exceeds the empty weight; the level is that mass as
    /// a share of the calibrated capacity, truncated and clamped to
    /// `0..=100`. A calibration without capacity yields level `0`.
    #[must_use]
    pub fn from_measurement(id: u8, raw_gramms: i64, calibration: &CalibrationReading) -> Self {
        let above_empty = raw_gramms.saturating_sub(i64::from(calibration.empty_weight_gramms));
        let gas_weight = u32::try_from(above_empty.max(0)).unwrap_or(u32::MAX);

        let capacity = calibration.capacity_gramms();
        let level = if capacity == 0 {
            0
        } else {
            let percent = u64::from(gas_weight) * 100 / u64::from(capacity);
            u8::try_from(percent.min(u64::from(MAX_LEVEL_PERCENT))).unwrap_or(MAX_LEVEL_PERCENT)
        };

        Self {
            id,
            level,
            sensor_value: raw_gramms,
            gas_weight,
        }
    }
}
