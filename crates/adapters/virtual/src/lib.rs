//! # gasscale-adapter-virtual
//!
//! Virtual reading source that stands in for real scale hardware.
//!
//! ## Produced data
//!
//! | Reading | Range |
//! |---------|-------|
//! | `emptyWeightGramms`, `fullWeightGramms` | `0..10000`, independent |
//! | `level` | `0..=100` |
//! | `sensorValue` | `k * 1000`, `k` in `0..=100` |
//! | `gasWeight` | `k * 11000`, `k` in `0..=100` |
//! | diagnostics | fixed reference snapshot |
//!
//! Every field is drawn independently, so a level reading is not internally
//! consistent. Calibration writes, tare requests and reference weights are
//! accepted and dropped.
//!
//! ## Dependency rule
//!
//! Depends on `gasscale-app` (port traits) and `gasscale-domain` only.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gasscale_app::ports::ReadingSource;
use gasscale_domain::calibration::{BottleWeightUpdate, CalibrationReading, ReferenceWeight};
use gasscale_domain::diagnostics::DeviceDiagnostics;
use gasscale_domain::error::GasScaleError;
use gasscale_domain::level::{LevelReading, MAX_LEVEL_PERCENT};
use gasscale_domain::scale::ScaleIndex;

/// Number of scales on the reference board.
pub const DEFAULT_SCALE_COUNT: u8 = 2;

/// Upper bound (exclusive) of generated calibration weights.
const CALIBRATION_LIMIT_GRAMMS: u32 = 10_000;
/// Step of generated raw sensor values.
const SENSOR_VALUE_STEP: i64 = 1_000;
/// Step of generated gas weights.
const GAS_WEIGHT_STEP: u32 = 11_000;

/// Reading source producing random data.
pub struct RandomReadingSource {
    scales: u8,
    rng: Mutex<StdRng>,
}

impl Default for RandomReadingSource {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_COUNT)
    }
}

impl RandomReadingSource {
    /// Create a source for `scales` scales, seeded from the OS.
    #[must_use]
    pub fn new(scales: u8) -> Self {
        Self {
            scales,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a reproducible source; two sources with the same seed yield
    /// the same sequence of readings.
    #[must_use]
    pub fn seeded(scales: u8, seed: u64) -> Self {
        Self {
            scales,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl ReadingSource for RandomReadingSource {
    fn scale_count(&self) -> usize {
        usize::from(self.scales)
    }

    fn bottle_weight(
        &self,
    ) -> impl Future<Output = Result<CalibrationReading, GasScaleError>> + Send {
        let reading = self.with_rng(|rng| {
            CalibrationReading::new(
                rng.random_range(0..CALIBRATION_LIMIT_GRAMMS),
                rng.random_range(0..CALIBRATION_LIMIT_GRAMMS),
            )
        });
        async move { Ok(reading) }
    }

    fn set_bottle_weight(
        &self,
        update: BottleWeightUpdate,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        tracing::debug!(?update, "virtual source discards calibration update");
        async { Ok(()) }
    }

    fn tare(&self, scale: ScaleIndex) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        tracing::debug!(%scale, "virtual source ignores tare");
        async { Ok(()) }
    }

    fn calibrate(
        &self,
        scale: ScaleIndex,
        weight: ReferenceWeight,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        tracing::debug!(
            %scale,
            weight = weight.gramms(),
            "virtual source ignores reference weight"
        );
        async { Ok(()) }
    }

    fn levels(&self) -> impl Future<Output = Result<Vec<LevelReading>, GasScaleError>> + Send {
        let levels: Vec<LevelReading> = self.with_rng(|rng| {
            (0..self.scales)
                .map(|id| LevelReading {
                    id,
                    level: rng.random_range(0..=MAX_LEVEL_PERCENT),
                    sensor_value: rng.random_range(0..=100_i64) * SENSOR_VALUE_STEP,
                    gas_weight: rng.random_range(0..=100_u32) * GAS_WEIGHT_STEP,
                })
                .collect()
        });
        async move { Ok(levels) }
    }

    fn diagnostics(&self) -> impl Future<Output = Result<DeviceDiagnostics, GasScaleError>> + Send {
        async { Ok(DeviceDiagnostics::reference()) }
    }
}
