//! Reading source port: where telemetry comes from.
//!
//! The HTTP layer never knows whether it is talking to simulated data or to
//! a scale with a real load cell; it only sees this trait.

use std::future::Future;
use std::sync::Arc;

use gasscale_domain::calibration::{BottleWeightUpdate, CalibrationReading, ReferenceWeight};
use gasscale_domain::diagnostics::DeviceDiagnostics;
use gasscale_domain::error::GasScaleError;
use gasscale_domain::level::LevelReading;
use gasscale_domain::scale::ScaleIndex;

/// Provides calibration, level and diagnostics data for the attached scales.
pub trait ReadingSource {
    /// Number of scales this source reports on.
    fn scale_count(&self) -> usize;

    /// Current bottle-weight calibration.
    fn bottle_weight(
        &self,
    ) -> impl Future<Output = Result<CalibrationReading, GasScaleError>> + Send;

    /// Apply a presence-validated calibration write.
    ///
    /// Sources without a place to keep calibration may ignore the update.
    fn set_bottle_weight(
        &self,
        update: BottleWeightUpdate,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send;

    /// Reset the zero point of one scale to its current load.
    fn tare(&self, scale: ScaleIndex) -> impl Future<Output = Result<(), GasScaleError>> + Send;

    /// Derive the scaling factor of one tared scale from a known weight
    /// currently standing on it.
    fn calibrate(
        &self,
        scale: ScaleIndex,
        weight: ReferenceWeight,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send;

    /// One reading per scale, ordered by `id` ascending.
    fn levels(&self) -> impl Future<Output = Result<Vec<LevelReading>, GasScaleError>> + Send;

    /// Health snapshot of the monitoring device.
    fn diagnostics(&self) -> impl Future<Output = Result<DeviceDiagnostics, GasScaleError>> + Send;
}

impl<T: ReadingSource + Send + Sync> ReadingSource for Arc<T> {
    fn scale_count(&self) -> usize {
        (**self).scale_count()
    }

    fn bottle_weight(
        &self,
    ) -> impl Future<Output = Result<CalibrationReading, GasScaleError>> + Send {
        (**self).bottle_weight()
    }

    fn set_bottle_weight(
        &self,
        update: BottleWeightUpdate,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        (**self).set_bottle_weight(update)
    }

    fn tare(&self, scale: ScaleIndex) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        (**self).tare(scale)
    }

    fn calibrate(
        &self,
        scale: ScaleIndex,
        weight: ReferenceWeight,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        (**self).calibrate(scale, weight)
    }

    fn levels(&self) -> impl Future<Output = Result<Vec<LevelReading>, GasScaleError>> + Send {
        (**self).levels()
    }

    fn diagnostics(&self) -> impl Future<Output = Result<DeviceDiagnostics, GasScaleError>> + Send {
        (**self).diagnostics()
    }
}
