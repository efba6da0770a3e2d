//! Telemetry service: use-cases behind the calibration, level and
//! diagnostics endpoints.

use serde_json::Value;

use gasscale_domain::calibration::{
    BottleWeightUpdate, CalibrationAck, CalibrationReading, ReferenceWeight,
};
use gasscale_domain::diagnostics::DeviceDiagnostics;
use gasscale_domain::error::{GasScaleError, ValidationError};
use gasscale_domain::level::LevelReading;
use gasscale_domain::scale::ScaleIndex;

use crate::ports::ReadingSource;

/// Application service fronting a [`ReadingSource`].
pub struct TelemetryService<S> {
    source: S,
}

impl<S: ReadingSource> TelemetryService<S> {
    /// Create a new service backed by the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Number of scales exposed by the source.
    pub fn scale_count(&self) -> usize {
        self.source.scale_count()
    }

    /// Current bottle-weight calibration.
    ///
    /// # Errors
    ///
    /// Returns a source error propagated from the reading source.
    pub async fn bottle_weight(&self) -> Result<CalibrationReading, GasScaleError> {
        self.source.bottle_weight().await
    }

    /// Validate a calibration write and hand it to the source.
    ///
    /// Only the presence of both weight keys is checked.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCalibration`] when `body` is not an
    /// object carrying both keys, or a source error from the reading source.
    pub async fn set_bottle_weight(&self, body: &Value) -> Result<CalibrationAck, GasScaleError> {
        let update = BottleWeightUpdate::from_json(body)?;
        self.source.set_bottle_weight(update).await?;
        Ok(CalibrationAck::bottle_weight_set())
    }

    /// Reset the zero point of the scale selected by the raw `scale`
    /// parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingScale`] or
    /// [`ValidationError::ScaleOutOfRange`] for a bad selector, or a source
    /// error from the reading source.
    pub async fn tare_scale(&self, scale: Option<&str>) -> Result<CalibrationAck, GasScaleError> {
        let index = ScaleIndex::parse(scale, self.source.scale_count())?;
        self.source.tare(index).await?;
        tracing::info!(scale = %index, "scale tared");
        Ok(CalibrationAck::scale_tared())
    }

    /// Calibrate the selected scale against the reference weight in `body`.
    ///
    /// The selector is checked before the body.
    ///
    /// # Errors
    ///
    /// Returns a scale selector error as for [`Self::tare_scale`],
    /// [`ValidationError::InvalidCalibration`] when `body` carries no
    /// positive integer `weight`, or a source error from the reading source.
    pub async fn calibrate_scale(
        &self,
        scale: Option<&str>,
        body: &Value,
    ) -> Result<CalibrationAck, GasScaleError> {
        let index = ScaleIndex::parse(scale, self.source.scale_count())?;
        let weight = ReferenceWeight::from_json(body)?;
        self.source.calibrate(index, weight).await?;
        tracing::info!(scale = %index, weight = weight.gramms(), "scale calibrated");
        Ok(CalibrationAck::setup_completed())
    }

    /// Readings of all scales, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a source error propagated from the reading source.
    pub async fn levels(&self) -> Result<Vec<LevelReading>, GasScaleError> {
        let levels = self.source.levels().await?;
        tracing::debug!(count = levels.len(), "read scale levels");
        Ok(levels)
    }

    /// Reading of the scale selected by the raw, 1-based `scale` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingScale`] or
    /// [`ValidationError::ScaleOutOfRange`] for a bad selector, or a source
    /// error from the reading source.
    pub async fn level(&self, scale: Option<&str>) -> Result<LevelReading, GasScaleError> {
        let available = self.source.scale_count();
        let index = ScaleIndex::parse(scale, available)?;
        self.source
            .levels()
            .await?
            .into_iter()
            .nth(index.position())
            .ok_or_else(|| {
                ValidationError::ScaleOutOfRange {
                    requested: index.to_string(),
                    available,
                }
                .into()
            })
    }

    /// Health snapshot of the monitoring device.
    ///
    /// # Errors
    ///
    /// Returns a source error propagated from the reading source.
    pub async fn diagnostics(&self) -> Result<DeviceDiagnostics, GasScaleError> {
        self.source.diagnostics().await
    }
}
