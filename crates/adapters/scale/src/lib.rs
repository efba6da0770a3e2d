//! # gasscale-adapter-scale
//!
//! Reading source backed by load cells and a bottle calibration.
//!
//! ## How it works
//!
//! Each scale reports the total weight standing on it. With the bottle's
//! empty and full weights known, a single weight measurement yields all
//! three level fields: the raw value, the gas mass above the empty weight,
//! and that mass as a share of the bottle's capacity.
//!
//! Calibration writes replace the bottle weights in memory (shared by all
//! scales) and are lost on restart.
//!
//! Each load cell is set up on its own: tare an empty scale, then place a
//! known reference weight on it and calibrate. Both steps go straight to the
//! [`LoadCell`], which keeps its offset and scaling factor in memory.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `gasscale-app` and `gasscale-domain`.

mod config;
mod error;
mod load_cell;

pub use config::ScaleConfig;
pub use error::ScaleError;
pub use load_cell::{LoadCell, SimulatedLoadCell};

use tokio::sync::RwLock;

use gasscale_app::ports::ReadingSource;
use gasscale_domain::calibration::{BottleWeightUpdate, CalibrationReading, ReferenceWeight};
use gasscale_domain::diagnostics::DeviceDiagnostics;
use gasscale_domain::error::GasScaleError;
use gasscale_domain::level::LevelReading;
use gasscale_domain::scale::ScaleIndex;

/// Reading source that derives levels from load-cell weights.
pub struct ScaleReadingSource<C> {
    cell: C,
    scales: u8,
    calibration: RwLock<CalibrationReading>,
}

impl<C: LoadCell> ScaleReadingSource<C> {
    /// Create a source over `scales` load cells with an initial calibration.
    #[must_use]
    pub fn new(cell: C, scales: u8, calibration: CalibrationReading) -> Self {
        Self {
            cell,
            scales,
            calibration: RwLock::new(calibration),
        }
    }

    /// The load cells behind this source.
    #[must_use]
    pub fn cell(&self) -> &C {
        &self.cell
    }
}

impl ScaleReadingSource<SimulatedLoadCell> {
    /// Create a source over simulated load cells described by `config`.
    ///
    /// Scales without a configured weight read as `0`.
    #[must_use]
    pub fn simulated(config: &ScaleConfig) -> Self {
        let mut weights = config.simulated_weights_grams.clone();
        weights.resize(usize::from(config.count), 0);
        Self::new(
            SimulatedLoadCell::new(weights),
            config.count,
            config.calibration(),
        )
    }
}

impl<C> ReadingSource for ScaleReadingSource<C>
where
    C: LoadCell + Send + Sync,
{
    fn scale_count(&self) -> usize {
        usize::from(self.scales)
    }

    async fn bottle_weight(&self) -> Result<CalibrationReading, GasScaleError> {
        Ok(*self.calibration.read().await)
    }

    async fn set_bottle_weight(&self, update: BottleWeightUpdate) -> Result<(), GasScaleError> {
        let Some(grams) = update.grams() else {
            tracing::warn!(?update, "ignoring bottle weight that is not a gram count");
            return Ok(());
        };
        *self.calibration.write().await = grams;
        tracing::info!(
            empty = grams.empty_weight_gramms,
            full = grams.full_weight_gramms,
            "new bottle weight configured"
        );
        Ok(())
    }

    async fn tare(&self, scale: ScaleIndex) -> Result<(), GasScaleError> {
        self.cell.tare(scale.id()).await?;
        Ok(())
    }

    async fn calibrate(
        &self,
        scale: ScaleIndex,
        weight: ReferenceWeight,
    ) -> Result<(), GasScaleError> {
        self.cell.calibrate(scale.id(), weight.gramms()).await?;
        Ok(())
    }

    async fn levels(&self) -> Result<Vec<LevelReading>, GasScaleError> {
        let calibration = *self.calibration.read().await;
        let mut levels = Vec::with_capacity(usize::from(self.scales));
        for id in 0..self.scales {
            let raw = self.cell.read_gramms(id).await?;
            levels.push(LevelReading::from_measurement(id, raw, &calibration));
        }
        Ok(levels)
    }

    async fn diagnostics(&self) -> Result<DeviceDiagnostics, GasScaleError> {
        Ok(DeviceDiagnostics::reference())
    }
}
