//! Load-cell seam: the raw weight measurement behind each scale.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use crate::error::ScaleError;

/// A set of load cells, one per scale.
pub trait LoadCell {
    /// Current total weight on the given 0-based scale, in grams.
    fn read_gramms(&self, scale: u8) -> impl Future<Output = Result<i64, ScaleError>> + Send;

    /// Reset the scaling factor and take the current load as zero.
    fn tare(&self, scale: u8) -> impl Future<Output = Result<(), ScaleError>> + Send;

    /// Set the scaling factor so the current load reads as `weight_gramms`.
    fn calibrate(
        &self,
        scale: u8,
        weight_gramms: u32,
    ) -> impl Future<Output = Result<(), ScaleError>> + Send;
}

/// Amplifier state of one simulated cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Channel {
    /// Raw amplifier counts for the current load.
    raw: i64,
    /// Counts read with an empty scale.
    offset: i64,
    /// Counts per gram.
    factor: f64,
}

impl Channel {
    fn new(raw: i64) -> Self {
        Self {
            raw,
            offset: 0,
            factor: 1.0,
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn gramms(&self) -> i64 {
        ((self.raw - self.offset) as f64 / self.factor).round() as i64
    }
}

/// Load cells that report a settable raw signal.
///
/// Used for bench setups and demos where no amplifier is attached. Fresh
/// cells have no offset and one count per gram, so raw counts read as grams
/// until the cell is tared and calibrated.
#[derive(Debug, Default)]
pub struct SimulatedLoadCell {
    channels: Mutex<Vec<Channel>>,
}

impl SimulatedLoadCell {
    /// Create cells reporting `raw[i]` counts for scale `i`.
    #[must_use]
    pub fn new(raw: Vec<i64>) -> Self {
        Self {
            channels: Mutex::new(raw.into_iter().map(Channel::new).collect()),
        }
    }

    /// Change the raw signal of one cell, as if the load on it changed.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::NotAttached`] for an unknown scale.
    pub fn place(&self, scale: u8, raw: i64) -> Result<(), ScaleError> {
        self.with_channel(scale, |channel| channel.raw = raw)
    }

    fn with_channel<T>(
        &self,
        scale: u8,
        f: impl FnOnce(&mut Channel) -> T,
    ) -> Result<T, ScaleError> {
        let mut channels = self
            .channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        channels
            .get_mut(usize::from(scale))
            .map(f)
            .ok_or(ScaleError::NotAttached { scale })
    }
}

impl LoadCell for SimulatedLoadCell {
    fn read_gramms(&self, scale: u8) -> impl Future<Output = Result<i64, ScaleError>> + Send {
        let result = self.with_channel(scale, |channel| channel.gramms());
        async move { result }
    }

    fn tare(&self, scale: u8) -> impl Future<Output = Result<(), ScaleError>> + Send {
        let result = self.with_channel(scale, |channel| {
            channel.factor = 1.0;
            channel.offset = channel.raw;
        });
        async move { result }
    }

    fn calibrate(
        &self,
        scale: u8,
        weight_gramms: u32,
    ) -> impl Future<Output = Result<(), ScaleError>> + Send {
        let result = self
            .with_channel(scale, |channel| {
                let counts = channel.raw - channel.offset;
                if counts == 0 || weight_gramms == 0 {
                    return false;
                }
                #[allow(clippy::cast_precision_loss)]
                let factor = counts as f64 / f64::from(weight_gramms);
                channel.factor = factor;
                true
            })
            .and_then(|calibrated| {
                if calibrated {
                    Ok(())
                } else {
                    Err(ScaleError::NoReferenceLoad { scale })
                }
            });
        async move { result }
    }
}
