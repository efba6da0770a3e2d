//! Scale adapter error types.

use gasscale_domain::error::GasScaleError;

/// Errors specific to the scale adapter.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// The load cell did not become ready in time.
    #[error("load cell {scale} not ready")]
    NotReady {
        /// 0-based scale index.
        scale: u8,
    },

    /// No load cell is wired for the requested scale.
    #[error("no load cell attached for scale {scale}")]
    NotAttached {
        /// 0-based scale index.
        scale: u8,
    },

    /// The reference weight produced no signal above the tare point.
    #[error("load cell {scale} shows no load to calibrate against")]
    NoReferenceLoad {
        /// 0-based scale index.
        scale: u8,
    },
}

impl ScaleError {
    /// Convert into a [`GasScaleError::Source`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> GasScaleError {
        GasScaleError::Source(Box::new(self))
    }
}

impl From<ScaleError> for GasScaleError {
    fn from(err: ScaleError) -> Self {
        err.into_domain()
    }
}
