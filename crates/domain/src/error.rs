//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GasScaleError`] via `#[from]` or an explicit `into_domain()`.

/// Top-level error type shared by the domain, application and adapters.
#[derive(Debug, thiserror::Error)]
pub enum GasScaleError {
    /// The caller supplied invalid input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A reading source failed to produce data.
    #[error("reading source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A calibration write was not a JSON object or lacked one of the
    /// `emptyWeightGramms` / `fullWeightGramms` keys.
    #[error("Invalid data")]
    InvalidCalibration,

    /// A per-scale request did not carry the `scale` parameter.
    #[error("Missing parameter scale")]
    MissingScale,

    /// The `scale` parameter is not a number in `1..=available`.
    #[error("Bad request, value outside available scales")]
    ScaleOutOfRange {
        /// Raw value as received.
        requested: String,
        /// Number of scales the source exposes.
        available: usize,
    },
}
