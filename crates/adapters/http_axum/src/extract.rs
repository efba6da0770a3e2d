//! Request extractors shared by the per-scale handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use gasscale_domain::error::ValidationError;

use crate::error::ApiError;

/// Query parameter naming the scale a request targets.
pub const SCALE_PARAM: &str = "scale";

/// The raw `scale` query parameter, if present.
///
/// Kept as a string so that a non-numeric value is reported with the same
/// message as an out-of-range one. When the parameter is repeated the first
/// occurrence wins. Rejections are [`ApiError`]s so every failure carries the
/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleParam(pub Option<String>);

impl ScaleParam {
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for ScaleParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|_| ValidationError::MissingScale)?;
        let scale = pairs
            .into_iter()
            .find_map(|(key, value)| (key == SCALE_PARAM).then_some(value));
        Ok(Self(scale))
    }
}
