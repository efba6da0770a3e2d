//! Scale selector for per-scale requests.

use std::fmt;

use crate::error::ValidationError;

/// A 1-based index selecting one of the attached scales.
///
/// Only constructed through [`ScaleIndex::parse`], so a value always refers
/// to a scale that existed when the request was validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleIndex(u8);

impl ScaleIndex {
    /// Parse the raw `scale` parameter against the number of available scales.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingScale`] when `raw` is `None`, and
    /// [`ValidationError::ScaleOutOfRange`] when it is not a number in
    /// `1..=available`.
    pub fn parse(raw: Option<&str>, available: usize) -> Result<Self, ValidationError> {
        let raw = raw.ok_or(ValidationError::MissingScale)?;
        match raw.trim().parse::<u8>() {
            Ok(n) if n >= 1 && usize::from(n) <= available => Ok(Self(n)),
            _ => Err(ValidationError::ScaleOutOfRange {
                requested: raw.to_string(),
                available,
            }),
        }
    }

    /// The 1-based number as shown to users.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// The 0-based scale id, matching [`LevelReading::id`](crate::level::LevelReading::id).
    #[must_use]
    pub fn id(self) -> u8 {
        self.0 - 1
    }

    /// The 0-based position, matching [`LevelReading::id`](crate::level::LevelReading::id).
    #[must_use]
    pub fn position(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for ScaleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_first_scale() {
        let idx = ScaleIndex::parse(Some("1"), 2).unwrap();
        assert_eq!(idx.number(), 1);
        assert_eq!(idx.position(), 0);
    }

    #[test]
    fn should_parse_last_scale() {
        let idx = ScaleIndex::parse(Some("2"), 2).unwrap();
        assert_eq!(idx.position(), 1);
        assert_eq!(idx.id(), 1);
    }

    #[test]
    fn should_reject_missing_parameter() {
        assert_eq!(
            ScaleIndex::parse(None, 2),
            Err(ValidationError::MissingScale)
        );
    }

    #[test]
    fn should_reject_zero() {
        assert!(matches!(
            ScaleIndex::parse(Some("0"), 2),
            Err(ValidationError::ScaleOutOfRange { .. })
        ));
    }

    #[test]
    fn should_reject_index_above_available() {
        let err = ScaleIndex::parse(Some("3"), 2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ScaleOutOfRange {
                requested: "3".to_string(),
                available: 2,
            }
        );
    }

    #[test]
    fn should_reject_non_numeric_value() {
        assert!(matches!(
            ScaleIndex::parse(Some("abc"), 2),
            Err(ValidationError::ScaleOutOfRange { .. })
        ));
    }
}
