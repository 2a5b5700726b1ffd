//! Domain error types

use thiserror::Error;

/// Errors raised while reading or changing the lobby settings.
///
/// Every variant except [`SettingsError::StoreUnavailable`] is an
/// invalid-argument condition: the offending operation is aborted and the
/// authoritative settings are left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid player idx {index}: lobby has {count} player slots")]
    InvalidPlayerIndex { index: u32, count: u32 },

    #[error("{field} is invalid: {value} is outside 0..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: u32,
    },

    #[error("{field} is invalid: expected {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: String,
    },

    #[error("Settings store unavailable: {0}")]
    StoreUnavailable(String),
}

impl SettingsError {
    /// Whether this error was caused by a bad caller-supplied value.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, SettingsError::StoreUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_names_field_and_value() {
        let error = SettingsError::OutOfRange {
            field: "speed",
            value: 7,
            max: 4,
        };
        assert_eq!(error.to_string(), "speed is invalid: 7 is outside 0..=4");
    }

    #[test]
    fn test_invalid_player_index_display() {
        let error = SettingsError::InvalidPlayerIndex { index: 9, count: 4 };
        assert_eq!(
            error.to_string(),
            "Invalid player idx 9: lobby has 4 player slots"
        );
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(SettingsError::InvalidPlayerIndex { index: 1, count: 0 }.is_invalid_argument());
        assert!(
            SettingsError::WrongType {
                field: "fow".to_string(),
                expected: "integer",
                actual: "string".to_string(),
            }
            .is_invalid_argument()
        );
        assert!(!SettingsError::StoreUnavailable("poisoned".into()).is_invalid_argument());
    }
}
