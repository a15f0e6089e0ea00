//! Squad rating bounds.

use crate::error::CoreError;

/// Lowest score a squad can receive.
pub const MIN_RATING: i32 = 0;

/// Highest score a squad can receive.
pub const MAX_RATING: i32 = 5;

/// Validate that a rating value lies within [`MIN_RATING`]..=[`MAX_RATING`].
///
/// Mirrors the `ck_ratings_rating_range` CHECK constraint so out-of-range
/// values are rejected before they reach the database.
pub fn validate_rating(value: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_rating(0).is_ok());
        assert!(validate_rating(5).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        for value in [-1, 6, i32::MIN, i32::MAX] {
            let err = validate_rating(value).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "value {value}");
        }
    }

    #[test]
    fn error_message_names_bounds() {
        let msg = validate_rating(6).unwrap_err().to_string();
        assert!(msg.contains("between 0 and 5"), "got: {msg}");
    }
}
