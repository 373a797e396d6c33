//! Query parameters for standalone slug generation.

use serde::Deserialize;
use serde_json::json;

use crate::domain::validation::MAX_SLUG_LENGTH;
use crate::error::AppError;

/// `GET /slug?length=N`.
///
/// `length` is kept as the raw string so that non-integer input is reported
/// with the same message as an out-of-range value.
#[derive(Debug, Deserialize)]
pub struct SlugParams {
    pub length: Option<String>,
}

impl SlugParams {
    /// Parses and range-checks `length`.
    ///
    /// # Validation
    ///
    /// - Must be present
    /// - Must be an integer
    /// - Must be between 1 and [`MAX_SLUG_LENGTH`]
    pub fn length(&self) -> Result<usize, AppError> {
        let raw = self
            .length
            .as_deref()
            .ok_or_else(|| AppError::bad_request("Missing required parameter: length", json!({})))?;

        let length: i64 = raw.trim().parse().map_err(|_| {
            AppError::bad_request(
                format!("Length must be an integer, got '{raw}'"),
                json!({ "length": raw }),
            )
        })?;

        if length < 1 || length > MAX_SLUG_LENGTH as i64 {
            return Err(AppError::bad_request(
                format!("Length must be between 1 and {MAX_SLUG_LENGTH}, got {length}"),
                json!({ "length": length }),
            ));
        }

        Ok(length as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(length: Option<&str>) -> SlugParams {
        SlugParams {
            length: length.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_length() {
        assert_eq!(params(Some("8")).length().unwrap(), 8);
        assert_eq!(params(Some("1")).length().unwrap(), 1);
        assert_eq!(params(Some("50")).length().unwrap(), 50);
    }

    #[test]
    fn test_rejected_lengths() {
        for raw in [None, Some(""), Some("abc"), Some("0"), Some("-3"), Some("51"), Some("2.5")] {
            assert!(params(raw).length().is_err(), "accepted {raw:?}");
        }
    }
}
