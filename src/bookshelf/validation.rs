//! Field validation for new books.
//!
//! Each function takes the raw user input and either returns the text to store
//! or a [`ValidationError`] describing why the input was rejected. Nothing here
//! loops or prompts: retrying is the caller's business.

use thiserror::Error;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),

    #[error("Please enter a valid integer for the year.")]
    YearNotInteger,

    #[error("Year must be between 0 and {max}.")]
    YearOutOfRange { max: i32 },

    #[error("Please enter a valid number for the rating.")]
    RatingNotNumber,

    #[error("Rating must be between 0 and 5.")]
    RatingOutOfRange,
}

/// Trimmed, non-empty text.
pub fn required(label: &'static str, input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(label));
    }
    Ok(value.to_string())
}

/// Optional publication year in `[0, current_year]`, normalized to plain decimal.
pub fn year(input: &str, current_year: i32) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    let parsed: i64 = match value.parse() {
        Ok(parsed) => parsed,
        Err(_) if is_integer_literal(value) => {
            return Err(ValidationError::YearOutOfRange { max: current_year })
        }
        Err(_) => return Err(ValidationError::YearNotInteger),
    };
    if parsed < 0 || parsed > i64::from(current_year) {
        return Err(ValidationError::YearOutOfRange { max: current_year });
    }
    Ok(parsed.to_string())
}

/// Optionally signed run of ASCII digits, whatever its magnitude.
fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Optional rating in `[0.0, 5.0]`, normalized so it always carries a
/// fractional part (`4` becomes `4.0`).
pub fn rating(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    let parsed: f64 = value
        .parse()
        .map_err(|_| ValidationError::RatingNotNumber)?;
    if !(MIN_RATING..=MAX_RATING).contains(&parsed) {
        return Err(ValidationError::RatingOutOfRange);
    }
    Ok(format_rating(parsed))
}

fn format_rating(value: f64) -> String {
    // Debug formatting keeps the shortest round-trip digits and a trailing `.0`.
    // `-0.0` passes the range check and is stored as `0.0`.
    format!("{:?}", value + 0.0)
}

/// Parses a stored year, skipping blanks and junk.
pub fn stored_year(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

/// Parses a stored rating, skipping blanks, junk and non-finite values.
pub fn stored_rating(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|r| r.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_input() {
        assert_eq!(
            required("Title", "   "),
            Err(ValidationError::Required("Title"))
        );
        assert_eq!(required("Title", "  Dune ").unwrap(), "Dune");
        assert_eq!(
            ValidationError::Required("Author").to_string(),
            "Author is required."
        );
    }

    #[test]
    fn year_accepts_blank_and_bounds() {
        assert_eq!(year("", 2024).unwrap(), "");
        assert_eq!(year("0", 2024).unwrap(), "0");
        assert_eq!(year("2024", 2024).unwrap(), "2024");
        assert_eq!(year(" +1965 ", 2024).unwrap(), "1965");
    }

    #[test]
    fn year_rejects_future_and_negative() {
        assert_eq!(
            year("2025", 2024),
            Err(ValidationError::YearOutOfRange { max: 2024 })
        );
        assert_eq!(
            year("-1", 2024),
            Err(ValidationError::YearOutOfRange { max: 2024 })
        );
        assert_eq!(
            ValidationError::YearOutOfRange { max: 2024 }.to_string(),
            "Year must be between 0 and 2024."
        );
    }

    #[test]
    fn year_too_large_for_i64_is_out_of_range() {
        assert_eq!(
            year("99999999999999999999", 2024),
            Err(ValidationError::YearOutOfRange { max: 2024 })
        );
        assert_eq!(
            year("-99999999999999999999", 2024),
            Err(ValidationError::YearOutOfRange { max: 2024 })
        );
        assert_eq!(year("+", 2024), Err(ValidationError::YearNotInteger));
    }

    #[test]
    fn year_rejects_non_integers() {
        assert_eq!(year("1965.5", 2024), Err(ValidationError::YearNotInteger));
        assert_eq!(year("soon", 2024), Err(ValidationError::YearNotInteger));
    }

    #[test]
    fn rating_normalizes_numbers() {
        assert_eq!(rating("").unwrap(), "");
        assert_eq!(rating("4").unwrap(), "4.0");
        assert_eq!(rating("4.80").unwrap(), "4.8");
        assert_eq!(rating("0").unwrap(), "0.0");
        assert_eq!(rating("5.0").unwrap(), "5.0");
        assert_eq!(rating("-0").unwrap(), "0.0");
    }

    #[test]
    fn rating_rejects_out_of_range_and_junk() {
        assert_eq!(rating("5.1"), Err(ValidationError::RatingOutOfRange));
        assert_eq!(rating("-0.5"), Err(ValidationError::RatingOutOfRange));
        assert_eq!(rating("NaN"), Err(ValidationError::RatingOutOfRange));
        assert_eq!(rating("great"), Err(ValidationError::RatingNotNumber));
    }

    #[test]
    fn stored_values_skip_unparseable() {
        assert_eq!(stored_year("1950"), Some(1950));
        assert_eq!(stored_year(""), None);
        assert_eq!(stored_year("circa 1900"), None);
        assert_eq!(stored_rating("4.5"), Some(4.5));
        assert_eq!(stored_rating("bad"), None);
        assert_eq!(stored_rating("inf"), None);
    }
}
