use crate::error::ValidationError;

/// Validates the two raw entry fields and parses them into numbers.
///
/// An empty field (before any trimming) is `MissingField`; anything that does
/// not parse as a finite number strictly greater than zero is `InvalidRange`.
/// Whitespace-only input counts as present but non-numeric.
pub fn validate_entry(raw_stock: &str, raw_price: &str) -> Result<(f64, f64), ValidationError> {
    if raw_stock.is_empty() || raw_price.is_empty() {
        return Err(ValidationError::MissingField);
    }

    let stock = parse_positive(raw_stock)?;
    let price = parse_positive(raw_price)?;
    Ok((stock, price))
}

fn parse_positive(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidRange)?;

    // "NaN" and "inf" parse successfully, so finiteness is checked explicitly
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidRange);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_numbers() {
        assert_eq!(validate_entry("5", "2.00"), Ok((5.0, 2.0)));
        assert_eq!(validate_entry("0.5", "19.99"), Ok((0.5, 19.99)));
        assert_eq!(validate_entry(" 3 ", " 4 "), Ok((3.0, 4.0)));
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(validate_entry("", "2"), Err(ValidationError::MissingField));
        assert_eq!(validate_entry("5", ""), Err(ValidationError::MissingField));
        assert_eq!(validate_entry("", ""), Err(ValidationError::MissingField));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            validate_entry("abc", "2"),
            Err(ValidationError::InvalidRange)
        );
        assert_eq!(
            validate_entry("5", "1,50"),
            Err(ValidationError::InvalidRange)
        );
        assert_eq!(
            validate_entry("  ", "2"),
            Err(ValidationError::InvalidRange)
        );
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(validate_entry("0", "2"), Err(ValidationError::InvalidRange));
        assert_eq!(
            validate_entry("5", "-1"),
            Err(ValidationError::InvalidRange)
        );
        assert_eq!(
            validate_entry("-0.01", "2"),
            Err(ValidationError::InvalidRange)
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            validate_entry("NaN", "2"),
            Err(ValidationError::InvalidRange)
        );
        assert_eq!(
            validate_entry("inf", "2"),
            Err(ValidationError::InvalidRange)
        );
    }

    #[test]
    fn error_messages_match_the_ui_strings() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Please fill both stock and price fields"
        );
        assert_eq!(
            ValidationError::InvalidRange.to_string(),
            "Stock and price must be positive numbers"
        );
    }
}
