//! # quantity
//!
//! why: keep malformed text out of the data model with one explicit parse step
//! relations: used by diary.rs for create and update input handling
//! what: Quantities struct, free-form text parsing with either decimal separator

use crate::errors::ValidationError;

/// The three tracked quantities after parsing and validation
///
/// The only path by which numbers enter an [`Entry`](crate::Entry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantities {
    pub whey: f64,
    pub eggs: f64,
    pub rice: f64,
}

impl Quantities {
    /// Parse the three raw form inputs into validated quantities
    ///
    /// Inputs may use `.` or `,` as decimal separator. Fails on empty
    /// input, anything that does not parse to a finite number, and
    /// negative values.
    pub fn parse(
        raw_whey: &str,
        raw_eggs: &str,
        raw_rice: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            whey: parse_quantity("whey", raw_whey)?,
            eggs: parse_quantity("eggs", raw_eggs)?,
            rice: parse_quantity("rice", raw_rice)?,
        })
    }
}

/// Parse a single free-form quantity field
fn parse_quantity(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let value: f64 = trimmed.replace(',', ".").parse().map_err(|_| {
        ValidationError::NotANumber {
            field,
            raw: raw.to_string(),
        }
    })?;
    // "inf" and "NaN" parse successfully but are not usable quantities
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            raw: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        let q = Quantities::parse("2", "6", "150").unwrap();
        assert_eq!(q.whey, 2.0);
        assert_eq!(q.eggs, 6.0);
        assert_eq!(q.rice, 150.0);
    }

    #[test]
    fn accepts_comma_as_decimal_separator() {
        let q = Quantities::parse("1,5", "3", "200.5").unwrap();
        assert_eq!(q.whey, 1.5);
        assert_eq!(q.rice, 200.5);
    }

    #[test]
    fn rejects_empty_input() {
        let err = Quantities::parse("", "6", "150").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "whey" });
    }

    #[test]
    fn rejects_whitespace_only_input() {
        let err = Quantities::parse("2", "   ", "150").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "eggs" });
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = Quantities::parse("2", "6", "lots").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotANumber { field: "rice", .. }
        ));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(Quantities::parse("inf", "6", "150").is_err());
        assert!(Quantities::parse("2", "NaN", "150").is_err());
    }

    #[test]
    fn rejects_negative_input() {
        let err = Quantities::parse("-1", "6", "150").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Negative { field: "whey", .. }
        ));
    }

    #[test]
    fn zero_is_a_valid_quantity() {
        let q = Quantities::parse("0", "0,0", "0.0").unwrap();
        assert_eq!(q.whey, 0.0);
        assert_eq!(q.eggs, 0.0);
        assert_eq!(q.rice, 0.0);
    }
}
