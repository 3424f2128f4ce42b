//! Boundary checks that turn untyped request values into typed ones.

use serde_json::Value;
use thiserror::Error;
use validator::ValidationErrors;

/// Caller-supplied data violated a precondition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a finite number")]
    NotANumber(&'static str),

    #[error("{0}")]
    Constraint(#[from] ValidationErrors),
}

/// Trim whitespace from both ends, counting the byte order mark as whitespace
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Require a text field to be present, returning it trimmed
///
/// Emptiness is left to the `Validate` rules of the typed value the text ends up in.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    value
        .map(|text| trim_text(&text).to_string())
        .ok_or(ValidationError::Missing(field))
}

/// Parse a coordinate from a JSON body value
///
/// Accepts JSON numbers and strings holding a number. Anything that does not
/// come out as a finite `f64` is rejected.
pub fn parse_coordinate(field: &'static str, value: Option<&Value>) -> Result<f64, ValidationError> {
    let parsed = match value {
        None | Some(Value::Null) => return Err(ValidationError::Missing(field)),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => trim_text(text).parse::<f64>().ok(),
        Some(_) => None,
    };

    finite(field, parsed)
}

/// Parse a coordinate from a query string parameter
pub fn parse_query_coordinate(field: &'static str, value: Option<&str>) -> Result<f64, ValidationError> {
    let text = value.ok_or(ValidationError::Missing(field))?;
    finite(field, trim_text(text).parse::<f64>().ok())
}

fn finite(field: &'static str, parsed: Option<f64>) -> Result<f64, ValidationError> {
    parsed
        .filter(|number| number.is_finite())
        .ok_or(ValidationError::NotANumber(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("name", Some("  Oak Hill  ".to_string())).unwrap(), "Oak Hill");
        assert_eq!(require_text("name", Some("   ".to_string())).unwrap(), "");
        assert_eq!(require_text("name", None), Err(ValidationError::Missing("name")));
    }

    #[test]
    fn test_trim_text_strips_byte_order_mark() {
        assert_eq!(trim_text("\u{FEFF}"), "");
        assert_eq!(trim_text("\u{FEFF} Oak Hill \u{00A0}\n"), "Oak Hill");
        assert_eq!(trim_text("Oak\u{FEFF}Hill"), "Oak\u{FEFF}Hill");
        assert_eq!(require_text("name", Some("\u{FEFF}".to_string())).unwrap(), "");
    }

    #[test]
    fn test_parse_coordinate_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_coordinate("latitude", Some(&json!(12.5))).unwrap(), 12.5);
        assert_eq!(parse_coordinate("latitude", Some(&json!(-7))).unwrap(), -7.0);
        assert_eq!(parse_coordinate("latitude", Some(&json!(" 45.25 "))).unwrap(), 45.25);
    }

    #[test]
    fn test_parse_coordinate_rejects_garbage() {
        assert_eq!(
            parse_coordinate("latitude", None),
            Err(ValidationError::Missing("latitude"))
        );
        assert_eq!(
            parse_coordinate("latitude", Some(&Value::Null)),
            Err(ValidationError::Missing("latitude"))
        );
        for bad in [json!("abc"), json!(""), json!("NaN"), json!("inf"), json!(true), json!([1.0])] {
            assert_eq!(
                parse_coordinate("latitude", Some(&bad)),
                Err(ValidationError::NotANumber("latitude")),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_query_coordinate() {
        assert_eq!(parse_query_coordinate("lat", Some("19.07")).unwrap(), 19.07);
        assert_eq!(parse_query_coordinate("lat", None), Err(ValidationError::Missing("lat")));
        assert_eq!(
            parse_query_coordinate("lat", Some("north")),
            Err(ValidationError::NotANumber("lat"))
        );
        assert_eq!(
            parse_query_coordinate("lng", Some("-infinity")),
            Err(ValidationError::NotANumber("lng"))
        );
    }
}
