use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SumError {
    #[error("both arguments must be provided")]
    MissingArgument,
    #[error("both arguments must be valid numbers")]
    InvalidNumber,
}

/// Validate two dynamically-typed inputs and return their sum
///
/// Absent or null arguments are rejected before the numeric check, and
/// both arguments are validated before any arithmetic happens.
pub fn add_validated(a: Option<&Value>, b: Option<&Value>) -> Result<f64, SumError> {
    let a = require_finite(a)?;
    let b = require_finite(b)?;
    Ok(a + b)
}

fn require_finite(value: Option<&Value>) -> Result<f64, SumError> {
    let value = match value {
        None | Some(Value::Null) => return Err(SumError::MissingArgument),
        Some(value) => value,
    };

    match value.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(SumError::InvalidNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_addition() {
        assert_eq!(add_validated(Some(&json!(5)), Some(&json!(3))), Ok(8.0));
        assert_eq!(
            add_validated(Some(&json!(2.5)), Some(&json!(-1.5))),
            Ok(1.0)
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            add_validated(None, Some(&json!(3))),
            Err(SumError::MissingArgument)
        );
        assert_eq!(
            add_validated(Some(&json!(5)), None),
            Err(SumError::MissingArgument)
        );
        assert_eq!(
            add_validated(Some(&json!(null)), Some(&json!(3))),
            Err(SumError::MissingArgument)
        );
    }

    #[test]
    fn test_non_numeric_arguments() {
        assert_eq!(
            add_validated(Some(&json!("5")), Some(&json!(3))),
            Err(SumError::InvalidNumber)
        );
        assert_eq!(
            add_validated(Some(&json!(5)), Some(&json!(true))),
            Err(SumError::InvalidNumber)
        );
        assert_eq!(
            add_validated(Some(&json!([1, 2])), Some(&json!(3))),
            Err(SumError::InvalidNumber)
        );
    }

    #[test]
    fn test_validation_before_arithmetic() {
        // The first bad argument wins, regardless of the second
        assert_eq!(
            add_validated(None, Some(&json!("not a number"))),
            Err(SumError::MissingArgument)
        );
    }
}
