//! Input validation for prediction requests
//!
//! The boundary is untyped: callers hand over raw JSON values that may be
//! numbers or strings. Each declared field goes through a presence check,
//! coercion to its declared type, and a range check. Failures are
//! accumulated per field rather than short-circuiting, so a caller can
//! report every problem in one pass.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::request::PredictionRequest;

/// Declared bounds for an integer field
struct IntField {
    name: &'static str,
    min: i64,
    max: i64,
}

const AGE: IntField = IntField { name: "age", min: 18, max: 100 };
const GENDER: IntField = IntField { name: "gender", min: 0, max: 1 };
const BLOOD_PRESSURE: IntField = IntField { name: "bloodPressure", min: 80, max: 250 };
const CHOLESTEROL: IntField = IntField { name: "cholesterol", min: 100, max: 600 };
const CHEST_PAIN_TYPE: IntField = IntField { name: "chestPainType", min: 0, max: 3 };

/// Raw field values as received at the boundary, before any checks
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPredictionInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub gender: Option<Value>,
    #[serde(default)]
    pub blood_pressure: Option<Value>,
    #[serde(default)]
    pub cholesterol: Option<Value>,
    #[serde(default)]
    pub chest_pain_type: Option<Value>,
}

/// Per-field validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field was absent
    MissingField { field: &'static str },
    /// Name was present but blank
    EmptyName,
    /// Value could not be coerced to the declared type
    WrongType { field: &'static str, value: String },
    /// Value fell outside the declared inclusive bounds
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    /// The field this error names
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => field,
            Self::EmptyName => "name",
            Self::WrongType { field, .. } => field,
            Self::OutOfRange { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Field '{}' is required", field),
            Self::EmptyName => write!(f, "Field 'name' cannot be empty"),
            Self::WrongType { field, value } => {
                write!(f, "Field '{}' has invalid value {}", field, value)
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Field '{}' value {} is out of range: must be between {} and {}",
                    field, value, min, max
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate raw input into a well-typed request.
///
/// Pure function of its input. On failure, returns one error per offending
/// field in declaration order.
pub fn validate(input: &RawPredictionInput) -> Result<PredictionRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = validate_name(input.name.as_ref(), &mut errors);
    let age = validate_int(input.age.as_ref(), &AGE, &mut errors);
    let gender = validate_int(input.gender.as_ref(), &GENDER, &mut errors);
    let blood_pressure = validate_int(input.blood_pressure.as_ref(), &BLOOD_PRESSURE, &mut errors);
    let cholesterol = validate_int(input.cholesterol.as_ref(), &CHOLESTEROL, &mut errors);
    let chest_pain_type =
        validate_int(input.chest_pain_type.as_ref(), &CHEST_PAIN_TYPE, &mut errors);

    match (name, age, gender, blood_pressure, cholesterol, chest_pain_type) {
        (Some(name), Some(age), Some(gender), Some(bp), Some(chol), Some(cp))
            if errors.is_empty() =>
        {
            Ok(PredictionRequest::new(name, age, gender, bp, chol, cp))
        }
        _ => Err(errors),
    }
}

fn validate_name(value: Option<&Value>, errors: &mut Vec<ValidationError>) -> Option<String> {
    let Some(value) = value else {
        errors.push(ValidationError::MissingField { field: "name" });
        return None;
    };

    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::String(_) => {
            errors.push(ValidationError::EmptyName);
            None
        }
        other => {
            errors.push(ValidationError::WrongType {
                field: "name",
                value: other.to_string(),
            });
            None
        }
    }
}

fn validate_int(
    value: Option<&Value>,
    field: &IntField,
    errors: &mut Vec<ValidationError>,
) -> Option<i64> {
    let Some(value) = value else {
        errors.push(ValidationError::MissingField { field: field.name });
        return None;
    };

    let Some(n) = coerce_int(value) else {
        errors.push(ValidationError::WrongType {
            field: field.name,
            value: value.to_string(),
        });
        return None;
    };

    if n < field.min || n > field.max {
        errors.push(ValidationError::OutOfRange {
            field: field.name,
            value: n,
            min: field.min,
            max: field.max,
        });
        return None;
    }

    Some(n)
}

/// Coerce a raw JSON value to an integer: accepts integer numbers and
/// strings containing an integer.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_input() -> RawPredictionInput {
        RawPredictionInput {
            name: Some(json!("Alex")),
            age: Some(json!(45)),
            gender: Some(json!(1)),
            blood_pressure: Some(json!(140)),
            cholesterol: Some(json!(250)),
            chest_pain_type: Some(json!(2)),
        }
    }

    #[test]
    fn test_valid_input_is_accepted() {
        let request = validate(&valid_input()).unwrap();

        assert_eq!(request.name(), "Alex");
        assert_eq!(request.age(), 45);
        assert_eq!(request.gender(), 1);
        assert_eq!(request.blood_pressure(), 140);
        assert_eq!(request.cholesterol(), 250);
        assert_eq!(request.chest_pain_type(), 2);
    }

    #[test]
    fn test_values_at_inclusive_bounds_are_accepted() {
        let mut input = valid_input();
        input.age = Some(json!(18));
        input.gender = Some(json!(0));
        input.blood_pressure = Some(json!(80));
        input.cholesterol = Some(json!(100));
        input.chest_pain_type = Some(json!(0));
        assert!(validate(&input).is_ok());

        let mut input = valid_input();
        input.age = Some(json!(100));
        input.gender = Some(json!(1));
        input.blood_pressure = Some(json!(250));
        input.cholesterol = Some(json!(600));
        input.chest_pain_type = Some(json!(3));
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_values_outside_bounds_are_rejected() {
        for (field, value) in [
            ("age", json!(17)),
            ("age", json!(101)),
            ("gender", json!(2)),
            ("bloodPressure", json!(79)),
            ("bloodPressure", json!(251)),
            ("cholesterol", json!(99)),
            ("cholesterol", json!(601)),
            ("chestPainType", json!(4)),
        ] {
            let mut input = valid_input();
            match field {
                "age" => input.age = Some(value),
                "gender" => input.gender = Some(value),
                "bloodPressure" => input.blood_pressure = Some(value),
                "cholesterol" => input.cholesterol = Some(value),
                "chestPainType" => input.chest_pain_type = Some(value),
                _ => unreachable!(),
            }

            let errors = validate(&input).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field(), field);
        }
    }

    #[test]
    fn test_out_of_range_names_value_and_bounds() {
        let mut input = valid_input();
        input.age = Some(json!(15));

        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::OutOfRange {
                field: "age",
                value: 15,
                min: 18,
                max: 100,
            }]
        );
    }

    #[test]
    fn test_multiple_bad_fields_yield_one_error_each() {
        let input = RawPredictionInput {
            name: Some(json!("")),
            age: Some(json!(15)),
            gender: Some(json!(1)),
            blood_pressure: None,
            cholesterol: Some(json!("not-a-number")),
            chest_pain_type: Some(json!(9)),
        };

        let errors = validate(&input).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();

        // Declaration order, one per offending field
        assert_eq!(
            fields,
            vec!["name", "age", "bloodPressure", "cholesterol", "chestPainType"]
        );
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = validate(&RawPredictionInput::default()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::MissingField { .. })));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let mut input = valid_input();
        input.age = Some(json!("45"));
        input.blood_pressure = Some(json!(" 140 "));

        let request = validate(&input).unwrap();
        assert_eq!(request.age(), 45);
        assert_eq!(request.blood_pressure(), 140);
    }

    #[test]
    fn test_non_integer_values_are_rejected() {
        let mut input = valid_input();
        input.age = Some(json!(45.5));

        let errors = validate(&input).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::WrongType { field: "age", .. }
        ));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut input = valid_input();
        input.name = Some(json!("   "));

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyName]);
    }

    #[test]
    fn test_non_string_name_is_rejected() {
        let mut input = valid_input();
        input.name = Some(json!(42));

        let errors = validate(&input).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::WrongType { field: "name", .. }
        ));
    }
}
