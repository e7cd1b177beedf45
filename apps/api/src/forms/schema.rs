use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::forms::field::{FieldSpec, FieldType, FieldValue, Inputs};
use crate::forms::FormError;

/// The fixed, widget-specific set of named fields a tool accepts.
/// Schemas are static data; validation is the only entry point that
/// produces `Inputs`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    fields: &'static [FieldSpec],
}

impl FormSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Coerces a raw JSON object against the declared field types.
    /// Browser forms submit numbers as either JSON numbers or strings;
    /// both are accepted. Unknown keys are ignored. `null` and empty
    /// strings count as absent.
    pub fn validate(&self, raw: &Map<String, Value>) -> Result<Inputs, FormError> {
        let mut inputs = Inputs::default();

        for spec in self.fields {
            let value = match raw.get(spec.name) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) if s.trim().is_empty() => None,
                Some(v) => Some(v),
            };

            let value = match value {
                Some(v) => v,
                None => {
                    if spec.required {
                        return Err(FormError::MissingField(spec.name));
                    }
                    continue;
                }
            };

            inputs.insert(spec.name, coerce(spec, value)?);
        }

        Ok(inputs)
    }
}

fn coerce(spec: &FieldSpec, value: &Value) -> Result<FieldValue, FormError> {
    match &spec.ty {
        FieldType::Number { min, max } => {
            let n = as_f64(spec.name, value)?;
            check_f64_bounds(spec.name, n, *min, *max)?;
            Ok(FieldValue::Number(n))
        }
        FieldType::Integer { min, max } => {
            let n = as_i64(spec.name, value)?;
            if let Some(min) = min {
                if n < *min {
                    return Err(FormError::invalid(spec.name, format!("must be at least {min}")));
                }
            }
            if let Some(max) = max {
                if n > *max {
                    return Err(FormError::invalid(spec.name, format!("must be at most {max}")));
                }
            }
            Ok(FieldValue::Integer(n))
        }
        FieldType::Date => {
            let s = as_str(spec.name, value)?;
            let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|_| FormError::invalid(spec.name, "expected a date in YYYY-MM-DD format"))?;
            Ok(FieldValue::Date(date))
        }
        FieldType::Choice { options } => {
            let s = as_str(spec.name, value)?.trim();
            if options.contains(&s) {
                Ok(FieldValue::Choice(s.to_string()))
            } else {
                Err(FormError::invalid(
                    spec.name,
                    format!("must be one of: {}", options.join(", ")),
                ))
            }
        }
        FieldType::NumberList { min } => {
            let items = as_array(spec.name, value)?;
            let mut numbers = Vec::with_capacity(items.len());
            for item in items {
                let n = as_f64(spec.name, item)?;
                if n < *min {
                    return Err(FormError::invalid(
                        spec.name,
                        format!("entries must be at least {min}"),
                    ));
                }
                numbers.push(n);
            }
            Ok(FieldValue::Numbers(numbers))
        }
        FieldType::TextList => {
            let items = as_array(spec.name, value)?;
            let mut texts = Vec::with_capacity(items.len());
            for item in items {
                texts.push(as_str(spec.name, item)?.trim().to_string());
            }
            Ok(FieldValue::Texts(texts))
        }
        FieldType::Text => Ok(FieldValue::Text(as_str(spec.name, value)?.trim().to_string())),
    }
}

fn as_f64(field: &'static str, value: &Value) -> Result<f64, FormError> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match n {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(FormError::invalid(field, "expected a number")),
    }
}

fn as_i64(field: &'static str, value: &Value) -> Result<i64, FormError> {
    let n = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    n.ok_or_else(|| FormError::invalid(field, "expected a whole number"))
}

fn as_str<'v>(field: &'static str, value: &'v Value) -> Result<&'v str, FormError> {
    value
        .as_str()
        .ok_or_else(|| FormError::invalid(field, "expected a string"))
}

fn as_array<'v>(field: &'static str, value: &'v Value) -> Result<&'v [Value], FormError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| FormError::invalid(field, "expected a list"))
}

fn check_f64_bounds(
    field: &'static str,
    n: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<(), FormError> {
    if let Some(min) = min {
        if n < min {
            return Err(FormError::invalid(field, format!("must be at least {min}")));
        }
    }
    if let Some(max) = max {
        if n > max {
            return Err(FormError::invalid(field, format!("must be at most {max}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: FormSchema = FormSchema::new(&[
        FieldSpec {
            name: "weekly_pay",
            label: "Weekly pay",
            ty: FieldType::Number {
                min: Some(0.0),
                max: None,
            },
            required: true,
        },
        FieldSpec {
            name: "age",
            label: "Age",
            ty: FieldType::Integer {
                min: Some(16),
                max: Some(100),
            },
            required: true,
        },
        FieldSpec {
            name: "start_date",
            label: "Start date",
            ty: FieldType::Date,
            required: false,
        },
        FieldSpec {
            name: "work_mode",
            label: "Work mode",
            ty: FieldType::Choice {
                options: &["onsite", "remote", "hybrid"],
            },
            required: false,
        },
        FieldSpec {
            name: "costs",
            label: "Cost items",
            ty: FieldType::NumberList { min: 0.0 },
            required: false,
        },
    ]);

    fn raw(v: Value) -> Map<String, Value> {
        v.as_object().cloned().expect("test input must be an object")
    }

    #[test]
    fn test_accepts_native_numbers_and_strings() {
        let a = SCHEMA
            .validate(&raw(json!({"weekly_pay": 500.0, "age": 45})))
            .unwrap();
        let b = SCHEMA
            .validate(&raw(json!({"weekly_pay": "500", "age": "45"})))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.number("weekly_pay"), Some(500.0));
    }

    #[test]
    fn test_missing_required_names_field() {
        let err = SCHEMA.validate(&raw(json!({"age": 45}))).unwrap_err();
        assert_eq!(err, FormError::MissingField("weekly_pay"));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let err = SCHEMA
            .validate(&raw(json!({"weekly_pay": "  ", "age": 45})))
            .unwrap_err();
        assert_eq!(err, FormError::MissingField("weekly_pay"));
    }

    #[test]
    fn test_non_numeric_string_rejected() {
        let err = SCHEMA
            .validate(&raw(json!({"weekly_pay": "lots", "age": 45})))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidField { field: "weekly_pay", .. }));
    }

    #[test]
    fn test_range_bounds_enforced() {
        let err = SCHEMA
            .validate(&raw(json!({"weekly_pay": -1, "age": 45})))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidField { field: "weekly_pay", .. }));

        let err = SCHEMA
            .validate(&raw(json!({"weekly_pay": 500, "age": 15})))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidField { field: "age", .. }));
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = SCHEMA
            .validate(&raw(
                json!({"weekly_pay": 500, "age": 45, "start_date": "01/02/2024"}),
            ))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidField { field: "start_date", .. }));
    }

    #[test]
    fn test_choice_membership() {
        let ok = SCHEMA
            .validate(&raw(
                json!({"weekly_pay": 500, "age": 45, "work_mode": "remote"}),
            ))
            .unwrap();
        assert_eq!(ok.text("work_mode"), Some("remote"));

        let err = SCHEMA
            .validate(&raw(
                json!({"weekly_pay": 500, "age": 45, "work_mode": "moon"}),
            ))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidField { field: "work_mode", .. }));
    }

    #[test]
    fn test_number_list_coercion() {
        let ok = SCHEMA
            .validate(&raw(
                json!({"weekly_pay": 500, "age": 45, "costs": [1000, "2500.5"]}),
            ))
            .unwrap();
        assert_eq!(ok.numbers("costs"), Some(&[1000.0, 2500.5][..]));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let ok = SCHEMA
            .validate(&raw(
                json!({"weekly_pay": 500, "age": 45, "utm_source": "newsletter"}),
            ))
            .unwrap();
        assert_eq!(ok.number("utm_source"), None);
    }

    #[test]
    fn test_validate_is_deterministic() {
        let payload = raw(json!({"weekly_pay": "500", "age": 45, "costs": [1, 2, 3]}));
        assert_eq!(SCHEMA.validate(&payload), SCHEMA.validate(&payload));
    }
}
