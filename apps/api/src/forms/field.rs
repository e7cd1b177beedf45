use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::forms::FormError;

/// Declared type and constraint of a single input field.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    /// ISO `YYYY-MM-DD`.
    Date,
    Choice {
        options: &'static [&'static str],
    },
    /// A variable-length list of numbers (dynamic form rows).
    NumberList {
        min: f64,
    },
    /// A variable-length list of free-text entries.
    TextList,
    Text,
}

/// One field of a widget's typed input record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub ty: FieldType,
    pub required: bool,
}

/// A coerced input value. Produced only by schema validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Integer(i64),
    Date(NaiveDate),
    Choice(String),
    Numbers(Vec<f64>),
    Texts(Vec<String>),
    Text(String),
}

/// Validated inputs for one compute call, keyed by declared field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Inputs {
    pub(crate) fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(FieldValue::Number(n)) => Some(*n),
            Some(FieldValue::Integer(n)) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(FieldValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.values.get(name) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn numbers(&self, name: &str) -> Option<&[f64]> {
        match self.values.get(name) {
            Some(FieldValue::Numbers(v)) => Some(v),
            _ => None,
        }
    }

    pub fn texts(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(FieldValue::Texts(v)) => Some(v),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) | Some(FieldValue::Choice(s)) => Some(s),
            _ => None,
        }
    }

    // Required accessors for fields the schema guarantees are present.
    // Tools use these instead of unwrapping.

    pub fn require_number(&self, name: &'static str) -> Result<f64, FormError> {
        self.number(name).ok_or(FormError::MissingField(name))
    }

    pub fn require_integer(&self, name: &'static str) -> Result<i64, FormError> {
        self.integer(name).ok_or(FormError::MissingField(name))
    }

    pub fn require_date(&self, name: &'static str) -> Result<NaiveDate, FormError> {
        self.date(name).ok_or(FormError::MissingField(name))
    }

    pub fn require_text(&self, name: &'static str) -> Result<&str, FormError> {
        self.text(name).ok_or(FormError::MissingField(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_readable_as_number() {
        let mut inputs = Inputs::default();
        inputs.insert("age", FieldValue::Integer(45));
        assert_eq!(inputs.number("age"), Some(45.0));
        assert_eq!(inputs.integer("age"), Some(45));
    }

    #[test]
    fn test_require_missing_names_field() {
        let inputs = Inputs::default();
        assert_eq!(
            inputs.require_number("weekly_pay"),
            Err(FormError::MissingField("weekly_pay"))
        );
    }

    #[test]
    fn test_choice_readable_as_text() {
        let mut inputs = Inputs::default();
        inputs.insert("work_mode", FieldValue::Choice("remote".to_string()));
        assert_eq!(inputs.text("work_mode"), Some("remote"));
    }
}
