//! Overtime pay: regular hours at base rate, overtime hours at base rate
//! times a multiplier of at least 1.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "hourly_rate",
        label: "Hourly rate",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "regular_hours",
        label: "Regular hours",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "overtime_hours",
        label: "Overtime hours",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "overtime_multiplier",
        label: "Overtime multiplier",
        ty: FieldType::Number {
            min: Some(1.0),
            max: None,
        },
        required: true,
    },
]);

pub struct OvertimePay;

impl Tool for OvertimePay {
    fn id(&self) -> &'static str {
        "overtime-pay"
    }

    fn title(&self) -> &'static str {
        "Overtime Pay Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let rate = inputs.require_number("hourly_rate")?;
        let regular_hours = inputs.require_number("regular_hours")?;
        let overtime_hours = inputs.require_number("overtime_hours")?;
        let multiplier = inputs.require_number("overtime_multiplier")?;

        let regular_pay = rate * regular_hours;
        let overtime_pay = rate * overtime_hours * multiplier;

        Ok(ViewModel::new()
            .currency("Regular pay", regular_pay)
            .currency("Overtime pay", overtime_pay)
            .currency("Total pay", regular_pay + overtime_pay))
    }
}
