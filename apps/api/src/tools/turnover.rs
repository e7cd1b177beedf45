//! Employee turnover rate: separations over the average of period
//! start/end headcounts, as a percentage.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "employees_start",
        label: "Employees at start of period",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "employees_end",
        label: "Employees at end of period",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "separations",
        label: "Separations during period",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
]);

pub struct TurnoverRate;

impl Tool for TurnoverRate {
    fn id(&self) -> &'static str {
        "employee-turnover"
    }

    fn title(&self) -> &'static str {
        "Employee Turnover Rate Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let start = inputs.require_number("employees_start")?;
        let end = inputs.require_number("employees_end")?;
        let separations = inputs.require_number("separations")?;

        let average = (start + end) / 2.0;
        if average <= 0.0 {
            return Err(FormError::rule(
                "Average employee count must be greater than zero",
            ));
        }

        let rate = (separations / average) * 100.0;
        Ok(ViewModel::new()
            .quantity("Average employees", average)
            .percent("Turnover rate", rate))
    }
}
