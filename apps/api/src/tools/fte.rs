//! Full-time equivalent headcount: full-time staff plus part-time hours
//! expressed as fractions of the standard full-time week.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "full_time_employees",
        label: "Full-time employees",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "part_time_hours",
        label: "Part-time weekly hours per employee",
        ty: FieldType::NumberList { min: 0.0 },
        required: false,
    },
    FieldSpec {
        name: "standard_full_time_hours",
        label: "Standard full-time hours per week",
        ty: FieldType::Number {
            min: None,
            max: None,
        },
        required: true,
    },
]);

pub struct FullTimeEquivalent;

impl Tool for FullTimeEquivalent {
    fn id(&self) -> &'static str {
        "fte"
    }

    fn title(&self) -> &'static str {
        "FTE Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let full_time = inputs.require_number("full_time_employees")?;
        let standard_hours = inputs.require_number("standard_full_time_hours")?;
        let part_time_hours = inputs.numbers("part_time_hours").unwrap_or(&[]);

        if standard_hours <= 0.0 {
            return Err(FormError::invalid(
                "standard_full_time_hours",
                "must be greater than zero",
            ));
        }

        let part_time_fte: f64 = part_time_hours
            .iter()
            .filter(|h| **h > 0.0)
            .map(|h| h / standard_hours)
            .sum();
        let total = full_time + part_time_fte;

        let interpretation = if total > 0.0 {
            format!(
                "Your organization has a total of {total:.2} full-time equivalent employees."
            )
        } else {
            "Please enter employee data to calculate FTE.".to_string()
        };

        Ok(ViewModel::new()
            .quantity("Total FTE", total)
            .text("Interpretation", interpretation))
    }
}
