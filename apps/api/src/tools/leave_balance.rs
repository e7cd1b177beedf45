//! Leave entitlement balance: calendar-month accrual from the employment
//! start date up to an explicit reference date, with an optional cap and
//! a six-month projection.
//!
//! The reference date is an input rather than the wall clock so identical
//! requests always produce identical results.

use chrono::{Datelike, NaiveDate};

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "start_date",
        label: "Employment start date",
        ty: FieldType::Date,
        required: true,
    },
    FieldSpec {
        name: "as_of",
        label: "Balance as of",
        ty: FieldType::Date,
        required: true,
    },
    FieldSpec {
        name: "accrual_rate",
        label: "Accrual rate (hours per month)",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "max_accrual",
        label: "Maximum accrual (hours, 0 = uncapped)",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "leave_taken",
        label: "Leave already taken (hours)",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
]);

pub struct LeaveBalance;

impl Tool for LeaveBalance {
    fn id(&self) -> &'static str {
        "leave-entitlement"
    }

    fn title(&self) -> &'static str {
        "Leave Entitlement Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let start_date = inputs.require_date("start_date")?;
        let as_of = inputs.require_date("as_of")?;
        let accrual_rate = inputs.require_number("accrual_rate")?;
        let max_accrual = inputs.require_number("max_accrual")?;
        let leave_taken = inputs.require_number("leave_taken")?;

        if as_of < start_date {
            return Err(FormError::invalid(
                "as_of",
                "must not be before the employment start date",
            ));
        }

        let months_worked = months_between(start_date, as_of);
        let accrued = cap(months_worked as f64 * accrual_rate, max_accrual);
        let current_balance = accrued - leave_taken;

        let projected_accrued = cap((months_worked + 6) as f64 * accrual_rate, max_accrual);
        let projected_balance = projected_accrued - leave_taken;

        Ok(ViewModel::new()
            .quantity("Total accrued", accrued)
            .quantity("Current balance", current_balance)
            .quantity("Projected balance (6 months)", projected_balance))
    }
}

/// Whole calendar months elapsed, ignoring days of month (the original
/// widget counted year*12 + month deltas).
fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

fn cap(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value.min(max)
    } else {
        value
    }
}
