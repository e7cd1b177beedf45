//! Salary increase recommendation: a performance-rating table plus a
//! market adjustment, clamped to the merit budget.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "current_salary",
        label: "Current annual salary",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "performance_rating",
        label: "Performance rating (1-5)",
        ty: FieldType::Integer {
            min: Some(1),
            max: Some(5),
        },
        required: true,
    },
    FieldSpec {
        name: "market_adjustment",
        label: "Market adjustment (%)",
        ty: FieldType::Number {
            min: None,
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "budget_constraint",
        label: "Budget cap (%)",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
]);

/// Base merit percent per rating band.
const RATING_INCREASES: &[(i64, f64)] = &[(1, 0.0), (2, 1.0), (3, 2.5), (4, 4.0), (5, 6.0)];

pub struct SalaryIncrease;

impl Tool for SalaryIncrease {
    fn id(&self) -> &'static str {
        "salary-increase"
    }

    fn title(&self) -> &'static str {
        "Employee Salary Increase Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let salary = inputs.require_number("current_salary")?;
        let rating = inputs.require_integer("performance_rating")?;
        let market = inputs.require_number("market_adjustment")?;
        let budget = inputs.require_number("budget_constraint")?;

        let base = RATING_INCREASES
            .iter()
            .find(|(r, _)| *r == rating)
            .map(|(_, pct)| *pct)
            .ok_or_else(|| FormError::invalid("performance_rating", "must be between 1 and 5"))?;

        let recommended = (base + market).min(budget);
        let new_salary = salary + salary * (recommended / 100.0);

        Ok(ViewModel::new()
            .percent("Recommended increase", recommended)
            .currency("New annual salary", new_salary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compute(salary: f64, rating: i64, market: f64, budget: f64) -> Result<ViewModel, FormError> {
        let raw = json!({
            "current_salary": salary,
            "performance_rating": rating,
            "market_adjustment": market,
            "budget_constraint": budget,
        });
        let inputs = SCHEMA.validate(raw.as_object().unwrap())?;
        SalaryIncrease.compute(&inputs, &StatutoryRules::default())
    }

    #[test]
    fn test_top_performer_within_budget() {
        // 6% base + 1% market = 7%, budget 10%.
        let view = compute(80000.0, 5, 1.0, 10.0).unwrap();
        assert_eq!(view.value_of("Recommended increase"), Some("7.00%"));
        assert_eq!(view.value_of("New annual salary"), Some("85600.00"));
    }

    #[test]
    fn test_budget_cap_clamps() {
        // 6% + 4% = 10%, clamped to 3%.
        let view = compute(60000.0, 5, 4.0, 3.0).unwrap();
        assert_eq!(view.value_of("Recommended increase"), Some("3.00%"));
        assert_eq!(view.value_of("New annual salary"), Some("61800.00"));
    }

    #[test]
    fn test_lowest_rating_no_base_increase() {
        let view = compute(50000.0, 1, 0.0, 5.0).unwrap();
        assert_eq!(view.value_of("Recommended increase"), Some("0.00%"));
        assert_eq!(view.value_of("New annual salary"), Some("50000.00"));
    }

    #[test]
    fn test_negative_market_adjustment_allowed() {
        // 2.5% - 1% = 1.5%.
        let view = compute(40000.0, 3, -1.0, 10.0).unwrap();
        assert_eq!(view.value_of("Recommended increase"), Some("1.50%"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let raw = json!({
            "current_salary": 50000, "performance_rating": 6,
            "market_adjustment": 0, "budget_constraint": 5,
        });
        let err = SCHEMA.validate(raw.as_object().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "performance_rating",
                ..
            }
        ));
    }
}
