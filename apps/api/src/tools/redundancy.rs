//! UK statutory redundancy pay.
//!
//! Weeks accrue per year of service walking the employee's age backwards
//! from the redundancy year: 1.5 weeks for years worked at age 41+,
//! 1.0 for ages 22-40, 0.5 below 22. Weekly pay and counted service are
//! capped; caps and the minimum qualifying service come from
//! `StatutoryRules` rather than hard-coded figures.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "age",
        label: "Age at redundancy",
        ty: FieldType::Integer {
            min: Some(16),
            max: Some(100),
        },
        required: true,
    },
    FieldSpec {
        name: "years_service",
        label: "Years of continuous service",
        ty: FieldType::Integer {
            min: Some(0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "weekly_pay",
        label: "Gross weekly pay",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
]);

pub struct UkRedundancyPay;

impl Tool for UkRedundancyPay {
    fn id(&self) -> &'static str {
        "uk-redundancy-pay"
    }

    fn title(&self) -> &'static str {
        "UK Redundancy Pay Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let age = inputs.require_integer("age")?;
        let years_service = inputs.require_integer("years_service")?;
        let weekly_pay = inputs.require_number("weekly_pay")?;

        if years_service < i64::from(rules.redundancy_min_service_years) {
            return Ok(ViewModel::new()
                .currency("Statutory redundancy pay", 0.0)
                .warn(format!(
                    "At least {} years of continuous service are required for statutory redundancy pay",
                    rules.redundancy_min_service_years
                )));
        }

        let capped_pay = weekly_pay.min(rules.redundancy_weekly_pay_cap);
        let capped_years = years_service.min(i64::from(rules.redundancy_max_service_years));

        let weeks = qualifying_weeks(age, capped_years);
        let total = weeks * capped_pay;

        let mut view = ViewModel::new()
            .currency("Statutory redundancy pay", total)
            .quantity("Qualifying weeks", weeks);
        if weekly_pay > rules.redundancy_weekly_pay_cap {
            view = view.warn(format!(
                "Weekly pay capped at the statutory maximum of {:.2}",
                rules.redundancy_weekly_pay_cap
            ));
        }
        Ok(view)
    }
}

/// Banded weeks for each counted year, aging backwards from `age`.
fn qualifying_weeks(age: i64, capped_years: i64) -> f64 {
    let mut weeks = 0.0;
    for year in 0..capped_years {
        let age_that_year = age - year;
        weeks += if age_that_year >= 41 {
            1.5
        } else if age_that_year >= 22 {
            1.0
        } else {
            0.5
        };
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compute_with(
        age: i64,
        years: i64,
        pay: f64,
        rules: &StatutoryRules,
    ) -> Result<ViewModel, FormError> {
        let raw = json!({"age": age, "years_service": years, "weekly_pay": pay});
        let inputs = SCHEMA.validate(raw.as_object().unwrap())?;
        UkRedundancyPay.compute(&inputs, rules)
    }

    fn compute(age: i64, years: i64, pay: f64) -> Result<ViewModel, FormError> {
        compute_with(age, years, pay, &StatutoryRules::default())
    }

    #[test]
    fn test_age_45_ten_years_500() {
        // Ages 45..41 earn 1.5 weeks, 40..36 earn 1.0: 12.5 weeks * 500.
        let view = compute(45, 10, 500.0).unwrap();
        assert_eq!(view.value_of("Statutory redundancy pay"), Some("6250.00"));
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_weekly_pay_cap_applied() {
        // Ages 50..41 earn 1.5 weeks, 40..39 earn 1.0: 17 weeks * 700 (capped).
        let view = compute(50, 12, 800.0).unwrap();
        assert_eq!(view.value_of("Statutory redundancy pay"), Some("11900.00"));
        assert_eq!(view.warnings.len(), 1);
    }

    #[test]
    fn test_under_two_years_zero_with_warning() {
        let view = compute(30, 1, 500.0).unwrap();
        assert_eq!(view.value_of("Statutory redundancy pay"), Some("0.00"));
        assert_eq!(view.warnings.len(), 1);
        assert!(view.warnings[0].contains("2 years"));
    }

    #[test]
    fn test_service_years_cap() {
        // 30 years of service counts only the configured maximum of 20.
        let view = compute(60, 30, 400.0).unwrap();
        // All 20 counted years are at age 41+: 30 weeks * 400.
        assert_eq!(view.value_of("Statutory redundancy pay"), Some("12000.00"));
    }

    #[test]
    fn test_young_worker_half_week_band() {
        // Ages 21, 20, 19 all earn 0.5 weeks: 1.5 weeks * 300.
        let view = compute(21, 3, 300.0).unwrap();
        assert_eq!(view.value_of("Statutory redundancy pay"), Some("450.00"));
    }

    #[test]
    fn test_band_transition_mid_service() {
        // Age 24 with 4 years: 24, 23, 22 earn 1.0, 21 earns 0.5 = 3.5 weeks.
        let view = compute(24, 4, 200.0).unwrap();
        assert_eq!(view.value_of("Statutory redundancy pay"), Some("700.00"));
        assert_eq!(view.value_of("Qualifying weeks"), Some("3.50"));
    }

    #[test]
    fn test_configured_rules_override_defaults() {
        let rules = StatutoryRules {
            redundancy_weekly_pay_cap: 1000.0,
            redundancy_max_service_years: 20,
            redundancy_min_service_years: 2,
        };
        // Cap no longer binds: 17 weeks * 800.
        let view = compute_with(50, 12, 800.0, &rules).unwrap();
        assert_eq!(view.value_of("Statutory redundancy pay"), Some("13600.00"));
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(compute(45, 10, 500.0), compute(45, 10, 500.0));
    }
}
