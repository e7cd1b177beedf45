//! Gross-to-net pay: taxable income after pre-tax deductions, combined
//! federal and state tax, then post-tax deductions.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "gross_pay",
        label: "Gross pay",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "pre_tax_deductions",
        label: "Pre-tax deductions",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "federal_tax_rate",
        label: "Federal tax rate (%)",
        ty: FieldType::Number {
            min: Some(0.0),
            max: Some(100.0),
        },
        required: true,
    },
    FieldSpec {
        name: "state_tax_rate",
        label: "State tax rate (%)",
        ty: FieldType::Number {
            min: Some(0.0),
            max: Some(100.0),
        },
        required: true,
    },
    FieldSpec {
        name: "other_deductions",
        label: "Post-tax deductions",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
]);

pub struct GrossToNetPay;

impl Tool for GrossToNetPay {
    fn id(&self) -> &'static str {
        "gross-to-net-pay"
    }

    fn title(&self) -> &'static str {
        "Gross to Net Pay Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let gross = inputs.require_number("gross_pay")?;
        let pre_tax = inputs.require_number("pre_tax_deductions")?;
        let federal = inputs.require_number("federal_tax_rate")? / 100.0;
        let state = inputs.require_number("state_tax_rate")? / 100.0;
        let other = inputs.require_number("other_deductions")?;

        if pre_tax > gross {
            return Err(FormError::invalid(
                "pre_tax_deductions",
                "cannot exceed gross pay",
            ));
        }

        let taxable = gross - pre_tax;
        let taxes = taxable * (federal + state);
        let net = taxable - taxes - other;

        Ok(ViewModel::new()
            .currency("Taxable income", taxable)
            .currency("Total taxes", taxes)
            .currency("Net pay", net))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compute(
        gross: f64,
        pre_tax: f64,
        federal: f64,
        state: f64,
        other: f64,
    ) -> Result<ViewModel, FormError> {
        let raw = json!({
            "gross_pay": gross,
            "pre_tax_deductions": pre_tax,
            "federal_tax_rate": federal,
            "state_tax_rate": state,
            "other_deductions": other,
        });
        let inputs = SCHEMA.validate(raw.as_object().unwrap())?;
        GrossToNetPay.compute(&inputs, &StatutoryRules::default())
    }

    #[test]
    fn test_typical_paycheck() {
        // taxable 4500, taxes 4500 * 0.27 = 1215, net 4500 - 1215 - 150.
        let view = compute(5000.0, 500.0, 22.0, 5.0, 150.0).unwrap();
        assert_eq!(view.value_of("Taxable income"), Some("4500.00"));
        assert_eq!(view.value_of("Total taxes"), Some("1215.00"));
        assert_eq!(view.value_of("Net pay"), Some("3135.00"));
    }

    #[test]
    fn test_zero_rates() {
        let view = compute(3000.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(view.value_of("Net pay"), Some("3000.00"));
    }

    #[test]
    fn test_rate_above_100_rejected() {
        let raw = json!({
            "gross_pay": 5000, "pre_tax_deductions": 0,
            "federal_tax_rate": 120, "state_tax_rate": 5, "other_deductions": 0,
        });
        let err = SCHEMA.validate(raw.as_object().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "federal_tax_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_pre_tax_exceeding_gross_rejected() {
        let err = compute(1000.0, 1500.0, 10.0, 5.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "pre_tax_deductions",
                ..
            }
        ));
    }
}
