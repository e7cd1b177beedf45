//! Cost per hire: total of itemized recruiting costs divided by hires.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "costs",
        label: "Recruiting cost items",
        ty: FieldType::NumberList { min: 0.0 },
        required: true,
    },
    FieldSpec {
        name: "hires",
        label: "Number of hires",
        ty: FieldType::Number {
            min: Some(0.0),
            max: None,
        },
        required: true,
    },
]);

pub struct CostPerHire;

impl Tool for CostPerHire {
    fn id(&self) -> &'static str {
        "cost-per-hire"
    }

    fn title(&self) -> &'static str {
        "Cost per Hire Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let costs = inputs
            .numbers("costs")
            .ok_or(FormError::MissingField("costs"))?;
        let hires = inputs.require_number("hires")?;

        if hires <= 0.0 {
            return Err(FormError::rule(
                "Number of hires must be greater than zero",
            ));
        }

        let total: f64 = costs.iter().sum();
        Ok(ViewModel::new()
            .currency("Total recruiting cost", total)
            .currency("Cost per hire", total / hires))
    }
}
