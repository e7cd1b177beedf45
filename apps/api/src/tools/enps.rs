//! Employee Net Promoter Score: promoters minus detractors over total
//! respondents, as a whole-number score with a banded interpretation.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "promoters",
        label: "Promoters (9-10)",
        ty: FieldType::Integer {
            min: Some(0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "passives",
        label: "Passives (7-8)",
        ty: FieldType::Integer {
            min: Some(0),
            max: None,
        },
        required: true,
    },
    FieldSpec {
        name: "detractors",
        label: "Detractors (0-6)",
        ty: FieldType::Integer {
            min: Some(0),
            max: None,
        },
        required: true,
    },
]);

pub struct Enps;

impl Tool for Enps {
    fn id(&self) -> &'static str {
        "employee-enps"
    }

    fn title(&self) -> &'static str {
        "Employee eNPS Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let promoters = inputs.require_integer("promoters")?;
        let passives = inputs.require_integer("passives")?;
        let detractors = inputs.require_integer("detractors")?;

        let total = promoters + passives + detractors;
        if total == 0 {
            return Err(FormError::rule(
                "Total respondents must be greater than zero",
            ));
        }

        let score = ((promoters - detractors) as f64 / total as f64) * 100.0;
        Ok(ViewModel::new()
            .count("Total respondents", total)
            .score("eNPS", score)
            .text("Interpretation", interpret(score)))
    }
}

fn interpret(score: f64) -> &'static str {
    if score >= 50.0 {
        "Excellent eNPS: your employees are highly engaged and loyal."
    } else if score >= 0.0 {
        "Good eNPS: your employees are generally satisfied."
    } else {
        "Poor eNPS: there are significant issues with employee satisfaction."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compute(promoters: i64, passives: i64, detractors: i64) -> Result<ViewModel, FormError> {
        let raw = json!({"promoters": promoters, "passives": passives, "detractors": detractors});
        let inputs = SCHEMA.validate(raw.as_object().unwrap())?;
        Enps.compute(&inputs, &StatutoryRules::default())
    }

    #[test]
    fn test_excellent_band() {
        // (60 - 10) / 100 * 100 = 50.
        let view = compute(60, 30, 10).unwrap();
        assert_eq!(view.value_of("eNPS"), Some("50"));
        assert!(view.value_of("Interpretation").unwrap().starts_with("Excellent"));
    }

    #[test]
    fn test_negative_score_poor_band() {
        let view = compute(10, 20, 70).unwrap();
        assert_eq!(view.value_of("eNPS"), Some("-60"));
        assert!(view.value_of("Interpretation").unwrap().starts_with("Poor"));
    }

    #[test]
    fn test_zero_score_good_band() {
        let view = compute(25, 50, 25).unwrap();
        assert_eq!(view.value_of("eNPS"), Some("0"));
        assert!(view.value_of("Interpretation").unwrap().starts_with("Good"));
    }

    #[test]
    fn test_zero_respondents_is_error() {
        let err = compute(0, 0, 0).unwrap_err();
        assert!(matches!(err, FormError::Rule(_)));
    }

    #[test]
    fn test_total_respondents_reported() {
        let view = compute(5, 3, 2).unwrap();
        assert_eq!(view.value_of("Total respondents"), Some("10"));
    }
}
