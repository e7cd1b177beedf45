//! Time-to-hire metrics from recruiting milestone dates.
//!
//! Reversed date pairs are rejected with a field-naming error; the day
//! counts are signed differences, never absolute values.

use chrono::NaiveDate;

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "requisition_open",
        label: "Job requisition opened",
        ty: FieldType::Date,
        required: true,
    },
    FieldSpec {
        name: "application_received",
        label: "First application received",
        ty: FieldType::Date,
        required: true,
    },
    FieldSpec {
        name: "offer_accepted",
        label: "Offer accepted",
        ty: FieldType::Date,
        required: true,
    },
    FieldSpec {
        name: "start_date",
        label: "Start date",
        ty: FieldType::Date,
        required: true,
    },
]);

pub struct TimeToHire;

impl Tool for TimeToHire {
    fn id(&self) -> &'static str {
        "time-to-hire"
    }

    fn title(&self) -> &'static str {
        "Time to Hire Calculator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let requisition_open = inputs.require_date("requisition_open")?;
        let application_received = inputs.require_date("application_received")?;
        let offer_accepted = inputs.require_date("offer_accepted")?;
        let start_date = inputs.require_date("start_date")?;

        check_ordered(
            requisition_open,
            application_received,
            "application_received",
            "the requisition opening",
        )?;
        check_ordered(
            application_received,
            offer_accepted,
            "offer_accepted",
            "the first application",
        )?;
        check_ordered(offer_accepted, start_date, "start_date", "offer acceptance")?;

        let time_to_start = (start_date - requisition_open).num_days();
        let time_to_hire = (offer_accepted - application_received).num_days();

        Ok(ViewModel::new()
            .days("Time to start", time_to_start)
            .days("Time to hire", time_to_hire)
            .text(
                "Interpretation",
                format!(
                    "It took approximately {time_to_hire} days from the first application to the offer acceptance."
                ),
            ))
    }
}

fn check_ordered(
    earlier: NaiveDate,
    later: NaiveDate,
    field: &'static str,
    milestone: &str,
) -> Result<(), FormError> {
    if later < earlier {
        Err(FormError::invalid(
            field,
            format!("must not be before {milestone}"),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compute(
        requisition: &str,
        application: &str,
        accepted: &str,
        start: &str,
    ) -> Result<ViewModel, FormError> {
        let raw = json!({
            "requisition_open": requisition,
            "application_received": application,
            "offer_accepted": accepted,
            "start_date": start,
        });
        let inputs = SCHEMA.validate(raw.as_object().unwrap())?;
        TimeToHire.compute(&inputs, &StatutoryRules::default())
    }

    #[test]
    fn test_typical_pipeline() {
        let view = compute("2024-01-01", "2024-01-10", "2024-02-09", "2024-03-01").unwrap();
        assert_eq!(view.value_of("Time to hire"), Some("30"));
        assert_eq!(view.value_of("Time to start"), Some("60"));
    }

    #[test]
    fn test_same_day_pipeline_is_zero_days() {
        let view = compute("2024-05-01", "2024-05-01", "2024-05-01", "2024-05-01").unwrap();
        assert_eq!(view.value_of("Time to hire"), Some("0"));
        assert_eq!(view.value_of("Time to start"), Some("0"));
    }

    #[test]
    fn test_reversed_offer_dates_rejected() {
        let err = compute("2024-01-01", "2024-02-01", "2024-01-15", "2024-03-01").unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "offer_accepted",
                ..
            }
        ));
    }

    #[test]
    fn test_start_before_acceptance_rejected() {
        let err = compute("2024-01-01", "2024-01-05", "2024-02-01", "2024-01-20").unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "start_date",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_date_string_rejected_by_schema() {
        let raw = json!({
            "requisition_open": "not-a-date",
            "application_received": "2024-01-10",
            "offer_accepted": "2024-02-09",
            "start_date": "2024-03-01",
        });
        let err = SCHEMA.validate(raw.as_object().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "requisition_open",
                ..
            }
        ));
    }
}
