//! New-hire onboarding checklist generator: turns task rows
//! (description, due day, owner) into a plain-text checklist document.

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec {
        name: "task_descriptions",
        label: "Task descriptions",
        ty: FieldType::TextList,
        required: true,
    },
    FieldSpec {
        name: "task_due_days",
        label: "Due (days from start)",
        ty: FieldType::NumberList { min: 0.0 },
        required: false,
    },
    FieldSpec {
        name: "task_owners",
        label: "Task owners",
        ty: FieldType::TextList,
        required: false,
    },
]);

const DEFAULT_DUE_DAY: i64 = 1;
const DEFAULT_OWNER: &str = "Unassigned";

pub struct OnboardingChecklist;

impl Tool for OnboardingChecklist {
    fn id(&self) -> &'static str {
        "onboarding-checklist"
    }

    fn title(&self) -> &'static str {
        "New Hire Onboarding Checklist Generator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let descriptions = inputs
            .texts("task_descriptions")
            .ok_or(FormError::MissingField("task_descriptions"))?;
        let due_days = inputs.numbers("task_due_days").unwrap_or(&[]);
        let owners = inputs.texts("task_owners").unwrap_or(&[]);

        // Blank rows are skipped, matching the widget's behavior.
        let mut lines = Vec::new();
        for (i, description) in descriptions.iter().enumerate() {
            if description.is_empty() {
                continue;
            }
            let due = due_days
                .get(i)
                .map(|d| d.round() as i64)
                .unwrap_or(DEFAULT_DUE_DAY);
            let owner = owners
                .get(i)
                .map(String::as_str)
                .filter(|o| !o.is_empty())
                .unwrap_or(DEFAULT_OWNER);
            lines.push(format!("- {description} (Due: Day {due}, Owner: {owner})"));
        }

        if lines.is_empty() {
            return Err(FormError::rule("No tasks to display. Add some tasks first."));
        }

        let count = lines.len();
        Ok(ViewModel::new()
            .count("Tasks", count as i64)
            .text("Checklist", lines.join("\n")))
    }
}
