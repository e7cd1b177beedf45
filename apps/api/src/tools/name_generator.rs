//! Business name generator: randomized prefix/keyword/suffix sampling
//! from fixed word lists. Intentionally non-deterministic; the only
//! member of the widget family exempt from the idempotence property.

use rand::seq::SliceRandom;

use crate::config::StatutoryRules;
use crate::forms::{FieldSpec, FieldType, FormError, FormSchema, Inputs, ViewModel};
use crate::tools::Tool;

static SCHEMA: FormSchema = FormSchema::new(&[FieldSpec {
    name: "keyword",
    label: "Keyword",
    ty: FieldType::Text,
    required: true,
}]);

const PREFIXES: &[&str] = &[
    "Apex", "Stellar", "Zenith", "Nova", "Quantum", "Fusion", "Synergy", "Catalyst", "Momentum",
    "Elevate",
];

const SUFFIXES: &[&str] = &[
    "Solutions",
    "Group",
    "Ventures",
    "Labs",
    "Co",
    "Works",
    "Studios",
    "Consulting",
    "Dynamics",
    "Enterprises",
];

const SAMPLES_PER_FORM: usize = 10;

pub struct BusinessNameGenerator;

impl Tool for BusinessNameGenerator {
    fn id(&self) -> &'static str {
        "business-name-generator"
    }

    fn title(&self) -> &'static str {
        "Business Name Generator"
    }

    fn schema(&self) -> &'static FormSchema {
        &SCHEMA
    }

    fn compute(&self, inputs: &Inputs, _rules: &StatutoryRules) -> Result<ViewModel, FormError> {
        let keyword = inputs.require_text("keyword")?;

        let mut rng = rand::thread_rng();
        let mut names: Vec<String> = Vec::new();
        fn push_unique(name: String, names: &mut Vec<String>) {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        for _ in 0..SAMPLES_PER_FORM {
            if let Some(prefix) = PREFIXES.choose(&mut rng) {
                push_unique(format!("{prefix} {keyword}"), &mut names);
            }
        }
        for _ in 0..SAMPLES_PER_FORM {
            if let Some(suffix) = SUFFIXES.choose(&mut rng) {
                push_unique(format!("{keyword} {suffix}"), &mut names);
            }
        }
        for _ in 0..SAMPLES_PER_FORM {
            if let (Some(prefix), Some(suffix)) =
                (PREFIXES.choose(&mut rng), SUFFIXES.choose(&mut rng))
            {
                push_unique(format!("{prefix} {keyword} {suffix}"), &mut names);
            }
        }

        let mut view = ViewModel::new();
        for name in names {
            view = view.text("Suggested name", name);
        }
        Ok(view)
    }
}
