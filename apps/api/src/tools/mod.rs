//! The widget family: one module per calculator, all implementing `Tool`.
//!
//! `AppState` holds an `Arc<ToolRegistry>` built once at startup; handlers
//! resolve a tool by id, validate the raw payload against its schema, and
//! run the pure compute function.

pub mod cost_per_hire;
pub mod enps;
pub mod fte;
pub mod gross_to_net;
pub mod leave_balance;
pub mod name_generator;
pub mod onboarding_checklist;
pub mod overtime;
pub mod redundancy;
pub mod salary_increase;
pub mod time_to_hire;
pub mod turnover;

use crate::config::StatutoryRules;
use crate::forms::{FormError, FormSchema, Inputs, ViewModel};

/// One self-contained calculator: a typed input schema plus a pure,
/// deterministic compute function. The name generator is the single
/// intentionally randomized exception.
pub trait Tool: Send + Sync {
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn schema(&self) -> &'static FormSchema;
    fn compute(&self, inputs: &Inputs, rules: &StatutoryRules) -> Result<ViewModel, FormError>;
}

pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Registers every built-in calculator.
    pub fn with_builtin_tools() -> Self {
        Self {
            tools: vec![
                Box::new(turnover::TurnoverRate),
                Box::new(redundancy::UkRedundancyPay),
                Box::new(cost_per_hire::CostPerHire),
                Box::new(overtime::OvertimePay),
                Box::new(gross_to_net::GrossToNetPay),
                Box::new(enps::Enps),
                Box::new(fte::FullTimeEquivalent),
                Box::new(salary_increase::SalaryIncrease),
                Box::new(time_to_hire::TimeToHire),
                Box::new(leave_balance::LeaveBalance),
                Box::new(onboarding_checklist::OnboardingChecklist),
                Box::new(name_generator::BusinessNameGenerator),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.id() == id).map(Box::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.iter().map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
