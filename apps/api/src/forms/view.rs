use serde::Serialize;

/// How a result value should be read by a renderer. Formatting is done
/// here so every widget family member agrees on it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Currency,
    Percent,
    Days,
    Count,
    /// A plain quantity shown to two decimals (hours, FTE, ...).
    Quantity,
    Score,
    Text,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultItem {
    pub label: &'static str,
    pub value: String,
    pub kind: ResultKind,
}

/// The renderer-agnostic outcome of one compute call: formatted results
/// plus non-fatal warnings (eligibility notes and the like).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ViewModel {
    pub results: Vec<ResultItem>,
    pub warnings: Vec<String>,
}

/// Two decimal places regardless of input precision: 6250 -> "6250.00".
pub fn format_currency(value: f64) -> String {
    format!("{:.2}", normalize_zero(value))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", normalize_zero(value))
}

// Empty float sums produce IEEE negative zero, which would render as
// "-0.00". Adding 0.0 folds it into plain zero.
fn normalize_zero(value: f64) -> f64 {
    value + 0.0
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, label: &'static str, value: String, kind: ResultKind) -> Self {
        self.results.push(ResultItem { label, value, kind });
        self
    }

    pub fn currency(self, label: &'static str, value: f64) -> Self {
        self.push(label, format_currency(value), ResultKind::Currency)
    }

    pub fn percent(self, label: &'static str, value: f64) -> Self {
        self.push(label, format_percent(value), ResultKind::Percent)
    }

    pub fn days(self, label: &'static str, value: i64) -> Self {
        self.push(label, value.to_string(), ResultKind::Days)
    }

    pub fn count(self, label: &'static str, value: i64) -> Self {
        self.push(label, value.to_string(), ResultKind::Count)
    }

    pub fn quantity(self, label: &'static str, value: f64) -> Self {
        self.push(label, format!("{:.2}", normalize_zero(value)), ResultKind::Quantity)
    }

    /// Whole-number score.
    pub fn score(self, label: &'static str, value: f64) -> Self {
        self.push(label, format!("{:.0}", normalize_zero(value)), ResultKind::Score)
    }

    pub fn text(self, label: &'static str, value: impl Into<String>) -> Self {
        self.push(label, value.into(), ResultKind::Text)
    }

    pub fn warn(mut self, message: impl Into<String>) -> Self {
        self.warnings.push(message.into());
        self
    }

    /// The formatted value of the first result with the given label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.results
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_always_two_decimals() {
        assert_eq!(format_currency(6250.0), "6250.00");
        assert_eq!(format_currency(6250.125), "6250.12");
        assert_eq!(format_currency(0.0), "0.00");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let empty_sum: f64 = std::iter::empty::<f64>().sum();
        assert_eq!(format_currency(empty_sum), "0.00");
        assert_eq!(format_currency(-0.0), "0.00");
        assert_eq!(format_percent(-0.0), "0.00%");
        let view = ViewModel::new().quantity("Hours", -0.0).score("Index", -0.0);
        assert_eq!(view.value_of("Hours"), Some("0.00"));
        assert_eq!(view.value_of("Index"), Some("0"));
    }

    #[test]
    fn test_percent_two_decimals() {
        assert_eq!(format_percent(10.526315), "10.53%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_builder_order_preserved() {
        let view = ViewModel::new()
            .currency("Total", 100.0)
            .percent("Rate", 5.0)
            .warn("check inputs");
        assert_eq!(view.results.len(), 2);
        assert_eq!(view.results[0].kind, ResultKind::Currency);
        assert_eq!(view.value_of("Rate"), Some("5.00%"));
        assert_eq!(view.warnings, vec!["check inputs".to_string()]);
    }
}
