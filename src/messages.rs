//! Message templates
//!
//! The engines compute values; wording lives here. Templates are plain
//! strings with `{name}` placeholders filled by simple substitution, so a
//! deployment can swap the catalog without touching engine code.

use std::collections::HashMap;

/// A set of named message templates
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<&'static str, String>,
}

impl MessageCatalog {
    /// The built-in English catalog
    pub fn default_english() -> Self {
        let mut templates = HashMap::new();

        templates.insert(
            "projection.overview",
            "Projected value {future_value} reaches {percent}% of your {goal_amount} goal."
                .to_string(),
        );
        templates.insert(
            "projection.savings-rate.low",
            "Your savings rate of {rate_percent}% is below the 20% guideline; consider setting aside more each month.".to_string(),
        );
        templates.insert(
            "projection.savings-rate.ok",
            "Your savings rate of {rate_percent}% is on track.".to_string(),
        );
        templates.insert(
            "projection.emergency-fund.low",
            "Your emergency fund covers {months} months of expenses; aim for at least 6."
                .to_string(),
        );
        templates.insert(
            "projection.emergency-fund.ok",
            "Your emergency fund covers {months} months of expenses.".to_string(),
        );

        templates.insert(
            "tip.category",
            "You average {average} per month on {category}. Cutting {suggested} would save {impact} a year.".to_string(),
        );
        templates.insert(
            "tip.budget",
            "Your {category} budget for {month} is over by {over}. Rein it in to save {impact} a year.".to_string(),
        );
        templates.insert(
            "tip.goal",
            "Reaching \"{goal}\" by its deadline needs {required} per month. Redirecting {suggested} of spending would help.".to_string(),
        );
        templates.insert(
            "tip.trend",
            "You spent {increase} more last month than the month before. Reviewing recent purchases could save {impact} a year.".to_string(),
        );

        Self { templates }
    }

    /// Override or add a template
    pub fn set(&mut self, key: &'static str, template: impl Into<String>) {
        self.templates.insert(key, template.into());
    }

    /// Render a template, replacing each `{name}` with its value
    ///
    /// Unknown keys render as the key itself so a missing template is
    /// visible rather than silent.
    pub fn render(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut text = match self.templates.get(key) {
            Some(t) => t.clone(),
            None => return key.to_string(),
        };
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::default_english()
    }
}
