// Shared prompt fragments and prompt-building utilities.
// Each pipeline that needs generation defines its own prompts.rs alongside it.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Closing instruction shared by every generation prompt.
pub const PROFESSIONAL_TONE: &str = "Keep it professional, actionable, and well-structured.";

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Substitutes `{name}` placeholders in a prompt template in a single pass.
/// Substituted values are never rescanned, so braces in user or search text
/// survive as-is. Placeholders without a matching variable are left untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
