use serde_json::Value;

use super::Filter;

/// Title-case a string.
///
/// The casing rules (minor-word list, hyphenated compounds, words with
/// embedded capitals) are delegated to the `titlecase` crate, which
/// implements John Gruber's Title Case conventions. Empty input is
/// returned unchanged.
pub fn title_proper(input: &str) -> String {
    if input.is_empty() {
        return input.to_string();
    }
    titlecase::titlecase(input)
}

/// Value-level `title-proper` filter.
///
/// Non-empty strings are title-cased; every other value (null, bool,
/// number, array, object, empty string) passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleProper;

impl Filter for TitleProper {
    fn name(&self) -> &'static str {
        "title-proper"
    }

    fn apply(&self, value: Value) -> Value {
        match value {
            Value::String(s) if !s.is_empty() => Value::String(titlecase::titlecase(&s)),
            other => other,
        }
    }
}
