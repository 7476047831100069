mod title_proper;

pub use title_proper::{title_proper, TitleProper};

use serde_json::Value;

/// A named transformation over loosely typed template values.
///
/// Filters are total: a value the filter does not apply to is passed
/// through unchanged rather than rejected.
pub trait Filter: Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, value: Value) -> Value;
}

static FILTERS: [&dyn Filter; 1] = [&TitleProper];

/// All registered filters, in registration order.
pub fn all() -> &'static [&'static dyn Filter] {
    &FILTERS
}

/// Look up a filter by its registered name.
pub fn lookup(name: &str) -> Option<&'static dyn Filter> {
    FILTERS.iter().copied().find(|f| f.name() == name)
}
