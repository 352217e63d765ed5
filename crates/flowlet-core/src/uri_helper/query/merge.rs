//! Recursive override merge.

use super::{QueryParameters, QueryValue};

impl QueryParameters {
    /// Merges `overrides` into `self`, recursing into nested sets.
    ///
    /// A value from `overrides` replaces the current one unless both are
    /// nested sets and the override set is non-empty, in which case the two
    /// are merged by the same rule. New keys are appended; keys that only
    /// exist in `self` are left alone.
    pub fn merge_overrule(&mut self, overrides: &QueryParameters) {
        for (key, value) in overrides.iter() {
            match (self.0.get_mut(key), value) {
                (Some(QueryValue::Nested(current)), QueryValue::Nested(incoming))
                    if !incoming.is_empty() =>
                {
                    current.merge_overrule(incoming);
                }
                _ => {
                    self.0.insert(key.to_string(), value.clone());
                }
            }
        }
    }
}
