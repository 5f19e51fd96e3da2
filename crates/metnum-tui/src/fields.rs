//! Field focus and blur-time validation.
//!
//! Blur validation is advisory: it marks a field and shows a message, but
//! never stops a calculation. The controllers validate again on submit.

use std::collections::BTreeMap;

use metnum_core::form::{fields_for, FieldKind, FieldSpec};
use metnum_core::Feature;

/// Per-field error messages from the last blur check.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    errors: BTreeMap<&'static str, String>,
}

impl FieldValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `value` as the field loses focus. Returns true when valid.
    pub fn on_blur(&mut self, field: &FieldSpec, value: &str) -> bool {
        match field.check(value) {
            Ok(()) => {
                self.errors.remove(field.id);
                true
            }
            Err(message) => {
                tracing::debug!(field = field.id, %message, "field failed blur check");
                self.errors.insert(field.id, message);
                false
            }
        }
    }

    /// Forget the error for a field, e.g. once the user edits it again.
    pub fn clear(&mut self, id: &str) {
        self.errors.remove(id);
    }

    #[must_use]
    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn has_error(&self, id: &str) -> bool {
        self.errors.contains_key(id)
    }
}

/// Focused field per feature view.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    index: BTreeMap<Feature, usize>,
}

impl FocusState {
    /// The focused field of a feature's form.
    #[must_use]
    pub fn focused(&self, feature: Feature) -> Option<&'static FieldSpec> {
        let idx = self.index.get(&feature).copied().unwrap_or(0);
        fields_for(feature).nth(idx)
    }

    /// Move focus to the next or previous field, wrapping.
    pub fn advance(&mut self, feature: Feature, forward: bool) {
        let count = fields_for(feature).count();
        if count == 0 {
            return;
        }
        let slot = self.index.entry(feature).or_insert(0);
        *slot = if forward {
            (*slot + 1) % count
        } else {
            (*slot + count - 1) % count
        };
    }
}

/// Next or previous method key of a feature, starting from `current`.
///
/// An unknown `current` starts from the first method.
#[must_use]
pub fn cycle_method(feature: Feature, current: &str, forward: bool) -> &'static str {
    let keys = feature.method_keys();
    let count = keys.len();
    let pos = keys
        .iter()
        .position(|k| k.eq_ignore_ascii_case(current.trim()));
    let next = match (pos, forward) {
        (None, _) => 0,
        (Some(p), true) => (p + 1) % count,
        (Some(p), false) => (p + count - 1) % count,
    };
    keys[next]
}

/// Whether typing edits this field (method fields are cycled instead).
#[must_use]
pub fn is_editable(field: &FieldSpec) -> bool {
    field.kind != FieldKind::Method
}
