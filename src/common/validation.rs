// Common validation types and traits

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Accumulates field-keyed validation failures for a single validation attempt.
///
/// Only the first failure recorded for a field is kept; later failures for
/// the same field are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// True when no errors have been recorded
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records `message` for `field` unless the field already has an error
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Records `message` for `field` when `ok` is false
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// Returns true when no value appears more than once
pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value))
}

/// Rule set applied to a value of type `T`, reporting into a [`Validator`]
pub trait Validate<T> {
    fn validate(&self, v: &mut Validator, data: &T);
}
