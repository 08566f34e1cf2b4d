use std::any::Any;
use std::collections::BTreeMap;

use crate::{BlackboardError, TypedValue};

/// Shared key/value store used by nodes to exchange data across ticks.
///
/// The blackboard is a passive bus: it does not check that writers agree on
/// the type stored under a key, and it does no locking. Callers get exclusive
/// access through `&mut Blackboard`.
#[derive(Debug, Default, Clone)]
pub struct Blackboard {
    values: BTreeMap<String, TypedValue>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Inserts or overwrites `key` with a copy of `value`.
    pub fn set<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.set_value(key, TypedValue::new(value));
    }

    /// Inserts or overwrites `key` with an already type-erased value.
    pub fn set_value(&mut self, key: impl Into<String>, value: TypedValue) {
        self.values.insert(key.into(), value);
    }

    /// Returns a copy of the entry stored under `key`.
    pub fn get(&self, key: &str) -> Result<TypedValue, BlackboardError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| BlackboardError::KeyNotFound(key.to_string()))
    }

    /// Looks up `key` and reads it as exactly `T`.
    pub fn get_as<T>(&self, key: &str) -> Result<T, BlackboardError>
    where
        T: Any + Clone,
    {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| BlackboardError::KeyNotFound(key.to_string()))?;
        value.get::<T>().map_err(|source| BlackboardError::Value {
            key: key.to_string(),
            source,
        })
    }

    pub fn remove(&mut self, key: &str) -> Option<TypedValue> {
        self.values.remove(key)
    }
}
