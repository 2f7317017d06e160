// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::ops::Bound;

/// Flat string key/value settings store.
///
/// Keys are slash-separated paths such as
/// `source_groups/source_group_core/name`.
pub trait ConfigStore {
    /// Returns the value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&mut self, key: &str, value: &str);

    /// Returns the value stored under `key`, or `default` when absent.
    fn value_or_default(&self, key: &str, default: &str) -> String {
        self.value(key).unwrap_or_else(|| default.to_string())
    }
}

/// In-memory [`ConfigStore`] with keys kept in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryConfig {
    values: BTreeMap<String, String>,
}

impl MemoryConfig {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the keys below `prefix`, in key order.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(k, _)| k.as_str())
            .take_while(move |k| k.starts_with(prefix))
    }
}

impl ConfigStore for MemoryConfig {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
