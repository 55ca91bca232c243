// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse keyed storage of style values.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::key::{StyleKey, ValueKey};
use crate::value::{ErasedStyleValue, StyleValue, StyleValueType};

/// Style values keyed by [`StyleKey`], one value per key.
///
/// Lookups and priority upserts are constant time on average. Iteration
/// order is unspecified.
///
/// # Example
///
/// ```rust
/// use understory_style_key::{
///     StyleValue, StyleValueDictionary, create_style_item_key, create_style_value_key,
/// };
///
/// let item = create_style_item_key("doc-dict", false);
/// let width = create_style_value_key::<f64>("width", item);
///
/// let mut dict = StyleValueDictionary::new();
/// dict.insert(StyleValue::new(width, 1.0).with_priority(5).into());
///
/// // Lower priorities do not replace.
/// dict.set_priority_value(&StyleValue::new(width, 2.0).into(), 3);
/// assert_eq!(dict.get_typed(width).and_then(StyleValue::literal), Some(&1.0));
///
/// // Equal or higher priorities do, and take the new priority.
/// dict.set_priority_value(&StyleValue::new(width, 3.0).into(), 5);
/// assert_eq!(dict.get_typed(width).and_then(StyleValue::literal), Some(&3.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleValueDictionary {
    entries: HashMap<StyleKey, ErasedStyleValue>,
}

impl StyleValueDictionary {
    /// An empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` has a value.
    #[must_use]
    pub fn contains_key(&self, key: StyleKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// The erased value for `key`.
    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&ErasedStyleValue> {
        self.entries.get(&key)
    }

    /// The typed value for `key`.
    #[must_use]
    pub fn get_typed<T: StyleValueType>(&self, key: ValueKey<T>) -> Option<&StyleValue<T>> {
        self.get(key.key()).and_then(ErasedStyleValue::downcast_ref)
    }

    /// The typed value for `key`, mutably.
    #[must_use]
    pub fn get_typed_mut<T: StyleValueType>(
        &mut self,
        key: ValueKey<T>,
    ) -> Option<&mut StyleValue<T>> {
        self.entries.get_mut(&key.key())?.downcast_mut()
    }

    /// Inserts `value` under its own key, replacing any existing value.
    pub fn insert(&mut self, value: ErasedStyleValue) {
        self.entries.insert(value.key(), value);
    }

    /// Stores a copy of `value` at `priority` unless an existing value has a
    /// strictly higher priority.
    ///
    /// Returns `true` if the value was stored.
    pub fn set_priority_value(&mut self, value: &ErasedStyleValue, priority: i32) -> bool {
        match self.entries.entry(value.key()) {
            Entry::Occupied(mut slot) => {
                if slot.get().priority() > priority {
                    return false;
                }
                slot.insert(value.clone_with_priority(priority));
            }
            Entry::Vacant(slot) => {
                slot.insert(value.clone_with_priority(priority));
            }
        }
        true
    }

    /// Removes the value for `key`.
    pub fn remove(&mut self, key: StyleKey) -> Option<ErasedStyleValue> {
        self.entries.remove(&key)
    }

    /// Keeps only the values for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(StyleKey) -> bool) {
        self.entries.retain(|key, _| f(*key));
    }

    /// Removes every value, returning them.
    pub fn drain(&mut self) -> impl Iterator<Item = ErasedStyleValue> + '_ {
        self.entries.drain().map(|(_, value)| value)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The keys with values.
    pub fn keys(&self) -> impl Iterator<Item = StyleKey> + '_ {
        self.entries.keys().copied()
    }

    /// The values.
    pub fn values(&self) -> impl Iterator<Item = &ErasedStyleValue> + '_ {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{create_style_item_key, create_style_value_key};

    fn keys() -> (ValueKey<i32>, ValueKey<i32>) {
        let item = create_style_item_key("test-dict-item", false);
        (
            create_style_value_key("a", item),
            create_style_value_key("b", item),
        )
    }

    fn literal(dict: &StyleValueDictionary, key: ValueKey<i32>) -> Option<i32> {
        dict.get_typed(key).and_then(StyleValue::literal).copied()
    }

    #[test]
    fn priority_upsert() {
        let (a, _) = keys();
        let mut dict = StyleValueDictionary::new();
        assert!(dict.set_priority_value(&StyleValue::new(a, 1).into(), 2));
        assert!(!dict.set_priority_value(&StyleValue::new(a, 2).into(), 1));
        assert_eq!(literal(&dict, a), Some(1));
        assert!(dict.set_priority_value(&StyleValue::new(a, 3).into(), 2));
        assert_eq!(literal(&dict, a), Some(3));
        assert_eq!(dict.get(a.key()).map(ErasedStyleValue::priority), Some(2));
    }

    #[test]
    fn stored_copy_is_independent() {
        let (a, _) = keys();
        let source: ErasedStyleValue = StyleValue::new(a, 1).with_priority(9).into();
        let mut dict = StyleValueDictionary::new();
        dict.set_priority_value(&source, 3);
        if let Some(v) = dict.get_typed_mut(a) {
            v.set_value(5);
        }
        assert_eq!(source.priority(), 9);
        assert_eq!(
            source.downcast_ref::<i32>().and_then(StyleValue::literal),
            Some(&1)
        );
        assert_eq!(literal(&dict, a), Some(5));
    }

    #[test]
    fn keys_are_listed_and_removable() {
        let (a, b) = keys();
        let mut dict = StyleValueDictionary::new();
        dict.insert(StyleValue::new(b, 2).into());
        dict.insert(StyleValue::new(a, 1).into());
        let mut ids: Vec<_> = dict.keys().map(StyleKey::id).collect();
        ids.sort_unstable();
        let mut expected = vec![a.key().id(), b.key().id()];
        expected.sort_unstable();
        assert_eq!(ids, expected);
        assert_eq!(dict.len(), 2);

        assert!(dict.remove(a.key()).is_some());
        assert!(dict.remove(a.key()).is_none());
        assert!(!dict.contains_key(a.key()));
        assert!(dict.contains_key(b.key()));

        dict.retain(|_| false);
        assert!(dict.is_empty());
    }

    #[test]
    fn many_keys_keep_their_own_priorities() {
        let item = create_style_item_key("test-dict-many", false);
        let names: Vec<String> = (0..12).map(|i| format!("k{i}")).collect();
        let mut dict = StyleValueDictionary::new();
        for (i, name) in (0_i32..).zip(&names) {
            let key = create_style_value_key::<i32>(name, item);
            assert!(dict.set_priority_value(&StyleValue::new(key, i).into(), i));
        }
        assert_eq!(dict.len(), names.len());

        for (i, name) in (0_i32..).zip(&names) {
            let key = create_style_value_key::<i32>(name, item);
            assert!(!dict.set_priority_value(&StyleValue::new(key, -1).into(), i - 1));
            assert!(dict.set_priority_value(&StyleValue::new(key, -1).into(), i));
            assert_eq!(literal(&dict, key), Some(-1));
        }
        assert_eq!(dict.drain().count(), names.len());
        assert!(dict.is_empty());
    }
}
