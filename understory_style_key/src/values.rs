// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value container behind a style.

use understory_drawing::FlattenContext;

use crate::dictionary::StyleValueDictionary;
use crate::key::{StyleKey, ValueKey};
use crate::value::{ErasedStyleValue, StyleValue, StyleValueType};
use crate::variables::StyleVariables;

/// Direct values, inherited values and variables of one style.
///
/// A key's `inherited` flag decides which dictionary holds its value; there is
/// never a value for the same key in both.
#[derive(Clone, Debug, Default)]
pub struct StyleValues {
    direct: StyleValueDictionary,
    inherited: StyleValueDictionary,
    variables: StyleVariables,
}

impl StyleValues {
    /// An empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionary `key` belongs to.
    #[must_use]
    pub fn dictionary_for(&self, key: StyleKey) -> &StyleValueDictionary {
        if key.is_inherited() {
            &self.inherited
        } else {
            &self.direct
        }
    }

    /// The dictionary `key` belongs to, mutably.
    #[must_use]
    pub fn dictionary_for_mut(&mut self, key: StyleKey) -> &mut StyleValueDictionary {
        if key.is_inherited() {
            &mut self.inherited
        } else {
            &mut self.direct
        }
    }

    /// Values that stay with the element they were set on.
    #[must_use]
    pub fn direct(&self) -> &StyleValueDictionary {
        &self.direct
    }

    /// Values that pass to descendants.
    #[must_use]
    pub fn inherited(&self) -> &StyleValueDictionary {
        &self.inherited
    }

    /// Declared variables.
    #[must_use]
    pub fn variables(&self) -> &StyleVariables {
        &self.variables
    }

    /// Declared variables, mutably.
    #[must_use]
    pub fn variables_mut(&mut self) -> &mut StyleVariables {
        &mut self.variables
    }

    /// The stored value for `key`.
    #[must_use]
    pub fn get<T: StyleValueType>(&self, key: ValueKey<T>) -> Option<&StyleValue<T>> {
        self.dictionary_for(key.key()).get_typed(key)
    }

    /// The stored value for `key`, mutably.
    #[must_use]
    pub fn get_mut<T: StyleValueType>(&mut self, key: ValueKey<T>) -> Option<&mut StyleValue<T>> {
        self.dictionary_for_mut(key.key()).get_typed_mut(key)
    }

    /// The resolved value for `key`, evaluating expressions against this
    /// container's variables.
    #[must_use]
    pub fn value<T: StyleValueType>(&self, key: ValueKey<T>) -> Option<T> {
        self.get(key).map(|v| v.value(&self.variables))
    }

    /// Sets a literal value.
    ///
    /// An existing value keeps its priority; a new one is stored at priority zero.
    pub fn set<T: StyleValueType>(&mut self, key: ValueKey<T>, value: T) {
        match self.get_mut(key) {
            Some(existing) => existing.set_value(value),
            None => self.insert(StyleValue::new(key, value).into()),
        }
    }

    /// Stores `value` under its key, replacing any existing value.
    pub fn insert(&mut self, value: ErasedStyleValue) {
        let key = value.key();
        self.dictionary_for_mut(key).insert(value);
    }

    /// Stores a copy of `value` at `priority` unless the existing value has a
    /// strictly higher priority.
    pub fn set_priority_value(&mut self, value: &ErasedStyleValue, priority: i32) -> bool {
        let key = value.key();
        self.dictionary_for_mut(key)
            .set_priority_value(value, priority)
    }

    /// Removes the value for `key`.
    pub fn remove(&mut self, key: StyleKey) -> Option<ErasedStyleValue> {
        self.dictionary_for_mut(key).remove(key)
    }

    /// Returns `true` if `key` has a value.
    #[must_use]
    pub fn contains(&self, key: StyleKey) -> bool {
        self.dictionary_for(key).contains_key(key)
    }

    /// Number of values across both dictionaries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.direct.len() + self.inherited.len()
    }

    /// Removes every value and variable.
    pub fn clear(&mut self) {
        self.direct.clear();
        self.inherited.clear();
        self.variables.clear();
    }

    /// Every stored value, direct values first.
    pub fn iter(&self) -> impl Iterator<Item = &ErasedStyleValue> + '_ {
        self.direct.values().chain(self.inherited.values())
    }

    /// Rewrites every relative value as an absolute one.
    ///
    /// Each key with a flatten strategy is visited once; the strategy may
    /// update other keys of the same item.
    pub fn flatten(&mut self, cx: &FlattenContext) {
        let relative: Vec<StyleKey> = self
            .direct
            .keys()
            .chain(self.inherited.keys())
            .filter(|key| key.can_be_relative())
            .collect();
        for key in relative {
            if let Some(strategy) = key.flatten_strategy() {
                log::trace!("flattening {key}");
                strategy.flatten(self, key, cx);
            }
        }
    }
}
