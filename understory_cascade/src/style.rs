// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style record and its cascade merges.

use understory_drawing::FlattenContext;
use understory_style_key::{
    ErasedStyleValue, StyleKey, StyleValue, StyleValueType, StyleValues, StyleVariables, ValueKey,
};

/// Priority of values set directly on a component.
///
/// Higher than any selector can produce, so direct values always win.
pub const DIRECT_STYLE_PRIORITY: i32 = i32::MAX - 1;

/// The interaction state a style applies to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentState {
    /// The resting state.
    #[default]
    Normal,
    /// The pointer is over the component.
    Over,
    /// The component is pressed.
    Down,
    /// The component is disabled.
    Disabled,
    /// Content generated before the component.
    Before,
    /// Content generated after the component.
    After,
}

/// A complete set of style values: the values of one element, or of one rule.
///
/// Values live in two dictionaries chosen by the key's `inherited` flag.
/// A style can be frozen with [`Style::make_immutable`]; any later mutation
/// panics.
///
/// # Example
///
/// ```rust
/// use understory_cascade::Style;
/// use understory_drawing::{Color, Unit};
/// use understory_style_key::StyleKeys;
///
/// let keys = StyleKeys::get();
/// let mut rule = Style::new();
/// rule.set_value(keys.fill.color, Color::WHITE);
/// rule.set_value(keys.size.width, Unit::pt(40.0));
///
/// let mut element = Style::new();
/// rule.merge_into_at(&mut element, 10);
/// assert_eq!(element.value(keys.size.width), Some(Unit::pt(40.0)));
/// assert_eq!(element.get(keys.size.width).map(|v| v.priority()), Some(10));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Style {
    values: StyleValues,
    immutable: bool,
    id: Option<String>,
    /// Sorted by state.
    states: Vec<(ComponentState, Style)>,
}

impl Style {
    /// An empty, mutable style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The style id, if one was given.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the style id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.begin_style_change();
        self.id = Some(id.into());
    }

    /// Returns `true` once the style has been frozen.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Freezes this style and its stated styles.
    pub fn make_immutable(&mut self) {
        self.immutable = true;
        for (_, stated) in &mut self.states {
            stated.make_immutable();
        }
    }

    /// Checks that this style may be modified.
    ///
    /// # Panics
    ///
    /// Panics if the style is immutable.
    #[track_caller]
    pub fn begin_style_change(&self) {
        assert!(
            !self.immutable,
            "Cannot modify this style as it is immutable"
        );
    }

    /// The underlying values.
    #[must_use]
    pub fn values(&self) -> &StyleValues {
        &self.values
    }

    /// The underlying values, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the style is immutable.
    #[must_use]
    #[track_caller]
    pub fn values_mut(&mut self) -> &mut StyleValues {
        self.begin_style_change();
        &mut self.values
    }

    /// The stored value for `key`.
    #[must_use]
    pub fn get<T: StyleValueType>(&self, key: ValueKey<T>) -> Option<&StyleValue<T>> {
        self.values.get(key)
    }

    /// The resolved value for `key`.
    #[must_use]
    pub fn value<T: StyleValueType>(&self, key: ValueKey<T>) -> Option<T> {
        self.values.value(key)
    }

    /// The resolved value for `key`, or `default` when unset.
    #[must_use]
    pub fn get_value_or<T: StyleValueType>(&self, key: ValueKey<T>, default: T) -> T {
        self.value(key).unwrap_or(default)
    }

    /// Returns `true` if `key` has a value.
    #[must_use]
    pub fn is_value_defined(&self, key: impl Into<StyleKey>) -> bool {
        self.values.contains(key.into())
    }

    /// Sets a literal value, keeping the priority of an existing one.
    #[track_caller]
    pub fn set_value<T: StyleValueType>(&mut self, key: ValueKey<T>, value: T) {
        self.begin_style_change();
        self.values.set(key, value);
    }

    /// Stores `value`, replacing any existing value for its key.
    #[track_caller]
    pub fn add_value(&mut self, value: impl Into<ErasedStyleValue>) {
        self.begin_style_change();
        self.values.insert(value.into());
    }

    /// Removes the value for `key`, returning `true` if there was one.
    #[track_caller]
    pub fn remove_value(&mut self, key: impl Into<StyleKey>) -> bool {
        self.begin_style_change();
        self.values.remove(key.into()).is_some()
    }

    /// Removes every value belonging to `item`.
    ///
    /// Returns `true` if anything was removed.
    ///
    /// # Panics
    ///
    /// Panics if `item` is a value key, or if the style is immutable.
    #[track_caller]
    pub fn remove_item_style_values(&mut self, item: StyleKey) -> bool {
        !self.remove_and_return_item_style_values(item).is_empty()
    }

    /// Removes every value belonging to `item` and hands them back.
    ///
    /// # Panics
    ///
    /// Panics if `item` is a value key, or if the style is immutable.
    #[track_caller]
    pub fn remove_and_return_item_style_values(&mut self, item: StyleKey) -> Vec<ErasedStyleValue> {
        assert!(
            item.is_item_key(),
            "cannot remove item values for {item}: it is not an item key"
        );
        self.begin_style_change();
        let dict = self.values.dictionary_for_mut(item);
        let owned: Vec<StyleKey> = dict.keys().filter(|key| key.belongs_to(item)).collect();
        owned
            .into_iter()
            .filter_map(|key| dict.remove(key))
            .collect()
    }

    /// Number of values across both dictionaries.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.values.count()
    }

    /// Returns `true` if no values are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.count() == 0
    }

    /// Removes every value and variable.
    #[track_caller]
    pub fn clear(&mut self) {
        self.begin_style_change();
        self.values.clear();
    }

    /// Declared variables.
    #[must_use]
    pub fn variables(&self) -> &StyleVariables {
        self.values.variables()
    }

    /// Declares or replaces a variable.
    #[track_caller]
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.begin_style_change();
        self.values.variables_mut().add(name, value);
    }

    /// Copies every value into `target` at `priority`.
    ///
    /// A target value with a strictly higher priority is kept.
    #[track_caller]
    pub fn merge_into_at(&self, target: &mut Self, priority: i32) {
        target.begin_style_change();
        log::trace!("merging {} values at {priority}", self.value_count());
        for value in self.values.iter() {
            target.values.set_priority_value(value, priority);
        }
    }

    /// Copies every value into `target` at the value's own priority.
    #[track_caller]
    pub fn merge_into(&self, target: &mut Self) {
        target.begin_style_change();
        log::trace!("merging {} values at own priority", self.value_count());
        for value in self.values.iter() {
            target.values.set_priority_value(value, value.priority());
        }
    }

    /// Copies the inherited values into `target` at `priority`.
    ///
    /// With `replace` every inherited value overwrites the target's;
    /// otherwise only keys the target does not have are filled.
    #[track_caller]
    pub fn merge_inherited(&self, target: &mut Self, replace: bool, priority: i32) {
        target.begin_style_change();
        log::trace!(
            "merging {} inherited values at priority {priority}, replace: {replace}",
            self.values.inherited().len()
        );
        for value in self.values.inherited().values() {
            if replace {
                target.values.insert(value.clone_with_priority(priority));
            } else if !target.values.contains(value.key()) {
                target.values.set_priority_value(value, priority);
            }
        }
    }

    /// Rewrites relative values as absolute ones for the given layout context.
    #[track_caller]
    pub fn flatten(&mut self, cx: &FlattenContext) {
        self.begin_style_change();
        self.values.flatten(cx);
    }

    /// Returns `true` if any stated styles are present.
    #[must_use]
    pub fn has_states(&self) -> bool {
        !self.states.is_empty()
    }

    /// The style applied in `state`, if one was added.
    #[must_use]
    pub fn stated(&self, state: ComponentState) -> Option<&Self> {
        self.states
            .binary_search_by_key(&state, |(s, _)| *s)
            .ok()
            .map(|idx| &self.states[idx].1)
    }

    /// The style applied in `state`, created empty if missing.
    #[track_caller]
    pub fn stated_mut(&mut self, state: ComponentState) -> &mut Self {
        self.begin_style_change();
        let idx = match self.states.binary_search_by_key(&state, |(s, _)| *s) {
            Ok(idx) => idx,
            Err(idx) => {
                self.states.insert(idx, (state, Self::new()));
                idx
            }
        };
        &mut self.states[idx].1
    }

    /// Adds a style for `state`.
    ///
    /// If the state already has a style, `style` is merged into it instead.
    #[track_caller]
    pub fn add_stated(&mut self, state: ComponentState, style: Self) {
        self.begin_style_change();
        match self.states.binary_search_by_key(&state, |(s, _)| *s) {
            Ok(idx) => style.merge_into(&mut self.states[idx].1),
            Err(idx) => self.states.insert(idx, (state, style)),
        }
    }

    /// Iterates stated styles in state order.
    pub fn states(&self) -> impl Iterator<Item = (ComponentState, &Self)> + '_ {
        self.states.iter().map(|(state, style)| (*state, style))
    }

    /// Replaces this style's stated styles with copies of `other`'s.
    ///
    /// Returns `false`, leaving this style untouched, if `other` has none.
    #[track_caller]
    pub fn copy_states_from(&mut self, other: &Self) -> bool {
        if !other.has_states() {
            return false;
        }
        self.begin_style_change();
        self.states.clone_from(&other.states);
        true
    }
}
