// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pooled buffers for style items created before their owning style.

use core::mem;

use understory_style_key::{StyleKey, StyleValueType, ValueKey};

use crate::style::{DIRECT_STYLE_PRIORITY, Style};

/// A free list of empty styles used as value buffers.
///
/// Styles are cleared on release and reused on checkout.
#[derive(Debug, Default)]
pub struct StylePool {
    free: Vec<Style>,
}

impl StylePool {
    /// An empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes an empty style from the pool, or creates one.
    pub fn checkout(&mut self) -> Style {
        self.free.pop().unwrap_or_default()
    }

    /// Clears `style` and returns it to the pool.
    ///
    /// Immutable styles cannot be cleared and are dropped instead.
    pub fn release(&mut self, mut style: Style) {
        if style.is_immutable() {
            return;
        }
        style.clear();
        self.free.push(style);
    }

    /// Number of styles waiting for reuse.
    #[must_use]
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// Returns `true` if no styles are waiting for reuse.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

#[derive(Debug)]
enum OrphanState {
    Orphaned(Style),
    Adopted,
}

/// The values of one style item, collected before the item has an owner.
///
/// Values go into a pooled buffer. [`OrphanedItem::adopt`] moves them into
/// the owning style at direct priority and returns the buffer to the pool.
/// An item can be adopted once.
///
/// # Example
///
/// ```rust
/// use understory_cascade::{OrphanedItem, Style, StylePool};
/// use understory_drawing::Unit;
/// use understory_style_key::StyleKeys;
///
/// let keys = StyleKeys::get();
/// let mut pool = StylePool::new();
/// let mut margins = OrphanedItem::new(keys.margins.item, &mut pool);
/// margins.set_value(keys.margins.top, Unit::pt(4.0));
///
/// let mut owner = Style::new();
/// margins.adopt(&mut owner, &mut pool);
/// assert_eq!(owner.value(keys.margins.top), Some(Unit::pt(4.0)));
/// assert_eq!(pool.len(), 1);
/// ```
#[derive(Debug)]
pub struct OrphanedItem {
    item: StyleKey,
    state: OrphanState,
}

impl OrphanedItem {
    /// Starts collecting values for `item` in a buffer from `pool`.
    #[must_use]
    pub fn new(item: StyleKey, pool: &mut StylePool) -> Self {
        Self {
            item,
            state: OrphanState::Orphaned(pool.checkout()),
        }
    }

    /// The item key.
    #[must_use]
    pub fn item(&self) -> StyleKey {
        self.item
    }

    /// Returns `true` once the values have moved to an owner.
    #[must_use]
    pub fn is_adopted(&self) -> bool {
        matches!(self.state, OrphanState::Adopted)
    }

    #[track_caller]
    fn buffer(&self) -> &Style {
        match &self.state {
            OrphanState::Orphaned(style) => style,
            OrphanState::Adopted => panic!("style item {} has already been adopted", self.item),
        }
    }

    #[track_caller]
    fn buffer_mut(&mut self) -> &mut Style {
        match &mut self.state {
            OrphanState::Orphaned(style) => style,
            OrphanState::Adopted => panic!("style item {} has already been adopted", self.item),
        }
    }

    /// Buffers a value.
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this item, or after adoption.
    #[track_caller]
    pub fn set_value<T: StyleValueType>(&mut self, key: ValueKey<T>, value: T) {
        assert!(
            key.key().belongs_to(self.item),
            "{} is not a value of {}",
            key.key(),
            self.item
        );
        self.buffer_mut().set_value(key, value);
    }

    /// The buffered value for `key`.
    ///
    /// # Panics
    ///
    /// Panics after adoption.
    #[must_use]
    #[track_caller]
    pub fn value<T: StyleValueType>(&self, key: ValueKey<T>) -> Option<T> {
        self.buffer().value(key)
    }

    /// Returns `true` if `key` has a buffered value.
    ///
    /// # Panics
    ///
    /// Panics after adoption.
    #[must_use]
    #[track_caller]
    pub fn is_defined(&self, key: impl Into<StyleKey>) -> bool {
        self.buffer().is_value_defined(key)
    }

    /// Drops the buffered value for `key`.
    ///
    /// # Panics
    ///
    /// Panics after adoption.
    #[track_caller]
    pub fn remove_value(&mut self, key: impl Into<StyleKey>) -> bool {
        self.buffer_mut().remove_value(key)
    }

    /// Drops every buffered value.
    ///
    /// # Panics
    ///
    /// Panics after adoption.
    #[track_caller]
    pub fn remove_all_values(&mut self) {
        self.buffer_mut().clear();
    }

    /// Moves the buffered values into `owner` and returns the buffer to `pool`.
    ///
    /// # Panics
    ///
    /// Panics if the item was already adopted, or if `owner` is immutable
    /// and there are values to move.
    #[track_caller]
    pub fn adopt(&mut self, owner: &mut Style, pool: &mut StylePool) {
        match mem::replace(&mut self.state, OrphanState::Adopted) {
            OrphanState::Orphaned(buffer) => {
                if !buffer.is_empty() {
                    log::trace!("adopting {} values of {}", buffer.value_count(), self.item);
                    buffer.merge_into_at(owner, DIRECT_STYLE_PRIORITY);
                }
                pool.release(buffer);
            }
            OrphanState::Adopted => panic!(
                "Style items cannot be moved between owners. Copy the values across instead."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_drawing::{Color, Unit};
    use understory_style_key::{StyleKeys, StyleValue};

    #[test]
    fn pool_reuses_cleared_styles() {
        let k = StyleKeys::get();
        let mut pool = StylePool::new();
        let mut style = pool.checkout();
        style.set_value(k.size.width, Unit::pt(3.0));
        pool.release(style);
        assert_eq!(pool.len(), 1);

        let reused = pool.checkout();
        assert!(reused.is_empty());
        assert!(pool.is_empty());

        let mut frozen = Style::new();
        frozen.make_immutable();
        pool.release(frozen);
        assert!(pool.is_empty());
    }

    #[test]
    fn adopt_moves_values_at_direct_priority() {
        let k = StyleKeys::get();
        let mut pool = StylePool::new();
        let mut border = OrphanedItem::new(k.border.item, &mut pool);
        border.set_value(k.border.color, Color::WHITE);
        border.set_value(k.border.width, Unit::pt(2.0));
        assert!(border.remove_value(k.border.width));
        assert!(border.is_defined(k.border.color));
        assert_eq!(border.value(k.border.color), Some(Color::WHITE));

        let mut owner = Style::new();
        owner.add_value(StyleValue::new(k.border.color, Color::BLACK).with_priority(100));
        border.adopt(&mut owner, &mut pool);
        assert!(border.is_adopted());
        assert_eq!(owner.value(k.border.color), Some(Color::WHITE));
        assert_eq!(
            owner.get(k.border.color).map(StyleValue::priority),
            Some(DIRECT_STYLE_PRIORITY)
        );
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn empty_orphan_leaves_owner_alone() {
        let k = StyleKeys::get();
        let mut pool = StylePool::new();
        let mut item = OrphanedItem::new(k.padding.item, &mut pool);
        item.set_value(k.padding.top, Unit::pt(1.0));
        item.remove_all_values();

        let mut owner = Style::new();
        owner.make_immutable();
        item.adopt(&mut owner, &mut pool);
        assert!(owner.is_empty());
    }

    #[test]
    #[should_panic(expected = "Style items cannot be moved between owners")]
    fn adopt_twice_panics() {
        let mut pool = StylePool::new();
        let mut item = OrphanedItem::new(StyleKeys::get().fill.item, &mut pool);
        let mut owner = Style::new();
        item.adopt(&mut owner, &mut pool);
        item.adopt(&mut owner, &mut pool);
    }

    #[test]
    #[should_panic(expected = "has already been adopted")]
    fn use_after_adopt_panics() {
        let k = StyleKeys::get();
        let mut pool = StylePool::new();
        let mut item = OrphanedItem::new(k.fill.item, &mut pool);
        item.adopt(&mut Style::new(), &mut pool);
        item.set_value(k.fill.color, Color::BLACK);
    }

    #[test]
    #[should_panic(expected = "is not a value of")]
    fn foreign_key_panics() {
        let k = StyleKeys::get();
        let mut pool = StylePool::new();
        let mut item = OrphanedItem::new(k.fill.item, &mut pool);
        item.set_value(k.border.color, Color::BLACK);
    }
}
