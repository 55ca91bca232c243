// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interned style keys.
//!
//! A style key names a style *item* (a group such as `border`) or a style
//! *value* within an item (`color@border`). Keys are interned once per
//! distinct name into a process-wide table and never released, so a
//! [`StyleKey`] is a `'static` reference compared by id.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use hashbrown::HashMap;

use crate::flatten::FlattenStrategy;
use crate::value::StyleValueType;

/// The interned description of a key.
struct KeyInfo {
    id: u32,
    name: String,
    item: String,
    value: Option<String>,
    inherited: bool,
    value_type: Option<TypeId>,
    flatten: Option<Arc<dyn FlattenStrategy>>,
    use_width: bool,
}

impl fmt::Debug for KeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyInfo")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("inherited", &self.inherited)
            .field("can_be_relative", &self.flatten.is_some())
            .finish_non_exhaustive()
    }
}

struct Interner {
    by_name: HashMap<String, &'static KeyInfo>,
    next_id: u32,
}

static INTERNER: LazyLock<Mutex<Interner>> = LazyLock::new(|| {
    Mutex::new(Interner {
        by_name: HashMap::new(),
        next_id: 1,
    })
});

impl Interner {
    fn intern(&mut self, info: KeyInfo) -> &'static KeyInfo {
        if let Some(existing) = self.by_name.get(&info.name) {
            assert_eq!(
                existing.value_type, info.value_type,
                "style key {} is already registered with a different value type",
                info.name
            );
            return existing;
        }
        let info: &'static KeyInfo = Box::leak(Box::new(KeyInfo {
            id: self.next_id,
            ..info
        }));
        self.next_id += 1;
        log::debug!("registered style key {} as {}", info.name, info.id);
        self.by_name.insert(info.name.clone(), info);
        info
    }
}

fn intern(info: KeyInfo) -> &'static KeyInfo {
    INTERNER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .intern(info)
}

/// An interned style item or style value key.
///
/// Two keys are equal if and only if they were interned from the same name,
/// so equality and hashing are integer operations.
///
/// # Example
///
/// ```rust
/// use understory_style_key::{StyleKey, create_style_item_key, create_style_value_key};
///
/// let border = create_style_item_key("doc-border", false);
/// let color = create_style_value_key::<f64>("width", border);
/// assert!(border.is_item_key());
/// assert!(!color.key().is_item_key());
/// assert_eq!(color.key(), create_style_value_key::<f64>("width", border).key());
/// assert_eq!(color.key().name(), "width@doc-border");
/// ```
#[derive(Copy, Clone)]
pub struct StyleKey {
    info: &'static KeyInfo,
}

impl StyleKey {
    /// The interned id.
    #[must_use]
    #[inline]
    pub fn id(self) -> u32 {
        self.info.id
    }

    /// The full key name, `value@item` for value keys.
    #[must_use]
    pub fn name(self) -> &'static str {
        &self.info.name
    }

    /// The item name.
    #[must_use]
    pub fn item_name(self) -> &'static str {
        &self.info.item
    }

    /// The value name, or `None` for item keys.
    #[must_use]
    pub fn value_name(self) -> Option<&'static str> {
        self.info.value.as_deref()
    }

    /// Returns `true` if values of this key pass from parent to child.
    #[must_use]
    #[inline]
    pub fn is_inherited(self) -> bool {
        self.info.inherited
    }

    /// Returns `true` if this key names a style item rather than a value.
    #[must_use]
    #[inline]
    pub fn is_item_key(self) -> bool {
        self.info.value.is_none()
    }

    /// Returns `true` if values of this key may need flattening.
    #[must_use]
    #[inline]
    pub fn can_be_relative(self) -> bool {
        self.info.flatten.is_some()
    }

    /// Returns `true` if relative values prefer the width of their container.
    #[must_use]
    #[inline]
    pub fn use_width(self) -> bool {
        self.info.use_width
    }

    /// The flatten strategy bound to this key.
    #[must_use]
    pub fn flatten_strategy(self) -> Option<&'static dyn FlattenStrategy> {
        self.info.flatten.as_deref()
    }

    /// Returns `true` if `item` is the item key this value key belongs to.
    #[must_use]
    pub fn belongs_to(self, item: Self) -> bool {
        item.is_item_key() && self.info.item == item.info.item
    }
}

impl PartialEq for StyleKey {
    fn eq(&self, other: &Self) -> bool {
        self.info.id == other.info.id
    }
}

impl Eq for StyleKey {}

impl Hash for StyleKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.info.id.hash(state);
    }
}

impl PartialOrd for StyleKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StyleKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.info.id.cmp(&other.info.id)
    }
}

impl fmt::Debug for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleKey({})", self.info.name)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info.name)
    }
}

/// A value key carrying the type of its values.
pub struct ValueKey<T> {
    key: StyleKey,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValueKey<T> {
    /// Wraps an untyped key.
    ///
    /// The caller must ensure `key` was created for values of type `T`.
    /// Reading through a mismatched key finds no value.
    #[must_use]
    #[inline]
    pub const fn from_key(key: StyleKey) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// The untyped key.
    #[must_use]
    #[inline]
    pub const fn key(self) -> StyleKey {
        self.key
    }
}

impl<T> Copy for ValueKey<T> {}

impl<T> Clone for ValueKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for ValueKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for ValueKey<T> {}

impl<T> Hash for ValueKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> fmt::Debug for ValueKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueKey({})", self.key.name())
    }
}

impl<T> From<ValueKey<T>> for StyleKey {
    fn from(value: ValueKey<T>) -> Self {
        value.key
    }
}

/// Creates (or finds) the item key for `item`.
#[must_use]
pub fn create_style_item_key(item: &str, inherited: bool) -> StyleKey {
    let info = intern(KeyInfo {
        id: 0,
        name: item.to_string(),
        item: item.to_string(),
        value: None,
        inherited,
        value_type: None,
        flatten: None,
        use_width: false,
    });
    debug_assert_eq!(
        info.inherited, inherited,
        "style item {item} was registered with a different inheritance"
    );
    StyleKey { info }
}

fn create_value_key<T: StyleValueType>(
    value: &str,
    item: StyleKey,
    flatten: Option<Arc<dyn FlattenStrategy>>,
    use_width: bool,
) -> ValueKey<T> {
    assert!(
        item.is_item_key(),
        "cannot create the style value key {value} for {item:?}: it is not an item key"
    );
    let info = intern(KeyInfo {
        id: 0,
        name: format!("{value}@{}", item.item_name()),
        item: item.item_name().to_string(),
        value: Some(value.to_string()),
        inherited: item.is_inherited(),
        value_type: Some(TypeId::of::<T>()),
        flatten,
        use_width,
    });
    ValueKey::from_key(StyleKey { info })
}

/// Creates (or finds) the value key `value` within `item`.
///
/// The key inherits the `inherited` flag of its item.
///
/// # Panics
///
/// Panics if `item` is not an item key, or if the same key was registered
/// with a different value type.
#[must_use]
pub fn create_style_value_key<T: StyleValueType>(value: &str, item: StyleKey) -> ValueKey<T> {
    create_value_key(value, item, None, false)
}

/// Creates (or finds) a value key whose values may be relative.
///
/// `strategy` flattens the value against layout context; `use_width` records
/// whether percentages prefer the container width.
///
/// # Panics
///
/// Panics under the same conditions as [`create_style_value_key`].
#[must_use]
pub fn create_relative_style_value_key<T: StyleValueType>(
    value: &str,
    item: StyleKey,
    strategy: Arc<dyn FlattenStrategy>,
    use_width: bool,
) -> ValueKey<T> {
    create_value_key(value, item, Some(strategy), use_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::UnitFlattener;
    use understory_drawing::{FlattenAxis, Unit};

    #[test]
    fn interning_is_stable() {
        let a = create_style_item_key("test-key-item", false);
        let b = create_style_item_key("test-key-item", false);
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());

        let v1 = create_style_value_key::<i32>("count", a);
        let v2 = create_style_value_key::<i32>("count", b);
        assert_eq!(v1, v2);
        assert_ne!(v1.key(), a);
    }

    #[test]
    fn distinct_pairs_get_distinct_ids() {
        let one = create_style_item_key("test-key-one", false);
        let two = create_style_item_key("test-key-two", false);
        let a = create_style_value_key::<i32>("size", one);
        let b = create_style_value_key::<i32>("size", two);
        let c = create_style_value_key::<i32>("other", one);
        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_ne!(one, two);
    }

    #[test]
    fn value_keys_take_item_inheritance() {
        let item = create_style_item_key("test-key-inherited", true);
        let value = create_style_value_key::<bool>("flag", item);
        assert!(value.key().is_inherited());
        assert!(value.key().belongs_to(item));
        assert_eq!(value.key().item_name(), "test-key-inherited");
        assert_eq!(value.key().value_name(), Some("flag"));
    }

    #[test]
    #[should_panic(expected = "it is not an item key")]
    fn value_key_requires_item_key() {
        let item = create_style_item_key("test-key-parent", false);
        let value = create_style_value_key::<i32>("child", item);
        let _ = create_style_value_key::<i32>("grandchild", value.key());
    }

    #[test]
    #[should_panic(expected = "different value type")]
    fn value_type_is_checked() {
        let item = create_style_item_key("test-key-typed", false);
        let _ = create_style_value_key::<i32>("v", item);
        let _ = create_style_value_key::<f64>("v", item);
    }

    #[test]
    fn relative_keys_carry_strategy() {
        let item = create_style_item_key("test-key-relative", false);
        let plain = create_style_value_key::<Unit>("plain", item);
        let relative = create_relative_style_value_key::<Unit>(
            "rel",
            item,
            Arc::new(UnitFlattener::new(FlattenAxis::Horizontal)),
            true,
        );
        assert!(!plain.key().can_be_relative());
        assert!(relative.key().can_be_relative());
        assert!(relative.key().use_width());
        assert!(relative.key().flatten_strategy().is_some());
    }
}
