// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borrowed accessors over the properties of one style item.

use understory_drawing::Thickness;
use understory_style_key::{
    BorderKeys, BorderSideKeys, ColumnKeys, FillKeys, FontKeys, OverflowKeys, OverlayKeys,
    PageKeys, PositionKeys, SizeKeys, StrokeKeys, StyleKey, StyleKeys, StyleValueType, TextKeys,
    ThicknessKeys, TransformKeys, ValueKey,
};

use crate::style::Style;

/// A group of catalog keys sharing one item key.
pub trait StyleItem: 'static {
    /// The item key every value key in the group belongs to.
    fn item(&self) -> StyleKey;
}

macro_rules! impl_style_item {
    ($($keys:ty),* $(,)?) => {
        $(
            impl StyleItem for $keys {
                fn item(&self) -> StyleKey {
                    self.item
                }
            }
        )*
    };
}

impl_style_item!(
    BorderKeys,
    BorderSideKeys,
    ColumnKeys,
    FillKeys,
    FontKeys,
    OverflowKeys,
    OverlayKeys,
    PageKeys,
    PositionKeys,
    SizeKeys,
    StrokeKeys,
    TextKeys,
    ThicknessKeys,
    TransformKeys,
);

/// Read access to one item of a style.
///
/// ```rust
/// use understory_cascade::Style;
/// use understory_drawing::Unit;
///
/// let mut style = Style::new();
/// style.border_mut().set(|k| k.width, Unit::pt(2.0));
/// assert_eq!(style.border().value(|k| k.width), Some(Unit::pt(2.0)));
/// assert!(!style.border().is_defined(|k| k.color));
/// assert!(style.fill().value(|k| k.color).is_none());
/// ```
pub struct ItemView<'a, K: 'static> {
    style: &'a Style,
    keys: &'static K,
}

impl<K: StyleItem> ItemView<'_, K> {
    /// The keys of this item.
    #[must_use]
    pub fn keys(&self) -> &'static K {
        self.keys
    }

    /// The resolved value of the selected key.
    #[must_use]
    pub fn value<T: StyleValueType>(&self, select: impl FnOnce(&K) -> ValueKey<T>) -> Option<T> {
        self.style.value(select(self.keys))
    }

    /// Returns `true` if the selected key has a value.
    #[must_use]
    pub fn is_defined<T>(&self, select: impl FnOnce(&K) -> ValueKey<T>) -> bool {
        self.style.is_value_defined(select(self.keys))
    }

    /// Returns `true` if any value of this item is set.
    #[must_use]
    pub fn has_values(&self) -> bool {
        let item = self.keys.item();
        self.style
            .values()
            .dictionary_for(item)
            .keys()
            .any(|key| key.belongs_to(item))
    }
}

impl<K: StyleItem> core::fmt::Debug for ItemView<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemView")
            .field("item", &self.keys.item())
            .finish_non_exhaustive()
    }
}

/// Write access to one item of a style.
pub struct ItemViewMut<'a, K: 'static> {
    style: &'a mut Style,
    keys: &'static K,
}

impl<K: StyleItem> ItemViewMut<'_, K> {
    /// The keys of this item.
    #[must_use]
    pub fn keys(&self) -> &'static K {
        self.keys
    }

    /// Sets the selected key.
    ///
    /// # Panics
    ///
    /// Panics if the style is immutable.
    #[track_caller]
    pub fn set<T: StyleValueType>(
        &mut self,
        select: impl FnOnce(&K) -> ValueKey<T>,
        value: T,
    ) -> &mut Self {
        self.style.set_value(select(self.keys), value);
        self
    }

    /// The resolved value of the selected key.
    #[must_use]
    pub fn value<T: StyleValueType>(&self, select: impl FnOnce(&K) -> ValueKey<T>) -> Option<T> {
        self.style.value(select(self.keys))
    }

    /// Removes the selected key, returning `true` if it had a value.
    ///
    /// # Panics
    ///
    /// Panics if the style is immutable.
    #[track_caller]
    pub fn remove<T>(&mut self, select: impl FnOnce(&K) -> ValueKey<T>) -> bool {
        self.style.remove_value(select(self.keys))
    }

    /// Removes every value of this item, returning `true` if any were set.
    ///
    /// # Panics
    ///
    /// Panics if the style is immutable.
    #[track_caller]
    pub fn remove_all(&mut self) -> bool {
        self.style.remove_item_style_values(self.keys.item())
    }
}

impl<K: StyleItem> core::fmt::Debug for ItemViewMut<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemViewMut")
            .field("item", &self.keys.item())
            .finish_non_exhaustive()
    }
}

macro_rules! item_accessors {
    ($($(#[$doc:meta])* $name:ident, $name_mut:ident: $keys:ty;)*) => {
        impl Style {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $name(&self) -> ItemView<'_, $keys> {
                    ItemView {
                        style: self,
                        keys: &StyleKeys::get().$name,
                    }
                }

                $(#[$doc])*
                #[must_use]
                pub fn $name_mut(&mut self) -> ItemViewMut<'_, $keys> {
                    ItemViewMut {
                        style: self,
                        keys: &StyleKeys::get().$name,
                    }
                }
            )*
        }
    };
}

item_accessors! {
    /// Background fill.
    background, background_mut: FillKeys;
    /// All-sides border.
    border, border_mut: BorderKeys;
    /// Top border.
    border_top, border_top_mut: BorderSideKeys;
    /// Left border.
    border_left, border_left_mut: BorderSideKeys;
    /// Bottom border.
    border_bottom, border_bottom_mut: BorderSideKeys;
    /// Right border.
    border_right, border_right_mut: BorderSideKeys;
    /// Inner padding.
    padding, padding_mut: ThicknessKeys;
    /// Outer margins.
    margins, margins_mut: ThicknessKeys;
    /// Clip inset.
    clip, clip_mut: ThicknessKeys;
    /// Columns.
    columns, columns_mut: ColumnKeys;
    /// Content fill.
    fill, fill_mut: FillKeys;
    /// Font.
    font, font_mut: FontKeys;
    /// Overflow handling.
    overflow, overflow_mut: OverflowKeys;
    /// Positioning.
    position, position_mut: PositionKeys;
    /// Sizing.
    size, size_mut: SizeKeys;
    /// Content stroke.
    stroke, stroke_mut: StrokeKeys;
    /// Text layout.
    text, text_mut: TextKeys;
    /// Page setup.
    page, page_mut: PageKeys;
    /// Debug overlay.
    overlay, overlay_mut: OverlayKeys;
    /// Transform.
    transform, transform_mut: TransformKeys;
}

impl Style {
    /// Sets all four margins.
    #[track_caller]
    pub fn set_margins(&mut self, margins: Thickness) {
        set_thickness(self.margins_mut(), margins);
    }

    /// Sets all four paddings.
    #[track_caller]
    pub fn set_padding(&mut self, padding: Thickness) {
        set_thickness(self.padding_mut(), padding);
    }
}

#[track_caller]
fn set_thickness(mut view: ItemViewMut<'_, ThicknessKeys>, value: Thickness) {
    view.set(|k| k.top, value.top)
        .set(|k| k.right, value.right)
        .set(|k| k.bottom, value.bottom)
        .set(|k| k.left, value.left);
}
