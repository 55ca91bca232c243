// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategies that rewrite relative style values as absolute ones.

use std::fmt;

use understory_drawing::{FlattenAxis, FlattenContext, Rect, TransformOperation, Unit};

use crate::key::{StyleKey, ValueKey};
use crate::value::StyleValue;
use crate::values::StyleValues;

/// Flattens the value of one key, given layout context.
///
/// A strategy is bound to a key when the key is created. It receives the
/// whole container so that shorthand keys can fill in their longhands.
pub trait FlattenStrategy: Send + Sync + fmt::Debug {
    /// Flattens the value of `key` in `values`.
    ///
    /// Absolute values must be left untouched.
    fn flatten(&self, values: &mut StyleValues, key: StyleKey, cx: &FlattenContext);
}

/// Flattens a [`Unit`] along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnitFlattener {
    axis: FlattenAxis,
}

impl UnitFlattener {
    /// Creates a flattener for `axis`.
    #[must_use]
    pub const fn new(axis: FlattenAxis) -> Self {
        Self { axis }
    }
}

impl FlattenStrategy for UnitFlattener {
    fn flatten(&self, values: &mut StyleValues, key: StyleKey, cx: &FlattenContext) {
        let key = ValueKey::<Unit>::from_key(key);
        let Some(unit) = values.value(key) else {
            return;
        };
        if unit.is_relative()
            && let Some(slot) = values.get_mut(key)
        {
            slot.set_value(unit.flatten(self.axis, cx));
        }
    }
}

/// Flattens a [`Rect`]: x and width horizontally, y and height vertically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RectFlattener;

impl FlattenStrategy for RectFlattener {
    fn flatten(&self, values: &mut StyleValues, key: StyleKey, cx: &FlattenContext) {
        let key = ValueKey::<Rect>::from_key(key);
        let Some(rect) = values.value(key) else {
            return;
        };
        if rect.is_relative()
            && let Some(slot) = values.get_mut(key)
        {
            slot.set_value(rect.flatten(cx));
        }
    }
}

/// Flattens the offsets of a [`TransformOperation`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformFlattener;

impl FlattenStrategy for TransformFlattener {
    fn flatten(&self, values: &mut StyleValues, key: StyleKey, cx: &FlattenContext) {
        let key = ValueKey::<TransformOperation>::from_key(key);
        let Some(op) = values.value(key) else {
            return;
        };
        if (op.offset_h.is_relative() || op.offset_v.is_relative())
            && let Some(slot) = values.get_mut(key)
        {
            slot.set_value(op.flatten(cx));
        }
    }
}

/// Flattens a shorthand that sets all four sides of a thickness.
///
/// The shorthand itself becomes its vertical flattening. Sides with no value
/// of their own receive the flattened shorthand: left and right flattened
/// horizontally, top and bottom vertically. Sides that are already set keep
/// their values and are flattened by their own strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThicknessFlattener {
    top: ValueKey<Unit>,
    right: ValueKey<Unit>,
    bottom: ValueKey<Unit>,
    left: ValueKey<Unit>,
}

impl ThicknessFlattener {
    /// Creates a flattener filling the given side keys.
    #[must_use]
    pub const fn new(
        top: ValueKey<Unit>,
        right: ValueKey<Unit>,
        bottom: ValueKey<Unit>,
        left: ValueKey<Unit>,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl FlattenStrategy for ThicknessFlattener {
    fn flatten(&self, values: &mut StyleValues, key: StyleKey, cx: &FlattenContext) {
        let key = ValueKey::<Unit>::from_key(key);
        let Some(all) = values.get(key) else {
            return;
        };
        let priority = all.priority();
        let all = all.value(values.variables());
        if !all.is_relative() {
            return;
        }

        let horizontal = all.flatten_horizontal(cx);
        let vertical = all.flatten_vertical(cx);
        if let Some(slot) = values.get_mut(key) {
            slot.set_value(vertical);
        }

        for (side, flat) in [
            (self.top, vertical),
            (self.bottom, vertical),
            (self.left, horizontal),
            (self.right, horizontal),
        ] {
            if !values.contains(side.key()) {
                values.insert(StyleValue::new(side, flat).with_priority(priority).into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{create_relative_style_value_key, create_style_item_key};
    use std::sync::Arc;
    use understory_drawing::Size;

    fn cx() -> FlattenContext {
        FlattenContext::new(
            Size::new(600.0, 800.0),
            Size::new(200.0, 100.0),
            Size::new(5.0, 10.0),
            12.0,
        )
    }

    struct Sides {
        all: ValueKey<Unit>,
        top: ValueKey<Unit>,
        right: ValueKey<Unit>,
        bottom: ValueKey<Unit>,
        left: ValueKey<Unit>,
    }

    fn sides() -> Sides {
        let item = create_style_item_key("test-flatten-thickness", false);
        let h = || Arc::new(UnitFlattener::new(FlattenAxis::Horizontal));
        let v = || Arc::new(UnitFlattener::new(FlattenAxis::Vertical));
        let top = create_relative_style_value_key("top", item, v(), false);
        let right = create_relative_style_value_key("right", item, h(), true);
        let bottom = create_relative_style_value_key("bottom", item, v(), false);
        let left = create_relative_style_value_key("left", item, h(), true);
        let all = create_relative_style_value_key(
            "all",
            item,
            Arc::new(ThicknessFlattener::new(top, right, bottom, left)),
            false,
        );
        Sides {
            all,
            top,
            right,
            bottom,
            left,
        }
    }

    #[test]
    fn unit_flattens_along_axis() {
        let item = create_style_item_key("test-flatten-unit", false);
        let width = create_relative_style_value_key(
            "w",
            item,
            Arc::new(UnitFlattener::new(FlattenAxis::Horizontal)),
            true,
        );
        let size = create_relative_style_value_key(
            "s",
            item,
            Arc::new(UnitFlattener::new(FlattenAxis::Font)),
            false,
        );
        let mut values = StyleValues::new();
        values.set(width, Unit::percent(50.0));
        values.set(size, Unit::percent(150.0));
        values.flatten(&cx());
        assert_eq!(values.value(width), Some(Unit::pt(100.0)));
        assert_eq!(values.value(size), Some(Unit::pt(15.0)));
    }

    #[test]
    fn absolute_values_are_untouched() {
        let keys = sides();
        let mut values = StyleValues::new();
        values.set(keys.all, Unit::pt(4.0));
        values.flatten(&cx());
        assert_eq!(values.value(keys.all), Some(Unit::pt(4.0)));
        assert!(!values.contains(keys.left.key()));
    }

    #[test]
    fn thickness_fills_unset_sides() {
        let keys = sides();
        let mut values = StyleValues::new();
        values.insert(
            StyleValue::new(keys.all, Unit::percent(10.0))
                .with_priority(3)
                .into(),
        );
        values.set(keys.top, Unit::pt(1.0));
        values.flatten(&cx());

        assert_eq!(values.value(keys.all), Some(Unit::pt(10.0)));
        assert_eq!(values.value(keys.top), Some(Unit::pt(1.0)));
        assert_eq!(values.value(keys.bottom), Some(Unit::pt(10.0)));
        assert_eq!(values.value(keys.left), Some(Unit::pt(20.0)));
        assert_eq!(values.value(keys.right), Some(Unit::pt(20.0)));
        assert_eq!(values.get(keys.left).map(StyleValue::priority), Some(3));
    }

    #[test]
    fn rect_flattens_by_axis() {
        let item = create_style_item_key("test-flatten-rect", false);
        let key = create_relative_style_value_key("r", item, Arc::new(RectFlattener), false);
        let mut values = StyleValues::new();
        values.set(
            key,
            Rect::new(
                Unit::percent(10.0),
                Unit::percent(10.0),
                Unit::percent(50.0),
                Unit::percent(50.0),
            ),
        );
        values.flatten(&cx());
        assert_eq!(
            values.value(key),
            Some(Rect::new(
                Unit::pt(20.0),
                Unit::pt(10.0),
                Unit::pt(100.0),
                Unit::pt(50.0)
            ))
        );
    }
}
