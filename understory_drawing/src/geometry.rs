// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-sided thickness and unit rectangles.

use crate::unit::{FlattenContext, Unit};

/// A four-sided inset such as margins, padding or a clip region.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Thickness {
    /// Top inset.
    pub top: Unit,
    /// Right inset.
    pub right: Unit,
    /// Bottom inset.
    pub bottom: Unit,
    /// Left inset.
    pub left: Unit,
}

impl Thickness {
    /// Creates a thickness from the four sides, clockwise from the top.
    #[must_use]
    pub const fn new(top: Unit, right: Unit, bottom: Unit, left: Unit) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// A thickness with every side set to `all`.
    #[must_use]
    pub const fn uniform(all: Unit) -> Self {
        Self::new(all, all, all, all)
    }

    /// A thickness of zero on every side.
    #[must_use]
    pub const fn empty() -> Self {
        Self::uniform(Unit::ZERO)
    }

    /// Returns `true` if every side is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
            && self.right.is_empty()
            && self.bottom.is_empty()
            && self.left.is_empty()
    }

    /// Flattens relative sides: left/right horizontally, top/bottom vertically.
    #[must_use]
    pub fn flatten(&self, cx: &FlattenContext) -> Self {
        Self {
            top: self.top.flatten_vertical(cx),
            right: self.right.flatten_horizontal(cx),
            bottom: self.bottom.flatten_vertical(cx),
            left: self.left.flatten_horizontal(cx),
        }
    }
}

/// A rectangle whose components may be relative units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: Unit,
    /// Top edge.
    pub y: Unit,
    /// Width.
    pub width: Unit,
    /// Height.
    pub height: Unit,
}

impl Rect {
    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn new(x: Unit, y: Unit, width: Unit, height: Unit) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if any component needs flattening.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.x.is_relative()
            || self.y.is_relative()
            || self.width.is_relative()
            || self.height.is_relative()
    }

    /// Flattens x and width horizontally, y and height vertically.
    #[must_use]
    pub fn flatten(&self, cx: &FlattenContext) -> Self {
        Self {
            x: self.x.flatten_horizontal(cx),
            y: self.y.flatten_vertical(cx),
            width: self.width.flatten_horizontal(cx),
            height: self.height.flatten_vertical(cx),
        }
    }

    /// Converts an absolute rectangle to a [`kurbo::Rect`] in points.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Rect {
        let x = self.x.points();
        let y = self.y.points();
        kurbo::Rect::new(x, y, x + self.width.points(), y + self.height.points())
    }
}

/// A width and height pair in units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UnitSize {
    /// Width.
    pub width: Unit,
    /// Height.
    pub height: Unit,
}

impl UnitSize {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: Unit, height: Unit) -> Self {
        Self { width, height }
    }

    /// Converts to a [`kurbo::Size`] in points.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Size {
        kurbo::Size::new(self.width.points(), self.height.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn empty_thickness() {
        assert!(Thickness::empty().is_empty());
        assert!(!Thickness::uniform(Unit::pt(1.0)).is_empty());
    }

    #[test]
    fn rect_flatten_uses_axes() {
        let cx = FlattenContext::new(Size::ZERO, Size::new(200.0, 100.0), Size::ZERO, 0.0);
        let rect = Rect::new(
            Unit::percent(10.0),
            Unit::percent(10.0),
            Unit::percent(50.0),
            Unit::percent(50.0),
        );
        assert!(rect.is_relative());
        let flat = rect.flatten(&cx);
        assert!(!flat.is_relative());
        assert_eq!(flat.x, Unit::pt(20.0));
        assert_eq!(flat.y, Unit::pt(10.0));
        assert_eq!(flat.width, Unit::pt(100.0));
        assert_eq!(flat.height, Unit::pt(50.0));
        assert_eq!(flat.to_kurbo(), kurbo::Rect::new(20.0, 10.0, 120.0, 60.0));
    }

    #[test]
    fn thickness_flatten() {
        let cx = FlattenContext::new(Size::ZERO, Size::new(200.0, 100.0), Size::ZERO, 0.0);
        let t = Thickness::uniform(Unit::percent(10.0)).flatten(&cx);
        assert_eq!(t.top, Unit::pt(10.0));
        assert_eq!(t.left, Unit::pt(20.0));
    }
}
