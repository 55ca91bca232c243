// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension values and relative unit flattening.
//!
//! A [`Unit`] is a number tagged with [`PageUnits`]. Absolute units (points,
//! millimeters, inches) convert directly to points. Relative units only make
//! sense against a [`FlattenContext`]: percentages against a container,
//! font units against the current or root font, viewport units against the
//! page.

use core::cmp::Ordering;
use core::fmt;

use kurbo::Size;

/// Points in one inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Points in one millimeter.
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / 25.4;

/// The unit a [`Unit`] value is expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageUnits {
    /// Typographic points (1/72 inch).
    #[default]
    Points,
    /// Millimeters.
    Millimeters,
    /// Inches.
    Inches,
    /// Percentage of a reference dimension (`%`).
    Percent,
    /// Multiples of the current font height (`em`).
    EmHeight,
    /// Multiples of the current font x-height (`ex`).
    ExHeight,
    /// Multiples of the width of a zero glyph (`ch`).
    ZeroWidth,
    /// Multiples of the root font height (`rem`).
    RootEmHeight,
    /// Percentage of the page width (`vw`).
    ViewPortWidth,
    /// Percentage of the page height (`vh`).
    ViewPortHeight,
    /// Percentage of the smaller page dimension (`vmin`).
    ViewPortMin,
    /// Percentage of the larger page dimension (`vmax`).
    ViewPortMax,
    /// The `auto` sentinel: the size is decided by layout.
    Auto,
}

impl PageUnits {
    /// Returns `true` for units that need a [`FlattenContext`] to become absolute.
    ///
    /// [`PageUnits::Auto`] is not relative: it is a sentinel that flattening
    /// leaves untouched.
    #[must_use]
    #[inline]
    pub const fn is_relative(self) -> bool {
        !matches!(
            self,
            Self::Points | Self::Millimeters | Self::Inches | Self::Auto
        )
    }

    /// Returns the CSS-style suffix used when formatting values.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Points => "pt",
            Self::Millimeters => "mm",
            Self::Inches => "in",
            Self::Percent => "%",
            Self::EmHeight => "em",
            Self::ExHeight => "ex",
            Self::ZeroWidth => "ch",
            Self::RootEmHeight => "rem",
            Self::ViewPortWidth => "vw",
            Self::ViewPortHeight => "vh",
            Self::ViewPortMin => "vmin",
            Self::ViewPortMax => "vmax",
            Self::Auto => "auto",
        }
    }
}

/// The layout references used to flatten relative units.
///
/// All sizes are absolute and expressed in points. The font size carries the
/// em height as `height` and the zero (or x) width as `width`.
///
/// ```rust
/// use understory_drawing::{FlattenContext, PageUnits, Size, Unit};
///
/// let cx = FlattenContext::new(
///     Size::new(595.0, 842.0),
///     Size::new(200.0, 100.0),
///     Size::new(6.0, 12.0),
///     12.0,
/// );
/// assert_eq!(Unit::percent(50.0).flatten_horizontal(&cx), Unit::pt(100.0));
/// assert_eq!(Unit::percent(50.0).flatten_vertical(&cx), Unit::pt(50.0));
/// assert_eq!(
///     Unit::new(2.0, PageUnits::RootEmHeight).flatten_horizontal(&cx),
///     Unit::pt(24.0)
/// );
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlattenContext {
    /// The page (viewport) size.
    pub page: Size,
    /// The containing block size.
    pub container: Size,
    /// The current font metrics: `width` is the zero width, `height` the em height.
    pub font: Size,
    /// The root font size.
    pub root_font: f64,
}

impl FlattenContext {
    /// Creates a new flattening context.
    #[must_use]
    pub const fn new(page: Size, container: Size, font: Size, root_font: f64) -> Self {
        Self {
            page,
            container,
            font,
            root_font,
        }
    }
}

/// The axis a relative value prefers when it is a percentage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlattenAxis {
    /// Percentages resolve against the container width.
    Horizontal,
    /// Percentages resolve against the container height.
    Vertical,
    /// Percentages resolve against the current font height.
    Font,
}

/// A dimension value with its units.
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Unit {
    value: f64,
    units: PageUnits,
}

impl Unit {
    /// A zero length in points.
    pub const ZERO: Self = Self::pt(0.0);

    /// The `auto` sentinel.
    pub const AUTO: Self = Self::new(0.0, PageUnits::Auto);

    /// Creates a value in the given units.
    #[must_use]
    #[inline]
    pub const fn new(value: f64, units: PageUnits) -> Self {
        Self { value, units }
    }

    /// Creates a value in points.
    #[must_use]
    #[inline]
    pub const fn pt(value: f64) -> Self {
        Self::new(value, PageUnits::Points)
    }

    /// Creates a value in millimeters.
    #[must_use]
    #[inline]
    pub const fn mm(value: f64) -> Self {
        Self::new(value, PageUnits::Millimeters)
    }

    /// Creates a value in inches.
    #[must_use]
    #[inline]
    pub const fn inch(value: f64) -> Self {
        Self::new(value, PageUnits::Inches)
    }

    /// Creates a percentage value.
    #[must_use]
    #[inline]
    pub const fn percent(value: f64) -> Self {
        Self::new(value, PageUnits::Percent)
    }

    /// Creates a value in multiples of the current font height.
    #[must_use]
    #[inline]
    pub const fn em(value: f64) -> Self {
        Self::new(value, PageUnits::EmHeight)
    }

    /// The numeric value as it was expressed.
    #[must_use]
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The units of this value.
    #[must_use]
    #[inline]
    pub const fn units(self) -> PageUnits {
        self.units
    }

    /// Returns `true` if the value needs flattening before use.
    #[must_use]
    #[inline]
    pub const fn is_relative(self) -> bool {
        self.units.is_relative()
    }

    /// Returns `true` for the `auto` sentinel.
    #[must_use]
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self.units, PageUnits::Auto)
    }

    /// Returns `true` when the value is zero, whatever its units.
    #[must_use]
    #[inline]
    pub fn is_empty(self) -> bool {
        self.value == 0.0
    }

    /// The value converted to points.
    ///
    /// Relative and `auto` values have no point equivalent; their raw value is
    /// returned unchanged. Flatten first when that matters.
    #[must_use]
    pub fn points(self) -> f64 {
        match self.units {
            PageUnits::Millimeters => self.value * POINTS_PER_MM,
            PageUnits::Inches => self.value * POINTS_PER_INCH,
            _ => self.value,
        }
    }

    /// Converts an absolute value to points; relative values are returned as-is.
    #[must_use]
    pub fn to_points(self) -> Self {
        if self.is_relative() || self.is_auto() {
            self
        } else {
            Self::pt(self.points())
        }
    }

    /// Resolves this relative value against a reference length in points.
    ///
    /// Percentage-like units (`%`, `vw`, `vh`, `vmin`, `vmax`) take that share
    /// of the reference; font units multiply it. Absolute values are returned
    /// unchanged.
    #[must_use]
    pub fn to_absolute(self, reference: f64) -> Self {
        match self.units {
            PageUnits::Percent
            | PageUnits::ViewPortWidth
            | PageUnits::ViewPortHeight
            | PageUnits::ViewPortMin
            | PageUnits::ViewPortMax => Self::pt(self.value / 100.0 * reference),
            PageUnits::EmHeight
            | PageUnits::ExHeight
            | PageUnits::ZeroWidth
            | PageUnits::RootEmHeight => Self::pt(self.value * reference),
            _ => self,
        }
    }

    /// Flattens along `axis`.
    #[must_use]
    pub fn flatten(self, axis: FlattenAxis, cx: &FlattenContext) -> Self {
        let percent_of = match axis {
            FlattenAxis::Horizontal => cx.container.width,
            FlattenAxis::Vertical => cx.container.height,
            FlattenAxis::Font => cx.font.height,
        };
        match self.units {
            PageUnits::Percent => self.to_absolute(percent_of),
            PageUnits::EmHeight => self.to_absolute(cx.font.height),
            // The x-height is approximated by the zero width.
            PageUnits::ExHeight | PageUnits::ZeroWidth => self.to_absolute(cx.font.width),
            PageUnits::RootEmHeight => self.to_absolute(cx.root_font),
            PageUnits::ViewPortWidth => self.to_absolute(cx.page.width),
            PageUnits::ViewPortHeight => self.to_absolute(cx.page.height),
            PageUnits::ViewPortMin => self.to_absolute(cx.page.width.min(cx.page.height)),
            PageUnits::ViewPortMax => self.to_absolute(cx.page.width.max(cx.page.height)),
            _ => self,
        }
    }

    /// Flattens with percentages taken from the container width.
    #[must_use]
    #[inline]
    pub fn flatten_horizontal(self, cx: &FlattenContext) -> Self {
        self.flatten(FlattenAxis::Horizontal, cx)
    }

    /// Flattens with percentages taken from the container height.
    #[must_use]
    #[inline]
    pub fn flatten_vertical(self, cx: &FlattenContext) -> Self {
        self.flatten(FlattenAxis::Vertical, cx)
    }

    /// Flattens with percentages taken from the current font height.
    #[must_use]
    #[inline]
    pub fn flatten_font(self, cx: &FlattenContext) -> Self {
        self.flatten(FlattenAxis::Font, cx)
    }

    /// Returns the smaller of two values by points.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other.points() < self.points() {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values by points.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.points() > self.points() {
            other
        } else {
            self
        }
    }
}

impl From<f64> for Unit {
    fn from(points: f64) -> Self {
        Self::pt(points)
    }
}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.points().partial_cmp(&other.points())
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({self})")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            f.write_str("auto")
        } else {
            write!(f, "{}{}", self.value, self.units.suffix())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn cx() -> FlattenContext {
        FlattenContext::new(
            Size::new(600.0, 800.0),
            Size::new(200.0, 100.0),
            Size::new(5.0, 10.0),
            16.0,
        )
    }

    #[test]
    fn absolute_conversions() {
        assert_eq!(Unit::inch(1.0).points(), 72.0);
        let mm = Unit::mm(25.4).points();
        assert!(mm > 71.999_999 && mm < 72.000_001, "25.4mm is one inch");
        assert_eq!(Unit::inch(2.0).to_points(), Unit::pt(144.0));
    }

    #[test]
    fn relative_classification() {
        assert!(Unit::percent(10.0).is_relative());
        assert!(Unit::em(1.0).is_relative());
        assert!(!Unit::pt(1.0).is_relative());
        assert!(!Unit::AUTO.is_relative());
        assert!(Unit::AUTO.is_auto());
    }

    #[test]
    fn percent_uses_axis() {
        let cx = cx();
        assert_eq!(Unit::percent(50.0).flatten_horizontal(&cx), Unit::pt(100.0));
        assert_eq!(Unit::percent(50.0).flatten_vertical(&cx), Unit::pt(50.0));
        assert_eq!(Unit::percent(150.0).flatten_font(&cx), Unit::pt(15.0));
    }

    #[test]
    fn font_and_viewport_units() {
        let cx = cx();
        assert_eq!(Unit::em(2.0).flatten_horizontal(&cx), Unit::pt(20.0));
        assert_eq!(
            Unit::new(2.0, PageUnits::ExHeight).flatten_vertical(&cx),
            Unit::pt(10.0)
        );
        assert_eq!(
            Unit::new(2.0, PageUnits::ZeroWidth).flatten_vertical(&cx),
            Unit::pt(10.0)
        );
        assert_eq!(
            Unit::new(1.5, PageUnits::RootEmHeight).flatten_vertical(&cx),
            Unit::pt(24.0)
        );
        assert_eq!(
            Unit::new(10.0, PageUnits::ViewPortWidth).flatten_vertical(&cx),
            Unit::pt(60.0)
        );
        assert_eq!(
            Unit::new(10.0, PageUnits::ViewPortHeight).flatten_horizontal(&cx),
            Unit::pt(80.0)
        );
        assert_eq!(
            Unit::new(10.0, PageUnits::ViewPortMin).flatten_horizontal(&cx),
            Unit::pt(60.0)
        );
        assert_eq!(
            Unit::new(10.0, PageUnits::ViewPortMax).flatten_horizontal(&cx),
            Unit::pt(80.0)
        );
    }

    #[test]
    fn absolute_and_auto_are_untouched() {
        let cx = cx();
        assert_eq!(Unit::mm(3.0).flatten_horizontal(&cx), Unit::mm(3.0));
        assert_eq!(Unit::AUTO.flatten_vertical(&cx), Unit::AUTO);
    }

    #[test]
    fn flatten_is_idempotent() {
        let cx = cx();
        let once = Unit::percent(25.0).flatten_horizontal(&cx);
        assert_eq!(once.flatten_horizontal(&cx), once);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Unit::pt(2.0)), "2pt");
        assert_eq!(format!("{}", Unit::percent(50.0)), "50%");
        assert_eq!(format!("{}", Unit::AUTO), "auto");
    }

    #[test]
    fn ordering_and_min_max() {
        assert!(Unit::inch(1.0) > Unit::pt(71.0));
        assert_eq!(Unit::pt(3.0).min(Unit::pt(2.0)), Unit::pt(2.0));
        assert_eq!(Unit::pt(3.0).max(Unit::inch(1.0)), Unit::inch(1.0));
    }
}
