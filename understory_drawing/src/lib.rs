// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drawing: units and drawing-option records for style resolution.
//!
//! This crate holds the value types that flow through a cascading style
//! engine and the records it produces for a layout or rendering engine.
//! Nothing here draws; pens, brushes and fonts are plain descriptions.
//!
//! # Position in the stack
//!
//! - **Values** ([`Unit`], [`Thickness`], [`Rect`], [`Dash`], enums): what a
//!   style property holds. Units may be relative (`%`, `em`, `vw`, ...) until
//!   flattened against a [`FlattenContext`].
//! - **Records** ([`Pen`], [`PenBorders`], [`Brush`], [`Font`],
//!   [`PositionOptions`], [`TextRenderOptions`], [`PageSize`], ...): what a
//!   resolved style hands to layout.
//!
//! Colors are [`peniko::Color`] and layout sizes are [`kurbo::Size`], so the
//! records convert directly to `kurbo` geometry (see [`StrokePen::to_kurbo`]
//! and [`TransformOperation::to_affine`]).
//!
//! # Example
//!
//! ```rust
//! use understory_drawing::{FlattenContext, Size, Thickness, Unit};
//!
//! let cx = FlattenContext::new(
//!     Size::new(595.0, 842.0),
//!     Size::new(400.0, 300.0),
//!     Size::new(6.0, 12.0),
//!     12.0,
//! );
//! let margins = Thickness::uniform(Unit::percent(10.0)).flatten(&cx);
//! assert_eq!(margins.left, Unit::pt(40.0));
//! assert_eq!(margins.top, Unit::pt(30.0));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default)
//! or `libm` feature for floating point math.

#![no_std]

extern crate alloc;

mod brush;
mod font;
mod geometry;
mod layout;
mod page;
mod pen;
mod text;
mod unit;

pub use kurbo::Size;
pub use peniko::Color;

pub use brush::{
    Brush, FillType, FullImageBrush, GradientBrush, GradientDescriptor, GradientKind,
    GradientStop, ImageBrush, NATURAL_SIZE_STEP, NO_REPEAT_STEP, PatternRepeat, SolidBrush,
};
pub use font::{FONT_WEIGHT_BOLD, FONT_WEIGHT_REGULAR, Font, FontSelector, FontStyle};
pub use geometry::{Rect, Thickness, UnitSize};
pub use layout::{
    AspectRatio, AxisAlign, ColumnOptions, ColumnWidths, DisplayMode, FloatMode,
    OverflowAction, OverflowSplit, PositionMode, PositionOptions, TransformOperation,
    TransformOrigin,
};
pub use page::{PageNumberOptions, PageNumberStyle, PageSize, PaperOrientation, PaperSize};
pub use pen::{
    Dash, LineCaps, LineJoin, LineType, Pen, PenBorders, Sides, StrokePen, is_transparent,
};
pub use text::{
    DEFAULT_HYPHENATION_CHAR, DEFAULT_HYPHENATION_MIN_AFTER, DEFAULT_HYPHENATION_MIN_BEFORE,
    DEFAULT_HYPHENATION_MIN_LENGTH, HorizontalAlignment, HyphenationStrategy, TextDecoration,
    TextDirection, TextRenderOptions, VerticalAlignment, WordHyphenation, WordWrap,
};
pub use unit::{FlattenAxis, FlattenContext, POINTS_PER_INCH, POINTS_PER_MM, PageUnits, Unit};
