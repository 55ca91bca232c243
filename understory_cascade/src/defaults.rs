// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values used when a style leaves a property unset.

use understory_drawing::{
    Color, Dash, FONT_WEIGHT_REGULAR, FontStyle, PaperOrientation, PaperSize, Unit,
};

/// Font family when none is set.
pub const FONT_FAMILY: &str = "Sans-Serif";

/// Font size when none is set.
pub const FONT_SIZE: Unit = Unit::pt(12.0);

/// Font weight when none is set.
pub const FONT_WEIGHT: u16 = FONT_WEIGHT_REGULAR;

/// Font style when none is set.
pub const FONT_STYLE: FontStyle = FontStyle::Regular;

/// Line color of borders and strokes.
pub const LINE_COLOR: Color = Color::BLACK;

/// Line width of borders and strokes.
pub const LINE_WIDTH: Unit = Unit::pt(1.0);

/// Dash pattern used for a dashed line without a pattern of its own.
#[must_use]
pub fn dash() -> Dash {
    Dash::new([4], 0)
}

/// Corner radius of inline borders.
pub const CORNER_RADIUS: Unit = Unit::ZERO;

/// Number of columns.
pub const COLUMN_COUNT: u32 = 1;

/// Gap between columns.
pub const ALLEY_WIDTH: Unit = Unit::pt(10.0);

/// Whether content flows between columns.
pub const COLUMN_AUTO_FLOW: bool = true;

/// Paper size of a page.
pub const PAPER_SIZE: PaperSize = PaperSize::A4;

/// Orientation of a page.
pub const PAPER_ORIENTATION: PaperOrientation = PaperOrientation::Portrait;

/// Overlay grid line color.
pub const GRID_COLOR: Color = Color::from_rgb8(0xAD, 0xD8, 0xE6);

/// Overlay grid opacity.
pub const GRID_OPACITY: f64 = 0.5;

/// Width of minor overlay grid lines.
pub const GRID_MINOR_WIDTH: Unit = Unit::pt(0.5);

/// Width of major overlay grid lines.
pub const GRID_MAJOR_WIDTH: Unit = Unit::pt(1.0);
