// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning, overflow, transform and column records.

use alloc::vec::Vec;

use kurbo::Affine;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `tan`

use crate::geometry::{Rect, Thickness};
use crate::text::{HorizontalAlignment, VerticalAlignment};
use crate::unit::{FlattenContext, Unit};

/// How a box is placed relative to its flow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionMode {
    /// In normal flow.
    #[default]
    Static,
    /// In flow, offset by x/y.
    Relative,
    /// Out of flow, placed against the positioned ancestor.
    Absolute,
    /// Out of flow, placed against the page.
    Fixed,
}

impl PositionMode {
    /// Returns `true` for modes taken out of normal flow.
    #[must_use]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// How a box participates in layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// A block box.
    #[default]
    Block,
    /// Part of a line of text.
    Inline,
    /// A block laid out within a line.
    InlineBlock,
    /// A table cell.
    TableCell,
    /// Not laid out.
    Invisible,
}

/// Side a box floats to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloatMode {
    /// No float.
    #[default]
    None,
    /// Float left.
    Left,
    /// Float right.
    Right,
}

/// What happens to content that does not fit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowAction {
    /// Let it overflow.
    #[default]
    None,
    /// Move the rest to a new page or column.
    NewPage,
    /// Drop what does not fit.
    Truncate,
    /// Clip to the box.
    Clip,
}

/// Where overflowing content may be split.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowSplit {
    /// Anywhere.
    #[default]
    Any,
    /// Never; move the whole box.
    Never,
}

/// Alignment along one axis for aspect ratio fitting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisAlign {
    /// Align to the start.
    Min,
    /// Center.
    Mid,
    /// Align to the end.
    Max,
}

/// How a viewport is fitted into its box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    /// Horizontal and vertical alignment; `None` stretches without keeping the ratio.
    pub align: Option<(AxisAlign, AxisAlign)>,
    /// `true` to cover the box, `false` to fit inside it.
    pub slice: bool,
}

/// The reference point of a transform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransformOrigin {
    /// Top-left corner.
    #[default]
    TopLeft,
    /// Top edge center.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Left edge middle.
    MiddleLeft,
    /// Box center.
    Center,
    /// Right edge middle.
    MiddleRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge center.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

/// A composite 2D transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformOperation {
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Rotation in degrees, clockwise.
    pub rotate: f64,
    /// Horizontal skew in degrees.
    pub skew_x: f64,
    /// Vertical skew in degrees.
    pub skew_y: f64,
    /// Horizontal translation.
    pub offset_h: Unit,
    /// Vertical translation.
    pub offset_v: Unit,
}

impl TransformOperation {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        rotate: 0.0,
        skew_x: 0.0,
        skew_y: 0.0,
        offset_h: Unit::ZERO,
        offset_v: Unit::ZERO,
    };

    /// Returns `true` if applying this transform changes nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.rotate == 0.0
            && self.skew_x == 0.0
            && self.skew_y == 0.0
            && self.offset_h.is_empty()
            && self.offset_v.is_empty()
    }

    /// Flattens relative offsets: horizontal against width, vertical against height.
    #[must_use]
    pub fn flatten(&self, cx: &FlattenContext) -> Self {
        Self {
            offset_h: self.offset_h.flatten_horizontal(cx),
            offset_v: self.offset_v.flatten_vertical(cx),
            ..*self
        }
    }

    /// The equivalent affine transform: scale, then skew, then rotate, then translate.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate((self.offset_h.points(), self.offset_v.points()))
            * Affine::rotate(self.rotate.to_radians())
            * Affine::skew(
                self.skew_x.to_radians().tan(),
                self.skew_y.to_radians().tan(),
            )
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

impl Default for TransformOperation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Layout options for a single box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionOptions {
    /// Placement mode.
    pub position_mode: PositionMode,
    /// Display mode.
    pub display_mode: DisplayMode,
    /// Stretch to the available width.
    pub fill_width: bool,
    /// Rendered as a separate, reusable drawing object.
    pub x_object: bool,
    /// Left offset.
    pub x: Option<Unit>,
    /// Top offset.
    pub y: Option<Unit>,
    /// Right offset.
    pub right: Option<Unit>,
    /// Bottom offset.
    pub bottom: Option<Unit>,
    /// Explicit width.
    pub width: Option<Unit>,
    /// Explicit height.
    pub height: Option<Unit>,
    /// Minimum width.
    pub minimum_width: Option<Unit>,
    /// Minimum height.
    pub minimum_height: Option<Unit>,
    /// Maximum width.
    pub maximum_width: Option<Unit>,
    /// Maximum height.
    pub maximum_height: Option<Unit>,
    /// Content viewport.
    pub view_port: Option<Rect>,
    /// Viewport fitting.
    pub view_port_aspect_ratio: Option<AspectRatio>,
    /// Vertical alignment of content.
    pub v_align: Option<VerticalAlignment>,
    /// Horizontal alignment of content.
    pub h_align: Option<HorizontalAlignment>,
    /// Overflow handling.
    pub overflow_action: OverflowAction,
    /// Overflow split rule.
    pub overflow_split: OverflowSplit,
    /// Clip inset, when clipping.
    pub clip_inset: Thickness,
    /// Outer margins.
    pub margins: Thickness,
    /// Inner padding.
    pub padding: Thickness,
    /// The left margin was `auto`.
    pub auto_margin_left: bool,
    /// The right margin was `auto`.
    pub auto_margin_right: bool,
    /// Column count.
    pub column_count: Option<u32>,
    /// Gap between columns.
    pub alley_width: Option<Unit>,
    /// Float side.
    pub float_mode: FloatMode,
    /// Transform applied to the box.
    pub transform: Option<TransformOperation>,
    /// Reference point for the transform.
    pub transform_origin: Option<TransformOrigin>,
}

/// Explicit column widths as fractions of the available width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnWidths {
    /// One entry per column; empty means equal widths.
    pub widths: Vec<f64>,
}

impl ColumnWidths {
    /// Creates widths from fractions.
    #[must_use]
    pub fn new(widths: impl IntoIterator<Item = f64>) -> Self {
        Self {
            widths: widths.into_iter().collect(),
        }
    }

    /// Returns `true` if no explicit widths are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Multi-column layout options.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnOptions {
    /// Number of columns.
    pub column_count: u32,
    /// Gap between columns.
    pub alley_width: Unit,
    /// Explicit widths.
    pub column_widths: ColumnWidths,
    /// Flow content automatically between columns.
    pub auto_flow_across_columns: bool,
    /// Break to a new column before this box.
    pub break_before: bool,
    /// Break to a new column after this box.
    pub break_after: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform() {
        assert!(TransformOperation::IDENTITY.is_identity());
        assert_eq!(TransformOperation::IDENTITY.to_affine(), Affine::IDENTITY);
        let rotated = TransformOperation {
            rotate: 90.0,
            ..TransformOperation::IDENTITY
        };
        assert!(!rotated.is_identity());
    }

    #[test]
    fn transform_offsets_flatten() {
        let cx = FlattenContext::new(
            kurbo::Size::ZERO,
            kurbo::Size::new(200.0, 100.0),
            kurbo::Size::ZERO,
            0.0,
        );
        let op = TransformOperation {
            offset_h: Unit::percent(10.0),
            offset_v: Unit::percent(10.0),
            ..TransformOperation::IDENTITY
        };
        let flat = op.flatten(&cx);
        assert_eq!(flat.offset_h, Unit::pt(20.0));
        assert_eq!(flat.offset_v, Unit::pt(10.0));
    }

    #[test]
    fn out_of_flow() {
        assert!(PositionMode::Absolute.is_out_of_flow());
        assert!(PositionMode::Fixed.is_out_of_flow());
        assert!(!PositionMode::Relative.is_out_of_flow());
    }
}
