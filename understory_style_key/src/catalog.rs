// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in key catalog.
//!
//! Every property a style understands is declared here once, grouped by the
//! style item it belongs to. Item names are readable words; value names are
//! short fixed codes, so `colr@border` and `colr@background` are distinct
//! keys that share a value name.

use std::sync::{Arc, LazyLock};

use understory_drawing::{
    AspectRatio, Color, ColumnWidths, Dash, DisplayMode, FillType, FlattenAxis, FloatMode,
    FontSelector, FontStyle, HorizontalAlignment, LineCaps, LineJoin, LineType, OverflowAction,
    OverflowSplit, PageNumberStyle, PaperOrientation, PaperSize, PatternRepeat, PositionMode,
    Rect, Sides, TextDecoration, TextDirection, TransformOperation, TransformOrigin, Unit,
    VerticalAlignment, WordHyphenation, WordWrap,
};

use crate::flatten::{RectFlattener, ThicknessFlattener, TransformFlattener, UnitFlattener};
use crate::key::{
    StyleKey, ValueKey, create_relative_style_value_key, create_style_item_key,
    create_style_value_key,
};

const INHERITED: bool = true;
const NOT_INHERITED: bool = false;

fn unit(value: &str, item: StyleKey, axis: FlattenAxis) -> ValueKey<Unit> {
    create_relative_style_value_key(
        value,
        item,
        Arc::new(UnitFlattener::new(axis)),
        axis == FlattenAxis::Horizontal,
    )
}

/// Keys of a background or fill item.
#[derive(Copy, Clone, Debug)]
pub struct FillKeys {
    /// The item.
    pub item: StyleKey,
    /// Solid color.
    pub color: ValueKey<Color>,
    /// Image source or gradient descriptor.
    pub image_source: ValueKey<String>,
    /// Image repeat mode.
    pub repeat: ValueKey<PatternRepeat>,
    /// Image x offset.
    pub x_position: ValueKey<Unit>,
    /// Image y offset.
    pub y_position: ValueKey<Unit>,
    /// Horizontal repeat step.
    pub x_step: ValueKey<Unit>,
    /// Vertical repeat step.
    pub y_step: ValueKey<Unit>,
    /// Image width.
    pub x_size: ValueKey<Unit>,
    /// Image height.
    pub y_size: ValueKey<Unit>,
    /// Fill kind.
    pub style: ValueKey<FillType>,
    /// Opacity from 0 to 1.
    pub opacity: ValueKey<f64>,
}

impl FillKeys {
    fn new(name: &str, inherited: bool) -> Self {
        let item = create_style_item_key(name, inherited);
        Self {
            item,
            color: create_style_value_key("colr", item),
            image_source: create_style_value_key("imgs", item),
            repeat: create_style_value_key("rept", item),
            x_position: unit("xpos", item, FlattenAxis::Horizontal),
            y_position: unit("ypos", item, FlattenAxis::Vertical),
            x_step: unit("xstp", item, FlattenAxis::Horizontal),
            y_step: unit("ystp", item, FlattenAxis::Vertical),
            x_size: unit("xsiz", item, FlattenAxis::Horizontal),
            y_size: unit("ysiz", item, FlattenAxis::Vertical),
            style: create_style_value_key("styl", item),
            opacity: create_style_value_key("opac", item),
        }
    }
}

/// Keys of the all-sides border item.
#[derive(Copy, Clone, Debug)]
pub struct BorderKeys {
    /// The item.
    pub item: StyleKey,
    /// Line color.
    pub color: ValueKey<Color>,
    /// Corner radius.
    pub corner_radius: ValueKey<Unit>,
    /// Dash pattern.
    pub dash: ValueKey<Dash>,
    /// Line caps.
    pub ending: ValueKey<LineCaps>,
    /// Line join.
    pub join: ValueKey<LineJoin>,
    /// Mitre limit.
    pub mitre: ValueKey<f32>,
    /// Opacity from 0 to 1.
    pub opacity: ValueKey<f64>,
    /// Sides drawn.
    pub sides: ValueKey<Sides>,
    /// Line type.
    pub style: ValueKey<LineType>,
    /// Line width.
    pub width: ValueKey<Unit>,
}

/// Keys of a single-side border item.
#[derive(Copy, Clone, Debug)]
pub struct BorderSideKeys {
    /// The item.
    pub item: StyleKey,
    /// Line color.
    pub color: ValueKey<Color>,
    /// Line type.
    pub style: ValueKey<LineType>,
    /// Line width.
    pub width: ValueKey<Unit>,
    /// Dash pattern.
    pub dash: ValueKey<Dash>,
}

impl BorderSideKeys {
    fn new(name: &str, width_axis: FlattenAxis) -> Self {
        let item = create_style_item_key(name, NOT_INHERITED);
        Self {
            item,
            color: create_style_value_key("colr", item),
            style: create_style_value_key("styl", item),
            width: unit("widt", item, width_axis),
            dash: create_style_value_key("dash", item),
        }
    }
}

/// Keys of the stroke item.
#[derive(Copy, Clone, Debug)]
pub struct StrokeKeys {
    /// The item.
    pub item: StyleKey,
    /// Line color.
    pub color: ValueKey<Color>,
    /// Dash pattern.
    pub dash: ValueKey<Dash>,
    /// Dash phase, in points or as a percentage of the pattern.
    pub dash_offset: ValueKey<Unit>,
    /// Line caps.
    pub ending: ValueKey<LineCaps>,
    /// Line join.
    pub join: ValueKey<LineJoin>,
    /// Mitre limit.
    pub mitre: ValueKey<f32>,
    /// Opacity from 0 to 1.
    pub opacity: ValueKey<f64>,
    /// Line type.
    pub style: ValueKey<LineType>,
    /// Line width.
    pub width: ValueKey<Unit>,
}

/// Keys of a four-sided item: margins, padding or clip.
#[derive(Copy, Clone, Debug)]
pub struct ThicknessKeys {
    /// The item.
    pub item: StyleKey,
    /// Shorthand for every side.
    pub all: ValueKey<Unit>,
    /// Top side.
    pub top: ValueKey<Unit>,
    /// Right side.
    pub right: ValueKey<Unit>,
    /// Bottom side.
    pub bottom: ValueKey<Unit>,
    /// Left side.
    pub left: ValueKey<Unit>,
    /// Start of an inline run.
    pub inline_start: ValueKey<Unit>,
    /// End of an inline run.
    pub inline_end: ValueKey<Unit>,
}

impl ThicknessKeys {
    fn new(name: &str, fill_sides: bool) -> Self {
        let item = create_style_item_key(name, NOT_INHERITED);
        let top = unit("top ", item, FlattenAxis::Vertical);
        let bottom = unit("botm", item, FlattenAxis::Vertical);
        let left = unit("left", item, FlattenAxis::Horizontal);
        let right = unit("righ", item, FlattenAxis::Horizontal);
        let all = if fill_sides {
            create_relative_style_value_key(
                "all ",
                item,
                Arc::new(ThicknessFlattener::new(top, right, bottom, left)),
                false,
            )
        } else {
            unit("all ", item, FlattenAxis::Horizontal)
        };
        Self {
            item,
            all,
            top,
            right,
            bottom,
            left,
            inline_start: unit("istr", item, FlattenAxis::Horizontal),
            inline_end: unit("iend", item, FlattenAxis::Horizontal),
        }
    }
}

/// Keys of the columns item.
#[derive(Copy, Clone, Debug)]
pub struct ColumnKeys {
    /// The item.
    pub item: StyleKey,
    /// Number of columns.
    pub count: ValueKey<u32>,
    /// Gap between columns.
    pub alley_width: ValueKey<Unit>,
    /// Automatic flow between columns.
    pub flow: ValueKey<bool>,
    /// Explicit widths.
    pub widths: ValueKey<ColumnWidths>,
    /// Column break before.
    pub break_before: ValueKey<bool>,
    /// Column break after.
    pub break_after: ValueKey<bool>,
}

/// Keys of the font item.
#[derive(Copy, Clone, Debug)]
pub struct FontKeys {
    /// The item.
    pub item: StyleKey,
    /// Family list.
    pub family: ValueKey<FontSelector>,
    /// Weight, 100 to 900.
    pub weight: ValueKey<u16>,
    /// Slant.
    pub style: ValueKey<FontStyle>,
    /// Em size; percentages are of the current font size.
    pub size: ValueKey<Unit>,
}

/// Keys of the overflow item.
#[derive(Copy, Clone, Debug)]
pub struct OverflowKeys {
    /// The item.
    pub item: StyleKey,
    /// What happens to content that does not fit.
    pub action: ValueKey<OverflowAction>,
    /// Where content may split.
    pub split: ValueKey<OverflowSplit>,
}

/// Keys of the position item.
#[derive(Copy, Clone, Debug)]
pub struct PositionKeys {
    /// The item.
    pub item: StyleKey,
    /// Left offset.
    pub x: ValueKey<Unit>,
    /// Top offset.
    pub y: ValueKey<Unit>,
    /// Right offset.
    pub right: ValueKey<Unit>,
    /// Bottom offset.
    pub bottom: ValueKey<Unit>,
    /// Placement mode.
    pub mode: ValueKey<PositionMode>,
    /// Display mode.
    pub display: ValueKey<DisplayMode>,
    /// Laid out as a self-contained object.
    pub x_object: ValueKey<bool>,
    /// Content viewport.
    pub view_port: ValueKey<Rect>,
    /// Viewport fitting.
    pub aspect_ratio: ValueKey<AspectRatio>,
    /// Float side.
    pub float: ValueKey<FloatMode>,
}

/// Keys of the size item.
#[derive(Copy, Clone, Debug)]
pub struct SizeKeys {
    /// The item.
    pub item: StyleKey,
    /// Width, possibly `auto`.
    pub width: ValueKey<Unit>,
    /// Height, possibly `auto`.
    pub height: ValueKey<Unit>,
    /// Minimum width.
    pub min_width: ValueKey<Unit>,
    /// Minimum height.
    pub min_height: ValueKey<Unit>,
    /// Maximum width.
    pub max_width: ValueKey<Unit>,
    /// Maximum height.
    pub max_height: ValueKey<Unit>,
    /// Stretch to the available width.
    pub full_width: ValueKey<bool>,
}

/// Keys of the text item.
#[derive(Copy, Clone, Debug)]
pub struct TextKeys {
    /// The item.
    pub item: StyleKey,
    /// First line indent.
    pub first_line_inset: ValueKey<Unit>,
    /// Line height, possibly `auto`.
    pub leading: ValueKey<Unit>,
    /// Keep white space as written.
    pub preserve_whitespace: ValueKey<bool>,
    /// Date display format.
    pub date_format: ValueKey<String>,
    /// Number display format.
    pub number_format: ValueKey<String>,
    /// Extra space between words.
    pub word_spacing: ValueKey<Unit>,
    /// Extra space between characters.
    pub character_spacing: ValueKey<Unit>,
    /// Horizontal glyph scale.
    pub horizontal_scaling: ValueKey<f64>,
    /// Inline direction.
    pub direction: ValueKey<TextDirection>,
    /// Line breaking.
    pub wrap: ValueKey<WordWrap>,
    /// Hyphenation mode.
    pub hyphenation: ValueKey<WordHyphenation>,
    /// Decoration lines.
    pub decoration: ValueKey<TextDecoration>,
    /// Position text from the baseline.
    pub from_baseline: ValueKey<bool>,
    /// Vertical alignment.
    pub v_align: ValueKey<VerticalAlignment>,
    /// Horizontal alignment.
    pub h_align: ValueKey<HorizontalAlignment>,
    /// Minimum word length to hyphenate.
    pub hyphen_min_length: ValueKey<u32>,
    /// Minimum characters before a hyphen.
    pub hyphen_min_before: ValueKey<u32>,
    /// Minimum characters after a hyphen.
    pub hyphen_min_after: ValueKey<u32>,
    /// Character appended at a break.
    pub hyphen_append: ValueKey<char>,
}

/// Keys of the page item.
#[derive(Copy, Clone, Debug)]
pub struct PageKeys {
    /// The item.
    pub item: StyleKey,
    /// Standard paper size.
    pub paper_size: ValueKey<PaperSize>,
    /// Orientation.
    pub orientation: ValueKey<PaperOrientation>,
    /// Explicit width.
    pub width: ValueKey<Unit>,
    /// Explicit height.
    pub height: ValueKey<Unit>,
    /// Rotation in degrees.
    pub angle: ValueKey<i32>,
    /// Page number style.
    pub number_style: ValueKey<PageNumberStyle>,
    /// First page number.
    pub number_start: ValueKey<i32>,
    /// Numbering group name.
    pub number_group: ValueKey<String>,
    /// Page number display format.
    pub number_format: ValueKey<String>,
    /// Expected pages in the group.
    pub group_count_hint: ValueKey<i32>,
    /// Expected pages in total.
    pub total_count_hint: ValueKey<i32>,
    /// Page break before.
    pub break_before: ValueKey<bool>,
    /// Page break after.
    pub break_after: ValueKey<bool>,
}

/// Keys of the overlay grid item.
#[derive(Copy, Clone, Debug)]
pub struct OverlayKeys {
    /// The item.
    pub item: StyleKey,
    /// Draw the grid.
    pub show_grid: ValueKey<bool>,
    /// Grid spacing.
    pub spacing: ValueKey<Unit>,
    /// Line color.
    pub color: ValueKey<Color>,
    /// Line opacity.
    pub opacity: ValueKey<f64>,
    /// Horizontal grid offset.
    pub x_offset: ValueKey<Unit>,
    /// Vertical grid offset.
    pub y_offset: ValueKey<Unit>,
    /// Outline the columns.
    pub show_columns: ValueKey<bool>,
}

/// Keys of the transform item.
#[derive(Copy, Clone, Debug)]
pub struct TransformKeys {
    /// The item.
    pub item: StyleKey,
    /// The transform.
    pub operation: ValueKey<TransformOperation>,
    /// Reference point.
    pub origin: ValueKey<TransformOrigin>,
}

/// Every built-in style key.
///
/// # Example
///
/// ```rust
/// use understory_style_key::StyleKeys;
///
/// let keys = StyleKeys::get();
/// assert!(keys.font.size.key().is_inherited());
/// assert!(!keys.border.width.key().is_inherited());
/// assert!(keys.size.width.key().can_be_relative());
/// assert_ne!(keys.border.color.key(), keys.background.color.key());
/// ```
#[derive(Debug)]
pub struct StyleKeys {
    /// Background.
    pub background: FillKeys,
    /// All-sides border.
    pub border: BorderKeys,
    /// Top border.
    pub border_top: BorderSideKeys,
    /// Left border.
    pub border_left: BorderSideKeys,
    /// Bottom border.
    pub border_bottom: BorderSideKeys,
    /// Right border.
    pub border_right: BorderSideKeys,
    /// Padding.
    pub padding: ThicknessKeys,
    /// Margins.
    pub margins: ThicknessKeys,
    /// Clip inset.
    pub clip: ThicknessKeys,
    /// Columns.
    pub columns: ColumnKeys,
    /// Content fill.
    pub fill: FillKeys,
    /// Font.
    pub font: FontKeys,
    /// Overflow.
    pub overflow: OverflowKeys,
    /// Position.
    pub position: PositionKeys,
    /// Size.
    pub size: SizeKeys,
    /// Content stroke.
    pub stroke: StrokeKeys,
    /// Text.
    pub text: TextKeys,
    /// Page.
    pub page: PageKeys,
    /// Overlay grid.
    pub overlay: OverlayKeys,
    /// Transform.
    pub transform: TransformKeys,
}

static KEYS: LazyLock<StyleKeys> = LazyLock::new(StyleKeys::build);

impl StyleKeys {
    /// The catalog, built on first use.
    #[must_use]
    pub fn get() -> &'static Self {
        &KEYS
    }

    fn build() -> Self {
        log::trace!("building the style key catalog");
        Self {
            background: FillKeys::new("background", NOT_INHERITED),
            border: build_border(),
            border_top: BorderSideKeys::new("border-top", FlattenAxis::Horizontal),
            border_left: BorderSideKeys::new("border-left", FlattenAxis::Vertical),
            border_bottom: BorderSideKeys::new("border-bottom", FlattenAxis::Horizontal),
            border_right: BorderSideKeys::new("border-right", FlattenAxis::Vertical),
            padding: ThicknessKeys::new("padding", true),
            margins: ThicknessKeys::new("margins", true),
            clip: ThicknessKeys::new("clip", false),
            columns: build_columns(),
            fill: FillKeys::new("fill", INHERITED),
            font: build_font(),
            overflow: build_overflow(),
            position: build_position(),
            size: build_size(),
            stroke: build_stroke(),
            text: build_text(),
            page: build_page(),
            overlay: build_overlay(),
            transform: build_transform(),
        }
    }
}

fn build_border() -> BorderKeys {
    let item = create_style_item_key("border", NOT_INHERITED);
    BorderKeys {
        item,
        color: create_style_value_key("colr", item),
        corner_radius: unit("crad", item, FlattenAxis::Horizontal),
        dash: create_style_value_key("dash", item),
        ending: create_style_value_key("endg", item),
        join: create_style_value_key("join", item),
        mitre: create_style_value_key("mitr", item),
        opacity: create_style_value_key("opac", item),
        sides: create_style_value_key("side", item),
        style: create_style_value_key("styl", item),
        width: unit("widt", item, FlattenAxis::Horizontal),
    }
}

fn build_columns() -> ColumnKeys {
    let item = create_style_item_key("columns", NOT_INHERITED);
    ColumnKeys {
        item,
        count: create_style_value_key("cont", item),
        alley_width: unit("ally", item, FlattenAxis::Horizontal),
        flow: create_style_value_key("flow", item),
        widths: create_style_value_key("cwid", item),
        break_before: create_style_value_key("brcb", item),
        break_after: create_style_value_key("brca", item),
    }
}

fn build_font() -> FontKeys {
    let item = create_style_item_key("font", INHERITED);
    FontKeys {
        item,
        family: create_style_value_key("faml", item),
        weight: create_style_value_key("weig", item),
        style: create_style_value_key("styl", item),
        size: unit("size", item, FlattenAxis::Font),
    }
}

fn build_overflow() -> OverflowKeys {
    let item = create_style_item_key("overflow", NOT_INHERITED);
    OverflowKeys {
        item,
        action: create_style_value_key("actn", item),
        split: create_style_value_key("splt", item),
    }
}

fn build_position() -> PositionKeys {
    let item = create_style_item_key("position", NOT_INHERITED);
    PositionKeys {
        item,
        x: unit("xpos", item, FlattenAxis::Horizontal),
        y: unit("ypos", item, FlattenAxis::Vertical),
        right: unit("rght", item, FlattenAxis::Horizontal),
        bottom: unit("botm", item, FlattenAxis::Vertical),
        mode: create_style_value_key("mode", item),
        display: create_style_value_key("disp", item),
        x_object: create_style_value_key("xobj", item),
        view_port: create_relative_style_value_key("vwpt", item, Arc::new(RectFlattener), false),
        aspect_ratio: create_style_value_key("aspr", item),
        float: create_style_value_key("flot", item),
    }
}

fn build_size() -> SizeKeys {
    let item = create_style_item_key("size", NOT_INHERITED);
    SizeKeys {
        item,
        width: unit("widt", item, FlattenAxis::Horizontal),
        height: unit("heit", item, FlattenAxis::Vertical),
        min_width: unit("minw", item, FlattenAxis::Horizontal),
        min_height: unit("minh", item, FlattenAxis::Vertical),
        max_width: unit("maxw", item, FlattenAxis::Horizontal),
        max_height: unit("maxh", item, FlattenAxis::Vertical),
        full_width: create_style_value_key("fulw", item),
    }
}

fn build_stroke() -> StrokeKeys {
    let item = create_style_item_key("stroke", INHERITED);
    StrokeKeys {
        item,
        color: create_style_value_key("colr", item),
        dash: create_style_value_key("dash", item),
        // Percentages are of the dash pattern, resolved when the pen is built.
        dash_offset: create_style_value_key("dsof", item),
        ending: create_style_value_key("endg", item),
        join: create_style_value_key("join", item),
        mitre: create_style_value_key("mitr", item),
        opacity: create_style_value_key("opac", item),
        style: create_style_value_key("styl", item),
        width: unit("widt", item, FlattenAxis::Horizontal),
    }
}

fn build_text() -> TextKeys {
    let item = create_style_item_key("text", INHERITED);
    TextKeys {
        item,
        first_line_inset: unit("indt", item, FlattenAxis::Font),
        leading: unit("lead", item, FlattenAxis::Font),
        preserve_whitespace: create_style_value_key("whit", item),
        date_format: create_style_value_key("datf", item),
        number_format: create_style_value_key("numf", item),
        word_spacing: unit("wspc", item, FlattenAxis::Font),
        character_spacing: unit("cspc", item, FlattenAxis::Font),
        horizontal_scaling: create_style_value_key("thsc", item),
        direction: create_style_value_key("tdir", item),
        wrap: create_style_value_key("wrap", item),
        hyphenation: create_style_value_key("hyph", item),
        decoration: create_style_value_key("decr", item),
        from_baseline: create_style_value_key("tbse", item),
        v_align: create_style_value_key("vlgn", item),
        h_align: create_style_value_key("hlgn", item),
        hyphen_min_length: create_style_value_key("minl", item),
        hyphen_min_before: create_style_value_key("minb", item),
        hyphen_min_after: create_style_value_key("mina", item),
        hyphen_append: create_style_value_key("chrb", item),
    }
}

fn build_page() -> PageKeys {
    let item = create_style_item_key("page", NOT_INHERITED);
    PageKeys {
        item,
        paper_size: create_style_value_key("papr", item),
        orientation: create_style_value_key("orit", item),
        width: create_style_value_key("widh", item),
        height: create_style_value_key("heit", item),
        angle: create_style_value_key("angl", item),
        number_style: create_style_value_key("styl", item),
        number_start: create_style_value_key("strt", item),
        number_group: create_style_value_key("grup", item),
        number_format: create_style_value_key("fomt", item),
        group_count_hint: create_style_value_key("ghnt", item),
        total_count_hint: create_style_value_key("thnt", item),
        break_before: create_style_value_key("bkpb", item),
        break_after: create_style_value_key("bkpa", item),
    }
}

fn build_overlay() -> OverlayKeys {
    let item = create_style_item_key("overlay", NOT_INHERITED);
    OverlayKeys {
        item,
        show_grid: create_style_value_key("show", item),
        spacing: create_style_value_key("spac", item),
        color: create_style_value_key("colr", item),
        opacity: create_style_value_key("opac", item),
        x_offset: create_style_value_key("xoff", item),
        y_offset: create_style_value_key("yoff", item),
        show_columns: create_style_value_key("colm", item),
    }
}

fn build_transform() -> TransformKeys {
    let item = create_style_item_key("transform", NOT_INHERITED);
    TransformKeys {
        item,
        operation: create_relative_style_value_key(
            "trop",
            item,
            Arc::new(TransformFlattener),
            false,
        ),
        origin: create_style_value_key("orig", item),
    }
}
