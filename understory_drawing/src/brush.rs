// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill brushes: solid colors, images and gradients.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::unit::Unit;

/// Step used on an axis that does not repeat.
pub const NO_REPEAT_STEP: Unit = Unit::pt(i32::MAX as f64);

/// Step meaning "repeat at the image's natural size".
pub const NATURAL_SIZE_STEP: Unit = Unit::ZERO;

/// How an area is filled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillType {
    /// No fill.
    None,
    /// A solid color.
    #[default]
    Solid,
    /// A repeated pattern.
    Pattern,
    /// An image or gradient.
    Image,
}

/// How an image fill repeats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PatternRepeat {
    /// Repeat on both axes.
    #[default]
    RepeatBoth,
    /// Repeat horizontally only.
    RepeatX,
    /// Repeat vertically only.
    RepeatY,
    /// Draw once.
    None,
    /// Stretch a single image over the whole area.
    Fill,
}

impl PatternRepeat {
    /// Returns `true` if the image repeats horizontally.
    #[must_use]
    pub const fn repeats_x(self) -> bool {
        matches!(self, Self::RepeatX | Self::RepeatBoth)
    }

    /// Returns `true` if the image repeats vertically.
    #[must_use]
    pub const fn repeats_y(self) -> bool {
        matches!(self, Self::RepeatY | Self::RepeatBoth)
    }
}

/// A brush produced by style resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    /// A solid color.
    Solid(SolidBrush),
    /// A positioned, possibly repeating, image.
    Image(ImageBrush),
    /// A single image stretched over the area.
    FullImage(FullImageBrush),
    /// A linear or radial gradient.
    Gradient(GradientBrush),
}

impl Brush {
    /// The brush drawn beneath this one, if any.
    #[must_use]
    pub fn under_brush(&self) -> Option<&Self> {
        match self {
            Self::Solid(_) => None,
            Self::Image(img) => img.under_brush.as_deref(),
            Self::FullImage(full) => full.under_brush.as_deref(),
            Self::Gradient(grad) => grad.under_brush.as_deref(),
        }
    }
}

/// A solid color brush.
#[derive(Clone, Debug, PartialEq)]
pub struct SolidBrush {
    /// Fill color.
    pub color: Color,
    /// Opacity, when specified.
    pub opacity: Option<f64>,
}

impl SolidBrush {
    /// Creates a solid brush with no explicit opacity.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            opacity: None,
        }
    }
}

/// A tiled image brush.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBrush {
    /// The image source, passed through unresolved.
    pub source: String,
    /// Horizontal repeat step.
    pub x_step: Unit,
    /// Vertical repeat step.
    pub y_step: Unit,
    /// Horizontal offset of the first tile.
    pub x_position: Unit,
    /// Vertical offset of the first tile.
    pub y_position: Unit,
    /// Tile width, when specified.
    pub x_size: Option<Unit>,
    /// Tile height, when specified.
    pub y_size: Option<Unit>,
    /// Opacity, when specified.
    pub opacity: Option<f64>,
    /// A brush drawn beneath the image.
    pub under_brush: Option<Box<Brush>>,
}

impl ImageBrush {
    /// Creates an image brush at the origin repeating at natural size.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            x_step: NATURAL_SIZE_STEP,
            y_step: NATURAL_SIZE_STEP,
            x_position: Unit::ZERO,
            y_position: Unit::ZERO,
            x_size: None,
            y_size: None,
            opacity: None,
            under_brush: None,
        }
    }
}

/// An image stretched over the whole fill area.
#[derive(Clone, Debug, PartialEq)]
pub struct FullImageBrush {
    /// The image source, passed through unresolved.
    pub source: String,
    /// Opacity, when specified.
    pub opacity: Option<f64>,
    /// A brush drawn beneath the image.
    pub under_brush: Option<Box<Brush>>,
}

/// A gradient brush.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientBrush {
    /// The parsed gradient.
    pub descriptor: GradientDescriptor,
    /// A brush drawn beneath the gradient.
    pub under_brush: Option<Box<Brush>>,
}

/// The family of a gradient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GradientKind {
    /// A linear gradient along an angle in degrees (0 is upwards, 90 to the right).
    Linear {
        /// Direction in degrees.
        angle: f64,
    },
    /// A radial gradient.
    Radial {
        /// `true` for a circle, `false` for an ellipse.
        circle: bool,
    },
}

/// One color stop of a gradient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Stop color.
    pub color: Color,
    /// Position along the gradient in `0.0..=1.0`, when specified.
    pub offset: Option<f64>,
}

/// A parsed `linear-gradient(...)` or `radial-gradient(...)` value.
///
/// ```rust
/// use understory_drawing::{GradientDescriptor, GradientKind};
///
/// let grad = GradientDescriptor::parse("linear-gradient(to right, red, blue 80%)").unwrap();
/// assert_eq!(grad.kind, GradientKind::Linear { angle: 90.0 });
/// assert_eq!(grad.stops.len(), 2);
/// assert_eq!(grad.stops[1].offset, Some(0.8));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescriptor {
    /// Linear or radial.
    pub kind: GradientKind,
    /// Color stops in order.
    pub stops: Vec<GradientStop>,
}

impl GradientDescriptor {
    /// Returns the gradient function arguments if `source` is a gradient.
    ///
    /// The second value is `true` for a radial gradient.
    #[must_use]
    pub fn gradient_arguments(source: &str) -> Option<(bool, &str)> {
        let source = source.trim();
        let (radial, rest) = if let Some(rest) = source.strip_prefix("linear-gradient(") {
            (false, rest)
        } else if let Some(rest) = source.strip_prefix("radial-gradient(") {
            (true, rest)
        } else {
            return None;
        };
        Some((radial, rest.strip_suffix(')').unwrap_or(rest)))
    }

    /// Returns `true` if `source` names a gradient rather than an image.
    #[must_use]
    pub fn is_gradient(source: &str) -> bool {
        Self::gradient_arguments(source).is_some()
    }

    /// Parses a gradient value. Returns `None` if it is not a gradient or it
    /// has fewer than two understood color stops.
    #[must_use]
    pub fn parse(source: &str) -> Option<Self> {
        let (radial, args) = Self::gradient_arguments(source)?;
        let mut parts = split_top_level(args).into_iter().peekable();

        let mut kind = if radial {
            GradientKind::Radial { circle: false }
        } else {
            GradientKind::Linear { angle: 180.0 }
        };
        if let Some(first) = parts.peek() {
            if let Some(parsed) = parse_gradient_shape(first, radial) {
                kind = parsed;
                parts.next();
            }
        }

        let mut stops = Vec::new();
        for part in parts {
            stops.push(parse_stop(part)?);
        }
        if stops.len() < 2 {
            return None;
        }
        Some(Self { kind, stops })
    }
}

/// Splits on commas that are not nested in parentheses.
fn split_top_level(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_u32;
    let mut start = 0;
    for (index, ch) in args.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    let last = args[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

fn parse_gradient_shape(part: &str, radial: bool) -> Option<GradientKind> {
    if radial {
        return match part {
            "circle" => Some(GradientKind::Radial { circle: true }),
            "ellipse" => Some(GradientKind::Radial { circle: false }),
            _ => None,
        };
    }
    if let Some(deg) = part.strip_suffix("deg") {
        return deg
            .trim()
            .parse::<f64>()
            .ok()
            .map(|angle| GradientKind::Linear { angle });
    }
    let angle = match part.strip_prefix("to ")?.trim() {
        "top" => 0.0,
        "top right" | "right top" => 45.0,
        "right" => 90.0,
        "bottom right" | "right bottom" => 135.0,
        "bottom" => 180.0,
        "bottom left" | "left bottom" => 225.0,
        "left" => 270.0,
        "top left" | "left top" => 315.0,
        _ => return None,
    };
    Some(GradientKind::Linear { angle })
}

fn parse_stop(part: &str) -> Option<GradientStop> {
    let (color_part, offset) = match part.rsplit_once(' ') {
        Some((head, tail)) if tail.ends_with('%') => {
            let pct = tail.trim_end_matches('%').parse::<f64>().ok()?;
            (head.trim(), Some(pct / 100.0))
        }
        _ => (part, None),
    };
    let color = parse_color(color_part).ok()?.to_alpha_color::<Srgb>();
    Some(GradientStop { color, offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn detects_gradients() {
        assert!(GradientDescriptor::is_gradient("linear-gradient(red, blue)"));
        assert!(GradientDescriptor::is_gradient(" radial-gradient(red, blue) "));
        assert!(!GradientDescriptor::is_gradient("images/tile.png"));
    }

    #[test]
    fn parses_angle_and_nested_colors() {
        let grad =
            GradientDescriptor::parse("linear-gradient(45deg, rgb(255, 0, 0), blue 50%)").unwrap();
        assert_eq!(grad.kind, GradientKind::Linear { angle: 45.0 });
        assert_eq!(grad.stops[0].color, css::RED);
        assert_eq!(grad.stops[0].offset, None);
        assert_eq!(grad.stops[1].offset, Some(0.5));
    }

    #[test]
    fn radial_shape() {
        let grad = GradientDescriptor::parse("radial-gradient(circle, white, black)").unwrap();
        assert_eq!(grad.kind, GradientKind::Radial { circle: true });
    }

    #[test]
    fn rejects_bad_gradients() {
        assert_eq!(GradientDescriptor::parse("linear-gradient(red)"), None);
        let bad_color = GradientDescriptor::parse("linear-gradient(red, notacolor)");
        assert_eq!(bad_color, None);
    }

    #[test]
    fn repeat_axes() {
        assert!(PatternRepeat::RepeatBoth.repeats_x());
        assert!(PatternRepeat::RepeatBoth.repeats_y());
        assert!(!PatternRepeat::RepeatX.repeats_y());
        assert!(!PatternRepeat::None.repeats_x());
    }
}
