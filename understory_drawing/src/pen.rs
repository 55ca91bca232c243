// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line styles, dash patterns and pen descriptors.

use core::fmt;

use peniko::Color;
use smallvec::SmallVec;

use crate::unit::Unit;

/// Returns `true` if the color has no alpha.
#[must_use]
#[inline]
pub fn is_transparent(color: Color) -> bool {
    color.components[3] <= 0.0
}

/// How a line is drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineType {
    /// No line.
    None,
    /// A continuous line.
    #[default]
    Solid,
    /// A dashed line.
    Dash,
    /// A patterned line. Patterns are not drawn as pens.
    Pattern,
}

/// The shape at the open ends of a line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineCaps {
    /// Squared off at the end point.
    #[default]
    Butt,
    /// A semicircle around the end point.
    Round,
    /// Squared off half a line width past the end point.
    Projecting,
}

/// The shape where two segments meet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    /// A sharp corner, limited by the mitre limit.
    #[default]
    Mitre,
    /// A rounded corner.
    Round,
    /// A cut corner.
    Bevel,
}

bitflags::bitflags! {
    /// A set of box sides.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// The top side.
        const TOP = 1;
        /// The left side.
        const LEFT = 1 << 1;
        /// The bottom side.
        const BOTTOM = 1 << 2;
        /// The right side.
        const RIGHT = 1 << 3;
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self::all()
    }
}

/// A dash pattern: alternating on/off lengths in points and a phase.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Dash {
    /// Alternating on and off lengths.
    pub pattern: SmallVec<[i32; 4]>,
    /// Offset into the pattern where drawing starts.
    pub phase: i32,
}

impl Dash {
    /// Creates a dash pattern.
    #[must_use]
    pub fn new(pattern: impl IntoIterator<Item = i32>, phase: i32) -> Self {
        Self {
            pattern: pattern.into_iter().collect(),
            phase,
        }
    }

    /// An empty pattern, meaning a solid line.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if there is no pattern.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The summed length of one repetition of the pattern.
    #[must_use]
    pub fn pattern_total(&self) -> i32 {
        self.pattern.iter().sum()
    }

    /// The same pattern starting at a new phase.
    #[must_use]
    pub fn with_phase(&self, phase: i32) -> Self {
        Self {
            pattern: self.pattern.clone(),
            phase,
        }
    }
}

impl fmt::Debug for Dash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dash({:?} {})", self.pattern.as_slice(), self.phase)
    }
}

/// A drawing pen produced by style resolution.
///
/// [`Pen::None`] is an explicit request not to draw, which is different from
/// having no pen at all (`Option::None`), where callers fall back to another
/// pen.
#[derive(Clone, Debug, PartialEq)]
pub enum Pen {
    /// Explicitly draw nothing.
    None,
    /// Stroke with the given parameters.
    Stroke(StrokePen),
}

impl Pen {
    /// A solid pen.
    #[must_use]
    pub fn solid(color: Color, width: Unit) -> Self {
        Self::Stroke(StrokePen::new(color, width, None))
    }

    /// A dashed pen.
    #[must_use]
    pub fn dashed(dash: Dash, color: Color, width: Unit) -> Self {
        Self::Stroke(StrokePen::new(color, width, Some(dash)))
    }

    /// Returns `true` for the explicit no-draw pen.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The stroke parameters, if this pen draws.
    #[must_use]
    pub const fn stroke(&self) -> Option<&StrokePen> {
        match self {
            Self::None => None,
            Self::Stroke(stroke) => Some(stroke),
        }
    }

    /// Mutable stroke parameters, if this pen draws.
    pub fn stroke_mut(&mut self) -> Option<&mut StrokePen> {
        match self {
            Self::None => None,
            Self::Stroke(stroke) => Some(stroke),
        }
    }
}

/// The parameters of a drawing pen.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePen {
    /// Line color.
    pub color: Color,
    /// Line width.
    pub width: Unit,
    /// Dash pattern; `None` for a solid line.
    pub dash: Option<Dash>,
    /// End caps, when specified.
    pub line_caps: Option<LineCaps>,
    /// Segment joins, when specified.
    pub line_join: Option<LineJoin>,
    /// Mitre limit, when specified.
    pub mitre_limit: Option<f32>,
    /// Opacity in `0.0..=1.0`, when specified.
    pub opacity: Option<f64>,
}

impl StrokePen {
    /// Creates pen parameters with no optional attributes.
    #[must_use]
    pub fn new(color: Color, width: Unit, dash: Option<Dash>) -> Self {
        Self {
            color,
            width,
            dash,
            line_caps: None,
            line_join: None,
            mitre_limit: None,
            opacity: None,
        }
    }

    /// Converts to a [`kurbo::Stroke`] with the width in points.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Stroke {
        let mut stroke = kurbo::Stroke::new(self.width.points());
        if let Some(caps) = self.line_caps {
            stroke = stroke.with_caps(match caps {
                LineCaps::Butt => kurbo::Cap::Butt,
                LineCaps::Round => kurbo::Cap::Round,
                LineCaps::Projecting => kurbo::Cap::Square,
            });
        }
        if let Some(join) = self.line_join {
            stroke = stroke.with_join(match join {
                LineJoin::Mitre => kurbo::Join::Miter,
                LineJoin::Round => kurbo::Join::Round,
                LineJoin::Bevel => kurbo::Join::Bevel,
            });
        }
        if let Some(limit) = self.mitre_limit {
            stroke = stroke.with_miter_limit(f64::from(limit));
        }
        if let Some(dash) = &self.dash {
            stroke = stroke.with_dashes(
                f64::from(dash.phase),
                dash.pattern.iter().map(|len| f64::from(*len)),
            );
        }
        stroke
    }
}

/// Per-side border pens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PenBorders {
    /// The pen for every side without its own pen.
    pub all_sides: Option<Pen>,
    /// The sides that use `all_sides`.
    pub all_sides_flags: Sides,
    /// Top side override.
    pub top: Option<Pen>,
    /// Left side override.
    pub left: Option<Pen>,
    /// Bottom side override.
    pub bottom: Option<Pen>,
    /// Right side override.
    pub right: Option<Pen>,
    /// Corner radius, when specified.
    pub corner_radius: Option<Unit>,
}

impl PenBorders {
    /// The pen that applies to `side`, falling back to the all-sides pen.
    ///
    /// `side` must be a single side.
    #[must_use]
    pub fn pen_for(&self, side: Sides) -> Option<&Pen> {
        let own = if side == Sides::TOP {
            self.top.as_ref()
        } else if side == Sides::LEFT {
            self.left.as_ref()
        } else if side == Sides::BOTTOM {
            self.bottom.as_ref()
        } else if side == Sides::RIGHT {
            self.right.as_ref()
        } else {
            None
        };
        own.or(self.all_sides.as_ref())
    }

    /// Returns `true` if nothing would be drawn on any side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [Sides::TOP, Sides::LEFT, Sides::BOTTOM, Sides::RIGHT]
            .into_iter()
            .all(|side| self.pen_for(side).is_none_or(Pen::is_none))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn dash_total_and_phase() {
        let dash = Dash::new([4, 2, 1], 0);
        assert_eq!(dash.pattern_total(), 7);
        assert_eq!(dash.with_phase(3).phase, 3);
        assert!(Dash::none().is_none());
    }

    #[test]
    fn transparency() {
        assert!(is_transparent(Color::TRANSPARENT));
        assert!(!is_transparent(css::BLACK));
    }

    #[test]
    fn pen_for_falls_back() {
        let borders = PenBorders {
            all_sides: Some(Pen::solid(css::BLACK, Unit::pt(1.0))),
            top: Some(Pen::None),
            ..PenBorders::default()
        };
        assert_eq!(borders.pen_for(Sides::TOP), Some(&Pen::None));
        assert_eq!(
            borders.pen_for(Sides::LEFT),
            Some(&Pen::solid(css::BLACK, Unit::pt(1.0)))
        );
        assert!(!borders.is_empty());
        assert!(PenBorders::default().is_empty());
    }

    #[test]
    fn kurbo_stroke() {
        let mut stroke = StrokePen::new(css::RED, Unit::pt(2.0), Some(Dash::new([3, 1], 1)));
        stroke.line_join = Some(LineJoin::Bevel);
        let k = stroke.to_kurbo();
        assert_eq!(k.width, 2.0);
        assert_eq!(k.join, kurbo::Join::Bevel);
        assert_eq!(k.dash_offset, 1.0);
        assert_eq!(k.dash_pattern.as_slice(), &[3.0, 1.0]);
    }
}
