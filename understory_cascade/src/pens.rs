// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border, stroke and overlay grid pens.

use understory_drawing::{
    Color, Dash, LineCaps, LineJoin, LineType, Pen, PageUnits, PenBorders, Sides, Unit,
    is_transparent,
};
use understory_style_key::{
    BorderKeys, BorderSideKeys, StrokeKeys, StyleKeys, StyleValueType, ValueKey,
};

use crate::defaults;
use crate::error::StyleError;
use crate::style::Style;

fn has_width(width: Option<Unit>) -> bool {
    width.is_none_or(|w| w.value() > 0.0)
}

fn has_color(color: Option<Color>) -> bool {
    color.is_none_or(|c| !is_transparent(c))
}

/// A pen for `line`, or the explicit no-draw pen for line types that do not
/// draw as pens.
fn line_pen(line: LineType, dash: Option<Dash>, color: Color, width: Unit) -> Pen {
    match line {
        LineType::Solid => Pen::solid(color, width),
        LineType::Dash => Pen::dashed(dash.unwrap_or_else(defaults::dash), color, width),
        LineType::None => Pen::None,
        LineType::Pattern => {
            log::warn!("pattern lines cannot be drawn with a pen, drawing nothing");
            Pen::None
        }
    }
}

/// The keys that finish a pen, shared by borders and strokes.
struct LineAttributeKeys {
    join: ValueKey<LineJoin>,
    ending: ValueKey<LineCaps>,
    mitre: ValueKey<f32>,
    opacity: ValueKey<f64>,
}

impl From<&BorderKeys> for LineAttributeKeys {
    fn from(keys: &BorderKeys) -> Self {
        Self {
            join: keys.join,
            ending: keys.ending,
            mitre: keys.mitre,
            opacity: keys.opacity,
        }
    }
}

impl From<&StrokeKeys> for LineAttributeKeys {
    fn from(keys: &StrokeKeys) -> Self {
        Self {
            join: keys.join,
            ending: keys.ending,
            mitre: keys.mitre,
            opacity: keys.opacity,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "dash phases are whole points"
)]
fn dash_phase(offset: Unit, dash: &Dash) -> Result<i32, StyleError> {
    if offset.units() == PageUnits::Percent {
        Ok((offset.value() / 100.0 * f64::from(dash.pattern_total())) as i32)
    } else if offset.is_relative() {
        Err(StyleError::UnsupportedRelativeUnit {
            what: "dash offset",
            unit: offset.units(),
        })
    } else {
        Ok(offset.points() as i32)
    }
}

impl Style {
    /// The value of `side`, or of `base` when only it is set or when its
    /// priority is strictly higher.
    fn prefer<T: StyleValueType>(&self, side: ValueKey<T>, base: ValueKey<T>) -> Option<T> {
        let vars = self.variables();
        match (self.get(side), self.get(base)) {
            (Some(s), Some(b)) if b.priority() > s.priority() => Some(b.value(vars)),
            (Some(s), _) => Some(s.value(vars)),
            (None, b) => b.map(|b| b.value(vars)),
        }
    }

    fn apply_line_attributes(&self, pen: &mut Pen, keys: LineAttributeKeys) {
        let Some(stroke) = pen.stroke_mut() else {
            return;
        };
        if let Some(join) = self.value(keys.join) {
            stroke.line_join = Some(join);
        }
        if let Some(caps) = self.value(keys.ending) {
            stroke.line_caps = Some(caps);
        }
        if let Some(mitre) = self.value(keys.mitre) {
            stroke.mitre_limit = Some(mitre);
        }
        if let Some(opacity) = self.value(keys.opacity) {
            stroke.opacity = Some(opacity);
        }
    }

    /// The pen for every border side.
    ///
    /// `Some(Pen::None)` is an explicit request for no border; `None` means
    /// nothing usable is set.
    #[must_use]
    pub fn create_border_pen(&self) -> Option<Pen> {
        let keys = &StyleKeys::get().border;
        let line = self.value(keys.style);
        let color = self.value(keys.color);
        let width = self.value(keys.width);
        let dash = self.value(keys.dash);

        let mut pen = if let Some(line) = line {
            if line == LineType::None {
                return Some(Pen::None);
            }
            if !has_color(color) || !has_width(width) {
                return None;
            }
            line_pen(
                line,
                dash,
                color.unwrap_or(defaults::LINE_COLOR),
                width.unwrap_or(defaults::LINE_WIDTH),
            )
        } else if let Some(dash) = dash {
            if !has_color(color) || !has_width(width) {
                return None;
            }
            Pen::dashed(
                dash,
                color.unwrap_or(defaults::LINE_COLOR),
                width.unwrap_or(defaults::LINE_WIDTH),
            )
        } else if let Some(color) = color {
            if is_transparent(color) || !has_width(width) {
                return None;
            }
            Pen::solid(color, width.unwrap_or(defaults::LINE_WIDTH))
        } else if let Some(width) = width {
            if !has_width(Some(width)) {
                return None;
            }
            Pen::solid(defaults::LINE_COLOR, width)
        } else {
            return None;
        };
        self.apply_line_attributes(&mut pen, keys.into());
        Some(pen)
    }

    /// The pen for one border side, weighed against the all-sides values.
    ///
    /// Returns `None` when the side sets nothing of its own and should use
    /// the all-sides pen.
    fn create_border_side_pen(&self, side: &BorderSideKeys) -> Option<Pen> {
        let base = &StyleKeys::get().border;
        let has_line = self.is_value_defined(side.style);
        if !has_line && !self.is_value_defined(side.color) && !self.is_value_defined(side.width) {
            return None;
        }

        let line = if has_line {
            let line = self.prefer(side.style, base.style)?;
            if line == LineType::None {
                return Some(Pen::None);
            }
            line
        } else {
            // A side color or width needs a line type from the all-sides border.
            match self.value(base.style) {
                None | Some(LineType::None) => return None,
                Some(line) => line,
            }
        };

        let color = self.prefer(side.color, base.color);
        let width = self.prefer(side.width, base.width);
        let dash = self.prefer(side.dash, base.dash);

        if !has_color(color) || !has_width(width) {
            return Some(Pen::None);
        }
        let color = color.unwrap_or(defaults::LINE_COLOR);
        let width = width.unwrap_or(defaults::LINE_WIDTH);
        let mut pen = line_pen(line, dash, color, width);
        self.apply_line_attributes(&mut pen, base.into());
        Some(pen)
    }

    /// The border pens for all four sides.
    ///
    /// Sides without a pen of their own are listed in
    /// [`PenBorders::all_sides_flags`] and use the all-sides pen.
    ///
    /// # Example
    ///
    /// ```rust
    /// use understory_cascade::Style;
    /// use understory_drawing::{Color, LineType, Pen, Sides, Unit};
    ///
    /// let mut style = Style::new();
    /// style.border_mut()
    ///     .set(|k| k.style, LineType::Solid)
    ///     .set(|k| k.color, Color::BLACK)
    ///     .set(|k| k.width, Unit::pt(2.0));
    /// style.border_bottom_mut().set(|k| k.style, LineType::None);
    ///
    /// let borders = style.create_border_pens();
    /// assert_eq!(borders.all_sides, Some(Pen::solid(Color::BLACK, Unit::pt(2.0))));
    /// assert_eq!(borders.bottom, Some(Pen::None));
    /// assert_eq!(borders.all_sides_flags, Sides::TOP | Sides::LEFT | Sides::RIGHT);
    /// ```
    #[must_use]
    pub fn create_border_pens(&self) -> PenBorders {
        let keys = StyleKeys::get();
        let all_sides = self.create_border_pen();
        let top = self.create_border_side_pen(&keys.border_top);
        let left = self.create_border_side_pen(&keys.border_left);
        let bottom = self.create_border_side_pen(&keys.border_bottom);
        let right = self.create_border_side_pen(&keys.border_right);

        let mut all_sides_flags = Sides::empty();
        for (pen, side) in [
            (&top, Sides::TOP),
            (&left, Sides::LEFT),
            (&bottom, Sides::BOTTOM),
            (&right, Sides::RIGHT),
        ] {
            if pen.is_none() {
                all_sides_flags |= side;
            }
        }

        PenBorders {
            all_sides,
            all_sides_flags,
            top,
            left,
            bottom,
            right,
            corner_radius: self.value(keys.border.corner_radius),
        }
    }

    /// The pen that outlines text and shapes.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Derivation`] if the dash offset uses a relative
    /// unit other than percent.
    pub fn create_stroke_pen(&self) -> Result<Option<Pen>, StyleError> {
        self.build_stroke_pen()
            .map_err(|err| err.deriving("stroke pen"))
    }

    fn build_stroke_pen(&self) -> Result<Option<Pen>, StyleError> {
        let keys = &StyleKeys::get().stroke;
        let line = self.value(keys.style);
        let color = self.value(keys.color);
        let width = self.value(keys.width);
        let dash = self.value(keys.dash);
        let offset = self.value(keys.dash_offset);

        let pen_color = color.unwrap_or(defaults::LINE_COLOR);
        let pen_width = width.unwrap_or(defaults::LINE_WIDTH);

        let mut pen = if let Some(line) = line {
            if line == LineType::None || !has_color(color) || !has_width(width) {
                return Ok(None);
            }
            match (line, dash) {
                (LineType::Dash, Some(dash)) => {
                    let dash = match offset {
                        Some(offset) => {
                            let phase = dash_phase(offset, &dash)?;
                            dash.with_phase(phase)
                        }
                        None => dash,
                    };
                    Pen::dashed(dash, pen_color, pen_width)
                }
                (line, _) => line_pen(line, None, pen_color, pen_width),
            }
        } else if let Some(dash) = dash {
            if !has_color(color) || !has_width(width) {
                return Ok(None);
            }
            let phase = match offset {
                Some(offset) => dash_phase(offset, &dash)?,
                None => dash.phase,
            };
            Pen::dashed(dash.with_phase(phase), pen_color, pen_width)
        } else if let Some(color) = color {
            if is_transparent(color) || !has_width(width) {
                return Ok(None);
            }
            Pen::solid(color, pen_width)
        } else if let Some(width) = width {
            if width.value() <= 0.0 {
                return Ok(None);
            }
            Pen::solid(defaults::LINE_COLOR, width)
        } else {
            return Ok(None);
        };
        self.apply_line_attributes(&mut pen, keys.into());
        Ok(Some(pen))
    }

    /// The pen for overlay grid lines, when the grid is shown.
    #[must_use]
    pub fn create_overlay_grid_pen(&self, major: bool) -> Option<Pen> {
        let keys = &StyleKeys::get().overlay;
        if !self.get_value_or(keys.show_grid, false) {
            return None;
        }
        let color = self.get_value_or(keys.color, defaults::GRID_COLOR);
        let width = if major {
            defaults::GRID_MAJOR_WIDTH
        } else {
            defaults::GRID_MINOR_WIDTH
        };
        let mut pen = Pen::solid(color, width);
        if let Some(stroke) = pen.stroke_mut() {
            stroke.opacity = Some(self.get_value_or(keys.opacity, defaults::GRID_OPACITY));
        }
        Some(pen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_drawing::{LineCaps, LineJoin, StrokePen};
    use understory_style_key::StyleValue;

    fn keys() -> &'static StyleKeys {
        StyleKeys::get()
    }

    #[test]
    fn solid_border_from_style_color_width() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.border.style, LineType::Solid);
        style.set_value(k.border.color, Color::BLACK);
        style.set_value(k.border.width, Unit::pt(2.0));
        style.set_value(k.border.join, LineJoin::Round);
        style.set_value(k.border.ending, LineCaps::Round);

        let pen = style.create_border_pen().expect("pen");
        let stroke = pen.stroke().expect("stroke");
        assert_eq!(stroke.color, Color::BLACK);
        assert_eq!(stroke.width, Unit::pt(2.0));
        assert_eq!(stroke.dash, None);
        assert_eq!(stroke.line_join, Some(LineJoin::Round));
        assert_eq!(stroke.line_caps, Some(LineCaps::Round));
    }

    #[test]
    fn border_precedence() {
        let k = keys();
        let mut style = Style::new();
        assert_eq!(style.create_border_pen(), None);

        style.set_value(k.border.width, Unit::pt(3.0));
        let black = Pen::solid(Color::BLACK, Unit::pt(3.0));
        assert_eq!(style.create_border_pen(), Some(black));

        style.set_value(k.border.color, Color::WHITE);
        let white = Pen::solid(Color::WHITE, Unit::pt(3.0));
        assert_eq!(style.create_border_pen(), Some(white));

        style.set_value(k.border.dash, Dash::new([2, 1], 0));
        assert_eq!(
            style.create_border_pen(),
            Some(Pen::dashed(Dash::new([2, 1], 0), Color::WHITE, Unit::pt(3.0)))
        );

        style.set_value(k.border.style, LineType::Pattern);
        assert_eq!(style.create_border_pen(), Some(Pen::None));

        style.set_value(k.border.style, LineType::None);
        assert_eq!(style.create_border_pen(), Some(Pen::None));
    }

    #[test]
    fn dash_style_without_pattern_uses_default_dash() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.border.style, LineType::Dash);
        let pen = style.create_border_pen().expect("pen");
        let stroke = pen.stroke().expect("stroke");
        assert_eq!(stroke.dash, Some(defaults::dash()));
        assert_eq!(stroke.color, defaults::LINE_COLOR);
        assert_eq!(stroke.width, defaults::LINE_WIDTH);
    }

    #[test]
    fn transparent_or_empty_border_suppressed() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.border.style, LineType::Solid);
        style.set_value(k.border.color, Color::TRANSPARENT);
        assert_eq!(style.create_border_pen(), None);

        let mut style = Style::new();
        style.set_value(k.border.color, Color::BLACK);
        style.set_value(k.border.width, Unit::ZERO);
        assert_eq!(style.create_border_pen(), None);

        let mut style = Style::new();
        style.set_value(k.border.width, Unit::pt(-1.0));
        assert_eq!(style.create_border_pen(), None);
    }

    #[test]
    fn transparent_color_suppresses_any_line_style() {
        let k = keys();
        let lines = [
            None,
            Some(LineType::Solid),
            Some(LineType::Dash),
            Some(LineType::Pattern),
        ];
        for line in lines {
            for dash in [None, Some(Dash::new([3, 2], 0))] {
                let mut style = Style::new();
                style.set_value(k.border.color, Color::TRANSPARENT);
                style.set_value(k.stroke.color, Color::TRANSPARENT);
                if let Some(line) = line {
                    style.set_value(k.border.style, line);
                    style.set_value(k.stroke.style, line);
                }
                if let Some(dash) = dash {
                    style.set_value(k.border.dash, dash.clone());
                    style.set_value(k.stroke.dash, dash);
                }
                assert_eq!(style.create_border_pen(), None, "border {line:?}");
                assert_eq!(style.create_stroke_pen(), Ok(None), "stroke {line:?}");
            }
        }

        let mut style = Style::new();
        style.set_value(k.border.color, Color::TRANSPARENT);
        style.set_value(k.border.style, LineType::None);
        assert_eq!(style.create_border_pen(), Some(Pen::None));
    }

    #[test]
    fn sides_fall_back_to_all_sides() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.border.style, LineType::Solid);
        style.set_value(k.border.width, Unit::pt(1.0));
        style.set_value(k.border_left.color, Color::WHITE);
        style.set_value(k.border_right.style, LineType::Dash);
        style.set_value(k.border_top.width, Unit::ZERO);
        style.set_value(k.border.corner_radius, Unit::pt(4.0));

        let borders = style.create_border_pens();
        assert_eq!(borders.all_sides_flags, Sides::BOTTOM);
        assert_eq!(borders.left, Some(Pen::solid(Color::WHITE, Unit::pt(1.0))));
        assert_eq!(
            borders.right,
            Some(Pen::dashed(defaults::dash(), Color::BLACK, Unit::pt(1.0)))
        );
        assert_eq!(borders.top, Some(Pen::None));
        assert_eq!(borders.pen_for(Sides::BOTTOM), borders.all_sides.as_ref());
        assert_eq!(borders.corner_radius, Some(Unit::pt(4.0)));
    }

    #[test]
    fn side_color_needs_a_line_type() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.border_top.color, Color::BLACK);
        let borders = style.create_border_pens();
        assert_eq!(borders.top, None);
        assert_eq!(borders.all_sides, None);
        assert!(borders.is_empty());
    }

    #[test]
    fn side_values_lose_only_to_higher_priority() {
        let k = keys();
        let mut style = Style::new();
        style.add_value(StyleValue::new(k.border.style, LineType::Solid).with_priority(10));
        style.add_value(StyleValue::new(k.border.width, Unit::pt(5.0)).with_priority(10));
        style.add_value(StyleValue::new(k.border_top.width, Unit::pt(1.0)).with_priority(10));
        style.add_value(StyleValue::new(k.border_left.width, Unit::pt(1.0)).with_priority(2));

        let borders = style.create_border_pens();
        assert_eq!(borders.top, Some(Pen::solid(Color::BLACK, Unit::pt(1.0))));
        assert_eq!(borders.left, Some(Pen::solid(Color::BLACK, Unit::pt(5.0))));
    }

    #[test]
    fn side_line_none_is_explicit() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.border_bottom.style, LineType::None);
        let borders = style.create_border_pens();
        assert_eq!(borders.bottom, Some(Pen::None));
        assert!(!borders.all_sides_flags.contains(Sides::BOTTOM));
    }

    #[test]
    fn stroke_pens() {
        let k = keys();
        let mut style = Style::new();
        assert_eq!(style.create_stroke_pen(), Ok(None));

        style.set_value(k.stroke.color, Color::WHITE);
        style.set_value(k.stroke.opacity, 0.5);
        let pen = style.create_stroke_pen().expect("stroke").expect("pen");
        let expected = StrokePen {
            opacity: Some(0.5),
            ..StrokePen::new(Color::WHITE, defaults::LINE_WIDTH, None)
        };
        assert_eq!(pen, Pen::Stroke(expected));

        style.set_value(k.stroke.style, LineType::None);
        assert_eq!(style.create_stroke_pen(), Ok(None));
    }

    #[test]
    fn stroke_dash_offset() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.stroke.style, LineType::Dash);
        style.set_value(k.stroke.dash, Dash::new([6, 4], 0));
        style.set_value(k.stroke.dash_offset, Unit::percent(50.0));
        let pen = style.create_stroke_pen().expect("stroke").expect("pen");
        let dash = pen.stroke().and_then(|s| s.dash.clone());
        assert_eq!(dash, Some(Dash::new([6, 4], 5)));

        style.remove_value(k.stroke.style);
        style.set_value(k.stroke.dash_offset, Unit::pt(3.0));
        let pen = style.create_stroke_pen().expect("stroke").expect("pen");
        let dash = pen.stroke().and_then(|s| s.dash.clone());
        assert_eq!(dash, Some(Dash::new([6, 4], 3)));
    }

    #[test]
    fn stroke_relative_offset_is_an_error() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.stroke.dash, Dash::new([6, 4], 0));
        style.set_value(k.stroke.dash_offset, Unit::em(1.0));
        let err = style.create_stroke_pen().expect_err("em offset");
        assert_eq!(
            err,
            StyleError::Derivation {
                what: "stroke pen",
                source: Box::new(StyleError::UnsupportedRelativeUnit {
                    what: "dash offset",
                    unit: PageUnits::EmHeight,
                }),
            }
        );
    }

    #[test]
    fn overlay_grid_pen() {
        let k = keys();
        let mut style = Style::new();
        assert_eq!(style.create_overlay_grid_pen(true), None);
        style.set_value(k.overlay.show_grid, true);
        let minor = style.create_overlay_grid_pen(false).expect("minor");
        let major = style.create_overlay_grid_pen(true).expect("major");
        let minor = minor.stroke().expect("minor stroke");
        let major = major.stroke().expect("major stroke");
        assert_eq!(minor.width, defaults::GRID_MINOR_WIDTH);
        assert_eq!(major.width, defaults::GRID_MAJOR_WIDTH);
        assert_eq!(major.opacity, Some(defaults::GRID_OPACITY));
        assert_eq!(major.color, defaults::GRID_COLOR);
    }
}
