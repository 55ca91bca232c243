// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background and fill brushes.

use understory_drawing::{
    Brush, FillType, FullImageBrush, GradientBrush, GradientDescriptor, ImageBrush,
    NATURAL_SIZE_STEP, NO_REPEAT_STEP, PatternRepeat, SolidBrush, Unit, is_transparent,
};
use understory_style_key::{FillKeys, StyleKeys, ValueKey};

use crate::style::Style;

impl Style {
    fn solid_brush(&self, keys: &FillKeys, style: Option<FillType>) -> Option<Brush> {
        if !matches!(style, None | Some(FillType::Solid)) {
            return None;
        }
        let color = self.value(keys.color).filter(|c| !is_transparent(*c))?;
        Some(Brush::Solid(SolidBrush {
            color,
            opacity: self.value(keys.opacity),
        }))
    }

    fn image_brush(&self, keys: &FillKeys, source: String, under: Option<Brush>) -> Brush {
        let repeat = self.get_value_or(keys.repeat, PatternRepeat::RepeatBoth);
        let opacity = self.value(keys.opacity);
        let under_brush = under.map(Box::new);
        if repeat == PatternRepeat::Fill {
            return Brush::FullImage(FullImageBrush {
                source,
                opacity,
                under_brush,
            });
        }
        let step = |repeats: bool, key: ValueKey<Unit>| {
            if repeats {
                self.get_value_or(key, NATURAL_SIZE_STEP)
            } else {
                NO_REPEAT_STEP
            }
        };
        Brush::Image(ImageBrush {
            x_step: step(repeat.repeats_x(), keys.x_step),
            y_step: step(repeat.repeats_y(), keys.y_step),
            x_position: self.get_value_or(keys.x_position, Unit::ZERO),
            y_position: self.get_value_or(keys.y_position, Unit::ZERO),
            x_size: self.value(keys.x_size),
            y_size: self.value(keys.y_size),
            opacity,
            under_brush,
            ..ImageBrush::new(source)
        })
    }

    /// The brush that paints behind content.
    ///
    /// A solid color is drawn beneath an image or gradient. A gradient that
    /// cannot be parsed gives no brush at all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use understory_cascade::Style;
    /// use understory_drawing::{Brush, Color};
    ///
    /// let mut style = Style::new();
    /// style.background_mut()
    ///     .set(|k| k.color, Color::WHITE)
    ///     .set(|k| k.image_source, "tile.png".to_string());
    ///
    /// let Some(Brush::Image(image)) = style.create_background_brush() else {
    ///     panic!("expected an image brush");
    /// };
    /// assert_eq!(image.source, "tile.png");
    /// assert!(matches!(image.under_brush.as_deref(), Some(Brush::Solid(_))));
    /// ```
    #[must_use]
    pub fn create_background_brush(&self) -> Option<Brush> {
        let keys = &StyleKeys::get().background;
        let style = self.value(keys.style);
        if style == Some(FillType::None) {
            return None;
        }
        let solid = self.solid_brush(keys, style);

        let Some(source) = self.value(keys.image_source).filter(|s| !s.is_empty()) else {
            return solid;
        };
        if GradientDescriptor::is_gradient(&source) {
            let Some(descriptor) = GradientDescriptor::parse(&source) else {
                log::warn!("ignoring background gradient that could not be parsed: {source}");
                return None;
            };
            return Some(Brush::Gradient(GradientBrush {
                descriptor,
                under_brush: solid.map(Box::new),
            }));
        }
        if matches!(style, None | Some(FillType::Image)) {
            Some(self.image_brush(keys, source, solid))
        } else {
            solid
        }
    }

    /// The brush that paints text glyphs and shapes.
    ///
    /// An image is used before a color; the two are never stacked.
    #[must_use]
    pub fn create_fill_brush(&self) -> Option<Brush> {
        let keys = &StyleKeys::get().fill;
        let style = self.value(keys.style);
        if style == Some(FillType::None) {
            return None;
        }
        if matches!(style, None | Some(FillType::Image))
            && let Some(source) = self.value(keys.image_source).filter(|s| !s.is_empty())
        {
            return Some(self.image_brush(keys, source, None));
        }
        self.solid_brush(keys, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_drawing::Color;

    fn keys() -> &'static StyleKeys {
        StyleKeys::get()
    }

    #[test]
    fn solid_background() {
        let k = keys();
        let mut style = Style::new();
        assert_eq!(style.create_background_brush(), None);
        style.set_value(k.background.color, Color::WHITE);
        style.set_value(k.background.opacity, 0.25);
        assert_eq!(
            style.create_background_brush(),
            Some(Brush::Solid(SolidBrush {
                color: Color::WHITE,
                opacity: Some(0.25),
            }))
        );

        style.set_value(k.background.color, Color::TRANSPARENT);
        assert_eq!(style.create_background_brush(), None);
    }

    #[test]
    fn fill_style_none_wins() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.background.color, Color::WHITE);
        style.set_value(k.background.style, FillType::None);
        assert_eq!(style.create_background_brush(), None);
    }

    #[test]
    fn background_image_steps_and_under_brush() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.background.color, Color::BLACK);
        style.set_value(k.background.image_source, "bg.png".to_string());
        style.set_value(k.background.repeat, PatternRepeat::RepeatX);
        style.set_value(k.background.x_step, Unit::pt(20.0));
        style.set_value(k.background.y_step, Unit::pt(30.0));
        style.set_value(k.background.x_size, Unit::pt(10.0));

        let Some(Brush::Image(image)) = style.create_background_brush() else {
            panic!("expected an image brush");
        };
        assert_eq!(image.x_step, Unit::pt(20.0));
        assert_eq!(image.y_step, NO_REPEAT_STEP);
        assert_eq!(image.x_position, Unit::ZERO);
        assert_eq!(image.x_size, Some(Unit::pt(10.0)));
        assert_eq!(image.y_size, None);
        assert_eq!(
            image.under_brush.as_deref(),
            Some(&Brush::Solid(SolidBrush::new(Color::BLACK)))
        );
    }

    #[test]
    fn background_full_image_and_solid_only_style() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.background.image_source, "bg.png".to_string());
        style.set_value(k.background.repeat, PatternRepeat::Fill);
        let Some(Brush::FullImage(full)) = style.create_background_brush() else {
            panic!("expected a full image brush");
        };
        assert_eq!(full.source, "bg.png");
        assert_eq!(full.under_brush, None);

        style.set_value(k.background.style, FillType::Solid);
        assert_eq!(style.create_background_brush(), None);
        style.set_value(k.background.color, Color::WHITE);
        assert_eq!(
            style.create_background_brush(),
            Some(Brush::Solid(SolidBrush::new(Color::WHITE)))
        );
    }

    #[test]
    fn background_gradient() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.background.color, Color::WHITE);
        style.set_value(
            k.background.image_source,
            "linear-gradient(red, blue)".to_string(),
        );
        let Some(Brush::Gradient(gradient)) = style.create_background_brush() else {
            panic!("expected a gradient brush");
        };
        assert_eq!(gradient.descriptor.stops.len(), 2);
        assert!(gradient.under_brush.is_some());

        style.set_value(
            k.background.image_source,
            "linear-gradient(nonsense)".to_string(),
        );
        assert_eq!(style.create_background_brush(), None);
    }

    #[test]
    fn fill_prefers_image_without_stacking() {
        let k = keys();
        let mut style = Style::new();
        style.set_value(k.fill.color, Color::BLACK);
        assert_eq!(
            style.create_fill_brush(),
            Some(Brush::Solid(SolidBrush::new(Color::BLACK)))
        );

        style.set_value(k.fill.image_source, "glyph.png".to_string());
        let Some(Brush::Image(image)) = style.create_fill_brush() else {
            panic!("expected an image brush");
        };
        assert_eq!(image.under_brush, None);
        assert_eq!(image.x_step, NATURAL_SIZE_STEP);

        style.set_value(k.fill.style, FillType::Solid);
        assert!(matches!(style.create_fill_brush(), Some(Brush::Solid(_))));
        style.set_value(k.fill.style, FillType::None);
        assert_eq!(style.create_fill_brush(), None);
    }
}
