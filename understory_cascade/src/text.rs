// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font and text run derivations.

use understory_drawing::{
    DisplayMode, Font, FontSelector, HyphenationStrategy, TextRenderOptions, WordHyphenation,
    WordWrap,
};
use understory_style_key::StyleKeys;

use crate::defaults;
use crate::error::StyleError;
use crate::style::Style;

impl Style {
    /// The font this style selects.
    ///
    /// Returns `None` when no font value is set, unless `force` is `true`, in
    /// which case defaults fill every gap.
    #[must_use]
    pub fn create_font(&self, force: bool) -> Option<Font> {
        let keys = &StyleKeys::get().font;
        let family = self.value(keys.family);
        let size = self.value(keys.size);
        let weight = self.value(keys.weight);
        let style = self.value(keys.style);
        if !force && family.is_none() && size.is_none() && weight.is_none() && style.is_none() {
            return None;
        }
        Some(Font {
            selector: family.unwrap_or_else(|| FontSelector::new(defaults::FONT_FAMILY)),
            size: size.unwrap_or(defaults::FONT_SIZE),
            weight: weight.unwrap_or(defaults::FONT_WEIGHT),
            style: style.unwrap_or(defaults::FONT_STYLE),
        })
    }

    /// Hyphenation rules for character wrapping.
    #[must_use]
    pub fn create_hyphenation_strategy(&self) -> HyphenationStrategy {
        let keys = &StyleKeys::get().text;
        if self.get_value_or(keys.hyphenation, WordHyphenation::Auto) == WordHyphenation::None {
            return HyphenationStrategy::NONE;
        }
        let append = self.value(keys.hyphen_append);
        match self.value(keys.hyphen_min_length) {
            Some(min_word_length) => HyphenationStrategy {
                enabled: true,
                hyphen_append: append.unwrap_or(HyphenationStrategy::DEFAULT.hyphen_append),
                min_word_length,
                min_chars_before: self.get_value_or(
                    keys.hyphen_min_before,
                    HyphenationStrategy::DEFAULT.min_chars_before,
                ),
                min_chars_after: self.get_value_or(
                    keys.hyphen_min_after,
                    HyphenationStrategy::DEFAULT.min_chars_after,
                ),
            },
            None => HyphenationStrategy {
                hyphen_append: append.unwrap_or(HyphenationStrategy::DEFAULT.hyphen_append),
                ..HyphenationStrategy::DEFAULT
            },
        }
    }

    fn hyphenated_wrap(&self, hyphenation: WordHyphenation, options: &mut TextRenderOptions) {
        if hyphenation == WordHyphenation::Auto {
            options.wrap_text = Some(WordWrap::Character);
            options.hyphenation = Some(self.create_hyphenation_strategy());
        } else {
            options.wrap_text = Some(WordWrap::Word);
        }
    }

    /// Options for laying out and drawing a run of text.
    ///
    /// Inline display additionally carries the box decorations: padding,
    /// background, borders and corner radius.
    ///
    /// # Errors
    ///
    /// Fails when the stroke pen cannot be derived.
    ///
    /// # Example
    ///
    /// ```rust
    /// use understory_cascade::Style;
    /// use understory_drawing::{WordHyphenation, WordWrap};
    ///
    /// let mut style = Style::new();
    /// style.text_mut().set(|k| k.hyphenation, WordHyphenation::Auto);
    ///
    /// let options = style.create_text_options().unwrap();
    /// assert_eq!(options.wrap_text, Some(WordWrap::Character));
    /// assert!(options.hyphenation.is_some_and(|h| h.enabled));
    /// assert!(options.font.is_none());
    /// ```
    pub fn create_text_options(&self) -> Result<TextRenderOptions, StyleError> {
        let keys = StyleKeys::get();
        let text = &keys.text;
        let mut options = TextRenderOptions {
            font: self.create_font(false),
            fill_brush: self.create_fill_brush(),
            stroke: self
                .create_stroke_pen()
                .map_err(|err| err.deriving("text options"))?,
            ..TextRenderOptions::default()
        };

        if self.value(keys.position.display) == Some(DisplayMode::Inline) {
            options.padding = Some(self.create_padding_thickness());
            options.background = self.create_background_brush();
            options.borders = Some(self.create_border_pens());
            options.border_radius =
                Some(self.get_value_or(keys.border.corner_radius, defaults::CORNER_RADIUS));
        }

        options.inline_margins = self.create_inline_margins();
        options.inline_padding = self.create_inline_padding();
        options.first_line_inset = self.value(text.first_line_inset);
        options.word_spacing = self.value(text.word_spacing);
        options.character_spacing = self.value(text.character_spacing);

        let hyphenation = self.value(text.hyphenation);
        match self.value(text.wrap) {
            Some(wrap) => {
                options.wrap_text = Some(wrap);
                if wrap != WordWrap::NoWrap
                    && let Some(hyphenation) = hyphenation
                {
                    self.hyphenated_wrap(hyphenation, &mut options);
                }
            }
            None => {
                if let Some(hyphenation) = hyphenation {
                    self.hyphenated_wrap(hyphenation, &mut options);
                }
            }
        }

        options.character_h_scale = self.value(text.horizontal_scaling);
        options.direction = self.value(text.direction);
        options.leading = self.value(text.leading).filter(|lead| !lead.is_auto());
        options.decoration = self.value(text.decoration);
        if let Some(from_baseline) = self.value(text.from_baseline) {
            options.draw_text_from_top = !from_baseline;
        }
        Ok(options)
    }
}
