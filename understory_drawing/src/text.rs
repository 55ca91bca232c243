// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text layout enums, hyphenation and the text render options record.

use crate::brush::Brush;
use crate::font::Font;
use crate::geometry::Thickness;
use crate::pen::{Pen, PenBorders};
use crate::unit::Unit;

/// The inline direction of text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

/// How lines are broken.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordWrap {
    /// Break at word boundaries when needed.
    #[default]
    Auto,
    /// Never break.
    NoWrap,
    /// Break between words.
    Word,
    /// Break between characters, hyphenating where allowed.
    Character,
}

/// Whether words may be hyphenated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordHyphenation {
    /// Hyphenate automatically.
    Auto,
    /// Only at explicit soft hyphens.
    #[default]
    Manual,
    /// Never hyphenate.
    None,
}

bitflags::bitflags! {
    /// Lines drawn with text.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextDecoration: u8 {
        /// Under the baseline.
        const UNDERLINE = 1;
        /// Over the text.
        const OVERLINE = 1 << 1;
        /// Through the middle.
        const STRIKE_THROUGH = 1 << 2;
    }
}

/// Vertical alignment within a line or box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Top edge.
    #[default]
    Top,
    /// Centered.
    Middle,
    /// Bottom edge.
    Bottom,
    /// On the text baseline.
    Baseline,
}

/// Horizontal alignment within a line or box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Left edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right edge.
    Right,
    /// Spread to both edges.
    Justified,
}

/// The default minimum word length for hyphenation.
pub const DEFAULT_HYPHENATION_MIN_LENGTH: u32 = 5;

/// The default minimum characters kept before a hyphen.
pub const DEFAULT_HYPHENATION_MIN_BEFORE: u32 = 3;

/// The default minimum characters kept after a hyphen.
pub const DEFAULT_HYPHENATION_MIN_AFTER: u32 = 2;

/// The default character appended at a hyphenation break.
pub const DEFAULT_HYPHENATION_CHAR: char = '-';

/// Rules for breaking words across lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HyphenationStrategy {
    /// `false` disables hyphenation.
    pub enabled: bool,
    /// Character appended at the break.
    pub hyphen_append: char,
    /// Minimum word length to hyphenate.
    pub min_word_length: u32,
    /// Minimum characters before the break.
    pub min_chars_before: u32,
    /// Minimum characters after the break.
    pub min_chars_after: u32,
}

impl HyphenationStrategy {
    /// The built-in strategy.
    pub const DEFAULT: Self = Self {
        enabled: true,
        hyphen_append: DEFAULT_HYPHENATION_CHAR,
        min_word_length: DEFAULT_HYPHENATION_MIN_LENGTH,
        min_chars_before: DEFAULT_HYPHENATION_MIN_BEFORE,
        min_chars_after: DEFAULT_HYPHENATION_MIN_AFTER,
    };

    /// Hyphenation turned off.
    pub const NONE: Self = Self {
        enabled: false,
        ..Self::DEFAULT
    };
}

impl Default for HyphenationStrategy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything a text layout engine needs from a resolved style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextRenderOptions {
    /// Font, when any font value was set.
    pub font: Option<Font>,
    /// Glyph fill.
    pub fill_brush: Option<Brush>,
    /// Glyph outline.
    pub stroke: Option<Pen>,
    /// Inline background; only for inline display.
    pub background: Option<Brush>,
    /// Inline borders; only for inline display.
    pub borders: Option<PenBorders>,
    /// Inline border corner radius; only for inline display.
    pub border_radius: Option<Unit>,
    /// Inline padding; only for inline display.
    pub padding: Option<Thickness>,
    /// Start and end margins of an inline run.
    pub inline_margins: Option<Thickness>,
    /// Start and end padding of an inline run.
    pub inline_padding: Option<Thickness>,
    /// Indent of the first line.
    pub first_line_inset: Option<Unit>,
    /// Extra space between words.
    pub word_spacing: Option<Unit>,
    /// Extra space between characters.
    pub character_spacing: Option<Unit>,
    /// Line breaking mode.
    pub wrap_text: Option<WordWrap>,
    /// Hyphenation rules, when breaking by character.
    pub hyphenation: Option<HyphenationStrategy>,
    /// Horizontal glyph scale.
    pub character_h_scale: Option<f64>,
    /// Inline direction.
    pub direction: Option<TextDirection>,
    /// Line height; `None` for automatic.
    pub leading: Option<Unit>,
    /// Decoration lines.
    pub decoration: Option<TextDecoration>,
    /// Position text from the top of the line box rather than the baseline.
    pub draw_text_from_top: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenation_presets() {
        assert!(HyphenationStrategy::default().enabled);
        assert!(!HyphenationStrategy::NONE.enabled);
        assert_eq!(
            HyphenationStrategy::NONE.min_word_length,
            DEFAULT_HYPHENATION_MIN_LENGTH
        );
    }

    #[test]
    fn decoration_flags() {
        let deco = TextDecoration::UNDERLINE | TextDecoration::STRIKE_THROUGH;
        assert!(deco.contains(TextDecoration::UNDERLINE));
        assert!(!deco.contains(TextDecoration::OVERLINE));
    }
}
