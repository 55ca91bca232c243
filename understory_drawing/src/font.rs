// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font descriptors.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::unit::Unit;

/// The regular font weight.
pub const FONT_WEIGHT_REGULAR: u16 = 400;

/// The bold font weight.
pub const FONT_WEIGHT_BOLD: u16 = 700;

/// An ordered list of font family names to try.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FontSelector {
    families: Vec<String>,
}

impl FontSelector {
    /// Creates a selector for a single family.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            families: alloc::vec![family.into()],
        }
    }

    /// Appends a fallback family.
    #[must_use]
    pub fn with_fallback(mut self, family: impl Into<String>) -> Self {
        self.families.push(family.into());
        self
    }

    /// The first choice family, if any.
    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.families.first().map(String::as_str)
    }

    /// All families in preference order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }
}

impl fmt::Debug for FontSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.families()).finish()
    }
}

impl fmt::Display for FontSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, family) in self.families().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(family)?;
        }
        Ok(())
    }
}

/// The slant of a font face.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Regular,
    /// Italic.
    Italic,
    /// Oblique.
    Oblique,
}

/// A resolved font request.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Families in preference order.
    pub selector: FontSelector,
    /// Em size.
    pub size: Unit,
    /// Weight on the 100..=900 scale.
    pub weight: u16,
    /// Slant.
    pub style: FontStyle,
}

impl Font {
    /// Returns `true` if the weight is at least bold.
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.weight >= FONT_WEIGHT_BOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn selector_order() {
        let sel = FontSelector::new("Helvetica").with_fallback("sans-serif");
        assert_eq!(sel.family(), Some("Helvetica"));
        assert_eq!(format!("{sel}"), "Helvetica, sans-serif");
        assert_eq!(FontSelector::default().family(), None);
    }
}
