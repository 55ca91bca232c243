// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while deriving drawing options from a style.

use core::fmt;

use understory_drawing::PageUnits;

/// A style holds values that cannot be turned into the requested record.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleError {
    /// A relative unit was used where only some relative units are understood.
    UnsupportedRelativeUnit {
        /// The value that held the unit.
        what: &'static str,
        /// The unit found.
        unit: PageUnits,
    },
    /// Building a record failed.
    Derivation {
        /// The record being built.
        what: &'static str,
        /// The underlying failure.
        source: Box<StyleError>,
    },
}

impl StyleError {
    /// Wraps this error with the record that was being built.
    #[must_use]
    pub fn deriving(self, what: &'static str) -> Self {
        Self::Derivation {
            what,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedRelativeUnit { what, unit } => write!(
                f,
                "the {what} cannot use relative units of '{}'",
                unit.suffix()
            ),
            Self::Derivation { what, source } => write!(f, "could not create the {what}: {source}"),
        }
    }
}

impl core::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::UnsupportedRelativeUnit { .. } => None,
            Self::Derivation { source, .. } => Some(source.as_ref()),
        }
    }
}
