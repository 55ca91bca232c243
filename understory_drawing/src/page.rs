// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paper sizes and page numbering records.

use alloc::string::String;

use crate::geometry::UnitSize;
use crate::unit::Unit;

/// Standard paper sizes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaperSize {
    /// ISO A3.
    A3,
    /// ISO A4.
    #[default]
    A4,
    /// ISO A5.
    A5,
    /// ISO B5.
    B5,
    /// US Letter.
    Letter,
    /// US Legal.
    Legal,
    /// US Tabloid.
    Tabloid,
}

impl PaperSize {
    /// Portrait dimensions.
    #[must_use]
    pub const fn portrait_size(self) -> UnitSize {
        match self {
            Self::A3 => UnitSize::new(Unit::mm(297.0), Unit::mm(420.0)),
            Self::A4 => UnitSize::new(Unit::mm(210.0), Unit::mm(297.0)),
            Self::A5 => UnitSize::new(Unit::mm(148.0), Unit::mm(210.0)),
            Self::B5 => UnitSize::new(Unit::mm(176.0), Unit::mm(250.0)),
            Self::Letter => UnitSize::new(Unit::inch(8.5), Unit::inch(11.0)),
            Self::Legal => UnitSize::new(Unit::inch(8.5), Unit::inch(14.0)),
            Self::Tabloid => UnitSize::new(Unit::inch(11.0), Unit::inch(17.0)),
        }
    }
}

/// Page orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaperOrientation {
    /// Taller than wide.
    #[default]
    Portrait,
    /// Wider than tall.
    Landscape,
}

/// The resolved size of a page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageSize {
    /// Paper size, when the size came from one.
    pub paper_size: Option<PaperSize>,
    /// Orientation.
    pub orientation: PaperOrientation,
    /// Final width.
    pub width: Unit,
    /// Final height.
    pub height: Unit,
}

impl PageSize {
    /// A page of explicit dimensions.
    #[must_use]
    pub fn explicit(width: Unit, height: Unit) -> Self {
        let orientation = if width.points() > height.points() {
            PaperOrientation::Landscape
        } else {
            PaperOrientation::Portrait
        };
        Self {
            paper_size: None,
            orientation,
            width,
            height,
        }
    }

    /// A standard paper size in the given orientation.
    #[must_use]
    pub const fn paper(paper: PaperSize, orientation: PaperOrientation) -> Self {
        let size = paper.portrait_size();
        let (width, height) = match orientation {
            PaperOrientation::Portrait => (size.width, size.height),
            PaperOrientation::Landscape => (size.height, size.width),
        };
        Self {
            paper_size: Some(paper),
            orientation,
            width,
            height,
        }
    }
}

/// Page number formats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageNumberStyle {
    /// 1, 2, 3.
    #[default]
    Decimals,
    /// i, ii, iii.
    LowercaseRoman,
    /// I, II, III.
    UppercaseRoman,
    /// a, b, c.
    LowercaseLetters,
    /// A, B, C.
    UppercaseLetters,
    /// No number.
    None,
}

/// Page numbering settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageNumberOptions {
    /// Number format.
    pub number_style: Option<PageNumberStyle>,
    /// Numbering group name.
    pub number_group: Option<String>,
    /// First number in the group.
    pub start_index: Option<i32>,
    /// Display format string.
    pub format: Option<String>,
    /// Expected pages in the group.
    pub group_count_hint: Option<i32>,
    /// Expected pages in total.
    pub total_count_hint: Option<i32>,
}

impl PageNumberOptions {
    /// Returns `true` if any numbering value was set.
    #[must_use]
    pub fn has_page_numbering(&self) -> bool {
        self.number_style.is_some()
            || self.number_group.is_some()
            || self.start_index.is_some()
            || self.format.is_some()
            || self.group_count_hint.is_some()
            || self.total_count_hint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_swaps_dimensions() {
        let page = PageSize::paper(PaperSize::A4, PaperOrientation::Landscape);
        assert_eq!(page.width, Unit::mm(297.0));
        assert_eq!(page.height, Unit::mm(210.0));
    }

    #[test]
    fn explicit_orientation() {
        let page = PageSize::explicit(Unit::pt(800.0), Unit::pt(600.0));
        assert_eq!(page.orientation, PaperOrientation::Landscape);
        assert_eq!(page.paper_size, None);
    }

    #[test]
    fn numbering_presence() {
        assert!(!PageNumberOptions::default().has_page_numbering());
        let opts = PageNumberOptions {
            start_index: Some(3),
            ..PageNumberOptions::default()
        };
        assert!(opts.has_page_numbering());
    }
}
