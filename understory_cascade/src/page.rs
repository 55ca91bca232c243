// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page size and numbering derivations.

use understory_drawing::{PageNumberOptions, PageSize};
use understory_style_key::StyleKeys;

use crate::defaults;
use crate::style::Style;

impl Style {
    /// The size of the page this style sets up.
    ///
    /// Explicit dimensions win when both are known; the box size keys take
    /// precedence over the page keys. Otherwise the paper size and
    /// orientation decide.
    ///
    /// ```rust
    /// use understory_cascade::Style;
    /// use understory_drawing::{PaperOrientation, PaperSize, Unit};
    ///
    /// let mut style = Style::new();
    /// style.page_mut().set(|k| k.orientation, PaperOrientation::Landscape);
    /// let page = style.create_page_size();
    /// assert_eq!(page.paper_size, Some(PaperSize::A4));
    /// assert_eq!(page.width, Unit::mm(297.0));
    /// ```
    #[must_use]
    pub fn create_page_size(&self) -> PageSize {
        let keys = StyleKeys::get();
        let width = self
            .value(keys.size.width)
            .or_else(|| self.value(keys.page.width));
        let height = self
            .value(keys.size.height)
            .or_else(|| self.value(keys.page.height));
        if let (Some(width), Some(height)) = (width, height) {
            return PageSize::explicit(width, height);
        }
        PageSize::paper(
            self.get_value_or(keys.page.paper_size, defaults::PAPER_SIZE),
            self.get_value_or(keys.page.orientation, defaults::PAPER_ORIENTATION),
        )
    }

    /// Numbering for the pages this style applies to.
    #[must_use]
    pub fn create_page_number_options(&self) -> PageNumberOptions {
        let keys = &StyleKeys::get().page;
        PageNumberOptions {
            number_style: self.value(keys.number_style),
            number_group: self.value(keys.number_group),
            start_index: self.value(keys.number_start),
            format: self.value(keys.number_format),
            group_count_hint: self.value(keys.group_count_hint),
            total_count_hint: self.value(keys.total_count_hint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_drawing::{PageNumberStyle, PaperOrientation, PaperSize, Unit};

    #[test]
    fn default_page_is_a4_portrait() {
        let page = Style::new().create_page_size();
        assert_eq!(
            page,
            PageSize::paper(PaperSize::A4, PaperOrientation::Portrait)
        );
    }

    #[test]
    fn explicit_size_needs_both_dimensions() {
        let k = StyleKeys::get();
        let mut style = Style::new();
        style.set_value(k.page.paper_size, PaperSize::Letter);
        style.set_value(k.size.width, Unit::pt(400.0));
        assert_eq!(style.create_page_size().paper_size, Some(PaperSize::Letter));

        style.set_value(k.page.height, Unit::pt(300.0));
        let page = style.create_page_size();
        assert_eq!(page.paper_size, None);
        assert_eq!(page.width, Unit::pt(400.0));
        assert_eq!(page.height, Unit::pt(300.0));
        assert_eq!(page.orientation, PaperOrientation::Landscape);

        style.set_value(k.size.height, Unit::pt(500.0));
        assert_eq!(style.create_page_size().height, Unit::pt(500.0));
    }

    #[test]
    fn page_numbering() {
        let k = StyleKeys::get();
        let mut style = Style::new();
        assert!(!style.create_page_number_options().has_page_numbering());

        style.set_value(k.page.number_style, PageNumberStyle::LowercaseRoman);
        style.set_value(k.page.number_start, 3);
        style.set_value(k.page.number_group, "front".to_string());
        let options = style.create_page_number_options();
        assert!(options.has_page_numbering());
        assert_eq!(options.number_style, Some(PageNumberStyle::LowercaseRoman));
        assert_eq!(options.start_index, Some(3));
        assert_eq!(options.number_group.as_deref(), Some("front"));
        assert_eq!(options.format, None);
    }
}
