// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box layout derivations: position options, thicknesses and columns.

use understory_drawing::{
    ColumnOptions, DisplayMode, FloatMode, HorizontalAlignment, OverflowAction, OverflowSplit,
    PositionMode, PositionOptions, TextDirection, Thickness, Unit,
};
use understory_style_key::{StyleKeys, ThicknessKeys};

use crate::defaults;
use crate::style::Style;

impl Style {
    /// The four sides of a thickness item, if any of them is set.
    ///
    /// The `all` value fills every side first; explicit sides override it.
    fn try_get_thickness(&self, keys: &ThicknessKeys) -> Option<Thickness> {
        let mut found = false;
        let mut thickness = Thickness::empty();
        if let Some(all) = self.value(keys.all) {
            thickness = Thickness::uniform(all);
            found = true;
        }
        for (key, side) in [
            (keys.top, &mut thickness.top),
            (keys.right, &mut thickness.right),
            (keys.bottom, &mut thickness.bottom),
            (keys.left, &mut thickness.left),
        ] {
            if let Some(value) = self.value(key) {
                *side = value;
                found = true;
            }
        }
        found.then_some(thickness)
    }

    fn inline_thickness(&self, keys: &ThicknessKeys) -> Option<Thickness> {
        let start = self.value(keys.inline_start);
        let end = self.value(keys.inline_end);
        if start.is_none() && end.is_none() {
            return None;
        }
        Some(Thickness::new(
            Unit::ZERO,
            end.unwrap_or(Unit::ZERO),
            Unit::ZERO,
            start.unwrap_or(Unit::ZERO),
        ))
    }

    /// Outer margins; zero on every side when none are set.
    #[must_use]
    pub fn create_margins_thickness(&self) -> Thickness {
        self.try_get_thickness(&StyleKeys::get().margins)
            .unwrap_or_else(Thickness::empty)
    }

    /// Inner padding; zero on every side when none is set.
    #[must_use]
    pub fn create_padding_thickness(&self) -> Thickness {
        self.try_get_thickness(&StyleKeys::get().padding)
            .unwrap_or_else(Thickness::empty)
    }

    /// Clip inset; zero on every side when none is set.
    #[must_use]
    pub fn create_clipping_thickness(&self) -> Thickness {
        self.try_get_thickness(&StyleKeys::get().clip)
            .unwrap_or_else(Thickness::empty)
    }

    /// Start and end margins of an inline run, as left and right.
    #[must_use]
    pub fn create_inline_margins(&self) -> Option<Thickness> {
        self.inline_thickness(&StyleKeys::get().margins)
    }

    /// Start and end padding of an inline run, as left and right.
    #[must_use]
    pub fn create_inline_padding(&self) -> Option<Thickness> {
        self.inline_thickness(&StyleKeys::get().padding)
    }

    /// Layout options for the box this style applies to.
    ///
    /// `is_in_positioned` is `true` inside an absolutely positioned region,
    /// where boxes shrink to their content rather than filling the width.
    ///
    /// # Example
    ///
    /// ```rust
    /// use understory_cascade::Style;
    /// use understory_drawing::{DisplayMode, PositionMode, Unit};
    ///
    /// let mut style = Style::new();
    /// style.position_mut()
    ///     .set(|k| k.mode, PositionMode::Absolute)
    ///     .set(|k| k.display, DisplayMode::Inline);
    /// style.size_mut().set(|k| k.width, Unit::pt(120.0));
    ///
    /// let options = style.create_position_options(false);
    /// assert_eq!(options.display_mode, DisplayMode::Block);
    /// assert_eq!(options.width, Some(Unit::pt(120.0)));
    /// assert!(!options.fill_width);
    /// ```
    #[must_use]
    pub fn create_position_options(&self, is_in_positioned: bool) -> PositionOptions {
        let keys = StyleKeys::get();
        let mut options = PositionOptions {
            position_mode: self.get_value_or(keys.position.mode, PositionMode::Static),
            display_mode: self.get_value_or(keys.position.display, DisplayMode::Block),
            ..PositionOptions::default()
        };

        let display = options.display_mode;
        if options.position_mode.is_out_of_flow() {
            options.fill_width = false;
            if matches!(display, DisplayMode::Inline | DisplayMode::TableCell) {
                options.display_mode = DisplayMode::Block;
            }
        } else if is_in_positioned
            || matches!(display, DisplayMode::Inline | DisplayMode::InlineBlock)
        {
            options.fill_width = false;
        } else if let Some(full) = self.value(keys.size.full_width) {
            options.fill_width = full;
        }

        if let Some(x_object) = self.value(keys.position.x_object) {
            options.x_object = x_object;
            if options.display_mode == DisplayMode::Inline {
                options.display_mode = DisplayMode::InlineBlock;
            }
        }

        options.x = self.value(keys.position.x);
        options.y = self.value(keys.position.y);
        options.right = self.value(keys.position.right);
        options.bottom = self.value(keys.position.bottom);

        match self.value(keys.size.width) {
            Some(width) if width.is_auto() => options.fill_width = true,
            Some(width) => {
                options.width = Some(width);
                options.fill_width = false;
            }
            None => {}
        }
        options.height = self.value(keys.size.height).filter(|h| !h.is_auto());
        options.minimum_width = self.value(keys.size.min_width);
        options.minimum_height = self.value(keys.size.min_height);
        options.maximum_width = self.value(keys.size.max_width);
        options.maximum_height = self.value(keys.size.max_height);
        if options.minimum_width.is_some() || options.maximum_width.is_some() {
            options.fill_width = false;
        }

        if let Some(view_port) = self.value(keys.position.view_port) {
            options.view_port = Some(view_port);
            options.view_port_aspect_ratio = self.value(keys.position.aspect_ratio);
        }

        options.v_align = self.value(keys.text.v_align);
        let rtl = self.value(keys.text.direction) == Some(TextDirection::RightToLeft);
        options.h_align = self
            .value(keys.text.h_align)
            .or(rtl.then_some(HorizontalAlignment::Right));

        let action = self.value(keys.overflow.action);
        options.overflow_action = action.unwrap_or_default();
        options.overflow_split = self.get_value_or(keys.overflow.split, OverflowSplit::Any);

        if let Some(clip) = self.try_get_thickness(&keys.clip) {
            options.clip_inset = clip;
            if action.is_none() {
                options.overflow_action = OverflowAction::Clip;
            }
        }

        if let Some(mut margins) = self.try_get_thickness(&keys.margins) {
            for side in [&mut margins.top, &mut margins.bottom] {
                if side.is_auto() {
                    *side = Unit::ZERO;
                }
            }
            if margins.left.is_auto() {
                margins.left = Unit::ZERO;
                options.auto_margin_left = true;
            }
            if margins.right.is_auto() {
                margins.right = Unit::ZERO;
                options.auto_margin_right = true;
            }
            options.margins = margins;
        }

        // Padding, columns and floats do not apply to separately drawn objects.
        if !options.x_object {
            options.padding = self.create_padding_thickness();
            options.column_count = self.value(keys.columns.count).filter(|count| *count > 0);
            options.alley_width = self.value(keys.columns.alley_width);

            if let Some(float) = self.value(keys.position.float) {
                options.float_mode = float;
                options.fill_width = false;
                if options.position_mode.is_out_of_flow() {
                    options.float_mode = FloatMode::None;
                } else if float != FloatMode::None {
                    options.display_mode = DisplayMode::Block;
                }
            }
        }

        if let Some(transform) = self.value(keys.transform.operation)
            && !transform.is_identity()
        {
            if !options.position_mode.is_out_of_flow() {
                options.position_mode = PositionMode::Absolute;
            }
            options.transform = Some(transform);
            options.transform_origin = self.value(keys.transform.origin);
        }

        options
    }

    /// Multi-column options, with defaults for anything unset.
    #[must_use]
    pub fn create_column_options(&self) -> ColumnOptions {
        let keys = &StyleKeys::get().columns;
        ColumnOptions {
            column_count: self.get_value_or(keys.count, defaults::COLUMN_COUNT),
            alley_width: self.get_value_or(keys.alley_width, defaults::ALLEY_WIDTH),
            column_widths: self.value(keys.widths).unwrap_or_default(),
            auto_flow_across_columns: self.get_value_or(keys.flow, defaults::COLUMN_AUTO_FLOW),
            break_before: self.get_value_or(keys.break_before, false),
            break_after: self.get_value_or(keys.break_after, false),
        }
    }
}
