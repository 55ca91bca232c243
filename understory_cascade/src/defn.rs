// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style rules: a style plus the matcher that decides where it applies.

use core::cell::OnceCell;

use crate::selector::{Selector, StyleMatcher, StyledComponent};
use crate::style::{ComponentState, Style};

/// A style rule.
///
/// The matcher is either given explicitly with [`StyleDefn::set_matcher`] or
/// built on first use from the applied id, class, element and state. Changing
/// an applied field rebuilds a built matcher; an explicit one is kept.
///
/// # Example
///
/// ```rust
/// use understory_cascade::StyleDefn;
///
/// let mut defn = StyleDefn::new();
/// defn.set_applied_class("red");
/// defn.set_applied_element("div");
/// assert_eq!(defn.matcher().to_string(), "div.red");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleDefn {
    style: Style,
    applied_id: String,
    applied_class: String,
    applied_element: String,
    applied_state: ComponentState,
    matcher: OnceCell<StyleMatcher>,
    explicit: bool,
}

impl StyleDefn {
    /// An empty rule that matches every component.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule applying `style` wherever `matcher` matches.
    #[must_use]
    pub fn with_matcher(style: Style, matcher: impl Into<StyleMatcher>) -> Self {
        let mut defn = Self {
            style,
            ..Self::default()
        };
        defn.set_matcher(matcher);
        defn
    }

    /// The values this rule applies.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The values this rule applies, mutably.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// The id a component must have; empty for any.
    #[must_use]
    pub fn applied_id(&self) -> &str {
        &self.applied_id
    }

    /// Sets the id a component must have.
    pub fn set_applied_id(&mut self, id: impl Into<String>) {
        self.applied_id = id.into();
        self.invalidate();
    }

    /// The class a component must have; empty for any.
    #[must_use]
    pub fn applied_class(&self) -> &str {
        &self.applied_class
    }

    /// Sets the class a component must have.
    pub fn set_applied_class(&mut self, class: impl Into<String>) {
        self.applied_class = class.into();
        self.invalidate();
    }

    /// The element name a component must have; empty for any.
    #[must_use]
    pub fn applied_element(&self) -> &str {
        &self.applied_element
    }

    /// Sets the element name a component must have.
    pub fn set_applied_element(&mut self, element: impl Into<String>) {
        self.applied_element = element.into();
        self.invalidate();
    }

    /// The state this rule applies in.
    #[must_use]
    pub fn applied_state(&self) -> ComponentState {
        self.applied_state
    }

    /// Sets the state this rule applies in.
    pub fn set_applied_state(&mut self, state: ComponentState) {
        self.applied_state = state;
        self.invalidate();
    }

    /// Replaces the matcher. Applied fields no longer affect matching.
    pub fn set_matcher(&mut self, matcher: impl Into<StyleMatcher>) {
        self.matcher = OnceCell::from(matcher.into());
        self.explicit = true;
    }

    /// The matcher in use, building it from the applied fields if needed.
    pub fn matcher(&self) -> &StyleMatcher {
        self.matcher.get_or_init(|| {
            let matcher = self.build_matcher();
            log::trace!("built style matcher `{matcher}`");
            matcher
        })
    }

    /// Tests `component` in `state`, returning the priority to merge at.
    #[must_use]
    pub fn is_matched_to(
        &self,
        component: &dyn StyledComponent,
        state: ComponentState,
    ) -> Option<i32> {
        self.matcher().matches(component, state)
    }

    /// Merges this rule into `target` if it matches `component` in `state`.
    ///
    /// Variables are merged before values, so expressions in the rule resolve
    /// against them. Returns `true` if the rule applied.
    ///
    /// # Panics
    ///
    /// Panics if `target` is immutable and the rule matches.
    #[track_caller]
    pub fn merge_into_for(
        &self,
        target: &mut Style,
        component: &dyn StyledComponent,
        state: ComponentState,
    ) -> bool {
        let Some(priority) = self.is_matched_to(component, state) else {
            return false;
        };
        target.begin_style_change();
        target
            .values_mut()
            .variables_mut()
            .merge_from(self.style.variables());
        self.style.merge_into_at(target, priority);
        true
    }

    fn invalidate(&mut self) {
        if !self.explicit {
            self.matcher.take();
        }
    }

    fn build_matcher(&self) -> StyleMatcher {
        if self.applied_id.is_empty()
            && self.applied_class.is_empty()
            && self.applied_element.is_empty()
        {
            return StyleMatcher::CatchAll;
        }
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_owned());
        StyleMatcher::Selector(Selector {
            element: non_empty(&self.applied_element),
            classes: non_empty(&self.applied_class).into_iter().collect(),
            id: non_empty(&self.applied_id),
            state: self.applied_state,
            ..Selector::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_drawing::Color;
    use understory_style_key::{StyleExpression, StyleKeys, StyleValue};

    struct Leaf(&'static str, &'static str);

    impl StyledComponent for Leaf {
        fn id(&self) -> Option<&str> {
            None
        }

        fn element_name(&self) -> Option<&str> {
            Some(self.0)
        }

        fn style_class(&self) -> Option<&str> {
            Some(self.1)
        }

        fn parent(&self) -> Option<&dyn StyledComponent> {
            None
        }
    }

    fn normal(defn: &StyleDefn, leaf: &Leaf) -> Option<i32> {
        defn.is_matched_to(leaf, ComponentState::Normal)
    }

    #[test]
    fn applied_fields_build_matcher() {
        let mut defn = StyleDefn::new();
        assert_eq!(*defn.matcher(), StyleMatcher::CatchAll);

        defn.set_applied_class("red");
        assert_eq!(defn.matcher().to_string(), ".red");
        assert_eq!(normal(&defn, &Leaf("div", "red bold")), Some(2));

        defn.set_applied_element("div");
        assert_eq!(defn.matcher().to_string(), "div.red");
        assert_eq!(normal(&defn, &Leaf("div", "red")), Some(3));
        assert_eq!(normal(&defn, &Leaf("span", "red")), None);
    }

    #[test]
    fn state_only_is_catch_all() {
        let mut defn = StyleDefn::new();
        defn.set_applied_state(ComponentState::Over);
        assert_eq!(*defn.matcher(), StyleMatcher::CatchAll);
    }

    #[test]
    fn explicit_matcher_survives_applied_changes() {
        let mut defn = StyleDefn::with_matcher(Style::new(), Selector::id("main"));
        defn.set_applied_class("red");
        assert_eq!(defn.matcher().to_string(), "#main");
    }

    #[test]
    fn merge_applies_variables_then_values() {
        let k = StyleKeys::get();
        let mut defn = StyleDefn::new();
        defn.set_applied_class("red");
        defn.style_mut().add_variable("cols", "4");
        defn.style_mut().add_value(StyleValue::expression(
            k.columns.count,
            StyleExpression::new("cols", 1, |s| s.parse().ok()),
        ));
        defn.style_mut()
            .set_value(k.fill.color, Color::from_rgb8(0xFF, 0, 0));

        let mut target = Style::new();
        assert!(defn.merge_into_for(&mut target, &Leaf("div", "red"), ComponentState::Normal));
        assert_eq!(target.value(k.columns.count), Some(4));
        assert_eq!(target.get(k.fill.color).map(StyleValue::priority), Some(2));

        let mut untouched = Style::new();
        assert!(!defn.merge_into_for(&mut untouched, &Leaf("div", "blue"), ComponentState::Normal));
        assert!(untouched.is_empty());
        assert!(untouched.variables().is_empty());
    }
}
