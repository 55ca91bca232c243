// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectors over styled components and their specificity.
//!
//! A [`Selector`] tests one component by element name, classes, id and
//! state, and optionally an ancestor selector that must match a parent. A
//! [`StyleMatcher`] is what a rule carries: a single selector, a list of
//! alternatives, or a catch-all.

use core::fmt;

use smallvec::{SmallVec, smallvec};

use crate::style::ComponentState;

/// The view of a document node that selectors need.
pub trait StyledComponent {
    /// The component id.
    fn id(&self) -> Option<&str>;

    /// The element (type) name, such as `div`.
    fn element_name(&self) -> Option<&str>;

    /// The whitespace separated class list.
    fn style_class(&self) -> Option<&str>;

    /// The nearest styled ancestor.
    fn parent(&self) -> Option<&dyn StyledComponent>;
}

/// Where an ancestor selector must match, relative to the component.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StylePlacement {
    /// Any ancestor.
    #[default]
    Any,
    /// The immediate parent only.
    DirectParent,
}

const ELEMENT_PRIORITY: i32 = 1;
const CLASS_PRIORITY: i32 = 2;
const DOUBLE_CLASS_PRIORITY: i32 = 3;
const TRIPLE_CLASS_PRIORITY: i32 = 4;
const ID_PRIORITY: i32 = 5;

const ANCESTOR_FACTORS: [i32; 8] = [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];
const DIRECT_ANCESTOR_FACTORS: [i32; 8] = [
    2, 20, 200, 2_000, 20_000, 200_000, 2_000_000, 20_000_000,
];

/// A compound selector with an optional ancestor chain.
///
/// # Example
///
/// ```rust
/// use understory_cascade::{Selector, StylePlacement};
///
/// // `div .red`
/// let sel = Selector::class("red")
///     .with_ancestor(Selector::element("div"), StylePlacement::Any);
/// assert_eq!(sel.priority(), 21);
/// assert_eq!(sel.to_string(), "div .red");
///
/// // `div > .red`
/// let direct = Selector::class("red")
///     .with_ancestor(Selector::element("div"), StylePlacement::DirectParent);
/// assert_eq!(direct.priority(), 41);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    /// Required element name.
    pub element: Option<String>,
    /// Required classes; each must appear in the component's class list.
    pub classes: SmallVec<[String; 2]>,
    /// Required id.
    pub id: Option<String>,
    /// Required state; [`ComponentState::Normal`] matches any state.
    pub state: ComponentState,
    /// Selector an ancestor must match.
    pub ancestor: Option<Box<Self>>,
    /// Where this selector must match when it is used as an ancestor.
    pub placement: StylePlacement,
}

impl Selector {
    /// Matches components with element name `element`.
    #[must_use]
    pub fn element(element: impl Into<String>) -> Self {
        Self {
            element: Some(element.into()),
            ..Self::default()
        }
    }

    /// Matches components with class `class`.
    #[must_use]
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            classes: smallvec![class.into()],
            ..Self::default()
        }
    }

    /// Matches the component with id `id`.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Also requires class `class`.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Also requires id `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Only applies in `state`.
    #[must_use]
    pub fn with_state(mut self, state: ComponentState) -> Self {
        self.state = state;
        self
    }

    /// Requires an ancestor matching `ancestor`, found according to `placement`.
    #[must_use]
    pub fn with_ancestor(mut self, mut ancestor: Self, placement: StylePlacement) -> Self {
        ancestor.placement = placement;
        self.ancestor = Some(Box::new(ancestor));
        self
    }

    /// The specificity of this selector, including its ancestors.
    ///
    /// Ids count 5, one class 2, two classes 3, three or more 4, and an
    /// element 1. Each step down the ancestor chain multiplies the component
    /// part by ten, or by twenty when the ancestor is a direct parent, up to
    /// a depth of seven.
    #[must_use]
    pub fn priority(&self) -> i32 {
        let mut depth = 0;
        self.priority_at(&mut depth)
    }

    fn own_priority(&self) -> i32 {
        let mut mine = 0;
        if self.element.is_some() {
            mine += ELEMENT_PRIORITY;
        }
        mine += match self.classes.len() {
            0 => 0,
            1 => CLASS_PRIORITY,
            2 => DOUBLE_CLASS_PRIORITY,
            _ => TRIPLE_CLASS_PRIORITY,
        };
        if self.id.is_some() {
            mine += ID_PRIORITY;
        }
        mine
    }

    fn priority_at(&self, depth: &mut usize) -> i32 {
        let mut total = 0;
        if let Some(ancestor) = &self.ancestor {
            total = ancestor.priority_at(depth);
            *depth += 1;
        }
        *depth = (*depth).min(ANCESTOR_FACTORS.len() - 1);

        let mine = self.own_priority();
        if *depth == 0 {
            return mine;
        }
        let direct = self
            .ancestor
            .as_ref()
            .is_some_and(|a| a.placement == StylePlacement::DirectParent);
        let factor = if direct {
            DIRECT_ANCESTOR_FACTORS[*depth]
        } else {
            ANCESTOR_FACTORS[*depth]
        };
        total.saturating_add(mine.saturating_mul(factor))
    }

    /// Tests `component` in `state`, returning this selector's priority on a match.
    #[must_use]
    pub fn matches(&self, component: &dyn StyledComponent, state: ComponentState) -> Option<i32> {
        if self.state != ComponentState::Normal && self.state != state {
            return None;
        }
        if let Some(id) = &self.id
            && component.id() != Some(id.as_str())
        {
            return None;
        }
        if let Some(element) = &self.element
            && component.element_name() != Some(element.as_str())
        {
            return None;
        }
        if !self.classes.is_empty() {
            let list = component.style_class().filter(|list| !list.is_empty())?;
            if !self.classes.iter().all(|c| is_class_name_match(c, list)) {
                return None;
            }
        }
        if let Some(ancestor) = &self.ancestor
            && !ancestor.matches_ancestor_of(component, state)
        {
            return None;
        }
        Some(self.priority())
    }

    fn matches_ancestor_of(&self, component: &dyn StyledComponent, state: ComponentState) -> bool {
        match self.placement {
            StylePlacement::DirectParent => component
                .parent()
                .is_some_and(|parent| self.matches(parent, ComponentState::Normal).is_some()),
            StylePlacement::Any => {
                let mut next = component.parent();
                while let Some(parent) = next {
                    if self.matches(parent, state).is_some() {
                        return true;
                    }
                    next = parent.parent();
                }
                false
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ancestor) = &self.ancestor {
            write!(f, "{ancestor} ")?;
        }
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        match self.state {
            ComponentState::Over => f.write_str(":hover")?,
            ComponentState::Before => f.write_str("::before")?,
            ComponentState::After => f.write_str("::after")?,
            ComponentState::Normal | ComponentState::Down | ComponentState::Disabled => {}
        }
        if self.placement == StylePlacement::DirectParent {
            f.write_str(" >")?;
        }
        Ok(())
    }
}

/// Decides which components a rule applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleMatcher {
    /// Every component, at priority zero.
    CatchAll,
    /// One selector.
    Selector(Selector),
    /// Any of several selectors; the highest matching priority is used.
    Multiple(Vec<Selector>),
}

impl StyleMatcher {
    /// Tests `component` in `state`, returning the priority to merge at.
    #[must_use]
    pub fn matches(&self, component: &dyn StyledComponent, state: ComponentState) -> Option<i32> {
        match self {
            Self::CatchAll => Some(0),
            Self::Selector(selector) => selector.matches(component, state),
            Self::Multiple(selectors) => selectors
                .iter()
                .filter_map(|s| s.matches(component, state))
                .max(),
        }
    }
}

impl From<Selector> for StyleMatcher {
    fn from(selector: Selector) -> Self {
        Self::Selector(selector)
    }
}

impl fmt::Display for StyleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatchAll => f.write_str("*"),
            Self::Selector(selector) => selector.fmt(f),
            Self::Multiple(selectors) => {
                for (i, selector) in selectors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    selector.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Returns `true` if `class` is one of the whitespace separated tokens in `list`.
///
/// Matching is case sensitive and exact; a token that merely contains
/// `class` does not match.
///
/// ```rust
/// use understory_cascade::is_class_name_match;
///
/// assert!(is_class_name_match("btn", "nav btn foo"));
/// assert!(!is_class_name_match("btn", "btn-primary"));
/// ```
#[must_use]
pub fn is_class_name_match(class: &str, list: &str) -> bool {
    if class.is_empty() || list.is_empty() {
        return false;
    }
    if !list.contains(char::is_whitespace) {
        return class == list;
    }
    list.match_indices(class).any(|(start, _)| {
        let end = start + class.len();
        let before = list[..start].chars().next_back();
        let after = list[end..].chars().next();
        before.is_none_or(char::is_whitespace) && after.is_none_or(char::is_whitespace)
    })
}
