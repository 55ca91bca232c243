// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Cascade: cascading styles for paged document layout.
//!
//! Rules are matched against document components by selector, merged into a
//! per-component [`Style`] by priority, and the resolved values are turned
//! into the records a layout and drawing engine consumes.
//!
//! ## Core Concepts
//!
//! - **[`Style`]** is a sparse record of prioritised values over the
//!   `understory_style_key` catalog. Merging copies values into a target,
//!   where a value only replaces one of equal or lower priority.
//! - **[`Selector`]** and **[`StyleMatcher`]** test a [`StyledComponent`] by
//!   element name, class, id, state and ancestors. A match yields the
//!   selector's specificity, which becomes the priority of the merged values.
//! - **[`StyleDefn`]** is a rule: a style plus the matcher that decides
//!   where it applies.
//! - **Inheritance** with [`Style::merge_inherited`] copies only the
//!   inheritable values of a parent, and never over values already set.
//! - **Derivation** methods such as [`Style::create_border_pens`],
//!   [`Style::create_background_brush`] and
//!   [`Style::create_position_options`] build drawing records from the
//!   resolved values, filling gaps from [`defaults`].
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_cascade::{ComponentState, Style, StyleDefn, StyledComponent};
//! use understory_drawing::{Brush, Color, SolidBrush};
//!
//! struct Span {
//!     class: &'static str,
//! }
//!
//! impl StyledComponent for Span {
//!     fn id(&self) -> Option<&str> { None }
//!     fn element_name(&self) -> Option<&str> { Some("span") }
//!     fn style_class(&self) -> Option<&str> { Some(self.class) }
//!     fn parent(&self) -> Option<&dyn StyledComponent> { None }
//! }
//!
//! // `.red { fill: red }`
//! let mut rule = StyleDefn::new();
//! rule.set_applied_class("red");
//! rule.style_mut().fill_mut().set(|k| k.color, Color::from_rgb8(255, 0, 0));
//!
//! let mut applied = Style::new();
//! let red_bold = Span { class: "red bold" };
//! assert!(rule.merge_into_for(&mut applied, &red_bold, ComponentState::Normal));
//! assert_eq!(
//!     applied.create_fill_brush(),
//!     Some(Brush::Solid(SolidBrush::new(Color::from_rgb8(255, 0, 0))))
//! );
//!
//! let mut untouched = Style::new();
//! let bolder = Span { class: "bolder" };
//! assert!(!rule.merge_into_for(&mut untouched, &bolder, ComponentState::Normal));
//! assert!(untouched.is_empty());
//! ```
//!
//! ## Threading
//!
//! Styles and rules are single-threaded values. A [`StyleDefn`] caches its
//! matcher on first use and is not `Sync`.

mod brushes;
mod defn;
mod error;
mod layout;
mod page;
mod pens;
mod pool;
mod selector;
mod style;
mod text;
mod views;

pub mod defaults;

pub use defn::StyleDefn;
pub use error::StyleError;
pub use pool::{OrphanedItem, StylePool};
pub use selector::{Selector, StyleMatcher, StylePlacement, StyledComponent, is_class_name_match};
pub use style::{ComponentState, DIRECT_STYLE_PRIORITY, Style};
pub use views::{ItemView, ItemViewMut, StyleItem};
