// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Style Key: the key space and value storage of a style engine.
//!
//! Styles are sparse maps from [`StyleKey`] to prioritised [`StyleValue`]s.
//! This crate provides those pieces without the cascade itself, which lives
//! in `understory_cascade`.
//!
//! ## Core Concepts
//!
//! - **Keys** are interned per `(item, value)` name pair. An *item* key names a
//!   group of properties (`border`); a *value* key names one property in it
//!   (`colr@border`). Value keys take the `inherited` flag of their item.
//! - **Values** carry a priority and either a literal or an expression over
//!   named [`StyleVariables`].
//! - **Dictionaries** store one value per key and upsert by priority: an
//!   incoming value replaces the stored one unless the stored priority is
//!   strictly higher.
//! - **[`StyleValues`]** pairs a direct and an inherited dictionary with the
//!   declared variables, and flattens relative units through each key's
//!   [`FlattenStrategy`].
//! - **[`StyleKeys`]** is the built-in catalog of every known property.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_drawing::{FlattenContext, Size, Unit};
//! use understory_style_key::{StyleKeys, StyleValues};
//!
//! let keys = StyleKeys::get();
//! let mut values = StyleValues::new();
//! values.set(keys.size.width, Unit::percent(50.0));
//! values.set(keys.font.size, Unit::pt(10.0));
//!
//! // Width lives with the element; font size passes to descendants.
//! assert_eq!(values.direct().len(), 1);
//! assert_eq!(values.inherited().len(), 1);
//!
//! let cx = FlattenContext::new(
//!     Size::new(595.0, 842.0),
//!     Size::new(200.0, 100.0),
//!     Size::new(5.0, 10.0),
//!     12.0,
//! );
//! values.flatten(&cx);
//! assert_eq!(values.value(keys.size.width), Some(Unit::pt(100.0)));
//! ```
//!
//! ## Threading
//!
//! Keys are registered in a process-wide table behind a mutex and leaked, so
//! a [`StyleKey`] is `Copy`, `'static` and `Send + Sync`. Styles themselves are
//! single-threaded values.

mod catalog;
mod dictionary;
mod flatten;
mod key;
mod value;
mod values;
mod variables;

pub use catalog::{
    BorderKeys, BorderSideKeys, ColumnKeys, FillKeys, FontKeys, OverflowKeys, OverlayKeys,
    PageKeys, PositionKeys, SizeKeys, StrokeKeys, StyleKeys, TextKeys, ThicknessKeys,
    TransformKeys,
};
pub use dictionary::StyleValueDictionary;
pub use flatten::{
    FlattenStrategy, RectFlattener, ThicknessFlattener, TransformFlattener, UnitFlattener,
};
pub use key::{
    StyleKey, ValueKey, create_relative_style_value_key, create_style_item_key,
    create_style_value_key,
};
pub use value::{ErasedStyleValue, StyleExpression, StyleValue, StyleValueType, ValueSource};
pub use values::StyleValues;
pub use variables::{StyleVariable, StyleVariables};
