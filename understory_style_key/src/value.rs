// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prioritised style values and their type-erased storage.

use std::any::{Any, TypeId};
use std::fmt;

use crate::key::{StyleKey, ValueKey};
use crate::variables::StyleVariables;

/// Types that can be stored as style values.
pub trait StyleValueType: Clone + fmt::Debug + 'static {}

impl<T: Clone + fmt::Debug + 'static> StyleValueType for T {}

/// A value bound to a variable, with a fallback.
#[derive(Clone)]
pub struct StyleExpression<T> {
    variable: String,
    fallback: T,
    convert: fn(&str) -> Option<T>,
}

impl<T: StyleValueType> StyleExpression<T> {
    /// Binds to `variable`, converting its text with `convert`.
    ///
    /// `fallback` is used when the variable is missing or does not convert.
    #[must_use]
    pub fn new(variable: impl Into<String>, fallback: T, convert: fn(&str) -> Option<T>) -> Self {
        Self {
            variable: variable.into(),
            fallback,
            convert,
        }
    }

    /// The variable name.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The fallback value.
    #[must_use]
    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Resolves against `variables`.
    #[must_use]
    pub fn evaluate(&self, variables: &StyleVariables) -> T {
        variables
            .get(&self.variable)
            .and_then(self.convert)
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for StyleExpression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleExpression")
            .field("variable", &self.variable)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Where a style value comes from.
#[derive(Clone, Debug)]
pub enum ValueSource<T> {
    /// A fixed value.
    Literal(T),
    /// A value computed from style variables.
    Expression(StyleExpression<T>),
}

/// A typed value held in a style, with the priority it was set at.
///
/// # Example
///
/// ```rust
/// use understory_style_key::{
///     StyleValue, StyleVariables, create_style_item_key, create_style_value_key,
/// };
///
/// let item = create_style_item_key("doc-value", false);
/// let key = create_style_value_key::<i32>("count", item);
///
/// let value = StyleValue::new(key, 3).with_priority(10);
/// assert_eq!(value.value(&StyleVariables::new()), 3);
///
/// let lower = value.clone_with_priority(2);
/// assert_eq!(lower.priority(), 2);
/// assert_eq!(value.priority(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct StyleValue<T> {
    key: ValueKey<T>,
    priority: i32,
    source: ValueSource<T>,
}

impl<T: StyleValueType> StyleValue<T> {
    /// A literal value at priority zero.
    #[must_use]
    pub fn new(key: ValueKey<T>, value: T) -> Self {
        Self {
            key,
            priority: 0,
            source: ValueSource::Literal(value),
        }
    }

    /// An expression value at priority zero.
    #[must_use]
    pub fn expression(key: ValueKey<T>, expression: StyleExpression<T>) -> Self {
        Self {
            key,
            priority: 0,
            source: ValueSource::Expression(expression),
        }
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// The key.
    #[must_use]
    pub fn key(&self) -> ValueKey<T> {
        self.key
    }

    /// The priority this value was set at.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The value source.
    #[must_use]
    pub fn source(&self) -> &ValueSource<T> {
        &self.source
    }

    /// The literal value, if this is not an expression.
    #[must_use]
    pub fn literal(&self) -> Option<&T> {
        match &self.source {
            ValueSource::Literal(value) => Some(value),
            ValueSource::Expression(_) => None,
        }
    }

    /// Resolves the value, evaluating expressions against `variables`.
    #[must_use]
    pub fn value(&self, variables: &StyleVariables) -> T {
        match &self.source {
            ValueSource::Literal(value) => value.clone(),
            ValueSource::Expression(expression) => expression.evaluate(variables),
        }
    }

    /// Replaces the value with a literal, keeping the priority.
    pub fn set_value(&mut self, value: T) {
        self.source = ValueSource::Literal(value);
    }

    /// A copy of this value at `priority`.
    #[must_use]
    pub fn clone_with_priority(&self, priority: i32) -> Self {
        Self {
            priority,
            ..self.clone()
        }
    }
}

/// A type-erased [`StyleValue`].
///
/// Style dictionaries hold values of many types under one key space; this
/// keeps the priority and key visible without knowing the value type.
pub struct ErasedStyleValue {
    inner: Box<dyn ErasedStyleValueTrait>,
    type_id: TypeId,
}

impl ErasedStyleValue {
    /// Erases a typed value.
    #[must_use]
    pub fn new<T: StyleValueType>(value: StyleValue<T>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// The key this value is stored under.
    #[must_use]
    pub fn key(&self) -> StyleKey {
        self.inner.key()
    }

    /// The priority this value was set at.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.inner.priority()
    }

    /// Returns `true` if the value type is `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Downcasts to the typed value.
    #[must_use]
    pub fn downcast_ref<T: StyleValueType>(&self) -> Option<&StyleValue<T>> {
        if self.is::<T>() {
            self.inner.as_any().downcast_ref()
        } else {
            None
        }
    }

    /// Downcasts to the typed value, mutably.
    #[must_use]
    pub fn downcast_mut<T: StyleValueType>(&mut self) -> Option<&mut StyleValue<T>> {
        if self.is::<T>() {
            self.inner.as_any_mut().downcast_mut()
        } else {
            None
        }
    }

    /// A copy of this value at `priority`.
    #[must_use]
    pub fn clone_with_priority(&self, priority: i32) -> Self {
        Self {
            inner: self.inner.clone_with_priority(priority),
            type_id: self.type_id,
        }
    }
}

impl Clone for ErasedStyleValue {
    fn clone(&self) -> Self {
        self.clone_with_priority(self.priority())
    }
}

impl fmt::Debug for ErasedStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_value(f)
    }
}

impl<T: StyleValueType> From<StyleValue<T>> for ErasedStyleValue {
    fn from(value: StyleValue<T>) -> Self {
        Self::new(value)
    }
}

trait ErasedStyleValueTrait: Any {
    fn key(&self) -> StyleKey;
    fn priority(&self) -> i32;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clone_with_priority(&self, priority: i32) -> Box<dyn ErasedStyleValueTrait>;
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: StyleValueType> ErasedStyleValueTrait for StyleValue<T> {
    fn key(&self) -> StyleKey {
        self.key.key()
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_with_priority(&self, priority: i32) -> Box<dyn ErasedStyleValueTrait> {
        Box::new(Self::clone_with_priority(self, priority))
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
