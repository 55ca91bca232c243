// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named style variables.

use smallvec::SmallVec;

/// A named string variable declared on a style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleVariable {
    /// Variable name.
    pub name: String,
    /// Unparsed value.
    pub value: String,
}

/// The variables declared on a style, in declaration order.
///
/// Names are unique; adding an existing name replaces its value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleVariables {
    entries: SmallVec<[StyleVariable; 2]>,
}

impl StyleVariables {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variable.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|v| v.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(StyleVariable { name, value }),
        }
    }

    /// The value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    /// Removes `name`, returning `true` if it was declared.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|v| v.name != name);
        self.entries.len() != before
    }

    /// Copies every variable of `other` into this set, replacing duplicates.
    pub fn merge_from(&mut self, other: &Self) {
        for var in &other.entries {
            self.add(var.name.clone(), var.value.clone());
        }
    }

    /// Iterates in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleVariable> + '_ {
        self.entries.iter()
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variables are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every variable.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
