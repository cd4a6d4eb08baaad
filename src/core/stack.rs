//! Last-in-first-out container

use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};

/// A LIFO stack.
///
/// Only the most recently pushed element is reachable. `pop` and `peek` on an
/// empty stack return [`StorefrontError::Stack`] instead of a default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an item on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| StorefrontError::empty_stack("pop"))
    }

    /// Borrow the top item without removing it
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| StorefrontError::empty_stack("peek"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from the bottom of the stack to the top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
