use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;

mod reverse;
pub use reverse::reverse;

/// Returned by [`Stack::pop`] and [`Stack::peek`] when there is nothing on the stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("stack underflow: stack is empty")]
pub struct StackUnderflow;

/// A last-in-first-out container, the back of the store is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    store: VecDeque<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            store: VecDeque::new(),
        }
    }

    pub fn push(&mut self, v: T) {
        self.store.push_back(v)
    }

    pub fn pop(&mut self) -> Result<T, StackUnderflow> {
        self.store.pop_back().ok_or(StackUnderflow)
    }

    pub fn peek(&self) -> Result<&T, StackUnderflow> {
        self.store.back().ok_or(StackUnderflow)
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Snapshot of the stack from bottom to top.
    pub fn display(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.store.iter().cloned().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            store: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.store.extend(iter)
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (i, v) in self.store.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{}", v)?;
        }

        write!(f, "]")
    }
}
