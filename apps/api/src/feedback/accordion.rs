#![allow(dead_code)]

//! Accordion selection state for the category sections.
//!
//! Holding `Option<Category>` makes "at most one section open" structural
//! rather than a convention spread over four booleans. The state lives for
//! one presentation session and is never persisted.

use crate::feedback::models::Category;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<Category>,
}

impl AccordionState {
    /// Fresh state with every section collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses `key` if it is the open section, otherwise opens it,
    /// closing whichever section was open before.
    pub fn toggle(&mut self, key: Category) {
        self.open = if self.open == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    pub fn open(&self) -> Option<Category> {
        self.open
    }

    pub fn is_open(&self, key: Category) -> bool {
        self.open == Some(key)
    }
}
