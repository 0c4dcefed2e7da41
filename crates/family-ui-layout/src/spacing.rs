//! Margins and padding per child.

use std::cell::RefCell;

use ahash::RandomState;
use family_core::{ChildId, FamilyConfig};
use family_ui_graphics::EdgeInsets;
use hashbrown::HashMap;

/// Answers spacing questions about a child identity.
///
/// Padding is applied inside the child's own scroll extent, margins around
/// the child in the stack.
pub trait SpaceLookup {
    fn padding(&self, child: ChildId) -> EdgeInsets;

    fn margins(&self, child: ChildId) -> EdgeInsets;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub margins: EdgeInsets,
    pub padding: EdgeInsets,
}

impl Spacing {
    pub fn new(margins: EdgeInsets, padding: EdgeInsets) -> Self {
        Self { margins, padding }
    }
}

/// Table backed [`SpaceLookup`] with per child overrides.
#[derive(Clone, Debug, Default)]
pub struct SpacingTable {
    defaults: Spacing,
    margins: HashMap<ChildId, EdgeInsets, RandomState>,
    padding: HashMap<ChildId, EdgeInsets, RandomState>,
}

impl SpacingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FamilyConfig) -> Self {
        Self::with_defaults(Spacing::new(config.default_margins, config.default_padding))
    }

    pub fn with_defaults(defaults: Spacing) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn set_margins(&mut self, child: ChildId, margins: EdgeInsets) {
        self.margins.insert(child, margins);
    }

    pub fn set_padding(&mut self, child: ChildId, padding: EdgeInsets) {
        self.padding.insert(child, padding);
    }

    pub fn set_spacing(&mut self, child: ChildId, spacing: Spacing) {
        self.set_margins(child, spacing.margins);
        self.set_padding(child, spacing.padding);
    }

    pub fn spacing(&self, child: ChildId) -> Spacing {
        Spacing::new(self.margins(child), self.padding(child))
    }
}

impl SpaceLookup for SpacingTable {
    fn padding(&self, child: ChildId) -> EdgeInsets {
        self.padding
            .get(&child)
            .copied()
            .unwrap_or(self.defaults.padding)
    }

    fn margins(&self, child: ChildId) -> EdgeInsets {
        self.margins
            .get(&child)
            .copied()
            .unwrap_or(self.defaults.margins)
    }
}

impl<T: SpaceLookup> SpaceLookup for RefCell<T> {
    fn padding(&self, child: ChildId) -> EdgeInsets {
        self.borrow().padding(child)
    }

    fn margins(&self, child: ChildId) -> EdgeInsets {
        self.borrow().margins(child)
    }
}

#[cfg(test)]
#[path = "tests/spacing_tests.rs"]
mod tests;
