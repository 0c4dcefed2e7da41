use family_ui_graphics::Size;
use indexmap::IndexMap;

use crate::{ChildEntry, ChildId, ChildKind, FamilyError};

/// Owning store for the children of one scroll stack.
///
/// Insertion order is stacking order. Removal keeps the order of the
/// remaining children intact.
#[derive(Debug, Default)]
pub struct ChildRegistry {
    children: IndexMap<ChildId, ChildEntry>,
    next_id: ChildId,
}

impl ChildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> ChildId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn insert_plain(&mut self, content_size: Size) -> ChildId {
        let id = self.allocate();
        self.children
            .insert(id, ChildEntry::new(id, ChildKind::Plain, content_size));
        id
    }

    /// Inserts a wrapping container and returns `(container, content)` ids.
    pub fn insert_wrapping(&mut self, content_size: Size) -> (ChildId, ChildId) {
        let id = self.allocate();
        let content = self.allocate();
        self.children.insert(
            id,
            ChildEntry::new(id, ChildKind::WrappingContainer { content }, content_size),
        );
        (id, content)
    }

    pub fn remove(&mut self, id: ChildId) -> Result<ChildEntry, FamilyError> {
        let id = self.resolve(id)?;
        self.children
            .shift_remove(&id)
            .ok_or(FamilyError::UnknownChild { id })
    }

    /// Maps either a child id or a wrapped content id to the registered child.
    pub fn resolve(&self, id: ChildId) -> Result<ChildId, FamilyError> {
        if self.children.contains_key(&id) {
            return Ok(id);
        }
        self.children
            .values()
            .find(|entry| entry.identity() == id)
            .map(|entry| entry.id)
            .ok_or(FamilyError::UnknownChild { id })
    }

    pub fn get(&self, id: ChildId) -> Result<&ChildEntry, FamilyError> {
        self.children
            .get(&id)
            .ok_or(FamilyError::UnknownChild { id })
    }

    pub fn get_mut(&mut self, id: ChildId) -> Result<&mut ChildEntry, FamilyError> {
        self.children
            .get_mut(&id)
            .ok_or(FamilyError::UnknownChild { id })
    }

    pub fn with_child<R>(
        &mut self,
        id: ChildId,
        f: impl FnOnce(&mut ChildEntry) -> R,
    ) -> Result<R, FamilyError> {
        let id = self.resolve(id)?;
        Ok(f(self.get_mut(id)?))
    }

    /// Snapshot of the visible children in stacking order.
    pub fn visible(&self) -> Vec<ChildEntry> {
        self.children
            .values()
            .filter(|entry| entry.is_visible())
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChildEntry> {
        self.children.values()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
