//! Per child geometry from the last full stack pass.

use family_core::ChildId;
use family_ui_graphics::{Point, Size};
use indexmap::IndexMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheState {
    /// No valid data; the next layout must run the stack pass.
    #[default]
    Empty,
    /// A stack pass is in progress. Layout requests are dropped.
    Running,
    /// Valid for the synchronization pass.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CacheEntry {
    /// Stacked position of the child before its padding is applied.
    pub origin: Point,
    /// Raw content size, not the clamped visible height.
    pub content_size: Size,
}

impl CacheEntry {
    pub fn new(origin: Point, content_size: Size) -> Self {
        Self {
            origin,
            content_size,
        }
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.content_size.height
    }
}

/// Geometry cache rebuilt wholesale by every stack pass.
#[derive(Clone, Debug, Default)]
pub struct GeometryCache {
    state: CacheState,
    entries: IndexMap<ChildId, CacheEntry>,
    content_size: Size,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CacheState::Running
    }

    /// Drops all entries and the aggregate content size.
    pub fn invalidate(&mut self) {
        self.state = CacheState::Empty;
        self.entries.clear();
        self.content_size = Size::ZERO;
    }

    /// Moves an empty cache into the running state.
    pub fn begin(&mut self) -> bool {
        if self.state != CacheState::Empty {
            return false;
        }
        self.state = CacheState::Running;
        true
    }

    /// Records the entry for `child`. Only accepted while running.
    pub fn add(&mut self, child: ChildId, entry: CacheEntry) -> bool {
        if self.state != CacheState::Running {
            log::debug!("ignoring cache entry for child {child}: cache is {:?}", self.state);
            return false;
        }
        self.entries.insert(child, entry);
        true
    }

    /// Completes a running pass. Returns false if the cache was invalidated
    /// while the pass was in progress.
    pub fn finish(&mut self, content_size: Size) -> bool {
        if self.state != CacheState::Running {
            return false;
        }
        self.content_size = content_size;
        self.state = CacheState::Finished;
        true
    }

    pub fn entry(&self, child: ChildId) -> Option<&CacheEntry> {
        self.entries.get(&child)
    }

    /// Entries in stacking order.
    pub fn entries(&self) -> impl Iterator<Item = (ChildId, &CacheEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
