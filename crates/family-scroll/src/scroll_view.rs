//! The engine handle tying registry, cache and both passes together.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use family_core::{
    ChildEntry, ChildId, ChildRegistry, FamilyConfig, FamilyError, LayoutRequestQueue,
    LayoutScheduler, NoopScheduler,
};
use family_ui_graphics::{Point, Rect, Size};
use family_ui_layout::{SpaceLookup, Spacing};

use crate::background::{BackgroundDecorations, NoBackgrounds};
use crate::cache::{CacheEntry, CacheState, GeometryCache};
use crate::events::{ChildChange, ChildEvent, ChildObserver};
use crate::metrics::ScrollMetrics;
use crate::stack::place_child;
use crate::sync::sync_child;

/// Counters describing the work done by the engine so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub stack_passes: u64,
    pub sync_passes: u64,
    /// Layout calls dropped because a pass was already running.
    pub reentrant_skips: u64,
}

/// Ids handed out for a wrapping container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrappedChild {
    pub container: ChildId,
    /// Identity used for spacing, cache and background lookups.
    pub content: ChildId,
}

struct ScrollViewInner {
    config: FamilyConfig,
    children: RefCell<ChildRegistry>,
    cache: RefCell<GeometryCache>,
    spaces: Rc<dyn SpaceLookup>,
    backgrounds: Rc<dyn BackgroundDecorations>,
    requests: LayoutRequestQueue,
    observers: RefCell<Vec<ChildObserver>>,
    content_offset: Cell<Point>,
    viewport: Cell<Size>,
    content_size: Cell<Size>,
    live_resize: Cell<bool>,
    stacking: Cell<bool>,
    synchronizing: Cell<bool>,
    stats: Cell<LayoutStats>,
}

/// Composite scroll surface stacking nested scroll views.
///
/// Cloning yields another handle to the same engine. All methods take
/// `&self` so that observers fired while a pass commits frames can call
/// back in; such calls are dropped until the pass completes.
#[derive(Clone)]
pub struct FamilyScrollView {
    inner: Rc<ScrollViewInner>,
}

/// Non-owning handle, for collaborators that must not keep the engine alive.
#[derive(Clone)]
pub struct WeakFamilyScrollView(Weak<ScrollViewInner>);

impl WeakFamilyScrollView {
    pub fn upgrade(&self) -> Option<FamilyScrollView> {
        self.0.upgrade().map(|inner| FamilyScrollView { inner })
    }
}

impl FamilyScrollView {
    pub fn new(config: FamilyConfig, spaces: Rc<dyn SpaceLookup>) -> Self {
        Self::with_collaborators(
            config,
            spaces,
            Rc::new(NoBackgrounds),
            Rc::new(NoopScheduler),
        )
    }

    pub fn with_collaborators(
        config: FamilyConfig,
        spaces: Rc<dyn SpaceLookup>,
        backgrounds: Rc<dyn BackgroundDecorations>,
        scheduler: Rc<dyn LayoutScheduler>,
    ) -> Self {
        Self {
            inner: Rc::new(ScrollViewInner {
                config,
                children: RefCell::new(ChildRegistry::new()),
                cache: RefCell::new(GeometryCache::new()),
                spaces,
                backgrounds,
                requests: LayoutRequestQueue::new(scheduler),
                observers: RefCell::new(Vec::new()),
                content_offset: Cell::new(Point::ZERO),
                viewport: Cell::new(Size::ZERO),
                content_size: Cell::new(Size::ZERO),
                live_resize: Cell::new(false),
                stacking: Cell::new(false),
                synchronizing: Cell::new(false),
                stats: Cell::new(LayoutStats::default()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakFamilyScrollView {
        WeakFamilyScrollView(Rc::downgrade(&self.inner))
    }

    pub fn config(&self) -> FamilyConfig {
        self.inner.config
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    pub fn insert_plain(&self, content_size: Size) -> ChildId {
        let id = self.inner.children.borrow_mut().insert_plain(content_size);
        self.invalidate_cache();
        id
    }

    pub fn insert_wrapping(&self, content_size: Size) -> WrappedChild {
        let (container, content) = self.inner.children.borrow_mut().insert_wrapping(content_size);
        self.invalidate_cache();
        WrappedChild { container, content }
    }

    pub fn remove_child(&self, child: ChildId) -> Result<ChildEntry, FamilyError> {
        let removed = self.inner.children.borrow_mut().remove(child)?;
        self.inner.backgrounds.set_hidden(removed.identity(), true);
        self.invalidate_cache();
        Ok(removed)
    }

    pub fn child(&self, child: ChildId) -> Result<ChildEntry, FamilyError> {
        let children = self.inner.children.borrow();
        let id = children.resolve(child)?;
        children.get(id).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.inner.children.borrow().len()
    }

    /// Current frame of every child in stacking order, hidden ones included.
    pub fn frames(&self) -> Vec<(ChildId, Rect)> {
        self.inner
            .children
            .borrow()
            .iter()
            .map(|entry| (entry.id, entry.frame))
            .collect()
    }

    /// Registers an observer for committed frame and offset changes.
    pub fn add_observer(&self, observer: impl Fn(&ChildChange) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    // ------------------------------------------------------------------
    // Outer scroll surface
    // ------------------------------------------------------------------

    pub fn viewport(&self) -> Size {
        self.inner.viewport.get()
    }

    /// Resizes the visible bounds. A size change invalidates the cache.
    pub fn set_viewport(&self, viewport: Size) {
        if self.inner.viewport.replace(viewport) != viewport {
            self.invalidate_cache();
        }
        self.run_layout();
    }

    pub fn content_offset(&self) -> f32 {
        self.inner.content_offset.get().y
    }

    /// Moves the outer scroll position and synchronizes the children.
    pub fn set_content_offset(&self, offset: f32) {
        let current = self.inner.content_offset.get();
        self.inner.content_offset.set(Point::new(current.x, offset));
        self.run_layout();
    }

    /// Scrolls by `delta` (positive moves further down the content), clamped
    /// to the scrollable range.
    pub fn scroll_by(&self, delta: f32) {
        let max = (self.current_content_size().height - self.viewport().height).max(0.0);
        let offset = (self.content_offset() + delta).clamp(0.0, max);
        self.set_content_offset(offset);
    }

    /// Aggregate extent of the virtual scroll surface from the last stack pass.
    pub fn current_content_size(&self) -> Size {
        self.inner.content_size.get()
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::from_content_offset(self.inner.content_offset.get(), self.viewport())
    }

    /// While live resizing, child driven layout requests are dropped. Ending
    /// the resize lays everything out again.
    pub fn set_live_resize(&self, resizing: bool) {
        let was_resizing = self.inner.live_resize.replace(resizing);
        if was_resizing && !resizing {
            self.invalidate_cache();
            self.run_layout();
        }
    }

    pub fn is_live_resizing(&self) -> bool {
        self.inner.live_resize.get()
    }

    // ------------------------------------------------------------------
    // Cache
    // ------------------------------------------------------------------

    pub fn invalidate_cache(&self) {
        log::debug!("invalidating geometry cache");
        self.inner.cache.borrow_mut().invalidate();
    }

    pub fn cache_state(&self) -> CacheState {
        self.inner.cache.borrow().state()
    }

    pub fn cache_entry(&self, identity: ChildId) -> Option<CacheEntry> {
        self.inner.cache.borrow().entry(identity).copied()
    }

    /// Cache entries in stacking order, keyed by child identity.
    pub fn cache_entries(&self) -> Vec<(ChildId, CacheEntry)> {
        self.inner
            .cache
            .borrow()
            .entries()
            .map(|(id, entry)| (id, *entry))
            .collect()
    }

    pub fn stats(&self) -> LayoutStats {
        self.inner.stats.get()
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Runs the stack pass if the cache is empty, then synchronizes every
    /// child with the current scroll position. Safe to call repeatedly.
    pub fn run_layout(&self) {
        if self.inner.stacking.get()
            || self.inner.synchronizing.get()
            || self.inner.cache.borrow().is_running()
        {
            log::trace!("layout already running; dropping request");
            self.update_stats(|stats| stats.reentrant_skips += 1);
            return;
        }
        if self.cache_state() == CacheState::Empty {
            self.layout_stack();
        }
        if self.cache_state() == CacheState::Finished {
            self.synchronize();
        }
    }

    /// Queues a layout for the next host tick, or runs it right away when
    /// coalescing is disabled.
    pub fn request_layout(&self) {
        if self.inner.config.coalesce_layout_requests {
            self.inner.requests.request();
        } else {
            self.run_layout();
        }
    }

    pub fn has_pending_layout(&self) -> bool {
        self.inner.requests.is_pending()
    }

    pub fn coalesced_requests(&self) -> u64 {
        self.inner.requests.coalesced_count()
    }

    /// Runs the pending layout request, if any. Returns whether a layout ran.
    pub fn drain_pending_layout(&self) -> bool {
        if !self.inner.requests.take() {
            return false;
        }
        self.run_layout();
        true
    }

    fn layout_stack(&self) {
        let visible = self.inner.children.borrow().visible();
        let metrics = self.metrics();
        if !self.inner.cache.borrow_mut().begin() {
            return;
        }
        // Held for the whole pass: an observer may reset the cache to Empty.
        self.inner.stacking.set(true);
        log::trace!(
            "stack pass over {} children at offset {}",
            visible.len(),
            metrics.offset
        );

        let mut cursor = 0.0;
        for child in &visible {
            let identity = child.identity();
            let spacing = Spacing::new(
                self.inner.spaces.margins(identity),
                self.inner.spaces.padding(identity),
            );
            let placement = place_child(child, spacing, cursor, metrics);

            self.commit_frame(child.id, placement.frame);
            self.inner.cache.borrow_mut().add(identity, placement.entry);

            match placement.background {
                Some(frame) => {
                    self.inner.backgrounds.set_frame(identity, frame);
                    self.inner.backgrounds.set_hidden(identity, false);
                }
                None => self.inner.backgrounds.set_hidden(identity, true),
            }

            cursor = placement.next_cursor;
        }

        let content_size = Size::new(metrics.viewport.width, cursor);
        let finished = self.inner.cache.borrow_mut().finish(content_size);
        self.inner.stacking.set(false);
        self.update_stats(|stats| stats.stack_passes += 1);
        if finished {
            self.inner.content_size.set(content_size);
        } else {
            log::debug!("cache invalidated during stack pass; scheduling another layout");
            self.inner.requests.request();
        }
    }

    fn synchronize(&self) {
        self.inner.synchronizing.set(true);
        let visible = self.inner.children.borrow().visible();
        let metrics = self.metrics();
        log::trace!("synchronizing {} children at offset {}", visible.len(), metrics.offset);

        for child in &visible {
            let identity = child.identity();
            let Some(entry) = self.cache_entry(identity) else {
                continue;
            };
            let padding = self.inner.spaces.padding(identity);
            let decision = sync_child(child, &entry, padding, metrics);

            if let Some(offset) = decision.content_offset {
                self.commit_content_offset(child.id, offset);
            }
            self.commit_frame(child.id, decision.frame);
        }

        self.inner.synchronizing.set(false);
        self.update_stats(|stats| stats.sync_passes += 1);
        if self.cache_state() == CacheState::Empty {
            log::debug!("cache invalidated during synchronization; scheduling another layout");
            self.inner.requests.request();
        }
    }

    fn commit_frame(&self, child: ChildId, frame: Rect) {
        let previous = {
            let mut children = self.inner.children.borrow_mut();
            let Ok(entry) = children.get_mut(child) else {
                return;
            };
            if entry.frame == frame {
                return;
            }
            std::mem::replace(&mut entry.frame, frame)
        };
        self.notify(ChildChange::Frame {
            child,
            from: previous,
            to: frame,
        });
    }

    fn commit_content_offset(&self, child: ChildId, offset: f32) {
        let previous = {
            let mut children = self.inner.children.borrow_mut();
            let Ok(entry) = children.get_mut(child) else {
                return;
            };
            if entry.content_offset == offset {
                return;
            }
            std::mem::replace(&mut entry.content_offset, offset)
        };
        self.notify(ChildChange::ContentOffset {
            child,
            from: previous,
            to: offset,
        });
    }

    fn notify(&self, change: ChildChange) {
        let observers: Vec<ChildObserver> = self.inner.observers.borrow().clone();
        for observer in observers {
            observer(&change);
        }
    }

    fn update_stats(&self, f: impl FnOnce(&mut LayoutStats)) {
        let mut stats = self.inner.stats.get();
        f(&mut stats);
        self.inner.stats.set(stats);
    }

    // ------------------------------------------------------------------
    // Child events
    // ------------------------------------------------------------------

    /// Applies a change reported by the view tree.
    pub fn handle_child_event(&self, event: ChildEvent) -> Result<(), FamilyError> {
        match event {
            ChildEvent::FrameChanged { child, from, to } => {
                if from.height.abs() == to.height.abs() {
                    return Ok(());
                }
                let id = self.inner.children.borrow_mut().with_child(child, |entry| {
                    if entry.kind.is_wrapping() {
                        // The container follows the wrapped view's size.
                        entry.content_size = to.size();
                        entry.frame.width = to.width;
                        entry.frame.height = to.height;
                    }
                    entry.id
                })?;
                self.invalidate_and_request(id, true);
            }
            ChildEvent::AlphaChanged { child, alpha } => {
                let (id, changed) = self.inner.children.borrow_mut().with_child(child, |entry| {
                    let changed = entry.alpha != alpha;
                    entry.alpha = alpha;
                    (entry.id, changed)
                })?;
                if changed {
                    self.invalidate_and_request(id, true);
                }
            }
            ChildEvent::HiddenChanged { child, hidden } => {
                let (id, identity, changed) =
                    self.inner.children.borrow_mut().with_child(child, |entry| {
                        let changed = entry.hidden != hidden;
                        entry.hidden = hidden;
                        (entry.id, entry.identity(), changed)
                    })?;
                if changed {
                    if hidden {
                        self.inner.backgrounds.set_hidden(identity, true);
                    }
                    self.invalidate_and_request(id, true);
                }
            }
            ChildEvent::ContentSizeChanged { child, size } => {
                let (id, changed) = self.inner.children.borrow_mut().with_child(child, |entry| {
                    let changed = entry.content_size != size;
                    entry.content_size = size;
                    (entry.id, changed)
                })?;
                if changed {
                    self.invalidate_and_request(id, true);
                }
            }
            ChildEvent::ScrollingChanged { child, scrolling } => {
                self.inner
                    .children
                    .borrow_mut()
                    .with_child(child, |entry| entry.scrolling = scrolling)?;
            }
            ChildEvent::DisplayLinkScroll { child } => {
                let id = self.inner.children.borrow().resolve(child)?;
                self.request_child_layout(id, false);
            }
        }
        Ok(())
    }

    fn invalidate_and_request(&self, child: ChildId, respect_scrolling: bool) {
        self.invalidate_cache();
        self.request_child_layout(child, respect_scrolling);
    }

    fn request_child_layout(&self, child: ChildId, respect_scrolling: bool) {
        if self.inner.live_resize.get() {
            log::debug!("child {child} layout request dropped during live resize");
            return;
        }
        if respect_scrolling && self.inner.config.suppress_while_child_scrolling {
            let scrolling = self
                .inner
                .children
                .borrow()
                .get(child)
                .map(|entry| entry.scrolling)
                .unwrap_or(false);
            if scrolling {
                log::debug!("child {child} layout request dropped while it scrolls");
                return;
            }
        }
        self.request_layout();
    }
}

impl fmt::Debug for FamilyScrollView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyScrollView")
            .field("children", &self.child_count())
            .field("content_offset", &self.content_offset())
            .field("viewport", &self.viewport())
            .field("content_size", &self.current_content_size())
            .field("cache", &self.cache_state())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/scroll_view_tests.rs"]
mod tests;
