use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ahash::RandomState;
use family_core::{ChildId, FamilyConfig, LayoutScheduler};
use family_scroll::{BackgroundDecorations, ChildChange, FamilyScrollView, WrappedChild};
use family_ui_graphics::{EdgeInsets, Rect, Size};
use family_ui_layout::{Spacing, SpacingTable};
use hashbrown::HashMap;

/// Background collaborator that remembers the last frame and visibility
/// pushed for every child.
#[derive(Debug, Default)]
pub struct RecordingBackgrounds {
    frames: RefCell<HashMap<ChildId, Rect, RandomState>>,
    hidden: RefCell<HashMap<ChildId, bool, RandomState>>,
    updates: Cell<usize>,
}

impl RecordingBackgrounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self, child: ChildId) -> Option<Rect> {
        self.frames.borrow().get(&child).copied()
    }

    pub fn is_hidden(&self, child: ChildId) -> Option<bool> {
        self.hidden.borrow().get(&child).copied()
    }

    /// Total number of calls received.
    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl BackgroundDecorations for RecordingBackgrounds {
    fn set_frame(&self, child: ChildId, frame: Rect) {
        self.frames.borrow_mut().insert(child, frame);
        self.updates.set(self.updates.get() + 1);
    }

    fn set_hidden(&self, child: ChildId, hidden: bool) {
        self.hidden.borrow_mut().insert(child, hidden);
        self.updates.set(self.updates.get() + 1);
    }
}

/// Scheduler that counts how often the engine asked for a host tick.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    requests: Cell<usize>,
}

impl CountingScheduler {
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl LayoutScheduler for CountingScheduler {
    fn schedule_layout(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

/// Collects every change committed by the engine.
#[derive(Clone, Default)]
pub struct ChangeLog {
    changes: Rc<RefCell<Vec<ChildChange>>>,
}

impl ChangeLog {
    pub fn attach(view: &FamilyScrollView) -> Self {
        let log = Self::default();
        let sink = log.changes.clone();
        view.add_observer(move |change| sink.borrow_mut().push(*change));
        log
    }

    pub fn changes(&self) -> Vec<ChildChange> {
        self.changes.borrow().clone()
    }

    pub fn clear(&self) {
        self.changes.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.borrow().is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
enum PendingChild {
    Plain { height: f32, spacing: Option<Spacing> },
    Wrapping { height: f32, spacing: Option<Spacing> },
    Hidden { height: f32 },
}

/// Child ids created by a [`StackFixture`], in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureChild {
    Plain(ChildId),
    Wrapping(WrappedChild),
}

impl FixtureChild {
    /// Id to address the child with in events and lookups.
    pub fn id(&self) -> ChildId {
        match self {
            FixtureChild::Plain(id) => *id,
            FixtureChild::Wrapping(wrapped) => wrapped.container,
        }
    }

    /// Identity used by spacing, cache and backgrounds.
    pub fn identity(&self) -> ChildId {
        match self {
            FixtureChild::Plain(id) => *id,
            FixtureChild::Wrapping(wrapped) => wrapped.content,
        }
    }
}

/// Builder for a scroll view populated with children of known heights.
pub struct StackFixtureBuilder {
    viewport: Size,
    config: FamilyConfig,
    pending: Vec<PendingChild>,
}

impl StackFixtureBuilder {
    pub fn config(mut self, config: FamilyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn plain(mut self, height: f32) -> Self {
        self.pending.push(PendingChild::Plain {
            height,
            spacing: None,
        });
        self
    }

    pub fn plain_spaced(mut self, height: f32, margins: EdgeInsets, padding: EdgeInsets) -> Self {
        self.pending.push(PendingChild::Plain {
            height,
            spacing: Some(Spacing::new(margins, padding)),
        });
        self
    }

    pub fn wrapping(mut self, height: f32) -> Self {
        self.pending.push(PendingChild::Wrapping {
            height,
            spacing: None,
        });
        self
    }

    pub fn wrapping_spaced(
        mut self,
        height: f32,
        margins: EdgeInsets,
        padding: EdgeInsets,
    ) -> Self {
        self.pending.push(PendingChild::Wrapping {
            height,
            spacing: Some(Spacing::new(margins, padding)),
        });
        self
    }

    /// Adds a plain child that is hidden before the first layout.
    pub fn hidden(mut self, height: f32) -> Self {
        self.pending.push(PendingChild::Hidden { height });
        self
    }

    /// Creates the view, inserts the children and runs the first layout.
    pub fn build(self) -> StackFixture {
        let spaces = Rc::new(RefCell::new(SpacingTable::from_config(&self.config)));
        let backgrounds = Rc::new(RecordingBackgrounds::new());
        let scheduler = Rc::new(CountingScheduler::default());
        let view = FamilyScrollView::with_collaborators(
            self.config,
            spaces.clone(),
            backgrounds.clone(),
            scheduler.clone(),
        );
        let width = self.viewport.width;

        let mut children = Vec::with_capacity(self.pending.len());
        for pending in self.pending {
            let child = match pending {
                PendingChild::Plain { height, spacing } => {
                    let id = view.insert_plain(Size::new(width, height));
                    if let Some(spacing) = spacing {
                        spaces.borrow_mut().set_spacing(id, spacing);
                    }
                    FixtureChild::Plain(id)
                }
                PendingChild::Wrapping { height, spacing } => {
                    let wrapped = view.insert_wrapping(Size::new(width, height));
                    if let Some(spacing) = spacing {
                        spaces.borrow_mut().set_spacing(wrapped.content, spacing);
                    }
                    FixtureChild::Wrapping(wrapped)
                }
                PendingChild::Hidden { height } => {
                    let id = view.insert_plain(Size::new(width, height));
                    view.handle_child_event(family_scroll::ChildEvent::HiddenChanged {
                        child: id,
                        hidden: true,
                    })
                    .expect("fixture child exists");
                    FixtureChild::Plain(id)
                }
            };
            children.push(child);
        }

        view.set_viewport(self.viewport);
        // Hiding a child above queued a request that the first layout covered.
        view.drain_pending_layout();

        StackFixture {
            view,
            children,
            spaces,
            backgrounds,
            scheduler,
        }
    }
}

/// A laid out scroll view plus the recording collaborators behind it.
pub struct StackFixture {
    pub view: FamilyScrollView,
    pub children: Vec<FixtureChild>,
    pub spaces: Rc<RefCell<SpacingTable>>,
    pub backgrounds: Rc<RecordingBackgrounds>,
    pub scheduler: Rc<CountingScheduler>,
}

impl StackFixture {
    pub fn builder(viewport: Size) -> StackFixtureBuilder {
        StackFixtureBuilder {
            viewport,
            config: FamilyConfig::default(),
            pending: Vec::new(),
        }
    }

    pub fn child(&self, index: usize) -> FixtureChild {
        self.children[index]
    }

    pub fn frame(&self, index: usize) -> Rect {
        self.view
            .child(self.child(index).id())
            .map(|child| child.frame)
            .unwrap_or_default()
    }

    pub fn content_offset(&self, index: usize) -> f32 {
        self.view
            .child(self.child(index).id())
            .map(|child| child.content_offset)
            .unwrap_or_default()
    }

    /// Cached origin of the child at `index`, if it has an entry.
    pub fn origin_y(&self, index: usize) -> Option<f32> {
        self.view
            .cache_entry(self.child(index).identity())
            .map(|entry| entry.origin.y)
    }

    pub fn scroll_to(&self, offset: f32) {
        self.view.set_content_offset(offset);
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
