use std::cell::{Cell, RefCell};
use std::rc::Rc;

use family_core::{ChildId, FamilyConfig, LayoutScheduler};
use family_scroll::{
    debug::{format_stack, log_stack},
    BackgroundDecorations, ChildEvent, FamilyScrollView, NoBackgrounds, WrappedChild,
};
use family_ui_graphics::{EdgeInsets, Size};
use family_ui_layout::{Spacing, SpacingTable};

/// Scheduler owned by the host. Remembers whether the engine asked for a
/// tick since the last one ran.
#[derive(Debug, Default)]
pub struct HostScheduler {
    frame_requested: Cell<bool>,
}

impl HostScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested.get()
    }

    /// Returns whether a tick has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.replace(false)
    }
}

impl LayoutScheduler for HostScheduler {
    fn schedule_layout(&self) {
        self.frame_requested.set(true);
    }
}

/// Owns a scroll stack and feeds it scrolls, resizes and child events the
/// way a windowing loop would.
pub struct ScrollHost {
    view: FamilyScrollView,
    spaces: Rc<RefCell<SpacingTable>>,
    scheduler: Rc<HostScheduler>,
    ticks: u64,
}

impl ScrollHost {
    pub fn new(config: FamilyConfig, viewport: Size) -> Self {
        Self::with_backgrounds(config, viewport, Rc::new(NoBackgrounds))
    }

    pub fn with_backgrounds(
        config: FamilyConfig,
        viewport: Size,
        backgrounds: Rc<dyn BackgroundDecorations>,
    ) -> Self {
        let spaces = Rc::new(RefCell::new(SpacingTable::from_config(&config)));
        let scheduler = Rc::new(HostScheduler::new());
        let view =
            FamilyScrollView::with_collaborators(config, spaces.clone(), backgrounds, scheduler.clone());
        view.set_viewport(viewport);
        Self {
            view,
            spaces,
            scheduler,
            ticks: 0,
        }
    }

    pub fn view(&self) -> &FamilyScrollView {
        &self.view
    }

    pub fn add_plain(&mut self, height: f32) -> ChildId {
        let width = self.view.viewport().width;
        let id = self.view.insert_plain(Size::new(width, height));
        self.view.request_layout();
        id
    }

    pub fn add_wrapping(&mut self, height: f32) -> WrappedChild {
        let width = self.view.viewport().width;
        let wrapped = self.view.insert_wrapping(Size::new(width, height));
        self.view.request_layout();
        wrapped
    }

    /// Overrides spacing for a child identity and queues a relayout.
    pub fn set_spacing(&mut self, identity: ChildId, margins: EdgeInsets, padding: EdgeInsets) {
        self.spaces
            .borrow_mut()
            .set_spacing(identity, Spacing::new(margins, padding));
        self.view.invalidate_cache();
        self.view.request_layout();
    }

    /// Removes a child. Unknown ids are logged and ignored.
    pub fn remove(&mut self, child: ChildId) {
        match self.view.remove_child(child) {
            Ok(_) => self.view.request_layout(),
            Err(err) => log::error!("cannot remove child {child}: {err}"),
        }
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.view.set_content_offset(offset);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.view.scroll_by(delta);
    }

    pub fn resize(&mut self, viewport: Size) {
        self.view.set_viewport(viewport);
    }

    pub fn begin_live_resize(&mut self) {
        self.view.set_live_resize(true);
    }

    pub fn end_live_resize(&mut self) {
        self.view.set_live_resize(false);
    }

    /// Forwards a child event. Events for unknown children are logged and
    /// dropped.
    pub fn dispatch(&mut self, event: ChildEvent) {
        if let Err(err) = self.view.handle_child_event(event) {
            log::error!("child event {event:?} rejected: {err}");
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.scheduler.is_frame_requested() || self.view.has_pending_layout()
    }

    /// One host tick: consumes the frame request and runs the queued layout,
    /// if any.
    pub fn update(&mut self) -> bool {
        self.ticks += 1;
        self.scheduler.take_frame_request();
        let ran = self.view.drain_pending_layout();
        if ran {
            log::trace!("tick {} ran a layout pass", self.ticks);
        }
        ran
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks until no layout is pending, up to `max_ticks`. Returns the number
    /// of ticks that ran a layout.
    pub fn settle(&mut self, max_ticks: usize) -> usize {
        let mut ran = 0;
        for _ in 0..max_ticks {
            if !self.needs_layout() {
                break;
            }
            if self.update() {
                ran += 1;
            }
        }
        ran
    }

    pub fn debug_dump(&self) -> String {
        format_stack(&self.view)
    }

    pub fn log_debug_info(&self) {
        log_stack(&self.view);
    }
}
