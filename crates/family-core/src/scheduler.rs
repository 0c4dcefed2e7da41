//! Coalescing of layout requests into at most one pending pass per host tick.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Host hook notified when a layout pass has been queued.
///
/// Implementations typically wake the event loop so that it calls back
/// into the engine on its next turn.
pub trait LayoutScheduler {
    fn schedule_layout(&self);
}

#[derive(Debug, Default)]
pub struct NoopScheduler;

impl LayoutScheduler for NoopScheduler {
    fn schedule_layout(&self) {}
}

pub struct LayoutRequestQueue {
    scheduler: Rc<dyn LayoutScheduler>,
    pending: Cell<bool>,
    coalesced: Cell<u64>,
}

impl LayoutRequestQueue {
    pub fn new(scheduler: Rc<dyn LayoutScheduler>) -> Self {
        Self {
            scheduler,
            pending: Cell::new(false),
            coalesced: Cell::new(0),
        }
    }

    /// Queues a layout request. Returns false if one was already pending.
    pub fn request(&self) -> bool {
        if self.pending.replace(true) {
            self.coalesced.set(self.coalesced.get() + 1);
            log::trace!("layout request coalesced ({} so far)", self.coalesced.get());
            return false;
        }
        self.scheduler.schedule_layout();
        true
    }

    /// Consumes the pending request, if any.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Number of requests folded into an already pending one.
    pub fn coalesced_count(&self) -> u64 {
        self.coalesced.get()
    }
}

impl Default for LayoutRequestQueue {
    fn default() -> Self {
        Self::new(Rc::new(NoopScheduler))
    }
}

impl fmt::Debug for LayoutRequestQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRequestQueue")
            .field("pending", &self.pending.get())
            .field("coalesced", &self.coalesced.get())
            .finish()
    }
}
