//! Messages exchanged between the engine and the view tree.

use std::rc::Rc;

use family_core::ChildId;
use family_ui_graphics::{Rect, Size};

/// Something changed on a child outside of a layout pass.
///
/// Events may address a child by its own id or, for wrapping containers,
/// by the id of the wrapped content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChildEvent {
    FrameChanged { child: ChildId, from: Rect, to: Rect },
    AlphaChanged { child: ChildId, alpha: f32 },
    HiddenChanged { child: ChildId, hidden: bool },
    ContentSizeChanged { child: ChildId, size: Size },
    /// The user started or stopped scrolling the child's own surface.
    ScrollingChanged { child: ChildId, scrolling: bool },
    /// A display linked tick from the child's nested scroll surface.
    DisplayLinkScroll { child: ChildId },
}

/// A change the engine committed to a child during a pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChildChange {
    Frame { child: ChildId, from: Rect, to: Rect },
    ContentOffset { child: ChildId, from: f32, to: f32 },
}

impl ChildChange {
    pub fn child(&self) -> ChildId {
        match *self {
            ChildChange::Frame { child, .. } | ChildChange::ContentOffset { child, .. } => child,
        }
    }
}

/// Callback fired synchronously after each committed [`ChildChange`].
///
/// Observers may call back into the engine; calls that arrive while a pass
/// is running are dropped.
pub type ChildObserver = Rc<dyn Fn(&ChildChange)>;
