use family_ui_graphics::{Rect, Size};

use crate::ChildId;

/// How the engine positions a child.
///
/// Decided once when the child is inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildKind {
    /// A scrollable child repositioned directly by the parent.
    Plain,
    /// An adapter around a non-scrolling content view. It manages its own
    /// internal offset and is only ever pinned to its cached origin.
    WrappingContainer { content: ChildId },
}

impl ChildKind {
    pub fn is_wrapping(self) -> bool {
        matches!(self, ChildKind::WrappingContainer { .. })
    }

    pub fn name(self) -> &'static str {
        match self {
            ChildKind::Plain => "plain",
            ChildKind::WrappingContainer { .. } => "wrapping container",
        }
    }
}

/// State of one child view as seen by the layout engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildEntry {
    pub id: ChildId,
    pub kind: ChildKind,
    /// Frame in the parent's coordinate space.
    pub frame: Rect,
    /// Vertical offset of the child's own scroll surface.
    pub content_offset: f32,
    /// Intrinsic scrollable extent; may exceed the frame height.
    pub content_size: Size,
    pub hidden: bool,
    pub alpha: f32,
    /// Set while the child's own surface is being scrolled by the user.
    pub scrolling: bool,
}

impl ChildEntry {
    pub fn new(id: ChildId, kind: ChildKind, content_size: Size) -> Self {
        Self {
            id,
            kind,
            frame: Rect::default(),
            content_offset: 0.0,
            content_size,
            hidden: false,
            alpha: 1.0,
            scrolling: false,
        }
    }

    /// Identity used for spacing, cache and background lookups.
    ///
    /// Wrapping containers are addressed through their wrapped content so
    /// that configuration follows the view the caller actually registered.
    pub fn identity(&self) -> ChildId {
        match self.kind {
            ChildKind::Plain => self.id,
            ChildKind::WrappingContainer { content } => content,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}
