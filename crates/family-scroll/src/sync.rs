//! Synchronization pass: runs on every scroll change against cached geometry.

use family_core::{ChildEntry, ChildKind};
use family_ui_graphics::{EdgeInsets, Rect};

use crate::cache::CacheEntry;
use crate::metrics::ScrollMetrics;

/// Children scrolled this many viewport heights past their end collapse to
/// zero height.
pub const COLLAPSE_THRESHOLD_VIEWPORTS: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncDecision {
    pub frame: Rect,
    /// New internal offset for the child, if it changes.
    pub content_offset: Option<f32>,
    /// The child fills the viewport and absorbs the scroll itself.
    pub should_scroll: bool,
}

pub fn sync_child(
    child: &ChildEntry,
    entry: &CacheEntry,
    padding: EdgeInsets,
    metrics: ScrollMetrics,
) -> SyncDecision {
    let parent = metrics.offset;
    let viewport_height = metrics.viewport.height;
    let above = parent < entry.origin.y;

    let mut frame = child.frame;
    let internal_offset = if above {
        frame.y = entry.origin.y.round().abs();
        0.0
    } else {
        frame.y = parent.round().abs();
        parent - entry.origin.y
    };

    let remaining_bounds = metrics.bounds_max_y() - entry.origin.y;
    let remaining_content =
        entry.content_size.height - internal_offset + padding.vertical_sum();
    let collapse_limit = -viewport_height * COLLAPSE_THRESHOLD_VIEWPORTS;

    let mut height = viewport_height.min(child.content_size.height).max(0.0);
    if remaining_bounds <= collapse_limit || remaining_content <= collapse_limit {
        height = 0.0;
    }

    let should_scroll = parent > entry.origin.y
        && parent < entry.max_y()
        && height > 0.0
        && height >= viewport_height;

    let mut content_offset = None;
    match child.kind {
        ChildKind::WrappingContainer { .. } => {
            if above {
                content_offset = Some(internal_offset);
            } else {
                frame.y = entry.origin.y;
            }
        }
        ChildKind::Plain if should_scroll => {
            content_offset = Some(internal_offset);
        }
        ChildKind::Plain => {
            frame.y = entry.origin.y;
            // A stale offset on a child that is not scrolling looks clipped.
            if parent < entry.max_y() && child.content_offset != 0.0 {
                content_offset = Some(0.0);
            }
        }
    }

    frame.height = height;

    SyncDecision {
        frame,
        content_offset,
        should_scroll,
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
