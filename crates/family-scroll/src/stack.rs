//! Stack pass: stacks visible children top to bottom and rebuilds the cache.

use family_core::{ChildEntry, ChildKind};
use family_ui_graphics::{Point, Rect};
use family_ui_layout::Spacing;

use crate::cache::CacheEntry;
use crate::metrics::ScrollMetrics;

/// Result of stacking one child at the running cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackPlacement {
    pub frame: Rect,
    pub entry: CacheEntry,
    /// Background frame, or `None` when the decoration must be hidden.
    pub background: Option<Rect>,
    /// Cursor for the next child.
    pub next_cursor: f32,
}

/// Places `child` at `cursor`, which is the running offset before the
/// child's top margin.
pub fn place_child(
    child: &ChildEntry,
    spacing: Spacing,
    cursor: f32,
    metrics: ScrollMetrics,
) -> StackPlacement {
    let margins = spacing.margins;
    let padding = spacing.padding;
    let content_height = child.content_size.height;
    let viewport_height = metrics.viewport.height;

    let y = cursor + margins.top;

    let internal_offset = if metrics.offset < y {
        padding.top
    } else {
        metrics.offset - y
    };
    let remaining_bounds = (metrics.bounds_max_y() - y).max(0.0);
    let remaining_content = (content_height - internal_offset).max(0.0);
    let visible_height = remaining_bounds.min(remaining_content).ceil();

    let (x, height) = match child.kind {
        ChildKind::WrappingContainer { .. } => {
            (margins.left, viewport_height.min(content_height))
        }
        ChildKind::Plain => (
            margins.left + padding.left,
            viewport_height.min(visible_height),
        ),
    };
    let mut height = height.max(0.0);
    if height > 0.0 {
        height += margins.vertical_sum();
    }

    let width = (metrics.viewport.width - margins.horizontal_sum()).max(0.0);
    let frame = Rect::new(x, y, width, height);
    let entry = CacheEntry::new(Point::new(x, y), child.content_size);

    let background = (content_height > 0.0).then(|| {
        Rect::new(
            margins.left,
            y - padding.top,
            width,
            content_height + padding.vertical_sum(),
        )
    });

    // Children without content only consume their top margin.
    let next_cursor = if content_height > 0.0 {
        y + content_height + margins.bottom + padding.bottom
    } else {
        y
    };

    StackPlacement {
        frame,
        entry,
        background,
        next_cursor,
    }
}

#[cfg(test)]
#[path = "tests/stack_tests.rs"]
mod tests;
