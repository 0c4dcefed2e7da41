use super::*;
use family_ui_graphics::{Point, Size};

const VIEWPORT: Size = Size {
    width: 320.0,
    height: 500.0,
};

fn child(kind: ChildKind, y: f32, content_height: f32) -> (ChildEntry, CacheEntry) {
    let mut entry = ChildEntry::new(0, kind, Size::new(VIEWPORT.width, content_height));
    entry.frame = Rect::new(0.0, y, VIEWPORT.width, content_height.min(VIEWPORT.height));
    let cached = CacheEntry::new(Point::new(0.0, y), entry.content_size);
    (entry, cached)
}

fn sync_at(entry: &ChildEntry, cached: &CacheEntry, offset: f32) -> SyncDecision {
    sync_child(
        entry,
        cached,
        EdgeInsets::ZERO,
        ScrollMetrics::new(offset, VIEWPORT),
    )
}

#[test]
fn child_below_the_scroll_position_keeps_its_origin() {
    let (entry, cached) = child(ChildKind::Plain, 300.0, 800.0);
    let decision = sync_at(&entry, &cached, 0.0);
    assert_eq!(decision.frame.y, 300.0);
    assert_eq!(decision.frame.height, 500.0);
    assert!(!decision.should_scroll);
    assert_eq!(decision.content_offset, None);
}

#[test]
fn tall_child_absorbs_scroll_once_it_reaches_the_top() {
    let (entry, cached) = child(ChildKind::Plain, 300.0, 800.0);

    let at_origin = sync_at(&entry, &cached, 300.0);
    assert!(!at_origin.should_scroll);
    assert_eq!(at_origin.frame.y, 300.0);

    let inside = sync_at(&entry, &cached, 400.0);
    assert!(inside.should_scroll);
    assert_eq!(inside.content_offset, Some(100.0));
    assert_eq!(inside.frame.y, 400.0);
}

#[test]
fn short_child_never_absorbs_scroll() {
    let (entry, cached) = child(ChildKind::Plain, 0.0, 300.0);
    let decision = sync_at(&entry, &cached, 100.0);
    assert!(!decision.should_scroll);
    assert_eq!(decision.frame.y, 0.0);
    assert_eq!(decision.frame.height, 300.0);
}

#[test]
fn stale_offset_is_reset_while_not_scrolling() {
    let (mut entry, cached) = child(ChildKind::Plain, 300.0, 800.0);
    entry.content_offset = 42.0;
    let decision = sync_at(&entry, &cached, 0.0);
    assert_eq!(decision.content_offset, Some(0.0));
}

#[test]
fn offset_is_kept_once_scrolled_past_the_end() {
    let (mut entry, cached) = child(ChildKind::Plain, 0.0, 300.0);
    entry.content_offset = 42.0;
    let decision = sync_at(&entry, &cached, 300.0);
    assert_eq!(decision.content_offset, None);
    assert_eq!(decision.frame.y, 0.0);
}

#[test]
fn wrapping_container_above_scroll_gets_offset_not_frame_move() {
    let (entry, cached) = child(ChildKind::WrappingContainer { content: 1 }, 600.0, 200.0);
    let decision = sync_at(&entry, &cached, 100.0);
    assert_eq!(decision.content_offset, Some(0.0));
    assert_eq!(decision.frame.y, 600.0);
}

#[test]
fn wrapping_container_scrolled_past_is_pinned() {
    let (entry, cached) = child(ChildKind::WrappingContainer { content: 1 }, 100.0, 900.0);
    let decision = sync_at(&entry, &cached, 250.0);
    assert_eq!(decision.content_offset, None);
    assert_eq!(decision.frame.y, 100.0);
    assert!(decision.should_scroll);
}

#[test]
fn child_far_past_its_end_collapses() {
    let (entry, cached) = child(ChildKind::Plain, 0.0, 300.0);

    // 300 past the end of content: still inside one viewport.
    let near = sync_at(&entry, &cached, 600.0);
    assert_eq!(near.frame.height, 300.0);

    // Exactly one viewport past the end.
    let far = sync_at(&entry, &cached, 800.0);
    assert_eq!(far.frame.height, 0.0);
}

#[test]
fn child_far_below_the_viewport_collapses() {
    let (entry, cached) = child(ChildKind::Plain, 1000.0, 300.0);
    // bounds end at 500, child starts 500 below that.
    let decision = sync_at(&entry, &cached, 0.0);
    assert_eq!(decision.frame.height, 0.0);

    let closer = sync_at(&entry, &cached, 1.0);
    assert_eq!(closer.frame.height, 300.0);
}

#[test]
fn padding_extends_the_collapse_threshold() {
    let (entry, cached) = child(ChildKind::Plain, 0.0, 300.0);
    let decision = sync_child(
        &entry,
        &cached,
        EdgeInsets::vertical(10.0),
        ScrollMetrics::new(800.0, VIEWPORT),
    );
    assert_eq!(decision.frame.height, 300.0);
}

#[test]
fn frame_origin_rounds_the_parent_offset() {
    let (entry, cached) = child(ChildKind::Plain, 0.0, 900.0);
    let decision = sync_at(&entry, &cached, 120.4);
    assert!(decision.should_scroll);
    assert_eq!(decision.frame.y, 120.0);
    assert_eq!(decision.content_offset, Some(120.4));
}

#[test]
fn decisions_are_pure() {
    let (entry, cached) = child(ChildKind::Plain, 300.0, 800.0);
    let first = sync_at(&entry, &cached, 450.0);
    let mut moved = entry.clone();
    moved.frame = first.frame;
    if let Some(offset) = first.content_offset {
        moved.content_offset = offset;
    }
    assert_eq!(sync_at(&moved, &cached, 450.0).frame, first.frame);
}
