use family_app_shell::ScrollHost;
use family_scroll::{ChildEvent, FamilyConfig, Rect, Size};

const VIEWPORT: Size = Size {
    width: 400.0,
    height: 600.0,
};

#[test]
fn bursts_of_events_run_one_layout_per_tick() {
    let mut host = ScrollHost::new(FamilyConfig::default(), VIEWPORT);
    let first = host.add_plain(300.0);
    let second = host.add_plain(300.0);
    host.settle(4);
    let before = host.view().stats();

    for step in 0..5 {
        host.dispatch(ChildEvent::ContentSizeChanged {
            child: first,
            size: Size::new(400.0, 310.0 + step as f32),
        });
        host.dispatch(ChildEvent::DisplayLinkScroll { child: second });
    }

    assert!(host.needs_layout());
    assert!(host.update());
    assert!(!host.update());

    let after = host.view().stats();
    assert_eq!(after.stack_passes, before.stack_passes + 1);
    assert!(host.view().coalesced_requests() >= 9);
    assert_eq!(host.view().current_content_size().height, 614.0);
}

#[test]
fn live_resize_defers_child_requests() {
    let mut host = ScrollHost::new(FamilyConfig::default(), VIEWPORT);
    let wrapped = host.add_wrapping(200.0);
    host.settle(4);

    host.begin_live_resize();
    host.dispatch(ChildEvent::FrameChanged {
        child: wrapped.container,
        from: Rect::new(0.0, 0.0, 400.0, 200.0),
        to: Rect::new(0.0, 0.0, 400.0, 260.0),
    });
    assert!(!host.needs_layout());

    host.end_live_resize();
    assert_eq!(host.view().current_content_size().height, 260.0);
}

#[test]
fn synchronous_mode_never_needs_a_tick() {
    let config = FamilyConfig::default().with_coalescing(false);
    let mut host = ScrollHost::new(config, VIEWPORT);
    let id = host.add_plain(300.0);
    assert!(!host.needs_layout());
    assert_eq!(host.view().current_content_size().height, 300.0);

    host.dispatch(ChildEvent::ContentSizeChanged {
        child: id,
        size: Size::new(400.0, 500.0),
    });
    assert!(!host.needs_layout());
    assert_eq!(host.view().current_content_size().height, 500.0);
}

#[test]
fn asking_whether_layout_is_needed_does_not_consume_the_tick() {
    let mut host = ScrollHost::new(FamilyConfig::default(), VIEWPORT);
    host.add_plain(300.0);

    assert!(host.needs_layout());
    assert!(host.needs_layout());
    assert!(host.update());
    assert!(!host.needs_layout());
}

#[test]
fn removing_a_child_restacks_on_the_next_tick() {
    let mut host = ScrollHost::new(FamilyConfig::default(), VIEWPORT);
    let first = host.add_plain(300.0);
    let second = host.add_plain(200.0);
    host.settle(4);

    host.remove(first);
    assert!(host.needs_layout());
    host.settle(4);
    assert_eq!(host.view().current_content_size().height, 200.0);
    assert_eq!(host.view().cache_entry(second).map(|entry| entry.origin.y), Some(0.0));

    // Already gone: logged, nothing queued.
    host.remove(first);
    assert!(!host.needs_layout());
}
