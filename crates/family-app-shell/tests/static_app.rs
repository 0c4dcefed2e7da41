use std::rc::Rc;

use family_app_shell::ScrollHost;
use family_scroll::{CacheState, ChildEvent, EdgeInsets, FamilyConfig, Size};
use family_testing::RecordingBackgrounds;

const VIEWPORT: Size = Size {
    width: 400.0,
    height: 600.0,
};

#[test]
fn static_stack_settles() {
    let mut host = ScrollHost::new(FamilyConfig::default(), VIEWPORT);
    host.add_plain(300.0);
    host.add_wrapping(200.0);
    host.add_plain(900.0);

    assert!(host.needs_layout());
    let ran = host.settle(8);
    assert_eq!(ran, 1, "insertions should coalesce into one tick");
    assert!(!host.needs_layout());
    assert_eq!(host.view().cache_state(), CacheState::Finished);
    assert_eq!(host.view().current_content_size().height, 1400.0);

    // Nothing left to do.
    assert!(!host.update());
}

#[test]
fn scroll_runs_synchronously() {
    let mut host = ScrollHost::new(FamilyConfig::default(), VIEWPORT);
    let first = host.add_plain(1200.0);
    host.settle(4);

    host.scroll_to(250.0);
    let frame = host.view().child(first).unwrap().frame;
    assert_eq!(frame.y, 250.0);
    assert_eq!(host.view().child(first).unwrap().content_offset, 250.0);
    assert!(!host.needs_layout());
}

#[test]
fn unknown_child_events_are_dropped() {
    let mut host = ScrollHost::new(FamilyConfig::default(), VIEWPORT);
    host.add_plain(100.0);
    host.settle(4);

    host.dispatch(ChildEvent::AlphaChanged {
        child: 42,
        alpha: 0.0,
    });
    assert!(!host.needs_layout());
}

#[test]
fn spacing_change_moves_backgrounds() {
    let backgrounds = Rc::new(RecordingBackgrounds::new());
    let mut host =
        ScrollHost::with_backgrounds(FamilyConfig::default(), VIEWPORT, backgrounds.clone());
    let id = host.add_plain(200.0);
    host.settle(4);
    assert_eq!(backgrounds.frame(id).map(|frame| frame.y), Some(0.0));

    host.set_spacing(id, EdgeInsets::vertical(20.0), EdgeInsets::ZERO);
    host.settle(4);
    let frame = backgrounds.frame(id).unwrap();
    assert_eq!(frame.y, 20.0);
    assert_eq!(frame.height, 200.0);
}
