use family_app_shell::ScrollHost;
use family_scroll::{ChildEvent, EdgeInsets, FamilyConfig, Size};

const INITIAL_WIDTH: f32 = 390.0;
const INITIAL_HEIGHT: f32 = 844.0;
const SCROLL_STEP: f32 = 240.0;

fn main() {
    env_logger::init();

    println!("=== Family scroll stack demo ===");
    println!("Stacks a header, a wrapped web view and a long comment list,");
    println!("then scrolls through them and prints each frame.");
    println!();

    let viewport = Size::new(INITIAL_WIDTH, INITIAL_HEIGHT);
    let mut host = ScrollHost::new(FamilyConfig::default(), viewport);

    let header = host.add_plain(220.0);
    let article = host.add_wrapping(1_600.0);
    let comments = host.add_plain(3_200.0);
    host.set_spacing(article.content, EdgeInsets::vertical(16.0), EdgeInsets::ZERO);
    host.set_spacing(
        comments,
        EdgeInsets::uniform(4.0),
        EdgeInsets::from_components(0.0, 8.0, 0.0, 24.0),
    );
    host.settle(4);

    println!("--- initial layout ---");
    print!("{}", host.debug_dump());

    let total = host.view().current_content_size().height;
    let mut offset = 0.0;
    while offset + INITIAL_HEIGHT < total {
        host.scroll_by(SCROLL_STEP);
        offset = host.view().content_offset();
        println!("--- offset {offset} ---");
        print!("{}", host.debug_dump());
    }

    // The article finished loading more content.
    host.dispatch(ChildEvent::ContentSizeChanged {
        child: article.content,
        size: Size::new(INITIAL_WIDTH, 2_000.0),
    });
    host.dispatch(ChildEvent::AlphaChanged {
        child: header,
        alpha: 0.5,
    });
    let ticks = host.settle(4);
    println!("--- after content growth ({ticks} layout tick) ---");
    print!("{}", host.debug_dump());

    host.begin_live_resize();
    host.resize(Size::new(INITIAL_HEIGHT, INITIAL_WIDTH));
    println!("live resizing: {}", host.view().is_live_resizing());
    host.end_live_resize();
    println!("--- after rotation ---");
    print!("{}", host.debug_dump());

    host.remove(header);
    host.settle(4);
    println!("--- without the header ---");
    print!("{}", host.debug_dump());

    host.log_debug_info();
    print_stats("coalesced", &host);

    // Same stack, laid out as soon as anything changes.
    let config = FamilyConfig::default()
        .with_coalescing(false)
        .with_scroll_suppression(false);
    let mut eager = ScrollHost::new(config, viewport);
    eager.add_plain(220.0);
    eager.add_wrapping(1_600.0);
    eager.add_plain(3_200.0);
    eager.scroll_to(INITIAL_HEIGHT);
    print_stats("synchronous", &eager);
}

fn print_stats(label: &str, host: &ScrollHost) {
    let stats = host.view().stats();
    println!(
        "{label}: stack passes: {}, sync passes: {}, skipped reentrant requests: {}, coalesced requests: {}",
        stats.stack_passes,
        stats.sync_passes,
        stats.reentrant_skips,
        host.view().coalesced_requests()
    );
}
