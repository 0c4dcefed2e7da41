//! Human readable dumps of the engine state.

use std::fmt::Write;

use crate::scroll_view::FamilyScrollView;

/// Formats offset, viewport, children and cache of `view` as text.
pub fn format_stack(view: &FamilyScrollView) -> String {
    let mut output = String::new();
    let viewport = view.viewport();
    let content = view.current_content_size();
    let _ = writeln!(
        output,
        "offset={:.1} viewport={:.1}x{:.1} content={:.1}x{:.1} cache={:?}",
        view.content_offset(),
        viewport.width,
        viewport.height,
        content.width,
        content.height,
        view.cache_state(),
    );

    for (id, frame) in view.frames() {
        let Ok(child) = view.child(id) else {
            continue;
        };
        let _ = writeln!(
            output,
            "  [{id}] {}{} frame=({:.1}, {:.1}, {:.1}x{:.1}) offset={:.1}",
            child.kind.name(),
            if child.hidden { " hidden" } else { "" },
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            child.content_offset,
        );
    }

    for (identity, entry) in view.cache_entries() {
        let _ = writeln!(
            output,
            "  cache[{identity}] origin={:.1} max_y={:.1}",
            entry.origin.y,
            entry.max_y(),
        );
    }
    output
}

pub fn log_stack(view: &FamilyScrollView) {
    log::debug!("family stack:\n{}", format_stack(view));
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use family_core::FamilyConfig;
    use family_ui_graphics::Size;
    use family_ui_layout::SpacingTable;

    #[test]
    fn dump_lists_children_and_cache() {
        let view = FamilyScrollView::new(FamilyConfig::default(), Rc::new(SpacingTable::new()));
        view.insert_plain(Size::new(100.0, 40.0));
        view.set_viewport(Size::new(100.0, 200.0));

        let dump = format_stack(&view);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("offset=0.0 viewport=100.0x200.0 content=100.0x40.0"));
        assert!(lines[0].ends_with("cache=Finished"));
        assert_eq!(lines[1], "  [0] plain frame=(0.0, 0.0, 100.0x40.0) offset=0.0");
        assert_eq!(lines[2], "  cache[0] origin=0.0 max_y=40.0");
    }
}
