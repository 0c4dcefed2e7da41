use family_core::ChildId;
use family_ui_graphics::Rect;

/// Decoration drawn behind a child's full padded content extent.
///
/// Implementations keep their own state; the engine only pushes frames and
/// visibility after each stack pass.
pub trait BackgroundDecorations {
    fn set_frame(&self, child: ChildId, frame: Rect);

    fn set_hidden(&self, child: ChildId, hidden: bool);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoBackgrounds;

impl BackgroundDecorations for NoBackgrounds {
    fn set_frame(&self, _child: ChildId, _frame: Rect) {}

    fn set_hidden(&self, _child: ChildId, _hidden: bool) {}
}
