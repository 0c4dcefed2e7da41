use family_ui_graphics::{Point, Size};

/// Scroll position and visible size of the outer container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical content offset of the outer container.
    pub offset: f32,
    pub viewport: Size,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport: Size) -> Self {
        Self { offset, viewport }
    }

    pub fn from_content_offset(offset: Point, viewport: Size) -> Self {
        Self::new(offset.y, viewport)
    }

    /// Bottom edge of the visible bounds in content coordinates.
    pub fn bounds_max_y(&self) -> f32 {
        self.offset + self.viewport.height
    }
}
