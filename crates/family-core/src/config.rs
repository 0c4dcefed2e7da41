use family_ui_graphics::EdgeInsets;

/// Engine wide settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FamilyConfig {
    /// Queue child driven layout requests and run them once per host tick
    /// instead of laying out synchronously.
    pub coalesce_layout_requests: bool,
    /// Drop child driven layout requests while that child is being scrolled.
    pub suppress_while_child_scrolling: bool,
    pub default_margins: EdgeInsets,
    pub default_padding: EdgeInsets,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            coalesce_layout_requests: true,
            suppress_while_child_scrolling: true,
            default_margins: EdgeInsets::ZERO,
            default_padding: EdgeInsets::ZERO,
        }
    }
}

impl FamilyConfig {
    pub fn with_coalescing(mut self, enabled: bool) -> Self {
        self.coalesce_layout_requests = enabled;
        self
    }

    pub fn with_scroll_suppression(mut self, enabled: bool) -> Self {
        self.suppress_while_child_scrolling = enabled;
        self
    }

    pub fn with_default_margins(mut self, margins: EdgeInsets) -> Self {
        self.default_margins = margins;
        self
    }

    pub fn with_default_padding(mut self, padding: EdgeInsets) -> Self {
        self.default_padding = padding;
        self
    }
}
