//! Layout and scroll synchronization for a stack of nested scroll views.
//!
//! A [`FamilyScrollView`] stacks independently scrolling children inside one
//! outer scroll surface. Layout runs in two passes:
//!
//! * the stack pass walks the visible children, assigns frames and rebuilds
//!   the [`GeometryCache`]; it only runs while the cache is empty,
//! * the synchronization pass runs after every scroll change and decides per
//!   child whether to move its frame or forward the scroll into the child.

mod background;
mod cache;
pub mod debug;
mod events;
mod metrics;
mod scroll_view;
pub mod stack;
pub mod sync;

pub use background::{BackgroundDecorations, NoBackgrounds};
pub use cache::{CacheEntry, CacheState, GeometryCache};
pub use events::{ChildChange, ChildEvent, ChildObserver};
pub use metrics::ScrollMetrics;
pub use scroll_view::{FamilyScrollView, LayoutStats, WeakFamilyScrollView, WrappedChild};
pub use sync::COLLAPSE_THRESHOLD_VIEWPORTS;

pub use family_core::{ChildEntry, ChildId, ChildKind, FamilyConfig, FamilyError};
pub use family_ui_graphics::{EdgeInsets, Point, Rect, Size};
pub use family_ui_layout::{SpaceLookup, Spacing, SpacingTable};

pub mod prelude {
    pub use crate::{
        BackgroundDecorations, CacheState, ChildEvent, FamilyConfig, FamilyScrollView,
        SpaceLookup, SpacingTable,
    };
}
