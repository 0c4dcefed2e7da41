//! Pure geometry for the Family scroll stack.
//!
//! This crate contains the point, size, rectangle and inset types shared by
//! the layout engine and its collaborators.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
