//! Spacing contracts for the Family scroll stack.

mod spacing;

pub use spacing::*;

pub mod prelude {
    pub use crate::spacing::{SpaceLookup, Spacing, SpacingTable};
}
