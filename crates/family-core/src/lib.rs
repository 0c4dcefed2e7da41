//! Core data model for the Family scroll stack.
//!
//! Children are owned by a [`ChildRegistry`] and addressed by [`ChildId`].
//! The layout engine never holds references into the registry across a
//! pass; everything goes through ids so that collaborators can keep
//! non-owning handles.

mod child;
mod config;
mod registry;
mod scheduler;

pub use child::*;
pub use config::*;
pub use registry::*;
pub use scheduler::*;

pub type ChildId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyError {
    UnknownChild { id: ChildId },
}

impl std::fmt::Display for FamilyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FamilyError::UnknownChild { id } => write!(f, "child {id} is not registered"),
        }
    }
}

impl std::error::Error for FamilyError {}

pub mod prelude {
    pub use crate::child::{ChildEntry, ChildKind};
    pub use crate::config::FamilyConfig;
    pub use crate::registry::ChildRegistry;
    pub use crate::scheduler::{LayoutRequestQueue, LayoutScheduler, NoopScheduler};
    pub use crate::{ChildId, FamilyError};
}
