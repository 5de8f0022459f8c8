//! Component tree construction.
//!
//! This module provides the arena that holds every declared component for one
//! conversion run. The [`ComponentTree`] owns a [`Registry`] mapping names to
//! handles, which resolves parent references as rows are parsed.

mod builder;
mod registry;

pub use builder::ComponentTree;
pub use registry::Registry;
