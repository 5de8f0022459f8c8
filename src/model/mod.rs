//! Value objects for the parameter hierarchy.
//!
//! A [`Parameter`] is a leaf descriptor owned by exactly one [`Component`].
//! Components refer to each other through [`ComponentId`] handles into the
//! [`ComponentTree`](crate::tree::ComponentTree) arena rather than owning
//! references, so the parent link never forms a cycle.

mod component;
mod parameter;

pub use component::{Component, ComponentId};
pub use parameter::Parameter;
