//! Parameter-map document layout.
//!
//! The document is a JSON array. The first element is the version marker
//! `{"version": [0, 2, 0]}`, followed by one object per root component:
//!
//! ```text
//! {
//!  "name": ..., "type": ...,
//!  "parameters": [ { "name", "type", "length", "unit", ["fields"], ["limit_min"], ["limit_max"] } ],
//!  "components": [ <child component>, ... ]
//! }
//! ```
//!
//! Children are nested depth-first in declaration order.

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::model::ComponentId;
use crate::tree::ComponentTree;
use crate::PARAMETER_MAP_VERSION;

/// Leading element of every parameter map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionMarker {
    pub version: [u32; 3],
}

impl Default for VersionMarker {
    fn default() -> Self {
        Self {
            version: PARAMETER_MAP_VERSION,
        }
    }
}

/// Serializable view of a whole component tree.
#[derive(Debug, Clone, Copy)]
pub struct ParameterMap<'a> {
    tree: &'a ComponentTree,
}

impl<'a> ParameterMap<'a> {
    pub fn new(tree: &'a ComponentTree) -> Self {
        Self { tree }
    }

    /// Convert into a JSON value tree.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for ParameterMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let roots: Vec<_> = self.tree.roots().collect();
        let mut seq = serializer.serialize_seq(Some(roots.len() + 1))?;
        seq.serialize_element(&VersionMarker::default())?;
        for root in roots {
            seq.serialize_element(&ComponentView::new(self.tree, root.id))?;
        }
        seq.end()
    }
}

/// One component and, recursively, its children.
struct ComponentView<'a> {
    tree: &'a ComponentTree,
    id: ComponentId,
}

impl<'a> ComponentView<'a> {
    fn new(tree: &'a ComponentTree, id: ComponentId) -> Self {
        Self { tree, id }
    }
}

impl Serialize for ComponentView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let component = self.tree.get(self.id);
        let children: Vec<_> = component
            .children
            .iter()
            .map(|&child| ComponentView::new(self.tree, child))
            .collect();

        let mut state = serializer.serialize_struct("Component", 4)?;
        state.serialize_field("name", &component.name)?;
        state.serialize_field("type", &component.component_type)?;
        state.serialize_field("parameters", &component.parameters)?;
        state.serialize_field("components", &children)?;
        state.end()
    }
}
