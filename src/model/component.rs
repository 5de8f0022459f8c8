//! Component node and its arena handle.

use std::fmt;

use super::Parameter;

/// A handle to a component stored in a [`ComponentTree`](crate::tree::ComponentTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A configurable unit in the parameter hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Arena handle of this component
    pub id: ComponentId,
    /// Component type tag
    pub component_type: String,
    /// Unique component name
    pub name: String,
    /// Parent handle, `None` for roots
    pub parent: Option<ComponentId>,
    /// Child handles in declaration order
    pub children: Vec<ComponentId>,
    /// Owned parameters in row order
    pub parameters: Vec<Parameter>,
}

impl Component {
    /// Create a component with no children and no parameters.
    pub fn new(
        id: ComponentId,
        component_type: impl Into<String>,
        name: impl Into<String>,
        parent: Option<ComponentId>,
    ) -> Self {
        Self {
            id,
            component_type: component_type.into(),
            name: name.into(),
            parent,
            children: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Check if this component appears at the top level of the parameter map.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    pub fn add_child(&mut self, child: ComponentId) {
        self.children.push(child);
    }
}
