//! Component arena.

use tracing::{debug, warn};

use super::Registry;
use crate::error::{ParamMapError, Result};
use crate::model::{Component, ComponentId, Parameter};

/// All components declared during one conversion run.
///
/// Components are stored in declaration order. Parent and child links are
/// [`ComponentId`] indices into the same arena.
#[derive(Debug, Default)]
pub struct ComponentTree {
    components: Vec<Component>,
    registry: Registry,
}

impl ComponentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new component.
    ///
    /// `parent` is resolved against previously declared names. An unknown
    /// parent leaves the component as a root. Redeclaring an existing name
    /// is an error.
    pub fn declare(
        &mut self,
        component_type: &str,
        parent: Option<&str>,
        name: &str,
        line: usize,
    ) -> Result<ComponentId> {
        let id = ComponentId(self.components.len());

        // Resolve before registering so a component cannot name itself as parent
        let parent_id = parent.and_then(|parent_name| {
            let resolved = self.registry.get(parent_name);
            if resolved.is_none() {
                warn!(
                    line,
                    component = name,
                    parent = parent_name,
                    "parent not declared yet, treating component as root"
                );
            }
            resolved
        });

        if self.registry.insert(name, id).is_some() {
            return Err(ParamMapError::DuplicateComponent {
                name: name.to_string(),
                line,
            });
        }

        if let Some(parent_id) = parent_id {
            self.components[parent_id.0].add_child(id);
        }

        debug!(line, %id, component = name, component_type, parent = ?parent_id, "declared component");
        self.components
            .push(Component::new(id, component_type, name, parent_id));

        Ok(id)
    }

    /// Attach a parameter to a declared component.
    pub fn add_parameter(&mut self, id: ComponentId, parameter: Parameter) {
        self.components[id.0].add_parameter(parameter);
    }

    /// Get a component by handle.
    pub fn get(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }

    /// Find a component by name.
    pub fn find(&self, name: &str) -> Option<&Component> {
        self.registry.get(name).map(|id| self.get(id))
    }

    /// Components without a parent, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_root())
    }

    /// Direct children of a component, in declaration order.
    pub fn children(&self, id: ComponentId) -> impl Iterator<Item = &Component> {
        self.get(id).children.iter().map(|&child| self.get(child))
    }

    /// All components in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Total number of parameters across all components.
    pub fn parameter_count(&self) -> usize {
        self.components.iter().map(|c| c.parameters.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_links_children_to_parent() {
        let mut tree = ComponentTree::new();
        let board = tree.declare("Board", None, "Main", 2).unwrap();
        let a = tree.declare("Sensor", Some("Main"), "A", 3).unwrap();
        let b = tree.declare("Sensor", Some("Main"), "B", 4).unwrap();

        assert_eq!(tree.get(board).children, vec![a, b]);
        assert_eq!(tree.get(a).parent, Some(board));
        let names: Vec<_> = tree.children(board).map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_parent_becomes_root() {
        let mut tree = ComponentTree::new();
        let id = tree.declare("Sensor", Some("Later"), "Temp", 2).unwrap();
        tree.declare("Board", None, "Later", 3).unwrap();

        assert!(tree.get(id).is_root());
        assert_eq!(tree.roots().count(), 2);
    }

    #[test]
    fn test_roots_in_declaration_order() {
        let mut tree = ComponentTree::new();
        tree.declare("Board", None, "First", 2).unwrap();
        tree.declare("Sensor", Some("First"), "Child", 3).unwrap();
        tree.declare("Board", None, "Second", 4).unwrap();

        let roots: Vec<_> = tree.roots().map(|c| c.name.as_str()).collect();
        assert_eq!(roots, vec!["First", "Second"]);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut tree = ComponentTree::new();
        tree.declare("Board", None, "Main", 2).unwrap();
        let err = tree.declare("Board", None, "Main", 5).unwrap_err();

        assert!(matches!(
            err,
            ParamMapError::DuplicateComponent { ref name, line: 5 } if name == "Main"
        ));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.roots().count(), 1);
    }

    #[test]
    fn test_duplicate_child_leaves_parent_untouched() {
        let mut tree = ComponentTree::new();
        let main = tree.declare("Board", None, "Main", 2).unwrap();
        tree.declare("Sensor", Some("Main"), "Temp", 3).unwrap();
        assert!(tree.declare("Sensor", Some("Main"), "Temp", 4).is_err());

        assert_eq!(tree.get(main).children.len(), 1);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_empty_parent_name_resolves_like_any_name() {
        let mut tree = ComponentTree::new();
        let unnamed = tree.declare("Board", None, "", 2).unwrap();
        let child = tree.declare("Sensor", Some(""), "X", 3).unwrap();

        assert_eq!(tree.get(child).parent, Some(unnamed));
        assert_eq!(tree.roots().count(), 1);
    }

    #[test]
    fn test_self_parent_becomes_root() {
        let mut tree = ComponentTree::new();
        let id = tree.declare("Board", Some("Loop"), "Loop", 2).unwrap();
        assert!(tree.get(id).is_root());
        assert!(tree.get(id).children.is_empty());
    }

    #[test]
    fn test_parameters_attach_to_component() {
        let mut tree = ComponentTree::new();
        let id = tree.declare("Sensor", None, "Temp", 2).unwrap();
        tree.add_parameter(id, Parameter::new("Value", "Float", "C"));
        tree.add_parameter(id, Parameter::new("Alarm", "Bool", ""));

        assert_eq!(tree.parameter_count(), 2);
        assert_eq!(tree.find("Temp").unwrap().parameters[1].name(), "Alarm");
        assert!(tree.find("Missing").is_none());
    }
}
