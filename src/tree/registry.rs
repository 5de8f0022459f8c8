//! Name to handle lookup used for parent resolution.

use std::collections::HashMap;

use crate::model::ComponentId;

/// Append-only mapping from component name to arena handle.
#[derive(Debug, Default)]
pub struct Registry {
    by_name: HashMap<String, ComponentId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name. Returns the existing handle if the name is taken,
    /// leaving the registry unchanged.
    pub fn insert(&mut self, name: &str, id: ComponentId) -> Option<ComponentId> {
        if let Some(&existing) = self.by_name.get(name) {
            return Some(existing);
        }
        self.by_name.insert(name.to_string(), id);
        None
    }

    pub fn get(&self, name: &str) -> Option<ComponentId> {
        self.by_name.get(name).copied()
    }
}
