//! Typed representation of a decoded table row.

use crate::model::Parameter;

/// One data row of the parameter table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Component declared by this row, if the first column is non-empty
    pub declaration: Option<Declaration>,
    /// Parameter carried by this row
    pub parameter: Parameter,
}

/// The component-declaring columns of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Component type tag
    pub component_type: String,
    /// Parent name, `None` for the `None` marker
    pub parent: Option<String>,
    /// Component name
    pub name: String,
}

/// Column positions in a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ComponentType = 0,
    ParentName = 1,
    ComponentName = 2,
    ParameterName = 3,
    ParameterType = 4,
    EnumValues = 5,
    Unit = 6,
    LimitMin = 7,
    LimitMax = 8,
}

impl Column {
    /// Index of this column within the split row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::ComponentType => "component_type",
            Self::ParentName => "parent_name",
            Self::ComponentName => "component_name",
            Self::ParameterName => "parameter_name",
            Self::ParameterType => "parameter_type",
            Self::EnumValues => "enum_values",
            Self::Unit => "unit",
            Self::LimitMin => "limit_min",
            Self::LimitMax => "limit_max",
        }
    }
}
