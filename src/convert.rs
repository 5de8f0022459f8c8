//! End-to-end conversion from parameter table to parameter map.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::output;
use crate::serialize::ParameterMap;
use crate::table;
use crate::tree::ComponentTree;

/// Counts describing a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    /// Components declared in the table
    pub components: usize,
    /// Components written at the top level
    pub roots: usize,
    /// Parameters across all components
    pub parameters: usize,
}

impl ConversionSummary {
    /// Summarize a component tree.
    pub fn of(tree: &ComponentTree) -> Self {
        Self {
            components: tree.len(),
            roots: tree.roots().count(),
            parameters: tree.parameter_count(),
        }
    }
}

/// Convert table text into parameter-map JSON text.
pub fn convert_str(input: &str) -> Result<String> {
    let tree = table::parse(input)?;
    output::to_json_string(&ParameterMap::new(&tree))
}

/// Convert a table file into a parameter-map file.
///
/// Nothing is written when the table fails to parse.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary> {
    info!(input = %input.display(), "reading parameter table");
    let tree = table::parse_file(input)?;
    let summary = ConversionSummary::of(&tree);

    output::write_file(output, &ParameterMap::new(&tree))?;
    info!(
        output = %output.display(),
        components = summary.components,
        roots = summary.roots,
        parameters = summary.parameters,
        "wrote parameter map"
    );

    Ok(summary)
}
