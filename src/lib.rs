//! # Parammap Core
//!
//! Converts a flat parameter table into a nested parameter-map document.
//!
//! This library provides:
//! - A row decoder for the comma-separated parameter table
//! - An arena-backed component tree with name-based parent resolution
//! - Serialization of the tree into the parameter-map JSON layout
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`table`] - Header skipping, row decoding and the row-stream state machine
//! - [`model`] - Parameter and component value objects
//! - [`tree`] - Component arena and name registry
//! - [`serialize`] - Parameter-map document layout
//! - [`output`] - JSON rendering and file output
//! - [`convert`] - End-to-end conversion entry points
//!
//! ## Usage
//!
//! ```bash
//! csv2parammap parameters.csv parameter_map.json
//! ```
//!
//! ```rust
//! let table = "type,parent,name,param,ptype,enum,unit,min,max\n\
//!              Sensor,None,Temp,Value,Float,,C,-40,125\n";
//! let json = parammap_core::convert_str(table).unwrap();
//! assert!(json.contains("\"version\""));
//! ```
//!
//! ## Table Layout
//!
//! Every row after the header carries nine columns:
//!
//! ```text
//! component_type, parent_name, component_name,
//! parameter_name, parameter_type, enum_values, unit, limit_min, limit_max
//! ```
//!
//! A non-empty first column declares a new component and attaches the row's
//! parameter to it. An empty first column attaches the parameter to the most
//! recently declared component.

pub mod convert;
pub mod error;
pub mod model;
pub mod output;
pub mod serialize;
pub mod table;
pub mod tree;

// Re-export main types for convenience
pub use convert::{convert_file, convert_str, ConversionSummary};
pub use error::{ParamMapError, Result};
pub use model::{Component, ComponentId, Parameter};
pub use serialize::ParameterMap;
pub use tree::ComponentTree;

/// Version marker written as the first element of every parameter map.
pub const PARAMETER_MAP_VERSION: [u32; 3] = [0, 2, 0];

/// Parameter type tag whose `enum_values` column is expanded into fields.
pub const ENUM_TYPE_TAG: &str = "Enum";

/// Parent column value meaning "this component is a root".
pub const NO_PARENT_MARKER: &str = "None";

/// Number of columns in every table row.
pub const FIELD_COUNT: usize = 9;

/// Separator between values inside the bracketed enum column.
pub const ENUM_SEPARATOR: char = ';';

/// Indentation unit for one nesting level of the rendered JSON.
pub const OUTPUT_INDENT: &[u8] = b" ";
