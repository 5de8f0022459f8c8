//! Parser for the comma-separated parameter table.
//!
//! The table is line-oriented. The first line is a header and is always
//! discarded. Every following line holds nine positional columns:
//!
//! ```text
//! row         = declaration ',' parameter
//!             | ',' ',' ',' parameter
//! declaration = component_type ',' parent_name ',' component_name
//! parameter   = parameter_name ',' parameter_type ',' enum_values ','
//!               unit ',' limit_min ',' limit_max
//!
//! parent_name = "None" | name
//! enum_values = '[' value { ';' value } ']'      (only for type "Enum")
//! limit_min   = [ number ]
//! limit_max   = [ number ]
//! ```
//!
//! Commas cannot be escaped. A blank line is a row with too few columns.
//!
//! # Columns
//!
//! | Column | Description |
//! |--------|-------------|
//! | component_type | Type tag of a new component; empty to continue the previous one |
//! | parent_name | Name of an earlier component, or `None` for a root |
//! | component_name | Unique name of the new component |
//! | parameter_name | Parameter name |
//! | parameter_type | Parameter type tag, e.g. `Float`, `Int`, `Enum` |
//! | enum_values | Bracketed `;`-separated choices for `Enum` parameters |
//! | unit | Unit text, may be empty |
//! | limit_min | Optional lower bound |
//! | limit_max | Optional upper bound |
//!
//! # Example
//!
//! ```text
//! component_type,parent,name,parameter,type,enum,unit,min,max
//! Sensor,None,Temp,Value,Float,,C,-40,125
//! ,,,Alarm,Enum,[Low;High],,,
//! ```

mod decoder;
mod parser;
mod row;

pub use decoder::{decode_line, parse_enum_values, parse_limit};
pub use parser::Parser;
pub use row::{Column, Declaration, Row};

use std::path::Path;

use crate::error::{ParamMapError, Result};
use crate::tree::ComponentTree;

/// Parse a parameter table string into a component tree.
pub fn parse(input: &str) -> Result<ComponentTree> {
    Parser::new(input).parse()
}

/// Parse a parameter table file.
pub fn parse_file(path: &Path) -> Result<ComponentTree> {
    let content = std::fs::read_to_string(path).map_err(|e| ParamMapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
