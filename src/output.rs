//! JSON rendering and file output.
//!
//! The parameter map is written with one space of indentation per nesting
//! level. The destination is overwritten in place; a failure part-way through
//! the write can leave a truncated file behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{ParamMapError, Result};
use crate::serialize::ParameterMap;
use crate::OUTPUT_INDENT;

/// Render a parameter map as indented JSON text.
pub fn to_json_string(map: &ParameterMap<'_>) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(&mut buffer, map)?;
    String::from_utf8(buffer).map_err(|e| ParamMapError::Serialize(serde::ser::Error::custom(e)))
}

/// Write a parameter map as indented JSON to any writer.
pub fn write_json<W: Write>(writer: W, map: &ParameterMap<'_>) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(OUTPUT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    map.serialize(&mut serializer)?;
    Ok(())
}

/// Write a parameter map to a file, replacing any existing content.
pub fn write_file(path: &Path, map: &ParameterMap<'_>) -> Result<()> {
    let write_error = |e: std::io::Error| ParamMapError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, map)?;
    writer.flush().map_err(write_error)
}
