//! Single-line decoder for the parameter table.

use super::row::{Column, Declaration, Row};
use crate::error::{ParamMapError, Result};
use crate::model::Parameter;
use crate::{ENUM_SEPARATOR, ENUM_TYPE_TAG, FIELD_COUNT, NO_PARENT_MARKER};

/// Decode one data line (without its terminator) into a typed row.
pub fn decode_line(line: usize, text: &str) -> Result<Row> {
    let fields = split_fields(line, text)?;
    let field = |column: Column| fields[column.index()];

    let declaration = if field(Column::ComponentType).is_empty() {
        None
    } else {
        let parent = match field(Column::ParentName) {
            NO_PARENT_MARKER => None,
            name => Some(name.to_string()),
        };
        Some(Declaration {
            component_type: field(Column::ComponentType).to_string(),
            parent,
            name: field(Column::ComponentName).to_string(),
        })
    };

    let parameter_type = field(Column::ParameterType);
    let mut parameter = Parameter::new(
        field(Column::ParameterName),
        parameter_type,
        field(Column::Unit),
    )
    .with_limits(
        parse_limit(line, Column::LimitMin, field(Column::LimitMin))?,
        parse_limit(line, Column::LimitMax, field(Column::LimitMax))?,
    );

    if parameter_type == ENUM_TYPE_TAG {
        parameter = parameter.with_fields(parse_enum_values(field(Column::EnumValues)));
    }

    Ok(Row {
        declaration,
        parameter,
    })
}

/// Split a line on commas, checking the column count.
///
/// Extra trailing columns are accepted only when they are all empty.
fn split_fields(line: usize, text: &str) -> Result<Vec<&str>> {
    let fields: Vec<&str> = text.split(',').collect();

    if fields.len() < FIELD_COUNT
        || fields[FIELD_COUNT..].iter().any(|f| !f.trim().is_empty())
    {
        return Err(ParamMapError::field_count(line, FIELD_COUNT, fields.len()));
    }

    Ok(fields)
}

/// Parse an optional numeric limit column.
pub fn parse_limit(line: usize, column: Column, text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ParamMapError::invalid_limit(line, column.name(), text)),
    }
}

/// Split a bracketed enum list such as `[Low;High]` into its values.
pub fn parse_enum_values(text: &str) -> Vec<String> {
    let inner = text.strip_prefix('[').unwrap_or(text);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner.split(ENUM_SEPARATOR).map(str::to_string).collect()
}
