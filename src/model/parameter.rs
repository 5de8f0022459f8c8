//! Parameter descriptor.

use serde::Serialize;

/// A named value descriptor attached to a component.
///
/// Serializes directly into the parameter-map layout: `name`, `type`,
/// `length` and `unit` are always present, `fields`, `limit_min` and
/// `limit_max` only when set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    parameter_type: String,
    length: usize,
    unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_max: Option<f64>,
}

impl Parameter {
    /// Create a scalar parameter with no enumerated fields and no limits.
    pub fn new(
        name: impl Into<String>,
        parameter_type: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parameter_type: parameter_type.into(),
            length: 1,
            unit: unit.into(),
            fields: None,
            limit_min: None,
            limit_max: None,
        }
    }

    /// Attach an enumerated field list. The length becomes the field count.
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.length = fields.len();
        self.fields = Some(fields);
        self
    }

    /// Attach optional numeric bounds.
    pub fn with_limits(mut self, limit_min: Option<f64>, limit_max: Option<f64>) -> Self {
        self.limit_min = limit_min;
        self.limit_max = limit_max;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_type(&self) -> &str {
        &self.parameter_type
    }

    /// Number of values: 1 for scalars, the field count for enumerations.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    pub fn limit_min(&self) -> Option<f64> {
        self.limit_min
    }

    pub fn limit_max(&self) -> Option<f64> {
        self.limit_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_parameter_omits_optional_keys() {
        let p = Parameter::new("Gain", "Float", "dB");
        assert_eq!(p.length(), 1);
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({"name": "Gain", "type": "Float", "length": 1, "unit": "dB"})
        );
    }

    #[test]
    fn test_enum_parameter_length_follows_fields() {
        let p = Parameter::new("Mode", "Enum", "")
            .with_fields(vec!["Off".to_string(), "On".to_string()]);
        assert_eq!(p.length(), 2);
        assert_eq!(p.fields(), Some(&["Off".to_string(), "On".to_string()][..]));
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({
                "name": "Mode",
                "type": "Enum",
                "length": 2,
                "unit": "",
                "fields": ["Off", "On"]
            })
        );
    }

    #[test]
    fn test_single_limit_is_emitted_alone() {
        let p = Parameter::new("Level", "Int", "").with_limits(None, Some(10.0));
        let value = serde_json::to_value(&p).unwrap();
        assert!(value.get("limit_min").is_none());
        assert_eq!(value["limit_max"], json!(10.0));
    }

    #[test]
    fn test_key_order_matches_layout() {
        let p = Parameter::new("V", "Float", "C").with_limits(Some(-40.0), Some(125.0));
        let text = serde_json::to_string(&p).unwrap();
        assert_eq!(
            text,
            r#"{"name":"V","type":"Float","length":1,"unit":"C","limit_min":-40.0,"limit_max":125.0}"#
        );
    }
}
