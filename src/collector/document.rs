//! NameNode JMX bean document model
//!
//! The `/jmx` servlet returns a JSON document shaped
//! `{"beans":[{"name":"...", ...}, ...]}`. Each array element becomes a
//! [`Bean`]: a loosely typed field map identified by its `name` field.
//! Parsing keeps malformed individual beans as-is; type checking is
//! deferred to extraction so one bad field cannot poison a cycle.

use serde_json::Value;

use crate::error::{ExtractError, ParseError};

/// One JMX status document, beans in source order
#[derive(Debug, Clone)]
pub struct BeanDocument {
    beans: Vec<Bean>,
}

impl BeanDocument {
    /// Parse raw bytes claimed to be a `{"beans":[...]}` document.
    ///
    /// # Errors
    /// Returns [`ParseError`] when the payload is not valid JSON or the
    /// top-level `beans` array is absent.
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        let root: Value = serde_json::from_slice(raw)?;

        let beans = match root.get("beans") {
            Some(Value::Array(items)) => items.iter().map(Bean::from_value).collect(),
            _ => return Err(ParseError::MissingBeans),
        };

        Ok(Self { beans })
    }

    /// Iterate beans in source order
    pub fn beans(&self) -> impl Iterator<Item = &Bean> {
        self.beans.iter()
    }

    /// Number of beans in the document
    pub fn len(&self) -> usize {
        self.beans.len()
    }

    /// Whether the document carries no beans at all
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }
}

/// A named attribute group within the status document.
///
/// Field values retain their JSON-native type; anything the exporter
/// does not consume (nested objects, arrays, null) is kept opaquely
/// and only rejected when a descriptor asks for it.
#[derive(Debug, Clone)]
pub struct Bean {
    fields: Vec<(String, FieldValue)>,
}

/// A single bean field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON number, always carried as f64 per the JMX servlet contract
    Number(f64),
    /// JSON string
    String(String),
    /// JSON boolean
    Bool(bool),
    /// Null, nested object, or array - never extractable
    Other,
}

impl Bean {
    fn from_value(value: &Value) -> Self {
        let fields = match value {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
                .collect(),
            // A non-object array element still becomes a bean; it just
            // has no fields and matches no selector.
            _ => Vec::new(),
        };
        Self { fields }
    }

    /// The bean's selector: its `name` field, when present and a string
    pub fn name(&self) -> Option<&str> {
        match self.get("name") {
            Some(FieldValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Raw field lookup
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| v)
    }

    /// Extract a numeric field.
    ///
    /// # Errors
    /// Returns [`ExtractError`] naming the field and this bean's
    /// selector when the field is absent or not a JSON number.
    pub fn number(&self, field: &str) -> Result<f64, ExtractError> {
        match self.get(field) {
            Some(FieldValue::Number(n)) => Ok(*n),
            Some(_) => Err(self.wrong_type(field, "number")),
            None => Err(self.missing(field)),
        }
    }

    /// Extract a string field.
    ///
    /// # Errors
    /// Returns [`ExtractError`] when the field is absent or not a string.
    pub fn string(&self, field: &str) -> Result<&str, ExtractError> {
        match self.get(field) {
            Some(FieldValue::String(s)) => Ok(s.as_str()),
            Some(_) => Err(self.wrong_type(field, "string")),
            None => Err(self.missing(field)),
        }
    }

    fn selector_for_error(&self) -> String {
        self.name().unwrap_or("<unnamed>").to_string()
    }

    fn missing(&self, field: &str) -> ExtractError {
        ExtractError::MissingField {
            field: field.to_string(),
            bean: self.selector_for_error(),
        }
    }

    fn wrong_type(&self, field: &str, expected: &'static str) -> ExtractError {
        ExtractError::WrongType {
            field: field.to_string(),
            bean: self.selector_for_error(),
            expected,
        }
    }
}

impl FieldValue {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => FieldValue::Number(f),
                None => FieldValue::Other,
            },
            Value::String(s) => FieldValue::String(s.clone()),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Null | Value::Array(_) | Value::Object(_) => FieldValue::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> BeanDocument {
        let json = br#"{
            "beans": [
                {
                    "name": "Hadoop:service=NameNode,name=FSNamesystemState",
                    "TotalLoad": 12.0,
                    "tag.HAState": "active",
                    "Safemode": false
                },
                {
                    "name": "java.lang:type=MemoryPool,name=Code Cache",
                    "Valid": true
                }
            ]
        }"#;
        BeanDocument::parse(json).unwrap()
    }

    #[test]
    fn test_parse_preserves_bean_order() {
        let doc = sample_doc();
        assert_eq!(doc.len(), 2);
        let names: Vec<_> = doc.beans().map(|b| b.name().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "Hadoop:service=NameNode,name=FSNamesystemState",
                "java.lang:type=MemoryPool,name=Code Cache"
            ]
        );
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = BeanDocument::parse(b"not json at all");
        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_rejects_missing_beans_array() {
        let result = BeanDocument::parse(br#"{"other": []}"#);
        assert!(matches!(result, Err(ParseError::MissingBeans)));

        let result = BeanDocument::parse(br#"{"beans": {"name": "x"}}"#);
        assert!(matches!(result, Err(ParseError::MissingBeans)));
    }

    #[test]
    fn test_parse_keeps_malformed_beans() {
        // A bean with no name and a nested value still parses; it only
        // fails later if a descriptor asks for one of its fields.
        let doc = BeanDocument::parse(br#"{"beans": [{"nested": {"x": 1}}, 42]}"#).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.beans().next().unwrap().name(), None);
    }

    #[test]
    fn test_number_extraction() {
        let doc = sample_doc();
        let bean = doc.beans().next().unwrap();
        assert_eq!(bean.number("TotalLoad").unwrap(), 12.0);
    }

    #[test]
    fn test_number_extraction_missing_field() {
        let doc = sample_doc();
        let bean = doc.beans().next().unwrap();
        let err = bean.number("MissingBlocks").unwrap_err();
        assert!(matches!(err, ExtractError::MissingField { .. }));
        assert!(err.to_string().contains("MissingBlocks"));
        assert!(err.to_string().contains("FSNamesystemState"));
    }

    #[test]
    fn test_number_extraction_wrong_type() {
        let doc = sample_doc();
        let bean = doc.beans().next().unwrap();
        let err = bean.number("tag.HAState").unwrap_err();
        assert!(matches!(err, ExtractError::WrongType { .. }));
    }

    #[test]
    fn test_string_extraction() {
        let doc = sample_doc();
        let bean = doc.beans().next().unwrap();
        assert_eq!(bean.string("tag.HAState").unwrap(), "active");
        assert!(bean.string("TotalLoad").is_err());
    }

    #[test]
    fn test_boolean_fields_are_preserved() {
        let doc = sample_doc();
        let bean = doc.beans().next().unwrap();
        assert_eq!(bean.get("Safemode"), Some(&FieldValue::Bool(false)));
        // But a boolean is neither a number nor a string for extraction.
        assert!(bean.number("Safemode").is_err());
        assert!(bean.string("Safemode").is_err());
    }
}
