use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One file joined with one group of its matches, keyed by field name.
///
/// Scalar file metadata sits next to arrays (and arrays of arrays) holding
/// the multi-value match data, e.g. several copyright statements each spanning
/// several lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlattenedRecord {
    fields: Map<String, Value>,
}

impl FlattenedRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builds a record from a JSON object; any other JSON value yields `None`
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Text leaves of a field, depth-first; null and missing fields have none
    pub fn leaf_texts(&self, field: &str) -> Vec<String> {
        let mut texts = Vec::new();
        if let Some(value) = self.get(field) {
            collect_leaf_texts(value, &mut texts);
        }
        texts
    }
}

/// Appends the display text of every scalar inside `value`
pub fn collect_leaf_texts(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(n.to_string()),
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => {
            for item in items {
                collect_leaf_texts(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_leaf_texts(item, out);
            }
        }
    }
}
