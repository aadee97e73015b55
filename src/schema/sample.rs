//! Representative sample values for declared types.

use std::collections::HashSet;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::registry::TypeRegistry;
use super::types::TypeExpr;

pub const SAMPLE_STRING: &str = "SampleString";
pub const SAMPLE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";
pub const SAMPLE_UNKNOWN: &str = "SampleValue";

const INTEGER_TYPES: &[&str] = &[
    "int", "long", "short", "byte", "sbyte", "uint", "ulong", "ushort", "Int16", "Int32", "Int64",
    "UInt16", "UInt32", "UInt64", "Byte", "SByte",
];
const FLOAT_TYPES: &[&str] = &["float", "double", "decimal", "Single", "Double", "Decimal"];
const TEXT_TYPES: &[&str] = &["string", "String", "char", "Char"];
const BOOL_TYPES: &[&str] = &["bool", "Boolean"];
const DATE_TYPES: &[&str] = &["DateTime", "DateTimeOffset"];

const LIST_TYPES: &[&str] = &[
    "List",
    "IList",
    "IEnumerable",
    "ICollection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "Collection",
    "ObservableCollection",
    "HashSet",
    "ISet",
];
const MAP_TYPES: &[&str] = &[
    "Dictionary",
    "IDictionary",
    "IReadOnlyDictionary",
    "SortedDictionary",
    "ConcurrentDictionary",
];

/// Dynamically shaped sample mirroring a declared type
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<SampleValue>),
    /// Ordered key/value pairs
    Object(Vec<(String, SampleValue)>),
}

impl SampleValue {
    pub fn text(value: impl Into<String>) -> Self {
        SampleValue::Text(value.into())
    }

    /// Looks up a key of an object value
    pub fn get(&self, key: &str) -> Option<&SampleValue> {
        match self {
            SampleValue::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[SampleValue]> {
        match self {
            SampleValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, SampleValue)]> {
        match self {
            SampleValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Text used when this value appears as an object key
    pub fn to_key(&self) -> String {
        match self {
            SampleValue::Text(s) => s.clone(),
            SampleValue::Integer(n) => n.to_string(),
            SampleValue::Float(f) => serde_json::Value::from(*f).to_string(),
            SampleValue::Bool(b) => b.to_string(),
            other => serde_json::to_string(other).unwrap_or_default(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for SampleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SampleValue::Integer(n) => serializer.serialize_i64(*n),
            SampleValue::Float(f) => serializer.serialize_f64(*f),
            SampleValue::Bool(b) => serializer.serialize_bool(*b),
            SampleValue::Text(s) => serializer.serialize_str(s),
            SampleValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            SampleValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Produces sample values for declared types against a type registry
pub struct SampleGenerator<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> SampleGenerator<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Sample for a declared type, starting with an empty path
    pub fn generate(&self, declared_type: &str) -> SampleValue {
        self.generate_with(declared_type, &mut HashSet::new())
    }

    /// Sample for a declared type, given the classes already being expanded on this path
    pub fn generate_with(&self, declared_type: &str, visited: &mut HashSet<String>) -> SampleValue {
        match TypeExpr::parse(declared_type) {
            Some(expr) => self.sample(&expr, visited),
            None => SampleValue::text(SAMPLE_UNKNOWN),
        }
    }

    fn sample(&self, expr: &TypeExpr, visited: &mut HashSet<String>) -> SampleValue {
        if let Some(element) = expr.element() {
            return SampleValue::List(vec![self.sample(&element, visited)]);
        }

        let name = expr.base_name();

        if name == "Nullable" && expr.args.len() == 1 {
            return self.sample(&expr.args[0], visited);
        }

        if expr.args.is_empty() {
            if let Some(value) = primitive_sample(name) {
                return value;
            }
        }

        if LIST_TYPES.contains(&name) && expr.args.len() == 1 {
            return SampleValue::List(vec![self.sample(&expr.args[0], visited)]);
        }

        if MAP_TYPES.contains(&name) && expr.args.len() == 2 {
            let key = self.sample(&expr.args[0], visited).to_key();
            let value = self.sample(&expr.args[1], visited);
            return SampleValue::Object(vec![(key, value)]);
        }

        if let Some(class) = self.registry.get(name) {
            if visited.contains(name) {
                return SampleValue::Object(Vec::new());
            }
            visited.insert(name.to_string());
            let mut entries: Vec<(String, SampleValue)> = Vec::with_capacity(class.len());
            for property in &class.properties {
                let value = self.generate_with(&property.declared_type, visited);
                match entries.iter_mut().find(|(key, _)| *key == property.serialized_name) {
                    Some(entry) => {
                        tracing::debug!(
                            "Duplicate key '{}' in {}, keeping the last value",
                            property.serialized_name,
                            name
                        );
                        entry.1 = value;
                    }
                    None => entries.push((property.serialized_name.clone(), value)),
                }
            }
            visited.remove(name);
            return SampleValue::Object(entries);
        }

        SampleValue::text(SAMPLE_UNKNOWN)
    }
}

fn primitive_sample(name: &str) -> Option<SampleValue> {
    if INTEGER_TYPES.contains(&name) {
        Some(SampleValue::Integer(0))
    } else if FLOAT_TYPES.contains(&name) {
        Some(SampleValue::Float(0.0))
    } else if TEXT_TYPES.contains(&name) {
        Some(SampleValue::text(SAMPLE_STRING))
    } else if BOOL_TYPES.contains(&name) {
        Some(SampleValue::Bool(true))
    } else if DATE_TYPES.contains(&name) {
        Some(SampleValue::text(SAMPLE_TIMESTAMP))
    } else {
        None
    }
}
