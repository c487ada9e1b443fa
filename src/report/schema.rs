// Report schema - host-neutral report tree
//
// Every capability struct is described by a static table of FieldSpecs
// (Java field name, display label, accessor). `Node::from_schema` walks a
// table once to produce a node; renderers (JNI, text, JSON) only ever see
// nodes, never the Vulkan structs.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Java package the report classes live in
pub const JAVA_PACKAGE: &str = "com/example/vulkaninfoapp";

/// One typed field value
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Unsigned(u64),
    Signed(i64),
    Float(f32),
    Bool(bool),
    Text(String),
    UnsignedArray(Vec<u64>),
    FloatArray(Vec<f32>),
    TextArray(Vec<String>),
    Object(Node),
    ObjectArray { class: &'static str, items: Vec<Node> },
}

impl Value {
    /// JNI type signature of the Java field holding this value
    pub fn jni_signature(&self) -> String {
        match self {
            Value::Int(_) => "I".to_string(),
            Value::Unsigned(_) | Value::Signed(_) => "J".to_string(),
            Value::Float(_) => "F".to_string(),
            Value::Bool(_) => "Z".to_string(),
            Value::Text(_) => "Ljava/lang/String;".to_string(),
            Value::UnsignedArray(_) => "[J".to_string(),
            Value::FloatArray(_) => "[F".to_string(),
            Value::TextArray(_) => "[Ljava/lang/String;".to_string(),
            Value::Object(node) => format!("L{};", java_class(node.class)),
            Value::ObjectArray { class, .. } => format!("[L{};", java_class(class)),
        }
    }
}

/// Fully qualified JNI class name for a report class
pub fn java_class(class: &str) -> String {
    format!("{}/{}", JAVA_PACKAGE, class)
}

/// A named, labelled value
///
/// Optional fields are extras the host class may not declare; the JNI walk
/// skips them when the class has no matching field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub value: Value,
    pub optional: bool,
}

/// One host object: a class name and its fields in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub class: &'static str,
    pub fields: Vec<Field>,
}

/// How to read one field out of `T`
pub struct FieldSpec<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub get: fn(&T) -> Value,
}

impl Node {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            fields: Vec::new(),
        }
    }

    /// Build a node by running every accessor in `schema` against `value`
    pub fn from_schema<T>(class: &'static str, schema: &[FieldSpec<T>], value: &T) -> Self {
        Self {
            class,
            fields: schema
                .iter()
                .map(|spec| Field {
                    name: spec.name,
                    label: spec.label,
                    value: (spec.get)(value),
                    optional: false,
                })
                .collect(),
        }
    }

    pub fn with(mut self, name: &'static str, label: &'static str, value: Value) -> Self {
        self.fields.push(Field { name, label, value, optional: false });
        self
    }

    pub fn with_optional(mut self, name: &'static str, label: &'static str, value: Value) -> Self {
        self.fields.push(Field { name, label, value, optional: true });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            match &field.value {
                // The element class is a JNI detail; JSON only needs the items
                Value::ObjectArray { items, .. } => map.serialize_entry(field.name, items)?,
                value => map.serialize_entry(field.name, value)?,
            }
        }
        map.end()
    }
}

// Shorthands for the schema tables

pub fn unsigned(value: impl Into<u64>) -> Value {
    Value::Unsigned(value.into())
}

pub fn signed(value: impl Into<i64>) -> Value {
    Value::Signed(value.into())
}

pub fn boolean(value: ash::vk::Bool32) -> Value {
    Value::Bool(value != ash::vk::FALSE)
}

pub fn unsigned_array(values: &[u32]) -> Value {
    Value::UnsignedArray(values.iter().map(|&v| v as u64).collect())
}
