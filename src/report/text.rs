// Plain-text rendering of a report tree
//
// Scalars print as `label: value`; objects and object arrays open a group
// whose contents are indented two more spaces.

use super::schema::{Node, Value};
use std::fmt::Write;

const INDENT: usize = 2;

pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    for field in &node.fields {
        let pad = " ".repeat(depth * INDENT);
        match &field.value {
            Value::Object(child) => {
                let _ = writeln!(out, "{}{}:", pad, field.label);
                write_node(out, child, depth + 1);
            }
            Value::ObjectArray { items, .. } if items.is_empty() => {
                let _ = writeln!(out, "{}{}: none", pad, field.label);
            }
            Value::ObjectArray { items, .. } => {
                let _ = writeln!(out, "{}{}:", pad, field.label);
                for (index, item) in items.iter().enumerate() {
                    let _ = writeln!(out, "{}[{}]", " ".repeat((depth + 1) * INDENT), index);
                    write_node(out, item, depth + 2);
                }
            }
            scalar => {
                let _ = writeln!(out, "{}{}: {}", pad, field.label, scalar_text(scalar));
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Int(v) => v.to_string(),
        Value::Unsigned(v) => v.to_string(),
        Value::Signed(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Text(v) => v.clone(),
        Value::UnsignedArray(values) => list(values),
        Value::FloatArray(values) => list(values),
        Value::TextArray(values) if values.is_empty() => "none".to_string(),
        Value::TextArray(values) => values.join(", "),
        Value::Object(_) | Value::ObjectArray { .. } => String::new(),
    }
}

fn list<T: ToString>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_groups_are_indented() {
        let node = Node::new("Root")
            .with("name", "Name", Value::Text("Adreno".into()))
            .with(
                "limits",
                "Limits",
                Value::Object(
                    Node::new("Limits")
                        .with("maxViewports", "Max viewports", Value::Unsigned(16))
                        .with("pointSizeRange", "Point size range", Value::FloatArray(vec![1.0, 1024.0])),
                ),
            )
            .with(
                "heaps",
                "Heaps",
                Value::ObjectArray {
                    class: "Heap",
                    items: vec![Node::new("Heap").with("flags", "Flags", Value::TextArray(vec![]))],
                },
            );

        let expected = "\
Name: Adreno
Limits:
  Max viewports: 16
  Point size range: [1, 1024]
Heaps:
  [0]
    Flags: none
";
        assert_eq!(render(&node), expected);
    }

    #[test]
    fn empty_object_arrays_say_none() {
        let node = Node::new("Root").with(
            "deviceExtensions",
            "Device Extensions",
            Value::ObjectArray { class: "ExtensionProperties", items: vec![] },
        );
        assert_eq!(render(&node), "Device Extensions: none\n");
    }

    #[test]
    fn flag_lists_are_comma_separated() {
        let node = Node::new("Root").with(
            "queueFlags",
            "Queue flags",
            Value::TextArray(vec!["Graphics".into(), "Compute".into()]),
        );
        assert_eq!(render(&node), "Queue flags: Graphics, Compute\n");
    }
}
