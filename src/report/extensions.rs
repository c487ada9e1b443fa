// Extensions and layers

use super::format::version_string;
use super::schema::{unsigned, FieldSpec, Node, Value};
use crate::backend::name_to_string;
use ash::vk;

pub const EXTENSION_CLASS: &str = "ExtensionProperties";
pub const LAYER_CLASS: &str = "LayerProperties";

pub static EXTENSION: &[FieldSpec<vk::ExtensionProperties>] = &[
    FieldSpec { name: "extensionName", label: "Extension name", get: |e| Value::Text(name_to_string(&e.extension_name)) },
    FieldSpec { name: "specVersion", label: "Spec version", get: |e| unsigned(e.spec_version) },
];

pub static LAYER: &[FieldSpec<vk::LayerProperties>] = &[
    FieldSpec { name: "layerName", label: "Layer name", get: |l| Value::Text(name_to_string(&l.layer_name)) },
    FieldSpec { name: "specVersion", label: "Spec version", get: |l| Value::Text(version_string(l.spec_version)) },
    FieldSpec { name: "implementationVersion", label: "Implementation version", get: |l| unsigned(l.implementation_version) },
    FieldSpec { name: "description", label: "Description", get: |l| Value::Text(name_to_string(&l.description)) },
];

pub fn extensions_value(extensions: &[vk::ExtensionProperties]) -> Value {
    Value::ObjectArray {
        class: EXTENSION_CLASS,
        items: extensions
            .iter()
            .map(|extension| Node::from_schema(EXTENSION_CLASS, EXTENSION, extension))
            .collect(),
    }
}

pub fn layers_value(layers: &[vk::LayerProperties]) -> Value {
    Value::ObjectArray {
        class: LAYER_CLASS,
        items: layers
            .iter()
            .map(|layer| Node::from_schema(LAYER_CLASS, LAYER, layer))
            .collect(),
    }
}
