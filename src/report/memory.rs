// Physical device memory properties
//
// Only the first memoryTypeCount / memoryHeapCount entries of the fixed
// arrays are meaningful; the rest are left out of the report.

use super::format::memory_property_flags;
use super::schema::{unsigned, FieldSpec, Node, Value};
use crate::backend::physical_device::memory_heap_flags;
use ash::vk;

pub const MEMORY_PROPERTIES_CLASS: &str = "PhysicalDeviceMemoryProperties";
pub const MEMORY_TYPE_CLASS: &str = "MemoryType";
pub const MEMORY_HEAP_CLASS: &str = "MemoryHeap";

pub static MEMORY_PROPERTIES: &[FieldSpec<vk::PhysicalDeviceMemoryProperties>] = &[
    FieldSpec { name: "memoryTypeCount", label: "Memory type count", get: |m| unsigned(m.memory_type_count) },
    FieldSpec {
        name: "memoryTypes",
        label: "Memory types",
        get: |m| Value::ObjectArray {
            class: MEMORY_TYPE_CLASS,
            items: memory_types(m).iter().map(memory_type_node).collect(),
        },
    },
    FieldSpec { name: "memoryHeapCount", label: "Memory heap count", get: |m| unsigned(m.memory_heap_count) },
    FieldSpec {
        name: "memoryHeaps",
        label: "Memory heaps",
        get: |m| Value::ObjectArray {
            class: MEMORY_HEAP_CLASS,
            items: memory_heaps(m).iter().map(memory_heap_node).collect(),
        },
    },
];

pub static MEMORY_TYPE: &[FieldSpec<vk::MemoryType>] = &[
    FieldSpec { name: "propertyFlags", label: "Property flags", get: |t| Value::TextArray(memory_property_flags(t.property_flags)) },
    FieldSpec { name: "heapIndex", label: "Heap index", get: |t| unsigned(t.heap_index) },
];

pub static MEMORY_HEAP: &[FieldSpec<vk::MemoryHeap>] = &[
    FieldSpec { name: "size", label: "Size", get: |h| unsigned(h.size) },
    FieldSpec { name: "flags", label: "Flags", get: |h| Value::TextArray(memory_heap_flags(h.flags)) },
];

/// The populated prefix of `memory_types`
pub fn memory_types(memory: &vk::PhysicalDeviceMemoryProperties) -> &[vk::MemoryType] {
    let count = (memory.memory_type_count as usize).min(memory.memory_types.len());
    &memory.memory_types[..count]
}

/// The populated prefix of `memory_heaps`
pub fn memory_heaps(memory: &vk::PhysicalDeviceMemoryProperties) -> &[vk::MemoryHeap] {
    let count = (memory.memory_heap_count as usize).min(memory.memory_heaps.len());
    &memory.memory_heaps[..count]
}

pub fn memory_properties_node(memory: &vk::PhysicalDeviceMemoryProperties) -> Node {
    Node::from_schema(MEMORY_PROPERTIES_CLASS, MEMORY_PROPERTIES, memory)
}

fn memory_type_node(memory_type: &vk::MemoryType) -> Node {
    Node::from_schema(MEMORY_TYPE_CLASS, MEMORY_TYPE, memory_type)
}

fn memory_heap_node(heap: &vk::MemoryHeap) -> Node {
    Node::from_schema(MEMORY_HEAP_CLASS, MEMORY_HEAP, heap)
}
