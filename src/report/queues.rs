// Queue family properties

use super::format::queue_flags;
use super::schema::{unsigned, unsigned_array, FieldSpec, Node, Value};
use ash::vk;

pub const QUEUE_FAMILY_CLASS: &str = "QueueFamilyProperties";

pub static QUEUE_FAMILY: &[FieldSpec<vk::QueueFamilyProperties>] = &[
    FieldSpec { name: "queueFlags", label: "Queue flags", get: |q| Value::TextArray(queue_flags(q.queue_flags)) },
    FieldSpec { name: "queueCount", label: "Queue count", get: |q| unsigned(q.queue_count) },
    FieldSpec { name: "timestampValidBits", label: "Timestamp valid bits", get: |q| unsigned(q.timestamp_valid_bits) },
    FieldSpec {
        name: "minImageTransferGranularity",
        label: "Min image transfer granularity",
        get: |q| {
            let extent = q.min_image_transfer_granularity;
            unsigned_array(&[extent.width, extent.height, extent.depth])
        },
    },
];

pub fn queue_families_value(families: &[vk::QueueFamilyProperties]) -> Value {
    Value::ObjectArray {
        class: QUEUE_FAMILY_CLASS,
        items: families
            .iter()
            .map(|family| Node::from_schema(QUEUE_FAMILY_CLASS, QUEUE_FAMILY, family))
            .collect(),
    }
}
