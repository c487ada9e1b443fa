// Report module - capability snapshot of one physical device
//
// Responsibilities:
// - Collect every query result for the selected device into `VkInfo`
// - Turn `VkInfo` into a host-neutral `Node` tree (see `schema`)
// - Render that tree as indented text (`text`); JSON comes from serde

pub mod extensions;
pub mod features;
pub mod format;
pub mod memory;
pub mod properties;
pub mod queues;
pub mod schema;
pub mod text;

#[cfg(test)]
mod host_classes;

use crate::backend::{saturating_count, BackendError, CapabilitySource};
use ash::vk;
use schema::{Node, Value};
use thiserror::Error;

pub const VK_INFO_CLASS: &str = "VkInfo";
pub const INSTANCE_INFO_CLASS: &str = "InstanceInfo";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no Vulkan physical devices found")]
    NoPhysicalDevices,

    #[error("device index {index} out of range ({count} device(s) available)")]
    DeviceIndexOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Instance-level summary
#[derive(Debug, Clone)]
pub struct InstanceInfo {
    pub app_name: String,
    pub engine_name: String,
    pub num_devices: u32,
    pub loader_version: u32,
    pub extensions: Vec<vk::ExtensionProperties>,
    pub layers: Vec<vk::LayerProperties>,
}

impl InstanceInfo {
    /// `numDevices` is a Java `int`; the loader and list fields are extras
    /// the host class may leave out.
    pub fn to_node(&self) -> Node {
        Node::new(INSTANCE_INFO_CLASS)
            .with("appName", "Application name", Value::Text(self.app_name.clone()))
            .with("engineName", "Engine name", Value::Text(self.engine_name.clone()))
            .with(
                "numDevices",
                "Number of devices",
                Value::Int(i32::try_from(self.num_devices).unwrap_or(i32::MAX)),
            )
            .with_optional(
                "loaderVersion",
                "Loader version",
                Value::Text(format::version_string(self.loader_version)),
            )
            .with_optional("extensions", "Instance extensions", extensions::extensions_value(&self.extensions))
            .with_optional("layers", "Instance layers", extensions::layers_value(&self.layers))
    }
}

/// Everything reported about one physical device
#[derive(Debug, Clone)]
pub struct VkInfo {
    pub instance: InstanceInfo,
    pub device: vk::PhysicalDevice,
    pub device_index: usize,
    pub properties: vk::PhysicalDeviceProperties,
    pub features: vk::PhysicalDeviceFeatures,
    pub memory_properties: vk::PhysicalDeviceMemoryProperties,
    pub queue_families: Vec<vk::QueueFamilyProperties>,
    pub extensions: Vec<vk::ExtensionProperties>,
}

impl VkInfo {
    /// Query `source` for the device at `device_index`.
    ///
    /// Fails when there are no devices or the index is past the end; nothing
    /// is queried for a device that was not enumerated.
    pub fn collect<S: CapabilitySource + ?Sized>(source: &S, device_index: usize) -> Result<Self, ReportError> {
        let devices = source.physical_devices();
        if devices.is_empty() {
            return Err(ReportError::NoPhysicalDevices);
        }
        let device = *devices.get(device_index).ok_or(ReportError::DeviceIndexOutOfRange {
            index: device_index,
            count: devices.len(),
        })?;

        log::debug!("Collecting capabilities of device {} of {}", device_index, devices.len());

        let properties = source.properties(device);
        log::info!(
            "Selected device: {} ({})",
            crate::backend::name_to_string(&properties.device_name),
            format::device_type_name(properties.device_type)
        );

        Ok(Self {
            instance: InstanceInfo {
                app_name: source.app_name().to_string(),
                engine_name: source.engine_name().to_string(),
                num_devices: saturating_count(devices.len()),
                loader_version: source.loader_version(),
                extensions: source.instance_extensions(),
                layers: source.instance_layers(),
            },
            device,
            device_index,
            properties,
            features: source.features(device),
            memory_properties: source.memory_properties(device),
            queue_families: source.queue_family_properties(device),
            extensions: source.device_extensions(device),
        })
    }

    /// Deep copy into the report tree
    pub fn to_node(&self) -> Node {
        Node::new(VK_INFO_CLASS)
            .with("instanceInfo", "Instance Info", Value::Object(self.instance.to_node()))
            .with(
                "physicalDeviceProperties",
                "Physical Device Properties",
                Value::Object(properties::properties_node(&self.properties)),
            )
            .with(
                "physicalDeviceFeatures",
                "Physical Device Features",
                Value::Object(features::features_node(&self.features)),
            )
            .with(
                "physicalDeviceMemoryProperties",
                "Physical Device Memory Properties",
                Value::Object(memory::memory_properties_node(&self.memory_properties)),
            )
            .with_optional(
                "queueFamilyProperties",
                "Physical Device Queue Family Properties",
                queues::queue_families_value(&self.queue_families),
            )
            .with_optional(
                "deviceExtensions",
                "Device Extensions",
                extensions::extensions_value(&self.extensions),
            )
    }
}
