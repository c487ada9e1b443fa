// Backend module - Vulkan abstraction layer
//
// Design: Thin wrapper around ash. The instance owns the only resource;
// device queries are plain functions over handles.

pub mod error;
pub mod handle;
pub mod instance;
pub mod physical_device;

pub use error::BackendError;
pub use instance::{Instance, InstanceSettings};

use ash::vk;
use std::ffi::c_char;

/// Everything the report needs from a Vulkan instance.
///
/// Implemented by [`Instance`]; tests substitute an in-memory source.
pub trait CapabilitySource {
    fn app_name(&self) -> &str;
    fn engine_name(&self) -> &str;
    fn loader_version(&self) -> u32;
    fn physical_devices(&self) -> Vec<vk::PhysicalDevice>;
    fn instance_extensions(&self) -> Vec<vk::ExtensionProperties>;
    fn instance_layers(&self) -> Vec<vk::LayerProperties>;

    fn properties(&self, device: vk::PhysicalDevice) -> vk::PhysicalDeviceProperties;
    fn features(&self, device: vk::PhysicalDevice) -> vk::PhysicalDeviceFeatures;
    fn memory_properties(&self, device: vk::PhysicalDevice) -> vk::PhysicalDeviceMemoryProperties;
    fn queue_family_properties(&self, device: vk::PhysicalDevice) -> Vec<vk::QueueFamilyProperties>;
    fn device_extensions(&self, device: vk::PhysicalDevice) -> Vec<vk::ExtensionProperties>;
}

impl CapabilitySource for Instance {
    fn app_name(&self) -> &str {
        Instance::app_name(self)
    }

    fn engine_name(&self) -> &str {
        Instance::engine_name(self)
    }

    fn loader_version(&self) -> u32 {
        Instance::loader_version(self)
    }

    fn physical_devices(&self) -> Vec<vk::PhysicalDevice> {
        Instance::physical_devices(self)
    }

    fn instance_extensions(&self) -> Vec<vk::ExtensionProperties> {
        self.available_extensions()
    }

    fn instance_layers(&self) -> Vec<vk::LayerProperties> {
        self.available_layers()
    }

    fn properties(&self, device: vk::PhysicalDevice) -> vk::PhysicalDeviceProperties {
        self.raw()
            .map(|instance| physical_device::properties(instance, device))
            .unwrap_or_default()
    }

    fn features(&self, device: vk::PhysicalDevice) -> vk::PhysicalDeviceFeatures {
        self.raw()
            .map(|instance| physical_device::features(instance, device))
            .unwrap_or_default()
    }

    fn memory_properties(&self, device: vk::PhysicalDevice) -> vk::PhysicalDeviceMemoryProperties {
        self.raw()
            .map(|instance| physical_device::memory_properties(instance, device))
            .unwrap_or_default()
    }

    fn queue_family_properties(&self, device: vk::PhysicalDevice) -> Vec<vk::QueueFamilyProperties> {
        self.raw()
            .map(|instance| physical_device::queue_family_properties(instance, device))
            .unwrap_or_default()
    }

    fn device_extensions(&self, device: vk::PhysicalDevice) -> Vec<vk::ExtensionProperties> {
        self.raw()
            .map(|instance| physical_device::device_extensions(instance, device))
            .unwrap_or_default()
    }
}

/// Read a fixed-size, NUL-terminated Vulkan name array.
///
/// Stops at the first NUL (or the end of the array if there is none) and
/// replaces invalid UTF-8.
pub fn name_to_string(chars: &[c_char]) -> String {
    let bytes: Vec<u8> = chars
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Vulkan counts are `u32`; clamp rather than wrap
pub fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Fill a Vulkan name array from a string; used to build fixtures.
pub fn string_to_name<const N: usize>(name: &str) -> [c_char; N] {
    let mut chars = [0 as c_char; N];
    for (slot, byte) in chars.iter_mut().zip(name.bytes().take(N.saturating_sub(1))) {
        *slot = byte as c_char;
    }
    chars
}
