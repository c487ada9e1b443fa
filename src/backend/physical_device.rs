// Physical device queries
//
// Free functions over a physical device handle. Each is a single call into
// the driver; a null handle returns the zero-valued struct or an empty list.

use ash::vk;

pub fn properties(instance: &ash::Instance, device: vk::PhysicalDevice) -> vk::PhysicalDeviceProperties {
    if device == vk::PhysicalDevice::null() {
        return vk::PhysicalDeviceProperties::default();
    }
    unsafe { instance.get_physical_device_properties(device) }
}

pub fn features(instance: &ash::Instance, device: vk::PhysicalDevice) -> vk::PhysicalDeviceFeatures {
    if device == vk::PhysicalDevice::null() {
        return vk::PhysicalDeviceFeatures::default();
    }
    unsafe { instance.get_physical_device_features(device) }
}

pub fn memory_properties(
    instance: &ash::Instance,
    device: vk::PhysicalDevice,
) -> vk::PhysicalDeviceMemoryProperties {
    if device == vk::PhysicalDevice::null() {
        return vk::PhysicalDeviceMemoryProperties::default();
    }
    unsafe { instance.get_physical_device_memory_properties(device) }
}

/// Queue families, in family-index order
pub fn queue_family_properties(
    instance: &ash::Instance,
    device: vk::PhysicalDevice,
) -> Vec<vk::QueueFamilyProperties> {
    if device == vk::PhysicalDevice::null() {
        return Vec::new();
    }
    unsafe { instance.get_physical_device_queue_family_properties(device) }
}

/// Device-level extensions the driver advertises
pub fn device_extensions(instance: &ash::Instance, device: vk::PhysicalDevice) -> Vec<vk::ExtensionProperties> {
    if device == vk::PhysicalDevice::null() {
        return Vec::new();
    }
    match unsafe { instance.enumerate_device_extension_properties(device) } {
        Ok(extensions) => extensions,
        Err(e) => {
            log::warn!("vkEnumerateDeviceExtensionProperties failed: {}", e);
            Vec::new()
        }
    }
}

/// Human-readable names of the bits set in a memory heap's flags
pub fn memory_heap_flags(flags: vk::MemoryHeapFlags) -> Vec<String> {
    crate::report::format::flag_names(flags.as_raw(), crate::report::format::MEMORY_HEAP_FLAGS)
}
