// Vulkan Instance - connection to the loader
//
// Responsibilities:
// - Instance creation from app/engine names, extensions and layers
// - Physical device enumeration
// - Instance-level extension and layer queries
// - Destroying the handle exactly once

use super::error::BackendError;
use super::handle::Owned;
use super::{name_to_string, saturating_count};
use ash::{vk, Entry};
use std::ffi::{c_char, CString};

/// Khronos validation layer, enabled on request when the loader has it
pub const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// Everything needed to create an [`Instance`]
#[derive(Debug, Clone, Default)]
pub struct InstanceSettings {
    pub app_name: String,
    pub engine_name: String,
    pub extensions: Vec<String>,
    pub layers: Vec<String>,
}

impl InstanceSettings {
    pub fn new(app_name: impl Into<String>, engine_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            engine_name: engine_name.into(),
            ..Default::default()
        }
    }

    /// Append the validation layer if the loader reports it.
    pub fn request_validation(&mut self, entry: &Entry) {
        if self.layers.iter().any(|layer| layer == VALIDATION_LAYER) {
            return;
        }

        let available = enumerate_instance_layers(entry)
            .iter()
            .any(|layer| name_to_string(&layer.layer_name) == VALIDATION_LAYER);

        if available {
            log::debug!("Enabling {}", VALIDATION_LAYER);
            self.layers.push(VALIDATION_LAYER.to_string());
        } else {
            log::warn!("{} requested but not installed, continuing without it", VALIDATION_LAYER);
        }
    }
}

/// Vulkan instance wrapper with automatic cleanup
pub struct Instance {
    // Dropped before `entry` so the library is still loaded when we destroy
    handle: Owned<ash::Instance>,
    entry: Entry,
    app_name: String,
    engine_name: String,
}

impl Instance {
    /// Create a Vulkan instance
    ///
    /// # Arguments
    /// * `entry` - Loaded Vulkan library
    /// * `settings` - Names, extensions and layers to create the instance with
    pub fn new(entry: &Entry, settings: &InstanceSettings) -> Result<Self, BackendError> {
        log::info!(
            "Creating Vulkan instance: {} / {}",
            settings.app_name,
            settings.engine_name
        );

        let app_name_cstr = to_cstring(&settings.app_name)?;
        let engine_name_cstr = to_cstring(&settings.engine_name)?;
        let extension_names = to_cstrings(&settings.extensions)?;
        let layer_names = to_cstrings(&settings.layers)?;

        let extensions: Vec<*const c_char> = extension_names.iter().map(|n| n.as_ptr()).collect();
        let layers: Vec<*const c_char> = layer_names.iter().map(|n| n.as_ptr()).collect();
        log::debug!("Extensions: {:?}", settings.extensions);
        log::debug!("Layers: {:?}", settings.layers);

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name_cstr)
            .application_version(vk::make_api_version(0, 1, 0, 0))
            .engine_name(&engine_name_cstr)
            .engine_version(vk::make_api_version(0, 1, 0, 0))
            .api_version(vk::API_VERSION_1_0);

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extensions)
            .enabled_layer_names(&layers);

        let instance = unsafe { entry.create_instance(&create_info, None) }
            .map_err(BackendError::InstanceCreation)?;

        Ok(Self {
            handle: Owned::new(instance, destroy_instance),
            entry: entry.clone(),
            app_name: settings.app_name.clone(),
            engine_name: settings.engine_name.clone(),
        })
    }

    /// Raw handle, or None once destroyed
    pub fn handle(&self) -> Option<vk::Instance> {
        self.handle.get().map(|instance| instance.handle())
    }

    /// Function table of the live instance
    pub fn raw(&self) -> Result<&ash::Instance, BackendError> {
        self.handle.get().ok_or(BackendError::Destroyed)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    pub fn physical_device_count(&self) -> u32 {
        saturating_count(self.physical_devices().len())
    }

    /// Physical devices visible to this instance; empty if the instance is
    /// gone or enumeration fails
    pub fn physical_devices(&self) -> Vec<vk::PhysicalDevice> {
        let Some(instance) = self.handle.get() else {
            return Vec::new();
        };

        match unsafe { instance.enumerate_physical_devices() } {
            Ok(devices) => devices,
            Err(e) => {
                log::warn!("vkEnumeratePhysicalDevices failed: {}", e);
                Vec::new()
            }
        }
    }

    pub fn available_extension_count(&self) -> u32 {
        saturating_count(self.available_extensions().len())
    }

    pub fn available_extensions(&self) -> Vec<vk::ExtensionProperties> {
        enumerate_instance_extensions(&self.entry)
    }

    /// Extensions contributed by a single layer
    // ash 0.37 exposes the entry-level queries as safe functions
    #[allow(unused_unsafe)]
    pub fn layer_extensions(&self, layer: &str) -> Result<Vec<vk::ExtensionProperties>, BackendError> {
        let layer = to_cstring(layer)?;
        unsafe { self.entry.enumerate_instance_extension_properties(Some(&layer)) }
            .map_err(BackendError::Enumeration)
    }

    pub fn available_layer_count(&self) -> u32 {
        saturating_count(self.available_layers().len())
    }

    pub fn available_layers(&self) -> Vec<vk::LayerProperties> {
        enumerate_instance_layers(&self.entry)
    }

    /// Highest instance-level API version the loader supports
    #[allow(unused_unsafe)]
    pub fn loader_version(&self) -> u32 {
        match unsafe { self.entry.try_enumerate_instance_version() } {
            Ok(Some(version)) => version,
            // 1.0 loaders don't have vkEnumerateInstanceVersion
            Ok(None) => vk::API_VERSION_1_0,
            Err(e) => {
                log::warn!("vkEnumerateInstanceVersion failed: {}", e);
                vk::API_VERSION_1_0
            }
        }
    }

    /// Destroy the instance now. Safe to call more than once.
    pub fn destroy(&mut self) {
        if !self.handle.release() {
            log::debug!("Instance already destroyed");
        }
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("handle", &self.handle())
            .field("app_name", &self.app_name)
            .field("engine_name", &self.engine_name)
            .finish()
    }
}

fn destroy_instance(instance: ash::Instance) {
    log::debug!("Destroying Vulkan instance");
    unsafe { instance.destroy_instance(None) };
}

/// Instance extensions the loader and implicit layers expose
#[allow(unused_unsafe)]
pub fn enumerate_instance_extensions(entry: &Entry) -> Vec<vk::ExtensionProperties> {
    match unsafe { entry.enumerate_instance_extension_properties(None) } {
        Ok(extensions) => extensions,
        Err(e) => {
            log::warn!("vkEnumerateInstanceExtensionProperties failed: {}", e);
            Vec::new()
        }
    }
}

/// Layers installed on the system
#[allow(unused_unsafe)]
pub fn enumerate_instance_layers(entry: &Entry) -> Vec<vk::LayerProperties> {
    match unsafe { entry.enumerate_instance_layer_properties() } {
        Ok(layers) => layers,
        Err(e) => {
            log::warn!("vkEnumerateInstanceLayerProperties failed: {}", e);
            Vec::new()
        }
    }
}

fn to_cstring(name: &str) -> Result<CString, BackendError> {
    CString::new(name).map_err(|_| BackendError::InvalidName(name.to_string()))
}

fn to_cstrings(names: &[String]) -> Result<Vec<CString>, BackendError> {
    names.iter().map(|name| to_cstring(name)).collect()
}
