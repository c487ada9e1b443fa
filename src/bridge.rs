// Bridge - one call, one instance, one report
//
// Loads the Vulkan library, creates an instance, collects the report and
// tears everything down again before returning. Any failure along the way
// is logged and turns into an absent report.

use crate::backend::{BackendError, Instance, InstanceSettings};
use crate::report::{ReportError, VkInfo};
use ash::Entry;

/// Load the Vulkan library from the platform's default location
pub fn load_entry() -> Result<Entry, BackendError> {
    let entry = unsafe { Entry::load() }?;
    log::debug!("Vulkan library loaded");
    Ok(entry)
}

/// Capability report for the device at `device_index`, or None if any step
/// fails.
pub fn query_vk_info(settings: &InstanceSettings, device_index: usize, validation: bool) -> Option<VkInfo> {
    match try_query_vk_info(settings, device_index, validation) {
        Ok(info) => Some(info),
        Err(e) => {
            log::error!("Vulkan info unavailable: {}", e);
            None
        }
    }
}

pub fn try_query_vk_info(
    settings: &InstanceSettings,
    device_index: usize,
    validation: bool,
) -> Result<VkInfo, ReportError> {
    let entry = load_entry()?;

    let mut settings = settings.clone();
    if validation {
        settings.request_validation(&entry);
    }

    let mut instance = Instance::new(&entry, &settings)?;
    log::debug!(
        "Instance {:?}: {} device(s), {} extension(s), {} layer(s)",
        instance.handle(),
        instance.physical_device_count(),
        instance.available_extension_count(),
        instance.available_layer_count()
    );
    for layer in &settings.layers {
        match instance.layer_extensions(layer) {
            Ok(extensions) => log::debug!("{} provides {} extension(s)", layer, extensions.len()),
            Err(e) => log::warn!("Could not list extensions of {}: {}", layer, e),
        }
    }

    let info = VkInfo::collect(&instance, device_index);
    instance.destroy();
    info
}

/// Create and immediately destroy an instance; returns the application name
/// it was created with.
pub fn ping(app_name: &str, engine_name: &str) -> Option<String> {
    let result = load_entry().and_then(|entry| {
        let mut instance = Instance::new(&entry, &InstanceSettings::new(app_name, engine_name))?;
        let name = instance.app_name().to_string();
        instance.destroy();
        Ok(name)
    });

    match result {
        Ok(name) => Some(name),
        Err(e) => {
            log::error!("Vulkan instance check failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_names_never_produce_a_report() {
        // Rejected either at load time (no driver) or at name conversion
        let settings = InstanceSettings::new("bad\0name", "No engine");
        assert!(query_vk_info(&settings, 0, false).is_none());
        assert!(ping("bad\0name", "No engine").is_none());
    }
}
