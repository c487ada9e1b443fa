// Backend errors
//
// Everything that can go wrong between loading the Vulkan library and
// enumerating physical devices.

use ash::vk;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to load Vulkan library. Is Vulkan installed? ({0})")]
    LoaderUnavailable(#[from] ash::LoadingError),

    #[error("Name contains an interior NUL byte: {0:?}")]
    InvalidName(String),

    #[error("vkCreateInstance failed: {0}")]
    InstanceCreation(vk::Result),

    #[error("Vulkan enumeration failed: {0}")]
    Enumeration(vk::Result),

    #[error("Instance has already been destroyed")]
    Destroyed,
}
