// =============================================================================
// VULKAN INFO - device capability reporting
// =============================================================================
//
// LAYERS:
//   backend  - instance lifetime and raw Vulkan queries (ash)
//   report   - VkInfo aggregate, schema tables, text/JSON rendering
//   bridge   - one call: load, create, collect, destroy
//   config   - config.toml for the command-line tool
//   jni_bridge (android) - MainActivity native methods
//
// =============================================================================

pub mod backend;
pub mod bridge;
pub mod config;
pub mod report;

#[cfg(target_os = "android")]
mod jni_bridge;
