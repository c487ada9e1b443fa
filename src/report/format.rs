// Value formatting and lookup tables
//
// IDs become hex strings, packed versions become dotted strings, and bit
// flags are decoded against static (bit, description) tables.

use ash::vk;

/// A bit value and what it means
pub type FlagTable = &'static [(u32, &'static str)];

pub const SAMPLE_COUNT_FLAGS: FlagTable = &[
    (0x01, "1 sample per pixel"),
    (0x02, "2 samples per pixel"),
    (0x04, "4 samples per pixel"),
    (0x08, "8 samples per pixel"),
    (0x10, "16 samples per pixel"),
    (0x20, "32 samples per pixel"),
    (0x40, "64 samples per pixel"),
];

pub const MEMORY_PROPERTY_FLAGS: FlagTable = &[
    (0x001, "Device local"),
    (0x002, "Host visible"),
    (0x004, "Host coherent"),
    (0x008, "Host cached"),
    (0x010, "Lazily allocated"),
    (0x020, "Protected"),
    (0x040, "Device coherent (AMD)"),
    (0x080, "Device uncached (AMD)"),
    (0x100, "RDMA capable (NV)"),
];

pub const MEMORY_HEAP_FLAGS: FlagTable = &[
    (0x1, "Device local"),
    (0x2, "Multi-instance"),
];

pub const QUEUE_FLAGS: FlagTable = &[
    (0x001, "Graphics"),
    (0x002, "Compute"),
    (0x004, "Transfer"),
    (0x008, "Sparse binding"),
    (0x010, "Protected"),
    (0x020, "Video decode"),
    (0x040, "Video encode"),
    (0x100, "Optical flow (NV)"),
];

/// Indexed by the raw `VkPhysicalDeviceType` value
pub const DEVICE_TYPE_NAMES: [&str; 5] = ["Other", "Integrated", "Discrete", "Virtual", "CPU"];

/// PCI vendor IDs, plus the Khronos-registered IDs for vendors without one
pub const VENDOR_NAMES: &[(u32, &str)] = &[
    (0x1002, "AMD"),
    (0x1010, "ImgTec"),
    (0x106B, "Apple"),
    (0x10DE, "NVIDIA"),
    (0x13B5, "ARM"),
    (0x1AE0, "Google"),
    (0x5143, "Qualcomm"),
    (0x8086, "Intel"),
    (0x10001, "Vivante"),
    (0x10002, "VeriSilicon"),
    (0x10003, "Kazan"),
    (0x10004, "Codeplay"),
    (0x10005, "Mesa"),
    (0x10006, "PoCL"),
    (0x10007, "Mobileye"),
];

const VENDOR_ID_NVIDIA: u32 = 0x10DE;

/// Descriptions of every bit in `bits` that the table knows, in table order
pub fn flag_names(bits: u32, table: FlagTable) -> Vec<String> {
    table
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|(_, name)| name.to_string())
        .collect()
}

pub fn sample_counts(flags: vk::SampleCountFlags) -> Vec<String> {
    flag_names(flags.as_raw(), SAMPLE_COUNT_FLAGS)
}

/// Sample counts as one comma-separated string, the shape the host's
/// `*SampleCounts` fields take
pub fn sample_count_text(flags: vk::SampleCountFlags) -> String {
    sample_counts(flags).join(", ")
}

pub fn memory_property_flags(flags: vk::MemoryPropertyFlags) -> Vec<String> {
    flag_names(flags.as_raw(), MEMORY_PROPERTY_FLAGS)
}

pub fn queue_flags(flags: vk::QueueFlags) -> Vec<String> {
    flag_names(flags.as_raw(), QUEUE_FLAGS)
}

/// `0x`-prefixed lowercase hex with no padding
pub fn hex_string(value: u64) -> String {
    format!("{:#x}", value)
}

/// Bytes as one contiguous lowercase hex string, e.g. a pipeline cache UUID
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Packed API version as `variant.major.minor.patch`
pub fn version_string(version: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        vk::api_version_variant(version),
        vk::api_version_major(version),
        vk::api_version_minor(version),
        vk::api_version_patch(version)
    )
}

/// Driver version using the vendor's own packing where it differs from the
/// API version layout
pub fn driver_version_string(vendor_id: u32, version: u32) -> String {
    if vendor_id == VENDOR_ID_NVIDIA {
        // 10.8.8.6 bits
        return format!(
            "{}.{}.{}.{}",
            (version >> 22) & 0x3ff,
            (version >> 14) & 0x0ff,
            (version >> 6) & 0x0ff,
            version & 0x03f
        );
    }
    version_string(version)
}

pub fn device_type_name(device_type: vk::PhysicalDeviceType) -> String {
    let raw = device_type.as_raw();
    usize::try_from(raw)
        .ok()
        .and_then(|index| DEVICE_TYPE_NAMES.get(index))
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Unknown ({})", raw))
}

pub fn vendor_name(vendor_id: u32) -> String {
    VENDOR_NAMES
        .iter()
        .find(|(id, _)| *id == vendor_id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("Unknown ({})", hex_string(vendor_id as u64)))
}
