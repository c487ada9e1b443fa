// Physical device properties, limits and sparse properties

use super::format::{device_type_name, driver_version_string, hex_bytes, hex_string, sample_count_text, vendor_name, version_string};
use super::schema::{boolean, signed, unsigned, unsigned_array, FieldSpec, Node, Value};
use crate::backend::name_to_string;
use ash::vk;

pub const PROPERTIES_CLASS: &str = "PhysicalDeviceProperties";
pub const LIMITS_CLASS: &str = "PhysicalDeviceLimits";
pub const SPARSE_CLASS: &str = "PhysicalDeviceSparseProperties";

pub static PROPERTIES: &[FieldSpec<vk::PhysicalDeviceProperties>] = &[
    FieldSpec { name: "apiVersion", label: "API version", get: |p| Value::Text(version_string(p.api_version)) },
    FieldSpec { name: "driverVersion", label: "Driver version", get: |p| Value::Text(driver_version_string(p.vendor_id, p.driver_version)) },
    FieldSpec { name: "vendorId", label: "Vendor ID", get: |p| Value::Text(hex_string(p.vendor_id as u64)) },
    FieldSpec { name: "deviceId", label: "Device ID", get: |p| Value::Text(hex_string(p.device_id as u64)) },
    FieldSpec { name: "deviceType", label: "Device type", get: |p| Value::Text(device_type_name(p.device_type)) },
    FieldSpec { name: "deviceName", label: "Device name", get: |p| Value::Text(name_to_string(&p.device_name)) },
    FieldSpec { name: "pipelineCacheUUID", label: "Pipeline cache UUID", get: |p| Value::Text(hex_bytes(&p.pipeline_cache_uuid)) },
    FieldSpec { name: "limits", label: "Limits", get: |p| Value::Object(limits_node(&p.limits)) },
    FieldSpec { name: "sparseProperties", label: "Sparse properties", get: |p| Value::Object(sparse_node(&p.sparse_properties)) },
];

pub static LIMITS: &[FieldSpec<vk::PhysicalDeviceLimits>] = &[
    FieldSpec { name: "maxImageDimension1D", label: "Max image dimension 1D", get: |l| unsigned(l.max_image_dimension1_d) },
    FieldSpec { name: "maxImageDimension2D", label: "Max image dimension 2D", get: |l| unsigned(l.max_image_dimension2_d) },
    FieldSpec { name: "maxImageDimension3D", label: "Max image dimension 3D", get: |l| unsigned(l.max_image_dimension3_d) },
    FieldSpec { name: "maxImageDimensionCube", label: "Max image dimension cube", get: |l| unsigned(l.max_image_dimension_cube) },
    FieldSpec { name: "maxImageArrayLayers", label: "Max image array layers", get: |l| unsigned(l.max_image_array_layers) },
    FieldSpec { name: "maxTexelBufferElements", label: "Max texel buffer elements", get: |l| unsigned(l.max_texel_buffer_elements) },
    FieldSpec { name: "maxUniformBufferRange", label: "Max uniform buffer range", get: |l| unsigned(l.max_uniform_buffer_range) },
    FieldSpec { name: "maxStorageBufferRange", label: "Max storage buffer range", get: |l| unsigned(l.max_storage_buffer_range) },
    FieldSpec { name: "maxPushConstantsSize", label: "Max push constants size", get: |l| unsigned(l.max_push_constants_size) },
    FieldSpec { name: "maxMemoryAllocationCount", label: "Max memory allocation count", get: |l| unsigned(l.max_memory_allocation_count) },
    FieldSpec { name: "maxSamplerAllocationCount", label: "Max sampler allocation count", get: |l| unsigned(l.max_sampler_allocation_count) },
    FieldSpec { name: "bufferImageGranularity", label: "Buffer image granularity", get: |l| unsigned(l.buffer_image_granularity) },
    FieldSpec { name: "sparseAddressSpaceSize", label: "Sparse address space size", get: |l| unsigned(l.sparse_address_space_size) },
    FieldSpec { name: "maxBoundDescriptorSets", label: "Max bound descriptor sets", get: |l| unsigned(l.max_bound_descriptor_sets) },
    FieldSpec { name: "maxPerStageDescriptorSamplers", label: "Max per-stage descriptor samplers", get: |l| unsigned(l.max_per_stage_descriptor_samplers) },
    FieldSpec { name: "maxPerStageDescriptorUniformBuffers", label: "Max per-stage descriptor uniform buffers", get: |l| unsigned(l.max_per_stage_descriptor_uniform_buffers) },
    FieldSpec { name: "maxPerStageDescriptorStorageBuffers", label: "Max per-stage descriptor storage buffers", get: |l| unsigned(l.max_per_stage_descriptor_storage_buffers) },
    FieldSpec { name: "maxPerStageDescriptorSampledImages", label: "Max per-stage descriptor sampled images", get: |l| unsigned(l.max_per_stage_descriptor_sampled_images) },
    FieldSpec { name: "maxPerStageDescriptorStorageImages", label: "Max per-stage descriptor storage images", get: |l| unsigned(l.max_per_stage_descriptor_storage_images) },
    FieldSpec { name: "maxPerStageDescriptorInputAttachments", label: "Max per-stage descriptor input attachments", get: |l| unsigned(l.max_per_stage_descriptor_input_attachments) },
    FieldSpec { name: "maxPerStageResources", label: "Max per-stage resources", get: |l| unsigned(l.max_per_stage_resources) },
    FieldSpec { name: "maxDescriptorSetSamplers", label: "Max descriptor set samplers", get: |l| unsigned(l.max_descriptor_set_samplers) },
    FieldSpec { name: "maxDescriptorSetUniformBuffers", label: "Max descriptor set uniform buffers", get: |l| unsigned(l.max_descriptor_set_uniform_buffers) },
    FieldSpec { name: "maxDescriptorSetUniformBuffersDynamic", label: "Max descriptor set uniform buffers dynamic", get: |l| unsigned(l.max_descriptor_set_uniform_buffers_dynamic) },
    FieldSpec { name: "maxDescriptorSetStorageBuffers", label: "Max descriptor set storage buffers", get: |l| unsigned(l.max_descriptor_set_storage_buffers) },
    FieldSpec { name: "maxDescriptorSetStorageBuffersDynamic", label: "Max descriptor set storage buffers dynamic", get: |l| unsigned(l.max_descriptor_set_storage_buffers_dynamic) },
    FieldSpec { name: "maxDescriptorSetSampledImages", label: "Max descriptor set sampled images", get: |l| unsigned(l.max_descriptor_set_sampled_images) },
    FieldSpec { name: "maxDescriptorSetStorageImages", label: "Max descriptor set storage images", get: |l| unsigned(l.max_descriptor_set_storage_images) },
    FieldSpec { name: "maxDescriptorSetInputAttachments", label: "Max descriptor set input attachments", get: |l| unsigned(l.max_descriptor_set_input_attachments) },
    FieldSpec { name: "maxVertexInputAttributes", label: "Max vertex input attributes", get: |l| unsigned(l.max_vertex_input_attributes) },
    FieldSpec { name: "maxVertexInputBindings", label: "Max vertex input bindings", get: |l| unsigned(l.max_vertex_input_bindings) },
    FieldSpec { name: "maxVertexInputAttributeOffset", label: "Max vertex input attribute offset", get: |l| unsigned(l.max_vertex_input_attribute_offset) },
    FieldSpec { name: "maxVertexInputBindingStride", label: "Max vertex input binding stride", get: |l| unsigned(l.max_vertex_input_binding_stride) },
    FieldSpec { name: "maxVertexOutputComponents", label: "Max vertex output components", get: |l| unsigned(l.max_vertex_output_components) },
    FieldSpec { name: "maxTessellationGenerationLevel", label: "Max tessellation generation level", get: |l| unsigned(l.max_tessellation_generation_level) },
    FieldSpec { name: "maxTessellationPatchSize", label: "Max tessellation patch size", get: |l| unsigned(l.max_tessellation_patch_size) },
    FieldSpec { name: "maxTessellationControlPerVertexInputComponents", label: "Max tessellation control per-vertex input components", get: |l| unsigned(l.max_tessellation_control_per_vertex_input_components) },
    FieldSpec { name: "maxTessellationControlPerVertexOutputComponents", label: "Max tessellation control per-vertex output components", get: |l| unsigned(l.max_tessellation_control_per_vertex_output_components) },
    FieldSpec { name: "maxTessellationControlPerPatchOutputComponents", label: "Max tessellation control per-patch output components", get: |l| unsigned(l.max_tessellation_control_per_patch_output_components) },
    FieldSpec { name: "maxTessellationControlTotalOutputComponents", label: "Max tessellation control total output components", get: |l| unsigned(l.max_tessellation_control_total_output_components) },
    FieldSpec { name: "maxTessellationEvaluationInputComponents", label: "Max tessellation evaluation input components", get: |l| unsigned(l.max_tessellation_evaluation_input_components) },
    FieldSpec { name: "maxTessellationEvaluationOutputComponents", label: "Max tessellation evaluation output components", get: |l| unsigned(l.max_tessellation_evaluation_output_components) },
    FieldSpec { name: "maxGeometryShaderInvocations", label: "Max geometry shader invocations", get: |l| unsigned(l.max_geometry_shader_invocations) },
    FieldSpec { name: "maxGeometryInputComponents", label: "Max geometry input components", get: |l| unsigned(l.max_geometry_input_components) },
    FieldSpec { name: "maxGeometryOutputComponents", label: "Max geometry output components", get: |l| unsigned(l.max_geometry_output_components) },
    FieldSpec { name: "maxGeometryOutputVertices", label: "Max geometry output vertices", get: |l| unsigned(l.max_geometry_output_vertices) },
    FieldSpec { name: "maxGeometryTotalOutputComponents", label: "Max geometry total output components", get: |l| unsigned(l.max_geometry_total_output_components) },
    FieldSpec { name: "maxFragmentInputComponents", label: "Max fragment input components", get: |l| unsigned(l.max_fragment_input_components) },
    FieldSpec { name: "maxFragmentOutputAttachments", label: "Max fragment output attachments", get: |l| unsigned(l.max_fragment_output_attachments) },
    FieldSpec { name: "maxFragmentDualSrcAttachments", label: "Max fragment dual src attachments", get: |l| unsigned(l.max_fragment_dual_src_attachments) },
    FieldSpec { name: "maxFragmentCombinedOutputResources", label: "Max fragment combined output resources", get: |l| unsigned(l.max_fragment_combined_output_resources) },
    FieldSpec { name: "maxComputeSharedMemorySize", label: "Max compute shared memory size", get: |l| unsigned(l.max_compute_shared_memory_size) },
    FieldSpec { name: "maxComputeWorkGroupCount", label: "Max compute work group count", get: |l| unsigned_array(&l.max_compute_work_group_count) },
    FieldSpec { name: "maxComputeWorkGroupInvocations", label: "Max compute work group invocations", get: |l| unsigned(l.max_compute_work_group_invocations) },
    FieldSpec { name: "maxComputeWorkGroupSize", label: "Max compute work group size", get: |l| unsigned_array(&l.max_compute_work_group_size) },
    FieldSpec { name: "subPixelPrecisionBits", label: "Sub-pixel precision bits", get: |l| unsigned(l.sub_pixel_precision_bits) },
    FieldSpec { name: "subTexelPrecisionBits", label: "Sub-texel precision bits", get: |l| unsigned(l.sub_texel_precision_bits) },
    FieldSpec { name: "mipmapPrecisionBits", label: "Mipmap precision bits", get: |l| unsigned(l.mipmap_precision_bits) },
    FieldSpec { name: "maxDrawIndexedIndexValue", label: "Max draw indexed index value", get: |l| unsigned(l.max_draw_indexed_index_value) },
    FieldSpec { name: "maxDrawIndirectCount", label: "Max draw indirect count", get: |l| unsigned(l.max_draw_indirect_count) },
    FieldSpec { name: "maxSamplerLodBias", label: "Max sampler LOD bias", get: |l| Value::Float(l.max_sampler_lod_bias) },
    FieldSpec { name: "maxSamplerAnisotropy", label: "Max sampler anisotropy", get: |l| Value::Float(l.max_sampler_anisotropy) },
    FieldSpec { name: "maxViewports", label: "Max viewports", get: |l| unsigned(l.max_viewports) },
    FieldSpec { name: "maxViewportDimensions", label: "Max viewport dimensions", get: |l| unsigned_array(&l.max_viewport_dimensions) },
    FieldSpec { name: "viewportBoundsRange", label: "Viewport bounds range", get: |l| Value::FloatArray(l.viewport_bounds_range.to_vec()) },
    FieldSpec { name: "viewportSubPixelBits", label: "Viewport sub-pixel bits", get: |l| unsigned(l.viewport_sub_pixel_bits) },
    FieldSpec { name: "minMemoryMapAlignment", label: "Min memory map alignment", get: |l| unsigned(l.min_memory_map_alignment as u64) },
    FieldSpec { name: "minTexelBufferOffsetAlignment", label: "Min texel buffer offset alignment", get: |l| unsigned(l.min_texel_buffer_offset_alignment) },
    FieldSpec { name: "minUniformBufferOffsetAlignment", label: "Min uniform buffer offset alignment", get: |l| unsigned(l.min_uniform_buffer_offset_alignment) },
    FieldSpec { name: "minStorageBufferOffsetAlignment", label: "Min storage buffer offset alignment", get: |l| unsigned(l.min_storage_buffer_offset_alignment) },
    FieldSpec { name: "minTexelOffset", label: "Min texel offset", get: |l| signed(l.min_texel_offset) },
    FieldSpec { name: "maxTexelOffset", label: "Max texel offset", get: |l| unsigned(l.max_texel_offset) },
    FieldSpec { name: "minTexelGatherOffset", label: "Min texel gather offset", get: |l| signed(l.min_texel_gather_offset) },
    FieldSpec { name: "maxTexelGatherOffset", label: "Max texel gather offset", get: |l| unsigned(l.max_texel_gather_offset) },
    FieldSpec { name: "minInterpolationOffset", label: "Min interpolation offset", get: |l| Value::Float(l.min_interpolation_offset) },
    FieldSpec { name: "maxInterpolationOffset", label: "Max interpolation offset", get: |l| Value::Float(l.max_interpolation_offset) },
    FieldSpec { name: "subPixelInterpolationOffsetBits", label: "Sub-pixel interpolation offset bits", get: |l| unsigned(l.sub_pixel_interpolation_offset_bits) },
    FieldSpec { name: "maxFramebufferWidth", label: "Max framebuffer width", get: |l| unsigned(l.max_framebuffer_width) },
    FieldSpec { name: "maxFramebufferHeight", label: "Max framebuffer height", get: |l| unsigned(l.max_framebuffer_height) },
    FieldSpec { name: "maxFramebufferLayers", label: "Max framebuffer layers", get: |l| unsigned(l.max_framebuffer_layers) },
    FieldSpec { name: "framebufferColorSampleCounts", label: "Framebuffer color sample counts", get: |l| Value::Text(sample_count_text(l.framebuffer_color_sample_counts)) },
    FieldSpec { name: "framebufferDepthSampleCounts", label: "Framebuffer depth sample counts", get: |l| Value::Text(sample_count_text(l.framebuffer_depth_sample_counts)) },
    FieldSpec { name: "framebufferStencilSampleCounts", label: "Framebuffer stencil sample counts", get: |l| Value::Text(sample_count_text(l.framebuffer_stencil_sample_counts)) },
    FieldSpec { name: "framebufferNoAttachmentsSampleCounts", label: "Framebuffer no-attachments sample counts", get: |l| Value::Text(sample_count_text(l.framebuffer_no_attachments_sample_counts)) },
    FieldSpec { name: "maxColorAttachments", label: "Max color attachments", get: |l| unsigned(l.max_color_attachments) },
    FieldSpec { name: "sampledImageColorSampleCounts", label: "Sampled image color sample counts", get: |l| Value::Text(sample_count_text(l.sampled_image_color_sample_counts)) },
    FieldSpec { name: "sampledImageIntegerSampleCounts", label: "Sampled image integer sample counts", get: |l| Value::Text(sample_count_text(l.sampled_image_integer_sample_counts)) },
    FieldSpec { name: "sampledImageDepthSampleCounts", label: "Sampled image depth sample counts", get: |l| Value::Text(sample_count_text(l.sampled_image_depth_sample_counts)) },
    FieldSpec { name: "sampledImageStencilSampleCounts", label: "Sampled image stencil sample counts", get: |l| Value::Text(sample_count_text(l.sampled_image_stencil_sample_counts)) },
    FieldSpec { name: "storageImageSampleCounts", label: "Storage image sample counts", get: |l| Value::Text(sample_count_text(l.storage_image_sample_counts)) },
    FieldSpec { name: "maxSampleMaskWords", label: "Max sample mask words", get: |l| unsigned(l.max_sample_mask_words) },
    FieldSpec { name: "timestampComputeAndGraphics", label: "Timestamp compute and graphics", get: |l| boolean(l.timestamp_compute_and_graphics) },
    FieldSpec { name: "timestampPeriod", label: "Timestamp period", get: |l| Value::Float(l.timestamp_period) },
    FieldSpec { name: "maxClipDistances", label: "Max clip distances", get: |l| unsigned(l.max_clip_distances) },
    FieldSpec { name: "maxCullDistances", label: "Max cull distances", get: |l| unsigned(l.max_cull_distances) },
    FieldSpec { name: "maxCombinedClipAndCullDistances", label: "Max combined clip and cull distances", get: |l| unsigned(l.max_combined_clip_and_cull_distances) },
    FieldSpec { name: "discreteQueuePriorities", label: "Discrete queue priorities", get: |l| unsigned(l.discrete_queue_priorities) },
    FieldSpec { name: "pointSizeRange", label: "Point size range", get: |l| Value::FloatArray(l.point_size_range.to_vec()) },
    FieldSpec { name: "lineWidthRange", label: "Line width range", get: |l| Value::FloatArray(l.line_width_range.to_vec()) },
    FieldSpec { name: "pointSizeGranularity", label: "Point size granularity", get: |l| Value::Float(l.point_size_granularity) },
    FieldSpec { name: "lineWidthGranularity", label: "Line width granularity", get: |l| Value::Float(l.line_width_granularity) },
    FieldSpec { name: "strictLines", label: "Strict lines", get: |l| boolean(l.strict_lines) },
    FieldSpec { name: "standardSampleLocations", label: "Standard sample locations", get: |l| boolean(l.standard_sample_locations) },
    FieldSpec { name: "optimalBufferCopyOffsetAlignment", label: "Optimal buffer copy offset alignment", get: |l| unsigned(l.optimal_buffer_copy_offset_alignment) },
    FieldSpec { name: "optimalBufferCopyRowPitchAlignment", label: "Optimal buffer copy row pitch alignment", get: |l| unsigned(l.optimal_buffer_copy_row_pitch_alignment) },
    FieldSpec { name: "nonCoherentAtomSize", label: "Non-coherent atom size", get: |l| unsigned(l.non_coherent_atom_size) },
];

pub static SPARSE_PROPERTIES: &[FieldSpec<vk::PhysicalDeviceSparseProperties>] = &[
    FieldSpec { name: "residencyStandard2DBlockShape", label: "Residency standard 2D block shape", get: |s| boolean(s.residency_standard2_d_block_shape) },
    FieldSpec { name: "residencyStandard2DMultisampleBlockShape", label: "Residency standard 2D multisample block shape", get: |s| boolean(s.residency_standard2_d_multisample_block_shape) },
    FieldSpec { name: "residencyStandard3DBlockShape", label: "Residency standard 3D block shape", get: |s| boolean(s.residency_standard3_d_block_shape) },
    FieldSpec { name: "residencyAlignedMipSize", label: "Residency aligned mip size", get: |s| boolean(s.residency_aligned_mip_size) },
    FieldSpec { name: "residencyNonResidentStrict", label: "Residency non-resident strict", get: |s| boolean(s.residency_non_resident_strict) },
];

pub fn properties_node(properties: &vk::PhysicalDeviceProperties) -> Node {
    Node::from_schema(PROPERTIES_CLASS, PROPERTIES, properties).with_optional(
        "vendorName",
        "Vendor",
        Value::Text(vendor_name(properties.vendor_id)),
    )
}

pub fn limits_node(limits: &vk::PhysicalDeviceLimits) -> Node {
    Node::from_schema(LIMITS_CLASS, LIMITS, limits)
}

pub fn sparse_node(sparse: &vk::PhysicalDeviceSparseProperties) -> Node {
    Node::from_schema(SPARSE_CLASS, SPARSE_PROPERTIES, sparse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::string_to_name;
    use std::collections::HashSet;

    fn unique_names<T>(schema: &[FieldSpec<T>]) -> bool {
        let names: HashSet<&str> = schema.iter().map(|spec| spec.name).collect();
        names.len() == schema.len()
    }

    #[test]
    fn schemas_have_unique_field_names() {
        assert!(unique_names(PROPERTIES));
        assert!(unique_names(LIMITS));
        assert!(unique_names(SPARSE_PROPERTIES));
        assert_eq!(LIMITS.len(), 106);
        assert_eq!(SPARSE_PROPERTIES.len(), 5);
    }

    #[test]
    fn properties_are_formatted() {
        let mut properties = vk::PhysicalDeviceProperties::default();
        properties.api_version = vk::make_api_version(0, 1, 1, 128);
        properties.vendor_id = 0x13B5;
        properties.device_id = 0x9200_0801;
        properties.device_type = vk::PhysicalDeviceType::INTEGRATED_GPU;
        properties.device_name = string_to_name("Mali-G78");
        properties.pipeline_cache_uuid = [0xab; vk::UUID_SIZE];

        let node = properties_node(&properties);
        assert_eq!(node.class, "PhysicalDeviceProperties");
        assert_eq!(node.get("apiVersion"), Some(&Value::Text("0.1.1.128".into())));
        assert_eq!(node.get("vendorId"), Some(&Value::Text("0x13b5".into())));
        assert_eq!(node.get("vendorName"), Some(&Value::Text("ARM".into())));
        assert_eq!(node.get("deviceId"), Some(&Value::Text("0x92000801".into())));
        assert_eq!(node.get("deviceType"), Some(&Value::Text("Integrated".into())));
        assert_eq!(node.get("deviceName"), Some(&Value::Text("Mali-G78".into())));
        assert_eq!(node.get("pipelineCacheUUID"), Some(&Value::Text("ab".repeat(16))));
        assert!(matches!(node.get("limits"), Some(Value::Object(n)) if n.class == "PhysicalDeviceLimits"));
        assert!(matches!(node.get("sparseProperties"), Some(Value::Object(n)) if n.class == "PhysicalDeviceSparseProperties"));
    }

    #[test]
    fn limits_keep_arrays_signs_and_sample_counts() {
        let mut limits = vk::PhysicalDeviceLimits::default();
        limits.max_compute_work_group_count = [65535, 65535, 65535];
        limits.max_viewport_dimensions = [4096, 4096];
        limits.viewport_bounds_range = [-8192.0, 8191.0];
        limits.min_texel_offset = -8;
        limits.max_texel_offset = 7;
        limits.framebuffer_color_sample_counts = vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
        limits.strict_lines = vk::TRUE;
        limits.non_coherent_atom_size = 64;

        let node = limits_node(&limits);
        assert_eq!(node.get("maxComputeWorkGroupCount"), Some(&Value::UnsignedArray(vec![65535; 3])));
        assert_eq!(node.get("maxViewportDimensions"), Some(&Value::UnsignedArray(vec![4096, 4096])));
        assert_eq!(node.get("viewportBoundsRange"), Some(&Value::FloatArray(vec![-8192.0, 8191.0])));
        assert_eq!(node.get("minTexelOffset"), Some(&Value::Signed(-8)));
        assert_eq!(node.get("maxTexelOffset"), Some(&Value::Unsigned(7)));
        assert_eq!(
            node.get("framebufferColorSampleCounts"),
            Some(&Value::Text("1 sample per pixel, 4 samples per pixel".into()))
        );
        assert_eq!(node.get("strictLines"), Some(&Value::Bool(true)));
        assert_eq!(node.get("standardSampleLocations"), Some(&Value::Bool(false)));
        assert_eq!(node.get("nonCoherentAtomSize"), Some(&Value::Unsigned(64)));
    }

    #[test]
    fn sparse_flags_map_to_their_own_fields() {
        let mut sparse = vk::PhysicalDeviceSparseProperties::default();
        sparse.residency_aligned_mip_size = vk::TRUE;

        let node = sparse_node(&sparse);
        let set: Vec<&str> = node
            .fields
            .iter()
            .filter(|f| f.value == Value::Bool(true))
            .map(|f| f.name)
            .collect();
        assert_eq!(set, vec!["residencyAlignedMipSize"]);
    }
}
