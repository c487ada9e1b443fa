// Physical device features
//
// One boolean per VkPhysicalDeviceFeatures member. Each row reads its own
// member; the table is the only place a name is tied to a field.

use super::schema::{boolean, FieldSpec, Node};
use ash::vk;

pub const FEATURES_CLASS: &str = "PhysicalDeviceFeatures";

pub static FEATURES: &[FieldSpec<vk::PhysicalDeviceFeatures>] = &[
    FieldSpec { name: "robustBufferAccess", label: "Robust buffer access", get: |f| boolean(f.robust_buffer_access) },
    FieldSpec { name: "fullDrawIndexUint32", label: "Full draw index uint 32", get: |f| boolean(f.full_draw_index_uint32) },
    FieldSpec { name: "imageCubeArray", label: "Image cube array", get: |f| boolean(f.image_cube_array) },
    FieldSpec { name: "independentBlend", label: "Independent blend", get: |f| boolean(f.independent_blend) },
    FieldSpec { name: "geometryShader", label: "Geometry shader", get: |f| boolean(f.geometry_shader) },
    FieldSpec { name: "tessellationShader", label: "Tessellation shader", get: |f| boolean(f.tessellation_shader) },
    FieldSpec { name: "sampleRateShading", label: "Sample rate shading", get: |f| boolean(f.sample_rate_shading) },
    FieldSpec { name: "dualSrcBlend", label: "Dual src blend", get: |f| boolean(f.dual_src_blend) },
    FieldSpec { name: "logicOp", label: "Logic op", get: |f| boolean(f.logic_op) },
    FieldSpec { name: "multiDrawIndirect", label: "Multi draw indirect", get: |f| boolean(f.multi_draw_indirect) },
    FieldSpec { name: "drawIndirectFirstInstance", label: "Draw indirect first instance", get: |f| boolean(f.draw_indirect_first_instance) },
    FieldSpec { name: "depthClamp", label: "Depth clamp", get: |f| boolean(f.depth_clamp) },
    FieldSpec { name: "depthBiasClamp", label: "Depth bias clamp", get: |f| boolean(f.depth_bias_clamp) },
    FieldSpec { name: "fillModeNonSolid", label: "Fill mode non-solid", get: |f| boolean(f.fill_mode_non_solid) },
    FieldSpec { name: "depthBounds", label: "Depth bounds", get: |f| boolean(f.depth_bounds) },
    FieldSpec { name: "wideLines", label: "Wide lines", get: |f| boolean(f.wide_lines) },
    FieldSpec { name: "largePoints", label: "Large points", get: |f| boolean(f.large_points) },
    FieldSpec { name: "alphaToOne", label: "Alpha to one", get: |f| boolean(f.alpha_to_one) },
    FieldSpec { name: "multiViewport", label: "Multi-viewport", get: |f| boolean(f.multi_viewport) },
    FieldSpec { name: "samplerAnisotropy", label: "Sampler anisotropy", get: |f| boolean(f.sampler_anisotropy) },
    FieldSpec { name: "textureCompressionETC2", label: "Texture compression ETC2", get: |f| boolean(f.texture_compression_etc2) },
    FieldSpec { name: "textureCompressionASTC_LDR", label: "Texture compression ASTC-LDR", get: |f| boolean(f.texture_compression_astc_ldr) },
    FieldSpec { name: "textureCompressionBC", label: "Texture compression BC", get: |f| boolean(f.texture_compression_bc) },
    FieldSpec { name: "occlusionQueryPrecise", label: "Occlusion query precise", get: |f| boolean(f.occlusion_query_precise) },
    FieldSpec { name: "pipelineStatisticsQuery", label: "Pipeline statistics query", get: |f| boolean(f.pipeline_statistics_query) },
    FieldSpec { name: "vertexPipelineStoresAndAtomics", label: "Vertex pipeline stores & atomics", get: |f| boolean(f.vertex_pipeline_stores_and_atomics) },
    FieldSpec { name: "fragmentStoresAndAtomics", label: "Fragment stores & atomics", get: |f| boolean(f.fragment_stores_and_atomics) },
    FieldSpec { name: "shaderTessellationAndGeometryPointSize", label: "Shader tessellation & geometry point size", get: |f| boolean(f.shader_tessellation_and_geometry_point_size) },
    FieldSpec { name: "shaderImageGatherExtended", label: "Shader image gather extended", get: |f| boolean(f.shader_image_gather_extended) },
    FieldSpec { name: "shaderStorageImageExtendedFormats", label: "Shader storage image extended formats", get: |f| boolean(f.shader_storage_image_extended_formats) },
    FieldSpec { name: "shaderStorageImageMultisample", label: "Shader storage image multi-sample", get: |f| boolean(f.shader_storage_image_multisample) },
    FieldSpec { name: "shaderStorageImageReadWithoutFormat", label: "Shader storage image read without format", get: |f| boolean(f.shader_storage_image_read_without_format) },
    FieldSpec { name: "shaderStorageImageWriteWithoutFormat", label: "Shader storage image write without format", get: |f| boolean(f.shader_storage_image_write_without_format) },
    FieldSpec { name: "shaderUniformBufferArrayDynamicIndexing", label: "Shader uniform buffer array dynamic indexing", get: |f| boolean(f.shader_uniform_buffer_array_dynamic_indexing) },
    FieldSpec { name: "shaderSampledImageArrayDynamicIndexing", label: "Shader sampled image array dynamic indexing", get: |f| boolean(f.shader_sampled_image_array_dynamic_indexing) },
    FieldSpec { name: "shaderStorageBufferArrayDynamicIndexing", label: "Shader storage buffer array dynamic indexing", get: |f| boolean(f.shader_storage_buffer_array_dynamic_indexing) },
    FieldSpec { name: "shaderStorageImageArrayDynamicIndexing", label: "Shader storage image array dynamic indexing", get: |f| boolean(f.shader_storage_image_array_dynamic_indexing) },
    FieldSpec { name: "shaderClipDistance", label: "Shader clip distance", get: |f| boolean(f.shader_clip_distance) },
    FieldSpec { name: "shaderCullDistance", label: "Shader cull distance", get: |f| boolean(f.shader_cull_distance) },
    FieldSpec { name: "shaderFloat64", label: "Shader float 64", get: |f| boolean(f.shader_float64) },
    FieldSpec { name: "shaderInt64", label: "Shader int 64", get: |f| boolean(f.shader_int64) },
    FieldSpec { name: "shaderInt16", label: "Shader int 16", get: |f| boolean(f.shader_int16) },
    FieldSpec { name: "shaderResourceResidency", label: "Shader resource residency", get: |f| boolean(f.shader_resource_residency) },
    FieldSpec { name: "shaderResourceMinLod", label: "Shader resource min lod", get: |f| boolean(f.shader_resource_min_lod) },
    FieldSpec { name: "sparseBinding", label: "Sparse binding", get: |f| boolean(f.sparse_binding) },
    FieldSpec { name: "sparseResidencyBuffer", label: "Sparse residency buffer", get: |f| boolean(f.sparse_residency_buffer) },
    FieldSpec { name: "sparseResidencyImage2D", label: "Sparse residency image 2D", get: |f| boolean(f.sparse_residency_image2_d) },
    FieldSpec { name: "sparseResidencyImage3D", label: "Sparse residency image 3D", get: |f| boolean(f.sparse_residency_image3_d) },
    FieldSpec { name: "sparseResidency2Samples", label: "Sparse residency 2 samples", get: |f| boolean(f.sparse_residency2_samples) },
    FieldSpec { name: "sparseResidency4Samples", label: "Sparse residency 4 samples", get: |f| boolean(f.sparse_residency4_samples) },
    FieldSpec { name: "sparseResidency8Samples", label: "Sparse residency 8 samples", get: |f| boolean(f.sparse_residency8_samples) },
    FieldSpec { name: "sparseResidency16Samples", label: "Sparse residency 16 samples", get: |f| boolean(f.sparse_residency16_samples) },
    FieldSpec { name: "sparseResidencyAliased", label: "Sparse residency aliased", get: |f| boolean(f.sparse_residency_aliased) },
    FieldSpec { name: "variableMultisampleRate", label: "Variable multi-sample rate", get: |f| boolean(f.variable_multisample_rate) },
    FieldSpec { name: "inheritedQueries", label: "Inherited queries", get: |f| boolean(f.inherited_queries) },
];

pub fn features_node(features: &vk::PhysicalDeviceFeatures) -> Node {
    Node::from_schema(FEATURES_CLASS, FEATURES, features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::schema::Value;
    use std::collections::HashSet;

    fn enabled(node: &Node) -> Vec<&'static str> {
        node.fields
            .iter()
            .filter(|f| f.value == Value::Bool(true))
            .map(|f| f.name)
            .collect()
    }

    #[test]
    fn every_feature_has_a_unique_row() {
        assert_eq!(FEATURES.len(), 55);
        let names: HashSet<&str> = FEATURES.iter().map(|s| s.name).collect();
        let labels: HashSet<&str> = FEATURES.iter().map(|s| s.label).collect();
        assert_eq!(names.len(), FEATURES.len());
        assert_eq!(labels.len(), FEATURES.len());
    }

    #[test]
    fn zeroed_features_are_all_false() {
        let node = features_node(&vk::PhysicalDeviceFeatures::default());
        assert!(enabled(&node).is_empty());
    }

    #[test]
    fn all_true_features_are_all_true() {
        // Every member is a Bool32, so the struct is exactly 55 of them
        let all: vk::PhysicalDeviceFeatures = unsafe { std::mem::transmute([vk::TRUE; 55]) };
        let node = features_node(&all);
        assert_eq!(enabled(&node).len(), 55);
    }

    #[test]
    fn each_flag_reads_its_own_member() {
        let mut features = vk::PhysicalDeviceFeatures::default();
        features.shader_int16 = vk::TRUE;
        features.sparse_residency_image3_d = vk::TRUE;
        features.texture_compression_astc_ldr = vk::TRUE;

        let node = features_node(&features);
        assert_eq!(
            enabled(&node),
            vec!["textureCompressionASTC_LDR", "shaderInt16", "sparseResidencyImage3D"]
        );
    }

    #[test]
    fn single_member_sweep() {
        // Flip one Bool32 at a time through the raw layout; exactly the row at
        // the same position must light up
        for index in 0..55 {
            let mut raw = [vk::FALSE; 55];
            raw[index] = vk::TRUE;
            let features: vk::PhysicalDeviceFeatures = unsafe { std::mem::transmute(raw) };
            let node = features_node(&features);
            assert_eq!(enabled(&node), vec![FEATURES[index].name]);
        }
    }
}
