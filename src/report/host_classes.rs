// Field declarations of the app's Java classes
//
// The JNI walk sets fields by name and signature, so every required field a
// node carries must exist on its Java class with the same type, and every
// declared field must be filled in.

use super::features::features_node;
use super::memory::memory_properties_node;
use super::properties::limits_node;
use super::schema::{Node, Value};
use super::{InstanceInfo, VkInfo};
use ash::vk;

/// `InstanceInfo.java`
const INSTANCE_INFO: &[(&str, &str)] = &[
    ("appName", "Ljava/lang/String;"),
    ("engineName", "Ljava/lang/String;"),
    ("numDevices", "I"),
];

/// `PhysicalDeviceLimits.java`
const PHYSICAL_DEVICE_LIMITS: &[(&str, &str)] = &[
    ("maxImageDimension1D", "J"),
    ("maxImageDimension2D", "J"),
    ("maxImageDimension3D", "J"),
    ("maxImageDimensionCube", "J"),
    ("maxImageArrayLayers", "J"),
    ("maxTexelBufferElements", "J"),
    ("maxUniformBufferRange", "J"),
    ("maxStorageBufferRange", "J"),
    ("maxPushConstantsSize", "J"),
    ("maxMemoryAllocationCount", "J"),
    ("maxSamplerAllocationCount", "J"),
    ("bufferImageGranularity", "J"),
    ("sparseAddressSpaceSize", "J"),
    ("maxBoundDescriptorSets", "J"),
    ("maxPerStageDescriptorSamplers", "J"),
    ("maxPerStageDescriptorStorageBuffers", "J"),
    ("maxPerStageDescriptorSampledImages", "J"),
    ("maxPerStageDescriptorStorageImages", "J"),
    ("maxPerStageDescriptorInputAttachments", "J"),
    ("maxPerStageResources", "J"),
    ("maxPerStageDescriptorUniformBuffers", "J"),
    ("maxDescriptorSetSamplers", "J"),
    ("maxDescriptorSetUniformBuffers", "J"),
    ("maxDescriptorSetUniformBuffersDynamic", "J"),
    ("maxDescriptorSetStorageBuffers", "J"),
    ("maxDescriptorSetStorageBuffersDynamic", "J"),
    ("maxDescriptorSetSampledImages", "J"),
    ("maxDescriptorSetStorageImages", "J"),
    ("maxDescriptorSetInputAttachments", "J"),
    ("maxVertexInputAttributes", "J"),
    ("maxVertexInputBindings", "J"),
    ("maxVertexInputAttributeOffset", "J"),
    ("maxVertexInputBindingStride", "J"),
    ("maxVertexOutputComponents", "J"),
    ("maxTessellationGenerationLevel", "J"),
    ("maxTessellationPatchSize", "J"),
    ("maxTessellationControlPerVertexInputComponents", "J"),
    ("maxTessellationControlPerVertexOutputComponents", "J"),
    ("maxTessellationControlPerPatchOutputComponents", "J"),
    ("maxTessellationControlTotalOutputComponents", "J"),
    ("maxTessellationEvaluationInputComponents", "J"),
    ("maxTessellationEvaluationOutputComponents", "J"),
    ("maxGeometryShaderInvocations", "J"),
    ("maxGeometryInputComponents", "J"),
    ("maxGeometryOutputComponents", "J"),
    ("maxGeometryOutputVertices", "J"),
    ("maxGeometryTotalOutputComponents", "J"),
    ("maxFragmentInputComponents", "J"),
    ("maxFragmentOutputAttachments", "J"),
    ("maxFragmentDualSrcAttachments", "J"),
    ("maxFragmentCombinedOutputResources", "J"),
    ("maxComputeSharedMemorySize", "J"),
    ("maxComputeWorkGroupCount", "[J"),
    ("maxComputeWorkGroupInvocations", "J"),
    ("maxComputeWorkGroupSize", "[J"),
    ("subPixelPrecisionBits", "J"),
    ("subTexelPrecisionBits", "J"),
    ("mipmapPrecisionBits", "J"),
    ("maxDrawIndexedIndexValue", "J"),
    ("maxDrawIndirectCount", "J"),
    ("maxSamplerLodBias", "F"),
    ("maxSamplerAnisotropy", "F"),
    ("maxViewports", "J"),
    ("maxViewportDimensions", "[J"),
    ("viewportBoundsRange", "[F"),
    ("viewportSubPixelBits", "J"),
    ("minMemoryMapAlignment", "J"),
    ("minTexelBufferOffsetAlignment", "J"),
    ("minUniformBufferOffsetAlignment", "J"),
    ("minStorageBufferOffsetAlignment", "J"),
    ("minTexelOffset", "J"),
    ("maxTexelOffset", "J"),
    ("minTexelGatherOffset", "J"),
    ("maxTexelGatherOffset", "J"),
    ("minInterpolationOffset", "F"),
    ("maxInterpolationOffset", "F"),
    ("subPixelInterpolationOffsetBits", "J"),
    ("maxFramebufferWidth", "J"),
    ("maxFramebufferHeight", "J"),
    ("maxFramebufferLayers", "J"),
    ("framebufferColorSampleCounts", "Ljava/lang/String;"),
    ("framebufferDepthSampleCounts", "Ljava/lang/String;"),
    ("framebufferStencilSampleCounts", "Ljava/lang/String;"),
    ("framebufferNoAttachmentsSampleCounts", "Ljava/lang/String;"),
    ("maxColorAttachments", "J"),
    ("sampledImageColorSampleCounts", "Ljava/lang/String;"),
    ("sampledImageIntegerSampleCounts", "Ljava/lang/String;"),
    ("sampledImageDepthSampleCounts", "Ljava/lang/String;"),
    ("sampledImageStencilSampleCounts", "Ljava/lang/String;"),
    ("storageImageSampleCounts", "Ljava/lang/String;"),
    ("maxSampleMaskWords", "J"),
    ("timestampComputeAndGraphics", "Z"),
    ("timestampPeriod", "F"),
    ("maxClipDistances", "J"),
    ("maxCullDistances", "J"),
    ("maxCombinedClipAndCullDistances", "J"),
    ("discreteQueuePriorities", "J"),
    ("pointSizeRange", "[F"),
    ("lineWidthRange", "[F"),
    ("pointSizeGranularity", "F"),
    ("lineWidthGranularity", "F"),
    ("strictLines", "Z"),
    ("standardSampleLocations", "Z"),
    ("optimalBufferCopyOffsetAlignment", "J"),
    ("optimalBufferCopyRowPitchAlignment", "J"),
    ("nonCoherentAtomSize", "J"),
];

/// `PhysicalDeviceFeatures.java`
const PHYSICAL_DEVICE_FEATURES: &[(&str, &str)] = &[
    ("robustBufferAccess", "Z"),
    ("fullDrawIndexUint32", "Z"),
    ("imageCubeArray", "Z"),
    ("independentBlend", "Z"),
    ("geometryShader", "Z"),
    ("tessellationShader", "Z"),
    ("sampleRateShading", "Z"),
    ("dualSrcBlend", "Z"),
    ("logicOp", "Z"),
    ("multiDrawIndirect", "Z"),
    ("drawIndirectFirstInstance", "Z"),
    ("depthClamp", "Z"),
    ("depthBiasClamp", "Z"),
    ("fillModeNonSolid", "Z"),
    ("depthBounds", "Z"),
    ("wideLines", "Z"),
    ("largePoints", "Z"),
    ("alphaToOne", "Z"),
    ("multiViewport", "Z"),
    ("samplerAnisotropy", "Z"),
    ("textureCompressionETC2", "Z"),
    ("textureCompressionASTC_LDR", "Z"),
    ("textureCompressionBC", "Z"),
    ("occlusionQueryPrecise", "Z"),
    ("pipelineStatisticsQuery", "Z"),
    ("vertexPipelineStoresAndAtomics", "Z"),
    ("fragmentStoresAndAtomics", "Z"),
    ("shaderTessellationAndGeometryPointSize", "Z"),
    ("shaderImageGatherExtended", "Z"),
    ("shaderStorageImageExtendedFormats", "Z"),
    ("shaderStorageImageMultisample", "Z"),
    ("shaderStorageImageReadWithoutFormat", "Z"),
    ("shaderStorageImageWriteWithoutFormat", "Z"),
    ("shaderUniformBufferArrayDynamicIndexing", "Z"),
    ("shaderSampledImageArrayDynamicIndexing", "Z"),
    ("shaderStorageBufferArrayDynamicIndexing", "Z"),
    ("shaderStorageImageArrayDynamicIndexing", "Z"),
    ("shaderClipDistance", "Z"),
    ("shaderCullDistance", "Z"),
    ("shaderFloat64", "Z"),
    ("shaderInt64", "Z"),
    ("shaderInt16", "Z"),
    ("shaderResourceResidency", "Z"),
    ("shaderResourceMinLod", "Z"),
    ("sparseBinding", "Z"),
    ("sparseResidencyBuffer", "Z"),
    ("sparseResidencyImage2D", "Z"),
    ("sparseResidencyImage3D", "Z"),
    ("sparseResidency2Samples", "Z"),
    ("sparseResidency4Samples", "Z"),
    ("sparseResidency8Samples", "Z"),
    ("sparseResidency16Samples", "Z"),
    ("sparseResidencyAliased", "Z"),
    ("variableMultisampleRate", "Z"),
    ("inheritedQueries", "Z"),
];

/// `PhysicalDeviceMemoryProperties.java`
const PHYSICAL_DEVICE_MEMORY_PROPERTIES: &[(&str, &str)] = &[
    ("memoryTypeCount", "J"),
    ("memoryTypes", "[Lcom/example/vulkaninfoapp/MemoryType;"),
    ("memoryHeapCount", "J"),
    ("memoryHeaps", "[Lcom/example/vulkaninfoapp/MemoryHeap;"),
];

fn assert_matches_class(node: &Node, declared: &[(&str, &str)]) {
    for field in &node.fields {
        let signature = field.value.jni_signature();
        match declared.iter().find(|(name, _)| *name == field.name) {
            Some((_, expected)) => assert_eq!(
                signature, *expected,
                "{}.{} has the wrong type",
                node.class, field.name
            ),
            None => assert!(
                field.optional,
                "{}.{} ({}) is not declared on the Java class",
                node.class, field.name, signature
            ),
        }
    }

    for (name, _) in declared {
        assert!(node.get(name).is_some(), "{}.{} is never set", node.class, name);
    }
}

#[test]
fn instance_info_matches_java_class() {
    let info = InstanceInfo {
        app_name: "Vulkan Info App".to_string(),
        engine_name: "No engine".to_string(),
        num_devices: 1,
        loader_version: vk::API_VERSION_1_0,
        extensions: Vec::new(),
        layers: Vec::new(),
    };
    assert_matches_class(&info.to_node(), INSTANCE_INFO);
}

#[test]
fn limits_match_java_class() {
    assert_matches_class(&limits_node(&vk::PhysicalDeviceLimits::default()), PHYSICAL_DEVICE_LIMITS);
}

#[test]
fn features_match_java_class() {
    assert_matches_class(&features_node(&vk::PhysicalDeviceFeatures::default()), PHYSICAL_DEVICE_FEATURES);
}

#[test]
fn memory_properties_match_java_class() {
    assert_matches_class(
        &memory_properties_node(&vk::PhysicalDeviceMemoryProperties::default()),
        PHYSICAL_DEVICE_MEMORY_PROPERTIES,
    );
}

#[test]
fn class_names_match_node_classes() {
    let info = VkInfo {
        instance: InstanceInfo {
            app_name: String::new(),
            engine_name: String::new(),
            num_devices: 0,
            loader_version: 0,
            extensions: Vec::new(),
            layers: Vec::new(),
        },
        device: vk::PhysicalDevice::null(),
        device_index: 0,
        properties: vk::PhysicalDeviceProperties::default(),
        features: vk::PhysicalDeviceFeatures::default(),
        memory_properties: vk::PhysicalDeviceMemoryProperties::default(),
        queue_families: Vec::new(),
        extensions: Vec::new(),
    };
    let root = info.to_node();
    let class_of = |name: &str| match root.get(name) {
        Some(Value::Object(node)) => node.class,
        other => panic!("{} is not an object: {:?}", name, other),
    };
    assert_eq!(class_of("instanceInfo"), "InstanceInfo");
    assert_eq!(class_of("physicalDeviceFeatures"), "PhysicalDeviceFeatures");
    assert_eq!(class_of("physicalDeviceMemoryProperties"), "PhysicalDeviceMemoryProperties");
}
