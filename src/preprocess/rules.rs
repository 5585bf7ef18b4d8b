//! Static classification tables.
//!
//! Call groups are listed in insertion order. A call may appear in several
//! categories of the same API (`glClear` both delimits and clears a frame);
//! exact duplicates inside one group have been removed.

/// Call category labels.
pub mod category {
    pub const FRAME_DELIMITER: &str = "FrameDelimiter";
    pub const DRAW: &str = "Draw";
    pub const BIND: &str = "Bind";
    pub const WAIT: &str = "Wait";
    pub const SETUP: &str = "Setup";
    pub const ERROR: &str = "Error";
    pub const COMPILE: &str = "Compile";
    pub const COMPUTE: &str = "Compute";
    pub const DATA_TRANSFER: &str = "DataTransfer";
    pub const STATE: &str = "State";
    pub const FRAME: &str = "Frame";
    pub const TEXTURE: &str = "Texture";
    pub const PIPELINE: &str = "Pipeline";
    pub const DESCRIPTOR: &str = "Descriptor";
    pub const BUFFER: &str = "Buffer";
    pub const MEMORY_ALLOCATION: &str = "MemoryAllocation";
    pub const BLOCK: &str = "Block";
    pub const SHADER: &str = "Shader";
    pub const OTHER: &str = "Other";
}

/// API names as stored in the call category table.
pub mod api {
    pub const OPENCL: &str = "OpenCL";
    pub const OPENGL: &str = "OpenGL";
    pub const VULKAN: &str = "Vulkan";
    pub const OPENGLES: &str = "OpenGLES";
}

/// Counter category labels.
pub mod counter_category {
    pub const CPU_TEMP: &str = "CPU_TEMP";
    pub const GPU_TEMP: &str = "GPU_TEMP";
    pub const CPU_LOAD: &str = "CPU_LOAD";
    pub const GPU_LOAD: &str = "GPU_LOAD";
    pub const CPU_FREQ: &str = "CPU_FREQ";
    pub const FPS: &str = "FPS";
    pub const GPU_FREQ: &str = "GPU_FREQ";
    pub const POWER: &str = "POWER";
    pub const FB_STALLS: &str = "FB_STALLS";
    pub const TOTAL_CYCLES: &str = "TOTAL_CYCLES";
    pub const TEX_STALLS: &str = "TEX_STALLS";
    pub const NUM_INST: &str = "NUM_INST";
    pub const NUM_PIXELS: &str = "NUM_PIXELS";
    pub const ACTIVITY: &str = "ACTIVITY";
}

/// Calls of one API filed under one category.
#[derive(Debug, Clone, Copy)]
pub struct CallRule {
    pub category: &'static str,
    pub api: &'static str,
    pub calls: &'static [&'static str],
}

/// Counter names filed under one counter category.
#[derive(Debug, Clone, Copy)]
pub struct CounterRule {
    pub category: &'static str,
    pub counters: &'static [&'static str],
}

pub const CALL_RULES: &[CallRule] = &[
    CallRule {
        category: category::FRAME_DELIMITER,
        api: api::OPENCL,
        calls: OPENCL_FRAME_DELIMITERS,
    },
    CallRule {
        category: category::FRAME_DELIMITER,
        api: api::VULKAN,
        calls: VULKAN_FRAME_DELIMITERS,
    },
    CallRule {
        category: category::FRAME_DELIMITER,
        api: api::OPENGL,
        calls: OPENGL_FRAME_DELIMITERS,
    },
    CallRule {
        category: category::FRAME_DELIMITER,
        api: api::OPENGLES,
        calls: EGL_FRAME_DELIMITERS,
    },
    CallRule {
        category: category::DRAW,
        api: api::OPENCL,
        calls: OPENCL_DRAW_CALLS,
    },
    CallRule {
        category: category::DRAW,
        api: api::VULKAN,
        calls: VULKAN_DRAW_CALLS,
    },
    CallRule {
        category: category::DRAW,
        api: api::OPENGL,
        calls: OPENGL_DRAW_CALLS,
    },
    CallRule {
        category: category::BIND,
        api: api::OPENCL,
        calls: OPENCL_BIND_CALLS,
    },
    CallRule {
        category: category::BIND,
        api: api::VULKAN,
        calls: VULKAN_BIND_CALLS,
    },
    CallRule {
        category: category::BIND,
        api: api::OPENGL,
        calls: OPENGL_BIND_CALLS,
    },
    CallRule {
        category: category::BIND,
        api: api::OPENGLES,
        calls: EGL_BIND_CALLS,
    },
    CallRule {
        category: category::WAIT,
        api: api::OPENCL,
        calls: OPENCL_WAIT_CALLS,
    },
    CallRule {
        category: category::WAIT,
        api: api::VULKAN,
        calls: VULKAN_WAIT_CALLS,
    },
    CallRule {
        category: category::WAIT,
        api: api::OPENGL,
        calls: OPENGL_WAIT_CALLS,
    },
    CallRule {
        category: category::WAIT,
        api: api::OPENGLES,
        calls: EGL_WAIT_CALLS,
    },
    CallRule {
        category: category::SETUP,
        api: api::OPENCL,
        calls: OPENCL_SETUP_CALLS,
    },
    CallRule {
        category: category::SETUP,
        api: api::VULKAN,
        calls: VULKAN_SETUP_CALLS,
    },
    CallRule {
        category: category::SETUP,
        api: api::OPENGL,
        calls: OPENGL_SETUP_CALLS,
    },
    CallRule {
        category: category::SETUP,
        api: api::OPENGLES,
        calls: EGL_SETUP_CALLS,
    },
    CallRule {
        category: category::ERROR,
        api: api::OPENCL,
        calls: OPENCL_ERROR_CALLS,
    },
    CallRule {
        category: category::ERROR,
        api: api::VULKAN,
        calls: VULKAN_ERROR_CALLS,
    },
    CallRule {
        category: category::ERROR,
        api: api::OPENGL,
        calls: OPENGL_ERROR_CALLS,
    },
    CallRule {
        category: category::ERROR,
        api: api::OPENGLES,
        calls: EGL_ERROR_CALLS,
    },
    CallRule {
        category: category::COMPILE,
        api: api::OPENCL,
        calls: OPENCL_COMPILE_CALLS,
    },
    CallRule {
        category: category::COMPUTE,
        api: api::OPENCL,
        calls: OPENCL_COMPUTE_CALLS,
    },
    CallRule {
        category: category::DATA_TRANSFER,
        api: api::OPENCL,
        calls: OPENCL_DATA_TRANSFER_CALLS,
    },
    CallRule {
        category: category::STATE,
        api: api::OPENGL,
        calls: OPENGL_STATE_CALLS,
    },
    CallRule {
        category: category::FRAME,
        api: api::OPENGL,
        calls: OPENGL_FRAME_CALLS,
    },
    CallRule {
        category: category::TEXTURE,
        api: api::OPENGL,
        calls: OPENGL_TEXTURE_CALLS,
    },
    CallRule {
        category: category::PIPELINE,
        api: api::VULKAN,
        calls: VULKAN_PIPELINE_CALLS,
    },
    CallRule {
        category: category::DESCRIPTOR,
        api: api::VULKAN,
        calls: VULKAN_DESCRIPTOR_CALLS,
    },
    CallRule {
        category: category::BUFFER,
        api: api::OPENGL,
        calls: OPENGL_BUFFER_CALLS,
    },
    CallRule {
        category: category::MEMORY_ALLOCATION,
        api: api::OPENCL,
        calls: OPENCL_MEMORY_CALLS,
    },
    CallRule {
        category: category::BLOCK,
        api: api::OPENGL,
        calls: OPENGL_BLOCK_CALLS,
    },
    CallRule {
        category: category::SHADER,
        api: api::OPENGL,
        calls: OPENGL_SHADER_USE_CALLS,
    },
    CallRule {
        category: category::OTHER,
        api: api::VULKAN,
        calls: VULKAN_OTHER_CALLS,
    },
];

pub const COUNTER_RULES: &[CounterRule] = &[
    CounterRule {
        category: counter_category::CPU_TEMP,
        counters: CPU_TEMP_COUNTERS,
    },
    CounterRule {
        category: counter_category::GPU_TEMP,
        counters: GPU_TEMP_COUNTERS,
    },
    CounterRule {
        category: counter_category::CPU_LOAD,
        counters: CPU_LOAD_COUNTERS,
    },
    CounterRule {
        category: counter_category::GPU_LOAD,
        counters: GPU_LOAD_COUNTERS,
    },
    CounterRule {
        category: counter_category::CPU_FREQ,
        counters: CPU_FREQ_COUNTERS,
    },
    CounterRule {
        category: counter_category::FPS,
        counters: FPS_COUNTERS,
    },
    CounterRule {
        category: counter_category::GPU_FREQ,
        counters: GPU_FREQ_COUNTERS,
    },
    CounterRule {
        category: counter_category::POWER,
        counters: POWER_COUNTERS,
    },
    CounterRule {
        category: counter_category::FB_STALLS,
        counters: FB_STALL_COUNTERS,
    },
    CounterRule {
        category: counter_category::TOTAL_CYCLES,
        counters: TOTAL_CYCLE_COUNTERS,
    },
    CounterRule {
        category: counter_category::TEX_STALLS,
        counters: TEX_STALL_COUNTERS,
    },
    CounterRule {
        category: counter_category::NUM_INST,
        counters: NUM_INST_COUNTERS,
    },
    CounterRule {
        category: counter_category::NUM_PIXELS,
        counters: NUM_PIXELS_COUNTERS,
    },
    CounterRule {
        category: counter_category::ACTIVITY,
        counters: ACTIVITY_COUNTERS,
    },
];

const OPENCL_FRAME_DELIMITERS: &[&str] = &[
    "clFinish",
    "clFlush",
];

const VULKAN_FRAME_DELIMITERS: &[&str] = &[
    "vkQueuePresentKHR",
];

const OPENGL_FRAME_DELIMITERS: &[&str] = &[
    "glClear",
    "glFlush",
    "glFinish",
];

const EGL_FRAME_DELIMITERS: &[&str] = &[
    "eglSwapBuffers",
];

const OPENCL_DRAW_CALLS: &[&str] = &[
    "clEnqueueNDRangeKernel",
    "clEnqueueNativeKernel",
];

const VULKAN_DRAW_CALLS: &[&str] = &[
    "vkCmdExecuteCommands",
    "vkCmdBeginRenderPass",
    "vkCmdNextSubpass",
    "vkCmdEndRenderPass",
    "vkCmdClearColorImage",
    "vkCmdClearDepthStencilImage",
    "vkCmdClearAttachments",
    "vkCmdDraw",
    "vkCmdDrawIndexed",
    "vkCmdDrawIndirect",
    "vkCmdDrawIndexedIndirect",
];

const OPENGL_DRAW_CALLS: &[&str] = &[
    "glClear",
    "glDrawArrays",
    "glDrawArraysInstancedBaseInstance",
    "glDrawArraysInstanced",
    "glDrawArraysIndirect",
    "glMultiDrawArrays",
    "glMultiDrawArraysIndirect",
    "glDrawElements",
    "glDrawElementsInstancedBaseInstance",
    "glDrawElementsInstanced",
    "glMultiDrawElements",
    "glDrawRangeElements",
    "glDrawElementsBaseVertex",
    "glDrawRangeElementsBaseVertex",
    "glDrawElementsInstancedBaseVertex",
    "glDrawElementsInstancedBase-VertexBaseInstance",
    "glDrawElementsIndirect",
    "glMultiDrawElementsIndirect",
    "glDrawTransformFeedback",
    "glDrawTransformFeedbackInstanced",
    "glDrawTransformStream",
    "glDrawTransformStreamInstanced",
    "glDrawBuffer",
    "glDrawBuffers",
    "glDispatchCompute",
    "glDispatchComputeIndirect",
    "glNamedFramebufferDrawBuffers",
    "glClearColor",
    "glClearDepth",
    "glClearDepthf",
    "glClearStencil",
    "glClearBufferiv",
    "glClearBufferfv",
    "glClearBufferuiv",
    "glClearNamedFramebufferiv",
    "glClearNamedFramebufferfv",
    "glClearNamedFramebufferuiv",
    "glClearBufferfi",
    "glClearNamedFramebufferfi",
];

const OPENCL_BIND_CALLS: &[&str] = &[
    "clSetKernelArg",
    "clSetKernelArgSVMPointer",
    "clEnqueueReadBuffer",
    "clEnqueueReadBufferRect",
    "clEnqueueWriteBuffer",
    "clEnqueueWriteBufferRect",
    "clEnqueueFillBuffer",
    "clEnqueueCopyBuffer",
    "clEnqueueCopyBufferRect",
    "clEnqueueMapBuffer",
    "clEnqueueUnmapMemObject",
    "clEnqueueMigrateMemObjects",
    "clEnqueueSVMFree",
    "clEnqueueSVMMemcpy",
    "clEnqueueSVMMemFill",
    "clEnqueueSVMMap",
    "clEnqueueSVMUnmap",
    "clSetEventCallback",
    "clEnqueueReadImage",
    "clEnqueueWriteImage",
    "clEnqueueFillImage",
    "clEnqueueCopyImage",
    "clEnqueueCopyImageToBuffer",
    "clEnqueueCopyBufferToImage",
    "clEnqueueMapImage",
    "clEnqueueAcquireGLObjects",
    "clEnqueueReleaseGLObjects",
];

const VULKAN_BIND_CALLS: &[&str] = &[
    "vkCmdBindPipeline",
    "vkQueueSubmit",
    "vkBindBufferMemory",
    "vkBindImageMemory",
    "vkCmdBindDescriptorSets",
    "vkCmdFillBuffer",
    "vkCmdUpdateBuffer",
    "vkCmdBindIndexBuffer",
    "vkCmdBindVertexBuffers",
    "vkCmdSetLineWidth",
    "vkCmdSetDepthBias",
    "vkCmdSetBlendConstants",
    "vkCmdSetScissor",
    "vkCmdSetDepthBounds",
    "vkCmdSetStencilCompareMask",
    "vkSetCmdSetStencilWriteMask",
    "vkCmdSetStencilReference",
];

const OPENGL_BIND_CALLS: &[&str] = &[
    "glBindFramebuffer",
    "glBindVertexArray",
    "glBindBuffer",
    "glBindBufferRange",
    "glBindBufferBase",
    "glBindBuffersRange",
    "glBindBuffersBase",
    "glBufferStorage",
    "glNamedBufferStorage",
    "glBufferData",
    "glNamedBufferData",
    "glBufferSubData",
    "glNamedBufferSubData",
    "glClearBufferData",
    "glClearNamedBufferData",
    "glClearBufferSubData",
    "glClearNamedBufferSubData",
    "glMapBuffer",
    "glMapNamedBuffer",
    "glMapNamedBufferRange",
    "glFlushMapppedBufferRange",
    "glFlushMapppedNamedBufferRange",
    "glUnmapBuffer",
    "glUnmapNamedBuffer",
    "glCopyBufferSubData",
    "glCopyNamedBufferSubData",
    "glBindTexture",
    "glBindTextures",
    "glBindSampler",
    "glBindSamplers",
    "glBindImageTexture",
    "glBindImageTextures",
    "glBindTextureUnit",
    "glFramebufferTexture",
    "glFramebufferTexture1D",
    "glFramebufferTexture2D",
    "glFramebufferTexture3D",
    "glNamedFramebufferTexture",
    "glBlitFramebuffer",
    "glAttachShader",
    "glFramebufferRenderbuffer",
    "glBindAttribLocation",
    "glBindRenderbuffer",
    "glBindVertexBuffer",
    "glBindVertexBuffers",
    "glBindTransformFeedback",
    "glBindFragDataLocationIndex",
    "glBindFragDataLocation",
    "glReadBuffer",
    "glNamedFramebufferReadBuffer",
    "glReadPixels",
    "glReadnPixels",
    "glCopyImageSubData",
];

const EGL_BIND_CALLS: &[&str] = &[
    "eglBindAPI",
];

const OPENCL_WAIT_CALLS: &[&str] = &[
    "clWaitForEvents",
];

const VULKAN_WAIT_CALLS: &[&str] = &[
    "vkDeviceWaitIdle",
    "vkQueueWaitIdle",
    "vkWaitForFences",
    "vkCmdWaitForEvents",
    "vkCmdPipelineBarrier",
    "vkCmdPushConstants",
];

const OPENGL_WAIT_CALLS: &[&str] = &[
    "glClientWaitSync",
    "glWaitSync",
];

const EGL_WAIT_CALLS: &[&str] = &[
    "eglWaitGL",
    "eglWaitNative",
];

const OPENCL_SETUP_CALLS: &[&str] = &[
    "clGetPlatformIDs",
    "clGetPlatformIDsKHR",
    "clGetPlatformInfo",
    "clGetDeviceIDs",
    "clGetDeviceInfo",
    "clCreateSubDevices",
    "clCreateContext",
    "clCreateContextFromType",
    "clRetainContext",
    "clReleaseContext",
    "clGetContextInfo",
    "clGetExtensionFunctionAddressForPlatform",
    "clCreateCommandQueueWithProperties",
    "clRetainCommandQueue",
    "clReleaseCommandQueue",
    "clGetCommandQueueInfo",
    "clCreateCommandQueue",
    "clCreateBuffer",
    "clCreateSubBuffer",
    "clRetainMemObject",
    "clReleaseMemObject",
    "clGetMemObjectInfo",
    "clCreatePipe",
    "clGetPipeInfo",
    "clSVMAlloc",
    "clSVMFree",
    "clCreateProgramWithSource",
    "clCreateProgramWithBinary",
    "clCreateProgramWithBuiltInKernels",
    "clRetainProgram",
    "clReleaseProgram",
    "clBuildProgram",
    "clCompileProgram",
    "clLinkProgram",
    "clUnloadPlatformCompiler",
    "clGetPrograminfo",
    "clCreateKernel",
    "clCreateKernelsInProgram",
    "clRetainKernel",
    "clReleaseKernel",
    "clSetKernelExecInfo",
    "clGetKernelInfo",
    "clGetWorkgroupKernelInfo",
    "clGetKernelArgInfo",
    "clCreateUserEvent",
    "clSetUserEventStatus",
    "clGetEventInfo",
    "clRetainEvent",
    "clReleaseEvent",
    "clEnqueueMarkerWithWaitList",
    "clEnqueueBarrierWithWaitList",
    "clCreateImage",
    "clGetSupportedImageFormats",
    "clGetImageInfo",
    "clCreateSamplerWithProperties",
    "clRetainSampler",
    "clReleaseSampler",
    "clGetSamplerInfo",
    "clGetGLContextInfoKHR",
    "clCreateFromGLBuffer",
    "clCreateFromGLTexture",
    "clCreateFromGLRenderBuffer",
    "clGetGLObjectInfo",
    "clGetGLTextureInfo",
    "clCreateEventFromGLsyncKHR",
    "clGetDeviceIDsFromD3DD10KHR",
    "clCreateFromFromD3DD10BufferKHR",
    "clCreateFromFromD3DD10Texture2DKHR",
    "clCreateFromFromD3DD10Texture3DKHR",
    "clEnqueueAcquireD3D10ObjectsKHR",
    "clEnqueueReleaseD3D10ObjectsKHR",
    "clGetDeviceIDsFromDX9MediaAdapterKHR",
    "clCreateFromDX9MediaAdapterSurfaceKHR",
    "clEnqueueAcquireDX9MediaAdapterKHR",
    "clEnqueueReleaseDX9MediaAdapterKHR",
    "clGetDeviceIDsFromD3D11KHR",
    "clCreateFromD3D11BufferKHR",
    "clCreateFromD3D11Texture3DKHR",
    "clCreateFromD3D11Texture2DKHR",
    "clEnqueueAcquireD3D11ObjectsKHR",
    "clEnqueueReleaseD3D11ObjectsKHR",
    "clCreateFromEGLImageKHR",
    "clEnqueueAcquireEGLObjectsKHR",
    "clEnqueueReleaseEGLObjectsKHR",
    "clreateEventFromEGLsyncKHR",
];

const VULKAN_SETUP_CALLS: &[&str] = &[
    "vkGetDeviceQueue",
    "vkGetDeviceQueueFamilyProperties",
    "vkGetPhysicalDeviceQueueFamilyProperties",
    "vkGetPhysicalDeviceProperties",
    "vkEnumeratePhysicalDevices",
    "vkCreateInstance",
    "vkDestroyInstance",
    "vkGetInstanceProcAddr",
    "vkGetDeviceProcAddr",
    "vkCreateDevice",
    "vkDestroyDevice",
    "vkCreateCommandPool",
    "vkResetCommandPool",
    "vkDestroyCommandPool",
    "vkAllocateCommandBuffers",
    "vkResetCommandBuffer",
    "vkFreeCommandBuffers",
    "vkBeginCommandBuffer",
    "vkEndCommandBuffer",
    "vkCreateFence",
    "vkDestroyFence",
    "vkGetFenceStatus",
    "vkResetFences",
    "vkCreateSemaphore",
    "vkDestroySemaphore",
    "vkCreateEvent",
    "vkDestroyEvent",
    "vkGetEventStatus",
    "vkSetEvent",
    "vkResetEvent",
    "vkCmdSetEvent",
    "vkCmdResetEvent",
    "vkCreateRenderPass",
    "vkDestroyRenderPass",
    "vkCreateFramebuffer",
    "vkDestroyFramebuffer",
    "vkCmdGetRenderAreaGranularity",
    "vkCreateShaderModule",
    "vkDestroyShaderModule",
    "vkCreateComputePipelines",
    "vkCreateGraphicsPipelines",
    "vkDestroyPipeline",
    "vkCreatePipelineCache",
    "vkMergePipelineCaches",
    "vkGetPipelineCacheData",
    "vkDestroyPipelineCache",
    "vkGetPhysicalDeviceMemoryProperties",
    "vkAllocateMemory",
    "vkFreeMemory",
    "vkMapMemory",
    "vkFlushMappedMemoryRanges",
    "vkInvalidateMappedMemoryRanges",
    "vkUnmapMemory",
    "vkGetDeviceMemoryCommitment",
    "vkCreateBuffer",
    "vkDestroyBuffer",
    "vkCreateBufferView",
    "vkDestroyBufferView",
    "vkCreateImage",
    "vkGetImageSubresourceLayout",
    "vkDestroyImage",
    "vkCreateImageView",
    "vkDestroyImageView",
    "vkGetBufferMemoryRequirements",
    "vkGetImageMemoryRequirements",
    "vkCreateSampler",
    "vkDestroySampler",
    "vkCreateDescriptorSetLayout",
    "vkDestroyDescriptorSetLayout",
    "vkCreatePipelineLayout",
    "vkDestroyPipelineLayout",
    "vkCreateDescriptorPool",
    "vkDestroyDescriptorPool",
    "vkAllocateDescriptorSets",
    "vkFreeDescriptorSets",
    "vkResetDescriptorPool",
    "vkUpdateDescriptorSets",
    "vkCreateQueryPool",
    "vkDestroyQueryPool",
    "vkCmdResetQueryPool",
    "vkCmdBeginQuery",
    "vkCmdEndQuery",
    "vkGetQueryPoolResults",
    "vkCmdWriteTimestamp",
    "vkCreateAndroidSurfaceKHR",
    "vkCreateMirSurfaceKHR",
    "vkCreateWaylandSurfaceKHR",
    "vkCreateWin32SurfaceKHR",
    "vkCreateXcbSurfaceKHR",
    "vkCreateXlibSurfaceKHR",
    "vkDestroySurfaceKHR",
    "vkGetPhycicalDeviceDisplayPropertiesKHR",
    "vkGetPhysicalDeviceDisplayPlanePropertiesKHR",
    "vkGetDisplayPlaneSupportedDisplaysKHR",
    "vkGetDisplayModePropertiesKHR",
    "vkCreateDisplayModeKHR",
    "vkGetDisplayPlaneCapabilitiesKHR",
    "vkCreateDisplayPlaneSurfaceKHR",
    "vkGetPhysicalDeviceSurfaceSupportKHR",
    "vkGetPhysicalMirPresentationSupportKHR",
    "vkGetPhysicalWin32PresentationSupportKHR",
    "vkGetPhysicalDeviceWaylandPresentationSupportkHR",
    "vkGetPhysicalDeviceXcbPresentationSupportKHR",
    "vkGetPhysicalDeviceXlibPresentationSupportKHR",
    "vkGetPhysicalDeviceSurfaceCapabilitiesKHR",
    "vkGetPhysicalDeviceSurfaceFormatsKHR",
    "vkGetPhysicalDeviceSurfacePresentModesKHR",
    "vkCreateSwapchainKHR",
    "vkDestroySwapchainKHR",
    "vkCreateSharedSwapchainsKHR",
    "vkGetSwapchainImagesKHR",
    "vkAcquireNextImageKHR",
    "vkEnumerateInstanceLayerProperties",
    "vkEnumerateDeviceLayerProperties",
    "vkEnumerateInstanceExtensionProperties",
    "vkEnumerateDeviceExtensionProperties",
    "vkGetPhysicalDeviceFeatures",
    "vkGetPhysicalDeviceFormatProperties",
    "vkGetPhysicalDeviceImageFormatProperties",
];

const OPENGL_SETUP_CALLS: &[&str] = &[
    "glGetGraphicsResetStatus",
    "glGetIntegerv",
    "glGetInteger64v",
    "glDeteleSync",
    "glFenceSync",
    "glGetSynciv",
    "glIsSync",
    "glGenQueries",
    "glDeleteQueries",
    "glBeginQuery",
    "glBeginQueryIndexed",
    "glEndQuery",
    "glEndQueryIndexed",
    "glIsQuery",
    "glGetQueryiv",
    "glGetQueryIndexediv",
    "glGetQueryObjectuiv",
    "glGetQueryObjecti64v",
    "glGetQueryObjectui64v",
    "glQueryCounter",
    "glGenBuffers",
    "glCreateBuffers",
    "glDeleteBuffers",
    "glIsBuffer",
    "glGetBufferSubData",
    "glGetNamedBufferSubData",
    "glGetBufferParameteriv",
    "glGetBufferParameteri64v",
    "glGetNamedBufferParameteriv",
    "glGetNamedBufferParameteri64v",
    "glGetBufferPointerv",
    "glGetNamedBufferPointerv",
    "glCreateShader",
    "glShaderSource",
    "glCompileShader",
    "glReleaseShaderCompiler",
    "glDeleteShader",
    "glIsShader",
    "glShaderBinary",
    "glCreateProgram",
    "glAttachShader",
    "glDetachShader",
    "glLinkProgram",
    "glUseProgram",
    "glCreateShaderProgramv",
    "glProgramParameteri",
    "glDeleteProgram",
    "glIsProgram",
    "glGetProgramInterfaceiv",
    "glGetProgramResourceIndex",
    "glGetProgramResourceName",
    "glGetProgramResourceiv",
    "glGetProgramResourceLocation",
    "glGetProgramResourceLocationIndex",
    "glGenProgramPipelines",
    "glDeleteProgramPipelines",
    "glIsProgramPipeline",
    "glBindProgramPipeline",
    "glCreateProgramPipelines",
    "glUseProramStages",
    "glActiveShaderProgram",
    "glGetProgramBinary",
    "glProgramBinary",
    "glGetUniformLocation",
    "glGetActiveUniformName",
    "glGetUniformIndices",
    "glgetActiveUniform",
    "glgetActiveUniformsiv",
    "glGetActiveUniformBlockIndex",
    "glGetActiveUniformBlockName",
    "glGetActiveUniformBlockiv",
    "glGetActiveAtomicCounterBufferiv",
    "glUniformBlockBinding",
    "glShaderStorageBlockBinding",
    "glGetSubroutineUniformLocation",
    "glGetSubroutineIndex",
    "glGetActiveSubroutineName",
    "glGetActiveSubroutineUniformName",
    "glGetActiveSubroutineUniformiv",
    "glUniformSubroutinesuiv",
    "glMemoryBarrier",
    "glMemoryBarrierByRegion",
    "glGetShaderiv",
    "glGetProgramiv",
    "glGetProgramPipelineiv",
    "glGetAttachedShaders",
    "glGetShaderInfoLog",
    "glGetProgramInfoLog",
    "glGetProgramPipelineInfoLog",
    "glgetShaderSource",
    "glGetShaderPrecisionFormat",
    "glGetUniformfv",
    "glGetUniformiv",
    "glGetUniformdv",
    "glGetUniformuiv",
    "glGetnUniformfv",
    "glGetnUniformiv",
    "glGetnUniformdv",
    "glGetnUniformuiv",
    "glGetUniformSubroutineuiv",
    "glGetProgramStageuiv",
    "glActiveTexture",
    "glGenTextures",
    "glCreateTextures",
    "glDeleteTextures",
    "glIsTexture",
    "glGenSamplers",
    "glCreateSamplers",
    "glSamplerParameteri",
    "glSamplerParameterf",
    "glSamplerParameteriv",
    "glSamplerParameterfv",
    "glSamplerParameterIiv",
    "glSamplerParameterIuiv",
    "glDeleteSamplers",
    "glIsSampler",
    "glGetSamplerParameteri",
    "glGetSamplerParameterf",
    "glGetSamplerParameteriv",
    "glGetSamplerParameterfv",
    "glGetSamplerParameterIiv",
    "glGetSamplerParameterIuiv",
    "glPixelStorei",
    "glPixelStoref",
    "glTexImage3D",
    "glTexImage2D",
    "glTexImage1D",
    "glCopyTexImage2D",
    "glCopyTexImage1D",
    "glTexSubImage3D",
    "glTexSubImage2D",
    "glTexSubImage1D",
    "glCopyTexSubImage3D",
    "glCopyTexSubImage2D",
    "glCopyTexSubImage1D",
    "glTextureSubImage3D",
    "glTextureSubImage2D",
    "glTextureSubImage1D",
    "glCopyTextureSubImage3D",
    "glCopyTextureSubImage2D",
    "glCopyTextureSubImage1D",
    "glCompressedTexImage3D",
    "glCompressedTexImage2D",
    "glCompressedTexImage1D",
    "glCompressedTexSubImage3D",
    "glCompressedTexSubImage2D",
    "glCompressedTexSubImage1D",
    "glCompressedTextureSubImage3D",
    "glCompressedTextureSubImage2D",
    "glCompressedTextureSubImage1D",
    "glTexImage3DMultisample",
    "glTexImage2DMultisample",
    "glTexBufferRange",
    "glTextureBufferRange",
    "glTexBuffer",
    "glTextureBuffer",
    "glTexParameteri",
    "glTexParameterf",
    "glTexParameteriv",
    "glTexParameterfv",
    "glTexParameterliv",
    "glTexParameterluiv",
    "glTextureParameterf",
    "glTextureParameteri",
    "glTextureParameterfv",
    "glTextureParameteriv",
    "glTextureParameterliv",
    "glTextureParameterluiv",
    "glGetTexParameteriv",
    "glGetTexParameterfv",
    "glGetTexParameterliv",
    "glGetTexParameterluiv",
    "glGetTextureParameterfv",
    "glGetTextureParameteriv",
    "glGetTextureParameterliv",
    "glGetTextureParameterluiv",
    "glGetTexLevelParameteriv",
    "glGetTexLevelParameterfv",
    "glGetTexLevelParameterliv",
    "glGetTexLevelParameterluiv",
    "glGetTexImage",
    "glGetTextureImage",
    "glGetTextureSubImage",
    "glGetCompressedTexImage",
    "glGetCompressedTextureImage",
    "glGetnCompressedTexImage",
    "glGetCompressedTextureSubImage",
    "glEnable",
    "glDisable",
    "glIsEnabled",
    "glGenerateMipmap",
    "glGenerateTextureMipmap",
    "glTextureView",
    "glTexStorage1D",
    "glTexStorage2D",
    "glTexStorage3D",
    "glTextureStorage1D",
    "glTextureStorage2D",
    "glTextureStorage3D",
    "glTexStorage2DMultisample",
    "glTextureStorage3DMultisample",
    "glInvalidateTexSubImage",
    "glInvalidateTexImage",
    "glClearTexSubImage",
    "glClearTexImage",
    "glCreateFramebuffers",
    "glGenFramebuffers",
    "glDeleteFramebuffers",
    "glIsFrameBuffer",
    "glFramebufferParameteri",
    "glNamedFramebufferParameteri",
    "glGetFramebufferParameteriv",
    "glGetNamedFramebufferParameteriv",
    "glGetFramebufferAttachmentParameteriv",
    "glGetNamedFramebufferAttachmentParameteriv",
    "glGenRenderbuffers",
    "glCreateRenderbuffers",
    "glDeleteRenderbuffers",
    "glIsRenderbuffer",
    "glRenderbufferStorageMultisample",
    "glNamedRenderbufferStorageMultisample",
    "glRenderbufferStorage",
    "glNamedRenderbufferStorage",
    "glGetRenderbufferParameteriv",
    "glGetNamedRenderbufferParameteriv",
    "glFramebufferRenderbuffer",
    "glNamedFramebufferRenderbuffer",
    "glFrameBufferTexture",
    "glNamedFramebufferTexture",
    "glFrameBufferTexture1D",
    "glFrameBufferTexture2D",
    "glFrameBufferTexture3D",
    "glFrameBufferTextureLayer",
    "glNamedFrameBufferTextureLayer",
    "glTextureBarrier",
    "glCheckFramebufferStatus",
    "glCheckNamedFramebufferStatus",
    "glPatchParameteri",
    "glVertexAttrib1s",
    "glVertexAttrib2s",
    "glVertexAttrib3s",
    "glVertexAttrib4s",
    "glVertexAttrib1f",
    "glVertexAttrib2f",
    "glVertexAttrib3f",
    "glVertexAttrib4f",
    "glVertexAttrib1d",
    "glVertexAttrib2d",
    "glVertexAttrib3d",
    "glVertexAttrib4d",
    "glVertexAttrib1sv",
    "glVertexAttrib2sv",
    "glVertexAttrib3sv",
    "glVertexAttrib4sv",
    "glVertexAttrib1fv",
    "glVertexAttrib2fv",
    "glVertexAttrib3fv",
    "glVertexAttrib4fv",
    "glVertexAttrib1dv",
    "glVertexAttrib2dv",
    "glVertexAttrib3dv",
    "glVertexAttrib4dv",
    "glVertexAttrib4bv",
    "glVertexAttrib4iv",
    "glVertexAttrib4ubv",
    "glVertexAttrib4usv",
    "glVertexAttrib4uiv",
    "glVertexAttrib4b",
    "glVertexattribNub",
    "glVertexAttrib4Nbv",
    "glVertexAttrib4Nsv",
    "glVertexAttrib4Niv",
    "glVertexAttrib4Nfv",
    "glVertexAttrib4Ndv",
    "glVertexAttrib4Nubv",
    "glVertexAttrib4Nusv",
    "glVertexAttrib4Nuiv",
    "glVertexAttribI1i",
    "glVertexAttribI2i",
    "glVertexAttribI3i",
    "glVertexAttribI4i",
    "glVertexAttribI1ui",
    "glVertexAttribI2ui",
    "glVertexAttribI3ui",
    "glVertexAttribI4ui",
    "glVertexAttribI1iv",
    "glVertexAttribI2iv",
    "glVertexAttribI3iv",
    "glVertexAttribI4iv",
    "glVertexAttribI1uiv",
    "glVertexAttribI2uiv",
    "glVertexAttribI3uiv",
    "glVertexAttribI4uiv",
    "glVertexAttribI4bv",
    "glVertexAttribI4sv",
    "glVertexAttribI4ubv",
    "glVertexAttribI4usv",
    "glVertexAttribL1d",
    "glVertexAttribL2d",
    "glVertexAttribL3d",
    "glVertexAttribL4d",
    "glVertexAttribL1dv",
    "glVertexAttribL2dv",
    "glVertexAttribL3dv",
    "glVertexAttribL4dv",
    "glVertexAttribP1ui",
    "glVertexAttribP2ui",
    "glVertexAttribP3ui",
    "glVertexAttribP4ui",
    "glVertexAttribP1uiv",
    "glVertexAttribP2uiv",
    "glVertexAttribP3uiv",
    "glVertexAttribP4uiv",
    "glGenVertexArrays",
    "glDeleteVertexArrays",
    "glCreateVertexArrays",
    "glIsVertexArray",
    "glVertexArrayElementBuffer",
    "glVertexAttribFormat",
    "glVertexAttribIFormat",
    "glVertexAttribLFormat",
    "glVertexArrayAttribFormat",
    "glVertexArrayAttribIFormat",
    "glVertexArrayAttribLFormat",
    "glVertexArrayVertexBuffer",
    "glVertexArrayVertexBuffers",
    "glVertexAttribBinding",
    "glVertexArrayAttribBinding",
    "glVertexAttribPointer",
    "glVertexAttribIPointer",
    "glVertexAttribLPointer",
    "glEnableVertexAttribArray",
    "glEnableVertexArrayAttrib",
    "glDisableVertexAttribArray",
    "glDisableVertexArrayAttrib",
    "glVertexBindingDivisor",
    "glVertexArrayBindingDivisor",
    "glVertexAttribDivisor",
    "glPrimitiveRestartIndex",
    "glGetVertexArrayiv",
    "glGetArrayIndexdiv",
    "glGetVertexArrayIndexed64iv",
    "glGetVertexAttribdv",
    "glGetVertexAttribfv",
    "glGetVertexAttribiv",
    "glGetVertexAttribIiv",
    "glGetVertexAttribIuiv",
    "glGetVertexAttribLdv",
    "glGetVertexAttribPointerv",
    "glBeginConditionalRender",
    "glEndConditionalRender",
    "glGetActiveAttrib",
    "glGetAttribLocation",
    "glTransformFeedbackVaryings",
    "glGetTransformFeedbackVarying",
    "glValidateProgram",
    "glValidateProgramPipeline",
    "glPatchParameterfv",
    "glGenTransformFeedbacks",
    "glDeleteTransformFeedbacks",
    "glIsTransformFeedback",
    "glCreateTransformFeedbacks",
    "glBeginTransformFeedback",
    "glEndTransfromFeedback",
    "glPauseTransformFeedback",
    "glResumeTransformFeedback",
    "glTransformBufferFeedbackBufferRange",
    "glTransformFeedbackBufferBase",
    "glProvokingVertex",
    "glClipControl",
    "glDepthRangeArrayv",
    "glDepthRangeIndexed",
    "glDepthRange",
    "glDepthRangef",
    "glViewportArrayv",
    "glViewportIndexedf",
    "glViewportIndexedfv",
    "glViewport",
    "glGetMultisamplefv",
    "glMinSampleShading",
    "glPointSize",
    "glPointParameteri",
    "glPointParameterf",
    "glPointParameteriv",
    "glPointParameterfv",
    "glLineWidth",
    "glFrontFace",
    "glCullFace",
    "glPolygonMode",
    "glPolygonOffset",
    "glGetFragDataLocation",
    "glGetFragDataIndex",
    "glEnablei",
    "glDisablei",
    "glIsEnabledi",
    "glScissorArrayv",
    "glScissorIndexed",
    "glScissorIndexedv",
    "glScissor",
    "glSampleCoverage",
    "glSampleMaski",
    "glStencilFunc",
    "glStencilFuncSeparate",
    "glStencilOp",
    "glStencilOpSeparate",
    "glDepthFunc",
    "glBlendEquation",
    "glBlendEquationSeparate",
    "glBlendEquationi",
    "glBlendEquationSeparatei",
    "glBlendFunc",
    "glBlendFuncSeparate",
    "glBlendFunci",
    "glBlendFuncSeparatei",
    "glBlendColor",
    "glLogicOp",
    "glHint",
    "glNamedFramebufferDrawBuffer",
    "glColorMask",
    "glColorMaski",
    "glDepthMask",
    "glStencilMask",
    "glStencilMaskSeparate",
    "glInvalidateSubFramebuffer",
    "glInvalidateNamedFramebuffersubdata",
    "glInvalidateFramebuffer",
    "glInvalidateNamedFramebufferData",
    "glClampColor",
    "glBlitFramebuffer",
    "glBlitNamedFramebuffer",
    "glGetBooleanv",
    "glGetFloatv",
    "glGetDoublev",
    "glGetDoublei_v",
    "glGetBooleani_v",
    "glgetIntegeri_v",
    "glGetFloati_v",
    "glgetInteger64i_v",
    "glGetPointerv",
    "glGetString",
    "glGetStringi",
    "glGetInternalformativ",
    "glGetInternalformati64v",
    "glGetTransformFeedbackiv",
    "glGetTransformFeedbacki_v",
    "glGetTransformFeedbacki64_v",
    "glGetFixedv",
];

const EGL_SETUP_CALLS: &[&str] = &[
    "eglGetProcAddress",
    "eglChooseConfig",
    "eglGetConfigAttrib",
    "eglCreateWindowSurface",
    "eglInitialize",
    "eglCreateContext",
    "eglSetBlobCacheFuncsANDROID",
    "eglQueryString",
    "eglMakeCurrent",
    "eglReleaseThread",
    "eglQuerySurface",
    "eglDestroySurface",
    "eglDestroyContext",
];

const OPENCL_ERROR_CALLS: &[&str] = &[
    "clGetEventProfilingInfo",
    "clGetProgramBuildInfo",
];

const VULKAN_ERROR_CALLS: &[&str] = &[
    "vkCreateDebugReportCallbackEXT",
];

const OPENGL_ERROR_CALLS: &[&str] = &[
    "glGetError",
    "glDebugMessageCallback",
    "glDebugMessageControl",
    "glPushDebugControl",
    "glDebugMessageInsert",
    "glPushDebugGroup",
    "glPopDebugGroup",
    "glObjectLabel",
    "glObjectPtrLabel",
    "glGetDebugMessageLog",
    "glGetObjectLabel",
    "glGetObjectPtrLabel",
];

const EGL_ERROR_CALLS: &[&str] = &[
    "eglGetError",
];

const OPENCL_COMPILE_CALLS: &[&str] = &[
    "clCreateProgramWithSource",
    "clCreateProgramWithBinary",
    "clCreateProgramWithBuiltInKernels",
    "clRetainProgram",
    "clBuildProgram",
    "clCompileProgram",
    "clLinkProgram",
    "clCreateKernel",
    "clCreateKernelsInProgram",
    "clSetKernelArg",
    "clSetKernelArgSVMPointer",
];

const OPENCL_COMPUTE_CALLS: &[&str] = &[
    "clEnqueueNDRangeKernel",
    "clEnqueueNativeKernel",
    "clSetEventCallback",
    "clFinish",
    "clFlush",
];

const OPENCL_DATA_TRANSFER_CALLS: &[&str] = &[
    "clEnqueueReadBuffer",
    "clEnqueueReadBufferRect",
    "clEnqueueWriteBuffer",
    "clEnqueueWriteBufferRect",
    "clEnqueueFillBuffer",
    "clEnqueueCopyBuffer",
    "clEnqueueCopyBufferRect",
    "clEnqueueMapBuffer",
    "clEnqueueUnmapMemObject",
    "clEnqueueMigrateMemObjects",
    "clEnqueueSVMFree",
    "clEnqueueSVMMemcpy",
    "clEnqueueSVMMemFill",
    "clEnqueueSVMMap",
    "clEnqueueSVMUnmap",
    "clEnqueueReadImage",
    "clEnqueueWriteImage",
    "clEnqueueFillImage",
    "clEnqueueCopyImage",
    "clEnqueueCopyImageToBuffer",
    "clEnqueueCopyBufferToImage",
    "clEnqueueNDRangeKernel",
    "clEnqueueMapImage",
];

const OPENGL_STATE_CALLS: &[&str] = &[
    "glBindFramebuffer",
    "glBindVertexArray",
    "glBindBuffer",
    "glBindBufferRange",
    "glBindBufferBase",
    "glBindBuffersRange",
    "glBindBuffersBase",
    "glBindProgramPipeline",
    "glBindTexture",
    "glBindTextures",
    "glBindSampler",
    "glBindSamplers",
    "glBindImageTexture",
    "glBindImageTextures",
    "glBindTextureUnit",
    "glBindAttribLocation",
    "glBindRenderbuffer",
    "glBindVertexBuffer",
    "glBindVertexBuffers",
    "glBindTransformFeedback",
    "glBindFragDataLocationIndex",
    "glBindFragDataLocation",
    "glEnable",
    "glEnableVertexAttribArray",
    "glEnableVertexArrayAttrib",
    "glDisable",
    "glDepthMask",
];

const OPENGL_FRAME_CALLS: &[&str] = &[
    "eglSwapBuffers",
    "glFinish",
    "glClear",
];

const OPENGL_TEXTURE_CALLS: &[&str] = &[
    "glActiveTexture",
    "glBindImageTexture",
    "glBindImageTextures",
    "glBindTexture",
    "glBindTextures",
    "glBindTextureUnit",
    "glClearTexImage",
    "glClearTexSubImage",
    "glCompressedTexImage1D",
    "glCompressedTexImage2D",
    "glCompressedTexImage3D",
    "glCompressedTexSubImage1D",
    "glCompressedTexSubImage2D",
    "glCompressedTexSubImage3D",
    "glCompressedTextureSubImage1D",
    "glCompressedTextureSubImage2D",
    "glCompressedTextureSubImage3D",
    "glCopyTexImage1D",
    "glCopyTexImage2D",
    "glCopyTexSubImage1D",
    "glCopyTexSubImage2D",
    "glCopyTexSubImage3D",
    "glCopyTextureSubImage1D",
    "glCopyTextureSubImage2D",
    "glCopyTextureSubImage3D",
    "glCreateTextures",
    "glDeleteTextures",
    "glFramebufferTexture",
    "glFrameBufferTexture",
    "glFramebufferTexture1D",
    "glFrameBufferTexture1D",
    "glFramebufferTexture2D",
    "glFrameBufferTexture2D",
    "glFramebufferTexture3D",
    "glFrameBufferTexture3D",
    "glFrameBufferTextureLayer",
    "glGenerateTextureMipmap",
    "glGenTextures",
    "glGetCompressedTexImage",
    "glGetCompressedTextureImage",
    "glGetCompressedTextureSubImage",
    "glGetnCompressedTexImage",
    "glGetTexImage",
    "glGetTexLevelParameterfv",
    "glGetTexLevelParameteriv",
    "glGetTexLevelParameterliv",
    "glGetTexLevelParameterluiv",
    "glGetTexParameterfv",
    "glGetTexParameteriv",
    "glGetTexParameterliv",
    "glGetTexParameterluiv",
    "glGetTextureImage",
    "glGetTextureParameterfv",
    "glGetTextureParameteriv",
    "glGetTextureParameterliv",
    "glGetTextureParameterluiv",
    "glGetTextureSubImage",
    "glInvalidateTexImage",
    "glInvalidateTexSubImage",
    "glIsTexture",
    "glNamedFramebufferTexture",
    "glNamedFrameBufferTextureLayer",
    "glTexBuffer",
    "glTexBufferRange",
    "glTexImage1D",
    "glTexImage2D",
    "glTexImage2DMultisample",
    "glTexImage3DMultisample",
    "glTexImage3D",
    "glTexParameterf",
    "glTexParameterfv",
    "glTexParameteri",
    "glTexParameteriv",
    "glTexParameterliv",
    "glTexParameterluiv",
    "glTexStorage1D",
    "glTexStorage2D",
    "glTexStorage2DMultisample",
    "glTexStorage3D",
    "glTexSubImage1D",
    "glTexSubImage2D",
    "glTexSubImage3D",
    "glTextureBarrier",
    "glTextureBuffer",
    "glTextureBufferRange",
    "glTextureParameterf",
    "glTextureParameterfv",
    "glTextureParameteri",
    "glTextureParameteriv",
    "glTextureParameterliv",
    "glTextureParameterluiv",
    "glTextureStorage1D",
    "glTextureStorage2D",
    "glTextureStorage3D",
    "glTextureStorage3DMultisample",
    "glTextureSubImage1D",
    "glTextureSubImage2D",
    "glTextureSubImage3D",
    "glTextureView",
];

const VULKAN_PIPELINE_CALLS: &[&str] = &[
    "vkCmdBindPipeline",
    "vkCmdPipelineBarrier",
    "vkCreateComputePipelines",
    "vkCreateGraphicsPipelines",
    "vkDestroyPipeline",
    "vkCreatePipelineCache",
    "vkMergePipelineCaches",
    "vkGetPipelineCacheData",
    "vkDestroyPipelineCache",
    "vkCreatePipelineLayout",
    "vkDestroyPipelineLayout",
];

const VULKAN_DESCRIPTOR_CALLS: &[&str] = &[
    "vkCmdBindDescriptorSets",
    "vkCreateDescriptorSetLayout",
    "vkDestroyDescriptorSetLayout",
    "vkCreateDescriptorPool",
    "vkDestroyDescriptorPool",
    "vkAllocateDescriptorSets",
    "vkFreeDescriptorSets",
    "vkResetDescriptorPool",
    "vkUpdateDescriptorSets",
];

const OPENGL_BUFFER_CALLS: &[&str] = &[
    "glBindBuffer",
    "glBindBufferBase",
    "glBindBufferRange",
    "glBindBuffersBase",
    "glBindBuffersRange",
    "glBindVertexBuffer",
    "glBindVertexBuffers",
    "glBufferData",
    "glBufferStorage",
    "glBufferSubData",
    "glClearBufferData",
    "glClearBufferfi",
    "glClearBufferfv",
    "glClearBufferiv",
    "glClearBufferSubData",
    "glClearBufferuiv",
    "glClearNamedBufferData",
    "glClearNamedBufferSubData",
    "glCopyBufferSubData",
    "glCopyNamedBufferSubData",
    "glCreateBuffers",
    "glDeleteBuffers",
    "glDrawBuffer",
    "glDrawBuffers",
    "glFlushMapppedBufferRange",
    "glFlushMapppedNamedBufferRange",
    "glFrameBufferTexture",
    "glFrameBufferTexture1D",
    "glFrameBufferTexture2D",
    "glFrameBufferTexture3D",
    "glFrameBufferTextureLayer",
    "glGenBuffers",
    "glGetActiveAtomicCounterBufferiv",
    "glGetBufferParameteri64v",
    "glGetBufferParameteriv",
    "glGetBufferPointerv",
    "glGetBufferSubData",
    "glGetNamedBufferParameteri64v",
    "glGetNamedBufferParameteriv",
    "glGetNamedBufferPointerv",
    "glGetNamedBufferSubData",
    "glIsBuffer",
    "glIsFrameBuffer",
    "glMapBuffer",
    "glMapNamedBuffer",
    "glMapNamedBufferRange",
    "glNamedBufferData",
    "glNamedBufferStorage",
    "glNamedBufferSubData",
    "glNamedFramebufferDrawBuffer",
    "glNamedFramebufferDrawBuffers",
    "glNamedFramebufferReadBuffer",
    "glNamedFrameBufferTextureLayer",
    "glReadBuffer",
    "glTexBuffer",
    "glTexBufferRange",
    "glTextureBuffer",
    "glTextureBufferRange",
    "glTransformBufferFeedbackBufferRange",
    "glTransformFeedbackBufferBase",
    "glUnmapBuffer",
    "glUnmapNamedBuffer",
    "glVertexArrayElementBuffer",
    "glVertexArrayVertexBuffer",
    "glVertexArrayVertexBuffers",
];

const OPENCL_MEMORY_CALLS: &[&str] = &[
    "clCreateBuffer",
    "clCreateSubBuffer",
    "clRetainMemObject",
    "clReleaseMemObject",
    "clGetMemObjectInfo",
    "clCreatePipe",
    "clGetPipeInfo",
    "clSVMAlloc",
    "clSVMFree",
    "clSetKernelArg",
    "clSetKernelArgSVMPointer",
    "clCreateImage",
    "clGetSupportedImageFormats",
    "clGetImageInfo",
];

const OPENGL_BLOCK_CALLS: &[&str] = &[
    "glFlush",
    "glFinish",
    "glBufferSubData",
    "glNamedBufferSubData",
    "glMapBuffer",
    "glMapNamedBuffer",
    "glMapNamedBufferRange",
    "glTexSubImage1D",
    "glTexSubImage2D",
    "glTexSubImage3D",
    "glWaitSync",
    "glClientWaitSync",
    "glReadPixels",
];

const OPENGL_SHADER_USE_CALLS: &[&str] = &[
    "glActiveShaderProgram",
    "glAttachShader",
    "glCompileShader",
    "glCreateShader",
    "glCreateShaderProgramv",
    "glDeleteShader",
    "glDetachShader",
    "glGetAttachedShaders",
    "glGetShaderInfoLog",
    "glGetShaderiv",
    "glGetShaderPrecisionFormat",
    "glgetShaderSource",
    "glIsShader",
    "glReleaseShaderCompiler",
    "glShaderBinary",
    "glShaderSource",
    "glShaderStorageBlockBinding",
    "glUseProgram",
];

const VULKAN_OTHER_CALLS: &[&str] = &[
    "vkCmdExecuteCommands",
    "vkCmdResolveImage",
    "vkAllocateMemory",
];

const CPU_TEMP_COUNTERS: &[&str] = &[
    "CPU Temperature",
    "CPU temperature",
    "CPU Cluster 0 Temperature",
    "CPU Cluster 1 Temperature",
];

const GPU_TEMP_COUNTERS: &[&str] = &[
    "GPU Temperature",
];

const CPU_LOAD_COUNTERS: &[&str] = &[
    "CPU Core 0 Load",
    "CPU Core 1 Load",
    "CPU Core 2 Load",
    "CPU Core 3 Load",
    "CPU Core 4 Load",
    "CPU Core 5 Load",
    "CPU Core 6 Load",
    "CPU Core 7 Load",
    "User Cpu0 Usage",
    "User Cpu1 Usage",
];

const GPU_LOAD_COUNTERS: &[&str] = &[
    "GPU Load",
];

const CPU_FREQ_COUNTERS: &[&str] = &[
    "Freq Core 1",
    "Freq Core 2",
    "CPU Core 0 Frequency",
    "CPU Core 1 Frequency",
    "CPU Core 2 Frequency",
    "CPU Core 3 Frequency",
    "CPU Core 4 Frequency",
    "CPU Core 5 Frequency",
    "CPU Core 6 Frequency",
    "CPU Core 7 Frequency",
];

const FPS_COUNTERS: &[&str] = &[
    "FPS",
];

const GPU_FREQ_COUNTERS: &[&str] = &[];

const POWER_COUNTERS: &[&str] = &[
    "Battery Power",
];

const FB_STALL_COUNTERS: &[&str] = &[
    "Core0 FB Stall Cycles",
    "Core1 FB Stall Cycles",
];

const TOTAL_CYCLE_COUNTERS: &[&str] = &[
    "Core0 Total Cycles",
    "Core1 Total Cycles",
];

const TEX_STALL_COUNTERS: &[&str] = &[
    "Core0 TexMap Stall Cycles",
    "Core1 TexMap Stall Cycles",
];

const NUM_INST_COUNTERS: &[&str] = &[
    "Core0 Instructions Number",
    "Core1 Instruction Number",
];

const NUM_PIXELS_COUNTERS: &[&str] = &[
    "Core0 Number of pixels",
    "Core1 Number of pixels",
];

const ACTIVITY_COUNTERS: &[&str] = &[
    "Core0 Scheduler Active Cycles",
    "Core0 Pipe Active Cycles",
    "Core0 Instr. Memory Active",
    "Core0 Register File Active",
    "Core0 TextureMap Active",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_triples() {
        let mut seen = HashSet::new();
        for rule in CALL_RULES {
            for call in rule.calls {
                assert!(
                    seen.insert((*call, rule.category, rule.api)),
                    "{call} listed twice under {} for {}",
                    rule.category,
                    rule.api
                );
            }
        }
    }

    #[test]
    fn test_every_category_has_rules() {
        let categories: HashSet<&str> = CALL_RULES.iter().map(|r| r.category).collect();
        assert_eq!(categories.len(), 19);
        assert!(categories.contains(category::FRAME_DELIMITER));
        assert!(categories.contains(category::OTHER));

        let counter_categories: Vec<&str> = COUNTER_RULES.iter().map(|r| r.category).collect();
        assert_eq!(counter_categories.len(), 14);
    }

    #[test]
    fn test_egl_calls_filed_under_opengles() {
        let swap = CALL_RULES
            .iter()
            .find(|r| r.calls.contains(&"eglSwapBuffers"))
            .unwrap();
        assert_eq!(swap.api, api::OPENGLES);
        assert_eq!(swap.category, category::FRAME_DELIMITER);
    }
}
