//! Error types for the intro viewer.
//!
//! The animation core itself cannot fail: samplers degrade to empty output
//! and the field guards its own lifecycle. Errors only arise while standing
//! up the window and the GPU.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::AdapterRequest(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has a GPU with Vulkan/Metal/DX12 support.",
                e
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::AdapterRequest(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::AdapterRequest(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the intro.
#[derive(Debug)]
pub enum IntroError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for IntroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntroError::EventLoop(e) => write!(f, "Failed to run event loop: {}", e),
            IntroError::Window(e) => write!(f, "Failed to create window: {}", e),
            IntroError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for IntroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntroError::EventLoop(e) => Some(e),
            IntroError::Window(e) => Some(e),
            IntroError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for IntroError {
    fn from(e: winit::error::EventLoopError) -> Self {
        IntroError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for IntroError {
    fn from(e: winit::error::OsError) -> Self {
        IntroError::Window(e)
    }
}

impl From<GpuError> for IntroError {
    fn from(e: GpuError) -> Self {
        IntroError::Gpu(e)
    }
}
