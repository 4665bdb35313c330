/// Failures while bringing up the GPU for a window
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("failed to create surface")]
    CreateSurface(#[source] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device")]
    RequestDevice(#[source] wgpu::RequestDeviceError),

    #[error("surface not supported by adapter")]
    UnsupportedSurface,
}
