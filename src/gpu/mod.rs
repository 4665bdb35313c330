mod buffers;
mod context;
mod error;
mod render;

pub use buffers::GridBuffers;
pub use context::GpuContext;
pub use error::GpuError;
pub use render::RenderPipeline;
