use winit::dpi::PhysicalSize;

use crate::error::FrameError;
use crate::uniforms::CanvasUniforms;

/// Presentation seam between the controller and the GPU.
///
/// Selected once at start-up: the windowed host hands the controller a
/// [`GpuFrameSink`], tests hand it a recording stand-in. Releasing the
/// underlying resources happens by dropping the sink; the controller does
/// that exactly once during teardown.
///
/// [`GpuFrameSink`]: crate::gpu::GpuFrameSink
pub trait FrameSink {
    /// Applies a new backing-store size. Only called when the size changed.
    fn configure(&mut self, size: PhysicalSize<u32>);

    /// Pushes the uniform set and issues one full-surface draw call.
    fn draw(&mut self, uniforms: &CanvasUniforms) -> Result<(), FrameError>;
}
