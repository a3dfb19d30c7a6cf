//! GPU-backed frame presentation.
//!
//! [`GpuFrameSink`] bundles the device/surface bundle with the linked effect
//! pipeline. Construction runs the shader gate first, so the controller only
//! ever holds a sink whose program is known to link.

mod context;
mod pipeline;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::dpi::PhysicalSize;

use crate::error::{ControllerError, FrameError};
use crate::sink::FrameSink;
use crate::uniforms::CanvasUniforms;

use context::GpuContext;
use pipeline::CanvasPipeline;

pub struct GpuFrameSink {
    context: GpuContext,
    pipeline: CanvasPipeline,
}

impl GpuFrameSink {
    /// Acquires a GPU context over `target` and links the effect program.
    ///
    /// Shader sources are gated through naga before any surface work, so a
    /// broken effect reports [`ControllerError::ShaderCompile`] or
    /// [`ControllerError::ShaderLink`] without touching the device.
    pub fn new<T>(
        target: &T,
        initial_size: PhysicalSize<u32>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ControllerError>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, initial_size)?;
        let pipeline = CanvasPipeline::new(
            &context.device,
            context.surface_format,
            vertex_source,
            fragment_source,
        )?;
        Ok(Self { context, pipeline })
    }
}

impl FrameSink for GpuFrameSink {
    fn configure(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
    }

    fn draw(&mut self, uniforms: &CanvasUniforms) -> Result<(), FrameError> {
        let frame = match self.context.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(FrameError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(FrameError::OutOfMemory),
            Err(err) => return Err(FrameError::Other(err.to_string())),
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline.write_uniforms(&self.context.queue, uniforms);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("canvas encoder"),
            });
        self.pipeline.encode_draw(&mut encoder, &view);
        self.context.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
