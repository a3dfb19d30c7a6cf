//! Windowed host for a single shader canvas.
//!
//! Owns the winit event loop and translates window events into controller
//! calls: resize and scale changes feed the viewport, cursor and touch
//! positions feed the pointer target, and redraws run one controller frame.
//! Frame pacing follows the controller's scheduling decision plus an
//! optional FPS cap.

use std::time::Instant;

use anyhow::{anyhow, Result};
use tracing::info;
use winit::event::{Event, Touch, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::clock::{FramePacer, SystemTimeSource};
use crate::controller::ShaderCanvasController;
use crate::error::ControllerError;
use crate::gpu::GpuFrameSink;
use crate::phase::Phase;
use crate::types::{ControllerConfig, SurfaceBounds};

/// Everything the windowed host needs to start one canvas.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Optional frames-per-second cap; `None` renders on every vsync tick.
    pub fps_cap: Option<f32>,
    pub config: ControllerConfig,
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Runs the canvas until the window closes.
///
/// Initialization failures inside the canvas (no adapter, broken shader) are
/// logged by the controller and the host returns `Ok` without entering the
/// event loop, leaving whatever fallback presentation the caller has in
/// place. Only window-system failures return an error.
pub fn run_windowed(options: WindowOptions) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|err| anyhow!("failed to create event loop: {err}"))?;

    let window = WindowBuilder::new()
        .with_title(&options.title)
        .with_inner_size(winit::dpi::LogicalSize::new(options.width, options.height))
        .build(&event_loop)
        .map_err(|err| {
            anyhow!(ControllerError::SurfaceMissing(format!(
                "failed to create window: {err}"
            )))
        })?;

    let mut controller: ShaderCanvasController<GpuFrameSink> = ShaderCanvasController::new(
        options.config.clone(),
        Box::new(SystemTimeSource::default()),
    );

    let scale = window.scale_factor();
    let physical = window.inner_size();
    let logical = physical.to_logical::<f64>(scale);
    controller.surface_resized(logical.width, logical.height, scale);

    let sink = GpuFrameSink::new(
        &window,
        physical,
        &options.vertex_source,
        &options.fragment_source,
    );
    controller.attach(sink);
    if controller.phase() == Phase::Failed {
        info!("canvas initialization failed; exiting without presenting");
        return Ok(());
    }

    let mut pacer = FramePacer::new(options.fps_cap);
    let mut keep_ticking = controller.is_animating();
    let mut announced_live = false;
    let base_title = options.title.clone();

    if keep_ticking {
        window.request_redraw();
    }

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                    controller.teardown();
                    elwt.exit();
                }
                WindowEvent::Resized(new_size) => {
                    let scale = window.scale_factor();
                    let logical = new_size.to_logical::<f64>(scale);
                    controller.surface_resized(logical.width, logical.height, scale);
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    let logical = window.inner_size().to_logical::<f64>(scale_factor);
                    controller.surface_resized(logical.width, logical.height, scale_factor);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let bounds = SurfaceBounds::from_size(
                        window.inner_size().width as f64,
                        window.inner_size().height as f64,
                    );
                    controller.pointer_moved(position.x, position.y, bounds);
                }
                WindowEvent::Touch(Touch { location, .. }) => {
                    let bounds = SurfaceBounds::from_size(
                        window.inner_size().width as f64,
                        window.inner_size().height as f64,
                    );
                    controller.pointer_moved(location.x, location.y, bounds);
                }
                WindowEvent::RedrawRequested => {
                    let report = controller.frame();
                    if report.rendered {
                        pacer.mark_rendered(Instant::now());
                    }
                    keep_ticking = report.schedule_next;
                    if !announced_live && controller.is_live() {
                        announced_live = true;
                        window.set_title(&format!("{base_title} [live]"));
                        info!("canvas marked live");
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if !keep_ticking {
                    elwt.set_control_flow(ControlFlow::Wait);
                    return;
                }
                let now = Instant::now();
                if pacer.ready(now) {
                    window.request_redraw();
                    elwt.set_control_flow(ControlFlow::Wait);
                } else if let Some(deadline) = pacer.next_deadline() {
                    elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                } else {
                    elwt.set_control_flow(ControlFlow::Wait);
                }
            }
            _ => {}
        })
        .map_err(|err| anyhow!("window event loop error: {err}"))
}
