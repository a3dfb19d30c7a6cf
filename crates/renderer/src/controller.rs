use tracing::{debug, error, info, warn};

use crate::clock::BoxedTimeSource;
use crate::error::{ControllerError, FrameError};
use crate::phase::Phase;
use crate::pointer::PointerState;
use crate::sink::FrameSink;
use crate::types::{ControllerConfig, SurfaceBounds};
use crate::uniforms::CanvasUniforms;
use crate::viewport::Viewport;

/// What one frame tick did, and whether another should be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// A draw call was issued and presented.
    pub rendered: bool,
    /// The host should schedule another frame tick.
    pub schedule_next: bool,
}

impl FrameReport {
    fn idle() -> Self {
        Self {
            rendered: false,
            schedule_next: false,
        }
    }
}

/// Owns one animated shader surface: program, viewport, pointer, and the
/// per-frame uniform update + draw call.
///
/// All state lives on the instance, so several controllers can coexist (one
/// per hero section). The controller never panics the host and never
/// propagates an initialization failure: a broken context or shader leaves
/// it in [`Phase::Failed`] with the host's static fallback untouched.
pub struct ShaderCanvasController<S: FrameSink> {
    config: ControllerConfig,
    phase: Phase,
    viewport: Viewport,
    pointer: PointerState,
    uniforms: CanvasUniforms,
    clock: BoxedTimeSource,
    sink: Option<S>,
    live: bool,
}

impl<S: FrameSink> ShaderCanvasController<S> {
    pub fn new(config: ControllerConfig, clock: BoxedTimeSource) -> Self {
        let viewport = Viewport::new(config.pixel_ratio_limit);
        let pointer = PointerState::new(config.pointer_smoothing);
        let uniforms = CanvasUniforms::new(1, 1, config.params);
        Self {
            config,
            phase: Phase::Uninitialized,
            viewport,
            pointer,
            uniforms,
            clock,
            sink: None,
            live: false,
        }
    }

    /// Completes initialization with the sink construction result.
    ///
    /// On failure the error is logged and the controller parks in
    /// [`Phase::Failed`]; nothing propagates to the host. Only valid while
    /// uninitialized: a late attach (after teardown, or a second attach) is
    /// dropped on the spot so teardown stays the sole release point.
    pub fn attach(&mut self, sink: Result<S, ControllerError>) {
        if self.phase != Phase::Uninitialized {
            warn!(phase = ?self.phase, "sink attach outside initialization; discarding");
            return;
        }
        match sink {
            Ok(sink) => {
                self.sink = Some(sink);
                self.phase = self.phase.on_init(true);
                self.clock.reset();
                debug!(reduced_motion = self.config.reduced_motion, "shader canvas ready");
            }
            Err(err) => {
                self.phase = self.phase.on_init(false);
                error!(error = %err, "shader canvas initialization failed; fallback stays active");
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once at least one frame has actually been presented.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Whether the host should keep requesting frame ticks.
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Records a new layout size and device pixel ratio.
    ///
    /// The backing size is applied lazily and idempotently; reporting the
    /// same size repeatedly performs no GPU work.
    pub fn surface_resized(&mut self, client_width: f64, client_height: f64, pixel_ratio: f64) {
        self.viewport
            .set_client_size(client_width, client_height, pixel_ratio);
        self.apply_pending_resize();
    }

    /// Routes a raw pointer/touch coordinate to the smoothing target.
    pub fn pointer_moved(&mut self, x: f64, y: f64, bounds: SurfaceBounds) {
        self.pointer.set_target(x, y, bounds);
    }

    /// Runs one frame iteration: resize re-check, pointer advance, uniform
    /// push, draw, schedule decision.
    pub fn frame(&mut self) -> FrameReport {
        if !self.phase.can_render() {
            return FrameReport::idle();
        }

        self.apply_pending_resize();
        let Some(size) = self.viewport.applied() else {
            // Layout has not settled yet; try again next tick.
            return FrameReport {
                rendered: false,
                schedule_next: true,
            };
        };

        self.pointer.advance();

        let sample = self.clock.sample();
        self.uniforms.set_time(sample.seconds);
        self.uniforms
            .set_resolution(size.width as f32, size.height as f32);
        self.uniforms.set_pointer(self.pointer.current());
        self.uniforms.set_params(self.config.params);

        let sink = self.sink.as_mut().expect("render phase implies a sink");
        match sink.draw(&self.uniforms) {
            Ok(()) => {
                if !self.live {
                    self.live = true;
                    info!("first frame presented; surface is live");
                }
                self.phase = self.phase.on_frame_rendered(self.config.reduced_motion);
                FrameReport {
                    rendered: true,
                    schedule_next: self.phase == Phase::Rendering,
                }
            }
            Err(FrameError::SurfaceLost) => {
                // Reconfigure at the current size and let the next tick retry.
                sink.configure(size);
                FrameReport {
                    rendered: false,
                    schedule_next: true,
                }
            }
            Err(err) => {
                warn!(error = %err, "frame presentation failed; stopping the render loop");
                self.teardown();
                FrameReport::idle()
            }
        }
    }

    /// Cancels scheduling and releases GPU resources exactly once.
    ///
    /// Safe to call repeatedly and after a failed initialization.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.phase = self.phase.on_teardown();
        if self.sink.take().is_some() {
            debug!("shader canvas released");
        }
    }

    fn apply_pending_resize(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if let Some(size) = self.viewport.take_pending() {
                sink.configure(size);
                debug!(width = size.width, height = size.height, "backing store resized");
            }
        }
    }
}
