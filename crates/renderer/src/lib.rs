//! Shader canvas controller: an animated fragment-shader surface with
//! resize-aware backing-store management, pointer smoothing, reduced-motion
//! handling, and graceful degradation when no GPU is available.
//!
//! Data flow per frame:
//!
//! ```text
//! host events ──> Viewport (size)  ──┐
//!            ──> PointerState (aim) ─┼──> ShaderCanvasController::frame()
//! TimeSource ──> TimeSample ─────────┘         │
//!                                              v
//!                               CanvasUniforms ──> FrameSink::draw()
//! ```
//!
//! [`ShaderCanvasController`] is pure state-machine logic and renders through
//! the [`FrameSink`] seam; [`gpu::GpuFrameSink`] is the wgpu-backed sink the
//! windowed host installs, and tests install recording stand-ins.

pub mod clock;
pub mod compile;
pub mod controller;
pub mod error;
pub mod gpu;
pub mod phase;
pub mod pointer;
pub mod sink;
pub mod types;
pub mod uniforms;
pub mod viewport;
pub mod window;

pub use clock::{BoxedTimeSource, FixedTimeSource, FramePacer, SystemTimeSource, TimeSample, TimeSource};
pub use compile::{parse_shader, validate_program};
pub use controller::{FrameReport, ShaderCanvasController};
pub use error::{ControllerError, FrameError};
pub use gpu::GpuFrameSink;
pub use phase::Phase;
pub use sink::FrameSink;
pub use types::{ControllerConfig, EffectParams, SurfaceBounds};
pub use uniforms::CanvasUniforms;
pub use window::{run_windowed, WindowOptions};
