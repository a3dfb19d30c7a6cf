/// Failures that can occur while bringing a shader canvas up.
///
/// Every variant is non-fatal to the host: the controller catches it at the
/// point of origin, logs a diagnostic, and leaves the static fallback
/// presentation active. There are no retries; a failed compile or link is
/// permanent for the life of the process.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("no GPU rendering context could be acquired: {0}")]
    ContextUnavailable(String),
    #[error("shader failed to compile: {0}")]
    ShaderCompile(String),
    #[error("shader program failed to link: {0}")]
    ShaderLink(String),
    #[error("target surface is missing: {0}")]
    SurfaceMissing(String),
}

/// Per-frame presentation failures reported by a [`FrameSink`].
///
/// `SurfaceLost` is recoverable by reconfiguring the surface at the current
/// size; the other variants end the render loop.
///
/// [`FrameSink`]: crate::FrameSink
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("presentation surface was lost or is outdated")]
    SurfaceLost,
    #[error("presentation surface is out of memory")]
    OutOfMemory,
    #[error("frame could not be presented: {0}")]
    Other(String),
}
