/// Tunable effect parameters pushed to the fragment program once per frame.
///
/// Defaults are the values the original hero background shipped with. Effects
/// that ignore a parameter (the pulse rings only read `speed`) still receive
/// the full set through the shared uniform block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParams {
    /// Time multiplier applied inside the shader.
    pub speed: f32,
    /// Primary wave amplitude.
    pub wave_amp: f32,
    /// Primary wave frequency; the secondary wave runs at 1.5x.
    pub wave_freq: f32,
    /// Half-width of the glow falloff around the ink line.
    pub glow_strength: f32,
    /// Strength of the pointer's pull on the ink line.
    pub pointer_force: f32,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            speed: 0.16,
            wave_amp: 1.0,
            wave_freq: 2.0,
            glow_strength: 0.05,
            pointer_force: 1.7,
        }
    }
}

/// Immutable configuration handed to the controller at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Tunable parameters forwarded as uniforms.
    pub params: EffectParams,
    /// Per-frame exponential smoothing factor for the pointer, in (0, 1].
    pub pointer_smoothing: f32,
    /// Cap on the device pixel ratio used for the backing store.
    pub pixel_ratio_limit: f64,
    /// When set, render a single static frame and stop scheduling.
    pub reduced_motion: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            params: EffectParams::default(),
            pointer_smoothing: 0.05,
            pixel_ratio_limit: 2.0,
            reduced_motion: false,
        }
    }
}

/// Layout rectangle of the surface, used to map raw pointer coordinates.
///
/// Mirrors the bounding box the host reports for the hero region; pointer
/// events arrive in the same coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// A degenerate box cannot produce normalized coordinates.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
