//! Catalogue of decorative background effects.
//!
//! Each effect is a pair of embedded GLSL programs sharing one uniform
//! contract (resolution, time, pointer, and the tunable parameters) and one
//! vertex attribute: the 2D position of a full-surface quad. Tunables can be
//! overridden per deployment through a small TOML manifest.

mod manifest;

pub use manifest::{EffectManifest, ManifestError, TunableParams};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Decorative effects ported from the original site backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    /// Concentric pulse rings driven by time alone.
    PulseRings,
    /// Mouse-reactive ink wave on a paper-white ground.
    InkWave,
}

impl EffectKind {
    pub fn all() -> [EffectKind; 2] {
        [EffectKind::PulseRings, EffectKind::InkWave]
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectKind::PulseRings => f.write_str("pulse-rings"),
            EffectKind::InkWave => f.write_str("ink-wave"),
        }
    }
}

impl FromStr for EffectKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pulse-rings" | "pulse_rings" | "rings" => Ok(EffectKind::PulseRings),
            "ink-wave" | "ink_wave" | "inkwave" => Ok(EffectKind::InkWave),
            other => Err(format!(
                "unknown effect '{other}'; expected pulse-rings or ink-wave"
            )),
        }
    }
}

/// Program source text for one effect.
///
/// The fragment shaders declare the uniform block that
/// `renderer::CanvasUniforms` mirrors; the vertex shader consumes the quad
/// position attribute at location 0.
#[derive(Debug, Clone, Copy)]
pub struct EffectSources {
    pub name: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
}

const VERTEX_GLSL: &str = include_str!("../shaders/fullscreen.vert");
const PULSE_RINGS_GLSL: &str = include_str!("../shaders/pulse_rings.frag");
const INK_WAVE_GLSL: &str = include_str!("../shaders/ink_wave.frag");

/// Resolves the embedded program pair for an effect.
pub fn sources(kind: EffectKind) -> EffectSources {
    match kind {
        EffectKind::PulseRings => EffectSources {
            name: "pulse-rings",
            vertex: VERTEX_GLSL,
            fragment: PULSE_RINGS_GLSL,
        },
        EffectKind::InkWave => EffectSources {
            name: "ink-wave",
            vertex: VERTEX_GLSL,
            fragment: INK_WAVE_GLSL,
        },
    }
}
