use bytemuck::{Pod, Zeroable};

use crate::types::EffectParams;

/// CPU mirror of the `CanvasUniforms` block declared by every fragment
/// program.
///
/// The layout is std140: `vec2` members sit on 8-byte offsets and the block
/// is padded to a 16-byte multiple, so the struct can be copied into the GPU
/// buffer byte-for-byte.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub speed: f32,
    pub pointer: [f32; 2],
    pub wave_amp: f32,
    pub wave_freq: f32,
    pub glow_strength: f32,
    pub pointer_force: f32,
    _padding: [f32; 2],
}

unsafe impl Zeroable for CanvasUniforms {}
unsafe impl Pod for CanvasUniforms {}

impl CanvasUniforms {
    pub fn new(width: u32, height: u32, params: EffectParams) -> Self {
        let mut uniforms = Self {
            resolution: [width as f32, height as f32],
            time: 0.0,
            speed: 0.0,
            pointer: [0.5, 0.5],
            wave_amp: 0.0,
            wave_freq: 0.0,
            glow_strength: 0.0,
            pointer_force: 0.0,
            _padding: [0.0; 2],
        };
        uniforms.set_params(params);
        uniforms
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = [width, height];
    }

    pub fn set_time(&mut self, seconds: f32) {
        self.time = seconds;
    }

    pub fn set_pointer(&mut self, pointer: [f32; 2]) {
        self.pointer = pointer;
    }

    pub fn set_params(&mut self, params: EffectParams) {
        self.speed = params.speed;
        self.wave_amp = params.wave_amp;
        self.wave_freq = params.wave_freq;
        self.glow_strength = params.glow_strength;
        self.pointer_force = params.pointer_force;
    }
}
