//! Every bundled effect must pass the compile/link gate.

use wgpu::naga::ShaderStage;

use effects::{sources, EffectKind};
use renderer::{parse_shader, validate_program};

#[test]
fn bundled_effects_pass_the_compile_gate() {
    for kind in EffectKind::all() {
        let sources = sources(kind);
        let vertex = parse_shader(sources.vertex, ShaderStage::Vertex)
            .unwrap_or_else(|err| panic!("{kind} vertex stage: {err}"));
        let fragment = parse_shader(sources.fragment, ShaderStage::Fragment)
            .unwrap_or_else(|err| panic!("{kind} fragment stage: {err}"));
        validate_program(&vertex, &fragment)
            .unwrap_or_else(|err| panic!("{kind} failed to link: {err}"));
    }
}
