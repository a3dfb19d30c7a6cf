//! Compile/link gate for effect programs.
//!
//! Sources are parsed and validated through naga *before* any GPU object is
//! created, so a broken shader can never leave a partially initialized
//! program behind: either both stages pass the gate and a pipeline is built,
//! or the controller holds nothing and the fallback presentation stays up.

use std::borrow::Cow;

use wgpu::naga::front::glsl::{Frontend, Options};
use wgpu::naga::valid::{Capabilities, ValidationFlags, Validator};
use wgpu::naga::{Module, ShaderStage};

use crate::error::ControllerError;

/// Parses one GLSL stage into naga IR.
///
/// Syntax and type errors surface here as [`ControllerError::ShaderCompile`].
pub fn parse_shader(source: &str, stage: ShaderStage) -> Result<Module, ControllerError> {
    Frontend::default()
        .parse(&Options::from(stage), source)
        .map_err(|err| ControllerError::ShaderCompile(format!("{stage:?} stage: {err:?}")))
}

/// Validates a parsed vertex/fragment pair as a linkable program.
///
/// Checks module-level validity plus the presence of a `main` entry point in
/// each stage; failures surface as [`ControllerError::ShaderLink`].
pub fn validate_program(vertex: &Module, fragment: &Module) -> Result<(), ControllerError> {
    for (module, stage) in [(vertex, ShaderStage::Vertex), (fragment, ShaderStage::Fragment)] {
        let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
        validator
            .validate(module)
            .map_err(|err| ControllerError::ShaderLink(format!("{stage:?} stage: {err:?}")))?;

        let has_entry = module
            .entry_points
            .iter()
            .any(|entry| entry.stage == stage && entry.name == "main");
        if !has_entry {
            return Err(ControllerError::ShaderLink(format!(
                "{stage:?} stage has no 'main' entry point"
            )));
        }
    }
    Ok(())
}

/// Compiles a validated source pair into shader modules on the device.
///
/// Callers must have run [`parse_shader`]/[`validate_program`] first; the
/// device-side build then only re-lowers sources the gate already accepted.
pub(crate) fn create_modules(
    device: &wgpu::Device,
    vertex_source: &str,
    fragment_source: &str,
) -> (wgpu::ShaderModule, wgpu::ShaderModule) {
    let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("canvas vertex"),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Owned(vertex_source.to_owned()),
            stage: ShaderStage::Vertex,
            defines: &[],
        },
    });
    let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("canvas fragment"),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Owned(fragment_source.to_owned()),
            stage: ShaderStage::Fragment,
            defines: &[],
        },
    });
    (vertex, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_VERTEX: &str = r"#version 450
layout(location = 0) in vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
";

    const MINIMAL_FRAGMENT: &str = r"#version 450
layout(location = 0) out vec4 out_color;
void main() {
    out_color = vec4(1.0);
}
";

    #[test]
    fn minimal_program_passes_the_gate() {
        let vertex = parse_shader(MINIMAL_VERTEX, ShaderStage::Vertex).unwrap();
        let fragment = parse_shader(MINIMAL_FRAGMENT, ShaderStage::Fragment).unwrap();
        validate_program(&vertex, &fragment).unwrap();
    }

    #[test]
    fn syntax_error_is_a_compile_error() {
        let err = parse_shader("void main( {", ShaderStage::Fragment).unwrap_err();
        assert!(matches!(err, ControllerError::ShaderCompile(_)));
    }

    #[test]
    fn missing_entry_point_is_a_link_error() {
        let source = r"#version 450
float helper() {
    return 1.0;
}
";
        let vertex = parse_shader(MINIMAL_VERTEX, ShaderStage::Vertex).unwrap();
        let no_main = parse_shader(source, ShaderStage::Fragment).unwrap();
        let err = validate_program(&vertex, &no_main).unwrap_err();
        assert!(matches!(err, ControllerError::ShaderLink(_)));
    }
}
