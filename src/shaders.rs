use std::fs;
use std::path::Path;

use anyhow::Context as _;
use glow::HasContext;

use crate::error::{GlError, ShaderStage};

const COLOR_VERTEX_SHADER: &str = include_str!("../shaders/color.vert");
const COLOR_FRAGMENT_SHADER: &str = include_str!("../shaders/color.frag");

/// GLSL text for one vertex/fragment pair.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Position + per-vertex color pass-through pair compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            vertex: COLOR_VERTEX_SHADER.to_string(),
            fragment: COLOR_FRAGMENT_SHADER.to_string(),
        }
    }

    pub fn from_files(vertex_path: &Path, fragment_path: &Path) -> anyhow::Result<Self> {
        let vertex = fs::read_to_string(vertex_path)
            .with_context(|| format!("failed to read vertex shader {}", vertex_path.display()))?;
        let fragment = fs::read_to_string(fragment_path).with_context(|| {
            format!("failed to read fragment shader {}", fragment_path.display())
        })?;

        Ok(Self { vertex, fragment })
    }
}

#[derive(Debug)]
pub struct ShaderProgram {
    pub name: String,
    pub program: glow::Program,
}

impl ShaderProgram {
    pub fn new(
        context: &glow::Context,
        name: impl Into<String>,
        source: &ShaderSource,
    ) -> Result<Self, GlError> {
        let name = name.into();

        let vertex = compile_stage(context, ShaderStage::Vertex, &source.vertex)?;
        let fragment = match compile_stage(context, ShaderStage::Fragment, &source.fragment) {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { context.delete_shader(vertex) };
                return Err(e);
            }
        };

        let program = unsafe {
            let program = match context.create_program() {
                Ok(program) => program,
                Err(reason) => {
                    context.delete_shader(vertex);
                    context.delete_shader(fragment);
                    return Err(GlError::Allocation {
                        what: "shader program",
                        reason,
                    });
                }
            };

            context.attach_shader(program, vertex);
            context.attach_shader(program, fragment);
            context.link_program(program);

            context.detach_shader(program, vertex);
            context.detach_shader(program, fragment);
            context.delete_shader(vertex);
            context.delete_shader(fragment);

            if !context.get_program_link_status(program) {
                let log = context.get_program_info_log(program);
                context.delete_program(program);
                return Err(GlError::ProgramLink { log });
            }

            program
        };

        log::debug!("linked shader program '{name}'");

        Ok(Self { name, program })
    }

    pub fn bind(&self, context: &glow::Context) {
        unsafe { context.use_program(Some(self.program)) };
    }

    pub fn destroy(&self, context: &glow::Context) {
        unsafe { context.delete_program(self.program) };
    }
}

fn compile_stage(
    context: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, GlError> {
    unsafe {
        let shader = context
            .create_shader(stage.gl_type())
            .map_err(|reason| GlError::Allocation {
                what: "shader object",
                reason,
            })?;
        context.shader_source(shader, source);
        context.compile_shader(shader);

        if !context.get_shader_compile_status(shader) {
            let log = context.get_shader_info_log(shader);
            context.delete_shader(shader);
            return Err(GlError::ShaderCompile { stage, log });
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_pair_targets_core_330() {
        let source = ShaderSource::builtin();
        assert!(source.vertex.starts_with("#version 330 core"));
        assert!(source.fragment.starts_with("#version 330 core"));
    }

    #[test]
    fn builtin_pair_shares_color_varying() {
        let source = ShaderSource::builtin();
        assert!(source.vertex.contains("out vec3 vertexColor"));
        assert!(source.fragment.contains("in vec3 vertexColor"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = ShaderSource::from_files(
            Path::new("does/not/exist.vert"),
            Path::new("does/not/exist.frag"),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.vert"));
    }
}
