use std::sync::Arc;

use super::{Gpu, ShaderStage};

/// A compiled (or failed) shader stage.
///
/// Compile failures are not errors here: the handle is kept so linking can
/// still be attempted, and `log` carries the driver's diagnostics.
pub struct CompiledShader<G: Gpu> {
    pub shader: G::Shader,
    pub stage: ShaderStage,
    pub log: Option<String>,
    gl: Arc<G>
}

impl<G: Gpu> CompiledShader<G> {
    pub fn new(gl: Arc<G>, stage: ShaderStage, source: &str) -> Result<Self, String> {
        let shader = gl.create_shader(stage)?;
        let log = if gl.compile_shader(shader, source) {
            None
        } else {
            Some(gl.shader_info_log(shader))
        };
        return Ok(Self { shader, stage, log, gl });
    }
}

impl<G: Gpu> Drop for CompiledShader<G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.shader);
    }
}

/// A linked program. Deleted when dropped.
pub struct ShaderProgram<G: Gpu> {
    pub shader_program: G::Program,
    /// The driver's log when linking failed
    pub link_log: Option<String>,
    gl: Arc<G>
}

impl<G: Gpu> ShaderProgram<G> {
    /// Attaches `shaders`, links, then detaches them again so they can be
    /// deleted independently of the program.
    pub fn link(gl: Arc<G>, shaders: &[&CompiledShader<G>]) -> Result<Self, String> {
        let shader_program = gl.create_program()?;
        for shader in shaders {
            gl.attach_shader(shader_program, shader.shader);
        }
        let link_log = if gl.link_program(shader_program) {
            None
        } else {
            Some(gl.program_info_log(shader_program))
        };
        for shader in shaders {
            gl.detach_shader(shader_program, shader.shader);
        }
        return Ok(Self { shader_program, link_log, gl });
    }

    pub fn bind(&self) {
        self.gl.use_program(Some(self.shader_program));
    }
}

impl<G: Gpu> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.shader_program);
    }
}
