use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::config::{SceneConfig, ShaderPolicy, ShaderTable};
use crate::error::InitError;
use crate::house::{DrawStep, MeshId, ProgramId, DRAW_PLAN};
use crate::rendering::{CompiledShader, Gpu, ModelBuffer, PolygonMode, Rgba, ShaderProgram, ShaderStage};

/// Every GPU object the house needs, plus the order to draw them in.
///
/// Programs and models release their GL objects when dropped, so dropping
/// the renderer (or failing halfway through `new`) leaves nothing behind.
pub struct SceneRenderer<G: Gpu> {
    programs: BTreeMap<ProgramId, ShaderProgram<G>>,
    models: BTreeMap<MeshId, ModelBuffer<G>>,
    plan: Vec<DrawStep>,
    background: Rgba,
    gl: Arc<G>
}

impl<G: Gpu> SceneRenderer<G> {
    pub fn new(gl: Arc<G>, config: &SceneConfig) -> Result<Self, InitError> {
        let mut diagnostics = Vec::new();
        let programs = create_programs(&gl, &config.shaders, config.shader_policy, &mut diagnostics);
        for diagnostic in &diagnostics {
            log::error!("{}", diagnostic);
        }
        let programs = programs?;
        for step in DRAW_PLAN.iter() {
            if !programs.contains_key(&step.program) {
                return Err(InitError::MissingProgram(step.program));
            }
        }

        let mut models = BTreeMap::new();
        for id in MeshId::ALL {
            let mesh = id.mesh();
            let degenerate = mesh.degenerate_triangles();
            if degenerate > 0 {
                log::warn!("{} has {} zero-area triangles", mesh.label, degenerate);
            }
            let model = ModelBuffer::new(gl.clone(), &mesh)
                .map_err(|message| InitError::Upload { mesh: id, message })?;
            log::debug!("uploaded {}: {} vertices, {} bytes",
                mesh.label, mesh.vertex_count(), mesh.as_bytes().len());
            models.insert(id, model);
        }

        return Ok(Self {
            programs,
            models,
            plan: DRAW_PLAN.to_vec(),
            background: config.background,
            gl
        });
    }

    /// Clears to the background and draws the plan.
    ///
    /// `mode` only applies to these draws: fill is restored afterwards so the
    /// host's own painting is unaffected.
    pub fn draw(&self, mode: PolygonMode, framebuffer: Option<[u32; 2]>) {
        let gl = &self.gl;
        if let Some([width, height]) = framebuffer {
            gl.viewport(0, 0, width as i32, height as i32);
        }
        gl.clear(&self.background);
        if mode != PolygonMode::Fill {
            gl.polygon_mode(mode);
        }
        for step in &self.plan {
            if let (Some(program), Some(model)) =
                (self.programs.get(&step.program), self.models.get(&step.mesh)) {
                program.bind();
                model.draw();
            }
        }
        if mode != PolygonMode::Fill {
            gl.polygon_mode(PolygonMode::Fill);
        }
    }
}

/// Compiles each distinct source once and links one program per table entry.
///
/// Every compile or link failure adds a message to `diagnostics`, including
/// the one that aborts under `FailFast`.
fn create_programs<G: Gpu>(
    gl: &Arc<G>,
    table: &ShaderTable,
    policy: ShaderPolicy,
    diagnostics: &mut Vec<String>,
) -> Result<BTreeMap<ProgramId, ShaderProgram<G>>, InitError> {
    let mut shaders: HashMap<(ShaderStage, &str), CompiledShader<G>> = HashMap::new();
    for source in table.values() {
        let stages = [
            (ShaderStage::Vertex, source.vertex.as_str()),
            (ShaderStage::Fragment, source.fragment.as_str()),
        ];
        for (stage, text) in stages {
            if shaders.contains_key(&(stage, text)) {
                continue;
            }
            let shader = CompiledShader::new(gl.clone(), stage, text)
                .map_err(|message| InitError::Resource {
                    what: format!("{:?} shader", stage),
                    message
                })?;
            // Compile errors surface again at link time; keep going.
            if let Some(log) = &shader.log {
                diagnostics.push(format!("Failed to compile {:?} shader:\n{}", shader.stage, log));
            }
            shaders.insert((stage, text), shader);
        }
    }

    let mut programs = BTreeMap::new();
    for (id, source) in table {
        let vertex = shaders.get(&(ShaderStage::Vertex, source.vertex.as_str()));
        let fragment = shaders.get(&(ShaderStage::Fragment, source.fragment.as_str()));
        let (vertex, fragment) = match (vertex, fragment) {
            (Some(vertex), Some(fragment)) => (vertex, fragment),
            _ => return Err(InitError::MissingProgram(*id)),
        };
        let program = ShaderProgram::link(gl.clone(), &[vertex, fragment])
            .map_err(|message| InitError::Resource {
                what: format!("{:?} program", id),
                message
            })?;
        if let Some(log) = &program.link_log {
            diagnostics.push(format!("Failed to link the {:?} program:\n{}", id, log));
            if policy == ShaderPolicy::FailFast {
                return Err(InitError::Link { program: *id, log: log.clone() });
            }
        }
        programs.insert(*id, program);
    }
    log::debug!("{} shaders compiled, {} programs linked", shaders.len(), programs.len());
    return Ok(programs);
}
