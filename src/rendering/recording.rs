//! A `Gpu` that records calls instead of talking to a driver.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use super::{Gpu, PolygonMode, Rgba, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    QueryVersion,
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    UploadStatic { buffer: u32, bytes: usize },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    FloatAttribute { location: u32, components: i32, stride: i32 },
    DeleteVertexArray(u32),
    Viewport(i32, i32, i32, i32),
    Clear([f32; 4]),
    PolygonMode(PolygonMode),
    DrawTriangles { first: i32, count: i32 },
    /// Pushed by test hosts standing in for a buffer swap
    Present,
}

pub struct RecordingGpu {
    pub version: String,
    /// Shader sources containing this marker fail to compile
    pub failing_source: Option<String>,
    /// Programs with this id fail to link
    pub failing_program: Option<u32>,
    calls: Mutex<Vec<Call>>,
    next_id: AtomicU32,
}

impl RecordingGpu {
    pub fn new() -> Self {
        return Self {
            version: String::from("3.3.0 Recording"),
            failing_source: None,
            failing_program: None,
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
        };
    }

    pub fn with_version(version: &str) -> Self {
        let mut gpu = Self::new();
        gpu.version = version.to_owned();
        return gpu;
    }

    pub fn calls(&self) -> Vec<Call> {
        return self.calls.lock().unwrap().clone();
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn present(&self) {
        self.record(Call::Present);
    }

    /// Vertex counts of every draw call, in order
    pub fn draw_counts(&self) -> Vec<i32> {
        return self.calls().iter().filter_map(|call| match call {
            Call::DrawTriangles { count, .. } => Some(*count),
            _ => None,
        }).collect();
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        return self.calls().iter().filter(|call| predicate(*call)).count();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next(&self) -> u32 {
        return self.next_id.fetch_add(1, Ordering::Relaxed);
    }
}

impl Gpu for RecordingGpu {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn version_string(&self) -> String {
        self.record(Call::QueryVersion);
        return self.version.clone();
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateShader(stage, id));
        return Ok(id);
    }

    fn compile_shader(&self, shader: u32, source: &str) -> bool {
        self.record(Call::CompileShader(shader));
        return match &self.failing_source {
            Some(marker) => !source.contains(marker.as_str()),
            None => true,
        };
    }

    fn shader_info_log(&self, shader: u32) -> String {
        return format!("0:1({}): error: syntax error", shader);
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateProgram(id));
        return Ok(id);
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader { program, shader });
    }

    fn link_program(&self, program: u32) -> bool {
        self.record(Call::LinkProgram(program));
        return self.failing_program != Some(program);
    }

    fn program_info_log(&self, program: u32) -> String {
        return format!("program {} failed to link", program);
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateBuffer(id));
        return Ok(id);
    }

    fn upload_static(&self, buffer: u32, bytes: &[u8]) {
        self.record(Call::UploadStatic { buffer, bytes: bytes.len() });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateVertexArray(id));
        return Ok(id);
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn float_attribute(&self, location: u32, components: i32, stride: i32) {
        self.record(Call::FloatAttribute { location, components, stride });
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear(&self, color: &Rgba) {
        self.record(Call::Clear([color.x, color.y, color.z, color.w]));
    }

    fn polygon_mode(&self, mode: PolygonMode) {
        self.record(Call::PolygonMode(mode));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles { first, count });
    }
}
