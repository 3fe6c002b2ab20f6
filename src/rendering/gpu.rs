use std::fmt::Debug;

use eframe::glow;
use glow::HasContext;

extern crate nalgebra_glm as glm;

/// RGBA color with components in `0.0..=1.0`
pub type Rgba = glm::Vec4;

/// Builds a color from 8-bit channels
pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    return Rgba::new(
        r as f32 / 255.,
        g as f32 / 255.,
        b as f32 / 255.,
        a as f32 / 255.);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Rasterization mode for front and back faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    #[default]
    Fill,
    Line,
}

/// The subset of OpenGL the scene needs.
///
/// Every method maps to one or two GL calls on the current context.
/// Creation methods return the driver's error string, like glow does.
/// Nothing here checks `glGetError`; steady-state errors go unobserved.
pub trait Gpu {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;
    type VertexArray: Copy + Debug + PartialEq;

    /// The raw `GL_VERSION` string
    fn version_string(&self) -> String;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Sets the source and compiles, returning the compile status
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Links, returning the link status
    fn link_program(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    /// Binds `buffer` as the array buffer and fills it with static data
    fn upload_static(&self, buffer: Self::Buffer, bytes: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    /// Describes and enables a float attribute read from the bound array buffer
    fn float_attribute(&self, location: u32, components: i32, stride: i32);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear(&self, color: &Rgba);
    fn polygon_mode(&self, mode: PolygonMode);
    fn draw_triangles(&self, first: i32, count: i32);
}

impl Gpu for glow::Context {
    type Shader = glow::NativeShader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;

    fn version_string(&self) -> String {
        unsafe {
            return self.get_parameter_string(glow::VERSION);
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        let shader_type = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe {
            return HasContext::create_shader(self, shader_type);
        }
    }

    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool {
        unsafe {
            self.shader_source(shader, source);
            HasContext::compile_shader(self, shader);
            return self.get_shader_compile_status(shader);
        }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe {
            return self.get_shader_info_log(shader);
        }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe {
            HasContext::delete_shader(self, shader);
        }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe {
            return HasContext::create_program(self);
        }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe {
            HasContext::attach_shader(self, program, shader);
        }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe {
            HasContext::detach_shader(self, program, shader);
        }
    }

    fn link_program(&self, program: Self::Program) -> bool {
        unsafe {
            HasContext::link_program(self, program);
            return self.get_program_link_status(program);
        }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe {
            return self.get_program_info_log(program);
        }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe {
            HasContext::use_program(self, program);
        }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe {
            HasContext::delete_program(self, program);
        }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe {
            return HasContext::create_buffer(self);
        }
    }

    fn upload_static(&self, buffer: Self::Buffer, bytes: &[u8]) {
        unsafe {
            self.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe {
            HasContext::delete_buffer(self, buffer);
        }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe {
            return HasContext::create_vertex_array(self);
        }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe {
            HasContext::bind_vertex_array(self, vertex_array);
        }
    }

    fn float_attribute(&self, location: u32, components: i32, stride: i32) {
        unsafe {
            self.vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, stride, 0);
            self.enable_vertex_attrib_array(location);
        }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe {
            HasContext::delete_vertex_array(self, vertex_array);
        }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe {
            HasContext::viewport(self, x, y, width, height);
        }
    }

    fn clear(&self, color: &Rgba) {
        unsafe {
            self.clear_color(color.x, color.y, color.z, color.w);
            HasContext::clear(self, glow::COLOR_BUFFER_BIT);
        }
    }

    fn polygon_mode(&self, mode: PolygonMode) {
        let gl_mode = match mode {
            PolygonMode::Fill => glow::FILL,
            PolygonMode::Line => glow::LINE,
        };
        unsafe {
            HasContext::polygon_mode(self, glow::FRONT_AND_BACK, gl_mode);
        }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe {
            self.draw_arrays(glow::TRIANGLES, first, count);
        }
    }
}

/// Parses the leading `major.minor` out of a `GL_VERSION` string.
///
/// Desktop drivers start with the number (`"4.6 (Compatibility Profile) Mesa"`),
/// ES drivers prefix it (`"OpenGL ES 3.0 ANGLE"`).
pub fn parse_gl_version(version: &str) -> Option<(u32, u32)> {
    let numbers = version
        .split_whitespace()
        .find(|word| word.starts_with(|c: char| c.is_ascii_digit()))?;
    let mut parts = numbers.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor_digits: String = parts.next()?
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let minor = minor_digits.parse().ok()?;
    return Some((major, minor));
}
