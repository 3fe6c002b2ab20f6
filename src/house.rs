//! The scene itself: vertex data, colors, shader sources and draw order.

use crate::config::{ProgramSource, ShaderTable};
use crate::mesh::{AttribStride, Mesh};
use crate::rendering::{rgba8, Rgba};

pub fn background() -> Rgba {
    return rgba8(231, 111, 81, 255);
}

pub fn body_color() -> Rgba {
    return rgba8(255, 230, 167, 255);
}

pub fn roof_color() -> Rgba {
    return rgba8(153, 88, 42, 255);
}

pub fn window_color() -> Rgba {
    return rgba8(255, 255, 255, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProgramId {
    Body,
    Roof,
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeshId {
    BodyA,
    BodyB,
    Roof,
    Windows,
    Door,
}

impl MeshId {
    pub const ALL: [MeshId; 5] = [
        MeshId::BodyA, MeshId::BodyB, MeshId::Roof, MeshId::Windows, MeshId::Door];

    pub fn mesh(self) -> Mesh {
        return match self {
            MeshId::BodyA => Mesh { label: "body a", positions: &BODY_A, stride: AttribStride::Explicit },
            MeshId::BodyB => Mesh { label: "body b", positions: &BODY_B, stride: AttribStride::Explicit },
            MeshId::Roof => Mesh { label: "roof", positions: &ROOF, stride: AttribStride::Explicit },
            MeshId::Windows => Mesh { label: "windows", positions: &WINDOWS, stride: AttribStride::Packed },
            MeshId::Door => Mesh { label: "door", positions: &DOOR, stride: AttribStride::Packed },
        };
    }
}

/// Right half of the wall square
const BODY_A: [[f32; 3]; 3] = [
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
    [0.5, -0.5, 0.0],
];

/// Left half of the wall square
const BODY_B: [[f32; 3]; 3] = [
    [0.5, -0.5, 0.0],
    [-0.5, -0.5, 0.0],
    [-0.5, 0.5, 0.0],
];

const ROOF: [[f32; 3]; 3] = [
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
    [0.0, 1.0, 0.0],
];

const WINDOWS: [[f32; 3]; 12] = [
    [0.43, 0.25, 0.0],
    [0.43, 0.0, 0.0],
    [0.25, 0.0, 0.0],

    [0.25, 0.0, 0.0],
    [0.25, 0.25, 0.0],
    [0.43, 0.25, 0.0],

    [-0.43, 0.25, 0.0],
    [-0.43, 0.0, 0.0],
    [-0.25, 0.0, 0.0],

    [-0.25, 0.0, 0.0],
    [-0.25, 0.25, 0.0],
    [-0.43, 0.25, 0.0],
];

const DOOR: [[f32; 3]; 6] = [
    [0.10, -0.5, 0.0],
    [-0.10, -0.5, 0.0],
    [0.10, -0.05, 0.0],

    [0.10, -0.05, 0.0],
    [-0.10, -0.05, 0.0],
    [-0.10, -0.5, 0.0],
];

/// One bind-and-draw in the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStep {
    pub program: ProgramId,
    pub mesh: MeshId,
}

/// Back to front. The door borrows the roof's brown.
pub const DRAW_PLAN: [DrawStep; 5] = [
    DrawStep { program: ProgramId::Body, mesh: MeshId::BodyA },
    DrawStep { program: ProgramId::Body, mesh: MeshId::BodyB },
    DrawStep { program: ProgramId::Roof, mesh: MeshId::Roof },
    DrawStep { program: ProgramId::Window, mesh: MeshId::Windows },
    DrawStep { program: ProgramId::Roof, mesh: MeshId::Door },
];

pub const VERTEX_SHADER_SOURCE: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

/// A fragment shader that paints every fragment `color`
pub fn solid_fragment_source(color: &Rgba) -> String {
    return format!(
        "#version 330 core\n\
         out vec4 FragColor;\n\
         void main() {{\n    \
             FragColor = vec4({:?}, {:?}, {:?}, {:?});\n\
         }}\n",
        color.x, color.y, color.z, color.w);
}

pub fn shader_table() -> ShaderTable {
    let mut table = ShaderTable::new();
    for (id, color) in [
        (ProgramId::Body, body_color()),
        (ProgramId::Roof, roof_color()),
        (ProgramId::Window, window_color()),
    ] {
        table.insert(id, ProgramSource {
            vertex: VERTEX_SHADER_SOURCE.to_owned(),
            fragment: solid_fragment_source(&color),
        });
    }
    return table;
}
