use std::mem::size_of;

use crate::triangle::{self, Triangle};

/// Floats per position
pub const POSITION_COMPONENTS: i32 = 3;

/// How the position attribute's stride is declared to GL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribStride {
    /// `3 * size_of::<f32>()` spelled out
    Explicit,
    /// Zero, letting GL derive it from the component count
    Packed,
}

impl AttribStride {
    pub fn bytes(self) -> i32 {
        return match self {
            AttribStride::Explicit => POSITION_COMPONENTS * size_of::<f32>() as i32,
            AttribStride::Packed => 0,
        };
    }
}

/// A static list of positions drawn as a triangle list
#[derive(Debug, Clone, Copy)]
pub struct Mesh {
    pub label: &'static str,
    pub positions: &'static [[f32; 3]],
    pub stride: AttribStride,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        return self.positions.len();
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        return bytemuck::cast_slice(self.positions);
    }

    pub fn triangles(&self) -> Vec<Triangle> {
        return triangle::from_positions(self.positions);
    }

    /// Triangles with no area, which rasterize to nothing
    pub fn degenerate_triangles(&self) -> usize {
        return self.triangles()
            .iter()
            .filter(|t| triangle::area(t) <= f32::EPSILON)
            .count();
    }
}
