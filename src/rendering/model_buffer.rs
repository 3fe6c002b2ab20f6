use std::sync::Arc;

use super::Gpu;
use crate::mesh::{Mesh, POSITION_COMPONENTS};

/// Attribute location of the position input in every vertex shader
pub const POSITION_LOCATION: u32 = 0;

/// A mesh uploaded to the GPU: one static vertex buffer and the vertex array
/// describing it. Both are deleted when dropped.
pub struct ModelBuffer<G: Gpu> {
    pub vertex_buffer: G::Buffer,
    pub vertex_array: G::VertexArray,
    pub vertex_count: i32,
    gl: Arc<G>
}

impl<G: Gpu> ModelBuffer<G> {
    pub fn new(gl: Arc<G>, mesh: &Mesh) -> Result<Self, String> {
        let vertex_buffer = gl.create_buffer()?;
        let vertex_array = match gl.create_vertex_array() {
            Ok(val) => { val },
            Err(val) => {
                // Delete the vertex buffer before erroring
                gl.delete_buffer(vertex_buffer);
                return Err(val);
            }
        };
        gl.bind_vertex_array(Some(vertex_array));
        gl.upload_static(vertex_buffer, mesh.as_bytes());
        gl.float_attribute(POSITION_LOCATION, POSITION_COMPONENTS, mesh.stride.bytes());
        gl.bind_vertex_array(None);

        return Ok(Self {
            vertex_buffer,
            vertex_array,
            vertex_count: mesh.vertex_count() as i32,
            gl
        });
    }

    pub fn draw(&self) {
        self.gl.bind_vertex_array(Some(self.vertex_array));
        self.gl.draw_triangles(0, self.vertex_count);
    }
}

impl<G: Gpu> Drop for ModelBuffer<G> {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.vertex_array);
        self.gl.delete_buffer(self.vertex_buffer);
    }
}
