mod gpu;
mod shader_program;
mod model_buffer;
#[cfg(test)]
pub mod recording;

pub use gpu::*;
pub use shader_program::*;
pub use model_buffer::*;
