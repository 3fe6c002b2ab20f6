use crate::house::{MeshId, ProgramId};

/// Process status for any failure before the first frame
pub const INIT_FAILURE_CODE: i32 = -1;

/// Fatal startup errors. Each one ends the process before the frame loop runs.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to load OpenGL: the window system provided no GL context")]
    Loader,

    #[error("OpenGL {required_major}.{required_minor} required, context reports \"{reported}\"")]
    UnsupportedVersion {
        reported: String,
        required_major: u32,
        required_minor: u32,
    },

    #[error("No shader sources configured for the {0:?} program")]
    MissingProgram(ProgramId),

    #[error("Failed to create {what}: {message}")]
    Resource { what: String, message: String },

    #[error("Failed to link the {program:?} program:\n{log}")]
    Link { program: ProgramId, log: String },

    #[error("Failed to upload the {mesh:?} mesh: {message}")]
    Upload { mesh: MeshId, message: String },
}

impl InitError {
    pub fn exit_code(&self) -> i32 {
        return INIT_FAILURE_CODE;
    }
}
