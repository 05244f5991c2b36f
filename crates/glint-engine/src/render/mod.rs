//! Frame driver.
//!
//! [`QuadRenderer`] draws one fullscreen quad per frame and feeds the shader
//! `time` and `resolution`. [`ShaderApp`] plugs it into the window runtime.

mod app;
mod quad;

pub use app::ShaderApp;
pub use quad::{
    FrameState, QuadRenderer, CLEAR_COLOR, POSITION_ATTRIB, QUAD_VERTEX_COUNT, QUAD_VERTICES,
};

use crate::shader::ProgramError;

/// Setup failures of the frame driver.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error("failed to allocate vertex buffer: {0}")]
    VertexBuffer(String),
}
