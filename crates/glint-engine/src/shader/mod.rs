//! Shader programs and their setter tables.
//!
//! [`compile`] links a vertex/fragment pair and reflects the program's active
//! attributes and uniforms into name-keyed setter tables. Values are later
//! pushed by name through [`set_uniforms`] and [`set_buffers_and_attributes`]
//! without re-querying the driver or matching on types per frame.

mod attribute;
mod error;
mod kind;
mod program;
mod setters;
mod uniform;

pub use attribute::{AttribBuffer, AttribSetter, BufferInfo};
pub use error::ProgramError;
pub use kind::UniformKind;
pub use program::{compile, set_buffers_and_attributes, set_uniforms, ProgramInfo};
pub use setters::{apply_setters, Setter};
pub use uniform::{UniformBinder, UniformSetter, UniformValue};

/// Vertex + fragment source pair.
#[derive(Debug, Clone, Default)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}
