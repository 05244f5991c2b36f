use crate::device::ShaderStage;

/// Errors raised while building a program and its setter table.
///
/// All of them are setup-time failures; none can occur inside the frame loop.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProgramError {
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program failed to link: {log}")]
    ProgramLink { log: String },

    #[error("uniform `{name}` has unsupported type 0x{code:x}")]
    UnsupportedUniformType { name: String, code: u32 },

    #[error("driver could not allocate a {0}")]
    Resource(String),
}
