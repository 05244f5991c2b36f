/// Uniform types the setter builder knows how to push.
///
/// One variant per supported GL type code; anything else is rejected when the
/// setter table is built.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UniformKind {
    Float,
    FloatVec2,
    FloatVec3,
    FloatVec4,
    FloatMat2,
    FloatMat3,
    FloatMat4,
    Int,
    IntVec2,
    IntVec3,
    IntVec4,
    Bool,
    BoolVec2,
    BoolVec3,
    BoolVec4,
    Sampler2D,
}

impl UniformKind {
    pub const ALL: [UniformKind; 16] = [
        UniformKind::Float,
        UniformKind::FloatVec2,
        UniformKind::FloatVec3,
        UniformKind::FloatVec4,
        UniformKind::FloatMat2,
        UniformKind::FloatMat3,
        UniformKind::FloatMat4,
        UniformKind::Int,
        UniformKind::IntVec2,
        UniformKind::IntVec3,
        UniformKind::IntVec4,
        UniformKind::Bool,
        UniformKind::BoolVec2,
        UniformKind::BoolVec3,
        UniformKind::BoolVec4,
        UniformKind::Sampler2D,
    ];

    /// Maps a driver-reported type code.
    pub fn from_code(code: u32) -> Option<Self> {
        let kind = match code {
            glow::FLOAT => UniformKind::Float,
            glow::FLOAT_VEC2 => UniformKind::FloatVec2,
            glow::FLOAT_VEC3 => UniformKind::FloatVec3,
            glow::FLOAT_VEC4 => UniformKind::FloatVec4,
            glow::FLOAT_MAT2 => UniformKind::FloatMat2,
            glow::FLOAT_MAT3 => UniformKind::FloatMat3,
            glow::FLOAT_MAT4 => UniformKind::FloatMat4,
            glow::INT => UniformKind::Int,
            glow::INT_VEC2 => UniformKind::IntVec2,
            glow::INT_VEC3 => UniformKind::IntVec3,
            glow::INT_VEC4 => UniformKind::IntVec4,
            glow::BOOL => UniformKind::Bool,
            glow::BOOL_VEC2 => UniformKind::BoolVec2,
            glow::BOOL_VEC3 => UniformKind::BoolVec3,
            glow::BOOL_VEC4 => UniformKind::BoolVec4,
            glow::SAMPLER_2D => UniformKind::Sampler2D,
            _ => return None,
        };
        Some(kind)
    }

    pub fn code(self) -> u32 {
        match self {
            UniformKind::Float => glow::FLOAT,
            UniformKind::FloatVec2 => glow::FLOAT_VEC2,
            UniformKind::FloatVec3 => glow::FLOAT_VEC3,
            UniformKind::FloatVec4 => glow::FLOAT_VEC4,
            UniformKind::FloatMat2 => glow::FLOAT_MAT2,
            UniformKind::FloatMat3 => glow::FLOAT_MAT3,
            UniformKind::FloatMat4 => glow::FLOAT_MAT4,
            UniformKind::Int => glow::INT,
            UniformKind::IntVec2 => glow::INT_VEC2,
            UniformKind::IntVec3 => glow::INT_VEC3,
            UniformKind::IntVec4 => glow::INT_VEC4,
            UniformKind::Bool => glow::BOOL,
            UniformKind::BoolVec2 => glow::BOOL_VEC2,
            UniformKind::BoolVec3 => glow::BOOL_VEC3,
            UniformKind::BoolVec4 => glow::BOOL_VEC4,
            UniformKind::Sampler2D => glow::SAMPLER_2D,
        }
    }

    /// Whether an `[N]` declaration of this kind gets a dedicated array binder.
    ///
    /// Vector, matrix and bool binders already forward whole sequences.
    pub fn has_array_form(self) -> bool {
        matches!(self, UniformKind::Float | UniformKind::Int | UniformKind::Sampler2D)
    }
}
