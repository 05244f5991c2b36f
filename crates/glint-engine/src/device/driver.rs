use std::fmt;

/// Shader pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// GL enum passed to `glCreateShader`.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// One active attribute or uniform as reported by program reflection.
///
/// `size` is the element count (greater than one for arrays) and `type_code`
/// the raw GL type enum (`FLOAT_VEC2`, `SAMPLER_2D`, ...).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ActiveInfo {
    pub name: String,
    pub size: i32,
    pub type_code: u32,
}

impl ActiveInfo {
    pub fn new(name: impl Into<String>, size: i32, type_code: u32) -> Self {
        Self { name: name.into(), size, type_code }
    }
}

/// A single uniform upload, named after the GL entry point it maps to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformCall<'a> {
    F1(f32),
    F1v(&'a [f32]),
    F2v(&'a [f32]),
    F3v(&'a [f32]),
    F4v(&'a [f32]),
    I1(i32),
    I1v(&'a [i32]),
    I2v(&'a [i32]),
    I3v(&'a [i32]),
    I4v(&'a [i32]),
    Matrix2(&'a [f32]),
    Matrix3(&'a [f32]),
    Matrix4(&'a [f32]),
}

/// Vertex attribute layout passed to `glVertexAttribPointer`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttribLayout {
    pub components: i32,
    pub data_type: u32,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
}

/// Graphics driver seam.
///
/// Everything above this trait (program introspection, setter tables, the
/// frame loop) talks to the GPU exclusively through it. Methods take `&self`:
/// the driver is a single-threaded handle to an implicitly mutable context.
pub trait Driver {
    type Program: Copy + fmt::Debug;
    type Shader: Copy + fmt::Debug;
    type Buffer: Copy + fmt::Debug;
    type Texture: Copy + fmt::Debug;
    type UniformLocation: Clone + fmt::Debug;

    // Shader / program lifecycle.
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    // Reflection.
    fn active_attributes(&self, program: Self::Program) -> u32;
    fn active_attribute(&self, program: Self::Program, index: u32) -> Option<ActiveInfo>;
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn active_uniforms(&self, program: Self::Program) -> u32;
    fn active_uniform(&self, program: Self::Program, index: u32) -> Option<ActiveInfo>;
    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    // Vertex input.
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    fn bind_element_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the buffer bound to `ARRAY_BUFFER` with `STATIC_DRAW`.
    fn array_buffer_data(&self, data: &[f32]);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(&self, index: u32, layout: AttribLayout);

    // Uniforms and textures.
    fn uniform(&self, location: Option<&Self::UniformLocation>, call: UniformCall<'_>);
    /// Selects texture unit `unit` (relative to `TEXTURE0`).
    fn active_texture(&self, unit: u32);
    fn bind_texture_2d(&self, texture: Option<Self::Texture>);

    // Framebuffer.
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Clears color and depth buffers to `color`.
    fn clear(&self, color: [f32; 4]);
    fn draw_triangles(&self, first: i32, count: i32);
}
