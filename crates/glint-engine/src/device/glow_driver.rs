use glow::HasContext;

use super::driver::{ActiveInfo, AttribLayout, Driver, ShaderStage, UniformCall};

/// `Driver` implementation backed by a current `glow` context.
///
/// Core profiles refuse vertex attribute calls without a bound vertex array
/// object, so one is created and bound for the lifetime of the driver.
pub struct GlowDriver {
    gl: glow::Context,
    vao: glow::VertexArray,
}

impl GlowDriver {
    /// Wraps a loaded context. The context must be current on this thread.
    pub fn new(gl: glow::Context) -> Result<Self, String> {
        let vao = unsafe {
            let vao = gl.create_vertex_array()?;
            gl.bind_vertex_array(Some(vao));
            vao
        };

        unsafe {
            log::info!(
                "GL {} ({}), GLSL {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            );
        }

        Ok(Self { gl, vao })
    }
}

impl Drop for GlowDriver {
    fn drop(&mut self) {
        unsafe {
            self.gl.bind_vertex_array(None);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

impl Driver for GlowDriver {
    type Program = glow::Program;
    type Shader = glow::Shader;
    type Buffer = glow::Buffer;
    type Texture = glow::Texture;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        unsafe { self.gl.create_shader(stage.gl_enum()) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn active_attributes(&self, program: glow::Program) -> u32 {
        unsafe { self.gl.get_active_attributes(program) }
    }

    fn active_attribute(&self, program: glow::Program, index: u32) -> Option<ActiveInfo> {
        unsafe { self.gl.get_active_attribute(program, index) }
            .map(|a| ActiveInfo::new(a.name, a.size, a.atype))
    }

    fn attrib_location(&self, program: glow::Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn active_uniforms(&self, program: glow::Program) -> u32 {
        unsafe { self.gl.get_active_uniforms(program) }
    }

    fn active_uniform(&self, program: glow::Program, index: u32) -> Option<ActiveInfo> {
        unsafe { self.gl.get_active_uniform(program, index) }
            .map(|u| ActiveInfo::new(u.name, u.size, u.utype))
    }

    fn uniform_location(&self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn create_buffer(&self) -> Result<glow::Buffer, String> {
        unsafe { self.gl.create_buffer() }
    }

    fn bind_array_buffer(&self, buffer: Option<glow::Buffer>) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, buffer) }
    }

    fn bind_element_buffer(&self, buffer: Option<glow::Buffer>) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data(&self, data: &[f32]) {
        unsafe {
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn vertex_attrib_pointer(&self, index: u32, layout: AttribLayout) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                index,
                layout.components,
                layout.data_type,
                layout.normalized,
                layout.stride,
                layout.offset,
            )
        }
    }

    fn uniform(&self, location: Option<&glow::UniformLocation>, call: UniformCall<'_>) {
        let gl = &self.gl;
        unsafe {
            match call {
                UniformCall::F1(v) => gl.uniform_1_f32(location, v),
                UniformCall::F1v(v) => gl.uniform_1_f32_slice(location, v),
                UniformCall::F2v(v) => gl.uniform_2_f32_slice(location, v),
                UniformCall::F3v(v) => gl.uniform_3_f32_slice(location, v),
                UniformCall::F4v(v) => gl.uniform_4_f32_slice(location, v),
                UniformCall::I1(v) => gl.uniform_1_i32(location, v),
                UniformCall::I1v(v) => gl.uniform_1_i32_slice(location, v),
                UniformCall::I2v(v) => gl.uniform_2_i32_slice(location, v),
                UniformCall::I3v(v) => gl.uniform_3_i32_slice(location, v),
                UniformCall::I4v(v) => gl.uniform_4_i32_slice(location, v),
                UniformCall::Matrix2(v) => gl.uniform_matrix_2_f32_slice(location, false, v),
                UniformCall::Matrix3(v) => gl.uniform_matrix_3_f32_slice(location, false, v),
                UniformCall::Matrix4(v) => gl.uniform_matrix_4_f32_slice(location, false, v),
            }
        }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { self.gl.active_texture(glow::TEXTURE0 + unit) }
    }

    fn bind_texture_2d(&self, texture: Option<glow::Texture>) {
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, texture) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    fn clear(&self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, first, count) }
    }
}
