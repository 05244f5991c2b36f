//! Scripted `Driver` for tests: reports a fixed program layout and records
//! every state-changing call.

use std::cell::{Cell, RefCell};

use super::driver::{ActiveInfo, AttribLayout, Driver, ShaderStage, UniformCall};

/// Owned copy of a `UniformCall`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Upload {
    F1(f32),
    Fv(u8, Vec<f32>),
    I1(i32),
    Iv(u8, Vec<i32>),
    Matrix(u8, Vec<f32>),
}

impl From<UniformCall<'_>> for Upload {
    fn from(call: UniformCall<'_>) -> Self {
        match call {
            UniformCall::F1(v) => Upload::F1(v),
            UniformCall::F1v(v) => Upload::Fv(1, v.to_vec()),
            UniformCall::F2v(v) => Upload::Fv(2, v.to_vec()),
            UniformCall::F3v(v) => Upload::Fv(3, v.to_vec()),
            UniformCall::F4v(v) => Upload::Fv(4, v.to_vec()),
            UniformCall::I1(v) => Upload::I1(v),
            UniformCall::I1v(v) => Upload::Iv(1, v.to_vec()),
            UniformCall::I2v(v) => Upload::Iv(2, v.to_vec()),
            UniformCall::I3v(v) => Upload::Iv(3, v.to_vec()),
            UniformCall::I4v(v) => Upload::Iv(4, v.to_vec()),
            UniformCall::Matrix2(v) => Upload::Matrix(2, v.to_vec()),
            UniformCall::Matrix3(v) => Upload::Matrix(3, v.to_vec()),
            UniformCall::Matrix4(v) => Upload::Matrix(4, v.to_vec()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage, u32),
    DeleteShader(u32),
    CreateProgram(u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BindElementBuffer(Option<u32>),
    BufferData(Vec<f32>),
    EnableAttrib(u32),
    AttribPointer(u32, AttribLayout),
    Uniform(Option<u32>, Upload),
    ActiveTexture(u32),
    BindTexture(Option<u32>),
    Viewport(i32, i32, i32, i32),
    Clear([f32; 4]),
    DrawTriangles(i32, i32),
}

/// Handles are plain integers; uniform and attribute locations are the
/// position of the entry in the scripted lists.
#[derive(Default)]
pub(crate) struct RecordingDriver {
    attributes: Vec<ActiveInfo>,
    uniforms: Vec<ActiveInfo>,
    fail_compile: Option<ShaderStage>,
    fail_link: bool,
    next_handle: Cell<u32>,
    stages: RefCell<Vec<(u32, ShaderStage)>>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_attribute(mut self, name: &str, size: i32, type_code: u32) -> Self {
        self.attributes.push(ActiveInfo::new(name, size, type_code));
        self
    }

    pub(crate) fn with_uniform(mut self, name: &str, size: i32, type_code: u32) -> Self {
        self.uniforms.push(ActiveInfo::new(name, size, type_code));
        self
    }

    pub(crate) fn failing_compile(mut self, stage: ShaderStage) -> Self {
        self.fail_compile = Some(stage);
        self
    }

    pub(crate) fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    /// The quad program used by the demo: `a_position`, `time`, `resolution`.
    pub(crate) fn quad_program() -> Self {
        Self::new()
            .with_attribute("a_position", 1, glow::FLOAT_VEC2)
            .with_uniform("time", 1, glow::FLOAT)
            .with_uniform("resolution", 1, glow::FLOAT_VEC2)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn handle(&self) -> u32 {
        let h = self.next_handle.get() + 1;
        self.next_handle.set(h);
        h
    }

    fn stage_of(&self, shader: u32) -> Option<ShaderStage> {
        self.stages
            .borrow()
            .iter()
            .find(|(h, _)| *h == shader)
            .map(|(_, s)| *s)
    }
}

impl Driver for RecordingDriver {
    type Program = u32;
    type Shader = u32;
    type Buffer = u32;
    type Texture = u32;
    type UniformLocation = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let h = self.handle();
        self.stages.borrow_mut().push((h, stage));
        self.record(Call::CreateShader(stage, h));
        Ok(h)
    }

    fn shader_source(&self, _shader: u32, _source: &str) {}

    fn compile_shader(&self, _shader: u32) {}

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.fail_compile.is_none() || self.stage_of(shader) != self.fail_compile
    }

    fn shader_info_log(&self, shader: u32) -> String {
        match self.stage_of(shader) {
            Some(stage) => format!("0:1(1): error: syntax error in {stage} shader"),
            None => String::new(),
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let h = self.handle();
        self.record(Call::CreateProgram(h));
        Ok(h)
    }

    fn attach_shader(&self, _program: u32, _shader: u32) {}

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        if self.fail_link {
            "error: fragment input `v_uv` has no matching vertex output".to_string()
        } else {
            String::new()
        }
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn active_attributes(&self, _program: u32) -> u32 {
        self.attributes.len() as u32
    }

    fn active_attribute(&self, _program: u32, index: u32) -> Option<ActiveInfo> {
        self.attributes.get(index as usize).cloned()
    }

    fn attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        if name.starts_with("gl_") {
            return None;
        }
        self.attributes
            .iter()
            .position(|a| a.name == name)
            .map(|i| i as u32)
    }

    fn active_uniforms(&self, _program: u32) -> u32 {
        self.uniforms.len() as u32
    }

    fn active_uniform(&self, _program: u32, index: u32) -> Option<ActiveInfo> {
        self.uniforms.get(index as usize).cloned()
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.uniforms
            .iter()
            .position(|u| u.name == name)
            .map(|i| i as u32)
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let h = self.handle();
        self.record(Call::CreateBuffer(h));
        Ok(h)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn bind_element_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindElementBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[f32]) {
        self.record(Call::BufferData(data.to_vec()));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    fn vertex_attrib_pointer(&self, index: u32, layout: AttribLayout) {
        self.record(Call::AttribPointer(index, layout));
    }

    fn uniform(&self, location: Option<&u32>, call: UniformCall<'_>) {
        self.record(Call::Uniform(location.copied(), call.into()));
    }

    fn active_texture(&self, unit: u32) {
        self.record(Call::ActiveTexture(unit));
    }

    fn bind_texture_2d(&self, texture: Option<u32>) {
        self.record(Call::BindTexture(texture));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear(&self, color: [f32; 4]) {
        self.record(Call::Clear(color));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles(first, count));
    }
}
