use std::collections::BTreeMap;

use crate::device::{Drawable, Driver};
use crate::shader::{
    compile, set_buffers_and_attributes, set_uniforms, AttribBuffer, BufferInfo, ProgramInfo,
    ShaderSources, UniformValue,
};

use super::RenderError;

/// Two triangles covering clip space `[-1, 1]²`.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

pub const QUAD_VERTEX_COUNT: i32 = 6;

/// Attribute the vertex shader must declare for the quad positions.
pub const POSITION_ATTRIB: &str = "a_position";

pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Animation state carried from frame to frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameState {
    /// Accumulated animation time in seconds. Never decreases.
    ///
    /// Summed in `f64`; an `f32` sum stops moving at 60 Hz steps once it
    /// passes 2^19 s.
    pub time: f64,
    /// Multiplier applied to each frame delta.
    pub speed: f32,
    /// Drawable size seen by the last frame.
    pub resolution: Drawable,
}

impl FrameState {
    pub fn new(speed: f32) -> Self {
        Self {
            time: 0.0,
            speed,
            resolution: Drawable::default(),
        }
    }

    /// Accumulates `dt` seconds scaled by `speed`. Negative steps are dropped.
    pub fn advance(&mut self, dt: f32) -> f64 {
        self.time += (f64::from(self.speed) * f64::from(dt)).max(0.0);
        self.time
    }
}

/// Draws a fullscreen quad with one shader program.
///
/// Owns the program's setter table, the quad buffer and the uniform value
/// bag. `frame` runs one complete frame; the caller decides when the next
/// one happens.
pub struct QuadRenderer<D: Driver> {
    program: ProgramInfo<D>,
    buffers: BufferInfo<D::Buffer>,
    vertex_buffer: D::Buffer,
    uniforms: BTreeMap<String, UniformValue<D::Texture>>,
    state: FrameState,
}

impl<D: Driver> QuadRenderer<D> {
    pub fn new(gl: &D, sources: &ShaderSources, speed: f32) -> Result<Self, RenderError> {
        let program = compile(gl, &sources.vertex, &sources.fragment)?;
        gl.use_program(Some(program.program()));

        if program.attribute(POSITION_ATTRIB).is_none() {
            log::warn!("vertex shader does not use `{POSITION_ATTRIB}`; the quad will not be fed");
        }

        let vertex_buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(e) => {
                gl.use_program(None);
                gl.delete_program(program.program());
                return Err(RenderError::VertexBuffer(e));
            }
        };
        let buffers = BufferInfo::new().with_attrib(POSITION_ATTRIB, AttribBuffer::new(vertex_buffer, 2));

        let mut uniforms = BTreeMap::new();
        uniforms.insert("resolution".to_string(), UniformValue::Floats(vec![0.0, 0.0]));
        uniforms.insert("time".to_string(), UniformValue::Float(0.0));

        Ok(Self {
            program,
            buffers,
            vertex_buffer,
            uniforms,
            state: FrameState::new(speed),
        })
    }

    pub fn program(&self) -> &ProgramInfo<D> {
        &self.program
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    pub fn uniforms(&self) -> &BTreeMap<String, UniformValue<D::Texture>> {
        &self.uniforms
    }

    /// Adds or replaces a value in the bag pushed every frame.
    ///
    /// Names the program does not declare are carried but never pushed.
    pub fn set_uniform(&mut self, name: impl Into<String>, value: UniformValue<D::Texture>) {
        self.uniforms.insert(name.into(), value);
    }

    /// Runs one frame `dt` seconds after the previous one.
    ///
    /// Call order is fixed: clear, uniforms refresh, program bind, attribute
    /// and uniform tables, viewport, vertex upload, draw.
    /// An empty drawable only advances time.
    pub fn frame(&mut self, gl: &D, drawable: Drawable, dt: f32) {
        let time = self.state.advance(dt);
        self.state.resolution = drawable;

        // Minimized: a zero-sized viewport draws nothing.
        if drawable.is_empty() {
            log::trace!("frame: t={time:.3}s skipped, empty drawable");
            return;
        }

        gl.clear(CLEAR_COLOR);

        self.uniforms.insert(
            "resolution".to_string(),
            UniformValue::Floats(vec![drawable.width as f32, drawable.height as f32]),
        );
        self.uniforms.insert("time".to_string(), UniformValue::Float(time as f32));

        // Rebound every frame in case other code switched programs.
        gl.use_program(Some(self.program.program()));

        set_buffers_and_attributes(gl, &self.program, &self.buffers);
        set_uniforms(gl, &self.program, &self.uniforms);

        gl.viewport(0, 0, drawable.width as i32, drawable.height as i32);

        // The quad is static; it is still re-uploaded each frame.
        gl.bind_array_buffer(Some(self.vertex_buffer));
        gl.array_buffer_data(&QUAD_VERTICES);

        gl.draw_triangles(0, QUAD_VERTEX_COUNT);

        log::trace!("frame: t={time:.3}s {}x{}", drawable.width, drawable.height);
    }
}
