use std::collections::HashMap;

use crate::device::{AttribLayout, Driver};

use super::setters::Setter;

/// A vertex buffer plus the layout used to feed one attribute.
///
/// `size` is the buffer's component count; `num_components` overrides it per
/// call. Unset fields fall back to `FLOAT`, not normalized, tightly packed,
/// offset zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AttribBuffer<B> {
    pub buffer: B,
    pub size: i32,
    pub num_components: Option<i32>,
    pub data_type: Option<u32>,
    pub normalize: Option<bool>,
    pub stride: Option<i32>,
    pub offset: Option<i32>,
}

impl<B> AttribBuffer<B> {
    pub fn new(buffer: B, size: i32) -> Self {
        Self {
            buffer,
            size,
            num_components: None,
            data_type: None,
            normalize: None,
            stride: None,
            offset: None,
        }
    }

    pub fn num_components(mut self, n: i32) -> Self {
        self.num_components = Some(n);
        self
    }

    pub fn data_type(mut self, data_type: u32) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    pub fn stride(mut self, stride: i32) -> Self {
        self.stride = Some(stride);
        self
    }

    pub fn offset(mut self, offset: i32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Resolved `glVertexAttribPointer` arguments.
    pub fn layout(&self) -> AttribLayout {
        AttribLayout {
            components: self.num_components.unwrap_or(self.size),
            data_type: self.data_type.unwrap_or(glow::FLOAT),
            normalized: self.normalize.unwrap_or(false),
            stride: self.stride.unwrap_or(0),
            offset: self.offset.unwrap_or(0),
        }
    }
}

/// Vertex buffers for one draw, keyed by attribute name.
#[derive(Debug, Clone)]
pub struct BufferInfo<B> {
    pub attribs: HashMap<String, AttribBuffer<B>>,
    pub indices: Option<B>,
}

impl<B> BufferInfo<B> {
    pub fn new() -> Self {
        Self {
            attribs: HashMap::new(),
            indices: None,
        }
    }

    pub fn with_attrib(mut self, name: impl Into<String>, attrib: AttribBuffer<B>) -> Self {
        self.attribs.insert(name.into(), attrib);
        self
    }

    pub fn with_indices(mut self, indices: B) -> Self {
        self.indices = Some(indices);
        self
    }
}

impl<B> Default for BufferInfo<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Binds a buffer to one active attribute location.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AttribSetter {
    name: String,
    location: u32,
}

impl AttribSetter {
    pub(crate) fn new(name: impl Into<String>, location: u32) -> Self {
        Self { name: name.into(), location }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> u32 {
        self.location
    }
}

impl<D: Driver> Setter<D> for AttribSetter {
    type Value = AttribBuffer<D::Buffer>;

    fn apply(&self, gl: &D, value: &AttribBuffer<D::Buffer>) {
        gl.bind_array_buffer(Some(value.buffer));
        gl.enable_vertex_attrib_array(self.location);
        gl.vertex_attrib_pointer(self.location, value.layout());
    }
}
