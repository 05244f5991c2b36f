use std::borrow::Cow;
use std::slice;

use crate::device::{ActiveInfo, Driver, UniformCall};

use super::kind::UniformKind;
use super::setters::Setter;

/// A value pushed to a uniform.
///
/// Binders convert leniently: a scalar is accepted where a one-element
/// sequence is expected and the other way around, and bools become `0`/`1`.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue<T> {
    Float(f32),
    Floats(Vec<f32>),
    Int(i32),
    Ints(Vec<i32>),
    Bool(bool),
    Bools(Vec<bool>),
    Texture(T),
    Textures(Vec<T>),
}

impl<T> UniformValue<T> {
    fn as_f32(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            UniformValue::Floats(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    fn as_f32_slice(&self) -> Option<&[f32]> {
        match self {
            UniformValue::Float(v) => Some(slice::from_ref(v)),
            UniformValue::Floats(v) => Some(v),
            _ => None,
        }
    }

    fn as_i32(&self) -> Option<i32> {
        match self {
            UniformValue::Int(v) => Some(*v),
            UniformValue::Bool(v) => Some(i32::from(*v)),
            UniformValue::Ints(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    fn as_i32_slice(&self) -> Option<Cow<'_, [i32]>> {
        match self {
            UniformValue::Int(v) => Some(Cow::Borrowed(slice::from_ref(v))),
            UniformValue::Ints(v) => Some(Cow::Borrowed(v)),
            UniformValue::Bool(v) => Some(Cow::Owned(vec![i32::from(*v)])),
            UniformValue::Bools(v) => Some(Cow::Owned(v.iter().map(|b| i32::from(*b)).collect())),
            _ => None,
        }
    }

    fn as_textures(&self) -> Option<&[T]> {
        match self {
            UniformValue::Texture(t) => Some(slice::from_ref(t)),
            UniformValue::Textures(t) => Some(t),
            _ => None,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            UniformValue::Float(_) => "Float",
            UniformValue::Floats(_) => "Floats",
            UniformValue::Int(_) => "Int",
            UniformValue::Ints(_) => "Ints",
            UniformValue::Bool(_) => "Bool",
            UniformValue::Bools(_) => "Bools",
            UniformValue::Texture(_) => "Texture",
            UniformValue::Textures(_) => "Textures",
        }
    }
}

/// Binder shape selected once, at table build time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum UniformBinder {
    Float,
    FloatArray,
    FloatVec(u8),
    FloatMat(u8),
    Int,
    IntArray,
    IntVec(u8),
    Bool,
    BoolVec(u8),
    Sampler2D { unit: u32 },
    Sampler2DArray { units: Vec<u32> },
}

impl UniformBinder {
    /// Selects the binder for `kind`.
    ///
    /// Samplers claim texture units from `next_unit`, which the caller keeps
    /// for the whole table so that no two samplers share a unit.
    pub fn select(kind: UniformKind, is_array: bool, size: i32, next_unit: &mut u32) -> Self {
        let array = is_array && kind.has_array_form();
        match kind {
            UniformKind::Float if array => UniformBinder::FloatArray,
            UniformKind::Float => UniformBinder::Float,
            UniformKind::FloatVec2 => UniformBinder::FloatVec(2),
            UniformKind::FloatVec3 => UniformBinder::FloatVec(3),
            UniformKind::FloatVec4 => UniformBinder::FloatVec(4),
            UniformKind::FloatMat2 => UniformBinder::FloatMat(2),
            UniformKind::FloatMat3 => UniformBinder::FloatMat(3),
            UniformKind::FloatMat4 => UniformBinder::FloatMat(4),
            UniformKind::Int if array => UniformBinder::IntArray,
            UniformKind::Int => UniformBinder::Int,
            UniformKind::IntVec2 => UniformBinder::IntVec(2),
            UniformKind::IntVec3 => UniformBinder::IntVec(3),
            UniformKind::IntVec4 => UniformBinder::IntVec(4),
            UniformKind::Bool => UniformBinder::Bool,
            UniformKind::BoolVec2 => UniformBinder::BoolVec(2),
            UniformKind::BoolVec3 => UniformBinder::BoolVec(3),
            UniformKind::BoolVec4 => UniformBinder::BoolVec(4),
            UniformKind::Sampler2D if array => {
                let count = size.max(1) as u32;
                let units = (*next_unit..*next_unit + count).collect();
                *next_unit += count;
                UniformBinder::Sampler2DArray { units }
            }
            UniformKind::Sampler2D => {
                let unit = *next_unit;
                *next_unit += 1;
                UniformBinder::Sampler2D { unit }
            }
        }
    }

    pub fn texture_units(&self) -> &[u32] {
        match self {
            UniformBinder::Sampler2D { unit } => slice::from_ref(unit),
            UniformBinder::Sampler2DArray { units } => units,
            _ => &[],
        }
    }
}

/// Pushes values to one active uniform.
pub struct UniformSetter<D: Driver> {
    name: String,
    kind: UniformKind,
    location: Option<D::UniformLocation>,
    binder: UniformBinder,
}

impl<D: Driver> UniformSetter<D> {
    /// Builds the setter for a reflected uniform. `name` is the base name
    /// (array suffix stripped).
    pub(crate) fn new(
        name: String,
        info: &ActiveInfo,
        kind: UniformKind,
        location: Option<D::UniformLocation>,
        next_unit: &mut u32,
    ) -> Self {
        let is_array = info.size > 1 && info.name.ends_with("[0]");
        let binder = UniformBinder::select(kind, is_array, info.size, next_unit);
        Self { name, kind, location, binder }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> UniformKind {
        self.kind
    }

    pub fn binder(&self) -> &UniformBinder {
        &self.binder
    }

    pub fn is_array(&self) -> bool {
        matches!(
            self.binder,
            UniformBinder::FloatArray | UniformBinder::IntArray | UniformBinder::Sampler2DArray { .. }
        )
    }

    pub fn texture_units(&self) -> &[u32] {
        self.binder.texture_units()
    }

    fn push(&self, gl: &D, call: UniformCall<'_>) {
        gl.uniform(self.location.as_ref(), call);
    }

    fn bind_textures(&self, gl: &D, units: &[u32], textures: &[D::Texture]) {
        for (unit, texture) in units.iter().zip(textures) {
            gl.active_texture(*unit);
            gl.bind_texture_2d(Some(*texture));
        }
    }

    fn mismatch(&self, value: &UniformValue<D::Texture>) {
        log::warn!(
            "uniform `{}` ({:?}) cannot take a {} value; skipped",
            self.name,
            self.kind,
            value.variant_name()
        );
    }
}

impl<D: Driver> Setter<D> for UniformSetter<D> {
    type Value = UniformValue<D::Texture>;

    fn apply(&self, gl: &D, value: &UniformValue<D::Texture>) {
        let pushed = match &self.binder {
            UniformBinder::Float => value.as_f32().map(|v| self.push(gl, UniformCall::F1(v))),
            UniformBinder::FloatArray => {
                value.as_f32_slice().map(|v| self.push(gl, UniformCall::F1v(v)))
            }
            UniformBinder::FloatVec(n) => value.as_f32_slice().map(|v| {
                let call = match n {
                    2 => UniformCall::F2v(v),
                    3 => UniformCall::F3v(v),
                    _ => UniformCall::F4v(v),
                };
                self.push(gl, call)
            }),
            UniformBinder::FloatMat(n) => value.as_f32_slice().map(|v| {
                let call = match n {
                    2 => UniformCall::Matrix2(v),
                    3 => UniformCall::Matrix3(v),
                    _ => UniformCall::Matrix4(v),
                };
                self.push(gl, call)
            }),
            UniformBinder::Int => value.as_i32().map(|v| self.push(gl, UniformCall::I1(v))),
            UniformBinder::IntArray | UniformBinder::Bool => {
                value.as_i32_slice().map(|v| self.push(gl, UniformCall::I1v(&v)))
            }
            UniformBinder::IntVec(n) | UniformBinder::BoolVec(n) => {
                value.as_i32_slice().map(|v| {
                    let call = match n {
                        2 => UniformCall::I2v(&v),
                        3 => UniformCall::I3v(&v),
                        _ => UniformCall::I4v(&v),
                    };
                    self.push(gl, call)
                })
            }
            UniformBinder::Sampler2D { unit } => value.as_textures().map(|textures| {
                self.push(gl, UniformCall::I1(*unit as i32));
                self.bind_textures(gl, slice::from_ref(unit), textures);
            }),
            UniformBinder::Sampler2DArray { units } => value.as_textures().map(|textures| {
                let slots: Vec<i32> = units.iter().map(|u| *u as i32).collect();
                self.push(gl, UniformCall::I1v(&slots));
                self.bind_textures(gl, units, textures);
            }),
        };

        if pushed.is_none() {
            self.mismatch(value);
        }
    }
}
