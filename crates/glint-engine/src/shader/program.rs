use std::collections::HashMap;

use crate::device::{Driver, ShaderStage};

use super::attribute::{AttribSetter, BufferInfo};
use super::error::ProgramError;
use super::kind::UniformKind;
use super::setters::apply_setters;
use super::uniform::{UniformSetter, UniformValue};

/// A linked program and its setter tables.
///
/// Built once by [`compile`]; the tables never change afterwards.
pub struct ProgramInfo<D: Driver> {
    program: D::Program,
    attrib_setters: HashMap<String, AttribSetter>,
    uniform_setters: HashMap<String, UniformSetter<D>>,
}

impl<D: Driver> ProgramInfo<D> {
    pub fn program(&self) -> D::Program {
        self.program
    }

    pub fn attribute(&self, name: &str) -> Option<&AttribSetter> {
        self.attrib_setters.get(name)
    }

    pub fn uniform(&self, name: &str) -> Option<&UniformSetter<D>> {
        self.uniform_setters.get(name)
    }

    pub fn attrib_setters(&self) -> &HashMap<String, AttribSetter> {
        &self.attrib_setters
    }

    pub fn uniform_setters(&self) -> &HashMap<String, UniformSetter<D>> {
        &self.uniform_setters
    }
}

/// Compiles and links a program, then builds its setter tables.
///
/// Intermediate driver objects are released on every failure path; on
/// success the shader objects are released and only the program survives.
pub fn compile<D: Driver>(
    gl: &D,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<ProgramInfo<D>, ProgramError> {
    let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_source) {
        Ok(shader) => shader,
        Err(e) => {
            gl.delete_shader(vertex);
            return Err(e);
        }
    };

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(e) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            return Err(ProgramError::Resource(format!("program object ({e})")));
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if !gl.program_link_status(program) {
        let log = gl.program_info_log(program);
        gl.delete_program(program);
        return Err(ProgramError::ProgramLink { log });
    }

    match build_tables(gl, program) {
        Ok(info) => {
            log::debug!(
                "program {:?}: {} attribute(s), {} uniform(s)",
                program,
                info.attrib_setters.len(),
                info.uniform_setters.len()
            );
            Ok(info)
        }
        Err(e) => {
            gl.delete_program(program);
            Err(e)
        }
    }
}

/// Pushes every value whose name matches an active uniform.
pub fn set_uniforms<'v, D, K>(
    gl: &D,
    info: &ProgramInfo<D>,
    values: impl IntoIterator<Item = (&'v K, &'v UniformValue<D::Texture>)>,
) where
    D: Driver,
    D::Texture: 'v,
    K: AsRef<str> + ?Sized + 'v,
{
    apply_setters(gl, &info.uniform_setters, values);
}

/// Binds every buffer whose name matches an active attribute, then the index
/// buffer if one is set.
pub fn set_buffers_and_attributes<D: Driver>(
    gl: &D,
    info: &ProgramInfo<D>,
    buffers: &BufferInfo<D::Buffer>,
) {
    apply_setters(gl, &info.attrib_setters, &buffers.attribs);
    if let Some(indices) = buffers.indices {
        gl.bind_element_buffer(Some(indices));
    }
}

fn compile_stage<D: Driver>(
    gl: &D,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, ProgramError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|e| ProgramError::Resource(format!("{stage} shader object ({e})")))?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(ProgramError::ShaderCompile { stage, log });
    }

    Ok(shader)
}

fn build_tables<D: Driver>(gl: &D, program: D::Program) -> Result<ProgramInfo<D>, ProgramError> {
    let uniform_setters = uniform_setters(gl, program)?;
    let attrib_setters = attrib_setters(gl, program);
    Ok(ProgramInfo {
        program,
        attrib_setters,
        uniform_setters,
    })
}

fn attrib_setters<D: Driver>(gl: &D, program: D::Program) -> HashMap<String, AttribSetter> {
    let mut setters = HashMap::new();

    for index in 0..gl.active_attributes(program) {
        let Some(info) = gl.active_attribute(program, index) else {
            break;
        };

        match gl.attrib_location(program, &info.name) {
            Some(location) => {
                log::debug!("attribute `{}` at location {}", info.name, location);
                setters.insert(info.name.clone(), AttribSetter::new(info.name, location));
            }
            None => log::debug!("attribute `{}` has no location; skipped", info.name),
        }
    }

    setters
}

fn uniform_setters<D: Driver>(
    gl: &D,
    program: D::Program,
) -> Result<HashMap<String, UniformSetter<D>>, ProgramError> {
    let mut setters = HashMap::new();
    let mut next_unit = 0u32;

    for index in 0..gl.active_uniforms(program) {
        let Some(info) = gl.active_uniform(program, index) else {
            break;
        };

        let name = info.name.strip_suffix("[0]").unwrap_or(&info.name).to_string();
        let kind = UniformKind::from_code(info.type_code).ok_or_else(|| {
            ProgramError::UnsupportedUniformType {
                name: name.clone(),
                code: info.type_code,
            }
        })?;

        let location = gl.uniform_location(program, &info.name);
        let setter = UniformSetter::new(name.clone(), &info, kind, location, &mut next_unit);
        log::debug!("uniform `{}`: {:?} {:?}", name, kind, setter.binder());
        setters.insert(name, setter);
    }

    Ok(setters)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::device::recording::{Call, RecordingDriver, Upload};
    use crate::shader::{AttribBuffer, UniformBinder};

    const VS: &str = "void main() {}";
    const FS: &str = "void main() {}";

    #[test]
    fn every_supported_kind_yields_one_binder() {
        for kind in UniformKind::ALL {
            let gl = RecordingDriver::new().with_uniform("u_value", 1, kind.code());
            let info = compile(&gl, VS, FS).unwrap();
            assert_eq!(info.uniform_setters().len(), 1, "{kind:?}");
            assert_eq!(info.uniform("u_value").map(|s| s.kind()), Some(kind));
        }
    }

    #[test]
    fn array_uniforms_are_keyed_by_base_name() {
        let gl = RecordingDriver::new()
            .with_uniform("weights[0]", 8, glow::FLOAT)
            .with_uniform("ids[0]", 2, glow::INT);
        let info = compile(&gl, VS, FS).unwrap();

        let weights = info.uniform("weights").unwrap();
        assert!(weights.is_array());
        assert_eq!(weights.binder(), &UniformBinder::FloatArray);
        assert!(info.uniform("ids").unwrap().is_array());
        assert!(info.uniform("weights[0]").is_none());
    }

    #[test]
    fn unsupported_type_fails_and_releases_program() {
        let gl = RecordingDriver::new()
            .with_uniform("time", 1, glow::FLOAT)
            .with_uniform("env", 1, glow::SAMPLER_CUBE);

        let Err(err) = compile(&gl, VS, FS) else {
            panic!("expected an error");
        };
        assert!(matches!(
            err,
            ProgramError::UnsupportedUniformType { ref name, code }
                if name == "env" && code == glow::SAMPLER_CUBE
        ));

        let calls = gl.calls();
        let program = calls
            .iter()
            .find_map(|c| match c {
                Call::CreateProgram(p) => Some(*p),
                _ => None,
            })
            .unwrap();
        assert_eq!(calls.last(), Some(&Call::DeleteProgram(program)));
    }

    #[test]
    fn sampler_units_are_distinct_and_increasing() {
        let gl = RecordingDriver::new()
            .with_uniform("u_albedo", 1, glow::SAMPLER_2D)
            .with_uniform("time", 1, glow::FLOAT)
            .with_uniform("u_layers[0]", 3, glow::SAMPLER_2D)
            .with_uniform("u_noise", 1, glow::SAMPLER_2D);
        let info = compile(&gl, VS, FS).unwrap();

        let units: Vec<u32> = ["u_albedo", "u_layers", "u_noise"]
            .iter()
            .flat_map(|n| info.uniform(n).unwrap().texture_units().to_vec())
            .collect();
        assert_eq!(units, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn vertex_compile_failure_names_the_stage() {
        let gl = RecordingDriver::new().failing_compile(ShaderStage::Vertex);
        let Err(err) = compile(&gl, "void main() { oops }", FS) else {
            panic!("expected an error");
        };
        assert!(matches!(
            err,
            ProgramError::ShaderCompile { stage: ShaderStage::Vertex, ref log } if log.contains("syntax error")
        ));

        let calls = gl.calls();
        assert!(!calls.iter().any(|c| matches!(c, Call::CreateProgram(_))));
        assert!(!calls.iter().any(|c| matches!(c, Call::CreateShader(ShaderStage::Fragment, _))));
        assert!(calls.contains(&Call::DeleteShader(1)));
    }

    #[test]
    fn fragment_compile_failure_releases_vertex_shader() {
        let gl = RecordingDriver::new().failing_compile(ShaderStage::Fragment);
        let Err(err) = compile(&gl, VS, FS) else {
            panic!("expected an error");
        };
        assert!(matches!(err, ProgramError::ShaderCompile { stage: ShaderStage::Fragment, .. }));
        assert_eq!(
            gl.calls(),
            vec![
                Call::CreateShader(ShaderStage::Vertex, 1),
                Call::CreateShader(ShaderStage::Fragment, 2),
                Call::DeleteShader(2),
                Call::DeleteShader(1),
            ]
        );
    }

    #[test]
    fn link_failure_releases_program() {
        let gl = RecordingDriver::new().failing_link();
        let Err(err) = compile(&gl, VS, FS) else {
            panic!("expected an error");
        };
        assert!(matches!(err, ProgramError::ProgramLink { ref log } if log.contains("v_uv")));
        assert_eq!(
            gl.calls(),
            vec![
                Call::CreateShader(ShaderStage::Vertex, 1),
                Call::CreateShader(ShaderStage::Fragment, 2),
                Call::CreateProgram(3),
                Call::LinkProgram(3),
                Call::DeleteShader(1),
                Call::DeleteShader(2),
                Call::DeleteProgram(3),
            ]
        );
    }

    #[test]
    fn shaders_are_released_after_successful_link() {
        let gl = RecordingDriver::quad_program();
        let info = compile(&gl, VS, FS).unwrap();
        assert_eq!(info.program(), 3);

        let calls = gl.calls();
        assert!(calls.contains(&Call::DeleteShader(1)));
        assert!(calls.contains(&Call::DeleteShader(2)));
        assert!(!calls.iter().any(|c| matches!(c, Call::DeleteProgram(_))));
        assert_eq!(info.attribute("a_position").map(|a| a.location()), Some(0));
    }

    #[test]
    fn attributes_without_location_are_skipped() {
        let gl = RecordingDriver::new()
            .with_attribute("gl_VertexID", 1, glow::INT)
            .with_attribute("a_position", 1, glow::FLOAT_VEC2);
        let info = compile(&gl, VS, FS).unwrap();
        assert_eq!(info.attrib_setters().len(), 1);
        assert_eq!(info.attribute("a_position").map(|a| a.location()), Some(1));
    }

    #[test]
    fn unknown_uniform_names_are_ignored() {
        let gl = RecordingDriver::quad_program();
        let info = compile(&gl, VS, FS).unwrap();
        gl.take_calls();

        let mut values = BTreeMap::new();
        values.insert("mouse".to_string(), UniformValue::Floats(vec![1.0, 2.0]));
        values.insert("time".to_string(), UniformValue::Float(2.0));
        values.insert("unused".to_string(), UniformValue::Int(1));
        set_uniforms(&gl, &info, &values);

        assert_eq!(gl.calls(), vec![Call::Uniform(Some(0), Upload::F1(2.0))]);
    }

    #[test]
    fn index_buffer_is_bound_after_attributes() {
        let gl = RecordingDriver::quad_program();
        let info = compile(&gl, VS, FS).unwrap();
        gl.take_calls();

        let buffers = BufferInfo::new()
            .with_attrib("a_position", AttribBuffer::new(11, 2))
            .with_attrib("a_uv", AttribBuffer::new(12, 2))
            .with_indices(13);
        set_buffers_and_attributes(&gl, &info, &buffers);

        assert_eq!(
            gl.calls(),
            vec![
                Call::BindArrayBuffer(Some(11)),
                Call::EnableAttrib(0),
                Call::AttribPointer(0, AttribBuffer::new(11u32, 2).layout()),
                Call::BindElementBuffer(Some(13)),
            ]
        );
    }
}
