#![cfg(not(target_arch = "wasm32"))]

use gl_diag::introspect::{FRAGMENT_SHADER, VERTEX_SHADER};
use gl_diag::{ActiveInfo, GlIntrospect, GlObject, Logger, MemorySink, RendererInfo};

const FLOAT_VEC4: u32 = 0x8B52;
const FLOAT_MAT4: u32 = 0x8B5C;

struct FakeProgram {
    linked: bool,
    info_log: Option<String>,
    attributes: Vec<Option<ActiveInfo>>,
    uniforms: Vec<Option<ActiveInfo>>,
}

struct FakeShader {
    kind: u32,
    source: Option<String>,
    compiled: bool,
    info_log: Option<String>,
}

#[derive(Default)]
struct FakeGl {
    renderer: Option<RendererInfo>,
    extensions: Vec<String>,
    version: Option<String>,
    glsl_version: Option<String>,
}

impl GlIntrospect for FakeGl {
    type Program = FakeProgram;
    type Shader = FakeShader;

    fn program_link_status(&self, program: &FakeProgram) -> bool {
        program.linked
    }

    fn program_info_log(&self, program: &FakeProgram) -> Option<String> {
        program.info_log.clone()
    }

    fn active_attribute_count(&self, program: &FakeProgram) -> u32 {
        program.attributes.len() as u32
    }

    fn active_attribute(&self, program: &FakeProgram, index: u32) -> Option<ActiveInfo> {
        program.attributes.get(index as usize).cloned().flatten()
    }

    fn active_uniform_count(&self, program: &FakeProgram) -> u32 {
        program.uniforms.len() as u32
    }

    fn active_uniform(&self, program: &FakeProgram, index: u32) -> Option<ActiveInfo> {
        program.uniforms.get(index as usize).cloned().flatten()
    }

    fn shader_type(&self, shader: &FakeShader) -> u32 {
        shader.kind
    }

    fn shader_source(&self, shader: &FakeShader) -> Option<String> {
        shader.source.clone()
    }

    fn shader_compile_status(&self, shader: &FakeShader) -> bool {
        shader.compiled
    }

    fn shader_info_log(&self, shader: &FakeShader) -> Option<String> {
        shader.info_log.clone()
    }

    fn debug_renderer_info(&self) -> Option<RendererInfo> {
        self.renderer.clone()
    }

    fn supported_extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn version(&self) -> Option<String> {
        self.version.clone()
    }

    fn shading_language_version(&self) -> Option<String> {
        self.glsl_version.clone()
    }
}

fn active(name: &str, kind: u32) -> Option<ActiveInfo> {
    Some(ActiveInfo {
        name: name.into(),
        kind,
        size: 1,
    })
}

fn quad_program(linked: bool) -> FakeProgram {
    FakeProgram {
        linked,
        info_log: (!linked).then(|| "varying mismatch".to_string()),
        attributes: vec![
            active("aVertexPosition", FLOAT_VEC4),
            active("aVertexColor", FLOAT_VEC4),
        ],
        uniforms: vec![active("uProjectionMatrix", FLOAT_MAT4)],
    }
}

fn capture() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::with_sink(sink.clone()), sink)
}

#[test]
fn linked_program_lists_attributes_and_uniforms() {
    let (log, sink) = capture();
    log.log_program(&FakeGl::default(), &quad_program(true));

    assert_eq!(
        log.entries(),
        vec![
            "Program Link Status: true",
            "Number of Active Attributes: 2",
            "Attribute 0: Name: aVertexPosition, Type: 35666, Size: 1",
            "Attribute 1: Name: aVertexColor, Type: 35666, Size: 1",
            "Number of Active Uniforms: 1",
            "Uniform 0: Name: uProjectionMatrix, Type: 35676, Size: 1",
        ]
    );
    assert!(sink.errors().is_empty());
}

#[test]
fn failed_link_reports_info_log_outside_the_buffer() {
    let (log, sink) = capture();
    log.log_program(&FakeGl::default(), &quad_program(false));

    assert_eq!(log.entries()[0], "Program Link Status: false");
    assert_eq!(sink.errors(), vec!["Program Info Log:\nvarying mismatch"]);
    assert!(log.entries().iter().all(|e| !e.contains("varying mismatch")));
}

#[test]
fn missing_active_info_is_marked_unavailable() {
    let (log, _sink) = capture();
    let program = FakeProgram {
        linked: true,
        info_log: None,
        attributes: vec![None],
        uniforms: vec![None],
    };
    log.log_program(&FakeGl::default(), &program);

    let entries = log.entries();
    assert!(entries.contains(&"Attribute 0: unavailable".to_string()));
    assert!(entries.contains(&"Uniform 0: unavailable".to_string()));
}

#[test]
fn compiled_vertex_shader() {
    let (log, _sink) = capture();
    let shader = FakeShader {
        kind: VERTEX_SHADER,
        source: Some("void main() {}".into()),
        compiled: true,
        info_log: Some(String::new()),
    };
    log.log_shader(&FakeGl::default(), &shader);

    assert_eq!(
        log.entries(),
        vec![
            "Shader Type: VERTEX_SHADER",
            "Shader Source:\nvoid main() {}",
            "Compile Status: true",
        ]
    );
}

#[test]
fn failed_fragment_shader_includes_info_log() {
    let (log, _sink) = capture();
    let shader = FakeShader {
        kind: FRAGMENT_SHADER,
        source: None,
        compiled: false,
        info_log: Some("ERROR: 0:1: syntax error".into()),
    };
    log.log_shader(&FakeGl::default(), &shader);

    assert_eq!(
        log.entries(),
        vec![
            "Shader Type: FRAGMENT_SHADER",
            "Shader Source:\nnull",
            "Compile Status: false",
            "Shader Info Log:\nERROR: 0:1: syntax error",
        ]
    );
}

#[test]
fn context_with_debug_renderer_info() {
    let (log, _sink) = capture();
    let gl = FakeGl {
        renderer: Some(RendererInfo {
            vendor: Some("Acme".into()),
            renderer: Some("Acme GPU".into()),
        }),
        extensions: vec!["EXT_color_buffer_float".into(), "OES_texture_float_linear".into()],
        version: Some("WebGL 2.0".into()),
        glsl_version: Some("WebGL GLSL ES 3.00".into()),
    };
    log.log_context(&gl);

    assert_eq!(
        log.entries(),
        vec![
            "Vendor: Acme",
            "Renderer: Acme GPU",
            "WebGL Version: WebGL 2.0",
            "Shading Language Version: WebGL GLSL ES 3.00",
            r#"Supported Extensions: ["EXT_color_buffer_float", "OES_texture_float_linear"]"#,
        ]
    );
}

#[test]
fn context_without_debug_renderer_info() {
    let (log, _sink) = capture();
    log.log_context(&FakeGl::default());

    assert_eq!(
        log.entries(),
        vec![
            "WEBGL_debug_renderer_info not supported",
            "WebGL Version: null",
            "Shading Language Version: null",
            "Supported Extensions: []",
        ]
    );
}

#[test]
fn log_object_dispatches_to_matching_method() {
    let gl = FakeGl::default();
    let shader = FakeShader {
        kind: VERTEX_SHADER,
        source: Some("src".into()),
        compiled: true,
        info_log: None,
    };
    let program = quad_program(true);

    let (direct, _) = capture();
    direct.log_shader(&gl, &shader);
    direct.log_program(&gl, &program);
    direct.log_context(&gl);

    let (dispatched, _) = capture();
    dispatched.log_object(&gl, GlObject::Shader(&shader));
    dispatched.log_object(&gl, GlObject::Program(&program));
    dispatched.log_object(&gl, GlObject::Context);

    assert_eq!(dispatched.entries(), direct.entries());
}

#[test]
fn log_mat_records_comma_joined_elements() {
    let (log, _sink) = capture();
    let identity: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ];
    let scaled = [0.5f32, -2.0, 0.25];
    log.log_mat([("identity", &identity[..]), ("scaled", &scaled[..])]);

    assert_eq!(
        log.entries(),
        vec!["1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1", "0.5,-2,0.25"]
    );
}
