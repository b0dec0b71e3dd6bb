//! GL object introspection.
//!
//! The logger never talks to a graphics API directly. It reads program,
//! shader and context state through [`GlIntrospect`] and records what it
//! finds as plain text lines in the diagnostic buffer.

use crate::logger::Logger;
use crate::value::{format_number, Value};

/// `GL_VERTEX_SHADER`
pub const VERTEX_SHADER: u32 = 0x8B31;
/// `GL_FRAGMENT_SHADER`
pub const FRAGMENT_SHADER: u32 = 0x8B30;

/// Name, GL type enum and array size of an active attribute or uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInfo {
    pub name: String,
    pub kind: u32,
    pub size: i32,
}

/// Unmasked vendor and renderer strings from `WEBGL_debug_renderer_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererInfo {
    pub vendor: Option<String>,
    pub renderer: Option<String>,
}

/// Read-only view of the graphics context that the logger needs.
pub trait GlIntrospect {
    type Program;
    type Shader;

    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn active_attribute_count(&self, program: &Self::Program) -> u32;
    fn active_attribute(&self, program: &Self::Program, index: u32) -> Option<ActiveInfo>;
    fn active_uniform_count(&self, program: &Self::Program) -> u32;
    fn active_uniform(&self, program: &Self::Program, index: u32) -> Option<ActiveInfo>;

    /// Raw `SHADER_TYPE` enum.
    fn shader_type(&self, shader: &Self::Shader) -> u32;
    fn shader_source(&self, shader: &Self::Shader) -> Option<String>;
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;

    /// `None` when the debug renderer extension is unavailable.
    fn debug_renderer_info(&self) -> Option<RendererInfo>;
    fn supported_extensions(&self) -> Vec<String>;
    fn version(&self) -> Option<String>;
    fn shading_language_version(&self) -> Option<String>;
}

/// Anything [`Logger::log_object`] knows how to describe.
pub enum GlObject<'a, G: GlIntrospect> {
    Shader(&'a G::Shader),
    Program(&'a G::Program),
    Context,
}

fn or_null(text: Option<String>) -> String {
    text.unwrap_or_else(|| "null".to_string())
}

impl Logger {
    /// Records link status and the active attribute/uniform tables of
    /// `program`. A failed link's info log goes straight to the sink's
    /// error channel.
    pub fn log_program<G: GlIntrospect>(&self, gl: &G, program: &G::Program) {
        let linked = gl.program_link_status(program);
        self.cache_log(format!("Program Link Status: {linked}"));
        if !linked {
            let info = or_null(gl.program_info_log(program));
            self.report_error(&format!("Program Info Log:\n{info}"));
        }

        let attributes = gl.active_attribute_count(program);
        self.cache_log(format!("Number of Active Attributes: {attributes}"));
        for i in 0..attributes {
            self.cache_log(describe_active("Attribute", i, gl.active_attribute(program, i)));
        }

        let uniforms = gl.active_uniform_count(program);
        self.cache_log(format!("Number of Active Uniforms: {uniforms}"));
        for i in 0..uniforms {
            self.cache_log(describe_active("Uniform", i, gl.active_uniform(program, i)));
        }
    }

    /// Records stage, source and compile status of `shader`, plus the info
    /// log when compilation failed.
    pub fn log_shader<G: GlIntrospect>(&self, gl: &G, shader: &G::Shader) {
        let stage = if gl.shader_type(shader) == VERTEX_SHADER {
            "VERTEX_SHADER"
        } else {
            "FRAGMENT_SHADER"
        };
        let source = or_null(gl.shader_source(shader));
        let compiled = gl.shader_compile_status(shader);

        self.cache_log(format!("Shader Type: {stage}"));
        self.cache_log(format!("Shader Source:\n{source}"));
        self.cache_log(format!("Compile Status: {compiled}"));
        if !compiled {
            let info = or_null(gl.shader_info_log(shader));
            self.cache_log(format!("Shader Info Log:\n{info}"));
        }
    }

    /// Records vendor/renderer strings (when exposed), version strings and
    /// the supported extension list.
    pub fn log_context<G: GlIntrospect>(&self, gl: &G) {
        match gl.debug_renderer_info() {
            Some(info) => {
                self.cache_log(format!("Vendor: {}", or_null(info.vendor)));
                self.cache_log(format!("Renderer: {}", or_null(info.renderer)));
            }
            None => self.cache_log("WEBGL_debug_renderer_info not supported"),
        }

        self.cache_log(format!("WebGL Version: {}", or_null(gl.version())));
        self.cache_log(format!(
            "Shading Language Version: {}",
            or_null(gl.shading_language_version())
        ));

        let extensions = Value::from(gl.supported_extensions());
        self.cache_log(format!("Supported Extensions: {}", self.stringify(&extensions)));
    }

    pub fn log_object<G: GlIntrospect>(&self, gl: &G, object: GlObject<'_, G>) {
        match object {
            GlObject::Shader(shader) => self.log_shader(gl, shader),
            GlObject::Program(program) => self.log_program(gl, program),
            GlObject::Context => self.log_context(gl),
        }
    }

    /// Records each matrix as its comma-joined elements. Labels are dropped,
    /// as with [`Logger::log`].
    pub fn log_mat<'m, L, I>(&self, pairs: I)
    where
        I: IntoIterator<Item = (L, &'m [f32])>,
    {
        for (_label, mat) in pairs {
            let text = mat
                .iter()
                .map(|&x| format_number(f64::from(x)))
                .collect::<Vec<_>>()
                .join(",");
            self.cache_log(text);
        }
    }
}

fn describe_active(kind: &str, index: u32, info: Option<ActiveInfo>) -> String {
    match info {
        Some(info) => format!(
            "{kind} {index}: Name: {}, Type: {}, Size: {}",
            info.name, info.kind, info.size
        ),
        None => format!("{kind} {index}: unavailable"),
    }
}
