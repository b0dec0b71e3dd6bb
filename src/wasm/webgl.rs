//! [`GlIntrospect`] for the browser's WebGL2 context.

use web_sys::{WebGl2RenderingContext as GL, WebGlActiveInfo, WebGlProgram, WebGlShader};

use crate::introspect::{ActiveInfo, GlIntrospect, RendererInfo};

const DEBUG_RENDERER_INFO: &str = "WEBGL_debug_renderer_info";
/// `UNMASKED_VENDOR_WEBGL` from `WEBGL_debug_renderer_info`.
const UNMASKED_VENDOR_WEBGL: u32 = 0x9245;
/// `UNMASKED_RENDERER_WEBGL` from `WEBGL_debug_renderer_info`.
const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

fn active_info(info: WebGlActiveInfo) -> ActiveInfo {
    ActiveInfo {
        name: info.name(),
        kind: info.type_(),
        size: info.size(),
    }
}

fn string_parameter(gl: &GL, pname: u32) -> Option<String> {
    gl.get_parameter(pname).ok().and_then(|v| v.as_string())
}

impl GlIntrospect for GL {
    type Program = WebGlProgram;
    type Shader = WebGlShader;

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn active_attribute_count(&self, program: &WebGlProgram) -> u32 {
        self.get_program_parameter(program, GL::ACTIVE_ATTRIBUTES)
            .as_f64()
            .unwrap_or(0.0) as u32
    }

    fn active_attribute(&self, program: &WebGlProgram, index: u32) -> Option<ActiveInfo> {
        self.get_active_attrib(program, index).map(active_info)
    }

    fn active_uniform_count(&self, program: &WebGlProgram) -> u32 {
        self.get_program_parameter(program, GL::ACTIVE_UNIFORMS)
            .as_f64()
            .unwrap_or(0.0) as u32
    }

    fn active_uniform(&self, program: &WebGlProgram, index: u32) -> Option<ActiveInfo> {
        self.get_active_uniform(program, index).map(active_info)
    }

    fn shader_type(&self, shader: &WebGlShader) -> u32 {
        self.get_shader_parameter(shader, GL::SHADER_TYPE)
            .as_f64()
            .unwrap_or(0.0) as u32
    }

    fn shader_source(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_source(shader)
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn debug_renderer_info(&self) -> Option<RendererInfo> {
        // The extension object only carries the two enum constants.
        self.get_extension(DEBUG_RENDERER_INFO).ok().flatten()?;
        Some(RendererInfo {
            vendor: string_parameter(self, UNMASKED_VENDOR_WEBGL),
            renderer: string_parameter(self, UNMASKED_RENDERER_WEBGL),
        })
    }

    fn supported_extensions(&self) -> Vec<String> {
        self.get_supported_extensions()
            .map(|list| list.iter().filter_map(|v| v.as_string()).collect())
            .unwrap_or_default()
    }

    fn version(&self) -> Option<String> {
        string_parameter(self, GL::VERSION)
    }

    fn shading_language_version(&self) -> Option<String> {
        string_parameter(self, GL::SHADING_LANGUAGE_VERSION)
    }
}
