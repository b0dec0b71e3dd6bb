use js_sys::Float32Array;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation,
};

use crate::introspect::GlObject;
use crate::scene;
use crate::{Logger, RenderError};

/// Attribute and uniform locations looked up once after linking.
struct ProgramInfo {
    program: WebGlProgram,
    vertex_position: u32,
    vertex_color: u32,
    projection_matrix: WebGlUniformLocation,
    model_view_matrix: WebGlUniformLocation,
}

struct Buffers {
    position: WebGlBuffer,
    color: WebGlBuffer,
}

/// Sets up the quad and draws it once, recording diagnostics into `log`.
///
/// Set-up failures raise a browser alert before being returned.
pub fn start(canvas: &HtmlCanvasElement, log: &Logger) -> Result<(), JsValue> {
    setup_and_draw(canvas, log).map_err(|err| {
        warn!(%err, "quad set-up failed");
        alert(&err);
        JsValue::from(err)
    })
}

fn setup_and_draw(canvas: &HtmlCanvasElement, log: &Logger) -> Result<(), RenderError> {
    let gl: GL = canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into().ok())
        .ok_or(RenderError::ContextUnavailable)?;
    log.log_object(&gl, GlObject::Context);

    let info = init_program(&gl, log)?;
    log.log([
        ("vertexPosition", info.vertex_position),
        ("vertexColor", info.vertex_color),
    ]);

    let buffers = init_buffers(&gl)?;
    draw_scene(&gl, canvas, &info, &buffers, log);
    Ok(())
}

fn init_program(gl: &GL, log: &Logger) -> Result<ProgramInfo, RenderError> {
    let vertex = compile_shader(gl, GL::VERTEX_SHADER, scene::VERTEX_SHADER_SOURCE, log)?;
    let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, scene::FRAGMENT_SHADER_SOURCE, log)?;

    let program = gl.create_program().ok_or(RenderError::ProgramCreation)?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);
    log.log_object(gl, GlObject::Program(&program));

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        return Err(RenderError::ProgramLink(info));
    }

    Ok(ProgramInfo {
        vertex_position: attrib_location(gl, &program, "aVertexPosition")?,
        vertex_color: attrib_location(gl, &program, "aVertexColor")?,
        projection_matrix: uniform_location(gl, &program, "uProjectionMatrix")?,
        model_view_matrix: uniform_location(gl, &program, "uModelViewMatrix")?,
        program,
    })
}

fn compile_shader(
    gl: &GL,
    shader_type: u32,
    source: &str,
    log: &Logger,
) -> Result<WebGlShader, RenderError> {
    let stage = if shader_type == GL::VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };

    let shader = gl
        .create_shader(shader_type)
        .ok_or(RenderError::ShaderCreation(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    log.log_object(gl, GlObject::Shader(&shader));

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(RenderError::ShaderCompile { stage, log: info })
    }
}

fn attrib_location(gl: &GL, program: &WebGlProgram, name: &'static str) -> Result<u32, RenderError> {
    u32::try_from(gl.get_attrib_location(program, name))
        .map_err(|_| RenderError::MissingAttribute(name))
}

fn uniform_location(
    gl: &GL,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, RenderError> {
    gl.get_uniform_location(program, name)
        .ok_or(RenderError::MissingUniform(name))
}

fn upload(gl: &GL, data: &[f32]) -> Result<WebGlBuffer, RenderError> {
    let buffer = gl.create_buffer().ok_or(RenderError::BufferCreation)?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &Float32Array::from(data),
        GL::STATIC_DRAW,
    );
    Ok(buffer)
}

fn init_buffers(gl: &GL) -> Result<Buffers, RenderError> {
    Ok(Buffers {
        position: upload(gl, &scene::POSITIONS)?,
        color: upload(gl, &scene::COLORS)?,
    })
}

fn bind_attribute(gl: &GL, buffer: &WebGlBuffer, location: u32, components: i32) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(location);
}

fn draw_scene(
    gl: &GL,
    canvas: &HtmlCanvasElement,
    info: &ProgramInfo,
    buffers: &Buffers,
    log: &Logger,
) {
    gl.clear_color(1.0, 1.0, 1.0, 1.0);
    gl.clear_depth(1.0);
    gl.enable(GL::DEPTH_TEST);
    gl.depth_func(GL::LEQUAL);
    gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

    let aspect = scene::aspect_ratio(
        f64::from(canvas.client_width()),
        f64::from(canvas.client_height()),
    );
    let projection = scene::projection(aspect).to_cols_array();
    let model_view = scene::model_view().to_cols_array();
    log.log_mat([
        ("projectionMatrix", &projection[..]),
        ("modelViewMatrix", &model_view[..]),
    ]);

    bind_attribute(
        gl,
        &buffers.position,
        info.vertex_position,
        scene::POSITION_COMPONENTS,
    );
    bind_attribute(gl, &buffers.color, info.vertex_color, scene::COLOR_COMPONENTS);

    gl.use_program(Some(&info.program));
    gl.uniform_matrix4fv_with_f32_array(Some(&info.projection_matrix), false, &projection);
    gl.uniform_matrix4fv_with_f32_array(Some(&info.model_view_matrix), false, &model_view);

    gl.draw_arrays(GL::POINTS, 0, scene::VERTEX_COUNT);
}

fn alert(err: &RenderError) {
    if let Some(window) = window() {
        // Nothing left to report to if the alert itself fails.
        let _ = window.alert_with_message(&err.to_string());
    }
}
