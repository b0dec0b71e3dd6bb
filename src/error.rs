//! Errors raised while setting up the quad scene.

use thiserror::Error;

/// Renderer set-up failures. The logger itself never fails.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("unable to initialize WebGL; your browser or machine may not support it")]
    ContextUnavailable,

    #[error("unable to create {0} shader")]
    ShaderCreation(&'static str),

    #[error("unable to create shader program")]
    ProgramCreation,

    #[error("an error occurred compiling the {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("unable to initialize the shader program: {0}")]
    ProgramLink(String),

    #[error("unable to create vertex buffer")]
    BufferCreation,

    #[error("attribute not found in program: {0}")]
    MissingAttribute(&'static str),

    #[error("uniform not found in program: {0}")]
    MissingUniform(&'static str),
}

#[cfg(target_arch = "wasm32")]
impl From<RenderError> for wasm_bindgen::JsValue {
    fn from(err: RenderError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
