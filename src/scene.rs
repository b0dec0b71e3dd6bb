//! The tutorial scene: one quad drawn as four colored points.
//!
//! Everything here is plain data and matrix set-up so it can be checked
//! without a GL context; `wasm::render` feeds it to WebGL.

use glam::{Mat4, Vec3};

pub const VERTEX_SHADER_SOURCE: &str = r#"
    attribute vec4 aVertexPosition;
    attribute vec4 aVertexColor;
    uniform mat4 uModelViewMatrix;
    uniform mat4 uProjectionMatrix;
    varying lowp vec4 vColor;
    void main(void) {
        gl_PointSize = 5.0;
        gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
        vColor = aVertexColor;
    }
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"
    varying lowp vec4 vColor;
    void main(void) {
        gl_FragColor = vColor;
    }
"#;

/// xyz per vertex.
pub const POSITION_COMPONENTS: i32 = 3;
/// rgba per vertex.
pub const COLOR_COMPONENTS: i32 = 4;
pub const VERTEX_COUNT: i32 = 4;

#[rustfmt::skip]
pub const POSITIONS: [f32; 12] = [
     1.0,  1.0, 0.0,
    -1.0,  1.0, 0.0,
     1.0, -1.0, 0.0,
    -1.0, -1.0, 0.0,
];

#[rustfmt::skip]
pub const COLORS: [f32; 16] = [
    0.0, 0.0, 0.0, 1.0,
    0.0, 0.0, 0.0, 1.0,
    0.0, 0.0, 0.0, 1.0,
    0.0, 0.0, 0.0, 1.0,
];

pub const FIELD_OF_VIEW_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 6.0;
pub const ROTATION_DEG: f32 = 45.0;

/// Width over height, falling back to square for a collapsed canvas.
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        1.0
    } else {
        (width / height) as f32
    }
}

/// GL-style perspective projection for the given aspect ratio.
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FIELD_OF_VIEW_DEG.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Pushes the quad back from the camera and turns it about z.
pub fn model_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE))
        * Mat4::from_rotation_z(ROTATION_DEG.to_radians())
}
