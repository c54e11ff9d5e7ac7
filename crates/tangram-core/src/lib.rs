//! Scene graph, pose blending and camera control for the tangram morph demo.
//!
//! Platform services (meshes, shader programs, the camera uniform block,
//! window input) come in through the traits in `tangram-hal`.

pub mod app;
pub mod math;
pub mod render;
pub mod scene;

pub use math::{blend, decompose, DecompositionError, Transform};
pub use scene::{SceneError, SceneGraph};
