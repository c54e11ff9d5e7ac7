#![no_std]

//! Platform abstraction traits for tangram-morph hosts.
//!
//! The scene core never talks to a graphics API or a window system
//! directly. Everything it needs from the outside world goes through the
//! traits in this crate, so a GL window, a headless recorder and a test
//! mock can all drive the same scene.

pub mod conventions;
mod input;

pub use input::{ButtonAction, InputEvent, Key, KeyAction, PointerButton};

use glam::{Mat4, Vec3};

/// GPU-resident geometry owned by a registry outside the scene core.
pub trait Mesh {
    /// True if the mesh carries per-vertex normals.
    fn has_normals(&self) -> bool;

    /// True if the mesh carries texture coordinates.
    fn has_texcoords(&self) -> bool;

    /// True if the mesh carries tangents and bitangents.
    fn has_tangents(&self) -> bool;

    /// Issue the draw call for this mesh's geometry.
    fn draw(&self);
}

/// Opaque handle to a uniform registered on a [`ShaderProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformHandle(pub u32);

/// A linked vertex + fragment shader program.
///
/// Attributes, uniforms and uniform blocks are declared before
/// [`create`](ShaderProgram::create); after a successful `create` the
/// program can be bound and fed uniform values.
pub trait ShaderProgram {
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Bind a named vertex attribute to a fixed location.
    fn add_attribute(&mut self, name: &str, location: u32);

    /// Declare a uniform. The returned handle stays valid after `create`.
    fn add_uniform(&mut self, name: &str) -> UniformHandle;

    /// Bind a named uniform block to a binding point.
    fn add_uniform_block(&mut self, name: &str, binding_point: u32);

    /// Compile and link the program.
    fn create(&mut self) -> Result<(), Self::Error>;

    fn bind(&mut self);

    fn unbind(&mut self);

    fn set_uniform_mat4(&mut self, handle: UniformHandle, value: &Mat4);

    fn set_uniform_vec3(&mut self, handle: UniformHandle, value: Vec3);
}

/// Produces fresh, not-yet-created shader programs with the platform's
/// vertex and fragment stages already attached.
pub trait ShaderFactory {
    type Program: ShaderProgram;

    fn new_program(&mut self) -> Self::Program;
}

/// The camera uniform block shared by every shader program.
pub trait Camera {
    fn set_view_matrix(&mut self, view: Mat4);

    fn set_projection_matrix(&mut self, projection: Mat4);

    fn view_matrix(&self) -> Mat4;

    fn projection_matrix(&self) -> Mat4;
}

/// Callback set an engine drives. The engine holds exactly one
/// implementation, chosen at startup.
pub trait App {
    /// Called once after the graphics context exists.
    fn init(&mut self);

    /// Render one frame. `elapsed` is seconds since the previous frame.
    fn display_frame(&mut self, elapsed: f64);

    fn resize(&mut self, width: u32, height: u32);

    fn key(&mut self, key: Key, action: KeyAction);

    /// Pointer position in window pixels.
    fn pointer_move(&mut self, x: f64, y: f64);

    fn pointer_button(&mut self, button: PointerButton, action: ButtonAction, x: f64, y: f64);

    fn scroll(&mut self, dx: f64, dy: f64);

    /// Called once before the graphics context is torn down.
    fn close(&mut self);
}
