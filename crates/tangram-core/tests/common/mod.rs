//! Recording mocks for the platform traits.
//!
//! Every mock shares one call log so tests can assert on the exact order
//! of binds, uniform uploads and draw calls.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use tangram_core::scene::{CameraConfig, CameraController, MorphConfig, MorphState, SceneGraph};
use tangram_hal::{Camera, Mesh, ShaderFactory, ShaderProgram, UniformHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Bind(u32),
    Unbind(u32),
    SetMat4 { program: u32, value: Mat4 },
    SetVec3 { program: u32, value: Vec3 },
    Draw(String),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Labels of meshes drawn, in order.
pub fn drawn(log: &CallLog) -> Vec<String> {
    log.borrow()
        .iter()
        .filter_map(|call| match call {
            Call::Draw(label) => Some(label.clone()),
            _ => None,
        })
        .collect()
}

/// Every mat4 upload, in order. The scene uploads exactly one (the model
/// matrix) per drawn node.
pub fn model_matrices(log: &CallLog) -> Vec<Mat4> {
    log.borrow()
        .iter()
        .filter_map(|call| match call {
            Call::SetMat4 { value, .. } => Some(*value),
            _ => None,
        })
        .collect()
}

pub fn colors(log: &CallLog) -> Vec<Vec3> {
    log.borrow()
        .iter()
        .filter_map(|call| match call {
            Call::SetVec3 { value, .. } => Some(*value),
            _ => None,
        })
        .collect()
}

pub struct RecordingMesh {
    pub label: String,
    pub normals: bool,
    pub texcoords: bool,
    pub tangents: bool,
    log: CallLog,
}

impl RecordingMesh {
    pub fn new(label: &str, log: &CallLog) -> Self {
        Self {
            label: label.to_string(),
            normals: false,
            texcoords: false,
            tangents: false,
            log: log.clone(),
        }
    }
}

impl Mesh for RecordingMesh {
    fn has_normals(&self) -> bool {
        self.normals
    }

    fn has_texcoords(&self) -> bool {
        self.texcoords
    }

    fn has_tangents(&self) -> bool {
        self.tangents
    }

    fn draw(&self) {
        self.log.borrow_mut().push(Call::Draw(self.label.clone()));
    }
}

#[derive(Debug)]
pub struct MockError;

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockError")
    }
}

#[derive(Debug)]
pub struct RecordingProgram {
    pub id: u32,
    pub attributes: Vec<(String, u32)>,
    pub uniforms: Vec<String>,
    pub blocks: Vec<(String, u32)>,
    pub created: bool,
    fail_create: bool,
    log: CallLog,
}

impl ShaderProgram for RecordingProgram {
    type Error = MockError;

    fn add_attribute(&mut self, name: &str, location: u32) {
        self.attributes.push((name.to_string(), location));
    }

    fn add_uniform(&mut self, name: &str) -> UniformHandle {
        self.uniforms.push(name.to_string());
        UniformHandle(self.uniforms.len() as u32 - 1)
    }

    fn add_uniform_block(&mut self, name: &str, binding_point: u32) {
        self.blocks.push((name.to_string(), binding_point));
    }

    fn create(&mut self) -> Result<(), MockError> {
        if self.fail_create {
            return Err(MockError);
        }
        self.created = true;
        Ok(())
    }

    fn bind(&mut self) {
        self.log.borrow_mut().push(Call::Bind(self.id));
    }

    fn unbind(&mut self) {
        self.log.borrow_mut().push(Call::Unbind(self.id));
    }

    fn set_uniform_mat4(&mut self, _handle: UniformHandle, value: &Mat4) {
        self.log.borrow_mut().push(Call::SetMat4 {
            program: self.id,
            value: *value,
        });
    }

    fn set_uniform_vec3(&mut self, _handle: UniformHandle, value: Vec3) {
        self.log.borrow_mut().push(Call::SetVec3 {
            program: self.id,
            value,
        });
    }
}

/// Hands out programs with increasing ids. Programs whose id is listed in
/// `fail_ids` fail to create.
pub struct RecordingFactory {
    pub created: u32,
    pub fail_ids: Vec<u32>,
    log: CallLog,
}

impl RecordingFactory {
    pub fn new(log: &CallLog) -> Self {
        Self {
            created: 0,
            fail_ids: Vec::new(),
            log: log.clone(),
        }
    }
}

impl ShaderFactory for RecordingFactory {
    type Program = RecordingProgram;

    fn new_program(&mut self) -> RecordingProgram {
        let id = self.created;
        self.created += 1;
        RecordingProgram {
            id,
            attributes: Vec::new(),
            uniforms: Vec::new(),
            blocks: Vec::new(),
            created: false,
            fail_create: self.fail_ids.contains(&id),
            log: self.log.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingCamera {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_sets: usize,
    pub projection_sets: usize,
}

impl Camera for RecordingCamera {
    fn set_view_matrix(&mut self, view: Mat4) {
        self.view = view;
        self.view_sets += 1;
    }

    fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection = projection;
        self.projection_sets += 1;
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection
    }
}

pub type TestGraph = SceneGraph<RecordingProgram, RecordingCamera>;

pub fn new_graph() -> TestGraph {
    SceneGraph::new(
        CameraController::new(RecordingCamera::default(), CameraConfig::default()),
        MorphState::new(MorphConfig::default()),
    )
}

pub fn assert_mat4_near(actual: &Mat4, expected: &Mat4, what: &str) {
    assert!(
        actual.abs_diff_eq(*expected, 1e-4),
        "{what}: expected {expected:?}, got {actual:?}"
    );
}
