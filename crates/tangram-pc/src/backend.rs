//! Recording platform backends for headless runs.
//!
//! Nothing reaches a GPU. Meshes, shader programs and the camera block
//! count what they are asked to do so a run can be summarized, and
//! programs check their declarations the way a linker would.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use mesh_prep::MeshData;
use tangram_hal::conventions::*;
use tangram_hal::{Camera, Mesh, ShaderFactory, ShaderProgram, UniformHandle};

/// Running totals for one headless session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendCounters {
    pub draws: u64,
    pub triangles: u64,
    pub binds: u64,
    pub matrix_uploads: u64,
    pub color_uploads: u64,
    pub programs_linked: u64,
    pub view_updates: u64,
    pub projection_updates: u64,
}

pub type SharedCounters = Rc<RefCell<BackendCounters>>;

pub fn new_counters() -> SharedCounters {
    Rc::new(RefCell::new(BackendCounters::default()))
}

/// CPU mesh data standing in for uploaded geometry.
pub struct HeadlessMesh {
    data: MeshData,
    counters: SharedCounters,
}

impl HeadlessMesh {
    pub fn new(data: MeshData, counters: &SharedCounters) -> Self {
        Self {
            data,
            counters: counters.clone(),
        }
    }
}

impl Mesh for HeadlessMesh {
    fn has_normals(&self) -> bool {
        self.data.has_normals()
    }

    fn has_texcoords(&self) -> bool {
        self.data.has_texcoords()
    }

    fn has_tangents(&self) -> bool {
        self.data.has_tangents()
    }

    fn draw(&self) {
        let mut counters = self.counters.borrow_mut();
        counters.draws += 1;
        counters.triangles += self.data.triangle_count() as u64;
        log::trace!("draw '{}'", self.data.name);
    }
}

/// Program link failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// A name the vertex or fragment stage needs was never declared.
    MissingDeclaration(&'static str),
    /// Two attributes share a location.
    Conflict(String),
    AlreadyLinked,
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::MissingDeclaration(name) => write!(f, "'{name}' was never declared"),
            ProgramError::Conflict(what) => write!(f, "conflicting declarations: {what}"),
            ProgramError::AlreadyLinked => write!(f, "program is already linked"),
        }
    }
}

pub struct HeadlessProgram {
    id: u32,
    attributes: Vec<(String, u32)>,
    uniforms: Vec<String>,
    blocks: Vec<(String, u32)>,
    linked: bool,
    counters: SharedCounters,
}

impl HeadlessProgram {
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    fn check(&self) -> Result<(), ProgramError> {
        let has_position = self
            .attributes
            .iter()
            .any(|(name, loc)| name == POSITION_ATTRIBUTE && *loc == POSITION_LOCATION);
        if !has_position {
            return Err(ProgramError::MissingDeclaration(POSITION_ATTRIBUTE));
        }
        if !self.uniforms.iter().any(|name| name == MODEL_MATRIX_UNIFORM) {
            return Err(ProgramError::MissingDeclaration(MODEL_MATRIX_UNIFORM));
        }
        if !self.blocks.iter().any(|(name, _)| name == CAMERA_BLOCK) {
            return Err(ProgramError::MissingDeclaration(CAMERA_BLOCK));
        }

        for (i, (name, location)) in self.attributes.iter().enumerate() {
            if let Some((other, _)) = self.attributes[i + 1..]
                .iter()
                .find(|(_, l)| l == location)
            {
                return Err(ProgramError::Conflict(format!(
                    "'{name}' and '{other}' both use location {location}"
                )));
            }
        }
        Ok(())
    }
}

impl ShaderProgram for HeadlessProgram {
    type Error = ProgramError;

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

    fn create(&mut self) -> Result<(), ProgramError> {
        if self.linked {
            return Err(ProgramError::AlreadyLinked);
        }
        self.check()?;
        self.linked = true;
        self.counters.borrow_mut().programs_linked += 1;
        log::debug!(
            "program {} linked: {} attributes, uniforms {:?}",
            self.id,
            self.attributes.len(),
            self.uniforms
        );
        Ok(())
    }

    fn bind(&mut self) {
        if !self.is_linked() {
            log::warn!("binding program {} before it was linked", self.id);
        }
        self.counters.borrow_mut().binds += 1;
    }

    fn unbind(&mut self) {}

    fn set_uniform_mat4(&mut self, _handle: UniformHandle, _value: &Mat4) {
        self.counters.borrow_mut().matrix_uploads += 1;
    }

    fn set_uniform_vec3(&mut self, _handle: UniformHandle, _value: Vec3) {
        self.counters.borrow_mut().color_uploads += 1;
    }
}

pub struct HeadlessShaderFactory {
    next_id: u32,
    counters: SharedCounters,
}

impl HeadlessShaderFactory {
    pub fn new(counters: &SharedCounters) -> Self {
        Self {
            next_id: 0,
            counters: counters.clone(),
        }
    }
}

impl ShaderFactory for HeadlessShaderFactory {
    type Program = HeadlessProgram;

    fn new_program(&mut self) -> HeadlessProgram {
        let id = self.next_id;
        self.next_id += 1;
        HeadlessProgram {
            id,
            attributes: Vec::new(),
            uniforms: Vec::new(),
            blocks: Vec::new(),
            linked: false,
            counters: self.counters.clone(),
        }
    }
}

/// The camera uniform block, kept in memory.
pub struct HeadlessCamera {
    view: Mat4,
    projection: Mat4,
    counters: SharedCounters,
}

impl HeadlessCamera {
    pub fn new(counters: &SharedCounters) -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            counters: counters.clone(),
        }
    }
}

impl Camera for HeadlessCamera {
    fn set_view_matrix(&mut self, view: Mat4) {
        self.view = view;
        self.counters.borrow_mut().view_updates += 1;
    }

    fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection = projection;
        self.counters.borrow_mut().projection_updates += 1;
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection
    }
}
