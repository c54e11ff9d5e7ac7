//! Per-node shader program setup.

use glam::{Mat4, Vec3};
use tangram_hal::conventions::*;
use tangram_hal::{Mesh, ShaderFactory, ShaderProgram, UniformHandle};

/// A created shader program plus the uniform handles a node uploads every
/// frame.
#[derive(Debug)]
pub struct NodeShader<P> {
    program: P,
    model_matrix: UniformHandle,
    color: Option<UniformHandle>,
}

impl<P: ShaderProgram> NodeShader<P> {
    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn model_matrix_uniform(&self) -> UniformHandle {
        self.model_matrix
    }

    pub fn color_uniform(&self) -> Option<UniformHandle> {
        self.color
    }

    /// Bind, upload the model matrix (and color if the node has one), run
    /// `draw`, unbind.
    pub fn render(&mut self, world: &Mat4, color: Option<Vec3>, draw: impl FnOnce()) {
        self.program.bind();
        self.program.set_uniform_mat4(self.model_matrix, world);
        if let (Some(handle), Some(color)) = (self.color, color) {
            self.program.set_uniform_vec3(handle, color);
        }
        draw();
        self.program.unbind();
    }
}

/// Build a program that reads exactly the attributes `mesh` provides.
///
/// Position is always bound; normals, texture coordinates and tangents
/// only when the mesh carries them. A color uniform is declared only for
/// nodes that have a color.
pub fn build_node_shader<F, M>(
    factory: &mut F,
    mesh: &M,
    with_color: bool,
) -> Result<NodeShader<F::Program>, <F::Program as ShaderProgram>::Error>
where
    F: ShaderFactory,
    M: Mesh + ?Sized,
{
    let mut program = factory.new_program();

    program.add_attribute(POSITION_ATTRIBUTE, POSITION_LOCATION);
    if mesh.has_normals() {
        program.add_attribute(NORMAL_ATTRIBUTE, NORMAL_LOCATION);
    }
    if mesh.has_texcoords() {
        program.add_attribute(TEXCOORD_ATTRIBUTE, TEXCOORD_LOCATION);
    }
    if mesh.has_tangents() {
        program.add_attribute(TANGENT_ATTRIBUTE, TANGENT_LOCATION);
    }

    let color = with_color.then(|| program.add_uniform(COLOR_UNIFORM));
    let model_matrix = program.add_uniform(MODEL_MATRIX_UNIFORM);
    program.add_uniform_block(CAMERA_BLOCK, CAMERA_BLOCK_BINDING);
    program.create()?;

    Ok(NodeShader {
        program,
        model_matrix,
        color,
    })
}
