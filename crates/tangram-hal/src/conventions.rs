//! Attribute, uniform and block names shared by every shader program.

pub const POSITION_ATTRIBUTE: &str = "inPosition";
pub const NORMAL_ATTRIBUTE: &str = "inNormal";
pub const TEXCOORD_ATTRIBUTE: &str = "inTexcoord";
pub const TANGENT_ATTRIBUTE: &str = "inTangent";

/// Vertex attribute locations. Mesh uploads use the same numbering.
pub const POSITION_LOCATION: u32 = 0;
pub const NORMAL_LOCATION: u32 = 1;
pub const TEXCOORD_LOCATION: u32 = 2;
pub const TANGENT_LOCATION: u32 = 3;

pub const MODEL_MATRIX_UNIFORM: &str = "ModelMatrix";
pub const COLOR_UNIFORM: &str = "meshColor";

/// Uniform block holding the view and projection matrices.
pub const CAMERA_BLOCK: &str = "Camera";
pub const CAMERA_BLOCK_BINDING: u32 = 0;
