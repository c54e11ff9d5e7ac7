//! Transform math on top of glam.

pub mod blend;
pub mod transform;

pub use blend::{blend, decompose, Decomposed, DecompositionError};
pub use transform::Transform;
