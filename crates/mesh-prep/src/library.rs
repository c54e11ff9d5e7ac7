use std::fs;
use std::io;
use std::path::Path;

use crate::error::MeshError;
use crate::obj_converter::load_obj;
use crate::primitives;
use crate::types::MeshData;

pub const TRIANGLE_MODEL: &str = "TriangleFix.obj";
pub const SQUARE_MODEL: &str = "Cube.obj";
pub const PARALLELOGRAM_MODEL: &str = "Para.obj";

/// The three piece shapes a tangram is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshLibrary {
    pub triangle: MeshData,
    pub square: MeshData,
    pub parallelogram: MeshData,
}

impl MeshLibrary {
    /// The flat pieces from [`primitives`]; needs no files.
    pub fn built_in() -> Self {
        Self {
            triangle: primitives::triangle(),
            square: primitives::square(),
            parallelogram: primitives::parallelogram(),
        }
    }

    /// Load `TriangleFix.obj`, `Cube.obj` and `Para.obj` from `dir`, join
    /// identical vertices and generate tangents where possible.
    ///
    /// A directory that cannot be read is an I/O error; a readable
    /// directory without one of the files is [`MeshError::MissingModel`].
    pub fn load_dir(dir: &Path) -> Result<Self, MeshError> {
        if !fs::metadata(dir)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", dir.display()),
            )
            .into());
        }
        Ok(Self {
            triangle: load_model(&dir.join(TRIANGLE_MODEL))?,
            square: load_model(&dir.join(SQUARE_MODEL))?,
            parallelogram: load_model(&dir.join(PARALLELOGRAM_MODEL))?,
        })
    }

    /// `load_dir` when a directory is given, otherwise the built-in pieces.
    pub fn load(dir: Option<&Path>) -> Result<Self, MeshError> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => {
                log::info!("no model directory given, using built-in pieces");
                Ok(Self::built_in())
            }
        }
    }

    pub fn into_array(self) -> [MeshData; 3] {
        [self.triangle, self.square, self.parallelogram]
    }
}

fn load_model(path: &Path) -> Result<MeshData, MeshError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(MeshError::MissingModel(path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(MeshError::MissingModel(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    }
    let mut mesh = load_obj(path)?;
    mesh.join_identical_vertices();
    mesh.generate_tangents();
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangram_hal::Mesh;

    const TRI: &str = "v 0 0 0\nv 1 0 0\nv 1 1 0\n\
                       vt 0 0\nvt 1 0\nvt 1 1\n\
                       vn 0 0 1\n\
                       f 1/1/1 2/2/1 3/3/1\n";

    #[test]
    fn test_built_in_has_three_valid_pieces() {
        for mesh in MeshLibrary::built_in().into_array() {
            assert!(mesh.validate().is_ok());
            assert!(!mesh.has_normals());
        }
    }

    #[test]
    fn test_load_dir_reads_all_three() {
        let dir = tempfile::tempdir().unwrap();
        for name in [TRIANGLE_MODEL, SQUARE_MODEL, PARALLELOGRAM_MODEL] {
            fs::write(dir.path().join(name), TRI).unwrap();
        }
        let library = MeshLibrary::load_dir(dir.path()).unwrap();
        assert_eq!(library.square.name, "Cube");
        assert!(library.triangle.has_tangents());
    }

    #[test]
    fn test_missing_model_is_named() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TRIANGLE_MODEL), TRI).unwrap();
        match MeshLibrary::load_dir(dir.path()) {
            Err(MeshError::MissingModel(path)) => {
                assert!(path.ends_with(SQUARE_MODEL), "{}", path.display())
            }
            other => panic!("expected MissingModel, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        match MeshLibrary::load_dir(&dir.path().join("gone")) {
            Err(MeshError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }

        let file = dir.path().join(TRIANGLE_MODEL);
        fs::write(&file, TRI).unwrap();
        assert!(matches!(MeshLibrary::load_dir(&file), Err(MeshError::Io(_))));
    }

    #[test]
    fn test_directory_in_place_of_model_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(TRIANGLE_MODEL)).unwrap();
        assert!(matches!(
            MeshLibrary::load_dir(dir.path()),
            Err(MeshError::MissingModel(_))
        ));
    }

    #[test]
    fn test_load_without_dir_is_built_in() {
        assert_eq!(MeshLibrary::load(None).unwrap(), MeshLibrary::built_in());
    }
}
