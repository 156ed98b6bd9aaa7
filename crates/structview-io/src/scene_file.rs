//! Scene file loading.
//!
//! Input files are JSON exports of placed building pieces:
//! an optional `default.position` and an `entities` array.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use structview_core::{SceneError, SceneModel};

#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Read and parse a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneModel, SceneFileError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SceneFileError::InputNotFound(path.to_path_buf()));
    }

    log::info!("Loading scene from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let scene = SceneModel::from_reader(reader)?;

    log::info!("Default origin: {}", scene.default_origin());
    for element in scene.elements() {
        log::debug!(
            "pref {} pos {} rot {}",
            element.shape_key(),
            element.position(),
            element.euler_rotation()
        );
    }
    Ok(scene)
}
