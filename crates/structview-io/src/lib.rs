//! # Structview I/O
//!
//! Reads scene JSON files and writes rendered previews as PNG.
//! File handles are scoped to each call and released on every exit path.

pub mod preview;
pub mod scene_file;

pub use preview::{encode_png, write_png, PreviewWriteError};
pub use scene_file::{load_scene, SceneFileError};
