//! # Structview Core
//!
//! Vector math, Euler rotation building, and the element/scene model for
//! building-structure layouts exported as JSON.
//!
//! A scene is parsed once, sorted foundation-first, and read-only afterwards.

pub mod element;
pub mod error;
pub mod math;
pub mod scene;

pub use element::{ElementModel, OpaqueId};
pub use error::{ElementError, SceneError};
pub use math::{Matrix3, RotationBuilder, Vector3};
pub use scene::{Bounds, SceneModel};
