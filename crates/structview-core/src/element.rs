use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ElementError;
use crate::math::{Matrix3, RotationBuilder, Vector3};

/// Owner and skin identifiers are carried through untouched.
pub type OpaqueId = Value;

/// Substring that marks an element as a foundation piece.
pub const FOUNDATION_MARKER: &str = "foundation";

/// Derive the shape key from a prefab path: the text after the last `/`.
pub fn shape_key_of(prefab_name: &str) -> &str {
    prefab_name
        .rsplit_once('/')
        .map_or(prefab_name, |(_, tail)| tail)
}

/// One placed structure piece.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementModel {
    owner_id: OpaqueId,
    prefab_name: String,
    shape_key: String,
    skin_id: OpaqueId,
    position: Vector3,
    euler_rotation: Vector3,
    rotation_matrix: Matrix3,
}

impl ElementModel {
    pub fn new(
        owner_id: OpaqueId,
        prefab_name: &str,
        skin_id: OpaqueId,
        position: Vector3,
        euler_rotation: Vector3,
    ) -> Self {
        Self {
            owner_id,
            prefab_name: prefab_name.to_string(),
            shape_key: shape_key_of(prefab_name).to_string(),
            skin_id,
            position,
            euler_rotation,
            rotation_matrix: RotationBuilder::from_euler(
                euler_rotation.x,
                euler_rotation.y,
                euler_rotation.z,
            ),
        }
    }

    /// Build an element from one entry of the scene's `entities` array.
    ///
    /// `ownerid`, `prefabname` and `skinid` are required; `pos` and `rot`
    /// default to zero when absent.
    pub fn from_record(index: usize, record: &Value) -> Result<Self, ElementError> {
        let fields = record.as_object().ok_or_else(|| ElementError::Invalid {
            index,
            message: "entity is not a JSON object".into(),
        })?;

        let owner_id = required(fields, index, "ownerid")?.clone();
        let prefab_name = required(fields, index, "prefabname")?
            .as_str()
            .ok_or_else(|| ElementError::Invalid {
                index,
                message: "field 'prefabname' must be a string".into(),
            })?;
        let skin_id = required(fields, index, "skinid")?.clone();
        let position = optional_vector(fields, index, "pos")?;
        let euler_rotation = optional_vector(fields, index, "rot")?;

        Ok(Self::new(
            owner_id,
            prefab_name,
            skin_id,
            position,
            euler_rotation,
        ))
    }

    pub fn owner_id(&self) -> &OpaqueId {
        &self.owner_id
    }

    pub fn prefab_name(&self) -> &str {
        &self.prefab_name
    }

    pub fn shape_key(&self) -> &str {
        &self.shape_key
    }

    pub fn skin_id(&self) -> &OpaqueId {
        &self.skin_id
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn euler_rotation(&self) -> Vector3 {
        self.euler_rotation
    }

    pub fn rotation_matrix(&self) -> &Matrix3 {
        &self.rotation_matrix
    }

    pub fn is_foundation(&self) -> bool {
        self.shape_key.contains(FOUNDATION_MARKER)
    }
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, ElementError> {
    fields
        .get(field)
        .ok_or(ElementError::MissingField { index, field })
}

fn optional_vector(
    fields: &Map<String, Value>,
    index: usize,
    field: &str,
) -> Result<Vector3, ElementError> {
    match fields.get(field) {
        None => Ok(Vector3::ZERO),
        Some(value) => {
            Vector3::deserialize(value).map_err(|e| ElementError::Invalid {
                index,
                message: format!("field '{}': {}", field, e),
            })
        }
    }
}
