use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::element::ElementModel;
use crate::error::{ElementError, SceneError};
use crate::math::Vector3;

/// Axis-aligned box spanned by element placement points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector3,
    pub max: Vector3,
}

impl Bounds {
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vector3 {
        (self.max + self.min) * 0.5
    }
}

/// The parsed collection of placed elements.
///
/// Elements are held foundation-first so that walls paint over the floor
/// they stand on; otherwise input order is kept.
#[derive(Debug, Clone, Default)]
pub struct SceneModel {
    default_origin: Vector3,
    elements: Vec<ElementModel>,
    rejected: Vec<ElementError>,
}

impl SceneModel {
    pub fn new(default_origin: Vector3, mut elements: Vec<ElementModel>) -> Self {
        // Stable: ties keep their input order.
        elements.sort_by_key(|e| !e.is_foundation());
        Self {
            default_origin,
            elements,
            rejected: Vec::new(),
        }
    }

    // ── Parsing ──────────────────────────────────────────────────────

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_value(&document)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SceneError> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_value(&document)
    }

    /// Build a scene from an already-parsed document.
    ///
    /// Entities that fail to parse are skipped with a warning and kept in
    /// [`SceneModel::rejected`].
    pub fn from_value(document: &Value) -> Result<Self, SceneError> {
        let root = document
            .as_object()
            .ok_or_else(|| SceneError::MalformedScene("top level is not a JSON object".into()))?;

        let default_origin = match root.get("default").and_then(|d| d.get("position")) {
            Some(position) => Vector3::deserialize(position).map_err(|e| {
                SceneError::MalformedScene(format!("invalid default position: {}", e))
            })?,
            None => Vector3::ZERO,
        };

        let records: &[Value] = match root.get("entities") {
            Some(Value::Array(records)) => records.as_slice(),
            Some(_) => {
                return Err(SceneError::MalformedScene(
                    "'entities' is not an array".into(),
                ))
            }
            None => {
                log::warn!("Scene has no 'entities' array; rendering an empty scene");
                &[]
            }
        };

        let mut elements = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();
        for (index, record) in records.iter().enumerate() {
            match ElementModel::from_record(index, record) {
                Ok(element) => elements.push(element),
                Err(err) => {
                    log::warn!("Skipping entity: {}", err);
                    rejected.push(err);
                }
            }
        }

        log::info!(
            "Parsed {} elements ({} skipped)",
            elements.len(),
            rejected.len()
        );

        let mut scene = Self::new(default_origin, elements);
        scene.rejected = rejected;
        Ok(scene)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn default_origin(&self) -> Vector3 {
        self.default_origin
    }

    /// Elements in draw order.
    pub fn elements(&self) -> &[ElementModel] {
        &self.elements
    }

    pub fn rejected(&self) -> &[ElementError] {
        &self.rejected
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ── Bounding box ─────────────────────────────────────────────────

    /// Componentwise minimum of placement points, or the origin when empty.
    pub fn min(&self) -> Vector3 {
        self.fold_positions(Vector3::component_min)
    }

    /// Componentwise maximum of placement points, or the origin when empty.
    pub fn max(&self) -> Vector3 {
        self.fold_positions(Vector3::component_max)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min(), self.max())
    }

    fn fold_positions(&self, pick: fn(&Vector3, &Vector3) -> Vector3) -> Vector3 {
        let mut positions = self.elements.iter().map(ElementModel::position);
        match positions.next() {
            Some(first) => positions.fold(first, |acc, p| pick(&acc, &p)),
            None => Vector3::ZERO,
        }
    }
}
