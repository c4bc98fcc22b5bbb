// Semantic scene input.
//
// The annotated scene arrives as an ordered list of regions, each an ordered
// list of raw object annotations (category + axis-aligned bounding box). This
// is the boundary with whatever loads the scan; nothing here is validated.
// Invalid annotations are filtered later by `SpatialObject::from_raw`.

use crate::error::GraphError;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One object annotation as produced by the scene loader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawObject {
    pub category_label: String,
    pub bbox_center: Vec3,
    pub bbox_size: Vec3,
}

impl RawObject {
    pub fn new(category_label: impl Into<String>, bbox_center: Vec3, bbox_size: Vec3) -> Self {
        Self {
            category_label: category_label.into(),
            bbox_center,
            bbox_size,
        }
    }
}

/// An annotated region (a candidate room).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub objects: Vec<RawObject>,
}

/// The full semantic scene, regions in traversal order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticScene {
    pub regions: Vec<Region>,
}

impl SemanticScene {
    /// Parse a scene from JSON:
    /// `{"regions": [{"objects": [{"category_label", "bbox_center", "bbox_size"}]}]}`
    /// with vectors as `[x, y, z]` arrays.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of raw objects across all regions.
    pub fn object_count(&self) -> usize {
        self.regions.iter().map(|r| r.objects.len()).sum()
    }
}
