// Labeled axis-aligned bounding volumes for individual scene objects.
//
// A `SpatialObject` is built once from a `RawObject` annotation and never
// changes. Annotations centered exactly on the origin, with an all-zero size,
// or carrying an "unknown" category are placeholders from the annotation
// tool; `from_raw` refuses them so they never reach a room.

use crate::config::GraphConfig;
use crate::geometry::box_corners;
use crate::scene::RawObject;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An immutable labeled box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialObject {
    label: String,
    centroid: Vec3,
    dims: Vec3,
    corners: [Vec3; 8],
}

impl SpatialObject {
    /// Build an object from its box center and size.
    pub fn new(label: impl Into<String>, centroid: Vec3, dims: Vec3) -> Self {
        let half = dims / 2.0;
        Self {
            label: label.into(),
            centroid,
            dims,
            corners: box_corners(centroid - half, centroid + half),
        }
    }

    /// Build an object from a raw annotation, or `None` if the annotation is
    /// a placeholder (zero center, zero size, or unknown category).
    pub fn from_raw(raw: &RawObject, config: &GraphConfig) -> Option<Self> {
        if raw.bbox_center == Vec3::ZERO
            || raw.bbox_size == Vec3::ZERO
            || config.is_unknown_label(&raw.category_label)
        {
            return None;
        }
        Some(Self::new(
            raw.category_label.clone(),
            raw.bbox_center,
            raw.bbox_size,
        ))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn dims(&self) -> Vec3 {
        self.dims
    }

    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Index of the thinnest axis (0 = x, 1 = y, 2 = z). Ties go to the
    /// lower axis.
    pub fn thinnest_axis(&self) -> usize {
        self.dims.min_position()
    }
}
