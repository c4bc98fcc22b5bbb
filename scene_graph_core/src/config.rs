// Data-driven construction parameters.
//
// Every tunable used by graph construction lives in `GraphConfig`, loaded
// from JSON or taken from `Default`. The defaults are empirical values that
// work on annotated indoor scans; none of them is derived from first
// principles, so they are kept as named fields rather than inlined.
//
// See also: `room.rs` which reads `ContainmentBand` for point-in-room tests,
// `graph.rs` which reads everything else.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// Vertical tolerance of the room containment test.
///
/// A point is inside a room vertically when
/// `centroid.y - dims.y - below_floor_margin <= y <= centroid.y + above_centroid`.
/// The band is biased downward: floor-level samples sit well below the
/// centroid (room geometry comes from object centroids, not the floor), while
/// the cap above keeps rooms on the storey above from matching.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainmentBand {
    pub above_centroid: f32,
    pub below_floor_margin: f32,
}

impl Default for ContainmentBand {
    fn default() -> Self {
        Self {
            above_centroid: 1.0,
            below_floor_margin: 0.5,
        }
    }
}

/// Top-level construction config. Never mutated during construction.
/// Fields missing from a JSON file take their default values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Objects further than `factor * std_dev` from the room's mean centroid
    /// on any axis are dropped as mis-assigned.
    pub outlier_std_dev_factor: f32,

    /// Every room dimension must exceed this (in scene units, meters) for the
    /// room to be kept.
    pub min_room_dimension: f32,

    /// Vertical band for point-in-room tests.
    pub containment: ContainmentBand,

    /// Category labels that mark an unannotated object. Compared
    /// case-insensitively.
    pub unknown_labels: Vec<String>,

    /// Category label of objects that are treated as doorways.
    pub door_label: String,

    /// Distance past the door frame (away from the room) of the exterior probe.
    pub door_exterior_offset: f32,

    /// Distance before the door frame (into the room) of the interior probe.
    pub door_interior_offset: f32,

    /// Midpoint-insertion passes applied to direct room-to-room paths.
    pub direct_interpolation_passes: u32,

    /// Midpoint-insertion passes applied to each leg of a door-mediated path.
    pub door_interpolation_passes: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            outlier_std_dev_factor: 2.5,
            min_room_dimension: 0.1,
            containment: ContainmentBand::default(),
            unknown_labels: vec!["unknown".to_string()],
            door_label: "door frame".to_string(),
            door_exterior_offset: 0.75,
            door_interior_offset: 1.0,
            direct_interpolation_passes: 2,
            door_interpolation_passes: 1,
        }
    }
}

impl GraphConfig {
    /// Parse a config from a JSON string and check value ranges.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let config: GraphConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make construction meaningless.
    pub fn validate(&self) -> Result<(), GraphError> {
        // NaN fails every check below.
        let positive = |v: f32| v > 0.0;
        let non_negative = |v: f32| v >= 0.0;

        if !positive(self.outlier_std_dev_factor) {
            return Err(GraphError::InvalidConfig(format!(
                "outlier_std_dev_factor must be positive, got {}",
                self.outlier_std_dev_factor
            )));
        }
        if !non_negative(self.min_room_dimension) {
            return Err(GraphError::InvalidConfig(format!(
                "min_room_dimension must be non-negative, got {}",
                self.min_room_dimension
            )));
        }
        let band = self.containment;
        if !non_negative(band.above_centroid) || !non_negative(band.below_floor_margin) {
            return Err(GraphError::InvalidConfig(format!(
                "containment margins must be non-negative, got {band:?}"
            )));
        }
        if !positive(self.door_exterior_offset) || !positive(self.door_interior_offset) {
            return Err(GraphError::InvalidConfig(format!(
                "door probe offsets must be positive, got {} / {}",
                self.door_exterior_offset, self.door_interior_offset
            )));
        }
        Ok(())
    }

    /// Whether `label` names an unannotated object.
    pub fn is_unknown_label(&self, label: &str) -> bool {
        self.unknown_labels
            .iter()
            .any(|u| u.eq_ignore_ascii_case(label))
    }
}
