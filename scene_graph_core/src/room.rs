// Rooms: clusters of scene objects with a derived bounding volume.
//
// A room's box spans the min/max of its member *centroids*, not the member
// boxes. One oversized annotation (a rug, a wall-length cabinet) therefore
// can't stretch the room across a doorway into its neighbor.
//
// Construction (`Room::new`) refuses empty object lists and boxes that are
// degenerate on any axis. The only mutation after construction is
// `filter_outliers`, which drops mis-assigned objects and recomputes the box,
// and the externally supplied label.
//
// See also: `object.rs` for `SpatialObject`, `config.rs` for
// `ContainmentBand`, `graph.rs` which owns the room list.

use crate::config::ContainmentBand;
use crate::geometry::{box_corners, extents, mean_and_std_dev};
use crate::object::SpatialObject;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A room built from its member objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    label: Option<String>,
    objects: Vec<SpatialObject>,
    centroid: Vec3,
    dims: Vec3,
    corners: [Vec3; 8],
}

impl Room {
    /// Build a room from its objects. Returns `None` if `objects` is empty or
    /// any dimension of the centroid box is `<= min_dimension`.
    pub fn new(objects: Vec<SpatialObject>, min_dimension: f32) -> Option<Self> {
        let (lo, hi) = centroid_extents(&objects)?;
        let room = Self {
            label: None,
            objects,
            centroid: (lo + hi) / 2.0,
            dims: hi - lo,
            corners: box_corners(lo, hi),
        };
        room.has_volume(min_dimension).then_some(room)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn objects(&self) -> &[SpatialObject] {
        &self.objects
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

    /// Labels of the member objects, in member order.
    pub fn object_labels(&self) -> Vec<&str> {
        self.objects.iter().map(SpatialObject::label).collect()
    }

    /// Whether every dimension exceeds `min_dimension`.
    pub fn has_volume(&self, min_dimension: f32) -> bool {
        self.dims.cmpgt(Vec3::splat(min_dimension)).all()
    }

    /// The point used to anchor this room on the navmesh: the centroid
    /// lowered by half the room height.
    pub fn floor_point(&self) -> Vec3 {
        self.centroid - Vec3::new(0.0, self.dims.y / 2.0, 0.0)
    }

    /// Point-in-room test.
    ///
    /// Horizontally the point must lie inside the box's x/z rectangle (edges
    /// inclusive). Vertically it must lie in
    /// `[centroid.y - dims.y - band.below_floor_margin, centroid.y + band.above_centroid]`.
    pub fn contains_point(&self, point: Vec3, band: &ContainmentBand) -> bool {
        let lo = self.corners[0];
        let hi = self.corners[6];
        let y_min = self.centroid.y - self.dims.y - band.below_floor_margin;
        let y_max = self.centroid.y + band.above_centroid;
        (lo.x..=hi.x).contains(&point.x)
            && (lo.z..=hi.z).contains(&point.z)
            && (y_min..=y_max).contains(&point.y)
    }

    /// Drop objects whose centroid deviates from the mean member centroid by
    /// more than `factor` standard deviations on any axis, then recompute
    /// the box from the survivors. Returns how many objects were removed.
    ///
    /// An object sitting exactly on the mean is never removed, so a
    /// single-object room is left untouched and the room can't end up empty.
    pub fn filter_outliers(&mut self, factor: f32) -> usize {
        debug_assert!(
            !self.objects.is_empty(),
            "room reached outlier filtering with no objects"
        );
        let centroids: Vec<Vec3> = self.objects.iter().map(SpatialObject::centroid).collect();
        let Some((mean, std_dev)) = mean_and_std_dev(&centroids) else {
            return 0;
        };
        let limit = std_dev * factor;

        let before = self.objects.len();
        self.objects
            .retain(|obj| !(obj.centroid() - mean).abs().cmpgt(limit).any());
        let removed = before - self.objects.len();
        if removed > 0 {
            self.recompute_bounds();
        }
        removed
    }

    fn recompute_bounds(&mut self) {
        if let Some((lo, hi)) = centroid_extents(&self.objects) {
            self.centroid = (lo + hi) / 2.0;
            self.dims = hi - lo;
            self.corners = box_corners(lo, hi);
        }
    }
}

fn centroid_extents(objects: &[SpatialObject]) -> Option<(Vec3, Vec3)> {
    let centroids: Vec<Vec3> = objects.iter().map(SpatialObject::centroid).collect();
    extents(&centroids)
}
