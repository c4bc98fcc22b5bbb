// Small geometric helpers used by objects, rooms, and the graph builder.
//
// Everything here is a pure function over `glam::Vec3` slices: box corner
// generation, centroid extents, component-wise statistics, path length, and
// path densification (`linear_interpolation`).

use glam::Vec3;

/// The 8 vertices of the axis-aligned box spanned by `min` and `max`.
///
/// Bottom face first (y = min.y), then the top face, each wound
/// (min.x, min.z) → (max.x, min.z) → (max.x, max.z) → (min.x, max.z).
pub fn box_corners(min: Vec3, max: Vec3) -> [Vec3; 8] {
    [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ]
}

/// Component-wise min and max of a point set. `None` for an empty set.
pub fn extents(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
    )
}

/// Component-wise mean and population standard deviation of a point set.
/// `None` for an empty set.
pub fn mean_and_std_dev(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f32;
    let mean = points.iter().copied().sum::<Vec3>() / n;
    let variance = points
        .iter()
        .map(|&p| {
            let d = p - mean;
            d * d
        })
        .sum::<Vec3>()
        / n;
    Some((mean, variance.map(f32::sqrt)))
}

/// Total length of a polyline: sum of consecutive Euclidean distances.
pub fn path_length(path: &[Vec3]) -> f32 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Insert the midpoint between every consecutive pair of points.
///
/// `n >= 2` points become `2n - 1`; the originals sit at even indices in
/// their original order. Empty and single-point inputs come back unchanged.
pub fn linear_interpolation(points: &[Vec3]) -> Vec<Vec3> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(points.len() * 2 - 1);
    for w in points.windows(2) {
        out.push(w[0]);
        out.push((w[0] + w[1]) / 2.0);
    }
    out.push(last);
    out
}

/// Apply `linear_interpolation` `passes` times.
pub fn densify(points: &[Vec3], passes: u32) -> Vec<Vec3> {
    let mut out = points.to_vec();
    for _ in 0..passes {
        out = linear_interpolation(&out);
    }
    out
}
