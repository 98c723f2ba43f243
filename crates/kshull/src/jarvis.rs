//! Jarvis march (gift wrapping): O(n h) reference hull.
//!
//! Used to cross-check Kirkpatrick–Seidel in tests, benchmarks and the CLI's
//! `compare` command. Output uses the same canonical order as `Hull`.

use nalgebra::Vector2;

use crate::geom2::{cmp_xy, distance, orientation, Cloud, Orientation, PointId};
use crate::ks::close_polygon;

/// Hull vertex ids, counterclockwise from the lowest-leftmost vertex.
///
/// Duplicate coordinates are reduced to their first id before wrapping.
pub fn jarvis_march(points: &[Vector2<f64>]) -> Vec<PointId> {
    let cloud = Cloud::new(points);
    let mut ids = cloud.ids();
    ids.sort_by(|&a, &b| cmp_xy(&cloud[a], &cloud[b]));
    ids.dedup_by(|a, b| cloud[*a] == cloud[*b]);
    let Some(&first) = ids.first() else {
        return Vec::new();
    };

    // Lowest point, leftmost among ties (ids are x-sorted).
    let start = ids.iter().copied().fold(first, |best, id| {
        if cloud[id].y < cloud[best].y {
            id
        } else {
            best
        }
    });

    let mut hull = Vec::new();
    let mut on_hull = start;
    for _ in 0..=ids.len() {
        hull.push(on_hull);
        let here = cloud.at(on_hull);
        let mut next = ids[0];
        for &id in &ids {
            let o = orientation(here, cloud.at(next), cloud.at(id));
            let farther = distance(here, cloud.at(id)) > distance(here, cloud.at(next));
            if next == on_hull
                || o == Orientation::Clockwise
                || (o == Orientation::Collinear && farther)
            {
                next = id;
            }
        }
        on_hull = next;
        if on_hull == start {
            break;
        }
    }
    close_polygon(cloud, hull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn coords(points: &[Vector2<f64>], ids: &[PointId]) -> Vec<(f64, f64)> {
        ids.iter().map(|id| (points[id.0].x, points[id.0].y)).collect()
    }

    #[test]
    fn square_with_interior_point() {
        let pts = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![2.0, 2.0],
        ];
        assert_eq!(
            coords(&pts, &jarvis_march(&pts)),
            vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]
        );
    }

    #[test]
    fn collinear_boundary_points_are_skipped() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 0.0],
        ];
        assert_eq!(
            coords(&pts, &jarvis_march(&pts)),
            vec![(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn degenerate_inputs() {
        assert!(jarvis_march(&[]).is_empty());
        assert_eq!(jarvis_march(&[vector![3.0, 3.0]; 4]), vec![PointId(0)]);
        let seg = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert_eq!(coords(&seg, &jarvis_march(&seg)), vec![(0.0, 0.0), (2.0, 2.0)]);
    }
}
