use crate::geom2::{cmp_xy, cross, make_vector, Cloud, PointId};

/// Sort by `(x, y)` and drop same-ray duplicates relative to the anchor.
///
/// The anchor is the lowest-leftmost point. Every other point sits in the
/// closed half-plane to its right, so two vectors from the anchor with zero
/// cross product point the same way (or one is zero). The shorter one then
/// lies on the segment from the anchor to the longer one and cannot be a hull
/// vertex; it is dropped and the scan retries at the same index.
///
/// Returns `(kept, dropped)`; `kept` stays sorted.
pub(crate) fn remove_degeneracies(
    cloud: Cloud<'_>,
    ids: &[PointId],
) -> (Vec<PointId>, Vec<PointId>) {
    let mut kept = ids.to_vec();
    kept.sort_by(|&a, &b| cmp_xy(&cloud[a], &cloud[b]));
    let mut dropped = Vec::new();
    if kept.len() < 3 {
        return (kept, dropped);
    }
    let anchor = cloud.at(kept[0]);
    let mut i = 1;
    while i + 1 < kept.len() {
        let u = make_vector(anchor, cloud.at(kept[i]));
        let v = make_vector(anchor, cloud.at(kept[i + 1]));
        if cross(u, v) == 0.0 {
            let victim = if u.norm_squared() < v.norm_squared() {
                i
            } else {
                i + 1
            };
            dropped.push(kept.remove(victim));
        } else {
            i += 1;
        }
    }
    (kept, dropped)
}
