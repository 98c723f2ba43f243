use super::types::Extremes;
use crate::geom2::{Cloud, PointId};

/// Locate UL/UR/LL/LR in one pass. `None` for an empty set.
///
/// Comparisons are strict, so among exact ties the first id in `ids` wins for
/// all four extremes; a set of identical points yields one id four times.
pub(crate) fn find_extremes(cloud: Cloud<'_>, ids: &[PointId]) -> Option<Extremes> {
    let first = *ids.first()?;
    let mut ex = Extremes {
        ul: first,
        ur: first,
        ll: first,
        lr: first,
    };
    for &id in ids {
        let p = cloud.at(id);
        let (ul, ur, ll, lr) = (cloud.at(ex.ul), cloud.at(ex.ur), cloud.at(ex.ll), cloud.at(ex.lr));
        if p.x < ul.x || (p.x == ul.x && p.y > ul.y) {
            ex.ul = id;
        }
        if p.x < ll.x || (p.x == ll.x && p.y < ll.y) {
            ex.ll = id;
        }
        if p.x > ur.x || (p.x == ur.x && p.y > ur.y) {
            ex.ur = id;
        }
        if p.x > lr.x || (p.x == lr.x && p.y < lr.y) {
            ex.lr = id;
        }
    }
    Some(ex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn four_corners_with_vertical_ties() {
        let pts = [
            vector![0.0, 0.0],
            vector![0.0, 3.0],
            vector![5.0, 1.0],
            vector![5.0, -2.0],
            vector![2.0, 9.0],
        ];
        let cloud = Cloud::new(&pts);
        let ex = find_extremes(cloud, &cloud.ids()).unwrap();
        assert_eq!(ex.ul, PointId(1));
        assert_eq!(ex.ll, PointId(0));
        assert_eq!(ex.ur, PointId(2));
        assert_eq!(ex.lr, PointId(3));
    }

    #[test]
    fn vertical_line_collapses_pairs() {
        let pts = [vector![1.0, 0.0], vector![1.0, 4.0], vector![1.0, 2.0]];
        let cloud = Cloud::new(&pts);
        let ex = find_extremes(cloud, &cloud.ids()).unwrap();
        assert_eq!(ex.ul, ex.ur);
        assert_eq!(ex.ll, ex.lr);
        assert_eq!(ex.ul, PointId(1));
        assert_eq!(ex.ll, PointId(0));
    }

    #[test]
    fn identical_points_share_one_id() {
        let pts = [vector![2.0, 2.0]; 3];
        let cloud = Cloud::new(&pts);
        let ex = find_extremes(cloud, &cloud.ids()).unwrap();
        assert!([ex.ul, ex.ur, ex.ll, ex.lr].iter().all(|&id| id == PointId(0)));
        assert!(find_extremes(cloud, &[]).is_none());
    }
}
