//! JSON input and output for hull runs.

use anyhow::{Context, Result};
use kshull::ks::{Bridge, Segment};
use kshull::{NumericWarning, PointId, Snapshot, Vec2};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// One input point: `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<RawPoint> for Vec2<f64> {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Pair([x, y]) => Vec2::new(x, y),
            RawPoint::Named { x, y } => Vec2::new(x, y),
        }
    }
}

pub fn parse_points(text: &str) -> Result<Vec<Vec2<f64>>> {
    let raw: Vec<RawPoint> = serde_json::from_str(text)
        .context("expected a JSON array of [x, y] pairs or {\"x\", \"y\"} objects")?;
    Ok(raw.into_iter().map(Vec2::from).collect())
}

pub fn load_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn ids(v: &[PointId]) -> Vec<usize> {
    v.iter().map(|id| id.0).collect()
}

fn segments(v: &[Segment]) -> Vec<[usize; 2]> {
    v.iter().map(|(p, q)| [p.0, q.0]).collect()
}

fn bridge(b: &Bridge) -> [usize; 2] {
    [b.left.0, b.right.0]
}

pub fn warning_json(w: &NumericWarning) -> Value {
    match w {
        NumericWarning::NearTie {
            chain,
            slope,
            gap,
            point,
        } => json!({
            "kind": "near-tie",
            "chain": chain.name(),
            "slope": slope,
            "gap": gap,
            "point": point.0
        }),
    }
}

/// Flat JSON object for one phase; point handles become input indices.
pub fn snapshot_json(snap: &Snapshot) -> Value {
    let mut body = match snap {
        Snapshot::Normalized { kept, dropped } => {
            json!({ "kept": ids(kept), "dropped": ids(dropped) })
        }
        Snapshot::ExtremesFound(ex) => json!({
            "ul": ex.ul.0, "ur": ex.ur.0, "ll": ex.ll.0, "lr": ex.lr.0
        }),
        Snapshot::ChainSeeded {
            pmin,
            pmax,
            candidates,
            ..
        } => json!({ "pmin": pmin.0, "pmax": pmax.0, "candidates": ids(candidates) }),
        Snapshot::MedianSplit { a, points, .. } => json!({ "a": a, "points": ids(points) }),
        Snapshot::BridgeRound {
            a,
            median_slope,
            small,
            equal,
            large,
            support,
            kept,
            ..
        } => json!({
            "a": a,
            "median_slope": median_slope,
            "small": segments(small),
            "equal": segments(equal),
            "large": segments(large),
            "support": support.map(|(p, q)| [p.0, q.0]),
            "kept": ids(kept)
        }),
        Snapshot::BridgeFound { a, bridge: b, .. } => json!({ "a": a, "bridge": bridge(b) }),
        Snapshot::Partitioned {
            bridge: b,
            left,
            right,
            ..
        } => json!({ "bridge": bridge(b), "left": ids(left), "right": ids(right) }),
        Snapshot::ChainComplete { vertices, .. } | Snapshot::HullAssembled { vertices } => {
            json!({ "vertices": ids(vertices) })
        }
    };
    body["phase"] = json!(snap.name());
    if let Some(chain) = snap.chain() {
        body["chain"] = json!(chain.name());
    }
    body
}

/// Output document of `cli hull`.
pub fn hull_json(
    algo: &str,
    points: &[Vec2<f64>],
    hull: &[PointId],
    warnings: &[NumericWarning],
    trace: Option<&[Snapshot]>,
) -> Value {
    let vertices: Vec<Vec2<f64>> = hull.iter().map(|id| points[id.0]).collect();
    let mut doc = json!({
        "algo": algo,
        "hull": vertices.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        "ids": ids(hull),
        "area": kshull::geom2::signed_area(&vertices),
        "warnings": warnings.iter().map(warning_json).collect::<Vec<_>>()
    });
    if let Some(trace) = trace {
        doc["trace"] = trace.iter().map(snapshot_json).collect();
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use kshull::convex_hull_traced;
    use tempfile::tempdir;

    #[test]
    fn parses_both_point_forms() {
        let pts = parse_points(r#"[[0, 0], {"x": 4.5, "y": -1}, [2.0, 3.0]]"#).unwrap();
        assert_eq!(
            pts,
            vec![Vec2::new(0.0, 0.0), Vec2::new(4.5, -1.0), Vec2::new(2.0, 3.0)]
        );
        assert!(parse_points("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_points(r#"[[0, 0, 1]]"#).is_err());
        assert!(parse_points(r#"{"x": 0, "y": 0}"#).is_err());
        assert!(parse_points(r#"[["a", 1]]"#).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_points(&dir.path().join("nope.json")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }

    #[test]
    fn hull_document_with_trace() {
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(2.0, 2.0),
        ];
        let (hull, trace) = convex_hull_traced(&pts).unwrap();
        let doc = hull_json("ks", &pts, &hull.ids, &hull.warnings, Some(&trace));
        assert_eq!(doc["ids"], json!([0, 1, 2, 3]));
        assert_eq!(doc["hull"][2], json!([4.0, 4.0]));
        assert_eq!(doc["area"], json!(16.0));
        let phases: Vec<&str> = doc["trace"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["phase"].as_str().unwrap())
            .collect();
        assert_eq!(phases.first(), Some(&"normalized"));
        assert_eq!(phases.last(), Some(&"hull-assembled"));
        assert_eq!(doc["trace"][0]["dropped"], json!([]));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/hull.json");
        write_json(&path, &json!({"ok": true})).unwrap();
        let back: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(back["ok"], true);
    }
}
