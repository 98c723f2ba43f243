use anyhow::{bail, ensure, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kshull::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner: Kirkpatrick–Seidel and Jarvis march")]
struct Cmd {
    /// Optional run label; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    Ks,
    Jarvis,
}

impl Algo {
    fn name(self) -> &'static str {
        match self {
            Algo::Ks => "ks",
            Algo::Jarvis => "jarvis",
        }
    }
}

#[derive(Args)]
struct HullArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = Algo::Ks)]
    algo: Algo,
    /// Include the phase snapshots (ks only)
    #[arg(long)]
    trace: bool,
    /// Accept fewer than three distinct points and collinear input
    #[arg(long)]
    permissive: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull and write it (plus provenance) as JSON
    Hull(HullArgs),
    /// Run both algorithms and fail if their hulls differ
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(&args, cmd.tag),
        Action::Compare { input } => compare(&input).map(|_| ()),
        Action::Report => report(cmd.tag),
    }
}

fn hull(args: &HullArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(
        algo = args.algo.name(),
        input = %args.input.display(),
        out = %args.out.display(),
        trace = args.trace,
        permissive = args.permissive,
        tag = ?tag,
        "hull"
    );
    let points = io::load_points(&args.input)?;
    let cfg = HullCfg::default();

    let doc = match args.algo {
        Algo::Ks => {
            let mut trace: Vec<Snapshot> = Vec::new();
            let hull = match (args.permissive, args.trace) {
                (true, true) => kirkpatrick_seidel_with_sink(&points, &cfg, &mut trace)?,
                (true, false) => kirkpatrick_seidel(&points, &cfg)?,
                (false, true) => {
                    let (hull, snaps) = convex_hull_traced(&points)?;
                    trace = snaps;
                    hull
                }
                (false, false) => convex_hull(&points)?,
            };
            let trace = args.trace.then_some(trace.as_slice());
            io::hull_json("ks", &points, &hull.ids, &hull.warnings, trace)
        }
        Algo::Jarvis => {
            if args.trace {
                tracing::warn!("--trace is ignored for jarvis");
            }
            let ids = jarvis_march(&points);
            ensure!(
                args.permissive || ids.len() >= 3,
                "input has no polygonal hull ({} vertices); pass --permissive to accept it",
                ids.len()
            );
            io::hull_json("jarvis", &points, &ids, &[], None)
        }
    };
    tracing::info!(
        points = points.len(),
        vertices = doc["ids"].as_array().map_or(0, Vec::len),
        "hull_done"
    );

    io::write_json(&args.out, &doc)?;
    let payload = Payload::new(
        "hull",
        json!({
            "algo": args.algo.name(),
            "input": args.input.to_string_lossy(),
            "points": points.len(),
            "trace": args.trace,
            "permissive": args.permissive,
            "eps_tie": cfg.eps_tie
        }),
        tag,
    );
    provenance::write_sidecar(&args.out, &payload)?;
    Ok(())
}

/// Vertex coordinates of both algorithms; errors when they differ.
fn compare(input: &Path) -> Result<usize> {
    tracing::info!(input = %input.display(), "compare");
    let points = io::load_points(input)?;
    let ks = kirkpatrick_seidel(&points, &HullCfg::default())?;
    let jarvis: Vec<Vec2<f64>> = jarvis_march(&points)
        .into_iter()
        .map(|id| points[id.0])
        .collect();

    let summary = json!({
        "points": points.len(),
        "ks_vertices": ks.len(),
        "jarvis_vertices": jarvis.len(),
        "warnings": ks.warnings.iter().map(io::warning_json).collect::<Vec<_>>(),
        "agree": ks.vertices == jarvis
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if ks.vertices != jarvis {
        bail!(
            "hulls differ: ks has {} vertices, jarvis has {}",
            ks.len(),
            jarvis.len()
        );
    }
    Ok(ks.len())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new("report", json!({}), tag);
    let doc = provenance::document(&payload, &[], std::panic::Location::caller());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE: &str = "[[0,0],[4,0],[4,4],[0,4],[2,2]]";

    fn args(dir: &Path, algo: Algo, trace: bool, permissive: bool) -> HullArgs {
        HullArgs {
            input: dir.join("pts.json"),
            out: dir.join("out/hull.json"),
            algo,
            trace,
            permissive,
        }
    }

    fn read(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn hull_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pts.json"), SQUARE).unwrap();
        hull(&args(dir.path(), Algo::Ks, true, false), Some("t".into())).unwrap();

        let doc = read(&dir.path().join("out/hull.json"));
        assert_eq!(doc["algo"], "ks");
        assert_eq!(doc["ids"], json!([0, 1, 2, 3]));
        assert!(!doc["trace"].as_array().unwrap().is_empty());

        let prov = read(&dir.path().join("out/hull.provenance.json"));
        assert_eq!(prov["command"], "hull");
        assert_eq!(prov["params"]["algo"], "ks");
        assert_eq!(prov["tag"], "t");
    }

    #[test]
    fn jarvis_output_matches_ks() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pts.json"), SQUARE).unwrap();
        hull(&args(dir.path(), Algo::Jarvis, false, false), None).unwrap();
        let doc = read(&dir.path().join("out/hull.json"));
        assert_eq!(doc["algo"], "jarvis");
        assert_eq!(doc["ids"], json!([0, 1, 2, 3]));
        assert!(doc.get("trace").is_none());
    }

    #[test]
    fn strict_mode_rejects_segments() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pts.json"), "[[0,0],[1,1],[2,2]]").unwrap();
        assert!(hull(&args(dir.path(), Algo::Ks, false, false), None).is_err());
        assert!(hull(&args(dir.path(), Algo::Jarvis, false, false), None).is_err());

        hull(&args(dir.path(), Algo::Ks, false, true), None).unwrap();
        let doc = read(&dir.path().join("out/hull.json"));
        assert_eq!(doc["hull"], json!([[0.0, 0.0], [2.0, 2.0]]));
    }

    #[test]
    fn compare_agrees_on_square() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.json");
        fs::write(&input, SQUARE).unwrap();
        assert_eq!(compare(&input).unwrap(), 4);
    }
}
