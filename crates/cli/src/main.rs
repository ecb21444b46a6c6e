mod pointfile;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use collinear::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Origin, Record};

#[derive(Parser)]
#[command(name = "collinear-cli")]
#[command(about = "Find maximal collinear segments in point files")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Detect segments and print them (optionally write JSON)
    Run {
        #[arg(long, default_value = "fast")]
        algo: Algo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Cross-check fast against brute force on one input
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write a seeded random point file with planted lines
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 64)]
        background: usize,
        #[arg(long, default_value_t = 4)]
        lines: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON row for one segment.
#[derive(Debug, Serialize)]
struct SegmentRow {
    p: [i32; 2],
    q: [i32; 2],
}

impl From<&LineSegment> for SegmentRow {
    fn from(s: &LineSegment) -> Self {
        Self {
            p: [s.p().x(), s.p().y()],
            q: [s.q().x(), s.q().y()],
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { algo, input, out } => {
            let segments = run(algo, &input, out.as_deref(), cmd.tag)?;
            for s in &segments {
                println!("{s}");
            }
            Ok(())
        }
        Action::Compare { input } => compare(&input),
        Action::Generate {
            seed,
            index,
            background,
            lines,
            out,
        } => generate(seed, index, background, lines, &out, cmd.tag),
        Action::Report => {
            println!(
                "{}",
                serde_json::to_string_pretty(&Record::new(cmd.tag))?
            );
            Ok(())
        }
    }
}

fn run(
    algo: Algo,
    input: &Path,
    out: Option<&Path>,
    tag: Option<String>,
) -> Result<Vec<LineSegment>> {
    tracing::info!(%algo, input = %input.display(), tag = ?tag, "run");
    let slots = pointfile::read_points(input)?;
    let detector = detect_slots(algo, Some(slots.as_slice()))
        .with_context(|| format!("invalid input {}", input.display()))?;
    let segments = detector.segments();
    tracing::info!(
        algo = detector.name(),
        points = slots.len(),
        segments = detector.number_of_segments(),
        "detected"
    );

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let rows: Vec<SegmentRow> = segments.iter().map(SegmentRow::from).collect();
        fs::write(out, serde_json::to_vec_pretty(&rows)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let origin = Origin::detect(algo, input, slots.len(), segments.len());
        write_sidecar(out, origin, tag)?;
    }
    Ok(segments)
}

fn compare(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "compare");
    let slots = pointfile::read_points(input)?;
    let fast = detect_slots(Algo::Fast, Some(slots.as_slice()))?;
    let brute = detect_slots(Algo::Brute, Some(slots.as_slice()))?;
    let f: HashSet<LineSegment> = maximal_segments(&fast.segments()).into_iter().collect();
    let b: HashSet<LineSegment> = maximal_segments(&brute.segments()).into_iter().collect();
    tracing::info!(
        fast_raw = fast.number_of_segments(),
        brute_raw = brute.number_of_segments(),
        maximal = f.len(),
        "compared"
    );
    if f != b {
        for s in f.difference(&b) {
            tracing::warn!(segment = %s, "only_fast");
        }
        for s in b.difference(&f) {
            tracing::warn!(segment = %s, "only_brute");
        }
        bail!("detectors disagree on {}", input.display());
    }
    println!("agree: {} maximal segments", f.len());
    Ok(())
}

fn generate(
    seed: u64,
    index: u64,
    background: usize,
    lines: usize,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(seed, index, background, lines, out = %out.display(), "generate");
    let cfg = SampleCfg {
        background,
        lines,
        ..SampleCfg::default()
    };
    let sample = draw_points(cfg, ReplayToken { seed, index })?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, pointfile::format_text(&sample.points))
        .with_context(|| format!("writing {}", out.display()))?;
    let origin = Origin::Sample {
        seed,
        index,
        background,
        lines,
        points: sample.points.len(),
        planted: sample.planted.iter().map(|s| s.to_string()).collect(),
    };
    write_sidecar(out, origin, tag)?;
    Ok(())
}
