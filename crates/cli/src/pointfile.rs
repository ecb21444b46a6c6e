//! Point file readers and writers.
//!
//! - Text: first integer `n`, then `n` pairs `x y` (any whitespace).
//! - CSV: header with integer `x` and `y` columns; an empty cell becomes
//!   `None`, which the detectors reject as a null point. Fractional or
//!   out-of-range cells fail the read.

use anyhow::{bail, Context, Result};
use collinear::Point;
use polars::prelude::*;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Read a point file, picking the format from the extension.
pub fn read_points(path: &Path) -> Result<Vec<Option<Point>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let pts = parse_text(&text).with_context(|| format!("parsing {}", path.display()))?;
            Ok(pts.into_iter().map(Some).collect())
        }
    }
}

/// Parse the `n` then `x y` pairs format.
pub fn parse_text(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let n: usize = match tokens.next() {
        Some(tok) => tok
            .parse()
            .with_context(|| format!("bad point count '{tok}'"))?,
        None => bail!("empty input: expected a point count"),
    };
    let mut next_coord = |what: &str, i: usize| -> Result<i32> {
        let tok = tokens
            .next()
            .with_context(|| format!("missing {what} of point {i} (expected {n} points)"))?;
        tok.parse::<i32>()
            .with_context(|| format!("bad {what} '{tok}' of point {i}"))
    };
    // `n` is untrusted; grow as pairs are actually read.
    let mut out = Vec::new();
    for i in 0..n {
        let x = next_coord("x", i)?;
        let y = next_coord("y", i)?;
        out.push(Point::new(x, y));
    }
    Ok(out)
}

/// Render points in the text format.
pub fn format_text(points: &[Point]) -> String {
    let mut s = String::with_capacity(16 * (points.len() + 1));
    let _ = writeln!(s, "{}", points.len());
    for p in points {
        let _ = writeln!(s, "{} {}", p.x(), p.y());
    }
    s
}

fn read_csv(path: &Path) -> Result<Vec<Option<Point>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = int_column(&df, "x", path)?;
    let ys = int_column(&df, "y", path)?;
    let pts: Vec<Option<Point>> = (&xs)
        .into_iter()
        .zip(&ys)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        })
        .collect();
    Ok(pts)
}

/// Coordinate column as `i32`. Fractional or out-of-range values are errors,
/// never truncated or turned into nulls.
fn int_column(df: &DataFrame, name: &str, path: &Path) -> Result<Int32Chunked> {
    let col = df
        .column(name)
        .with_context(|| format!("{}: missing column '{name}'", path.display()))?;
    if !col.dtype().is_integer() {
        bail!(
            "{}: column '{name}' must hold integers, found {}",
            path.display(),
            col.dtype()
        );
    }
    let cast = col
        .strict_cast(&DataType::Int32)
        .with_context(|| format!("{}: column '{name}' has values outside i32", path.display()))?;
    Ok(cast.i32()?.clone())
}
