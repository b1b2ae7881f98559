//! Radar and scenario loading: command-line triples, CSV files, JSON batches.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use skyroute::api::{check_route, Point, Radar};
use std::path::Path;

/// Group flat `x y r x y r ...` values from repeated `--radar` flags.
pub fn radars_from_flat(values: &[i32]) -> Result<Vec<Radar>> {
    if values.len() % 3 != 0 {
        bail!("--radar takes exactly three values (x y r)");
    }
    values
        .chunks_exact(3)
        .map(|c| Radar::try_from((c[0], c[1], c[2])).map_err(anyhow::Error::from))
        .collect()
}

/// Read radars from a CSV with integer columns `x`, `y`, `r`.
pub fn radars_from_csv(path: &Path) -> Result<Vec<Radar>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading radar csv {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "radar_csv_loaded");
    let xs = int_column(&df, "x")?;
    let ys = int_column(&df, "y")?;
    let rs = int_column(&df, "r")?;
    xs.into_iter()
        .zip(ys)
        .zip(rs)
        .enumerate()
        .map(|(row, ((x, y), r))| {
            Radar::new(Point::new(x, y), r).with_context(|| format!("csv row {row}"))
        })
        .collect()
}

/// Integer column as `i32`; float or text columns are rejected rather than truncated.
fn int_column(df: &DataFrame, name: &str) -> Result<Vec<i32>> {
    let column = df
        .column(name)
        .with_context(|| format!("radar csv is missing column `{name}`"))?;
    if !column.dtype().is_integer() {
        bail!(
            "radar csv column `{name}` must hold integers, found {}",
            column.dtype()
        );
    }
    let series = column
        .strict_cast(&DataType::Int32)
        .with_context(|| format!("radar csv column `{name}` does not fit in i32"))?;
    let values = series.i32()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("null `{name}` in csv row {row}")))
        .collect()
}

/// One query of a batch file.
#[derive(Debug, Deserialize)]
pub struct ScenarioIn {
    pub start: (i32, i32),
    pub finish: (i32, i32),
    pub radars: Vec<(i32, i32, i32)>,
}

/// Per-scenario batch result.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Outcome {
    pub index: usize,
    pub possible: bool,
    pub start_radars: Vec<usize>,
    pub finish_radars: Vec<usize>,
}

pub fn load_scenarios(path: &Path) -> Result<Vec<ScenarioIn>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading scenarios {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Decide every scenario; an invalid radar aborts the batch with its index.
pub fn evaluate(scenarios: &[ScenarioIn]) -> Result<Vec<Outcome>> {
    scenarios
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let radars = s
                .radars
                .iter()
                .copied()
                .map(Radar::try_from)
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("scenario {index}"))?;
            let report = check_route(s.start.into(), s.finish.into(), &radars);
            Ok(Outcome {
                index,
                possible: report.possible,
                start_radars: report.start_radars.iter().map(|id| id.0).collect(),
                finish_radars: report.finish_radars.iter().map(|id| id.0).collect(),
            })
        })
        .collect()
}
