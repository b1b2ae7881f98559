//! Provenance sidecar for batch runs: which build decided which input, and the tallies.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::input::Outcome;

/// Contents of `<results-stem>.provenance.json`.
#[derive(Debug, Serialize)]
pub struct RunProvenance {
    pub code_rev: String,
    pub skyroute_version: &'static str,
    pub input: String,
    pub scenarios: usize,
    pub possible: usize,
    pub impossible: usize,
    pub outputs: Vec<String>,
}

impl RunProvenance {
    pub fn from_outcomes(input: &Path, outcomes: &[Outcome], results: &Path) -> Self {
        let possible = outcomes.iter().filter(|o| o.possible).count();
        Self {
            code_rev: code_rev(),
            skyroute_version: skyroute::VERSION,
            input: input.display().to_string(),
            scenarios: outcomes.len(),
            possible,
            impossible: outcomes.len() - possible,
            outputs: vec![results.display().to_string()],
        }
    }
}

/// `runs/results.json` → `runs/results.provenance.json`.
pub fn sidecar_path(results: &Path) -> PathBuf {
    let stem = results
        .file_stem()
        .map_or_else(|| "results".to_string(), |s| s.to_string_lossy().into_owned());
    results.with_file_name(format!("{stem}.provenance.json"))
}

/// Write the sidecar next to `results`; the results' directory must exist.
pub fn write_sidecar(results: &Path, prov: &RunProvenance) -> Result<PathBuf> {
    let path = sidecar_path(results);
    let bytes = serde_json::to_vec_pretty(prov)?;
    std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` baked in at build time, else taken from the environment, else "unknown".
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn outcome(index: usize, possible: bool) -> Outcome {
        Outcome {
            index,
            possible,
            start_radars: vec![],
            finish_radars: vec![],
        }
    }

    #[test]
    fn sidecar_sits_next_to_results() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/runs/results.json")),
            Path::new("/tmp/runs/results.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("batch")),
            Path::new("batch.provenance.json")
        );
    }

    #[test]
    fn tallies_come_from_outcomes() {
        let outcomes = [outcome(0, true), outcome(1, false), outcome(2, true)];
        let prov = RunProvenance::from_outcomes(
            Path::new("in/scenarios.json"),
            &outcomes,
            Path::new("out/results.json"),
        );
        assert_eq!(prov.scenarios, 3);
        assert_eq!(prov.possible, 2);
        assert_eq!(prov.impossible, 1);
        assert_eq!(prov.outputs, vec!["out/results.json".to_string()]);
    }

    #[test]
    fn sidecar_round_trips_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let results = dir.path().join("results.json");
        let prov =
            RunProvenance::from_outcomes(Path::new("s.json"), &[outcome(0, false)], &results);
        let path = write_sidecar(&results, &prov).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["scenarios"], 1);
        assert_eq!(parsed["impossible"], 1);
        assert_eq!(parsed["input"], "s.json");
        assert_eq!(parsed["skyroute_version"], skyroute::VERSION);
    }
}
