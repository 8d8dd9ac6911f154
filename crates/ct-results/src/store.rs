//! Run storage API.

use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use ct_solver::{MarchResult, MarchStep};
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";
const STEPS_FILE: &str = "steps.jsonl";

#[derive(Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store under `<project dir>/.capflow/runs`.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "project path has no parent directory".to_string(),
            })?;
        let runs_dir = project_dir.join(".capflow").join("runs");
        Self::new(runs_dir)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join(MANIFEST_FILE).exists()
    }

    pub fn save_run(&self, manifest: &RunManifest, steps: &[MarchStep]) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(run_dir.join(MANIFEST_FILE), manifest_json)?;

        let mut steps_content = String::new();
        for step in steps {
            let line = serde_json::to_string(step)?;
            steps_content.push_str(&line);
            steps_content.push('\n');
        }
        fs::write(run_dir.join(STEPS_FILE), steps_content)?;

        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(run_id).join(MANIFEST_FILE);

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_steps(&self, run_id: &str) -> ResultsResult<Vec<MarchStep>> {
        let steps_path = self.run_dir(run_id).join(STEPS_FILE);

        if !steps_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(steps_path)?;
        let mut steps = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let step: MarchStep = serde_json::from_str(line)?;
                steps.push(step);
            }
        }

        Ok(steps)
    }

    /// Rebuild the full sweep result of a stored run.
    pub fn load_result(&self, run_id: &str) -> ResultsResult<(RunManifest, MarchResult)> {
        let manifest = self.load_manifest(run_id)?;
        let steps = self.load_steps(run_id)?;
        if steps.len() != manifest.step_count {
            return Err(ResultsError::Corrupt {
                run_id: run_id.to_string(),
                message: format!(
                    "manifest lists {} steps, {} found",
                    manifest.step_count,
                    steps.len()
                ),
            });
        }
        let result = MarchResult::new(manifest.inlet, steps, manifest.skipped_c.clone());
        Ok((manifest, result))
    }

    /// All stored runs, oldest first.
    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let run_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&run_id) {
                    runs.push(manifest);
                }
            }
        }

        runs.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(runs)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(run_id);
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }
}
