use crate::core::models::job::JobDescriptor;
use crate::engine::config::ExtractionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::workflows::extract;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// One structure to process, with optional catalog information for the queue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub uniprot_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BatchEntry {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            uniprot_id: None,
            description: None,
        }
    }

    fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A TOML list of structures:
///
/// ```toml
/// [[structure]]
/// path = "TP53_human.pdb"
/// uniprot-id = "P04637"
/// description = "Tumor protein p53 - cancer"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchManifest {
    #[serde(default, rename = "structure")]
    pub structures: Vec<BatchEntry>,
}

impl BatchManifest {
    /// Loads a manifest. Relative structure paths are resolved against the manifest's directory.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut manifest: BatchManifest =
            toml::from_str(&content).map_err(|e| EngineError::Manifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in &mut manifest.structures {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
        Ok(manifest)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchResult {
    /// Successful descriptors, in entry order, with catalog fields attached.
    pub jobs: Vec<JobDescriptor>,
    /// Descriptor files written, index-aligned with `jobs`.
    pub written: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

/// Runs extraction over every entry and collects the results into a job queue.
///
/// Each entry is independent: its descriptor file is written next to the structure, and a
/// failure is recorded without affecting the remaining entries.
#[instrument(skip_all, name = "batch_workflow")]
pub fn run(
    entries: &[BatchEntry],
    config: &ExtractionConfig,
    reporter: &ProgressReporter,
) -> BatchResult {
    reporter.report(Progress::BatchStart {
        total: entries.len() as u64,
    });
    info!("Processing {} structure(s).", entries.len());

    let mut result = BatchResult::default();
    for entry in entries {
        let name = entry.display_name();
        reporter.report(Progress::StructureStart { name: name.clone() });

        match extract::run_to_file(&entry.path, None, config) {
            Ok(extracted) => {
                let mut job = extracted.descriptor;
                job.description = entry.description.clone();
                job.uniprot_id = entry.uniprot_id.clone();
                reporter.report(Progress::Message(format!(
                    "{}: {} contacts, threshold={}",
                    name, job.num_contacts, job.threshold
                )));
                result.jobs.push(job);
                result.written.push(extracted.output_path);
                reporter.report(Progress::StructureFinish);
            }
            Err(e) => {
                warn!("Skipping {:?}: {}", &entry.path, e);
                reporter.report(Progress::StructureFailed {
                    name,
                    reason: e.to_string(),
                });
                result.failures.push(BatchFailure {
                    path: entry.path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    reporter.report(Progress::BatchFinish);
    info!(
        "Batch complete: {} job(s) created, {} failure(s).",
        result.jobs.len(),
        result.failures.len()
    );
    result
}
