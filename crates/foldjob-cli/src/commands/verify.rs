use crate::cli::VerifyArgs;
use crate::error::{CliError, Result};
use foldjob::core::models::job::JobDescriptor;
use foldjob::workflows::verify;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// A descriptor file holds one object, a queue file holds an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorDocument {
    Queue(Vec<JobDescriptor>),
    Single(Box<JobDescriptor>),
}

fn load_descriptors(path: &Path) -> Result<Vec<JobDescriptor>> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    let document: DescriptorDocument =
        serde_json::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::anyhow!("not a job descriptor or job queue ({})", e),
        })?;
    Ok(match document {
        DescriptorDocument::Queue(jobs) => jobs,
        DescriptorDocument::Single(job) => vec![*job],
    })
}

pub fn run(args: VerifyArgs) -> Result<()> {
    let jobs = load_descriptors(&args.path)?;
    info!("Verifying {} descriptor(s) from {:?}", jobs.len(), &args.path);

    let mut failed = 0usize;
    for job in &jobs {
        match verify::verify(job) {
            Ok(report) => println!(
                "✓ {}: {} nodes, {} couplings, {} bytes",
                report.protein_name, report.num_nodes, report.num_couplings, report.payload_len
            ),
            Err(e) => {
                failed += 1;
                warn!("Descriptor for '{}' failed verification: {}", job.protein_name, e);
                println!("✗ {}: {}", job.protein_name, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Verification(format!(
            "{} of {} descriptor(s) are inconsistent",
            failed,
            jobs.len()
        )));
    }
    Ok(())
}
