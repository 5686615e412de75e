use crate::cli::BatchArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use foldjob::core::io::job::JobFile;
use foldjob::engine::progress::ProgressReporter;
use foldjob::workflows::batch::{self, BatchEntry, BatchManifest};
use tracing::{info, warn};

/// Manifest entries first, then positional paths.
fn collect_entries(args: &BatchArgs) -> Result<Vec<BatchEntry>> {
    let mut entries = match &args.manifest {
        Some(path) => BatchManifest::load(path)?.structures,
        None => Vec::new(),
    };
    entries.extend(args.paths.iter().cloned().map(BatchEntry::from_path));

    if entries.is_empty() {
        return Err(CliError::Argument(
            "No structures given. Pass structure files or --manifest.".to_string(),
        ));
    }
    Ok(entries)
}

pub fn run(args: BatchArgs) -> Result<()> {
    let config = build_config(&args.problem)?;
    let entries = collect_entries(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Processing {} structure(s)...", entries.len());
    let result = batch::run(&entries, &config, &reporter);

    for failure in &result.failures {
        warn!("{:?} failed: {}", &failure.path, failure.reason);
    }
    if result.jobs.is_empty() {
        return Err(CliError::Other(anyhow::anyhow!(
            "No job descriptors were created; all {} structure(s) failed.",
            result.failures.len()
        )));
    }

    JobFile::write_queue_to_path(&result.jobs, &args.queue).map_err(|e| {
        CliError::FileParsing {
            path: args.queue.clone(),
            source: e.into(),
        }
    })?;
    info!("Job queue written to {:?}", &args.queue);

    println!(
        "✓ Created {} job(s), queue written to: {}",
        result.jobs.len(),
        args.queue.display()
    );
    if !result.failures.is_empty() {
        println!("  {} structure(s) skipped:", result.failures.len());
        for failure in &result.failures {
            println!("    {}: {}", failure.path.display(), failure.reason);
        }
    }

    Ok(())
}
