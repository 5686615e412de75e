use crate::cli::ExtractArgs;
use crate::config::build_config;
use crate::error::Result;
use foldjob::workflows;
use tracing::info;

pub fn run(args: ExtractArgs) -> Result<()> {
    let config = build_config(&args.problem)?;

    info!("Extracting Ising problem from {:?}", &args.input);
    let result = workflows::extract::run_to_file(&args.input, args.output.as_deref(), &config)?;
    let job = &result.descriptor;

    println!("✓ Job descriptor written to: {}", result.output_path.display());
    if job.problem_size < job.metadata.total_residues {
        println!(
            "  Residues: {} (truncated from {})",
            job.problem_size, job.metadata.total_residues
        );
    } else {
        println!("  Residues: {}", job.problem_size);
    }
    println!("  Contacts: {}", job.num_contacts);
    println!("  Threshold: {}", job.threshold);
    println!("  Hash: {}", job.problem_hash);

    Ok(())
}
