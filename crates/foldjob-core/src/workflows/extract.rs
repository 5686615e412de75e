use crate::core::io::job::{JobFile, descriptor_path_for};
use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::models::atom::BackboneAtom;
use crate::core::models::job::{JobDescriptor, JobMetadata};
use crate::engine::config::ExtractionConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks;
use crate::engine::tasks::assemble::Provenance;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub descriptor: JobDescriptor,
    pub output_path: PathBuf,
}

/// Provenance for a structure file: the path as given, and its file stem as protein name.
pub fn provenance_for(input: &Path, source: &str) -> Provenance {
    let protein_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    Provenance {
        source: source.to_string(),
        pdb_file: input.display().to_string(),
        protein_name,
    }
}

/// Runs the pipeline on already parsed backbone atoms.
pub fn run_from_atoms(
    atoms: &[BackboneAtom],
    provenance: Provenance,
    config: &ExtractionConfig,
) -> Result<JobDescriptor, EngineError> {
    let contacts = tasks::contacts::run(atoms, &config.contacts);
    let encoded = tasks::encode::run(atoms, &contacts, config.encoding.max_size).map_err(
        |source| EngineError::Encoding {
            path: PathBuf::from(&provenance.pdb_file),
            source,
        },
    )?;

    let metadata = JobMetadata {
        total_residues: atoms.len(),
        total_contacts: contacts.len(),
        cutoff_angstroms: config.contacts.cutoff,
        min_sequence_separation: config.contacts.min_sequence_separation,
    };

    Ok(tasks::assemble::run(
        &encoded.payload,
        encoded.num_nodes(),
        encoded.num_couplings(),
        provenance,
        metadata,
    ))
}

/// Reads a structure file and builds its job descriptor. Nothing is written.
#[instrument(skip_all, name = "extraction_workflow", fields(input = %input.display()))]
pub fn run(input: &Path, config: &ExtractionConfig) -> Result<JobDescriptor, EngineError> {
    let atoms = PdbFile::read_from_path(input).map_err(|source| EngineError::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    info!("Found {} backbone atoms.", atoms.len());

    let descriptor = run_from_atoms(&atoms, provenance_for(input, &config.source), config)?;
    info!(
        "Built problem with {} spins and {} couplings (threshold {}).",
        descriptor.problem_size, descriptor.num_contacts, descriptor.threshold
    );
    Ok(descriptor)
}

/// Builds the descriptor and writes it to `output`, or next to the input when `output`
/// is `None`.
///
/// The file is only created once the whole pipeline has succeeded.
pub fn run_to_file(
    input: &Path,
    output: Option<&Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionResult, EngineError> {
    let descriptor = run(input, config)?;
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| descriptor_path_for(input));

    JobFile::write_to_path(&descriptor, &output_path).map_err(|source| EngineError::Output {
        path: output_path.clone(),
        source,
    })?;
    info!("Job descriptor written to {:?}", &output_path);

    Ok(ExtractionResult {
        descriptor,
        output_path,
    })
}
