use crate::core::models::job::{JobDescriptor, JobMetadata, PROBLEM_TYPE_PROTEIN_FOLDING};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

/// Where a problem came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Provenance {
    /// Data provider tag, e.g. "alphafold".
    pub source: String,
    /// Structure file as it was given to the pipeline.
    pub pdb_file: String,
    pub protein_name: String,
}

/// Lowercase hex SHA-256 of the exact payload bytes.
pub fn content_hash(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// Energy target used by consumers to judge a candidate solution: `-floor(0.8 * C)`.
///
/// This is 80% of the energy reduction available if every coupling were satisfied at unit
/// strength. It is a heuristic, not a bound the model guarantees to be reachable.
pub fn solvability_threshold(num_couplings: usize) -> i64 {
    -((num_couplings as i64 * 4) / 5)
}

/// Wraps an encoded payload into a job descriptor.
#[instrument(skip_all, name = "descriptor_assembly_task")]
pub fn run(
    payload: &[u8],
    num_nodes: usize,
    num_couplings: usize,
    provenance: Provenance,
    metadata: JobMetadata,
) -> JobDescriptor {
    let problem_hash = content_hash(payload);
    let threshold = solvability_threshold(num_couplings);
    debug!(
        "Assembled job for '{}' (hash {}, threshold {}).",
        provenance.protein_name,
        &problem_hash[..16],
        threshold
    );

    JobDescriptor {
        problem_type: PROBLEM_TYPE_PROTEIN_FOLDING.to_string(),
        source: provenance.source,
        pdb_file: provenance.pdb_file,
        protein_name: provenance.protein_name,
        num_residues: num_nodes,
        num_contacts: num_couplings,
        problem_size: num_nodes,
        problem_data: STANDARD.encode(payload),
        problem_hash,
        threshold,
        metadata,
        description: None,
        uniprot_id: None,
    }
}
