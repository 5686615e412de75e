use serde::{Deserialize, Serialize};

/// Problem type tag carried by every protein-derived job.
pub const PROBLEM_TYPE_PROTEIN_FOLDING: &str = "protein_folding";

/// Pre-truncation totals and the filter parameters a job was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Backbone atoms found in the structure before truncation.
    pub total_residues: usize,
    /// Contacts found before truncation.
    pub total_contacts: usize,
    pub cutoff_angstroms: f64,
    pub min_sequence_separation: usize,
}

/// A self-describing, hash-verified optimization problem ready for distribution.
///
/// Field names are part of the job-queue interchange format and must not be renamed.
/// A descriptor is assembled once per input structure and never mutated afterwards,
/// apart from the optional catalog fields the batch workflow attaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub problem_type: String,
    pub source: String,
    pub pdb_file: String,
    pub protein_name: String,
    pub num_residues: usize,
    pub num_contacts: usize,
    pub problem_size: usize,
    /// Standard base64 encoding of the binary payload.
    pub problem_data: String,
    /// Lowercase hex SHA-256 of the binary payload.
    pub problem_hash: String,
    pub threshold: i64,
    pub metadata: JobMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniprot_id: Option<String>,
}
