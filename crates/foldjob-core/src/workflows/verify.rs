use crate::core::io::payload::{PayloadError, decode_payload};
use crate::core::models::job::JobDescriptor;
use crate::engine::tasks::assemble::{content_hash, solvability_threshold};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error, PartialEq)]
pub enum VerifyError {
    #[error("problem_data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Hash mismatch: descriptor says {expected}, payload hashes to {actual}")]
    HashMismatch { expected: String, actual: String },
    #[error("Payload could not be decoded: {0}")]
    Payload(#[from] PayloadError),
    #[error("Field '{field}' is {expected}, but the payload has {actual}")]
    CountMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Threshold is {actual}, expected {expected} for this coupling count")]
    ThresholdMismatch { expected: i64, actual: i64 },
}

/// Summary of a descriptor that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub protein_name: String,
    pub num_nodes: usize,
    pub num_couplings: usize,
    pub payload_len: usize,
}

/// Checks that a descriptor is internally consistent.
///
/// The payload must decode from base64, hash to `problem_hash`, parse as a well-formed
/// problem whose dimensions match `problem_size` and `num_contacts`, and the threshold must
/// follow from the coupling count.
#[instrument(skip_all, name = "verify_workflow", fields(protein = %descriptor.protein_name))]
pub fn verify(descriptor: &JobDescriptor) -> Result<VerificationReport, VerifyError> {
    let payload = STANDARD.decode(&descriptor.problem_data)?;

    let actual = content_hash(&payload);
    if !actual.eq_ignore_ascii_case(&descriptor.problem_hash) {
        return Err(VerifyError::HashMismatch {
            expected: descriptor.problem_hash.clone(),
            actual,
        });
    }

    let problem = decode_payload(&payload)?;

    if problem.num_nodes != descriptor.problem_size {
        return Err(VerifyError::CountMismatch {
            field: "problem_size",
            expected: descriptor.problem_size,
            actual: problem.num_nodes,
        });
    }
    if problem.num_couplings() != descriptor.num_contacts {
        return Err(VerifyError::CountMismatch {
            field: "num_contacts",
            expected: descriptor.num_contacts,
            actual: problem.num_couplings(),
        });
    }

    let expected_threshold = solvability_threshold(problem.num_couplings());
    if descriptor.threshold != expected_threshold {
        return Err(VerifyError::ThresholdMismatch {
            expected: expected_threshold,
            actual: descriptor.threshold,
        });
    }

    debug!(
        "Descriptor verified: {} nodes, {} couplings.",
        problem.num_nodes,
        problem.num_couplings()
    );
    Ok(VerificationReport {
        protein_name: descriptor.protein_name.clone(),
        num_nodes: problem.num_nodes,
        num_couplings: problem.num_couplings(),
        payload_len: payload.len(),
    })
}
