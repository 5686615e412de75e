//! Binary wire format of an Ising problem.
//!
//! All values are little-endian and fixed-width:
//!
//! ```text
//! u32 N                      node count
//! u32 C                      coupling count
//! C x (u16 i, u16 j, f32 J)  couplings, in coupling-map order
//! N x f32 h                  bias fields
//! ```
//!
//! Node indices travel as `u16`, so a problem may have at most [`MAX_NODES`] nodes.

use crate::core::models::problem::{CouplingMap, IsingProblem};
use thiserror::Error;

pub const HEADER_LEN: usize = 8;
pub const COUPLING_RECORD_LEN: usize = 8;
pub const BIAS_RECORD_LEN: usize = 4;

/// Largest node index the wire format can carry.
pub const MAX_NODE_INDEX: usize = u16::MAX as usize;
/// Largest node count accepted by the encoder.
pub const MAX_NODES: usize = MAX_NODE_INDEX;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Problem has {num_nodes} nodes, but the payload format allows at most 65535")]
    NodeCountOverflow { num_nodes: usize },
    #[error("Node index {index} does not fit in a 16-bit payload field")]
    IndexOverflow { index: usize },
    #[error("Coupling references node {index}, but the problem only has {num_nodes} nodes")]
    IndexOutOfRange { index: usize, num_nodes: usize },
    #[error("Problem has {count} couplings, which does not fit in the 32-bit header field")]
    CouplingCountOverflow { count: usize },
    #[error("Bias vector has {len} entries for a problem of {num_nodes} nodes")]
    BiasLengthMismatch { len: usize, num_nodes: usize },
    #[error("Node {index} is coupled to itself")]
    SelfCoupling { index: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Payload truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("Payload has {extra} unexpected trailing bytes")]
    TrailingBytes { extra: usize },
    #[error("Coupling {record} references node {index}, but the payload declares {num_nodes} nodes")]
    IndexOutOfRange {
        record: usize,
        index: usize,
        num_nodes: usize,
    },
    #[error("Coupling {record} has pair ({i}, {j}); the first index must be smaller")]
    NonCanonicalPair { record: usize, i: usize, j: usize },
    #[error("Coupling {record} repeats pair ({i}, {j})")]
    DuplicatePair { record: usize, i: usize, j: usize },
}

/// Exact payload size for a problem of the given dimensions.
pub fn payload_len(num_nodes: usize, num_couplings: usize) -> usize {
    HEADER_LEN + num_couplings * COUPLING_RECORD_LEN + num_nodes * BIAS_RECORD_LEN
}

fn validate(problem: &IsingProblem) -> Result<(), EncodingError> {
    let num_nodes = problem.num_nodes;
    if num_nodes > MAX_NODES {
        return Err(EncodingError::NodeCountOverflow { num_nodes });
    }
    if problem.biases.len() != num_nodes {
        return Err(EncodingError::BiasLengthMismatch {
            len: problem.biases.len(),
            num_nodes,
        });
    }
    let count = problem.num_couplings();
    if u32::try_from(count).is_err() {
        return Err(EncodingError::CouplingCountOverflow { count });
    }
    if let Some(c) = problem.couplings.iter().find(|c| c.i == c.j) {
        return Err(EncodingError::SelfCoupling { index: c.i });
    }
    if let Some(index) = problem.couplings.max_index() {
        if index > MAX_NODE_INDEX {
            return Err(EncodingError::IndexOverflow { index });
        }
        if index >= num_nodes {
            return Err(EncodingError::IndexOutOfRange { index, num_nodes });
        }
    }
    Ok(())
}

/// Serializes a problem into its binary payload.
///
/// Every size and index constraint of the format is checked before the first byte is
/// produced, so a failed call never yields a partial payload.
pub fn encode_payload(problem: &IsingProblem) -> Result<Vec<u8>, EncodingError> {
    validate(problem)?;

    let mut buf = Vec::with_capacity(payload_len(problem.num_nodes, problem.num_couplings()));
    buf.extend_from_slice(&(problem.num_nodes as u32).to_le_bytes());
    buf.extend_from_slice(&(problem.num_couplings() as u32).to_le_bytes());

    for coupling in &problem.couplings {
        buf.extend_from_slice(&(coupling.i as u16).to_le_bytes());
        buf.extend_from_slice(&(coupling.j as u16).to_le_bytes());
        buf.extend_from_slice(&coupling.strength.to_le_bytes());
    }
    for bias in &problem.biases {
        buf.extend_from_slice(&bias.to_le_bytes());
    }
    Ok(buf)
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_bits(read_u32(bytes, offset))
}

/// Parses a binary payload back into a problem.
///
/// Floats are reconstructed from their exact bit patterns. The payload length must match
/// the header exactly, and every record must carry a distinct pair with `i < j`, which is
/// the only form [`encode_payload`] produces. Decoding therefore yields exactly the header's
/// coupling count, in record order.
pub fn decode_payload(bytes: &[u8]) -> Result<IsingProblem, PayloadError> {
    if bytes.len() < HEADER_LEN {
        return Err(PayloadError::Truncated {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    let num_nodes = read_u32(bytes, 0) as usize;
    let num_couplings = read_u32(bytes, 4) as usize;

    let expected = payload_len(num_nodes, num_couplings);
    if bytes.len() < expected {
        return Err(PayloadError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }
    if bytes.len() > expected {
        return Err(PayloadError::TrailingBytes {
            extra: bytes.len() - expected,
        });
    }

    let mut couplings = CouplingMap::with_capacity(num_couplings);
    let mut offset = HEADER_LEN;
    for record in 0..num_couplings {
        let i = read_u16(bytes, offset) as usize;
        let j = read_u16(bytes, offset + 2) as usize;
        let strength = read_f32(bytes, offset + 4);
        if let Some(index) = [i, j].into_iter().find(|&idx| idx >= num_nodes) {
            return Err(PayloadError::IndexOutOfRange {
                record,
                index,
                num_nodes,
            });
        }
        if i >= j {
            return Err(PayloadError::NonCanonicalPair { record, i, j });
        }
        if couplings.insert(i, j, strength).is_some() {
            return Err(PayloadError::DuplicatePair { record, i, j });
        }
        offset += COUPLING_RECORD_LEN;
    }

    let biases = (0..num_nodes)
        .map(|n| read_f32(bytes, offset + n * BIAS_RECORD_LEN))
        .collect();

    Ok(IsingProblem {
        num_nodes,
        couplings,
        biases,
    })
}
