//! # Workflows Module
//!
//! High-level entry points that tie the `core` and `engine` layers together.
//!
//! ## Architecture
//!
//! - **Extraction Workflow** ([`extract`]) - One structure file to one job descriptor:
//!   parse, build contacts, encode, assemble, and optionally write the descriptor file.
//! - **Batch Workflow** ([`batch`]) - Runs extraction over many structures, attaches catalog
//!   information, and collects successful descriptors into a job queue. A failing structure
//!   is recorded and does not stop the batch.
//! - **Verification Workflow** ([`verify`]) - Recomputes a descriptor's hash, decodes its
//!   payload and checks every derived field, as a downstream consumer would.

pub mod batch;
pub mod extract;
pub mod verify;
