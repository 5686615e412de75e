//! # Core Module
//!
//! Fundamental data structures and stateless utilities shared by the pipeline.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Backbone atoms, contacts, the sparse Ising
//!   problem and the job descriptor record
//! - **File I/O** ([`io`]) - PDB parsing, the binary payload codec and JSON job files
//! - **Utilities** ([`utils`]) - Geometry helpers
//!
//! Nothing in this module keeps state between calls. Every function is deterministic for a
//! given input, which is what makes the payload hash usable as an integrity key.

pub mod io;
pub mod models;
pub mod utils;
