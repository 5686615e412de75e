//! # Engine Module
//!
//! Implements the structure-to-problem pipeline: the stages that turn parsed backbone atoms
//! into a contact graph, an encoded Ising payload and finally a job descriptor.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Contact filters, problem size limit and provenance settings
//! - **Pipeline Stages** ([`tasks`]) - Contact graph, problem encoding and descriptor assembly
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping every stage
//!
//! Stages run single-threaded and hold no state between invocations. For identical input and
//! configuration, every stage produces identical output.

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
