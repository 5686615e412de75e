//! # foldjob Core Library
//!
//! Converts a protein backbone structure into a sparse Ising problem, packs it into a
//! deterministic binary payload and wraps that payload in a hash-verified job descriptor
//! ready for distribution to remote workers.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`BackboneAtom`, `Contact`,
//!   `IsingProblem`, `JobDescriptor`), geometry helpers, and I/O for structure files,
//!   binary payloads and JSON job records.
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, progress reporting, and the
//!   pipeline tasks: contact graph construction, problem encoding and descriptor assembly.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures built from the engine tasks:
//!   extracting a single structure, processing a batch into a job queue, and verifying an
//!   existing descriptor.

pub mod core;
pub mod engine;
pub mod workflows;
