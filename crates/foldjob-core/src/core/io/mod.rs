//! Provides input/output functionality for the pipeline's file and wire formats.
//!
//! Structure files are read through the [`traits::StructureFile`] interface, with the
//! fixed-column PDB format implemented in [`pdb`]. The binary problem payload codec lives in
//! [`payload`], and JSON job descriptors and queues are read and written by [`job`].

pub mod job;
pub mod payload;
pub mod pdb;
pub mod traits;
