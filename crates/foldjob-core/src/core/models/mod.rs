//! # Core Models Module
//!
//! Data structures flowing through the structure-to-job pipeline.
//!
//! ## Key Components
//!
//! - [`atom`] - One coarse-grained atom per residue, as produced by the parser
//! - [`contact`] - A residue pair that passed the distance and sequence-separation filters
//! - [`problem`] - The sparse Ising model: coupling map plus bias vector
//! - [`job`] - The terminal job descriptor and its metadata block
//!
//! Data flows strictly forward: atoms become contacts, contacts become a problem, and the
//! encoded problem becomes a job. No model holds a reference back to an upstream stage.

pub mod atom;
pub mod contact;
pub mod job;
pub mod problem;
