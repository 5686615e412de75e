//! Pipeline stages, in the order they run.
//!
//! Each stage consumes the output of the previous one and never reads back from a later
//! stage: [`contacts`] builds the contact graph, [`encode`] turns it into a binary Ising
//! payload, and [`assemble`] wraps the payload in a job descriptor.

pub mod assemble;
pub mod contacts;
pub mod encode;
