use foldjob::engine::config::{
    DEFAULT_CUTOFF_ANGSTROMS, DEFAULT_MIN_SEQUENCE_SEPARATION, DEFAULT_SOURCE,
};

/// Residue limit applied by the CLI unless `--no-limit` is given.
pub const DEFAULT_MAX_SIZE: usize = 100;

pub struct DefaultsConfig {
    pub cutoff: f64,
    pub min_sequence_separation: usize,
    pub max_size: usize,
    pub source: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF_ANGSTROMS,
            min_sequence_separation: DEFAULT_MIN_SEQUENCE_SEPARATION,
            max_size: DEFAULT_MAX_SIZE,
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}
