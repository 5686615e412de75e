use crate::core::io::payload::MAX_NODE_INDEX;
use thiserror::Error;

pub const DEFAULT_CUTOFF_ANGSTROMS: f64 = 8.0;
pub const DEFAULT_MIN_SEQUENCE_SEPARATION: usize = 3;
pub const DEFAULT_SOURCE: &str = "alphafold";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Filters applied when deriving contacts from backbone atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    /// Pairs at or beyond this distance (Angstroms) are not in contact.
    pub cutoff: f64,
    /// Minimum index distance along the chain for a pair to be considered.
    pub min_sequence_separation: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF_ANGSTROMS,
            min_sequence_separation: DEFAULT_MIN_SEQUENCE_SEPARATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncodingConfig {
    /// Prefix length to keep when the structure has more residues. `None` keeps all.
    pub max_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    pub contacts: ContactConfig,
    pub encoding: EncodingConfig,
    /// Provenance tag recorded in every descriptor.
    pub source: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            contacts: ContactConfig::default(),
            encoding: EncodingConfig::default(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

#[derive(Default)]
pub struct ExtractionConfigBuilder {
    cutoff: Option<f64>,
    min_sequence_separation: Option<usize>,
    max_size: Option<usize>,
    source: Option<String>,
}

impl ExtractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn min_sequence_separation(mut self, separation: usize) -> Self {
        self.min_sequence_separation = Some(separation);
        self
    }
    pub fn max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        let cutoff = self.cutoff.unwrap_or(DEFAULT_CUTOFF_ANGSTROMS);
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "cutoff",
                reason: format!("must be a positive finite distance, got {}", cutoff),
            });
        }

        let min_sequence_separation = self
            .min_sequence_separation
            .unwrap_or(DEFAULT_MIN_SEQUENCE_SEPARATION);
        if min_sequence_separation == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "min_sequence_separation",
                reason: "must be at least 1 so that no residue contacts itself".to_string(),
            });
        }
        if min_sequence_separation > MAX_NODE_INDEX {
            return Err(ConfigError::InvalidParameter {
                name: "min_sequence_separation",
                reason: format!(
                    "must be at most {}, got {}",
                    MAX_NODE_INDEX, min_sequence_separation
                ),
            });
        }

        if self.max_size == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_size",
                reason: "must be greater than zero when set".to_string(),
            });
        }

        let source = self.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        if source.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "source",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(ExtractionConfig {
            contacts: ContactConfig {
                cutoff,
                min_sequence_separation,
            },
            encoding: EncodingConfig {
                max_size: self.max_size,
            },
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_overrides_matches_default() {
        let config = ExtractionConfigBuilder::new().build().unwrap();
        assert_eq!(config, ExtractionConfig::default());
        assert_eq!(config.contacts.cutoff, 8.0);
        assert_eq!(config.contacts.min_sequence_separation, 3);
        assert_eq!(config.encoding.max_size, None);
        assert_eq!(config.source, "alphafold");
    }

    #[test]
    fn builder_applies_every_override() {
        let config = ExtractionConfigBuilder::new()
            .cutoff(10.5)
            .min_sequence_separation(5)
            .max_size(Some(128))
            .source("pdb")
            .build()
            .unwrap();
        assert_eq!(config.contacts.cutoff, 10.5);
        assert_eq!(config.contacts.min_sequence_separation, 5);
        assert_eq!(config.encoding.max_size, Some(128));
        assert_eq!(config.source, "pdb");
    }

    #[test]
    fn builder_rejects_non_positive_or_non_finite_cutoff() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ExtractionConfigBuilder::new().cutoff(bad).build().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidParameter { name: "cutoff", .. }
            ));
        }
    }

    #[test]
    fn builder_rejects_separation_no_encodable_chain_can_span() {
        for bad in [MAX_NODE_INDEX + 1, usize::MAX] {
            let err = ExtractionConfigBuilder::new()
                .min_sequence_separation(bad)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidParameter {
                    name: "min_sequence_separation",
                    ..
                }
            ));
        }
        let config = ExtractionConfigBuilder::new()
            .min_sequence_separation(MAX_NODE_INDEX)
            .build()
            .unwrap();
        assert_eq!(config.contacts.min_sequence_separation, MAX_NODE_INDEX);
    }

    #[test]
    fn builder_rejects_zero_separation_zero_size_and_blank_source() {
        assert!(
            ExtractionConfigBuilder::new()
                .min_sequence_separation(0)
                .build()
                .is_err()
        );
        assert!(ExtractionConfigBuilder::new().max_size(Some(0)).build().is_err());
        assert!(ExtractionConfigBuilder::new().source("  ").build().is_err());
    }
}
