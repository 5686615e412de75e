use std::path::PathBuf;
use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::job::JobFileError;
use crate::core::io::payload::EncodingError;
use crate::core::io::pdb::PdbError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse structure '{path}': {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Failed to encode problem for '{path}': {source}", path = path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: EncodingError,
    },

    #[error("Failed to write job descriptor '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: JobFileError,
    },

    #[error("Failed to read batch manifest '{path}': {reason}", path = path.display())]
    Manifest { path: PathBuf, reason: String },
}
