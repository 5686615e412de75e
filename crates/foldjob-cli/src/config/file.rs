use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileContactsConfig {
    pub cutoff: Option<f64>,
    pub min_sequence_separation: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileEncodingConfig {
    pub max_size: Option<usize>,
    pub no_limit: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileJobConfig {
    pub source: Option<String>,
}

/// On-disk configuration. Every section and key is optional.
///
/// ```toml
/// [contacts]
/// cutoff = 8.0
/// min-sequence-separation = 3
///
/// [encoding]
/// max-size = 128
///
/// [job]
/// source = "alphafold"
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub contacts: Option<FileContactsConfig>,
    pub encoding: Option<FileEncodingConfig>,
    pub job: Option<FileJobConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
