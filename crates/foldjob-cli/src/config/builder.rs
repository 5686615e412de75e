use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileEncodingConfig};
use crate::cli::ProblemArgs;
use crate::error::{CliError, Result};
use foldjob::engine::config::{ExtractionConfig, ExtractionConfigBuilder};
use tracing::debug;

pub fn build_config(args: &ProblemArgs) -> Result<ExtractionConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let contacts_file = file_config.contacts.take().unwrap_or_default();
    let cutoff = args
        .cutoff
        .or(contacts_file.cutoff)
        .unwrap_or(defaults.cutoff);
    let min_sequence_separation = args
        .min_sequence_separation
        .or(contacts_file.min_sequence_separation)
        .unwrap_or(defaults.min_sequence_separation);

    let encoding_file = file_config.encoding.take().unwrap_or_default();
    let max_size = merge_max_size(args, &encoding_file, &defaults);

    let source = args
        .source
        .clone()
        .or(file_config.job.take().and_then(|job| job.source))
        .unwrap_or(defaults.source);

    debug!(
        "Resolved configuration: cutoff={}, min-sequence-separation={}, max-size={:?}, source={}",
        cutoff, min_sequence_separation, max_size, source
    );

    ExtractionConfigBuilder::new()
        .cutoff(cutoff)
        .min_sequence_separation(min_sequence_separation)
        .max_size(max_size)
        .source(source)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn merge_max_size(
    args: &ProblemArgs,
    file_val: &FileEncodingConfig,
    defaults: &DefaultsConfig,
) -> Option<usize> {
    if args.no_limit {
        return None;
    }
    if let Some(limit) = args.max_size {
        return Some(limit);
    }
    if file_val.no_limit.unwrap_or(false) {
        return None;
    }
    Some(file_val.max_size.unwrap_or(defaults.max_size))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "contacts.cutoff" => {
                config.contacts.get_or_insert_with(Default::default).cutoff =
                    Some(parse_value(key, value_str, "float")?);
            }
            "contacts.min-sequence-separation" => {
                config
                    .contacts
                    .get_or_insert_with(Default::default)
                    .min_sequence_separation = Some(parse_value(key, value_str, "integer")?);
            }
            "encoding.max-size" => {
                config.encoding.get_or_insert_with(Default::default).max_size =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "encoding.no-limit" => {
                config.encoding.get_or_insert_with(Default::default).no_limit =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "job.source" => {
                config.job.get_or_insert_with(Default::default).source =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_config(dir: &std::path::Path, content: &str) -> PathBuf {
        let path = dir.join("foldjob.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let cfg = build_config(&ProblemArgs::default()).expect("build ok");
        let defaults = DefaultsConfig::default();

        assert_eq!(cfg.contacts.cutoff, defaults.cutoff);
        assert_eq!(
            cfg.contacts.min_sequence_separation,
            defaults.min_sequence_separation
        );
        assert_eq!(cfg.encoding.max_size, Some(100));
        assert_eq!(cfg.source, "alphafold");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [contacts]
            cutoff = 6.5
            min-sequence-separation = 5

            [encoding]
            max-size = 128

            [job]
            source = "pdb"
            "#,
        );
        let args = ProblemArgs {
            config: Some(path),
            ..Default::default()
        };

        let cfg = build_config(&args).expect("build ok");

        assert_eq!(cfg.contacts.cutoff, 6.5);
        assert_eq!(cfg.contacts.min_sequence_separation, 5);
        assert_eq!(cfg.encoding.max_size, Some(128));
        assert_eq!(cfg.source, "pdb");
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[contacts]\ncutoff = 6.5\n[encoding]\nmax-size = 128\n",
        );
        let args = ProblemArgs {
            config: Some(path),
            cutoff: Some(9.0),
            max_size: Some(64),
            source: Some("esmfold".to_string()),
            ..Default::default()
        };

        let cfg = build_config(&args).expect("build ok");

        assert_eq!(cfg.contacts.cutoff, 9.0);
        assert_eq!(cfg.encoding.max_size, Some(64));
        assert_eq!(cfg.source, "esmfold");
    }

    #[test]
    fn set_values_override_file_but_not_flags() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[contacts]\ncutoff = 6.5\n");
        let args = ProblemArgs {
            config: Some(path),
            min_sequence_separation: Some(6),
            set_values: vec![
                "contacts.cutoff=7.25".to_string(),
                "contacts.min-sequence-separation=2".to_string(),
                "encoding.max-size=50".to_string(),
                "job.source=manual".to_string(),
            ],
            ..Default::default()
        };

        let cfg = build_config(&args).expect("build ok");

        assert!((cfg.contacts.cutoff - 7.25).abs() < 1e-12);
        assert_eq!(cfg.contacts.min_sequence_separation, 6);
        assert_eq!(cfg.encoding.max_size, Some(50));
        assert_eq!(cfg.source, "manual");
    }

    #[test]
    fn no_limit_removes_the_size_cap() {
        let args = ProblemArgs {
            no_limit: true,
            ..Default::default()
        };
        assert_eq!(build_config(&args).unwrap().encoding.max_size, None);

        let args = ProblemArgs {
            set_values: vec!["encoding.no-limit=true".to_string()],
            ..Default::default()
        };
        assert_eq!(build_config(&args).unwrap().encoding.max_size, None);
    }

    #[test]
    fn malformed_and_unknown_set_values_are_rejected() {
        for bad in ["contacts.cutoff", "contacts.cutoff=wide", "forcefield.s-factor=1.1"] {
            let args = ProblemArgs {
                set_values: vec![bad.to_string()],
                ..Default::default()
            };
            assert!(
                matches!(build_config(&args), Err(CliError::Config(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_values_fail_core_validation() {
        let args = ProblemArgs {
            cutoff: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        let args = ProblemArgs {
            max_size: Some(0),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        let args = ProblemArgs {
            min_sequence_separation: Some(usize::MAX),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }
}
