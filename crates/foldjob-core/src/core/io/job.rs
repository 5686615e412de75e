use crate::core::models::job::JobDescriptor;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix replacing the structure file's extension to name its descriptor file.
pub const DESCRIPTOR_SUFFIX: &str = "_job.json";

#[derive(Debug, Error)]
pub enum JobFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid job JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Derives the descriptor path for a structure file.
///
/// The extension is replaced by [`DESCRIPTOR_SUFFIX`] (`TP53_human.pdb` becomes
/// `TP53_human_job.json`); a path without an extension gets the suffix appended.
pub fn descriptor_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{DESCRIPTOR_SUFFIX}"))
}

/// Reads and writes job descriptors and job queues as JSON.
pub struct JobFile;

impl JobFile {
    pub fn write_to(descriptor: &JobDescriptor, writer: &mut impl Write) -> Result<(), JobFileError> {
        write_pretty(descriptor, writer)
    }

    pub fn write_to_path<P: AsRef<Path>>(
        descriptor: &JobDescriptor,
        path: P,
    ) -> Result<(), JobFileError> {
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_to(descriptor, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<JobDescriptor, JobFileError> {
        read_json(path)
    }

    /// Writes a job queue: a JSON array of descriptors.
    pub fn write_queue_to_path<P: AsRef<Path>>(
        jobs: &[JobDescriptor],
        path: P,
    ) -> Result<(), JobFileError> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_pretty(&jobs, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_queue_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<JobDescriptor>, JobFileError> {
        read_json(path)
    }
}

fn write_pretty<T: Serialize + ?Sized>(value: &T, writer: &mut impl Write) -> Result<(), JobFileError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, JobFileError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
