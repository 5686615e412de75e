use crate::core::models::atom::BackboneAtom;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading coarse-grained backbones from structure files.
///
/// Implementors handle format-specific parsing and return one [`BackboneAtom`] per residue,
/// in chain order.
pub trait StructureFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads the backbone atoms from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the backbone atoms in record order.
    ///
    /// # Errors
    ///
    /// Returns an error if a retained record is malformed or reading fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<BackboneAtom>, Self::Error>;

    /// Reads the backbone atoms from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BackboneAtom>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
