use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{BACKBONE_MARKER, BackboneAtom};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const ATOM_RECORD: &str = "ATOM";

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: &'static str },
}

/// Byte range of a fixed-width field, with its 1-based column label for diagnostics.
struct Field {
    start: usize,
    end: usize,
    columns: &'static str,
}

const ATOM_NAME: Field = Field { start: 12, end: 16, columns: "13-16" };
const RESIDUE_NAME: Field = Field { start: 17, end: 20, columns: "18-20" };
const RESIDUE_SEQ: Field = Field { start: 22, end: 26, columns: "23-26" };
const COORD_X: Field = Field { start: 30, end: 38, columns: "31-38" };
const COORD_Y: Field = Field { start: 38, end: 46, columns: "39-46" };
const COORD_Z: Field = Field { start: 46, end: 54, columns: "47-54" };

fn slice_and_trim<'a>(line: &'a str, field: &Field) -> &'a str {
    let end = field.end.min(line.len());
    line.get(field.start..end).unwrap_or("").trim()
}

fn parse_int(line: &str, field: &Field) -> Result<isize, PdbParseErrorKind> {
    let value = slice_and_trim(line, field);
    if value.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField {
            columns: field.columns,
        });
    }
    value.parse().map_err(|_| PdbParseErrorKind::InvalidInt {
        columns: field.columns,
        value: value.to_string(),
    })
}

fn parse_coordinate(line: &str, field: &Field) -> Result<f64, PdbParseErrorKind> {
    let value = slice_and_trim(line, field);
    if value.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField {
            columns: field.columns,
        });
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PdbParseErrorKind::InvalidFloat {
            columns: field.columns,
            value: value.to_string(),
        }),
    }
}

/// Parses a single fixed-column record.
///
/// Returns `Ok(None)` for any line that is not an `ATOM` record of the backbone marker atom;
/// such lines are ordinary content of a structure file and are skipped by the reader.
pub fn parse_atom_line(line: &str) -> Result<Option<BackboneAtom>, PdbParseErrorKind> {
    if !line.starts_with(ATOM_RECORD) || slice_and_trim(line, &ATOM_NAME) != BACKBONE_MARKER {
        return Ok(None);
    }

    let residue_name = slice_and_trim(line, &RESIDUE_NAME);
    let residue_number = parse_int(line, &RESIDUE_SEQ)?;
    let x = parse_coordinate(line, &COORD_X)?;
    let y = parse_coordinate(line, &COORD_Y)?;
    let z = parse_coordinate(line, &COORD_Z)?;

    Ok(Some(BackboneAtom::new(
        residue_name,
        residue_number,
        Point3::new(x, y, z),
    )))
}

/// Reader for PDB-style fixed-column coordinate files.
///
/// Keeps one alpha-carbon per residue, in record order.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<BackboneAtom>, Self::Error> {
        let mut atoms = Vec::new();
        let mut skipped = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match parse_atom_line(&line) {
                Ok(Some(atom)) => {
                    trace!(
                        "Line {}: {} {} at ({:.3}, {:.3}, {:.3})",
                        line_num,
                        atom.residue_name,
                        atom.residue_number,
                        atom.position.x,
                        atom.position.y,
                        atom.position.z
                    );
                    atoms.push(atom);
                }
                Ok(None) => skipped += 1,
                Err(kind) => {
                    return Err(PdbError::Parse {
                        line: line_num,
                        kind,
                    });
                }
            }
        }

        debug!(
            "Read {} backbone atoms ({} other lines skipped).",
            atoms.len(),
            skipped
        );
        Ok(atoms)
    }
}
