use crate::core::utils::geometry;
use nalgebra::Point3;

/// Atom name of the representative atom kept for each residue.
pub const BACKBONE_MARKER: &str = "CA";

/// A single residue, coarse-grained to its alpha-carbon.
///
/// Backbone atoms are created by the structure parser and are read-only afterwards.
/// Their position in the parsed sequence is their node index in every downstream stage,
/// so the parser must preserve chain order.
#[derive(Debug, Clone, PartialEq)]
pub struct BackboneAtom {
    /// Three-letter residue name (e.g., "ALA").
    pub residue_name: String,
    /// Residue sequence number as written in the structure file.
    pub residue_number: isize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl BackboneAtom {
    pub fn new(residue_name: &str, residue_number: isize, position: Point3<f64>) -> Self {
        Self {
            residue_name: residue_name.to_string(),
            residue_number,
            position,
        }
    }

    /// Euclidean distance to another atom in Angstroms.
    #[inline]
    pub fn distance_to(&self, other: &BackboneAtom) -> f64 {
        geometry::euclidean_distance(&self.position, &other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_copies_residue_name_and_position() {
        let atom = BackboneAtom::new("GLY", 42, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.residue_name, "GLY");
        assert_eq!(atom.residue_number, 42);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn distance_to_is_symmetric() {
        let a = BackboneAtom::new("ALA", 1, Point3::new(0.0, 0.0, 0.0));
        let b = BackboneAtom::new("ALA", 2, Point3::new(3.0, 4.0, 0.0));
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }
}
