use crate::core::io::payload::{self, EncodingError};
use crate::core::models::atom::BackboneAtom;
use crate::core::models::contact::Contact;
use crate::core::models::problem::{CouplingMap, IsingProblem};
use tracing::{debug, info, instrument};

/// Offset added to every distance before inversion.
pub const COUPLING_EPSILON: f64 = 0.1;

/// An Ising problem together with its serialized payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedProblem {
    pub problem: IsingProblem,
    pub payload: Vec<u8>,
}

impl EncodedProblem {
    pub fn num_nodes(&self) -> usize {
        self.problem.num_nodes
    }

    pub fn num_couplings(&self) -> usize {
        self.problem.num_couplings()
    }
}

/// Coupling strength for a contact at `distance` Angstroms.
///
/// Always negative and larger in magnitude for closer pairs. Computed in `f64` and rounded
/// once to the `f32` wire precision.
#[inline]
pub fn coupling_strength(distance: f64) -> f32 {
    (-1.0 / (distance + COUPLING_EPSILON)) as f32
}

/// Number of nodes kept after applying the optional size limit.
pub fn truncated_size(num_atoms: usize, max_size: Option<usize>) -> usize {
    match max_size {
        Some(limit) if num_atoms > limit => limit,
        _ => num_atoms,
    }
}

/// Builds the coupling map, one entry per contact, in contact order.
pub fn build_couplings<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> CouplingMap {
    let mut couplings = CouplingMap::new();
    for contact in contacts {
        couplings.insert(contact.i, contact.j, coupling_strength(contact.distance));
    }
    couplings
}

/// Maps a contact graph onto a sparse Ising problem and serializes it.
#[instrument(skip_all, name = "problem_encoding_task")]
pub fn run(
    atoms: &[BackboneAtom],
    contacts: &[Contact],
    max_size: Option<usize>,
) -> Result<EncodedProblem, EncodingError> {
    let num_nodes = truncated_size(atoms.len(), max_size);
    // Prefix truncation: contacts touching any dropped node go with it.
    let couplings = if num_nodes < atoms.len() {
        info!(
            "Truncating structure from {} to its first {} residues.",
            atoms.len(),
            num_nodes
        );
        build_couplings(contacts.iter().filter(|c| c.fits_within(num_nodes)))
    } else {
        build_couplings(contacts)
    };

    let problem = IsingProblem::new(num_nodes, couplings);
    let payload = payload::encode_payload(&problem)?;

    debug!(
        "Encoded {} nodes and {} couplings into {} bytes.",
        problem.num_nodes,
        problem.num_couplings(),
        payload.len()
    );
    Ok(EncodedProblem { problem, payload })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::payload::{MAX_NODES, decode_payload};
    use nalgebra::Point3;

    fn atoms(n: usize) -> Vec<BackboneAtom> {
        (0..n)
            .map(|k| BackboneAtom::new("LEU", k as isize + 1, Point3::new(k as f64, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn coupling_strength_at_3_9_angstroms_is_exactly_minus_quarter() {
        assert_eq!(coupling_strength(3.9), -0.25);
    }

    #[test]
    fn coupling_strength_is_negative_and_attenuates_with_distance() {
        let near = coupling_strength(4.0);
        let far = coupling_strength(7.5);
        assert!(near < 0.0 && far < 0.0);
        assert!(near < far);
        assert_eq!(coupling_strength(0.0), -10.0);
    }

    #[test]
    fn truncated_size_only_shrinks() {
        assert_eq!(truncated_size(150, Some(100)), 100);
        assert_eq!(truncated_size(80, Some(100)), 80);
        assert_eq!(truncated_size(100, Some(100)), 100);
        assert_eq!(truncated_size(150, None), 150);
    }

    #[test]
    fn truncation_drops_contacts_touching_removed_nodes() {
        let contacts = vec![
            Contact::new(0, 3, 5.0),
            Contact::new(1, 6, 6.0),
            Contact::new(2, 5, 7.0),
            Contact::new(4, 7, 4.0),
        ];
        let encoded = run(&atoms(10), &contacts, Some(6)).unwrap();

        assert_eq!(encoded.num_nodes(), 6);
        let kept: Vec<_> = encoded.problem.couplings.iter().map(|c| (c.i, c.j)).collect();
        assert_eq!(kept, vec![(0, 3), (2, 5)]);
        assert!(encoded.problem.couplings.iter().all(|c| c.j < 6));
    }

    #[test]
    fn couplings_follow_contact_order_and_strengths() {
        let contacts = vec![Contact::new(0, 4, 3.9), Contact::new(1, 5, 1.9)];
        let encoded = run(&atoms(6), &contacts, None).unwrap();
        let couplings: Vec<_> = encoded
            .problem
            .couplings
            .iter()
            .map(|c| (c.i, c.j, c.strength))
            .collect();
        assert_eq!(couplings, vec![(0, 4, -0.25), (1, 5, -0.5)]);
    }

    #[test]
    fn duplicate_contact_keeps_the_later_strength() {
        let contacts = vec![Contact::new(0, 4, 3.9), Contact::new(0, 4, 1.9)];
        let encoded = run(&atoms(5), &contacts, None).unwrap();
        assert_eq!(encoded.num_couplings(), 1);
        assert_eq!(encoded.problem.couplings.get(0, 4), Some(-0.5));
    }

    #[test]
    fn payload_decodes_to_the_encoded_problem() {
        let contacts = vec![Contact::new(0, 3, 6.2), Contact::new(2, 7, 5.1)];
        let encoded = run(&atoms(8), &contacts, None).unwrap();
        assert_eq!(decode_payload(&encoded.payload).unwrap(), encoded.problem);
    }

    #[test]
    fn node_count_above_wire_limit_fails_without_payload() {
        let result = run(&atoms(MAX_NODES + 1), &[], None);
        assert_eq!(
            result,
            Err(EncodingError::NodeCountOverflow {
                num_nodes: MAX_NODES + 1
            })
        );
    }

    #[test]
    fn size_limit_brings_large_structure_within_wire_limit() {
        let encoded = run(&atoms(MAX_NODES + 1), &[], Some(100)).unwrap();
        assert_eq!(encoded.num_nodes(), 100);
    }

    #[test]
    fn contact_beyond_structure_is_rejected() {
        let contacts = vec![Contact::new(1, 9, 5.0)];
        assert_eq!(
            run(&atoms(5), &contacts, None),
            Err(EncodingError::IndexOutOfRange {
                index: 9,
                num_nodes: 5
            })
        );
    }
}
