use crate::core::models::atom::BackboneAtom;
use crate::core::models::contact::Contact;
use crate::engine::config::ContactConfig;
use tracing::{debug, instrument};

/// Builds the residue contact graph.
///
/// Scans every pair `(i, j)` with `j >= i + min_sequence_separation` and keeps it when the
/// backbone atoms are strictly closer than `cutoff`. Contacts come out ordered by `i`, then
/// by `j`. The scan is quadratic in the number of atoms, which is fine for the few hundred
/// residues a job carries.
#[instrument(skip_all, name = "contact_graph_task")]
pub fn run(atoms: &[BackboneAtom], config: &ContactConfig) -> Vec<Contact> {
    let n = atoms.len();
    let mut contacts = Vec::new();

    for i in 0..n {
        // Rows only get shorter, so the first empty one ends the scan.
        let start = match i.checked_add(config.min_sequence_separation) {
            Some(start) if start < n => start,
            _ => break,
        };
        for j in start..n {
            let distance = atoms[i].distance_to(&atoms[j]);
            if distance < config.cutoff {
                contacts.push(Contact::new(i, j, distance));
            }
        }
    }

    debug!(
        "Found {} contacts among {} atoms (cutoff {:.2} A, separation >= {}).",
        contacts.len(),
        n,
        config.cutoff,
        config.min_sequence_separation
    );
    contacts
}
