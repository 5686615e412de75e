use indexmap::IndexMap;

/// A single weighted edge of the Ising model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coupling {
    pub i: usize,
    pub j: usize,
    /// Coupling strength at wire precision.
    pub strength: f32,
}

type CouplingIter<'a> = std::iter::Map<
    indexmap::map::Iter<'a, (usize, usize), f32>,
    fn((&'a (usize, usize), &'a f32)) -> Coupling,
>;

fn to_coupling((&(i, j), &strength): (&(usize, usize), &f32)) -> Coupling {
    Coupling { i, j, strength }
}

/// Sparse coupling matrix keyed by ordered node pairs.
///
/// Iteration yields couplings in the order their keys were first inserted. Inserting a key
/// that already exists replaces its strength but keeps its original position, so the
/// serialized payload depends only on the order in which pairs were derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouplingMap {
    entries: IndexMap<(usize, usize), f32>,
}

impl CouplingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts or overwrites the coupling between `a` and `b`.
    ///
    /// The pair is stored with the smaller index first. Returns the previous strength if
    /// the pair was already present.
    pub fn insert(&mut self, a: usize, b: usize, strength: f32) -> Option<f32> {
        self.entries.insert((a.min(b), a.max(b)), strength)
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.entries.contains_key(&(a.min(b), a.max(b)))
    }

    pub fn get(&self, a: usize, b: usize) -> Option<f32> {
        self.entries.get(&(a.min(b), a.max(b))).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> CouplingIter<'_> {
        self.entries.iter().map(to_coupling as fn(_) -> _)
    }

    /// Largest node index referenced by any coupling.
    pub fn max_index(&self) -> Option<usize> {
        self.entries.keys().map(|&(_, j)| j).max()
    }
}

impl<'a> IntoIterator for &'a CouplingMap {
    type Item = Coupling;
    type IntoIter = CouplingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sparse Ising model: `E = -sum J_ij s_i s_j - sum h_i s_i`.
///
/// `biases` holds one local field per node. Nothing populates it yet, but the slot is part
/// of the payload format and must always have `num_nodes` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct IsingProblem {
    pub num_nodes: usize,
    pub couplings: CouplingMap,
    pub biases: Vec<f32>,
}

impl IsingProblem {
    /// Creates a problem with a zero bias vector.
    pub fn new(num_nodes: usize, couplings: CouplingMap) -> Self {
        Self {
            num_nodes,
            couplings,
            biases: vec![0.0; num_nodes],
        }
    }

    pub fn num_couplings(&self) -> usize {
        self.couplings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_normalizes_pair_order() {
        let mut map = CouplingMap::new();
        map.insert(5, 2, -0.5);
        let coupling = map.iter().next().unwrap();
        assert_eq!((coupling.i, coupling.j), (2, 5));
        assert_eq!(map.get(2, 5), Some(-0.5));
        assert_eq!(map.get(5, 2), Some(-0.5));
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let mut map = CouplingMap::new();
        map.insert(0, 3, -0.1);
        map.insert(1, 4, -0.2);
        let previous = map.insert(0, 3, -0.3);

        assert_eq!(previous, Some(-0.1));
        assert_eq!(map.len(), 2);
        let order: Vec<_> = map.iter().map(|c| (c.i, c.j, c.strength)).collect();
        assert_eq!(order, vec![(0, 3, -0.3), (1, 4, -0.2)]);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut map = CouplingMap::new();
        map.insert(7, 10, -1.0);
        map.insert(0, 4, -2.0);
        map.insert(2, 9, -3.0);
        let keys: Vec<_> = (&map).into_iter().map(|c| (c.i, c.j)).collect();
        assert_eq!(keys, vec![(7, 10), (0, 4), (2, 9)]);
        assert_eq!(map.max_index(), Some(10));
    }

    #[test]
    fn new_problem_has_zero_bias_for_every_node() {
        let problem = IsingProblem::new(4, CouplingMap::new());
        assert_eq!(problem.biases, vec![0.0; 4]);
        assert_eq!(problem.num_couplings(), 0);
    }
}
