//! Bounds, meets, joins and lattice tests over a Hasse diagram.
//!
//! The engine reconstructs the reflexive-transitive closure of the covering
//! relation once and answers every query from it, so `x <= y` means "y is
//! reachable from x" rather than "x -> y is a Hasse edge".

use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Element, Pair, RelationGraph};
use crate::pairs::ordered_triples;

/// Global extremes of the order, when they exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds<K> {
    pub minimum: Option<K>,
    pub maximum: Option<K>,
}

/// A bound family entry: a pair of elements and the bounds they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairBounds<K> {
    pub pair: Pair<K>,
    pub bounds: Vec<K>,
}

pub struct LatticeEngine<'g, K> {
    hasse: &'g RelationGraph<K>,
    /// leq[i][j]: element i is below or equal to element j
    leq: Vec<Vec<bool>>,
    /// meets[i][j]: the unique maximal common lower bound, if any
    meets: Vec<Vec<Option<usize>>>,
    /// joins[i][j]: the unique minimal common upper bound, if any
    joins: Vec<Vec<Option<usize>>>,
}

impl<'g, K: Element> LatticeEngine<'g, K> {
    /// Fails with [`crate::RelationError::NotAnOrder`] if distinct elements
    /// form a cycle.
    pub fn new(hasse: &'g RelationGraph<K>) -> Result<Self> {
        crate::hasse::ensure_acyclic(hasse)?;
        let g = hasse.inner();

        let n = hasse.len();
        let mut leq = vec![vec![false; n]; n];
        for (i, row) in leq.iter_mut().enumerate() {
            let mut dfs = Dfs::new(g, NodeIndex::new(i));
            while let Some(j) = dfs.next(g) {
                row[j.index()] = true;
            }
        }
        let mut engine = Self { hasse, leq, meets: Vec::new(), joins: Vec::new() };
        engine.meets = engine.table(|i, j| single(engine.maximal(&engine.lower_idx(i, j))));
        engine.joins = engine.table(|i, j| single(engine.minimal(&engine.upper_idx(i, j))));
        debug!(elements = n, "built order closure and meet/join tables");
        Ok(engine)
    }

    pub fn len(&self) -> usize {
        self.leq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leq.is_empty()
    }

    /// `x <= y` in the order the Hasse diagram encodes.
    pub fn leq(&self, x: &K, y: &K) -> Result<bool> {
        let (i, j) = (self.pos(x)?, self.pos(y)?);
        Ok(self.leq[i][j])
    }

    pub fn common_lower(&self, x: &K, y: &K) -> Result<Vec<K>> {
        let (i, j) = (self.pos(x)?, self.pos(y)?);
        Ok(self.keys(&self.lower_idx(i, j)))
    }

    pub fn common_upper(&self, x: &K, y: &K) -> Result<Vec<K>> {
        let (i, j) = (self.pos(x)?, self.pos(y)?);
        Ok(self.keys(&self.upper_idx(i, j)))
    }

    /// Common lower bounds not strictly below another common lower bound.
    pub fn maximal_common_lower(&self, x: &K, y: &K) -> Result<Vec<K>> {
        let (i, j) = (self.pos(x)?, self.pos(y)?);
        Ok(self.keys(&self.maximal(&self.lower_idx(i, j))))
    }

    /// Common upper bounds not strictly above another common upper bound.
    pub fn minimal_common_upper(&self, x: &K, y: &K) -> Result<Vec<K>> {
        let (i, j) = (self.pos(x)?, self.pos(y)?);
        Ok(self.keys(&self.minimal(&self.upper_idx(i, j))))
    }

    /// Greatest lower bound, if there is exactly one candidate.
    pub fn meet(&self, x: &K, y: &K) -> Result<Option<K>> {
        let (i, j) = (self.pos(x)?, self.pos(y)?);
        Ok(self.meet_idx(i, j).map(|m| self.key(m)))
    }

    /// Least upper bound, if there is exactly one candidate.
    pub fn join(&self, x: &K, y: &K) -> Result<Option<K>> {
        let (i, j) = (self.pos(x)?, self.pos(y)?);
        Ok(self.join_idx(i, j).map(|m| self.key(m)))
    }

    /// Every pair of distinct elements has a unique meet and a unique join.
    pub fn is_lattice(&self) -> bool {
        self.distinct_pairs()
            .all(|(i, j)| self.meet_idx(i, j).is_some() && self.join_idx(i, j).is_some())
    }

    /// Every pair of distinct elements has at least one meet candidate and
    /// one join candidate. Weaker than [`Self::is_lattice`].
    pub fn is_pairwise_bounded(&self) -> bool {
        self.distinct_pairs().all(|(i, j)| {
            !self.maximal(&self.lower_idx(i, j)).is_empty()
                && !self.minimal(&self.upper_idx(i, j)).is_empty()
        })
    }

    pub fn bounds(&self) -> Bounds<K> {
        Bounds {
            minimum: self.minimum_idx().map(|i| self.key(i)),
            maximum: self.maximum_idx().map(|i| self.key(i)),
        }
    }

    /// Both extremes exist. An empty order counts as bounded.
    pub fn is_bounded(&self) -> bool {
        self.is_empty() || (self.minimum_idx().is_some() && self.maximum_idx().is_some())
    }

    /// Pairs `(a, b)` whose meet is the minimum and whose join is the maximum.
    ///
    /// Each complementary pair is listed once; an element is only its own
    /// complement in the one-element order.
    pub fn complements(&self) -> Vec<Pair<K>> {
        self.complement_idx()
            .into_iter()
            .map(|(a, b)| (self.key(a), self.key(b)))
            .collect()
    }

    /// Every element has at least one complement.
    pub fn is_complemented(&self) -> bool {
        if self.len() < 2 {
            return true;
        }
        let pairs = self.complement_idx();
        (0..self.len()).all(|k| pairs.iter().any(|&(a, b)| a == k || b == k))
    }

    /// `x ^ (y v z) == (x ^ y) v (x ^ z)` for all triples.
    pub fn is_distributive(&self) -> bool {
        if self.len() < 2 {
            return true;
        }
        if !self.is_lattice() {
            return false;
        }
        let idx: Vec<usize> = (0..self.len()).collect();
        let distributive = ordered_triples(&idx).all(|(&x, &y, &z)| {
            let lhs = self.join_idx(y, z).and_then(|yz| self.meet_idx(x, yz));
            let rhs = match (self.meet_idx(x, y), self.meet_idx(x, z)) {
                (Some(xy), Some(xz)) => self.join_idx(xy, xz),
                _ => None,
            };
            lhs.is_some() && lhs == rhs
        });
        distributive
    }

    pub fn is_boolean_algebra(&self) -> bool {
        self.is_lattice() && self.is_bounded() && self.is_complemented() && self.is_distributive()
    }

    pub fn all_common_lower(&self) -> Vec<PairBounds<K>> {
        self.family(|i, j| self.lower_idx(i, j))
    }

    pub fn all_common_upper(&self) -> Vec<PairBounds<K>> {
        self.family(|i, j| self.upper_idx(i, j))
    }

    pub fn all_maximal_lower(&self) -> Vec<PairBounds<K>> {
        self.family(|i, j| self.maximal(&self.lower_idx(i, j)))
    }

    pub fn all_minimal_upper(&self) -> Vec<PairBounds<K>> {
        self.family(|i, j| self.minimal(&self.upper_idx(i, j)))
    }

    fn family<F>(&self, bounds: F) -> Vec<PairBounds<K>>
    where
        F: Fn(usize, usize) -> Vec<usize>,
    {
        self.distinct_pairs()
            .map(|(i, j)| PairBounds {
                pair: (self.key(i), self.key(j)),
                bounds: self.keys(&bounds(i, j)),
            })
            .collect()
    }

    fn distinct_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.len();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }

    fn lower_idx(&self, i: usize, j: usize) -> Vec<usize> {
        (0..self.len()).filter(|&k| self.leq[k][i] && self.leq[k][j]).collect()
    }

    fn upper_idx(&self, i: usize, j: usize) -> Vec<usize> {
        (0..self.len()).filter(|&k| self.leq[i][k] && self.leq[j][k]).collect()
    }

    fn maximal(&self, set: &[usize]) -> Vec<usize> {
        set.iter()
            .copied()
            .filter(|&m| !set.iter().any(|&o| o != m && self.leq[m][o]))
            .collect()
    }

    fn minimal(&self, set: &[usize]) -> Vec<usize> {
        set.iter()
            .copied()
            .filter(|&m| !set.iter().any(|&o| o != m && self.leq[o][m]))
            .collect()
    }

    fn table<F>(&self, cell: F) -> Vec<Vec<Option<usize>>>
    where
        F: Fn(usize, usize) -> Option<usize>,
    {
        let n = self.len();
        (0..n).map(|i| (0..n).map(|j| cell(i, j)).collect()).collect()
    }

    fn meet_idx(&self, i: usize, j: usize) -> Option<usize> {
        self.meets[i][j]
    }

    fn join_idx(&self, i: usize, j: usize) -> Option<usize> {
        self.joins[i][j]
    }

    fn minimum_idx(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.leq[i].iter().all(|&b| b))
    }

    fn maximum_idx(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.leq.iter().all(|row| row[i]))
    }

    fn complement_idx(&self) -> Vec<(usize, usize)> {
        let (Some(bottom), Some(top)) = (self.minimum_idx(), self.maximum_idx()) else {
            return Vec::new();
        };
        let n = self.len();
        (0..n)
            .flat_map(|a| (a..n).map(move |b| (a, b)))
            .filter(|&(a, b)| {
                self.meet_idx(a, b) == Some(bottom) && self.join_idx(a, b) == Some(top)
            })
            .collect()
    }

    fn pos(&self, k: &K) -> Result<usize> {
        Ok(self.hasse.index_of(k)?.index())
    }

    fn key(&self, i: usize) -> K {
        self.hasse.key(NodeIndex::new(i)).clone()
    }

    fn keys(&self, idx: &[usize]) -> Vec<K> {
        idx.iter().map(|&i| self.key(i)).collect()
    }
}

fn single(mut v: Vec<usize>) -> Option<usize> {
    if v.len() == 1 {
        v.pop()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasse::to_hasse;
    use crate::pairs::generate_relations;
    use crate::RelationError;

    fn divisors(domain: &[u32]) -> RelationGraph<u32> {
        let pairs = generate_relations(domain, |x, y| y % x == 0, false);
        let g = RelationGraph::from_parts(domain.iter().copied(), pairs).unwrap();
        to_hasse(&g).unwrap()
    }

    fn hasse(domain: &[&'static str], covers: &[(&'static str, &'static str)]) -> RelationGraph<&'static str> {
        RelationGraph::from_parts(domain.iter().copied(), covers.iter().copied()).unwrap()
    }

    #[test]
    fn divisors_of_twelve() {
        let h = divisors(&[1, 2, 3, 4, 6, 12]);
        let e = LatticeEngine::new(&h).unwrap();
        assert!(e.is_lattice());
        assert!(e.is_pairwise_bounded());
        assert_eq!(e.bounds(), Bounds { minimum: Some(1), maximum: Some(12) });
        assert!(e.is_bounded());
        assert!(e.is_distributive());
        assert_eq!(e.meet(&4, &6).unwrap(), Some(2));
        assert_eq!(e.join(&4, &6).unwrap(), Some(12));
        assert_eq!(e.join(&2, &3).unwrap(), Some(6));
        assert_eq!(e.complements(), vec![(1, 12), (3, 4)]);
        // 2 and 6 have no complement
        assert!(!e.is_complemented());
        assert!(!e.is_boolean_algebra());
    }

    #[test]
    fn bounds_use_the_closure_not_direct_edges() {
        let h = divisors(&[1, 2, 3, 4, 6, 12]);
        let e = LatticeEngine::new(&h).unwrap();
        assert!(e.leq(&1, &12).unwrap());
        assert!(!h.contains_edge(&1, &12));
        let mut lower = e.common_lower(&4, &6).unwrap();
        lower.sort();
        assert_eq!(lower, vec![1, 2]);
        assert_eq!(e.maximal_common_lower(&4, &6).unwrap(), vec![2]);
        let mut upper = e.common_upper(&2, &3).unwrap();
        upper.sort();
        assert_eq!(upper, vec![6, 12]);
        assert_eq!(e.minimal_common_upper(&2, &3).unwrap(), vec![6]);
    }

    #[test]
    fn divisors_of_thirty_form_a_boolean_algebra() {
        let h = divisors(&[1, 2, 3, 5, 6, 10, 15, 30]);
        let e = LatticeEngine::new(&h).unwrap();
        assert!(e.is_lattice());
        assert!(e.is_complemented());
        assert!(e.is_distributive());
        assert!(e.is_boolean_algebra());
        assert!(e.complements().contains(&(2, 15)));
    }

    #[test]
    fn sixty_four_divisors_stay_tractable() {
        let primes = [2u32, 3, 5, 7, 11, 13];
        let domain: Vec<u32> = (0u32..64)
            .map(|mask| {
                primes
                    .iter()
                    .enumerate()
                    .filter(|&(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, p)| p)
                    .product()
            })
            .collect();
        let h = divisors(&domain);
        let e = LatticeEngine::new(&h).unwrap();
        assert_eq!(e.bounds(), Bounds { minimum: Some(1), maximum: Some(30030) });
        assert_eq!(e.meet(&(2 * 7 * 13), &(7 * 11)).unwrap(), Some(7));
        assert_eq!(e.join(&6, &35).unwrap(), Some(210));
        assert!(e.is_distributive());
        assert!(e.is_boolean_algebra());
        assert_eq!(e.complements().len(), 32);
    }

    #[test]
    fn diamond_is_complemented_but_not_distributive() {
        let h = hasse(
            &["0", "a", "b", "c", "1"],
            &[("0", "a"), ("0", "b"), ("0", "c"), ("a", "1"), ("b", "1"), ("c", "1")],
        );
        let e = LatticeEngine::new(&h).unwrap();
        assert!(e.is_lattice());
        assert!(e.is_complemented());
        assert!(!e.is_distributive());
        assert!(!e.is_boolean_algebra());
    }

    #[test]
    fn pentagon_is_not_distributive() {
        let h = hasse(
            &["0", "a", "b", "c", "1"],
            &[("0", "a"), ("a", "b"), ("b", "1"), ("0", "c"), ("c", "1")],
        );
        let e = LatticeEngine::new(&h).unwrap();
        assert!(e.is_lattice());
        assert!(!e.is_distributive());
    }

    #[test]
    fn two_maximal_upper_bounds_is_not_a_lattice() {
        let h = hasse(
            &["a", "b", "c", "d"],
            &[("a", "c"), ("a", "d"), ("b", "c"), ("b", "d")],
        );
        let e = LatticeEngine::new(&h).unwrap();
        let mut mcs = e.minimal_common_upper(&"a", &"b").unwrap();
        mcs.sort();
        assert_eq!(mcs, vec!["c", "d"]);
        assert_eq!(e.join(&"a", &"b").unwrap(), None);
        assert!(!e.is_lattice());
        assert!(!e.is_pairwise_bounded());
        assert!(!e.is_bounded());
        assert!(e.complements().is_empty());
        assert!(!e.is_distributive());
    }

    #[test]
    fn bounded_pairs_without_unique_meet() {
        // c and d share the upper bound 1 and the lower bounds a, b
        let h = hasse(
            &["0", "a", "b", "c", "d", "1"],
            &[
                ("0", "a"),
                ("0", "b"),
                ("a", "c"),
                ("a", "d"),
                ("b", "c"),
                ("b", "d"),
                ("c", "1"),
                ("d", "1"),
            ],
        );
        let e = LatticeEngine::new(&h).unwrap();
        assert!(e.is_pairwise_bounded());
        assert!(!e.is_lattice());
    }

    #[test]
    fn tiny_orders_are_vacuously_everything() {
        let empty: RelationGraph<u8> = RelationGraph::new();
        let e = LatticeEngine::new(&empty).unwrap();
        assert!(e.is_lattice() && e.is_bounded() && e.is_complemented() && e.is_distributive());
        assert_eq!(e.bounds(), Bounds { minimum: None, maximum: None });

        let one = hasse(&["x"], &[]);
        let e = LatticeEngine::new(&one).unwrap();
        assert!(e.is_boolean_algebra());
        assert_eq!(e.bounds(), Bounds { minimum: Some("x"), maximum: Some("x") });
        assert_eq!(e.complements(), vec![("x", "x")]);
    }

    #[test]
    fn cycles_and_strangers_are_rejected() {
        let cyclic = hasse(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert!(matches!(
            LatticeEngine::new(&cyclic),
            Err(RelationError::NotAnOrder { .. })
        ));

        let h = hasse(&["a", "b"], &[("a", "b")]);
        let e = LatticeEngine::new(&h).unwrap();
        assert!(matches!(
            e.meet(&"a", &"z"),
            Err(RelationError::UnknownElement { .. })
        ));
    }

    #[test]
    fn bound_families_cover_distinct_pairs() {
        let h = divisors(&[1, 2, 3, 6]);
        let e = LatticeEngine::new(&h).unwrap();
        let lower = e.all_common_lower();
        assert_eq!(lower.len(), 6);
        assert!(lower.iter().all(|pb| pb.pair.0 != pb.pair.1));
        let meets = e.all_maximal_lower();
        let entry = meets.iter().find(|pb| pb.pair == (2, 3)).unwrap();
        assert_eq!(entry.bounds, vec![1]);
        let joins = e.all_minimal_upper();
        let entry = joins.iter().find(|pb| pb.pair == (2, 3)).unwrap();
        assert_eq!(entry.bounds, vec![6]);
        assert_eq!(e.all_common_upper().len(), 6);
    }
}
