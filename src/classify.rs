//! Relation property classification.
//!
//! Reflexivity, symmetry and transitivity are each a universal statement
//! over some subjects (domain elements, off-diagonal edges, edge chains).
//! Counting how many subjects satisfy it gives an [`Extent`], from which the
//! positive, negative and mixed verdicts all follow without overlap.

use serde::Serialize;
use tracing::debug;

use crate::extract;
use crate::graph::{Element, RelationGraph};
use crate::pairs::unordered_pairs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// There was nothing to check.
    Vacuous,
    Never,
    Mixed,
    Always,
}

impl Extent {
    pub fn from_counts(holds: usize, fails: usize) -> Self {
        match (holds, fails) {
            (0, 0) => Extent::Vacuous,
            (0, _) => Extent::Never,
            (_, 0) => Extent::Always,
            _ => Extent::Mixed,
        }
    }

    /// Holds for every subject.
    pub fn universal(self) -> bool {
        matches!(self, Extent::Always | Extent::Vacuous)
    }

    /// Holds for no subject.
    pub fn absent(self) -> bool {
        matches!(self, Extent::Never | Extent::Vacuous)
    }

    pub fn mixed(self) -> bool {
        self == Extent::Mixed
    }
}

/// Classification of one relation, computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyReport {
    /// Subjects: domain elements; holds when the element relates to itself.
    pub reflexivity: Extent,
    /// Subjects: edges `(x, y)` with `x != y`; holds when `(y, x)` is present.
    pub symmetry: Extent,
    /// Subjects: chains `(x, y), (y, z)`; holds when `(x, z)` is present.
    pub transitivity: Extent,
    /// Every two distinct elements are related in at least one direction.
    pub totality: bool,
}

/// The twelve named verdicts, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyFlags {
    pub reflexive: bool,
    pub anti_reflexive: bool,
    pub not_reflexive: bool,
    pub symmetric: bool,
    pub anti_symmetric: bool,
    pub not_symmetric: bool,
    pub transitive: bool,
    pub not_transitive: bool,
    pub equivalent: bool,
    pub strict_order: bool,
    pub partial_order: bool,
    pub total_order: bool,
}

pub fn classify<K: Element>(graph: &RelationGraph<K>) -> PropertyReport {
    let loops = graph.nodes().filter(|k| graph.contains_edge(k, k)).count();
    let reflexivity = Extent::from_counts(loops, graph.len() - loops);

    let mirrored = graph
        .edges()
        .filter(|(x, y)| x != y && graph.contains_edge(y, x))
        .count();
    let unmirrored = extract::not_symmetric_pairs(graph).len();
    let symmetry = Extent::from_counts(mirrored, unmirrored);

    let closed = extract::transitive_triples(graph).len();
    let open = extract::not_transitive_triples(graph).len();
    let transitivity = Extent::from_counts(closed, open);

    let keys: Vec<&K> = graph.nodes().collect();
    let totality = unordered_pairs(&keys)
        .all(|(x, y)| graph.contains_edge(x, y) || graph.contains_edge(y, x));

    let report = PropertyReport { reflexivity, symmetry, transitivity, totality };
    debug!(?report, "classified relation");
    report
}

impl PropertyReport {
    pub fn reflexive(&self) -> bool {
        self.reflexivity.universal()
    }

    pub fn anti_reflexive(&self) -> bool {
        self.reflexivity.absent()
    }

    pub fn not_reflexive(&self) -> bool {
        self.reflexivity.mixed()
    }

    pub fn symmetric(&self) -> bool {
        self.symmetry.universal()
    }

    pub fn anti_symmetric(&self) -> bool {
        self.symmetry.absent()
    }

    pub fn not_symmetric(&self) -> bool {
        self.symmetry.mixed()
    }

    pub fn transitive(&self) -> bool {
        self.transitivity.universal()
    }

    pub fn not_transitive(&self) -> bool {
        !self.transitive()
    }

    pub fn equivalence(&self) -> bool {
        self.reflexive() && self.symmetric() && self.transitive()
    }

    pub fn strict_order(&self) -> bool {
        self.anti_reflexive() && self.anti_symmetric() && self.transitive()
    }

    pub fn partial_order(&self) -> bool {
        self.reflexive() && self.anti_symmetric() && self.transitive()
    }

    pub fn total_order(&self) -> bool {
        self.partial_order() && self.totality
    }

    /// Either kind of order, i.e. a relation with a meaningful Hasse diagram.
    pub fn is_order(&self) -> bool {
        self.partial_order() || self.strict_order()
    }

    pub fn flags(&self) -> PropertyFlags {
        PropertyFlags {
            reflexive: self.reflexive(),
            anti_reflexive: self.anti_reflexive(),
            not_reflexive: self.not_reflexive(),
            symmetric: self.symmetric(),
            anti_symmetric: self.anti_symmetric(),
            not_symmetric: self.not_symmetric(),
            transitive: self.transitive(),
            not_transitive: self.not_transitive(),
            equivalent: self.equivalence(),
            strict_order: self.strict_order(),
            partial_order: self.partial_order(),
            total_order: self.total_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(domain: &[u32], pairs: &[(u32, u32)]) -> RelationGraph<u32> {
        RelationGraph::from_parts(domain.iter().copied(), pairs.iter().copied()).unwrap()
    }

    #[test]
    fn extent_from_counts() {
        assert_eq!(Extent::from_counts(0, 0), Extent::Vacuous);
        assert_eq!(Extent::from_counts(0, 3), Extent::Never);
        assert_eq!(Extent::from_counts(2, 0), Extent::Always);
        assert_eq!(Extent::from_counts(2, 3), Extent::Mixed);
        assert!(Extent::Vacuous.universal() && Extent::Vacuous.absent());
        assert!(!Extent::Mixed.universal() && !Extent::Mixed.absent());
    }

    #[test]
    fn empty_relation_is_a_strict_order() {
        let flags = classify(&graph(&[1, 2, 3], &[])).flags();
        assert!(!flags.reflexive);
        assert!(flags.anti_reflexive);
        assert!(flags.symmetric && flags.anti_symmetric);
        assert!(flags.transitive);
        assert!(!flags.equivalent);
        assert!(flags.strict_order);
        assert!(!flags.partial_order);
    }

    #[test]
    fn some_loops_is_mixed_reflexivity() {
        let r = classify(&graph(&[1, 2], &[(1, 1)]));
        assert_eq!(r.reflexivity, Extent::Mixed);
        assert!(r.not_reflexive() && !r.reflexive() && !r.anti_reflexive());
    }

    #[test]
    fn half_mirrored_edges_are_mixed_symmetry() {
        let r = classify(&graph(&[1, 2, 3], &[(1, 2), (2, 1), (2, 3)]));
        assert_eq!(r.symmetry, Extent::Mixed);
        assert!(r.not_symmetric());
        assert!(!r.symmetric() && !r.anti_symmetric());
    }

    #[test]
    fn one_sided_edges_are_anti_symmetric_not_mixed() {
        let r = classify(&graph(&[1, 2], &[(1, 2)]));
        assert_eq!(r.symmetry, Extent::Never);
        assert!(r.anti_symmetric() && !r.not_symmetric());
    }

    #[test]
    fn total_order_on_a_chain() {
        let r = classify(&graph(
            &[1, 2, 3],
            &[(1, 1), (2, 2), (3, 3), (1, 2), (2, 3), (1, 3)],
        ));
        assert!(r.partial_order());
        assert!(r.total_order());
        assert!(!r.equivalence());
    }

    #[test]
    fn congruence_is_an_equivalence() {
        let domain = [0, 1, 2, 3];
        let pairs: Vec<_> = crate::pairs::generate_relations(&domain, |x, y| x % 2 == y % 2, false)
            .collect();
        let r = classify(&graph(&domain, &pairs));
        assert!(r.equivalence());
        assert!(!r.partial_order());
    }

    #[test]
    fn missing_shortcut_breaks_transitivity() {
        let r = classify(&graph(&[1, 2, 3], &[(1, 2), (2, 3)]));
        assert!(r.not_transitive());
        assert!(!r.strict_order());
    }
}
