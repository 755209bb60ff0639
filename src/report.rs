//! Report assembly.
//!
//! [`assemble`] collects every verdict and pair set as structured data;
//! [`Report::render`] turns it into the string form written to disk.

use ordermap::OrderSet;
use serde::Serialize;
use std::fmt::Display;
use tracing::info;

use crate::classify::{classify, PropertyFlags, PropertyReport};
use crate::error::Result;
use crate::extract::{self, PairOfPairs, Triple};
use crate::graph::{Element, Pair, RelationGraph};
use crate::hasse::{incomparable_pairs, linear_extension, to_hasse};
use crate::lattice::{Bounds, LatticeEngine, PairBounds};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedPairs<K> {
    pub relations: Vec<Pair<K>>,
    pub inverse: Vec<Pair<K>>,
    pub reflexive: Vec<Pair<K>>,
    pub symmetric: Vec<PairOfPairs<K>>,
    pub not_symmetric: Vec<PairOfPairs<K>>,
    pub transitive: Vec<Triple<K>>,
    pub not_transitive: Vec<Triple<K>>,
}

/// Everything derived from the Hasse diagram of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeReport<K> {
    pub hasse_edges: Vec<Pair<K>>,
    pub linear_extension: Vec<K>,
    pub incomparable: Vec<Pair<K>>,
    pub is_lattice: bool,
    pub is_bounded: bool,
    pub bounds: Bounds<K>,
    pub is_complemented: bool,
    pub complements: Vec<Pair<K>>,
    pub is_distributive: bool,
    pub is_boolean_algebra: bool,
    pub lower_bounds: Vec<PairBounds<K>>,
    pub upper_bounds: Vec<PairBounds<K>>,
    pub maximal_lower_bounds: Vec<PairBounds<K>>,
    pub minimal_upper_bounds: Vec<PairBounds<K>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<K> {
    pub properties: PropertyReport,
    pub related: RelatedPairs<K>,
    /// Present only when the relation is a partial or strict order.
    pub lattice: Option<LatticeReport<K>>,
}

pub fn related_pairs<K: Element>(graph: &RelationGraph<K>) -> RelatedPairs<K> {
    RelatedPairs {
        relations: extract::relations(graph),
        inverse: extract::inverse(graph),
        reflexive: extract::reflexive_pairs(graph),
        symmetric: extract::symmetric_pairs(graph),
        not_symmetric: extract::not_symmetric_pairs(graph),
        transitive: extract::transitive_triples(graph),
        not_transitive: extract::not_transitive_triples(graph),
    }
}

/// Run the lattice engine over the Hasse diagram of `graph`.
pub fn lattice_report<K: Element>(graph: &RelationGraph<K>) -> Result<LatticeReport<K>> {
    let hasse = to_hasse(graph)?;
    let engine = LatticeEngine::new(&hasse)?;
    let is_lattice = engine.is_lattice();
    Ok(LatticeReport {
        hasse_edges: extract::relations(&hasse),
        linear_extension: linear_extension(&hasse)?,
        incomparable: incomparable_pairs(&hasse),
        is_lattice,
        is_bounded: engine.is_bounded(),
        bounds: engine.bounds(),
        is_complemented: engine.is_complemented(),
        complements: engine.complements(),
        is_distributive: engine.is_distributive(),
        is_boolean_algebra: engine.is_boolean_algebra(),
        lower_bounds: engine.all_common_lower(),
        upper_bounds: engine.all_common_upper(),
        maximal_lower_bounds: engine.all_maximal_lower(),
        minimal_upper_bounds: engine.all_minimal_upper(),
    })
}

pub fn assemble<K: Element>(graph: &RelationGraph<K>) -> Result<Report<K>> {
    let properties = classify(graph);
    let related = related_pairs(graph);
    let lattice = if properties.is_order() {
        Some(lattice_report(graph)?)
    } else {
        None
    };
    info!(
        elements = graph.len(),
        pairs = graph.edge_count(),
        partial_order = properties.partial_order(),
        is_lattice = lattice.as_ref().is_some_and(|l| l.is_lattice),
        "assembled report"
    );
    Ok(Report { properties, related, lattice })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedPairs {
    pub relations: Vec<String>,
    pub inverse: Vec<String>,
    pub reflexive: Vec<String>,
    pub symmetry: Vec<String>,
    pub not_symmetric: Vec<String>,
    pub transitive: Vec<String>,
    pub not_transitive: Vec<String>,
}

/// The report as written to disk. Non-orders get `false` verdicts and
/// empty collections in the lattice fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub relations_type: PropertyFlags,
    pub related_nodes: RenderedPairs,
    pub is_lattice: bool,
    pub lattice_is_bounded: bool,
    pub maximum: Option<String>,
    pub minimum: Option<String>,
    pub lattice_is_complemented: bool,
    pub complements: Vec<String>,
    pub is_boolean_algebra: bool,
    pub is_distributive: bool,
    pub lower_bounds: Vec<String>,
    pub upper_bounds: Vec<String>,
    pub maximal_lower_bounds: Vec<String>,
    pub minimal_upper_bounds: Vec<String>,
    pub hasse_diagram: Vec<String>,
    pub linear_extension: Vec<String>,
    pub incomparable: Vec<String>,
}

fn pair<K: Display>((x, y): &Pair<K>) -> String {
    format!("({x}, {y})")
}

fn pair_of_pairs<K: Display>((a, b): &PairOfPairs<K>) -> String {
    format!("{}, {}", pair(a), pair(b))
}

fn triple<K: Display>((a, b, c): &Triple<K>) -> String {
    format!("{}, {}, {}", pair(a), pair(b), pair(c))
}

fn bound_family<K: Display>(family: &[PairBounds<K>]) -> Vec<String> {
    let set: OrderSet<String> = family
        .iter()
        .map(|pb| {
            let bounds: Vec<String> = pb.bounds.iter().map(ToString::to_string).collect();
            format!("{}, [{}]", pair(&pb.pair), bounds.join(", "))
        })
        .collect();
    set.into_iter().collect()
}

fn each<T, F: Fn(&T) -> String>(items: &[T], f: F) -> Vec<String> {
    items.iter().map(f).collect()
}

impl<K: Element + Display> Report<K> {
    pub fn render(&self) -> RenderedReport {
        let r = &self.related;
        let related_nodes = RenderedPairs {
            relations: each(&r.relations, pair),
            inverse: each(&r.inverse, pair),
            reflexive: each(&r.reflexive, pair),
            symmetry: each(&r.symmetric, pair_of_pairs),
            not_symmetric: each(&r.not_symmetric, pair_of_pairs),
            transitive: each(&r.transitive, triple),
            not_transitive: each(&r.not_transitive, triple),
        };
        let mut out = RenderedReport {
            relations_type: self.properties.flags(),
            related_nodes,
            is_lattice: false,
            lattice_is_bounded: false,
            maximum: None,
            minimum: None,
            lattice_is_complemented: false,
            complements: Vec::new(),
            is_boolean_algebra: false,
            is_distributive: false,
            lower_bounds: Vec::new(),
            upper_bounds: Vec::new(),
            maximal_lower_bounds: Vec::new(),
            minimal_upper_bounds: Vec::new(),
            hasse_diagram: Vec::new(),
            linear_extension: Vec::new(),
            incomparable: Vec::new(),
        };
        if let Some(l) = &self.lattice {
            out.is_lattice = l.is_lattice;
            out.lattice_is_bounded = l.is_bounded;
            out.maximum = l.bounds.maximum.as_ref().map(ToString::to_string);
            out.minimum = l.bounds.minimum.as_ref().map(ToString::to_string);
            out.lattice_is_complemented = l.is_complemented;
            out.complements = each(&l.complements, pair);
            out.is_boolean_algebra = l.is_boolean_algebra;
            out.is_distributive = l.is_distributive;
            out.lower_bounds = bound_family(&l.lower_bounds);
            out.upper_bounds = bound_family(&l.upper_bounds);
            out.maximal_lower_bounds = bound_family(&l.maximal_lower_bounds);
            out.minimal_upper_bounds = bound_family(&l.minimal_upper_bounds);
            out.hasse_diagram = each(&l.hasse_edges, pair);
            out.linear_extension = l.linear_extension.iter().map(ToString::to_string).collect();
            out.incomparable = each(&l.incomparable, pair);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairs::generate_relations;

    fn divides(domain: &[u32]) -> RelationGraph<u32> {
        let pairs = generate_relations(domain, |x, y| y % x == 0, false);
        RelationGraph::from_parts(domain.iter().copied(), pairs).unwrap()
    }

    #[test]
    fn order_gets_a_lattice_section() {
        let report = assemble(&divides(&[1, 2, 3, 6])).unwrap();
        assert!(report.properties.partial_order());
        let lattice = report.lattice.as_ref().unwrap();
        assert!(lattice.is_boolean_algebra);
        assert_eq!(lattice.bounds.minimum, Some(1));
        assert_eq!(lattice.hasse_edges.len(), 4);
    }

    #[test]
    fn non_order_skips_the_lattice_section() {
        let g = RelationGraph::from_parts([1, 2], [(1, 2), (2, 1)]).unwrap();
        let report = assemble(&g).unwrap();
        assert!(report.lattice.is_none());
        let rendered = report.render();
        assert!(!rendered.is_lattice);
        assert!(rendered.maximum.is_none());
        assert_eq!(rendered.related_nodes.symmetry, vec!["(1, 2), (2, 1)"]);
    }

    #[test]
    fn rendering_formats_pairs_and_bounds() {
        let rendered = assemble(&divides(&[1, 2, 3, 6])).unwrap().render();
        assert!(rendered.related_nodes.relations.contains(&"(2, 6)".to_string()));
        assert!(rendered.related_nodes.reflexive.contains(&"(3, 3)".to_string()));
        assert!(rendered
            .maximal_lower_bounds
            .contains(&"(2, 3), [1]".to_string()));
        assert!(rendered
            .minimal_upper_bounds
            .contains(&"(2, 3), [6]".to_string()));
        assert_eq!(rendered.minimum.as_deref(), Some("1"));
        assert_eq!(rendered.maximum.as_deref(), Some("6"));
        assert_eq!(rendered.complements, vec!["(1, 6)", "(2, 3)"]);
    }

    #[test]
    fn bound_family_drops_duplicates() {
        let family = vec![
            PairBounds { pair: (1, 2), bounds: vec![1] },
            PairBounds { pair: (1, 2), bounds: vec![1] },
        ];
        assert_eq!(bound_family(&family), vec!["(1, 2), [1]"]);
    }
}
