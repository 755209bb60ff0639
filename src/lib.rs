//! # relation_lattice
//!
//! Classify a finite binary relation and, when it is an order, compute its
//! lattice structure.
//!
//! A relation is held as a directed graph ([`RelationGraph`]): the nodes are
//! the domain and every edge `x -> y` means "x relates to y". From there:
//!
//! - [`classify`] decides reflexivity, symmetry, transitivity and the order
//!   classes they imply.
//! - [`to_hasse`] reduces an order to its covering relation.
//! - [`LatticeEngine`] answers bound, meet/join, complement and
//!   distributivity questions over that reduction.
//! - [`assemble`] gathers all of it into a [`Report`], which
//!   [`write_report`] persists after [`Report::render`].
//!
//! ```
//! use relation_lattice::{assemble, generate_relations, RelationGraph};
//!
//! let domain = [1u32, 2, 3, 4, 6, 12];
//! let pairs = generate_relations(&domain, |x, y| y % x == 0, false);
//! let graph = RelationGraph::from_parts(domain, pairs).unwrap();
//! let report = assemble(&graph).unwrap();
//! assert!(report.properties.partial_order());
//! assert!(report.lattice.unwrap().is_distributive);
//! ```
mod classify;
mod error;
mod extract;
mod graph;
mod hasse;
mod input;
mod lattice;
mod pairs;
mod render;
mod report;
mod writer;

pub use classify::{classify, Extent, PropertyFlags, PropertyReport};
pub use error::{RelationError, Result};
pub use extract::{
    inverse, inverse_of, not_symmetric_pairs, not_transitive_triples, reflexive_pairs, relations,
    symmetric_pairs, transitive_triples, PairOfPairs, Triple,
};
pub use graph::{EdgeAttr, Element, NodeAttr, Pair, RelationGraph};
pub use hasse::{incomparable_pairs, linear_extension, to_hasse};
pub use input::{Condition, RelationInput};
pub use lattice::{Bounds, LatticeEngine, PairBounds};
pub use pairs::{generate_relations, ordered_pairs, ordered_triples, unordered_pairs};
pub use render::{draw_graph, draw_relation, to_dot, RELATION_COLOR};
pub use report::{
    assemble, lattice_report, related_pairs, LatticeReport, RelatedPairs, RenderedPairs,
    RenderedReport, Report,
};
pub use writer::{write_report, Format};
