//! Read-only extraction of pair sets from a relation graph.

use crate::graph::{Element, Pair, RelationGraph};

/// Two mirrored edges, or an edge together with the mirror it lacks.
pub type PairOfPairs<K> = (Pair<K>, Pair<K>);
/// `(x, y)`, `(y, z)` and the implied `(x, z)`.
pub type Triple<K> = (Pair<K>, Pair<K>, Pair<K>);

/// The raw edge set.
pub fn relations<K: Element>(graph: &RelationGraph<K>) -> Vec<Pair<K>> {
    graph.edges().map(|(x, y)| (x.clone(), y.clone())).collect()
}

/// `{(y, x) : (x, y) in relations}`.
pub fn inverse<K: Element>(graph: &RelationGraph<K>) -> Vec<Pair<K>> {
    inverse_of(&relations(graph))
}

pub fn inverse_of<K: Clone>(pairs: &[Pair<K>]) -> Vec<Pair<K>> {
    pairs.iter().map(|(x, y)| (y.clone(), x.clone())).collect()
}

/// Self-loops `(x, x)`.
pub fn reflexive_pairs<K: Element>(graph: &RelationGraph<K>) -> Vec<Pair<K>> {
    graph
        .edges()
        .filter(|(x, y)| x == y)
        .map(|(x, y)| (x.clone(), y.clone()))
        .collect()
}

/// Mirrored edges `((x, y), (y, x))` with `x != y`, each mirror reported once.
pub fn symmetric_pairs<K: Element>(graph: &RelationGraph<K>) -> Vec<PairOfPairs<K>> {
    let mut out = Vec::new();
    for (x, y) in graph.edges() {
        if x == y || !graph.contains_edge(y, x) {
            continue;
        }
        let seen = out
            .iter()
            .any(|((a, b), _): &PairOfPairs<K>| a == y && b == x);
        if !seen {
            out.push(((x.clone(), y.clone()), (y.clone(), x.clone())));
        }
    }
    out
}

/// Edges `(x, y)`, `x != y`, whose mirror `(y, x)` is absent, paired with
/// that missing mirror.
pub fn not_symmetric_pairs<K: Element>(graph: &RelationGraph<K>) -> Vec<PairOfPairs<K>> {
    graph
        .edges()
        .filter(|(x, y)| x != y && !graph.contains_edge(y, x))
        .map(|(x, y)| ((x.clone(), y.clone()), (y.clone(), x.clone())))
        .collect()
}

/// Chains `(x, y)`, `(y, z)` whose shortcut `(x, z)` is present.
pub fn transitive_triples<K: Element>(graph: &RelationGraph<K>) -> Vec<Triple<K>> {
    chains(graph, true)
}

/// Chains `(x, y)`, `(y, z)` whose shortcut `(x, z)` is missing; the
/// missing pair is the third component.
pub fn not_transitive_triples<K: Element>(graph: &RelationGraph<K>) -> Vec<Triple<K>> {
    chains(graph, false)
}

fn chains<K: Element>(graph: &RelationGraph<K>, closed: bool) -> Vec<Triple<K>> {
    let mut out = Vec::new();
    for (x, y) in graph.edges() {
        let Ok(next) = graph.successors(y) else { continue };
        for z in next {
            if graph.contains_edge(x, z) == closed {
                out.push((
                    (x.clone(), y.clone()),
                    (y.clone(), z.clone()),
                    (x.clone(), z.clone()),
                ));
            }
        }
    }
    out
}
