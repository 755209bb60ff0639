use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::error::{RelationError, Result};
use crate::graph::{EdgeAttr, Element, Pair, RelationGraph};
use crate::pairs::unordered_pairs;

/// Skeleton of `graph` without self-loops; node `i` here is node `i` there.
fn skeleton<K: Element>(graph: &RelationGraph<K>) -> DiGraph<(), ()> {
    let mut g: DiGraph<(), ()> = DiGraph::with_capacity(graph.len(), graph.edge_count());
    for _ in 0..graph.len() {
        g.add_node(());
    }
    for e in graph.inner().edge_references() {
        if e.source() != e.target() {
            g.add_edge(e.source(), e.target(), ());
        }
    }
    g
}

/// Topological order of the skeleton, or the element a cycle runs through.
fn topo<K: Element>(graph: &RelationGraph<K>, g: &DiGraph<(), ()>) -> Result<Vec<NodeIndex>> {
    toposort(g, None).map_err(|cycle| RelationError::not_an_order(graph.key(cycle.node_id())))
}

/// Reduce an order to its covering relation (Hasse diagram).
///
/// Self-loops are dropped, and an edge `x -> y` is kept only if `y` is no
/// longer reachable from `x` once that edge is removed. The result is a
/// fresh graph with the same domain, labels included.
///
/// Fails with [`RelationError::NotAnOrder`] when distinct elements form a
/// cycle, since such a relation has no unique reduction.
pub fn to_hasse<K: Element>(graph: &RelationGraph<K>) -> Result<RelationGraph<K>> {
    let g = skeleton(graph);
    topo(graph, &g)?;
    let mut hasse = RelationGraph::new();
    for k in graph.nodes() {
        hasse.add_node(k.clone(), graph.label(k).map(str::to_owned));
    }
    for e in g.edge_references() {
        let (u, v) = (e.source(), e.target());
        // Temporarily drop u->v and see whether another path still gets there.
        let mut g2 = g.clone();
        if let Some(eid) = g2.find_edge(u, v) {
            g2.remove_edge(eid);
        }
        if !has_path_connecting(&g2, u, v, None) {
            hasse.add_edge(graph.key(u), graph.key(v), EdgeAttr::default())?;
        }
    }
    debug!(
        before = graph.edge_count(),
        after = hasse.edge_count(),
        "reduced to covering relation"
    );
    Ok(hasse)
}

/// Fails with [`RelationError::NotAnOrder`] if distinct elements form a cycle.
pub(crate) fn ensure_acyclic<K: Element>(graph: &RelationGraph<K>) -> Result<()> {
    topo(graph, &skeleton(graph)).map(drop)
}

/// One deterministic linear extension of the order.
pub fn linear_extension<K: Element>(graph: &RelationGraph<K>) -> Result<Vec<K>> {
    let g = skeleton(graph);
    let order = topo(graph, &g)?;
    Ok(order.into_iter().map(|ix| graph.key(ix).clone()).collect())
}

/// Unordered pairs related in neither direction, transitively.
pub fn incomparable_pairs<K: Element>(graph: &RelationGraph<K>) -> Vec<Pair<K>> {
    let g = skeleton(graph);
    let n = g.node_count();
    let nodes: Vec<NodeIndex> = (0..n).map(NodeIndex::new).collect();
    unordered_pairs(&nodes)
        .filter(|&(&i, &j)| {
            !has_path_connecting(&g, i, j, None) && !has_path_connecting(&g, j, i, None)
        })
        .map(|(&i, &j)| (graph.key(i).clone(), graph.key(j).clone()))
        .collect()
}
