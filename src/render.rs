//! Drawing relations for display.
//!
//! These helpers only ever touch a graph built for rendering; analysis
//! graphs are read, never decorated.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use std::fmt::Display;

use crate::error::Result;
use crate::graph::{EdgeAttr, Element, NodeAttr, Pair, RelationGraph};

type Inner<K> = DiGraph<NodeAttr<K>, EdgeAttr>;

pub const RELATION_COLOR: &str = "blue";

/// A render graph holding `domain` and `images`, each labelled by itself.
pub fn draw_graph<K, D, I>(domain: D, images: I) -> RelationGraph<K>
where
    K: Element + Display,
    D: IntoIterator<Item = K>,
    I: IntoIterator<Item = K>,
{
    let mut g = RelationGraph::new();
    for k in domain.into_iter().chain(images) {
        let label = k.to_string();
        g.add_node(k, Some(label));
    }
    g
}

/// Add `relations` to a render graph as coloured edges, reversed if `inverse`.
pub fn draw_relation<'a, K, R>(graph: &mut RelationGraph<K>, relations: R, inverse: bool) -> Result<()>
where
    K: Element + 'a,
    R: IntoIterator<Item = &'a Pair<K>>,
{
    for (x, y) in relations {
        let (from, to) = if inverse { (y, x) } else { (x, y) };
        graph.add_edge(from, to, EdgeAttr::colored(RELATION_COLOR))?;
    }
    Ok(())
}

/// Graphviz DOT for any relation graph.
pub fn to_dot<K: Element + Display>(graph: &RelationGraph<K>) -> String {
    let edge_attrs = |_: &Inner<K>, edge: EdgeReference<'_, EdgeAttr>| match &edge.weight().color {
        Some(color) => format!("color = \"{color}\""),
        None => String::new(),
    };
    let node_attrs = |_: &Inner<K>, _: (NodeIndex, &NodeAttr<K>)| String::new();
    format!(
        "{}",
        Dot::with_attr_getters(graph.inner(), &[Config::EdgeNoLabel], &edge_attrs, &node_attrs)
    )
}
