use ordermap::OrderMap;
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::fmt;
use std::hash::Hash;

use crate::error::{RelationError, Result};

/// Anything usable as a domain element: only equality and hashing are needed.
pub trait Element: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> Element for T {}

/// An ordered pair `(x, y)` meaning "x relates to y".
pub type Pair<K> = (K, K);

#[derive(Debug, Clone)]
pub struct NodeAttr<K> {
    pub id: K,
    pub label: Option<String>,
}

/// Presentation-only edge data. Never consulted by any algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeAttr {
    pub color: Option<String>,
}

impl EdgeAttr {
    pub fn colored(color: impl Into<String>) -> Self {
        Self { color: Some(color.into()) }
    }
}

impl<K: fmt::Display> fmt::Display for NodeAttr<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.write_str(label),
            None => write!(f, "{}", self.id),
        }
    }
}

impl fmt::Display for EdgeAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color.as_deref().unwrap_or(""))
    }
}

/// A finite relation stored as a directed graph: nodes are the domain,
/// edges are the related pairs.
#[derive(Debug, Clone)]
pub struct RelationGraph<K> {
    /// Stable order-of-appearance: element -> node
    idx: OrderMap<K, NodeIndex>,
    graph: DiGraph<NodeAttr<K>, EdgeAttr>,
}

impl<K: Element> Default for RelationGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Element> RelationGraph<K> {
    pub fn new() -> Self {
        Self { idx: OrderMap::new(), graph: DiGraph::new() }
    }

    /// Build a graph from a domain and a relation over it.
    pub fn from_parts<D, R>(domain: D, relation: R) -> Result<Self>
    where
        D: IntoIterator<Item = K>,
        R: IntoIterator<Item = Pair<K>>,
    {
        let mut g = Self::new();
        for k in domain {
            g.add_node(k, None);
        }
        for (x, y) in relation {
            g.add_edge(&x, &y, EdgeAttr::default())?;
        }
        Ok(g)
    }

    /// Add an element; adding an existing one returns its node unchanged.
    pub fn add_node(&mut self, id: K, label: Option<String>) -> NodeIndex {
        if let Some(&ix) = self.idx.get(&id) {
            return ix;
        }
        let ix = self.graph.add_node(NodeAttr { id: id.clone(), label });
        self.idx.insert(id, ix);
        ix
    }

    /// Relate `from` to `to`. Duplicate pairs collapse; the latest attribute wins.
    pub fn add_edge(&mut self, from: &K, to: &K, attr: EdgeAttr) -> Result<()> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.graph.update_edge(u, v, attr);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Elements in order of appearance.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.idx.keys()
    }

    pub fn label(&self, id: &K) -> Option<&str> {
        let ix = self.idx.get(id)?;
        self.graph[*ix].label.as_deref()
    }

    /// Related pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.graph
            .edge_references()
            .map(move |e| (&self.graph[e.source()].id, &self.graph[e.target()].id))
    }

    pub fn contains(&self, id: &K) -> bool {
        self.idx.contains_key(id)
    }

    pub fn contains_edge(&self, from: &K, to: &K) -> bool {
        match (self.idx.get(from), self.idx.get(to)) {
            (Some(&u), Some(&v)) => self.graph.contains_edge(u, v),
            _ => false,
        }
    }

    pub fn successors(&self, id: &K) -> Result<Vec<&K>> {
        self.neighbors(id, Direction::Outgoing)
    }

    pub fn predecessors(&self, id: &K) -> Result<Vec<&K>> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: &K, dir: Direction) -> Result<Vec<&K>> {
        let ix = self.index_of(id)?;
        let mut out: Vec<&K> = self
            .graph
            .neighbors_directed(ix, dir)
            .map(|n| &self.graph[n].id)
            .collect();
        // petgraph walks adjacency lists newest-first
        out.reverse();
        Ok(out)
    }

    /// Whether `to` can be reached from `from` along zero or more edges.
    pub fn reaches(&self, from: &K, to: &K) -> Result<bool> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        Ok(has_path_connecting(&self.graph, u, v, None))
    }

    pub(crate) fn index_of(&self, id: &K) -> Result<NodeIndex> {
        self.idx.get(id).copied().ok_or_else(|| RelationError::unknown(id))
    }

    pub(crate) fn key(&self, ix: NodeIndex) -> &K {
        &self.graph[ix].id
    }

    pub(crate) fn inner(&self) -> &DiGraph<NodeAttr<K>, EdgeAttr> {
        &self.graph
    }
}
