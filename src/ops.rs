use std::ops::Range;

use itertools::Itertools;
use rand::Rng;
use rand_distr::Distribution;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn vertex_count(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.vertex_count() as usize
    }

    /// Returns a range over V.
    /// The range does not borrow `self` and hence may be used where mutable references of `self`
    /// are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.vertex_count()
    }

    /// Returns *true* if `u` is a node of the graph, ie. `u < n`
    fn contains_node(&self, u: Node) -> bool {
        u < self.vertex_count()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder: GraphNodeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn edge_count(&self) -> NumEdges;

    /// Returns the fraction of all `n * (n - 1) / 2` possible edges present in the graph.
    /// Graphs with less than two nodes have density `0`.
    fn density(&self) -> f64 {
        let n = self.vertex_count() as f64;
        if n < 2.0 {
            return 0.0;
        }
        self.edge_count() as f64 / (n * (n - 1.0) / 2.0)
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex together with the weight of the
    /// connecting edge. The order is the order of the underlying adjacency structure.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the neighbors of `x` in adjacency order.
    /// Returns an empty list if `x` is not a node of the graph.
    fn neighbors(&self, x: Node) -> Vec<Node> {
        if !self.contains_node(x) {
            return Vec::new();
        }
        self.neighbors_of(x).collect_vec()
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over the edges incident to `u` as `WeightedEdge { u, v: neighbor, .. }`.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
            .filter(move |e| !only_normalized || e.u <= e.v)
    }

    /// Returns an iterator over all undirected edges in the graph, each reported exactly once
    /// in normalized form.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u, true))
    }

    /// Returns all undirected edges sorted by their (normalized) endpoints
    fn ordered_edges(&self) -> Vec<WeightedEdge> {
        let mut edges = self.edges().collect_vec();
        edges.sort_by_key(|e| e.edge());
        edges
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `{u, v}` exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if `x` and `y` are distinct nodes of the graph connected by an edge.
    /// Never panics: out-of-range nodes and `x == y` simply yield *false*.
    fn is_adjacent(&self, x: Node, y: Node) -> bool {
        x != y && self.contains_node(x) && self.contains_node(y) && self.has_edge(x, y)
    }

    /// Returns *true* if an edge `{x, y}` could be inserted without violating the invariants
    /// of the graph (no self-loops, no multi-edges, both nodes exist).
    fn can_add_edge(&self, x: Node, y: Node) -> bool {
        x != y && self.contains_node(x) && self.contains_node(y) && !self.has_edge(x, y)
    }
}

/// Getters/Setters for the per-node scalar
pub trait NodeValues: GraphNodeOrder {
    /// Returns the value of node `x` or `None` if `x` is not a node of the graph
    fn node_value(&self, x: Node) -> Option<NodeValue>;

    /// Sets the value of node `x`.
    /// Returns *false* (and does nothing) if `x` is not a node of the graph.
    fn set_node_value(&mut self, x: Node, value: NodeValue) -> bool;
}

/// Getters/Setters for edge weights
pub trait EdgeWeights: AdjacencyTest {
    /// Returns the weight of the edge `{x, y}`.
    /// Returns `None` if the edge does not exist (including out-of-range nodes and `x == y`).
    fn edge_value(&self, x: Node, y: Node) -> Option<Weight>;

    /// Sets the weight of the edge `{x, y}` in both of its stored copies.
    /// Returns *false* (and does nothing) if the edge does not exist or `weight` is negative or
    /// not finite.
    fn set_edge_value(&mut self, x: Node, y: Node, weight: Weight) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with n singleton nodes
    /// ** Panics if the graph can not be allocated **
    fn new(n: NumNodes) -> Self {
        Self::try_new(n).unwrap_or_else(|| panic!("Cannot allocate a graph with {n} nodes"))
    }

    /// Creates an empty graph with n singleton nodes.
    /// Returns `None` if the memory for the graph can not be allocated.
    fn try_new(n: NumNodes) -> Option<Self>;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew + AdjacencyTest {
    /// Adds the edge `{x, y}` with the given weight to the graph.
    /// Returns *true* exactly if the edge was inserted, ie. `x != y`, both nodes exist, the edge
    /// was not present previously and `weight` is a valid (non-negative, finite) weight.
    /// Otherwise the graph is left unchanged.
    fn add_edge(&mut self, x: Node, y: Node, weight: Weight) -> bool;

    /// Like [`GraphEdgeEditing::add_edge`] but draws the weight from `distr`.
    /// No randomness is consumed if the edge can not be inserted.
    fn add_edge_sampled<R, D>(&mut self, x: Node, y: Node, rng: &mut R, distr: &D) -> bool
    where
        R: Rng + ?Sized,
        D: Distribution<Weight>,
        Self: Sized,
    {
        if !self.can_add_edge(x, y) {
            return false;
        }
        let weight = distr.sample(rng);
        self.add_edge(x, y, weight)
    }

    /// Tries to add all edges in the collection and returns the number of inserted edges
    fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> NumEdges
    where
        Self: Sized,
    {
        edges
            .into_iter()
            .map(|e| e.into())
            .filter(|e| self.add_edge(e.u, e.v, e.weight))
            .count() as NumEdges
    }

    /// Removes the edge `{x, y}` from the graph.
    /// Returns *true* exactly if the edge existed (and was removed).
    fn delete_edge(&mut self, x: Node, y: Node) -> bool;
}

/// A super trait for creating a graph from scratch from a set of weighted edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over weighted edges.
    /// Edges violating the invariants of the graph (loops, duplicates, invalid weights or nodes)
    /// are skipped.
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Graphs that remember, for every node, the edge connecting it to its parent in the last
/// computed minimum spanning tree.
pub trait MstEdgeStore: GraphNodeOrder {
    /// Returns the stored MST-edge of `x` as `WeightedEdge { u: parent, v: x, .. }`.
    /// Returns `None` for the root, for nodes not reached by the MST, before any MST was computed
    /// and for out-of-range nodes.
    fn mst_edge(&self, x: Node) -> Option<WeightedEdge>;

    /// Overwrites the stored MST-edge of `x`.
    /// ** Panics if `x >= n` **
    fn set_mst_edge(&mut self, x: Node, edge: Option<WeightedEdge>);
}

/// Every weighted graph representation in this crate implements this trait
pub trait WeightedGraph:
    AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + EdgeWeights + NodeValues + MstEdgeStore
{
}

impl<G> WeightedGraph for G where
    G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + EdgeWeights + NodeValues + MstEdgeStore
{
}
