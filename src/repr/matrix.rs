use super::*;

/// An undirected weighted graph stored as two dense `n x n` matrices: one for connectivity and one
/// for edge weights. Both are kept symmetric.
///
/// Adjacency tests are `O(1)`; iterating the neighbors of a node is `O(n)` and yields them in
/// ascending order.
#[derive(Clone, Debug)]
pub struct AdjMatrix {
    n: NumNodes,
    connected: Vec<bool>,
    weights: Vec<Weight>,
    values: Vec<NodeValue>,
    mst_edges: Vec<Option<WeightedEdge>>,
    num_edges: NumEdges,
}

impl AdjMatrix {
    /// Index of cell `(u, v)` in the row-major matrices
    #[inline]
    fn cell(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }

    /// Writes both cells of the pair `{x, y}`: `Some(w)` connects them with weight `w`,
    /// `None` disconnects them. All mutations of the matrices go through here.
    fn write_pair(&mut self, x: Node, y: Node, weight: Option<Weight>) {
        let (xy, yx) = (self.cell(x, y), self.cell(y, x));
        let (connected, weight) = match weight {
            Some(w) => (true, w),
            None => (false, 0.0),
        };

        self.connected[xy] = connected;
        self.connected[yx] = connected;
        self.weights[xy] = weight;
        self.weights[yx] = weight;
    }

    /// Returns the number of `true` cells in the connectivity matrix (twice the number of edges)
    pub fn connectivity_cells(&self) -> usize {
        self.connected.iter().filter(|&&c| c).count()
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn vertex_count(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn edge_count(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        assert!(u < self.n, "Node {u} out of range");
        let row = self.cell(u, 0);
        (0..self.n).filter_map(move |v| {
            let idx = row + v as usize;
            self.connected[idx].then(|| (v, self.weights[idx]))
        })
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(u < self.n && v < self.n, "Edge ({u},{v}) out of range");
        self.connected[self.cell(u, v)]
    }
}

impl NodeValues for AdjMatrix {
    fn node_value(&self, x: Node) -> Option<NodeValue> {
        self.values.get(x as usize).copied()
    }

    fn set_node_value(&mut self, x: Node, value: NodeValue) -> bool {
        match self.values.get_mut(x as usize) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }
}

impl EdgeWeights for AdjMatrix {
    fn edge_value(&self, x: Node, y: Node) -> Option<Weight> {
        self.is_adjacent(x, y).then(|| self.weights[self.cell(x, y)])
    }

    fn set_edge_value(&mut self, x: Node, y: Node, weight: Weight) -> bool {
        if !is_valid_weight(weight) || !self.is_adjacent(x, y) {
            return false;
        }

        self.write_pair(x, y, Some(weight));
        true
    }
}

impl GraphNew for AdjMatrix {
    fn try_new(n: NumNodes) -> Option<Self> {
        let cells = (n as usize).checked_mul(n as usize)?;
        Some(Self {
            n,
            connected: try_filled(cells, false)?,
            weights: try_filled(cells, 0.0)?,
            values: try_filled(n as usize, DEFAULT_NODE_VALUE)?,
            mst_edges: try_filled(n as usize, None)?,
            num_edges: 0,
        })
    }
}

/// Allocates a vector of `len` copies of `value` or returns `None` if the allocation fails
fn try_filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len).ok()?;
    vec.resize(len, value);
    Some(vec)
}

impl GraphEdgeEditing for AdjMatrix {
    fn add_edge(&mut self, x: Node, y: Node, weight: Weight) -> bool {
        if !is_valid_weight(weight) || !self.can_add_edge(x, y) {
            return false;
        }

        self.write_pair(x, y, Some(weight));
        self.num_edges += 1;
        true
    }

    fn delete_edge(&mut self, x: Node, y: Node) -> bool {
        if !self.is_adjacent(x, y) {
            return false;
        }

        self.write_pair(x, y, None);
        self.num_edges -= 1;
        true
    }
}

impl MstEdgeStore for AdjMatrix {
    fn mst_edge(&self, x: Node) -> Option<WeightedEdge> {
        self.mst_edges.get(x as usize).copied().flatten()
    }

    fn set_mst_edge(&mut self, x: Node, edge: Option<WeightedEdge>) {
        self.mst_edges[x as usize] = edge;
    }
}

crate::testing::test_graph_ops!(adj_matrix_tests, AdjMatrix);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_stays_symmetric() {
        let mut graph = AdjMatrix::new(5);
        assert!(graph.add_edge(3, 1, 4.0));
        assert!(graph.add_edge(0, 4, 2.0));
        assert!(graph.set_edge_value(1, 3, 6.0));

        for u in graph.vertices() {
            for v in graph.vertices() {
                assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                assert_eq!(graph.edge_value(u, v), graph.edge_value(v, u));
            }
        }

        assert_eq!(graph.connectivity_cells(), 2 * graph.edge_count() as usize);
        assert!(graph.delete_edge(1, 3));
        assert_eq!(graph.connectivity_cells(), 2);
    }

    #[test]
    fn oversized_matrix_is_not_allocated() {
        assert!(AdjMatrix::try_new(4_000_000_000).is_none());
        assert!(AdjMatrix::try_new(Node::MAX).is_none());

        let graph = AdjMatrix::try_new(4).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.connectivity_cells(), 0);
    }

    #[test]
    fn neighbors_are_ascending() {
        let mut graph = AdjMatrix::new(6);
        for v in [4, 1, 5, 2] {
            graph.add_edge(3, v, 1.0);
        }
        assert_eq!(graph.neighbors(3), vec![1, 2, 4, 5]);
        assert_eq!(graph.degree_of(3), 4);
    }
}
