use super::*;

/// A node of an [`AdjListGraph`]
#[derive(Clone, Debug, Default)]
pub struct Vertex<Nbs: Neighborhood> {
    value: NodeValue,
    nbs: Nbs,
    mst_edge: Option<WeightedEdge>,
}

impl<Nbs: Neighborhood> Vertex<Nbs> {
    /// Returns the general-purpose value of the node
    pub fn value(&self) -> NodeValue {
        self.value
    }

    /// Returns the adjacency list of the node
    pub fn neighborhood(&self) -> &Nbs {
        &self.nbs
    }

    /// Returns the edge to the parent of the node in the last computed MST
    pub fn mst_edge(&self) -> Option<WeightedEdge> {
        self.mst_edge
    }
}

/// An undirected weighted graph stored as adjacency lists
#[derive(Clone, Debug)]
pub struct AdjListGraph<Nbs: Neighborhood> {
    vertices: Vec<Vertex<Nbs>>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArray = AdjListGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArray = AdjListGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> AdjListGraph<Nbs> {
    /// Returns the vertex-struct of `x` or `None` if `x` is not a node of the graph
    pub fn vertex(&self, x: Node) -> Option<&Vertex<Nbs>> {
        self.vertices.get(x as usize)
    }

    /// Returns all vertex-structs indexed by node
    pub fn vertex_structs(&self) -> &[Vertex<Nbs>] {
        &self.vertices
    }

    /// Locates both stored copies of the edge `{x, y}`: the position of `y` in the list of `x`
    /// and the position of `x` in the list of `y`.
    /// Returns `None` if the edge does not exist, `x == y` or any node is out of range.
    fn locate_edge(&self, x: Node, y: Node) -> Option<(usize, usize)> {
        if x == y || !self.contains_node(x) || !self.contains_node(y) {
            return None;
        }

        let pos_x = self.vertices[x as usize].nbs.position_of(y)?;
        let pos_y = self.vertices[y as usize].nbs.position_of(x)?;
        Some((pos_x, pos_y))
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for AdjListGraph<Nbs> {
    fn vertex_count(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for AdjListGraph<Nbs> {
    fn edge_count(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for AdjListGraph<Nbs> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.vertices[u as usize].nbs.neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.vertices[u as usize].nbs.num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for AdjListGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.vertices[u as usize].nbs.has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> NodeValues for AdjListGraph<Nbs> {
    fn node_value(&self, x: Node) -> Option<NodeValue> {
        self.vertex(x).map(|v| v.value)
    }

    fn set_node_value(&mut self, x: Node, value: NodeValue) -> bool {
        match self.vertices.get_mut(x as usize) {
            Some(vertex) => {
                vertex.value = value;
                true
            }
            None => false,
        }
    }
}

impl<Nbs: Neighborhood> EdgeWeights for AdjListGraph<Nbs> {
    fn edge_value(&self, x: Node, y: Node) -> Option<Weight> {
        let (pos_x, _) = self.locate_edge(x, y)?;
        Some(self.vertices[x as usize].nbs.weight_at(pos_x))
    }

    fn set_edge_value(&mut self, x: Node, y: Node, weight: Weight) -> bool {
        if !is_valid_weight(weight) {
            return false;
        }

        // Both copies are located before either is written
        let Some((pos_x, pos_y)) = self.locate_edge(x, y) else {
            return false;
        };

        self.vertices[x as usize].nbs.set_weight_at(pos_x, weight);
        self.vertices[y as usize].nbs.set_weight_at(pos_y, weight);
        true
    }
}

impl<Nbs: Neighborhood> GraphNew for AdjListGraph<Nbs> {
    fn try_new(n: NumNodes) -> Option<Self> {
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(n as usize).ok()?;
        vertices.extend((0..n).map(|_| Vertex {
            value: DEFAULT_NODE_VALUE,
            nbs: Nbs::default(),
            mst_edge: None,
        }));

        Some(Self {
            vertices,
            num_edges: 0,
        })
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for AdjListGraph<Nbs> {
    fn add_edge(&mut self, x: Node, y: Node, weight: Weight) -> bool {
        if !is_valid_weight(weight) || !self.can_add_edge(x, y) {
            return false;
        }

        self.vertices[x as usize].nbs.add_neighbor(y, weight);
        self.vertices[y as usize].nbs.add_neighbor(x, weight);
        self.num_edges += 1;
        true
    }

    fn delete_edge(&mut self, x: Node, y: Node) -> bool {
        let Some((pos_x, pos_y)) = self.locate_edge(x, y) else {
            return false;
        };

        self.vertices[x as usize].nbs.remove_at(pos_x);
        self.vertices[y as usize].nbs.remove_at(pos_y);
        self.num_edges -= 1;
        true
    }
}

impl<Nbs: Neighborhood> MstEdgeStore for AdjListGraph<Nbs> {
    fn mst_edge(&self, x: Node) -> Option<WeightedEdge> {
        self.vertex(x)?.mst_edge
    }

    fn set_mst_edge(&mut self, x: Node, edge: Option<WeightedEdge>) {
        self.vertices[x as usize].mst_edge = edge;
    }
}

crate::testing::test_graph_ops!(adj_array_tests, AdjArray);
crate::testing::test_graph_ops!(sparse_adj_array_tests, SparseAdjArray);
