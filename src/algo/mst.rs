/*!
Minimum spanning trees with Prim's algorithm.

The tree is grown from a root vertex (vertex `0` unless requested otherwise). Every vertex
outside the tree keeps its cheapest known *boundary edge* into the tree; the vertex with the
cheapest boundary edge is settled next. The priority queue is lazy: instead of decreasing keys,
a new entry is pushed whenever a boundary edge improves and outdated entries are skipped when
popped.

If the graph is disconnected, only the component of the root is spanned. The result reports
the cost of that component and marks all other vertices as unreached.
*/

use log::{debug, trace, warn};

use super::{queue::MinCostQueue, *};

/// The minimum spanning tree (of the root's component) computed by [`PrimMst`].
#[derive(Debug, Clone)]
pub struct MinimumSpanningTree {
    root: Node,
    total_cost: Weight,
    /// `parent_edges[v] = (parent, v, w)`
    parent_edges: Vec<Option<WeightedEdge>>,
    reached: Vec<bool>,
    /// Vertices in the order they were settled
    order: Vec<Node>,
}

impl MinimumSpanningTree {
    /// Tree of a graph without vertices
    fn empty() -> Self {
        Self {
            root: 0,
            total_cost: 0.0,
            parent_edges: Vec::new(),
            reached: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Sum of the weights of all tree edges
    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    /// The vertex the tree was grown from
    pub fn root(&self) -> Node {
        self.root
    }

    /// Returns the edge `(parent, v, w)` connecting `v` to its parent in the tree.
    /// Returns `None` for the root, for vertices outside the root's component and for
    /// out-of-range vertices; use [`MinimumSpanningTree::is_reached`] to tell them apart.
    pub fn parent_edge(&self, v: Node) -> Option<WeightedEdge> {
        self.parent_edges.get(v as usize).copied().flatten()
    }

    /// Returns *true* if `v` is part of the tree (ie. lies in the root's component)
    pub fn is_reached(&self, v: Node) -> bool {
        self.reached.get(v as usize).copied().unwrap_or(false)
    }

    /// Number of vertices in the tree
    pub fn reached_count(&self) -> NumNodes {
        self.order.len() as NumNodes
    }

    /// Returns *true* if the tree contains every vertex of the graph
    pub fn is_spanning(&self) -> bool {
        self.order.len() == self.reached.len()
    }

    /// Tree edges as `(parent, child, w)` in the order their children were settled
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.order
            .iter()
            .filter_map(|&v| self.parent_edges[v as usize])
    }
}

/// Prim's algorithm on a borrowed graph.
///
/// ```
/// use wgraphs::{algo::*, prelude::*};
///
/// let graph = AdjArray::from_weighted_edges(
///     3,
///     [WeightedEdge::new(0, 1, 2.0), WeightedEdge::new(1, 2, 1.0), WeightedEdge::new(0, 2, 4.0)],
/// );
/// let mst = PrimMst::new(&graph).root(2).run();
/// assert_eq!(mst.total_cost(), 3.0);
/// ```
pub struct PrimMst<'a, G> {
    graph: &'a G,
    root: Node,
}

impl<'a, G> PrimMst<'a, G>
where
    G: AdjacencyList,
{
    /// Prepares a run rooted at vertex `0`
    pub fn new(graph: &'a G) -> Self {
        Self { graph, root: 0 }
    }

    /// Sets the root of the tree
    pub fn root(mut self, root: Node) -> Self {
        self.root = root;
        self
    }

    /// Computes the tree.
    /// ** Panics if the root is not a vertex of the graph **
    pub fn run(self) -> MinimumSpanningTree {
        let graph = self.graph;
        let root = self.root;
        assert!(
            graph.contains_node(root),
            "Root {root} is not a vertex of a graph with {} vertices",
            graph.vertex_count()
        );

        let n = graph.len();
        let mut settled = vec![false; n];
        let mut boundary: Vec<Option<WeightedEdge>> = vec![None; n];
        let mut order = Vec::with_capacity(n);
        let mut total_cost = 0.0;

        let mut queue = MinCostQueue::new();
        queue.push(root, 0.0);

        while let Some((u, cost)) = queue.pop() {
            if settled[u as usize] {
                continue;
            }

            settled[u as usize] = true;
            total_cost += cost;
            order.push(u);
            trace!("Settled vertex {u} via {:?}", boundary[u as usize]);

            for (v, w) in graph.weighted_neighbors_of(u) {
                if settled[v as usize] {
                    continue;
                }

                // Keep the first-discovered edge among equally cheap ones
                if boundary[v as usize].is_none_or(|e| w < e.weight) {
                    boundary[v as usize] = Some(WeightedEdge::new(u, v, w));
                    queue.push(v, w);
                }
            }
        }

        let tree = MinimumSpanningTree {
            root,
            total_cost,
            parent_edges: boundary,
            reached: settled,
            order,
        };

        debug!(
            "Prim from {root} settled {} of {n} vertices with total cost {total_cost}",
            tree.reached_count()
        );
        if !tree.is_spanning() {
            warn!(
                "Graph is disconnected: {} vertices are not reachable from root {root}",
                n - tree.order.len()
            );
        }

        tree
    }
}

/// Minimum spanning trees on every graph with weighted adjacency lists
pub trait MinimumSpanning: AdjacencyList {
    /// Computes the minimum spanning tree rooted at vertex `0`.
    /// A graph without vertices yields an empty tree of cost `0`.
    fn prim_mst(&self) -> MinimumSpanningTree {
        if self.is_empty() {
            return MinimumSpanningTree::empty();
        }
        self.prim_mst_from(0)
    }

    /// Computes the minimum spanning tree of the component containing `root`.
    /// ** Panics if `root >= n` **
    fn prim_mst_from(&self, root: Node) -> MinimumSpanningTree {
        PrimMst::new(self).root(root).run()
    }

    /// Returns the cost of the minimum spanning tree rooted at vertex `0`
    fn mst_cost(&self) -> Weight {
        self.prim_mst().total_cost()
    }

    /// Computes the minimum spanning tree rooted at vertex `0`, stores the parent edge of every
    /// vertex in the graph (clearing previously stored ones) and returns the total cost.
    fn compute_mst(&mut self) -> Weight
    where
        Self: MstEdgeStore,
    {
        let mst = self.prim_mst();
        for u in self.vertices() {
            self.set_mst_edge(u, mst.parent_edge(u));
        }
        mst.total_cost()
    }
}

impl<G: AdjacencyList> MinimumSpanning for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// Brute-force reference: Kruskal with a naive union-find.
    /// Returns the cost of a minimum spanning forest and its number of edges.
    fn kruskal(n: NumNodes, edges: &[WeightedEdge]) -> (Weight, usize) {
        fn find(parent: &mut [Node], x: Node) -> Node {
            let p = parent[x as usize];
            if p == x {
                return x;
            }
            let root = find(parent, p);
            parent[x as usize] = root;
            root
        }

        let mut parent = (0..n).collect_vec();
        let mut cost = 0.0;
        let mut taken = 0;
        for e in edges
            .iter()
            .sorted_by(|a, b| a.weight.total_cmp(&b.weight))
        {
            let (ru, rv) = (find(&mut parent, e.u), find(&mut parent, e.v));
            if ru != rv {
                parent[ru as usize] = rv;
                cost += e.weight;
                taken += 1;
            }
        }
        (cost, taken)
    }

    fn example_graph<G: WeightedGraph>() -> G {
        let edges: [(Node, Node, Weight); 4] = [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0)];
        G::from_weighted_edges(4, edges)
    }

    fn example<G: WeightedGraph>() {
        let graph: G = example_graph();
        let mst = graph.prim_mst();

        assert_eq!(mst.total_cost(), 4.0);
        assert_eq!(mst.root(), 0);
        assert!(mst.is_spanning());
        assert_eq!(
            mst.edges().collect_vec(),
            vec![
                WeightedEdge::new(0, 1, 1.0),
                WeightedEdge::new(1, 2, 2.0),
                WeightedEdge::new(2, 3, 1.0)
            ]
        );
        assert_eq!(mst.parent_edge(0), None);
        assert!(mst.is_reached(0));
        assert_eq!(mst.parent_edge(3), Some(WeightedEdge::new(2, 3, 1.0)));
        assert_eq!(graph.mst_cost(), 4.0);
    }

    #[test]
    fn four_vertex_example() {
        example::<AdjArray>();
        example::<SparseAdjArray>();
        example::<AdjMatrix>();
    }

    fn matches_kruskal<G: WeightedGraph>(seed: u64) {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);

        for _ in 0..300 {
            let n: NumNodes = rng.random_range(1..=8);
            let p = rng.random_range(0.3..1.0);

            // Distinct weights make the minimum spanning tree unique
            let mut weights = (1..=(n * n)).map(|w| w as Weight).collect_vec();
            weights.shuffle(rng);

            let edges = (0..n)
                .tuple_combinations()
                .filter(|_| rng.random_bool(p))
                .zip(weights)
                .map(|((u, v), w)| WeightedEdge::new(u, v, w))
                .collect_vec();

            let graph = G::from_weighted_edges(n, edges.iter());
            let mst = graph.prim_mst();
            let (cost, taken) = kruskal(n, &edges);

            if taken + 1 == n as usize {
                assert!(mst.is_spanning());
                assert_eq!(mst.total_cost(), cost);
                assert_eq!(mst.edges().count(), taken);
            } else {
                assert!(!mst.is_spanning());
            }
        }
    }

    #[test]
    fn brute_force_agrees() {
        matches_kruskal::<AdjArray>(1);
        matches_kruskal::<SparseAdjArray>(2);
        matches_kruskal::<AdjMatrix>(3);
    }

    #[test]
    fn complete_graph_uniform_weight() {
        for n in 1..12 as NumNodes {
            let edges = (0..n)
                .tuple_combinations()
                .map(|(u, v)| WeightedEdge::new(u, v, 2.5))
                .collect_vec();

            let list = AdjArray::from_weighted_edges(n, edges.iter());
            let matrix = AdjMatrix::from_weighted_edges(n, edges.iter());

            assert_eq!(list.mst_cost(), (n - 1) as Weight * 2.5);
            assert_eq!(matrix.mst_cost(), (n - 1) as Weight * 2.5);
        }
    }

    #[test]
    fn disconnected_graph() {
        let _ = env_logger::builder().is_test(true).try_init();

        let edges: [(Node, Node, Weight); 3] = [(0, 1, 3.0), (1, 2, 1.0), (3, 4, 7.0)];
        let graph = AdjArray::from_weighted_edges(6, edges);

        let mst = graph.prim_mst();
        assert_eq!(mst.total_cost(), 4.0);
        assert_eq!(mst.reached_count(), 3);
        assert!(!mst.is_spanning());
        for v in 3..6 {
            assert!(!mst.is_reached(v));
            assert_eq!(mst.parent_edge(v), None);
        }
        assert!(mst.is_reached(2));

        let mst = graph.prim_mst_from(3);
        assert_eq!(mst.total_cost(), 7.0);
        assert_eq!(mst.root(), 3);
        assert_eq!(mst.edges().collect_vec(), vec![WeightedEdge::new(3, 4, 7.0)]);

        let mst = graph.prim_mst_from(5);
        assert_eq!(mst.total_cost(), 0.0);
        assert_eq!(mst.reached_count(), 1);
    }

    #[test]
    fn trivial_graphs() {
        let mst = AdjArray::new(0).prim_mst();
        assert_eq!(mst.total_cost(), 0.0);
        assert_eq!(mst.reached_count(), 0);
        assert!(mst.is_spanning());
        assert!(!mst.is_reached(0));

        let mst = AdjMatrix::new(1).prim_mst();
        assert_eq!(mst.total_cost(), 0.0);
        assert!(mst.is_spanning());
        assert_eq!(mst.edges().count(), 0);
    }

    #[test]
    fn equal_weights_keep_first_boundary_edge() {
        let edges: [(Node, Node, Weight); 3] = [(0, 1, 2.0), (0, 2, 1.0), (1, 2, 2.0)];

        for mst in [
            AdjArray::from_weighted_edges(3, edges).prim_mst(),
            AdjMatrix::from_weighted_edges(3, edges).prim_mst(),
        ] {
            assert_eq!(mst.total_cost(), 3.0);
            assert_eq!(mst.parent_edge(1), Some(WeightedEdge::new(0, 1, 2.0)));
            assert_eq!(mst.parent_edge(2), Some(WeightedEdge::new(0, 2, 1.0)));
        }
    }

    #[test]
    fn representations_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5, 20, 60] {
            let edges = WeightedGnp::new().nodes(n).prob(0.2).generate(rng);
            let list = SparseAdjArray::from_weighted_edges(n, edges.iter());
            let matrix = AdjMatrix::from_weighted_edges(n, edges.iter());

            let (a, b) = (list.prim_mst(), matrix.prim_mst());
            assert!((a.total_cost() - b.total_cost()).abs() < 1e-9);
            assert_eq!(a.reached_count(), b.reached_count());
        }
    }

    fn stores_back_references<G: WeightedGraph>() {
        let mut graph: G = example_graph();
        assert_eq!(graph.compute_mst(), 4.0);

        assert_eq!(graph.mst_edge(0), None);
        assert_eq!(graph.mst_edge(1), Some(WeightedEdge::new(0, 1, 1.0)));
        assert_eq!(graph.mst_edge(2), Some(WeightedEdge::new(1, 2, 2.0)));
        assert_eq!(graph.mst_edge(3), Some(WeightedEdge::new(2, 3, 1.0)));

        // Stale references are cleared by the next computation
        assert!(graph.delete_edge(1, 2));
        assert_eq!(graph.mst_edge(2), Some(WeightedEdge::new(1, 2, 2.0)));
        assert_eq!(graph.compute_mst(), 7.0);
        assert_eq!(graph.mst_edge(2), Some(WeightedEdge::new(3, 2, 1.0)));
        assert_eq!(graph.mst_edge(3), Some(WeightedEdge::new(0, 3, 5.0)));

        assert!(graph.delete_edge(0, 3));
        assert_eq!(graph.compute_mst(), 1.0);
        assert_eq!(graph.mst_edge(2), None);
        assert_eq!(graph.mst_edge(3), None);
    }

    #[test]
    fn compute_mst_stores_parent_edges() {
        stores_back_references::<AdjArray>();
        stores_back_references::<SparseAdjArray>();
        stores_back_references::<AdjMatrix>();
    }

    #[test]
    #[should_panic]
    fn root_out_of_range() {
        AdjArray::new(3).prim_mst_from(3);
    }
}
