/*!
Single-source shortest paths with Dijkstra's algorithm.

Uses the same lazy priority queue as Prim's algorithm: a vertex is pushed again whenever its
tentative distance improves and outdated entries are skipped. Since all edge weights are
non-negative, the first time a vertex is popped its distance is final.
*/

use log::debug;

use super::{queue::MinCostQueue, *};

/// Distances and shortest-path predecessors from a single source computed by [`Dijkstra`]
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: Node,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<Node>>,
}

impl ShortestPathTree {
    /// The vertex all paths start at
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the length of a shortest path from the source to `v`
    /// or `None` if `v` is unreachable (or out of range)
    pub fn distance_to(&self, v: Node) -> Option<Weight> {
        self.distances.get(v as usize).copied().flatten()
    }

    /// Returns the vertices of a shortest path `source -> .. -> target` or `None` if `target`
    /// is unreachable (or out of range)
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut u = target;
        while let Some(p) = self.predecessors[u as usize] {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }

    /// Consumes the tree and returns the distance of every vertex
    pub fn into_distances(self) -> Vec<Option<Weight>> {
        self.distances
    }

    /// Mean distance from the source to all other reachable vertices.
    /// Returns `None` if no vertex other than the source is reachable.
    pub fn average_distance(&self) -> Option<Weight> {
        let (sum, count) = self
            .distances
            .iter()
            .enumerate()
            .filter(|&(v, _)| v != self.source as usize)
            .filter_map(|(_, d)| *d)
            .fold((0.0, 0usize), |(sum, count), d| (sum + d, count + 1));

        (count > 0).then(|| sum / count as Weight)
    }
}

/// Dijkstra's algorithm on a borrowed graph
pub struct Dijkstra<'a, G> {
    graph: &'a G,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes all shortest paths starting at `source`.
    /// ** Panics if `source >= n` **
    pub fn run(&self, source: Node) -> ShortestPathTree {
        let graph = self.graph;
        assert!(
            graph.contains_node(source),
            "Source {source} is not a vertex of a graph with {} vertices",
            graph.vertex_count()
        );

        let n = graph.len();
        let mut settled = vec![false; n];
        let mut distances: Vec<Option<Weight>> = vec![None; n];
        let mut predecessors: Vec<Option<Node>> = vec![None; n];

        let mut queue = MinCostQueue::new();
        distances[source as usize] = Some(0.0);
        queue.push(source, 0.0);

        let mut num_settled = 0;
        while let Some((u, dist)) = queue.pop() {
            if settled[u as usize] {
                continue;
            }
            settled[u as usize] = true;
            num_settled += 1;

            for (v, w) in graph.weighted_neighbors_of(u) {
                let candidate = dist + w;
                if !settled[v as usize] && distances[v as usize].is_none_or(|d| candidate < d) {
                    distances[v as usize] = Some(candidate);
                    predecessors[v as usize] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        debug!("Dijkstra from {source} reached {num_settled} of {n} vertices");

        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }
}

/// Shortest paths on every graph with weighted adjacency lists
pub trait ShortestPaths: AdjacencyList {
    /// Computes distances and predecessors of shortest paths starting at `source`.
    /// ** Panics if `source >= n` **
    fn shortest_path_tree(&self, source: Node) -> ShortestPathTree {
        Dijkstra::new(self).run(source)
    }

    /// Returns the length of a shortest path from `source` to every vertex
    /// (`None` for unreachable vertices).
    /// ** Panics if `source >= n` **
    fn shortest_path_lengths(&self, source: Node) -> Vec<Option<Weight>> {
        self.shortest_path_tree(source).into_distances()
    }

    /// Average length of the shortest paths from `source` to all other reachable vertices.
    /// Returns `None` if no other vertex is reachable.
    /// ** Panics if `source >= n` **
    fn average_path_length(&self, source: Node) -> Option<Weight> {
        self.shortest_path_tree(source).average_distance()
    }
}

impl<G: AdjacencyList> ShortestPaths for G {}
