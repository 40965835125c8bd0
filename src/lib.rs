/*!
`wgraphs` is a small library of **undirected, weighted graphs** and priority-driven greedy
algorithms on them:
- Nodes are numbered `0` to `n - 1` and carry a general-purpose scalar value,
- every edge carries a non-negative, finite weight,
- graphs are undirected and contain neither self-loops nor multi-edges.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` and `WeightedEdge { u, v, weight }`
once a weight is attached.

Every undirected edge is stored twice (once per endpoint) and all mutators keep both copies
consistent.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArray`](crate::repr::AdjArray): adjacency lists in insertion order
- [`SparseAdjArray`](crate::repr::SparseAdjArray): adjacency lists stored inline for small degrees
- [`AdjMatrix`](crate::repr::AdjMatrix): dense `n x n` matrix with `O(1)` adjacency tests

# Design

Algorithms and generators are provided as configurable structs that one can alter to their needs
using the *Builder* pattern before running them on a provided graph.
The most commonly used functionality is also implemented via traits on the graph itself, making it
usable without configuring anything beforehand:

```
use wgraphs::{algo::*, prelude::*};

let graph = AdjArray::from_weighted_edges(
    4,
    [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0)]
        .map(|(u, v, w)| WeightedEdge::new(u, v, w)),
);
assert_eq!(graph.mst_cost(), 4.0);
assert_eq!(graph.shortest_path_lengths(0)[3], Some(4.0));
```

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`algo`] includes Prim's minimum spanning tree (`graph.prim_mst()`) and Dijkstra's shortest paths,
- [`gens`] includes a seedable random `G(n,p)` generator with uniformly distributed weights,
- [`io`] includes a reader and writer for the plain-text triple format,
- [`error`] includes the error type returned when reading graph files.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

# Logging

The library logs through the [`log`](https://crates.io/crates/log) facade and never installs a
logger itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}

pub use edge::*;
pub use node::*;
