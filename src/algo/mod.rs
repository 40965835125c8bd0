/*!
# Graph Algorithms

Priority-driven greedy algorithms on weighted undirected graphs.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to Prim's minimum spanning tree and Dijkstra's shortest paths.

Algorithms are provided as traits with blanket implementations for every graph that exposes
weighted adjacency lists, so they are available as methods on every representation.
*/

mod mst;
mod queue;
mod shortest_path;

use crate::prelude::*;

pub use mst::*;
pub use shortest_path::*;
