/*!
# Graph Representations

Two storage backends for weighted undirected graphs:

- [`AdjListGraph`]: an arena of [`Vertex`]-structs indexed by node, each holding its value, its
  adjacency list of `(neighbor, weight)`-pairs and its MST back-reference.
  The adjacency list itself is generic over a [`Neighborhood`]:
  - [`AdjArray`] uses a `Vec`,
  - [`SparseAdjArray`] uses a `SmallVec` and avoids allocations for low-degree nodes.
- [`AdjMatrix`]: two dense `n x n` matrices (connectivity and weights).

In both, each undirected edge is stored twice (once per endpoint). All mutators go through a
single private update function per representation that touches both copies.
*/

use crate::{ops::*, *};

mod adj_list;
mod matrix;
mod neighborhood;

pub use adj_list::*;
pub use matrix::*;
pub use neighborhood::*;
