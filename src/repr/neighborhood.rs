use std::{iter::Copied, slice::Iter};

use smallvec::{Array, SmallVec};

use super::*;

/// A single adjacency entry: the neighbor and the weight of the connecting edge
pub type Neighbor = (Node, Weight);

/// Trait for methods on the (weighted) Neighborhood of a specified Node.
///
/// Entries are kept in insertion order; removing an entry preserves the order of the others.
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Neighbor> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors (and edge weights) in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns the position of `v` in the Neighborhood if present (linear scan)
    fn position_of(&self, v: Node) -> Option<usize>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.position_of(v).is_some()
    }

    /// Returns the weight stored at position `pos`.
    /// ** Panics if `pos >= self.num_of_neighbors()` **
    fn weight_at(&self, pos: usize) -> Weight;

    /// Overwrites the weight stored at position `pos`.
    /// ** Panics if `pos >= self.num_of_neighbors()` **
    fn set_weight_at(&mut self, pos: usize, weight: Weight);

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    fn add_neighbor(&mut self, v: Node, weight: Weight);

    /// Removes the entry at position `pos` while keeping the order of all other entries.
    /// ** Panics if `pos >= self.num_of_neighbors()` **
    fn remove_at(&mut self, pos: usize) -> Neighbor;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Both backends are thin wrappers around a vector-like container of `Neighbor`s
macro_rules! impl_vec_neighborhood {
    ($struct:ty $(, const $n:ident)?) => {
        impl$(<const $n: usize>)? Neighborhood for $struct
        $(where [Neighbor; $n]: Array<Item = Neighbor>)?
        {
            fn num_of_neighbors(&self) -> NumNodes {
                self.0.len() as NumNodes
            }

            type NeighborhoodIter<'a>
                = Copied<Iter<'a, Neighbor>>
            where
                Self: 'a;

            fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
                self.0.iter().copied()
            }

            fn position_of(&self, v: Node) -> Option<usize> {
                self.0.iter().position(|&(x, _)| x == v)
            }

            fn weight_at(&self, pos: usize) -> Weight {
                self.0[pos].1
            }

            fn set_weight_at(&mut self, pos: usize, weight: Weight) {
                self.0[pos].1 = weight;
            }

            fn add_neighbor(&mut self, v: Node, weight: Weight) {
                self.0.push((v, weight));
            }

            fn remove_at(&mut self, pos: usize) -> Neighbor {
                self.0.remove(pos)
            }

            fn clear(&mut self) {
                self.0.clear();
            }
        }
    };
}

/// Basic Neighborhood-Impl. using `Vec<Neighbor>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Neighbor>);

impl_vec_neighborhood!(ArrNeighborhood);

/// Like `ArrNeighborhood` but uses `SmallVec<[Neighbor; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Neighbor; N]>)
where
    [Neighbor; N]: Array<Item = Neighbor>;

impl_vec_neighborhood!(SparseNeighborhood<N>, const N);
