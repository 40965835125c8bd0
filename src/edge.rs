use std::fmt::{Debug, Display};

use crate::Node;

/// An undirected edge is defined by two nodes/endpoints.
/// `Edge(u, v)` and `Edge(v, u)` describe the same edge; use [`Edge::normalized`] to compare.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// The weight (e.g. length or cost) of an edge. Valid weights are finite and non-negative.
pub type Weight = f64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge {
            u: self.0,
            v: self.1,
            weight,
        }
    }

    /// Simple bijection from `0..(n choose 2)` to all possible normalized edges of `n` nodes
    /// without self-loops.
    ///
    /// The bijecton works by assigning each node the next `(n - 1)/2` neighbors modulo `n`
    /// (up to rounding) and normalizing the resulting edge
    pub fn from_u64_undir(mut x: u64, n: u64) -> Self {
        debug_assert!(x < n * (n - 1) / 2);

        let mut num_neighbors = (n - 1) / 2;
        // Easy case where `n - 1` is even and no corner cases exist
        if n & 1 == 1 {
            let u = x / num_neighbors;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        // Harder case where `n - 1` is odd and the number of checked neighbors alternates
        } else {
            let half_n = n / 2;
            let lower_half = num_neighbors * half_n;

            // x is in the half where we only enumerate `floor((n - 1) / 2)` neighbors
            if x < lower_half {
                let u = x / num_neighbors;
                let v = (u + 1 + (x % num_neighbors)) % n;

                // Edges are guaranteed to be normalized in the lower half
                return Edge(u as Node, v as Node);
            }

            // x is the upper half where we enumerate `ceil((n - 1) / 2)` neighbors
            x -= lower_half;
            num_neighbors += 1;

            let u = (x / num_neighbors) + half_n;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<WeightedEdge> for Edge {
    fn from(value: WeightedEdge) -> Self {
        Edge(value.u, value.v)
    }
}

/// An edge together with its weight.
///
/// This is the value-type handed out by graphs and algorithms; graphs themselves store the weight
/// next to each of the two adjacency entries of an edge.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    /// First endpoint
    pub u: Node,
    /// Second endpoint
    pub v: Node,
    /// Weight of the edge
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates a new weighted edge
    pub const fn new(u: Node, v: Node, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// Returns the unweighted edge
    pub fn edge(&self) -> Edge {
        Edge(self.u, self.v)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Self::new(self.u.min(self.v), self.u.max(self.v), self.weight)
    }

    /// Given one endpoint, returns the other one.
    /// ** Panics (in debug builds) if `x` is no endpoint **
    pub fn opposite(&self, x: Node) -> Node {
        debug_assert!(x == self.u || x == self.v);
        if x == self.u { self.v } else { self.u }
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}; {})", self.u, self.v, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

/// Returns *true* if `w` can be stored as an edge weight
pub fn is_valid_weight(w: Weight) -> bool {
    w.is_finite() && w >= 0.0
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn from_u64_undir_is_bijective() {
        for n in 2..20u64 {
            let edges = (0..n * (n - 1) / 2)
                .map(|x| Edge::from_u64_undir(x, n))
                .collect_vec();

            assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
            assert!(edges.iter().all(|e| (e.1 as u64) < n));
            assert_eq!(edges.iter().unique().count(), edges.len());
        }
    }

    #[test]
    fn weighted_edge_helpers() {
        let e = WeightedEdge::new(5, 2, 3.5);
        assert_eq!(e.normalized(), WeightedEdge::new(2, 5, 3.5));
        assert_eq!(e.opposite(5), 2);
        assert_eq!(e.opposite(2), 5);
        assert_eq!(e.edge(), Edge(5, 2));
        assert_eq!(Edge(1, 4).with_weight(2.0), WeightedEdge::new(1, 4, 2.0));
        assert_eq!(format!("{e}"), "(5,2; 3.5)");
    }

    #[test]
    fn weight_validity() {
        assert!(is_valid_weight(0.0));
        assert!(is_valid_weight(7.25));
        assert!(!is_valid_weight(-1.0));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
    }
}
