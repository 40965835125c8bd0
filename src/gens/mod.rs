/*!
# Graph Generators

Random weighted graphs are produced by configurable generators using a builder pattern:

1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).weights(1.0..10.0)`).
3. Generate weighted edges via `generate()` or `stream()`.

Every generator takes the random source as an explicit argument. There is no global random
state, hence seeding the source (e.g. `Pcg64Mcg::seed_from_u64`) makes generation reproducible.

In addition, the [`RandomGraph`] trait directly builds a graph of any representation:

```
use rand::SeedableRng;
use wgraphs::{gens::*, prelude::*};

let mut rng = rand::rngs::StdRng::seed_from_u64(1);
let graph = AdjArray::gnp(&mut rng, 10, 0.5);
assert_eq!(graph.vertex_count(), 10);
```
*/

use std::ops::Range;

use log::debug;
use rand::Rng;

use crate::prelude::*;

mod gnp;

pub use gnp::*;

/// Edge weights are drawn uniformly from this range unless configured otherwise
pub const DEFAULT_WEIGHT_RANGE: Range<Weight> = 1.0..10.0;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random weighted edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random weighted edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated weighted edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph with weights drawn uniformly from [`DEFAULT_WEIGHT_RANGE`].
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::gnp_weighted(rng, n, p, DEFAULT_WEIGHT_RANGE)
    }

    /// Creates a random `G(n,p)` graph with weights drawn uniformly from `weights`.
    fn gnp_weighted<R>(rng: &mut R, n: NumNodes, p: f64, weights: Range<Weight>) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphEdgeOrder,
{
    fn gnp_weighted<R>(rng: &mut R, n: NumNodes, p: f64, weights: Range<Weight>) -> Self
    where
        R: Rng,
    {
        let graph = Self::from_weighted_edges(
            n,
            WeightedGnp::new()
                .nodes(n)
                .prob(p)
                .weights(weights)
                .stream(rng),
        );

        debug!(
            "Generated G({n}, {p}) with {} edges (density {:.3})",
            graph.edge_count(),
            graph.density()
        );
        graph
    }
}
