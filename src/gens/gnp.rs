use rand_distr::{Distribution, Uniform};

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// Weighted `G(n,p)` graphs contain every possible edge `{u, v}` with `u != v` of a graph with `n`
/// nodes with probability `p` independent from each other. Every generated edge receives a weight
/// drawn uniformly at random from the configured range (default [`DEFAULT_WEIGHT_RANGE`]).
///
/// Edges are yielded normalized and without self-loops, so no filtering is needed by the caller.
#[derive(Debug, Copy, Clone)]
pub struct WeightedGnp {
    n: NumNodes,
    p: GnpType,
    weights: Uniform<Weight>,
}

impl Default for WeightedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            weights: Uniform::new(DEFAULT_WEIGHT_RANGE.start, DEFAULT_WEIGHT_RANGE.end)
                .expect("default weight range is valid"),
        }
    }
}

impl WeightedGnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "Invalid probability {prob}");
        self.p = GnpType::Prob(prob);
        self
    }

    /// Draw weights uniformly from the half-open range `weights`.
    /// ** Panics if the range is empty, not finite or contains negative values **
    pub fn weights(mut self, weights: Range<Weight>) -> Self {
        assert!(
            is_valid_weight(weights.start)
                && weights.end.is_finite()
                && weights.start < weights.end,
            "Invalid weight range {weights:?}"
        );
        self.weights =
            Uniform::new(weights.start, weights.end).expect("weight range was validated above");
        self
    }

    /// Assigns the same weight to every generated edge.
    /// ** Panics if `weight` is negative or not finite **
    pub fn constant_weight(mut self, weight: Weight) -> Self {
        assert!(is_valid_weight(weight), "Invalid weight {weight}");
        self.weights = Uniform::new_inclusive(weight, weight).expect("weight was validated above");
        self
    }
}

impl NumNodesGen for WeightedGnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for WeightedGnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for WeightedGnp {
    /// Creates a streaming generator over random weighted `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge> {
        let n = self.n as u64;
        let p = match self.p {
            GnpType::NotSet => panic!("Probility of WeightedGnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if n > 1 { d / (n - 1) as f64 } else { 0.0 };
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        };

        // Every unordered pair of distinct nodes is mapped to a unique value in `0..pairs`
        let pairs = n * n.saturating_sub(1) / 2;

        WeightedGnpIter {
            jumper: GeometricJumper::new(p).stop_at(pairs),
            weights: self.weights,
            n,
            rng,
        }
    }
}

/// Iterator over the edges of a weighted `G(n,p)` graph.
/// Selecting pairs and drawing weights share the same random source.
struct WeightedGnpIter<'a, R: Rng> {
    jumper: GeometricJumper,
    weights: Uniform<Weight>,
    n: u64,
    rng: &'a mut R,
}

impl<R: Rng> Iterator for WeightedGnpIter<'_, R> {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.jumper.jump(self.rng)?;
        let weight = self.weights.sample(self.rng);
        Some(Edge::from_u64_undir(x, self.n).with_weight(weight))
    }
}
