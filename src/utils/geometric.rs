use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::utils::Probability;

/// How far the jumper advances between two successes
#[derive(Debug, Copy, Clone)]
enum Jumps {
    /// `p = 0`: there are no successes at all
    Never,
    /// `p = 1`: every trial is a success
    Always,
    /// General case: the number of failures between two successes is geometrically distributed
    General(Geometric),
}

/// A geometric jumper enumerates the indices `0, 1, 2, ...` of independent Bernoulli trials with
/// success probability `p` and yields the indices of all successes.
/// Instead of drawing every single trial, it draws the gap to the next success from a geometric
/// distribution. Enumeration stops before an optional stop value.
///
/// The jumper does not hold on to a random source: every step borrows one. This allows the caller
/// to use the same source for other draws in between jumps.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    jumps: Jumps,
    /// Only indices `< stop` are yielded
    stop: u64,
    /// Next index to consider
    cur: u64,
}

impl GeometricJumper {
    /// Creates a new geometric jumper from a probability with no stop value
    pub fn new(prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "Invalid probability {prob}");

        let jumps = if prob == 0.0 {
            Jumps::Never
        } else if prob == 1.0 {
            Jumps::Always
        } else {
            Jumps::General(Geometric::new(prob).expect("probability was validated above"))
        };

        Self {
            jumps,
            stop: u64::MAX,
            cur: 0,
        }
    }

    /// Only indices smaller than `stop` will be yielded
    pub fn stop_at(mut self, stop: u64) -> Self {
        self.stop = stop;
        self
    }

    /// Performs a geometric jump and returns the index of the next success (if any)
    pub fn jump<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u64> {
        if self.cur >= self.stop {
            return None;
        }

        let skip = match self.jumps {
            Jumps::Never => {
                self.cur = self.stop;
                return None;
            }
            Jumps::Always => 0,
            Jumps::General(distr) => distr.sample(rng),
        };

        match self.cur.checked_add(skip).filter(|&x| x < self.stop) {
            Some(x) => {
                self.cur = x + 1;
                Some(x)
            }
            None => {
                self.cur = self.stop;
                None
            }
        }
    }

    /// Creates an iterator of geometric jumps that borrows `rng` for its whole lifetime
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        GeometricJumperIter { jumper: self, rng }
    }
}

/// An iterator over geometric jumps starting at `0` with an optional stop value
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R>
where
    R: Rng,
{
    jumper: GeometricJumper,
    rng: &'a mut R,
}

impl<'a, R> Iterator for GeometricJumperIter<'a, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.jumper.jump(self.rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn wrong_prob() {
        for prob in [-10.0, -0.001, 1.0001, 3.4] {
            assert!(std::panic::catch_unwind(|| GeometricJumper::new(prob)).is_err());
        }
    }

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        // p = 1.0
        for stop in [3, 10] {
            assert_eq!(
                GeometricJumper::new(1.0).stop_at(stop).iter(rng).count(),
                stop as usize
            );

            assert_eq!(
                GeometricJumper::new(1.0)
                    .iter(rng)
                    .take(stop as usize)
                    .count(),
                stop as usize
            );
        }

        // p = 0.0
        assert_eq!(GeometricJumper::new(0.0).iter(rng).count(), 0);

        // stop = 0
        assert_eq!(GeometricJumper::new(0.5).stop_at(0).iter(rng).count(), 0);
    }

    #[test]
    fn strictly_increasing_below_stop() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let jumps: Vec<u64> = GeometricJumper::new(0.3).stop_at(500).iter(rng).collect();

        assert!(jumps.windows(2).all(|w| w[0] < w[1]));
        assert!(jumps.iter().all(|&x| x < 500));
    }

    #[test]
    fn occurences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let stop = 100u64;
        let mut occurences = vec![0; stop as usize];
        for _ in 0..1000 {
            for x in GeometricJumper::new(0.25).stop_at(stop).iter(rng) {
                occurences[x as usize] += 1;
            }
        }

        assert!(occurences.into_iter().all(|x| (150..350).contains(&x)));
    }
}
