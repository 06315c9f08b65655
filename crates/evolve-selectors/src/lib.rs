//! Selection operators: [`Select`](evolve_core::Select) implementations
//! choosing `n` individuals from a ranked population.

pub mod random_selector;
pub mod rank;
pub mod roulette;
pub mod tournament;

use evolve_core::random_provider;

pub use random_selector::RandomSelector;
pub use rank::RankSelector;
pub use roulette::RouletteSelector;
pub use tournament::TournamentSelector;

/// An iterator that draws `max_index` indices from a discrete probability
/// distribution built from `probabilities` (normalized internally; a
/// non-positive total falls back to a uniform distribution over the
/// indices). This is the 'roulette wheel' spun by both [`RouletteSelector`]
/// and [`RankSelector`].
pub(crate) struct ProbabilityWheelIterator {
    cdf: Vec<f32>,
    max_index: usize,
    current: usize,
    uniform: bool,
}

impl ProbabilityWheelIterator {
    pub fn new(probabilities: &[f32], max_index: usize) -> Self {
        let mut cdf = Vec::with_capacity(probabilities.len());
        let mut total = 0.0f32;

        for &p in probabilities {
            let w = if p.is_finite() && p > 0.0 { p } else { 0.0 };
            total += w;
            cdf.push(total);
        }

        let uniform = !total.is_finite() || total <= 0.0;
        if !uniform && total != 1.0 {
            let inv = 1.0 / total;
            for v in &mut cdf {
                *v *= inv;
            }
        }

        Self {
            cdf,
            max_index,
            current: 0,
            uniform,
        }
    }
}

impl Iterator for ProbabilityWheelIterator {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.max_index {
            return None;
        }

        let n = self.cdf.len();
        if n == 0 {
            self.current += 1;
            return Some(0);
        }

        let idx = if self.uniform {
            let i = (random_provider::random::<f32>() * n as f32) as usize;
            i.min(n.saturating_sub(1))
        } else {
            let r = random_provider::random::<f32>();
            let i = self
                .cdf
                .binary_search_by(|v| v.partial_cmp(&r).unwrap_or(std::cmp::Ordering::Less))
                .unwrap_or_else(|i| i);
            i.min(n - 1)
        };

        self.current += 1;
        Some(idx)
    }
}
