use crate::ProbabilityWheelIterator;
use evolve_core::{Chromosome, Optimize, Population, Select, validate_selection};
use evolve_error::EvolveResult;

/// Rank-based selection: probability of selection depends on an individual's
/// rank within the (ranker-sorted) population rather than its raw fitness
/// value, so large fitness differences are flattened into a linear weighting.
/// The best-ranked individual gets weight `n`, the worst gets weight `1`.
#[derive(Debug, Default, Clone)]
pub struct RankSelector;

impl RankSelector {
    pub fn new() -> Self {
        RankSelector
    }
}

impl<C: Chromosome + Clone> Select<C> for RankSelector {
    fn select(
        &self,
        population: &Population<C>,
        optimize: Optimize,
        count: usize,
    ) -> EvolveResult<Population<C>> {
        validate_selection(population, count)?;
        if count == 0 {
            return Ok(Population::new(Vec::new()));
        }

        let mut ranked = population.clone();
        ranked.sort_by(optimize);

        let n = ranked.len();
        let weights = (0..n).map(|i| (n - i) as f32).collect::<Vec<_>>();

        let selected = ProbabilityWheelIterator::new(&weights, count)
            .map(|idx| ranked[idx].clone())
            .collect::<Vec<_>>();

        Ok(Population::new(selected))
    }
}
