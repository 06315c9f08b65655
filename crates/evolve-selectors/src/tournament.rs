use evolve_core::{Chromosome, Optimize, Population, Select, random_provider, validate_selection};
use evolve_error::EvolveResult;

/// Selects `count` individuals by repeated tournaments of size `k`: each
/// tournament samples `k` individuals uniformly with replacement and keeps
/// the ranker-best of the sample. Ties are broken by encounter order (the
/// first-sampled individual wins unless a later contender is strictly
/// better).
#[derive(Debug, Clone)]
pub struct TournamentSelector {
    k: usize,
}

impl TournamentSelector {
    /// `k` is the tournament size and must be at least 1.
    pub fn new(k: usize) -> Self {
        TournamentSelector { k: k.max(1) }
    }
}

impl<C: Chromosome + Clone> Select<C> for TournamentSelector {
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

        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let mut best = random_provider::range(0..population.len());
            for _ in 1..self.k {
                let contender = random_provider::range(0..population.len());
                let contender_score = population[contender].score();
                let best_score = population[best].score();
                if optimize.is_better(&contender_score, &best_score) {
                    best = contender;
                }
            }
            selected.push(population[best].clone());
        }

        Ok(Population::new(selected))
    }
}
