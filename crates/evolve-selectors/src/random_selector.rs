use evolve_core::{Chromosome, Optimize, Population, Select, random_provider, validate_selection};
use evolve_error::EvolveResult;

/// Selects `count` individuals uniformly at random, with replacement,
/// ignoring fitness entirely. Used both as a baseline operator and as the
/// control group in probability-selector statistical tests.
#[derive(Debug, Default, Clone)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector
    }
}

impl<C: Chromosome + Clone> Select<C> for RandomSelector {
    fn select(
        &self,
        population: &Population<C>,
        _optimize: Optimize,
        count: usize,
    ) -> EvolveResult<Population<C>> {
        validate_selection(population, count)?;
        if count == 0 {
            return Ok(Population::new(Vec::new()));
        }

        let selected = (0..count)
            .map(|_| {
                let idx = random_provider::range(0..population.len());
                population[idx].clone()
            })
            .collect::<Vec<_>>();

        Ok(Population::new(selected))
    }
}
