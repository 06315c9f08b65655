use evolve_core::{Chromosome, MetricSet, Optimize, Phenotype, Population, Score};

/// An immutable snapshot of the population and bookkeeping produced by one
/// completed generation. Handed to [`crate::Listener`]s and [`crate::Limit`]s;
/// neither may mutate the engine's own state through it.
#[derive(Clone)]
pub struct Generation<C: Chromosome> {
    index: usize,
    population: Population<C>,
    optimize: Optimize,
    metrics: MetricSet,
}

impl<C: Chromosome> Generation<C> {
    pub fn new(index: usize, population: Population<C>, optimize: Optimize, metrics: MetricSet) -> Self {
        Generation { index, population, optimize, metrics }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn population(&self) -> &Population<C> {
        &self.population
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    pub fn optimize(&self) -> Optimize {
        self.optimize
    }

    /// The best individual in the population, under the generation's ranker.
    /// The population is kept sorted by the engine, so this is simply the
    /// first individual.
    pub fn best(&self) -> &Phenotype<C> {
        self.population.get(0).expect("generation population is never empty")
    }

    pub fn score(&self) -> &Score {
        self.best().score().expect("generation's best individual is always evaluated")
    }
}

/// The final output of a completed `evolve()` run: a snapshot of the
/// optimizer, the final population, and the generation count at which a
/// `Limit` fired.
#[derive(Clone)]
pub struct EvolutionResult<C: Chromosome> {
    pub optimize: Optimize,
    pub population: Population<C>,
    pub generation: usize,
}

impl<C: Chromosome> EvolutionResult<C> {
    pub fn best(&self) -> &Phenotype<C> {
        self.population.get(0).expect("evolution result population is never empty")
    }

    pub fn score(&self) -> &Score {
        self.best().score().expect("evolution result's best individual is always evaluated")
    }
}

impl<C: Chromosome> From<Generation<C>> for EvolutionResult<C> {
    fn from(generation: Generation<C>) -> Self {
        EvolutionResult {
            optimize: generation.optimize,
            generation: generation.index,
            population: generation.population,
        }
    }
}
