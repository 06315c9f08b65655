use crate::{Composite, EvolutionResult, Generation, Interceptor, Limit, Listener, builder::EngineBuilder};
use evolve_core::{Chromosome, Evaluator, MetricSet, Optimize, Phenotype, Population, Problem, Select};
use evolve_error::EvolveResult;
use std::sync::Arc;
use tracing::{info, instrument};

/// The core evolutionary loop. An `Engine` is built once via
/// [`Engine::builder`] and run to completion with [`Engine::evolve`], which
/// consumes the engine: there is no way to resume or re-enter a finished
/// run, only to build a fresh one.
///
/// Each call to the internal per-generation step runs the pipeline exactly
/// as documented: emit a start event, let the interceptor observe the
/// incoming population, lazily seed the population from the problem's
/// factory on the first generation, evaluate, select offspring and
/// survivors, alter the offspring, merge, re-evaluate, then emit a finish
/// event before checking every configured `Limit`.
pub struct Engine<C: Chromosome> {
    pub(crate) problem: Arc<dyn Problem<C>>,
    pub(crate) population_size: usize,
    pub(crate) survival_rate: f32,
    pub(crate) optimize: Optimize,
    pub(crate) offspring_selector: Arc<dyn Select<C>>,
    pub(crate) survivor_selector: Arc<dyn Select<C>>,
    pub(crate) alterer: Composite<C>,
    pub(crate) evaluator: Arc<dyn Evaluator<C>>,
    pub(crate) limits: Vec<Box<dyn Limit<C>>>,
    pub(crate) listeners: Vec<Arc<dyn Listener<C>>>,
    pub(crate) interceptor: Arc<dyn Interceptor<C>>,
    pub(crate) population: Population<C>,
    pub(crate) generation: usize,
}

impl<C: Chromosome> Engine<C> {
    pub fn builder() -> EngineBuilder<C> {
        EngineBuilder::new()
    }

    /// Runs generations until a `Limit` fires, returning a snapshot of the
    /// final population, ranker, and generation count.
    pub fn evolve(mut self) -> EvolveResult<EvolutionResult<C>> {
        loop {
            let generation = self.run_generation()?;

            let done = self.limits.iter_mut().any(|limit| limit.is_met(&generation));
            if done {
                info!(generation = generation.index(), score = generation.score().as_f32(), "limit reached");
                return Ok(EvolutionResult::from(generation));
            }
        }
    }

    #[instrument(skip(self), fields(generation = self.generation))]
    fn run_generation(&mut self) -> EvolveResult<Generation<C>> {
        for listener in &self.listeners {
            listener.on_generation_started(self.generation);
        }

        self.interceptor.before(&mut self.population, self.generation);

        if self.population.is_empty() {
            let mut individuals = Vec::with_capacity(self.population_size);
            for _ in 0..self.population_size {
                individuals.push(Phenotype::from((self.problem.encode()?, self.generation)));
            }
            self.population = Population::new(individuals);
        }

        self.evaluator.eval(&mut self.population, self.problem.as_ref(), false)?;

        let offspring_count =
            ((1.0 - self.survival_rate) * self.population_size as f32).floor() as usize;
        let survivor_count = (self.survival_rate * self.population_size as f32).ceil() as usize;

        let mut offspring =
            self.offspring_selector.select(&self.population, self.optimize, offspring_count)?;
        let survivors =
            self.survivor_selector.select(&self.population, self.optimize, survivor_count)?;

        let mut metrics = MetricSet::new();
        metrics.extend(self.alterer.alter(&mut offspring, self.generation));

        let mut combined: Vec<Phenotype<C>> = survivors.into_iter().collect();
        combined.extend(offspring.into_iter());
        let mut next_population = Population::new(combined);

        self.evaluator.eval(&mut next_population, self.problem.as_ref(), true)?;
        next_population.sort_by(self.optimize);

        self.population = next_population;

        let generation = Generation::new(self.generation, self.population.clone(), self.optimize, metrics);
        let result = EvolutionResult::from(generation.clone());
        self.interceptor.after(&result);

        for listener in &self.listeners {
            listener.on_generation_finished(&generation);
        }

        self.generation += 1;

        Ok(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limit::GenerationCount;
    use evolve_alters::{BitFlipMutator, SinglePointCrossover};
    use evolve_core::genome::factory::{BitChromosomeFactory, GenotypeFactory};
    use evolve_core::{EngineProblem, Gene};
    use evolve_selectors::tournament::TournamentSelector;

    fn max_ones_problem() -> EngineProblem<BitChromosomeFactory> {
        let genotype_factory = GenotypeFactory::new(vec![BitChromosomeFactory::new(20, 0.5)]);
        EngineProblem {
            objective: Optimize::Maximize,
            factory: Arc::new(move || genotype_factory.make()),
            fitness_fn: Arc::new(|genotype| {
                genotype.flatten().iter().filter(|gene| *gene.allele()).count() as f32
            }),
        }
    }

    #[test]
    fn evolve_converges_on_max_ones() {
        evolve_core::random_provider::set_seed(42);

        let engine = Engine::builder()
            .population_size(50)
            .survival_rate(0.4)
            .problem(max_ones_problem())
            .selector(TournamentSelector::new(3))
            .alter(SinglePointCrossover::new(0.6).unwrap().alterer())
            .alter(BitFlipMutator::with_rates(1.0, 1.0, 0.1).unwrap().alterer())
            .limit(GenerationCount(200))
            .build()
            .unwrap();

        let result = engine.evolve().unwrap();
        assert_eq!(result.score().as_f32(), 20.0);
    }

    #[test]
    fn evolve_reports_incrementing_generations_and_full_population() {
        evolve_core::random_provider::set_seed(7);

        let engine = Engine::builder()
            .population_size(10)
            .problem(max_ones_problem())
            .alter(BitFlipMutator::new(0.05).unwrap().alterer())
            .limit(GenerationCount(5))
            .build()
            .unwrap();

        let result = engine.evolve().unwrap();

        assert_eq!(result.generation, 4);
        assert_eq!(result.population.len(), 10);
        for individual in result.population.iter() {
            assert!(individual.score().is_some());
        }
    }
}
