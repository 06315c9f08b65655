//! # Fitness Evaluators
//!
//! This module provides fitness evaluation strategies for genetic algorithms.
//! Evaluators are responsible for computing fitness scores for individuals in
//! a population against a [`Problem`].
//!
//! - [`SequentialEvaluator`]: evaluates individuals one at a time on the
//!   calling thread.
//! - [`ParallelEvaluator`]: evaluates individuals across a `rayon` thread
//!   pool in chunks of a configurable size (requires the `rayon` feature).

use crate::{Chromosome, Population, Problem};
use evolve_error::{EvolveResult, evolve_err};

/// A trait for evaluating the fitness of individuals in a population.
///
/// By default, only individuals that have not yet been scored are
/// re-evaluated. Passing `force = true` re-evaluates every individual in
/// the population regardless of its current score, which is useful after
/// the fitness function itself has changed (e.g. a dynamic environment).
pub trait Evaluator<C: Chromosome>: Send + Sync {
    /// Evaluates unscored individuals (or all individuals, if `force` is
    /// set) in `population` against `problem`.
    ///
    /// Returns the number of individuals that were evaluated.
    fn eval(
        &self,
        population: &mut Population<C>,
        problem: &dyn Problem<C>,
        force: bool,
    ) -> EvolveResult<usize>;
}

/// Evaluates individuals one at a time on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEvaluator;

impl<C: Chromosome> Evaluator<C> for SequentialEvaluator {
    fn eval(
        &self,
        population: &mut Population<C>,
        problem: &dyn Problem<C>,
        force: bool,
    ) -> EvolveResult<usize> {
        let mut count = 0;

        for idx in 0..population.len() {
            let individual = population.get_mut(idx).expect("index in bounds");
            if !force && individual.score().is_some() {
                continue;
            }

            let genotype = individual.take_genotype()?;
            let score = problem.eval(&genotype);
            individual.set_genotype(genotype);
            individual.set_score(Some(score?));
            count += 1;
        }

        Ok(count)
    }
}

/// Evaluates individuals across a `rayon` thread pool.
///
/// Work is split into chunks of `chunk_size` individuals; `rayon` load-balances
/// chunks across the global thread pool via `with_min_len`.
#[derive(Clone, Copy, Debug)]
pub struct ParallelEvaluator {
    chunk_size: usize,
}

impl ParallelEvaluator {
    pub fn new(chunk_size: usize) -> EvolveResult<Self> {
        if chunk_size == 0 {
            return Err(evolve_err!(
                InvalidConfig: "parallel evaluator chunk size must be greater than 0"
            ));
        }
        Ok(ParallelEvaluator { chunk_size })
    }
}

impl Default for ParallelEvaluator {
    fn default() -> Self {
        ParallelEvaluator { chunk_size: 1 }
    }
}

#[cfg(feature = "rayon")]
impl<C: Chromosome + Send + Sync> Evaluator<C> for ParallelEvaluator
where
    C::Gene: Send + Sync,
{
    fn eval(
        &self,
        population: &mut Population<C>,
        problem: &dyn Problem<C>,
        force: bool,
    ) -> EvolveResult<usize> {
        use rayon::prelude::*;

        let mut pending = Vec::new();
        for idx in 0..population.len() {
            let individual = population.get_mut(idx).expect("index in bounds");
            if force || individual.score().is_none() {
                let genotype = individual.take_genotype()?;
                pending.push((idx, genotype));
            }
        }

        let count = pending.len();
        let chunk_size = self.chunk_size;

        let scored: Vec<(usize, crate::Genotype<C>, EvolveResult<crate::Score>)> = pending
            .into_par_iter()
            .with_min_len(chunk_size)
            .map(|(idx, genotype)| {
                let score = problem.eval(&genotype);
                (idx, genotype, score)
            })
            .collect();

        for (idx, genotype, score) in scored {
            let individual = population.get_mut(idx).expect("index in bounds");
            individual.set_genotype(genotype);
            individual.set_score(Some(score?));
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::factory::{FloatChromosomeFactory, GenotypeFactory};
    use crate::problem::EngineProblem;
    use crate::{FloatChromosome, Gene, Optimize, Phenotype};
    use std::sync::Arc;

    fn make_population(size: usize) -> Population<FloatChromosome> {
        let genotype_factory = GenotypeFactory::new(vec![FloatChromosomeFactory::new(3, 0.0..1.0)]);
        Population::from((size, move || {
            Phenotype::from((genotype_factory.make().unwrap(), 0))
        }))
    }

    fn make_problem() -> EngineProblem<FloatChromosomeFactory> {
        let genotype_factory = GenotypeFactory::new(vec![FloatChromosomeFactory::new(3, 0.0..1.0)]);
        EngineProblem::<FloatChromosomeFactory> {
            objective: Optimize::Maximize,
            factory: Arc::new(move || genotype_factory.make()),
            fitness_fn: Arc::new(|genotype| {
                genotype
                    .flatten()
                    .iter()
                    .map(|gene| *gene.allele())
                    .sum::<f32>()
            }),
        }
    }

    #[test]
    fn sequential_evaluator_scores_unevaluated_individuals() {
        let mut population = make_population(5);
        let problem = make_problem();

        let count = SequentialEvaluator.eval(&mut population, &problem, false).unwrap();

        assert_eq!(count, 5);
        for individual in population.iter() {
            assert!(individual.score().is_some());
        }
    }

    #[test]
    fn sequential_evaluator_skips_already_scored_individuals_unless_forced() {
        let mut population = make_population(3);
        let problem = make_problem();

        SequentialEvaluator.eval(&mut population, &problem, false).unwrap();
        let count = SequentialEvaluator.eval(&mut population, &problem, false).unwrap();
        assert_eq!(count, 0);

        let forced_count = SequentialEvaluator.eval(&mut population, &problem, true).unwrap();
        assert_eq!(forced_count, 3);
    }

    #[test]
    fn parallel_evaluator_rejects_zero_chunk_size() {
        assert!(ParallelEvaluator::new(0).is_err());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_evaluator_scores_unevaluated_individuals() {
        let mut population = make_population(8);
        let problem = make_problem();
        let evaluator = ParallelEvaluator::new(2).unwrap();

        let count = evaluator.eval(&mut population, &problem, false).unwrap();

        assert_eq!(count, 8);
        for individual in population.iter() {
            assert!(individual.score().is_some());
        }
    }
}
