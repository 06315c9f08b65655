//! # Problem Abstraction
//!
//! The [Problem] trait is the engine's view of "what is being solved": a way
//! to draw an initial [`Genotype`] and a pure mapping from a genotype to a
//! fitness [`Score`]. Unlike an encode/decode codec, a genotype here is
//! evaluated directly - the caller's fitness function receives the genotype
//! itself and is responsible for interpreting its genes.

use crate::genome::factory::ChromosomeFactory;
use crate::genome::genotype::Genotype;
use crate::{Chromosome, Optimize, Score};
use evolve_error::{EvolveResult, evolve_err};
use std::sync::Arc;

/// The core interface for genetic algorithm problems: producing an initial
/// genotype and scoring genotypes against a fitness function.
///
/// # Thread Safety
///
/// All problems must be `Send + Sync` so the parallel evaluator can share
/// one `Problem` across worker threads.
pub trait Problem<C: Chromosome>: Send + Sync {
    /// Draws a fresh genotype from the underlying factory.
    fn encode(&self) -> EvolveResult<Genotype<C>>;

    /// Scores a single genotype. The fitness function is a pure mapping
    /// `Genotype -> Real`; implementations must not mutate `individual`.
    fn eval(&self, individual: &Genotype<C>) -> EvolveResult<Score>;

    /// Scores many genotypes at once. The default implementation calls
    /// [`Problem::eval`] for each; override when batching offers a real
    /// advantage (shared setup, vectorization).
    fn eval_batch(&self, individuals: &[Genotype<C>]) -> EvolveResult<Vec<Score>> {
        individuals.iter().map(|ind| self.eval(ind)).collect()
    }
}

/// The default [`Problem`] implementation: a [`ChromosomeFactory`]-backed
/// genotype source plus a fitness closure.
pub struct EngineProblem<F: ChromosomeFactory> {
    pub objective: Optimize,
    pub factory: Arc<dyn Fn() -> EvolveResult<Genotype<F::Chromosome>> + Send + Sync>,
    pub fitness_fn: Arc<dyn Fn(&Genotype<F::Chromosome>) -> f32 + Send + Sync>,
}

impl<F: ChromosomeFactory> Problem<F::Chromosome> for EngineProblem<F>
where
    F::Chromosome: Send + Sync,
{
    fn encode(&self) -> EvolveResult<Genotype<F::Chromosome>> {
        (self.factory)()
    }

    fn eval(&self, individual: &Genotype<F::Chromosome>) -> EvolveResult<Score> {
        let raw = (self.fitness_fn)(individual);

        if raw.is_nan() {
            return Err(evolve_err!(
                Evaluation: "fitness function produced NaN for objective {:?}",
                self.objective
            ));
        }

        Ok(Score::from(raw))
    }
}

unsafe impl<F: ChromosomeFactory> Send for EngineProblem<F> {}
unsafe impl<F: ChromosomeFactory> Sync for EngineProblem<F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::factory::GenotypeFactory;
    use crate::{FloatChromosome, Gene, genome::factory::FloatChromosomeFactory};

    #[test]
    fn engine_problem_encodes_and_evaluates() {
        let genotype_factory = GenotypeFactory::new(vec![FloatChromosomeFactory::new(2, 0.0..1.0)]);

        let problem = EngineProblem::<FloatChromosomeFactory> {
            objective: Optimize::Maximize,
            factory: Arc::new(move || genotype_factory.make()),
            fitness_fn: Arc::new(|genotype: &Genotype<FloatChromosome>| {
                genotype
                    .flatten()
                    .iter()
                    .map(|gene| *gene.allele())
                    .sum::<f32>()
            }),
        };

        let genotype = problem.encode().unwrap();
        assert_eq!(genotype.len(), 1);

        let score = problem.eval(&genotype).unwrap();
        assert!(score.as_f32() >= 0.0);
    }

    #[test]
    fn engine_problem_rejects_nan_fitness() {
        let genotype_factory = GenotypeFactory::new(vec![FloatChromosomeFactory::new(1, 0.0..1.0)]);

        let problem = EngineProblem::<FloatChromosomeFactory> {
            objective: Optimize::Maximize,
            factory: Arc::new(move || genotype_factory.make()),
            fitness_fn: Arc::new(|_: &Genotype<FloatChromosome>| f32::NAN),
        };

        let genotype = problem.encode().unwrap();
        assert!(problem.eval(&genotype).is_err());
    }
}
