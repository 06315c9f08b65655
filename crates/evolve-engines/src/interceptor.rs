use crate::EvolutionResult;
use evolve_core::{Chromosome, Population};

/// Before/after hooks run once per generation, immediately after the
/// population is established (step 2 of the pipeline) and immediately after
/// the generation's `EvolutionResult` is built (step 11). The default is the
/// identity - neither hook does anything.
pub trait Interceptor<C: Chromosome>: Send + Sync {
    fn before(&self, _population: &mut Population<C>, _generation: usize) {}

    fn after(&self, _result: &EvolutionResult<C>) {}
}

#[derive(Default)]
pub struct Identity;

impl<C: Chromosome> Interceptor<C> for Identity {}
