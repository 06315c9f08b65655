use crate::Generation;
use evolve_core::Chromosome;

/// A termination condition evaluated against the result of the generation
/// that just completed. The engine stops at the first generation for which
/// any configured `Limit` returns `true`.
pub trait Limit<C: Chromosome>: Send + Sync {
    fn is_met(&mut self, generation: &Generation<C>) -> bool;
}

/// Stops once `n` generations have been produced.
#[derive(Clone, Copy, Debug)]
pub struct GenerationCount(pub usize);

impl<C: Chromosome> Limit<C> for GenerationCount {
    fn is_met(&mut self, generation: &Generation<C>) -> bool {
        generation.index() + 1 >= self.0
    }
}

/// Stops once the best fitness has gone `n` consecutive generations without
/// improving, under the engine's ranker equality.
pub struct SteadyGenerations {
    target: usize,
    streak: usize,
    best: Option<f32>,
}

impl SteadyGenerations {
    pub fn new(target: usize) -> Self {
        SteadyGenerations { target, streak: 0, best: None }
    }
}

impl<C: Chromosome> Limit<C> for SteadyGenerations {
    fn is_met(&mut self, generation: &Generation<C>) -> bool {
        let score = generation.score().as_f32();

        match self.best {
            Some(best) if score == best => self.streak += 1,
            _ => {
                self.best = Some(score);
                self.streak = 0;
            }
        }

        self.streak >= self.target
    }
}

/// Stops once the best fitness reaches or surpasses `threshold`, relative to
/// the ranker's ordering (for [`evolve_core::Optimize::Minimize`], "reaches"
/// means the best score is less than or equal to the threshold).
pub struct TargetFitness {
    threshold: f32,
    optimize: evolve_core::Optimize,
}

impl TargetFitness {
    pub fn new(threshold: f32, optimize: evolve_core::Optimize) -> Self {
        TargetFitness { threshold, optimize }
    }
}

impl<C: Chromosome> Limit<C> for TargetFitness {
    fn is_met(&mut self, generation: &Generation<C>) -> bool {
        let score = generation.score().as_f32();
        match self.optimize {
            evolve_core::Optimize::Maximize => score >= self.threshold,
            evolve_core::Optimize::Minimize => score <= self.threshold,
        }
    }
}
