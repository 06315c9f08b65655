use crate::Generation;
use evolve_core::Chromosome;

/// Observes the engine's pipeline boundaries. Both methods are invoked
/// synchronously by the engine's own thread; the engine waits for a
/// listener's callback to return before advancing to the next stage.
pub trait Listener<C: Chromosome>: Send + Sync {
    /// Called at the start of a generation, before the population is
    /// evaluated or altered.
    fn on_generation_started(&self, _generation: usize) {}

    /// Called once a generation's pipeline has produced its `Generation`
    /// snapshot, immediately before the engine checks its `Limit`s.
    fn on_generation_finished(&self, _generation: &Generation<C>) {}
}

/// A listener built from two closures, for callers who don't want to name a
/// type for one-off logging or metrics collection.
pub struct FnListener<Start, Finish> {
    pub on_started: Start,
    pub on_finished: Finish,
}

impl<C, Start, Finish> Listener<C> for FnListener<Start, Finish>
where
    C: Chromosome,
    Start: Fn(usize) + Send + Sync,
    Finish: Fn(&Generation<C>) + Send + Sync,
{
    fn on_generation_started(&self, generation: usize) {
        (self.on_started)(generation)
    }

    fn on_generation_finished(&self, generation: &Generation<C>) {
        (self.on_finished)(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{FloatChromosome, Optimize, Phenotype, Population, Score};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn fn_listener_forwards_to_closures() {
        let started = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicUsize::new(0));

        let listener = FnListener {
            on_started: {
                let started = Arc::clone(&started);
                move |_gen: usize| {
                    started.fetch_add(1, Ordering::SeqCst);
                }
            },
            on_finished: {
                let finished = Arc::clone(&finished);
                move |_gen: &Generation<FloatChromosome>| {
                    finished.fetch_add(1, Ordering::SeqCst);
                }
            },
        };

        Listener::<FloatChromosome>::on_generation_started(&listener, 0);

        let mut population: Population<FloatChromosome> =
            Population::from((1, || Phenotype::from((vec![], 0))));
        population.get_mut(0).unwrap().set_score(Some(Score::from(1.0)));
        let generation = Generation::new(0, population, Optimize::Maximize, Default::default());

        listener.on_generation_finished(&generation);

        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }
}
