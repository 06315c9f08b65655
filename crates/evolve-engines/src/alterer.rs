use evolve_core::{Alter, AlterAction, Chromosome, Metric, Population};

/// Chains a sequence of [`AlterAction`]s, each consuming the population the
/// previous one left behind. Every sub-alterer is invoked with the same
/// `generation` index - the composite advances the generation once, at the
/// pipeline level, not once per sub-alterer.
pub struct Composite<C: Chromosome> {
    alterers: Vec<AlterAction<C>>,
}

impl<C: Chromosome> Composite<C> {
    pub fn new(alterers: Vec<AlterAction<C>>) -> Self {
        Composite { alterers }
    }
}

impl<C: Chromosome> Alter<C> for Composite<C> {
    fn alter(&self, population: &mut Population<C>, generation: usize) -> Vec<Metric> {
        let mut metrics = Vec::new();
        for alterer in &self.alterers {
            metrics.extend(alterer.alter(population, generation));
        }
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{FloatChromosome, FloatGene, Mutate, Phenotype};

    struct AlwaysMutate;

    impl Mutate<FloatChromosome> for AlwaysMutate {}

    #[test]
    fn composite_runs_each_alterer_in_order() {
        let mut population: Population<FloatChromosome> = Population::from((3, || {
            Phenotype::from((vec![FloatChromosome::new(vec![FloatGene::from(0.0..1.0)])], 0))
        }));

        let composite = Composite::new(vec![AlwaysMutate.alterer(), AlwaysMutate.alterer()]);
        let metrics = composite.alter(&mut population, 1);

        assert_eq!(metrics.len(), 2);
    }
}
