use evolve_core::{Chromosome, Crossover, random_provider, validate_rate};
use evolve_error::{EvolveResult, evolve_bail};
use std::marker::PhantomData;

/// At each aligned gene index, swaps the two parents' genes with 50%
/// probability. Requires both parents to have the same chromosome length.
pub struct UniformCrossover<C> {
    rate: f32,
    chromosome_rate: f32,
    _marker: PhantomData<fn() -> C>,
}

impl<C> UniformCrossover<C> {
    pub fn new(rate: f32) -> EvolveResult<Self> {
        validate_rate(rate, "crossover")?;
        Ok(UniformCrossover {
            rate,
            chromosome_rate: 1.0,
            _marker: PhantomData,
        })
    }

    pub fn with_chromosome_rate(rate: f32, chromosome_rate: f32) -> EvolveResult<Self> {
        validate_rate(rate, "crossover")?;
        validate_rate(chromosome_rate, "chromosome")?;
        Ok(UniformCrossover {
            rate,
            chromosome_rate,
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> Crossover<C> for UniformCrossover<C> {
    fn rate(&self) -> f32 {
        self.rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> EvolveResult<Vec<C>> {
        let (parent_one, parent_two) = (parents[0], parents[1]);
        if parent_one.len() != parent_two.len() {
            evolve_bail!(Crossover: "uniform crossover requires parents of equal length");
        }

        let mut child_one = parent_one.genes().to_vec();
        let mut child_two = parent_two.genes().to_vec();

        for i in 0..child_one.len() {
            if random_provider::bool(0.5) {
                std::mem::swap(&mut child_one[i], &mut child_two[i]);
            }
        }

        Ok(vec![
            parent_one.duplicate_with_genes(child_one),
            parent_two.duplicate_with_genes(child_two),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{FloatChromosome, FloatGene, Phenotype, Population};

    #[test]
    fn rejects_out_of_range_rate() {
        assert!(UniformCrossover::<FloatChromosome>::new(1.1).is_err());
    }

    #[test]
    fn crossover_preserves_chromosome_length() {
        let genes_one = (0..5).map(|_| FloatGene::from(0.0..1.0)).collect::<Vec<_>>();
        let genes_two = (0..5).map(|_| FloatGene::from(0.0..1.0)).collect::<Vec<_>>();

        let mut population: Population<FloatChromosome> = Population::new(vec![
            Phenotype::from((vec![FloatChromosome::new(genes_one)], 0)),
            Phenotype::from((vec![FloatChromosome::new(genes_two)], 0)),
        ]);

        let crossover = UniformCrossover::<FloatChromosome>::new(1.0).unwrap();
        crossover.crossover(&mut population, 1);

        for individual in population.iter() {
            assert_eq!(individual.genotype().iter().next().unwrap().len(), 5);
        }
    }
}
