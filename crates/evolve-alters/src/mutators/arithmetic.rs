use evolve_core::{ArithmeticGene, Chromosome, Mutate, random_provider, validate_rate};
use evolve_error::EvolveResult;
use std::marker::PhantomData;

/// Mutates a gene by combining it, through one of `add`/`sub`/`mul`/`div`
/// chosen uniformly at random, with a freshly sampled gene of the same kind.
/// Works with any gene implementing [`ArithmeticGene`].
pub struct ArithmeticMutator<C> {
    individual_rate: f32,
    chromosome_rate: f32,
    gene_rate: f32,
    _marker: PhantomData<fn() -> C>,
}

impl<C> ArithmeticMutator<C> {
    pub fn new(gene_rate: f32) -> EvolveResult<Self> {
        validate_rate(gene_rate, "gene")?;
        Ok(ArithmeticMutator {
            individual_rate: 1.0,
            chromosome_rate: 1.0,
            gene_rate,
            _marker: PhantomData,
        })
    }

    pub fn with_rates(
        individual_rate: f32,
        chromosome_rate: f32,
        gene_rate: f32,
    ) -> EvolveResult<Self> {
        validate_rate(individual_rate, "individual")?;
        validate_rate(chromosome_rate, "chromosome")?;
        validate_rate(gene_rate, "gene")?;
        Ok(ArithmeticMutator {
            individual_rate,
            chromosome_rate,
            gene_rate,
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> Mutate<C> for ArithmeticMutator<C>
where
    C::Gene: ArithmeticGene,
{
    fn individual_rate(&self) -> f32 {
        self.individual_rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    fn gene_rate(&self) -> f32 {
        self.gene_rate
    }

    #[inline]
    fn mutate_gene(&self, gene: &C::Gene) -> C::Gene {
        let other = gene.new_instance();
        match random_provider::range(0..4) {
            0 => gene.add(&other),
            1 => gene.sub(&other),
            2 => gene.mul(&other),
            _ => gene.div(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{FloatChromosome, FloatGene, Phenotype, Population, Valid};

    #[test]
    fn rejects_out_of_range_gene_rate() {
        assert!(ArithmeticMutator::<FloatChromosome>::new(2.0).is_err());
    }

    #[test]
    fn mutated_gene_respects_bounds() {
        let mut population = Population::from((3, || {
            let genes = (0..4)
                .map(|_| FloatGene::new(5.0, 0.0..10.0, 0.0..10.0))
                .collect::<Vec<_>>();
            Phenotype::from((vec![FloatChromosome::new(genes)], 0))
        }));

        let mutator = ArithmeticMutator::<FloatChromosome>::new(1.0).unwrap();
        mutator.mutate(&mut population, 1);

        for individual in population.iter() {
            assert!(individual.genotype().iter().next().unwrap().is_valid());
        }
    }
}
