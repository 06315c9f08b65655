use evolve_core::{AlterResult, Chromosome, Mutate, random_provider, validate_rate};
use evolve_error::EvolveResult;
use std::marker::PhantomData;

/// Reverses a randomly chosen contiguous section of the chromosome. Because
/// the section length is random, this mutator is most effective on chromosomes
/// long enough for a reversal to meaningfully disturb gene order (permutation
/// problems especially).
pub struct InversionMutator<C> {
    individual_rate: f32,
    chromosome_rate: f32,
    _marker: PhantomData<fn() -> C>,
}

impl<C> InversionMutator<C> {
    pub fn new(chromosome_rate: f32) -> EvolveResult<Self> {
        validate_rate(chromosome_rate, "chromosome")?;
        Ok(InversionMutator {
            individual_rate: 1.0,
            chromosome_rate,
            _marker: PhantomData,
        })
    }

    pub fn with_rates(individual_rate: f32, chromosome_rate: f32) -> EvolveResult<Self> {
        validate_rate(individual_rate, "individual")?;
        validate_rate(chromosome_rate, "chromosome")?;
        Ok(InversionMutator {
            individual_rate,
            chromosome_rate,
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> Mutate<C> for InversionMutator<C> {
    fn individual_rate(&self) -> f32 {
        self.individual_rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    #[inline]
    fn mutate_chromosome(&self, chromosome: &mut C) -> AlterResult {
        if chromosome.len() < 2 {
            return AlterResult::from(0);
        }

        let start = random_provider::range(0..chromosome.len());
        let end = random_provider::range(start..chromosome.len());

        chromosome.genes_mut()[start..end].reverse();
        AlterResult::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{Gene, IntChromosome, IntGene, Phenotype, Population};

    #[test]
    fn rejects_out_of_range_chromosome_rate() {
        assert!(InversionMutator::<IntChromosome<i32>>::new(1.5).is_err());
    }

    #[test]
    fn inversion_preserves_gene_multiset() {
        let genes = (0..6).map(IntGene::from).collect::<Vec<_>>();
        let mut population: Population<IntChromosome<i32>> =
            Population::new(vec![Phenotype::from((vec![IntChromosome::new(genes)], 0))]);

        let mutator = InversionMutator::<IntChromosome<i32>>::new(1.0).unwrap();
        mutator.mutate(&mut population, 1);

        let mut alleles = population
            .get(0)
            .unwrap()
            .genotype()
            .iter()
            .next()
            .unwrap()
            .iter()
            .map(|g| *g.allele())
            .collect::<Vec<_>>();
        alleles.sort();
        assert_eq!(alleles, vec![0, 1, 2, 3, 4, 5]);
    }
}
