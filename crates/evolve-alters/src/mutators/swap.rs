use evolve_core::{AlterResult, Chromosome, Mutate, random_provider, validate_rate};
use evolve_error::EvolveResult;
use std::marker::PhantomData;

/// Swaps each selected gene with a different, uniformly chosen gene in the
/// same chromosome. Most useful for permutation chromosomes, where it
/// preserves the multiset of alleles.
pub struct SwapMutator<C> {
    individual_rate: f32,
    chromosome_rate: f32,
    gene_rate: f32,
    _marker: PhantomData<fn() -> C>,
}

impl<C> SwapMutator<C> {
    pub fn new(gene_rate: f32) -> EvolveResult<Self> {
        validate_rate(gene_rate, "gene")?;
        Ok(SwapMutator {
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
        Ok(SwapMutator {
            individual_rate,
            chromosome_rate,
            gene_rate,
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> Mutate<C> for SwapMutator<C> {
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
    fn mutate_chromosome(&self, chromosome: &mut C) -> AlterResult {
        let mut mutations = 0;
        let len = chromosome.len();

        for i in 0..len {
            if len > 1 && random_provider::random::<f32>() < self.gene_rate() {
                let swap_index = random_provider::range(0..len);
                if swap_index == i {
                    continue;
                }

                chromosome.genes_mut().swap(i, swap_index);
                mutations += 1;
            }
        }

        mutations.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{Gene, IntChromosome, IntGene, Phenotype, Population};

    #[test]
    fn rejects_out_of_range_gene_rate() {
        assert!(SwapMutator::<IntChromosome<i32>>::new(-1.0).is_err());
    }

    #[test]
    fn swapping_preserves_gene_multiset() {
        let genes = (0..6).map(IntGene::from).collect::<Vec<_>>();
        let mut population: Population<IntChromosome<i32>> =
            Population::new(vec![Phenotype::from((vec![IntChromosome::new(genes)], 0))]);

        let mutator = SwapMutator::<IntChromosome<i32>>::new(1.0).unwrap();
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
