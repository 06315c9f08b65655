use evolve_core::{BitChromosome, BitGene, Gene, Mutate, validate_rate};
use evolve_error::EvolveResult;

/// Flips each selected [`BitGene`]'s boolean allele, rather than regenerating
/// it from scratch (a regenerated `BitGene` has a 50% chance of landing back
/// on the same value, which would understate the effective mutation rate).
pub struct BitFlipMutator {
    individual_rate: f32,
    chromosome_rate: f32,
    gene_rate: f32,
}

impl BitFlipMutator {
    pub fn new(gene_rate: f32) -> EvolveResult<Self> {
        validate_rate(gene_rate, "gene")?;
        Ok(BitFlipMutator {
            individual_rate: 1.0,
            chromosome_rate: 1.0,
            gene_rate,
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
        Ok(BitFlipMutator {
            individual_rate,
            chromosome_rate,
            gene_rate,
        })
    }
}

impl Mutate<BitChromosome> for BitFlipMutator {
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
    fn mutate_gene(&self, gene: &BitGene) -> BitGene {
        gene.with_allele(&!gene.allele())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{Chromosome, Phenotype, Population};

    fn all_false_population(size: usize, length: usize) -> Population<BitChromosome> {
        Population::from((size, || {
            let genes = (0..length).map(|_| BitGene::from(false)).collect::<Vec<_>>();
            Phenotype::from((vec![BitChromosome::new(0).duplicate_with_genes(genes)], 0))
        }))
    }

    #[test]
    fn rejects_out_of_range_gene_rate() {
        assert!(BitFlipMutator::new(1.2).is_err());
    }

    #[test]
    fn all_rates_one_flips_every_bit() {
        let mut population = all_false_population(1, 8);
        let mutator = BitFlipMutator::new(1.0).unwrap();
        mutator.mutate(&mut population, 1);

        for gene in population.get(0).unwrap().genotype().iter().next().unwrap().iter() {
            assert!(*gene.allele());
        }
    }
}
