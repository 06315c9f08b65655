use evolve_core::{AlterResult, Chromosome, FilterableGene, Mutate, random_provider, validate_rate};
use evolve_error::EvolveResult;
use std::marker::PhantomData;

/// The 'default' gene-level mutator: each selected gene is regenerated through
/// its own [`FilterableGene::mutate`] contract, so a gene's `Filter` is
/// respected rather than bypassed. A gene that exhausts its rejection-sampling
/// budget is simply left unchanged and not counted as a mutation.
pub struct UniformMutator<C> {
    individual_rate: f32,
    chromosome_rate: f32,
    gene_rate: f32,
    _marker: PhantomData<fn() -> C>,
}

impl<C> UniformMutator<C> {
    /// Creates a mutator that always considers every individual and every
    /// chromosome, replacing each gene with probability `gene_rate`.
    pub fn new(gene_rate: f32) -> EvolveResult<Self> {
        validate_rate(gene_rate, "gene")?;
        Ok(UniformMutator {
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

        Ok(UniformMutator {
            individual_rate,
            chromosome_rate,
            gene_rate,
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> Mutate<C> for UniformMutator<C>
where
    C::Gene: FilterableGene,
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
    fn mutate_chromosome(&self, chromosome: &mut C) -> AlterResult {
        let mut count = 0;
        for gene in chromosome.iter_mut() {
            if random_provider::random::<f32>() < self.gene_rate() {
                if let Ok(mutated) = gene.mutate() {
                    *gene = mutated;
                    count += 1;
                }
            }
        }
        count.into()
    }
}
