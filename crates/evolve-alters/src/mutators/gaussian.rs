use evolve_core::{BoundedGene, FloatChromosome, FloatGene, Gene, Mutate, random_provider, validate_rate};
use evolve_error::EvolveResult;

/// Perturbs a [`FloatGene`]'s allele by Gaussian noise centered on its current
/// value, with standard deviation a quarter of its value range, clamped back
/// into that range.
pub struct GaussianMutator {
    individual_rate: f32,
    chromosome_rate: f32,
    gene_rate: f32,
}

impl GaussianMutator {
    pub fn new(gene_rate: f32) -> EvolveResult<Self> {
        validate_rate(gene_rate, "gene")?;
        Ok(GaussianMutator {
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
        Ok(GaussianMutator {
            individual_rate,
            chromosome_rate,
            gene_rate,
        })
    }
}

impl Mutate<FloatChromosome> for GaussianMutator {
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
    fn mutate_gene(&self, gene: &FloatGene) -> FloatGene {
        let (min, max) = (*gene.min() as f64, *gene.max() as f64);
        let std_dev = (max - min).abs() * 0.25;
        let value = *gene.allele() as f64;

        let perturbed = random_provider::gaussian(value, std_dev).clamp(min, max) as f32;
        gene.with_allele(&perturbed)
    }
}
