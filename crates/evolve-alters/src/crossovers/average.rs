use evolve_core::{ArithmeticGene, Chromosome, Crossover, random_provider, validate_rate};
use evolve_error::{EvolveResult, evolve_bail};
use std::marker::PhantomData;

/// At each aligned gene index, with probability `gene_rate` replaces
/// parent-one's gene with the arithmetic mean of the two parents' genes;
/// otherwise copies parent-one's gene unchanged. Produces a single offspring.
///
/// Converging genes toward a shared mean trades population diversity for
/// faster convergence, so this crossover suits numeric optimization more than
/// combinatorial search.
pub struct AverageCrossover<C> {
    rate: f32,
    gene_rate: f32,
    _marker: PhantomData<fn() -> C>,
}

impl<C> AverageCrossover<C> {
    pub fn new(gene_rate: f32) -> EvolveResult<Self> {
        validate_rate(gene_rate, "gene")?;
        Ok(AverageCrossover {
            rate: 1.0,
            gene_rate,
            _marker: PhantomData,
        })
    }

    pub fn with_rate(rate: f32, gene_rate: f32) -> EvolveResult<Self> {
        validate_rate(rate, "crossover")?;
        validate_rate(gene_rate, "gene")?;
        Ok(AverageCrossover {
            rate,
            gene_rate,
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> Crossover<C> for AverageCrossover<C>
where
    C::Gene: ArithmeticGene,
{
    fn rate(&self) -> f32 {
        self.rate
    }

    fn num_offspring(&self) -> usize {
        1
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> EvolveResult<Vec<C>> {
        let (parent_one, parent_two) = (parents[0], parents[1]);
        if parent_one.len() != parent_two.len() {
            evolve_bail!(Crossover: "average crossover requires parents of equal length");
        }

        let genes = parent_one
            .iter()
            .zip(parent_two.iter())
            .map(|(gene_one, gene_two)| {
                if random_provider::random::<f32>() < self.gene_rate {
                    gene_one.mean(gene_two)
                } else {
                    gene_one.clone()
                }
            })
            .collect();

        Ok(vec![parent_one.duplicate_with_genes(genes)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{FloatChromosome, FloatGene, Gene};

    #[test]
    fn rejects_out_of_range_gene_rate() {
        assert!(AverageCrossover::<FloatChromosome>::new(-1.0).is_err());
    }

    #[test]
    fn averages_every_gene_when_gene_rate_one() {
        let one = FloatChromosome::new(vec![FloatGene::from(0.0), FloatGene::from(10.0)]);
        let two = FloatChromosome::new(vec![FloatGene::from(4.0), FloatGene::from(20.0)]);

        let crossover = AverageCrossover::<FloatChromosome>::new(1.0).unwrap();
        let offspring = crossover.cross_chromosomes(&[&one, &two]).unwrap();

        assert_eq!(offspring.len(), 1);
        let alleles = offspring[0].iter().map(|g| *g.allele()).collect::<Vec<_>>();
        assert_eq!(alleles, vec![2.0, 15.0]);
    }
}
