use evolve_core::{Chromosome, Crossover, validate_rate};
use evolve_error::EvolveResult;
use std::marker::PhantomData;
use std::sync::Arc;

/// A crossover parameterized by a user-supplied function that combines the
/// aligned genes of `K` parents into a single offspring gene. `num_parents`
/// is fixed at construction time and validated against the function's
/// expected arity at each call.
pub struct CombineCrossover<C: Chromosome> {
    rate: f32,
    num_parents: usize,
    combine: Arc<dyn Fn(&[&C::Gene]) -> C::Gene + Send + Sync>,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Chromosome> CombineCrossover<C> {
    pub fn new(
        rate: f32,
        num_parents: usize,
        combine: impl Fn(&[&C::Gene]) -> C::Gene + Send + Sync + 'static,
    ) -> EvolveResult<Self> {
        validate_rate(rate, "crossover")?;
        Ok(CombineCrossover {
            rate,
            num_parents: num_parents.max(2),
            combine: Arc::new(combine),
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> Crossover<C> for CombineCrossover<C> {
    fn rate(&self) -> f32 {
        self.rate
    }

    fn num_parents(&self) -> usize {
        self.num_parents
    }

    fn num_offspring(&self) -> usize {
        1
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> EvolveResult<Vec<C>> {
        let length = parents[0].len();
        let mut genes = Vec::with_capacity(length);

        for i in 0..length {
            let aligned = parents.iter().map(|p| p.get(i)).collect::<Vec<_>>();
            genes.push((self.combine)(&aligned));
        }

        Ok(vec![parents[0].duplicate_with_genes(genes)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{FloatChromosome, FloatGene, Gene};

    #[test]
    fn rejects_out_of_range_rate() {
        let result = CombineCrossover::<FloatChromosome>::new(-0.5, 2, |genes| genes[0].clone());
        assert!(result.is_err());
    }

    #[test]
    fn combines_aligned_genes_with_user_function() {
        let crossover = CombineCrossover::<FloatChromosome>::new(1.0, 3, |genes: &[&FloatGene]| {
            let sum: f32 = genes.iter().map(|g| *g.allele()).sum();
            genes[0].with_allele(&sum)
        })
        .unwrap();

        let a = FloatChromosome::new(vec![FloatGene::from(1.0), FloatGene::from(2.0)]);
        let b = FloatChromosome::new(vec![FloatGene::from(10.0), FloatGene::from(20.0)]);
        let c = FloatChromosome::new(vec![FloatGene::from(100.0), FloatGene::from(200.0)]);

        let offspring = crossover.cross_chromosomes(&[&a, &b, &c]).unwrap();
        assert_eq!(offspring.len(), 1);

        let alleles = offspring[0].iter().map(|g| *g.allele()).collect::<Vec<_>>();
        assert_eq!(alleles, vec![111.0, 222.0]);
    }
}
