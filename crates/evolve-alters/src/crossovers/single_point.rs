use evolve_core::{Chromosome, Crossover, random_provider, validate_rate};
use evolve_error::{EvolveResult, evolve_bail};
use std::marker::PhantomData;

/// Splits two equal-length parent chromosomes at a single randomly chosen
/// index `i` in `[0, size]` and swaps the tails: offspring-1 is
/// `parent_one[..i] ++ parent_two[i..]`, offspring-2 is the mirror image.
pub struct SinglePointCrossover<C> {
    rate: f32,
    chromosome_rate: f32,
    _marker: PhantomData<fn() -> C>,
}

impl<C> SinglePointCrossover<C> {
    pub fn new(rate: f32) -> EvolveResult<Self> {
        validate_rate(rate, "crossover")?;
        Ok(SinglePointCrossover {
            rate,
            chromosome_rate: 1.0,
            _marker: PhantomData,
        })
    }

    pub fn with_chromosome_rate(rate: f32, chromosome_rate: f32) -> EvolveResult<Self> {
        validate_rate(rate, "crossover")?;
        validate_rate(chromosome_rate, "chromosome")?;
        Ok(SinglePointCrossover {
            rate,
            chromosome_rate,
            _marker: PhantomData,
        })
    }
}

impl<C: Chromosome> SinglePointCrossover<C> {
    /// Crosses `parents` at the explicit index `i`, failing rather than
    /// panicking if `i` is out of bounds.
    pub fn crossover_at(&self, i: usize, parents: (&C, &C)) -> EvolveResult<(C, C)> {
        let (parent_one, parent_two) = parents;
        if parent_one.len() != parent_two.len() {
            evolve_bail!(Crossover: "single-point crossover requires parents of equal length");
        }
        if i > parent_one.len() {
            evolve_bail!(
                Crossover:
                "single-point crossover index {} out of bounds for chromosome of length {}",
                i,
                parent_one.len()
            );
        }

        let mut child_one = parent_one.genes()[..i].to_vec();
        child_one.extend_from_slice(&parent_two.genes()[i..]);

        let mut child_two = parent_two.genes()[..i].to_vec();
        child_two.extend_from_slice(&parent_one.genes()[i..]);

        Ok((
            parent_one.duplicate_with_genes(child_one),
            parent_two.duplicate_with_genes(child_two),
        ))
    }
}

impl<C: Chromosome> Crossover<C> for SinglePointCrossover<C> {
    fn rate(&self) -> f32 {
        self.rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> EvolveResult<Vec<C>> {
        let (parent_one, parent_two) = (parents[0], parents[1]);
        let i = random_provider::range(0..=parent_one.len());
        let (child_one, child_two) = self.crossover_at(i, (parent_one, parent_two))?;
        Ok(vec![child_one, child_two])
    }
}
