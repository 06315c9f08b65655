use evolve_core::{Chromosome, Crossover, PermutationChromosome, SubsetMode, Valid, indexes, validate_rate};
use evolve_error::{EvolveResult, evolve_bail};

/// Partially-mapped crossover: preserves the permutation invariant (every
/// offspring is a permutation of the same multiset of alleles as its
/// parents). Copies a randomly chosen slice between the two parents, then
/// repairs the remaining positions by following each gene's mapping chain
/// until it lands outside the copied slice.
pub struct PMXCrossover {
    rate: f32,
}

impl PMXCrossover {
    pub fn new(rate: f32) -> EvolveResult<Self> {
        validate_rate(rate, "crossover")?;
        Ok(PMXCrossover { rate })
    }
}

impl<A: PartialEq + Clone> Crossover<PermutationChromosome<A>> for PMXCrossover {
    fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    fn cross_chromosomes(
        &self,
        parents: &[&PermutationChromosome<A>],
    ) -> EvolveResult<Vec<PermutationChromosome<A>>> {
        let (chrom_one, chrom_two) = (parents[0], parents[1]);

        if !chrom_one.is_valid() || !chrom_two.is_valid() {
            evolve_bail!(Crossover: "permutation crossover requires valid permutation chromosomes");
        }
        if chrom_one.genes().len() != chrom_two.genes().len() {
            evolve_bail!(Crossover: "permutation crossover requires parents of equal length");
        }

        let length = chrom_one.genes().len();
        if length < 2 {
            return Ok(vec![chrom_one.clone(), chrom_two.clone()]);
        }

        let subset = indexes::subset(length, 2, SubsetMode::StratifiedCorrect);
        let (start, end) = (subset[0], subset[1]);

        let mut offspring_one = chrom_one.genes().to_vec();
        let mut offspring_two = chrom_two.genes().to_vec();

        offspring_one[start..=end].clone_from_slice(&chrom_two.genes()[start..=end]);
        offspring_two[start..=end].clone_from_slice(&chrom_one.genes()[start..=end]);

        for i in 0..length {
            if i < start || i > end {
                let mut gene_one = chrom_one.get(i);
                let mut gene_two = chrom_two.get(i);

                while offspring_one[start..=end].contains(gene_one) {
                    let index = chrom_two.genes().iter().position(|g| g == gene_one).unwrap();
                    gene_one = chrom_one.get(index);
                }

                while offspring_two[start..=end].contains(gene_two) {
                    let index = chrom_one.genes().iter().position(|g| g == gene_two).unwrap();
                    gene_two = chrom_two.get(index);
                }

                offspring_one[i] = gene_one.clone();
                offspring_two[i] = gene_two.clone();
            }
        }

        Ok(vec![
            chrom_one.duplicate_with_genes(offspring_one),
            chrom_two.duplicate_with_genes(offspring_two),
        ])
    }
}
