use crate::genome::genotype::Genotype;
use crate::{
    BitChromosome, BitGene, CharChromosome, CharGene, Chromosome, FloatChromosome, FloatGene,
    IntChromosome, IntGene, Integer, PermutationChromosome, PermutationGene, random_provider,
};
use evolve_error::{EvolveResult, evolve_err};
use std::ops::Range;
use std::sync::Arc;

use crate::genome::chromosomes::gene::Filter;

/// Draws a fresh instance of `Self::Chromosome` from the current RNG context.
///
/// Every chromosome factory accumulates configuration additively: a `size`,
/// and per-gene `ranges`/`filters` lists whose length must be 0 (use the
/// factory's default), 1 (broadcast to every gene), or exactly `size`
/// (one entry per gene). Any other length fails at [`ChromosomeFactory::make`]
/// time with [`evolve_error::ErrorCode::InvalidConfig`].
pub trait ChromosomeFactory {
    type Chromosome: Chromosome;

    fn make(&self) -> EvolveResult<Self::Chromosome>;
}

/// Composes a list of chromosome factories into a [`Genotype`] factory.
///
/// Chromosomes produced by a `GenotypeFactory` may differ in shape (size,
/// ranges) from one another, but every sub-factory must produce the same
/// concrete chromosome type `F::Chromosome`.
#[derive(Clone)]
pub struct GenotypeFactory<F: ChromosomeFactory> {
    factories: Vec<F>,
}

impl<F: ChromosomeFactory> GenotypeFactory<F> {
    pub fn new(factories: Vec<F>) -> Self {
        GenotypeFactory { factories }
    }

    pub fn make(&self) -> EvolveResult<Genotype<F::Chromosome>> {
        let chromosomes = self
            .factories
            .iter()
            .map(ChromosomeFactory::make)
            .collect::<EvolveResult<Vec<_>>>()?;
        Ok(Genotype::new(chromosomes))
    }
}

/// Broadcast an additive configuration list against a chromosome `size`:
/// empty uses `default`, length 1 broadcasts that single entry, length
/// `size` is taken as-is, anything else is a configuration error.
fn broadcast<T: Clone>(values: &[T], size: usize, default: T, name: &str) -> EvolveResult<Vec<T>> {
    match values.len() {
        0 => Ok(vec![default; size]),
        1 => Ok(vec![values[0].clone(); size]),
        n if n == size => Ok(values.to_vec()),
        n => Err(evolve_err!(
            InvalidConfig:
            "{} list length {} must be 0, 1, or the chromosome size {}",
            name,
            n,
            size
        )),
    }
}

/// Factory for [`FloatChromosome`]s.
#[derive(Clone)]
pub struct FloatChromosomeFactory {
    size: usize,
    default_range: Range<f32>,
    ranges: Vec<Range<f32>>,
    filters: Vec<Option<Filter<f32>>>,
}

impl FloatChromosomeFactory {
    pub fn new(size: usize, default_range: Range<f32>) -> Self {
        FloatChromosomeFactory {
            size,
            default_range,
            ranges: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_ranges(mut self, ranges: Vec<Range<f32>>) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_filters(mut self, filters: Vec<Option<Filter<f32>>>) -> Self {
        self.filters = filters;
        self
    }
}

impl ChromosomeFactory for FloatChromosomeFactory {
    type Chromosome = FloatChromosome;

    fn make(&self) -> EvolveResult<FloatChromosome> {
        let ranges = broadcast(&self.ranges, self.size, self.default_range.clone(), "ranges")?;
        let filters = broadcast(&self.filters, self.size, None, "filters")?;

        let genes = ranges
            .into_iter()
            .zip(filters)
            .map(|(range, filter)| {
                let gene = FloatGene::from(range);
                match filter {
                    Some(f) => gene.with_filter(f),
                    None => gene,
                }
            })
            .collect();

        Ok(FloatChromosome::new(genes))
    }
}

/// Factory for [`IntChromosome<T>`]s.
#[derive(Clone)]
pub struct IntChromosomeFactory<T: Integer<T>> {
    size: usize,
    default_range: Range<T>,
    ranges: Vec<Range<T>>,
    filters: Vec<Option<Filter<T>>>,
}

impl<T: Integer<T>> IntChromosomeFactory<T> {
    pub fn new(size: usize, default_range: Range<T>) -> Self {
        IntChromosomeFactory {
            size,
            default_range,
            ranges: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_ranges(mut self, ranges: Vec<Range<T>>) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_filters(mut self, filters: Vec<Option<Filter<T>>>) -> Self {
        self.filters = filters;
        self
    }
}

impl<T: Integer<T>> ChromosomeFactory for IntChromosomeFactory<T> {
    type Chromosome = IntChromosome<T>;

    fn make(&self) -> EvolveResult<IntChromosome<T>> {
        let ranges = broadcast(&self.ranges, self.size, self.default_range.clone(), "ranges")?;
        let filters = broadcast(&self.filters, self.size, None, "filters")?;

        let genes = ranges
            .into_iter()
            .zip(filters)
            .map(|(range, filter)| {
                let gene = IntGene::from(range);
                match filter {
                    Some(f) => gene.with_filter(f),
                    None => gene,
                }
            })
            .collect();

        Ok(IntChromosome::new(genes))
    }
}

/// Factory for [`BitChromosome`]s. Every bit is sampled independently with
/// probability `p` of being `true`.
#[derive(Clone)]
pub struct BitChromosomeFactory {
    size: usize,
    p: f32,
}

impl BitChromosomeFactory {
    pub fn new(size: usize, p: f32) -> Self {
        BitChromosomeFactory { size, p }
    }
}

impl ChromosomeFactory for BitChromosomeFactory {
    type Chromosome = BitChromosome;

    fn make(&self) -> EvolveResult<BitChromosome> {
        if !(0.0..=1.0).contains(&self.p) {
            return Err(evolve_err!(
                InvalidConfig: "bit probability {} must be in [0, 1]",
                self.p
            ));
        }

        let genes: Vec<BitGene> = (0..self.size)
            .map(|_| BitGene::from(random_provider::bool(self.p)))
            .collect();

        Ok(BitChromosome::from(genes))
    }
}

/// Factory for [`CharChromosome`]s, drawing from a shared character set.
#[derive(Clone)]
pub struct CharChromosomeFactory {
    size: usize,
    char_set: Arc<[char]>,
}

impl CharChromosomeFactory {
    pub fn new(size: usize, char_set: Arc<[char]>) -> Self {
        CharChromosomeFactory { size, char_set }
    }
}

impl ChromosomeFactory for CharChromosomeFactory {
    type Chromosome = CharChromosome;

    fn make(&self) -> EvolveResult<CharChromosome> {
        let genes = (0..self.size)
            .map(|_| CharGene::new(Arc::clone(&self.char_set)))
            .collect();

        Ok(CharChromosome::new(genes))
    }
}

/// Factory for [`PermutationChromosome<A>`]s. Produces a random permutation
/// of the full `alleles` set - the chromosome size is always `alleles.len()`.
#[derive(Clone)]
pub struct PermutationChromosomeFactory<A: PartialEq + Clone> {
    alleles: Arc<[A]>,
}

impl<A: PartialEq + Clone> PermutationChromosomeFactory<A> {
    pub fn new(alleles: Arc<[A]>) -> Self {
        PermutationChromosomeFactory { alleles }
    }
}

impl<A: PartialEq + Clone> ChromosomeFactory for PermutationChromosomeFactory<A> {
    type Chromosome = PermutationChromosome<A>;

    fn make(&self) -> EvolveResult<PermutationChromosome<A>> {
        if self.alleles.is_empty() {
            return Err(evolve_err!(
                InvalidConfig: "permutation chromosome factory requires a non-empty allele set"
            ));
        }

        let indices = random_provider::shuffled_indices(0..self.alleles.len());
        let genes = indices
            .into_iter()
            .map(|index| PermutationGene::new(index, Arc::clone(&self.alleles)))
            .collect();

        Ok(PermutationChromosome::new(genes, Arc::clone(&self.alleles)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gene, Valid};

    #[test]
    fn float_factory_broadcasts_single_range() {
        let factory =
            FloatChromosomeFactory::new(4, 0.0..1.0).with_ranges(vec![-1.0..1.0]);
        let chromosome = factory.make().unwrap();
        assert_eq!(chromosome.len(), 4);
        for gene in chromosome.genes() {
            assert!(*gene.allele() >= -1.0 && *gene.allele() <= 1.0);
        }
    }

    #[test]
    fn float_factory_rejects_mismatched_range_length() {
        let factory = FloatChromosomeFactory::new(4, 0.0..1.0)
            .with_ranges(vec![-1.0..1.0, 0.0..1.0]);
        let err = factory.make().unwrap_err();
        assert_eq!(err.code(), evolve_error::ErrorCode::InvalidConfig);
    }

    #[test]
    fn float_factory_zips_per_gene_ranges() {
        let factory = FloatChromosomeFactory::new(2, 0.0..1.0)
            .with_ranges(vec![0.0..1.0, 10.0..11.0]);
        let chromosome = factory.make().unwrap();
        assert!(*chromosome.genes()[0].allele() < 1.0);
        assert!(*chromosome.genes()[1].allele() >= 10.0);
    }

    #[test]
    fn bit_factory_rejects_out_of_range_probability() {
        let factory = BitChromosomeFactory::new(4, 1.5);
        assert!(factory.make().is_err());
    }

    #[test]
    fn permutation_factory_produces_full_permutation() {
        let alleles: Arc<[i32]> = Arc::new([0, 1, 2, 3, 4]);
        let factory = PermutationChromosomeFactory::new(alleles);
        let chromosome = factory.make().unwrap();
        assert!(chromosome.is_valid());
        assert_eq!(chromosome.len(), 5);
    }

    #[test]
    fn genotype_factory_composes_chromosome_factories() {
        let factory = GenotypeFactory::new(vec![
            FloatChromosomeFactory::new(2, 0.0..1.0),
            FloatChromosomeFactory::new(3, -1.0..1.0),
        ]);
        let genotype = factory.make().unwrap();
        assert_eq!(genotype.len(), 2);
        assert_eq!(genotype.get(0).unwrap().len(), 2);
        assert_eq!(genotype.get(1).unwrap().len(), 3);
    }
}
