use super::{
    Chromosome,
    gene::{ArithmeticGene, BoundedGene, Filter, FilterableGene, Gene, Valid},
};
use crate::random_provider;
use rand::distr::uniform::SampleUniform;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Range, Sub};

/// The primitive integer types that can back an [`IntGene`].
pub trait Integer<T>:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = T>
    + Sub<Output = T>
    + Mul<Output = T>
    + Div<Output = T>
    + SampleUniform
    + Debug
    + Send
    + Sync
{
    const MIN: T;
    const MAX: T;

    fn from_i32(value: i32) -> T;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Integer<$t> for $t {
                const MIN: $t = <$t>::MIN;
                const MAX: $t = <$t>::MAX;

                fn from_i32(value: i32) -> $t {
                    value as $t
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize);

/// A [`Gene`] wrapping an integer allele, generic over any [`Integer`] primitive.
#[derive(Clone, PartialEq)]
pub struct IntGene<T: Integer<T>> {
    pub allele: T,
    pub value_range: Range<T>,
    pub bounds: Range<T>,
    filter: Option<Filter<T>>,
}

impl<T: Integer<T>> IntGene<T> {
    pub fn with_filter(mut self, filter: Filter<T>) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl<T: Integer<T>> Gene for IntGene<T> {
    type Allele = T;

    fn allele(&self) -> &T {
        &self.allele
    }

    fn allele_mut(&mut self) -> &mut T {
        &mut self.allele
    }

    fn new_instance(&self) -> IntGene<T> {
        IntGene {
            allele: random_provider::range(self.value_range.clone()),
            value_range: self.value_range.clone(),
            bounds: self.bounds.clone(),
            filter: self.filter.clone(),
        }
    }

    fn with_allele(&self, allele: &T) -> IntGene<T> {
        IntGene {
            allele: *allele,
            value_range: self.value_range.clone(),
            bounds: self.bounds.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<T: Integer<T>> Valid for IntGene<T> {
    fn is_valid(&self) -> bool {
        self.allele >= self.bounds.start && self.allele <= self.bounds.end
    }
}

impl<T: Integer<T>> BoundedGene for IntGene<T> {
    fn min(&self) -> &T {
        &self.value_range.start
    }

    fn max(&self) -> &T {
        &self.value_range.end
    }
}

impl<T: Integer<T>> ArithmeticGene for IntGene<T> {
    fn mean(&self, other: &IntGene<T>) -> IntGene<T> {
        self.with_allele(&((self.allele + other.allele) / T::from_i32(2)))
    }

    fn add(&self, other: &IntGene<T>) -> IntGene<T> {
        self.with_allele(&(self.allele + other.allele))
    }

    fn sub(&self, other: &IntGene<T>) -> IntGene<T> {
        self.with_allele(&(self.allele - other.allele))
    }

    fn mul(&self, other: &IntGene<T>) -> IntGene<T> {
        self.with_allele(&(self.allele * other.allele))
    }

    fn div(&self, other: &IntGene<T>) -> IntGene<T> {
        let denominator = if other.allele == T::from_i32(0) {
            T::from_i32(1)
        } else {
            other.allele
        };
        self.with_allele(&(self.allele / denominator))
    }
}

impl<T: Integer<T>> FilterableGene for IntGene<T> {
    fn filter(&self) -> Option<&Filter<T>> {
        self.filter.as_ref()
    }
}

impl<T: Integer<T>> From<T> for IntGene<T> {
    fn from(allele: T) -> Self {
        IntGene {
            allele,
            value_range: T::MIN..T::MAX,
            bounds: T::MIN..T::MAX,
            filter: None,
        }
    }
}

impl<T: Integer<T>> From<Range<T>> for IntGene<T> {
    fn from(range: Range<T>) -> Self {
        let (min, max) = (range.start, range.end);
        IntGene {
            allele: random_provider::range(range),
            value_range: min..max,
            bounds: min..max,
            filter: None,
        }
    }
}

impl<T: Integer<T>> From<(Range<T>, Range<T>)> for IntGene<T> {
    fn from((range, bounds): (Range<T>, Range<T>)) -> Self {
        IntGene {
            allele: random_provider::range(range.clone()),
            value_range: range,
            bounds,
            filter: None,
        }
    }
}

impl<T: Integer<T>> std::fmt::Debug for IntGene<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.allele)
    }
}

/// A [`Chromosome`] of [`IntGene<T>`]s.
#[derive(Clone, PartialEq, Debug)]
pub struct IntChromosome<T: Integer<T>> {
    pub genes: Vec<IntGene<T>>,
}

impl<T: Integer<T>> IntChromosome<T> {
    pub fn new(genes: Vec<IntGene<T>>) -> Self {
        IntChromosome { genes }
    }
}

impl<T: Integer<T>> Default for IntChromosome<T> {
    fn default() -> Self {
        IntChromosome { genes: Vec::new() }
    }
}

impl<T: Integer<T>> Chromosome for IntChromosome<T> {
    type Gene = IntGene<T>;

    fn genes(&self) -> &[Self::Gene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [Self::Gene] {
        &mut self.genes
    }

    fn duplicate_with_genes(&self, genes: Vec<Self::Gene>) -> Self {
        IntChromosome { genes }
    }
}

impl<T: Integer<T>> Valid for IntChromosome<T> {
    fn is_valid(&self) -> bool {
        self.genes.iter().all(|gene| gene.is_valid())
    }
}

impl<T: Integer<T>> From<(usize, Range<T>)> for IntChromosome<T> {
    fn from((size, range): (usize, Range<T>)) -> Self {
        IntChromosome {
            genes: (0..size).map(|_| IntGene::from(range.clone())).collect(),
        }
    }
}

impl<T: Integer<T>> From<(usize, Range<T>, Range<T>)> for IntChromosome<T> {
    fn from((size, range, bounds): (usize, Range<T>, Range<T>)) -> Self {
        IntChromosome {
            genes: (0..size)
                .map(|_| IntGene::from((range.clone(), bounds.clone())))
                .collect(),
        }
    }
}

impl<T: Integer<T>> From<Vec<T>> for IntChromosome<T> {
    fn from(alleles: Vec<T>) -> Self {
        IntChromosome {
            genes: alleles.into_iter().map(IntGene::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_instance_stays_in_range() {
        let gene = IntGene::from(0..10);
        let new_gene = gene.new_instance();
        assert!(new_gene.allele >= 0 && new_gene.allele <= 10);
    }

    #[test]
    fn bounds_are_reported() {
        let gene_one = IntGene::from((0..10, 0..10));
        let gene_two = IntGene::from((0..10, -100..100));

        assert_eq!(*gene_one.min(), 0);
        assert_eq!(*gene_one.max(), 10);
        assert_eq!(gene_two.bounds(), (&-100, &100));
        assert!(gene_one.is_valid());
        assert!(gene_two.is_valid());
    }

    #[test]
    fn arithmetic() {
        let gene_one = IntGene::from(5);
        let gene_two = IntGene::from(5);
        let zero_gene = IntGene::from(0);

        assert_eq!(gene_one.add(&gene_two).allele, 10);
        assert_eq!(gene_one.sub(&gene_two).allele, 0);
        assert_eq!(gene_one.mul(&gene_two).allele, 25);
        assert_eq!(gene_one.div(&gene_two).allele, 1);
        assert_eq!(gene_one.div(&zero_gene).allele, 5);
        assert_eq!(gene_one.mean(&gene_two).allele, 5);
    }

    #[test]
    fn chromosome_from_range_with_bounds() {
        let chromosome = IntChromosome::from((10, 0..10, -10..10));
        assert_eq!(chromosome.genes.len(), 10);
        for gene in &chromosome.genes {
            assert!(gene.allele >= 0 && gene.allele <= 10);
            assert_eq!(gene.bounds, -10..10);
        }
    }

    #[test]
    fn filtered_mutation_only_accepts_even_values() {
        let gene = IntGene::from(0..100).with_filter(std::sync::Arc::new(|v: &i32| v % 2 == 0));
        for _ in 0..20 {
            let mutated = gene.mutate().unwrap();
            assert_eq!(mutated.allele % 2, 0);
        }
    }
}
