use super::{
    Chromosome,
    gene::{ArithmeticGene, BoundedGene, Filter, FilterableGene, Gene, Valid},
};
use crate::random_provider;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::Range;

/// Absolute bounds a [`FloatGene`]'s allele can never exceed, regardless of the
/// `value_range`/`bounds` it was constructed with.
const MIN: f32 = -1e10;
const MAX: f32 = 1e10;

/// A [`Gene`] whose allele is an `f32` drawn from `value_range`, clamped to
/// `bounds` by arithmetic operations. An optional [`Filter`] further restricts
/// which alleles [`FilterableGene::mutate`] will accept.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatGene {
    allele: f32,
    value_range: Range<f32>,
    bounds: Range<f32>,
    #[cfg_attr(feature = "serde", serde(skip))]
    filter: Option<Filter<f32>>,
}

impl PartialEq for FloatGene {
    fn eq(&self, other: &Self) -> bool {
        self.allele == other.allele
            && self.value_range == other.value_range
            && self.bounds == other.bounds
    }
}

impl FloatGene {
    pub fn new(allele: f32, value_range: Range<f32>, bounds: Range<f32>) -> Self {
        FloatGene {
            allele,
            value_range: MIN.max(value_range.start)..MAX.min(value_range.end),
            bounds: MIN.max(bounds.start)..MAX.min(bounds.end),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: Filter<f32>) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl Valid for FloatGene {
    fn is_valid(&self) -> bool {
        self.allele >= self.bounds.start && self.allele <= self.bounds.end
    }
}

impl Gene for FloatGene {
    type Allele = f32;

    fn allele(&self) -> &f32 {
        &self.allele
    }

    fn allele_mut(&mut self) -> &mut f32 {
        &mut self.allele
    }

    fn new_instance(&self) -> FloatGene {
        FloatGene {
            allele: random_provider::range(self.value_range.clone()),
            value_range: self.value_range.clone(),
            bounds: self.bounds.clone(),
            filter: self.filter.clone(),
        }
    }

    fn with_allele(&self, allele: &f32) -> FloatGene {
        FloatGene {
            allele: *allele,
            value_range: self.value_range.clone(),
            bounds: self.bounds.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl BoundedGene for FloatGene {
    fn min(&self) -> &Self::Allele {
        &self.value_range.start
    }

    fn max(&self) -> &Self::Allele {
        &self.value_range.end
    }

    fn bounds(&self) -> (&Self::Allele, &Self::Allele) {
        (&self.bounds.start, &self.bounds.end)
    }
}

impl ArithmeticGene for FloatGene {
    fn mean(&self, other: &FloatGene) -> FloatGene {
        self.with_allele(&((self.allele + other.allele) * 0.5).clamp(self.bounds.start, self.bounds.end))
    }

    fn add(&self, other: &FloatGene) -> FloatGene {
        self.with_allele(&(self.allele + other.allele).clamp(self.bounds.start, self.bounds.end))
    }

    fn sub(&self, other: &FloatGene) -> FloatGene {
        self.with_allele(&(self.allele - other.allele).clamp(self.bounds.start, self.bounds.end))
    }

    fn mul(&self, other: &FloatGene) -> FloatGene {
        self.with_allele(&(self.allele * other.allele).clamp(self.bounds.start, self.bounds.end))
    }

    fn div(&self, other: &FloatGene) -> FloatGene {
        let denominator = if other.allele == 0.0 { 1.0 } else { other.allele };
        self.with_allele(&(self.allele / denominator).clamp(self.bounds.start, self.bounds.end))
    }
}

impl FilterableGene for FloatGene {
    fn filter(&self) -> Option<&Filter<f32>> {
        self.filter.as_ref()
    }
}

impl Default for FloatGene {
    fn default() -> Self {
        FloatGene {
            allele: 0.0,
            value_range: MIN..MAX,
            bounds: MIN..MAX,
            filter: None,
        }
    }
}

impl From<FloatGene> for f32 {
    fn from(gene: FloatGene) -> f32 {
        gene.allele
    }
}

impl From<f32> for FloatGene {
    fn from(allele: f32) -> Self {
        FloatGene {
            allele,
            value_range: MIN..MAX,
            bounds: MIN..MAX,
            filter: None,
        }
    }
}

impl From<Range<f32>> for FloatGene {
    fn from(range: Range<f32>) -> Self {
        let (min, max) = (range.start.max(MIN), range.end.min(MAX));
        FloatGene {
            allele: random_provider::range(range),
            value_range: min..max,
            bounds: min..max,
            filter: None,
        }
    }
}

impl From<(Range<f32>, Range<f32>)> for FloatGene {
    fn from((value_range, bounds): (Range<f32>, Range<f32>)) -> Self {
        let value_range = value_range.start.max(MIN)..value_range.end.min(MAX);
        let bounds = bounds.start.max(MIN)..bounds.end.min(MAX);
        let allele = random_provider::range(value_range.clone());

        FloatGene {
            allele,
            value_range,
            bounds,
            filter: None,
        }
    }
}

impl Display for FloatGene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.allele)
    }
}

impl Debug for FloatGene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.allele)
    }
}

/// A chromosome of [`FloatGene`]s, used for real-valued optimization problems.
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatChromosome {
    genes: Vec<FloatGene>,
}

impl FloatChromosome {
    pub fn new(genes: Vec<FloatGene>) -> Self {
        FloatChromosome { genes }
    }
}

impl Chromosome for FloatChromosome {
    type Gene = FloatGene;

    fn genes(&self) -> &[Self::Gene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [Self::Gene] {
        &mut self.genes
    }

    fn duplicate_with_genes(&self, genes: Vec<Self::Gene>) -> Self {
        FloatChromosome { genes }
    }
}

impl Valid for FloatChromosome {
    fn is_valid(&self) -> bool {
        self.genes.iter().all(|gene| gene.is_valid())
    }
}

impl From<FloatGene> for FloatChromosome {
    fn from(gene: FloatGene) -> Self {
        FloatChromosome { genes: vec![gene] }
    }
}

impl From<Vec<FloatGene>> for FloatChromosome {
    fn from(genes: Vec<FloatGene>) -> Self {
        FloatChromosome { genes }
    }
}

impl From<Vec<f32>> for FloatChromosome {
    fn from(alleles: Vec<f32>) -> Self {
        FloatChromosome {
            genes: alleles.into_iter().map(FloatGene::from).collect(),
        }
    }
}

impl From<(usize, Range<f32>)> for FloatChromosome {
    fn from((size, range): (usize, Range<f32>)) -> Self {
        FloatChromosome {
            genes: (0..size).map(|_| FloatGene::from(range.clone())).collect(),
        }
    }
}

impl From<(usize, Range<f32>, Range<f32>)> for FloatChromosome {
    fn from((size, range, bounds): (usize, Range<f32>, Range<f32>)) -> Self {
        FloatChromosome {
            genes: (0..size)
                .map(|_| FloatGene::from((range.clone(), bounds.clone())))
                .collect(),
        }
    }
}

impl FromIterator<FloatGene> for FloatChromosome {
    fn from_iter<I: IntoIterator<Item = FloatGene>>(iter: I) -> Self {
        FloatChromosome {
            genes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FloatChromosome {
    type Item = FloatGene;
    type IntoIter = std::vec::IntoIter<FloatGene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}

impl Debug for FloatChromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_validity() {
        let gene_one = FloatGene::from(0_f32..1_f32);
        let gene_two = FloatGene::from((-1.0..1.0, -100.0..100.0));

        assert_eq!(*gene_one.max(), 1_f32);
        assert_eq!(gene_one.bounds().0, &0_f32);
        assert!(gene_one.is_valid());

        assert_eq!(*gene_two.max(), 1.0);
        assert_eq!(gene_two.bounds().0, &-100.0);
        assert!(gene_two.is_valid());
    }

    #[test]
    fn arithmetic_clamps_to_bounds() {
        let one = FloatGene::new(5.0, 0.0..10.0, 0.0..10.0);
        let two = FloatGene::new(5.0, 0.0..10.0, 0.0..10.0);
        let really_big = FloatGene::new(100000.0, 0.0..10.0, 0.0..10.0);

        assert_eq!(*one.add(&two).allele(), 10.0);
        assert_eq!(*one.sub(&two).allele(), 0.0);
        assert_eq!(*one.mul(&two).allele(), 10.0);
        assert_eq!(*one.div(&two).allele(), 1.0);
        assert_eq!(*one.add(&really_big).allele(), 10.0);
    }

    #[test]
    fn division_by_zero_allele_falls_back_to_one() {
        let five = FloatGene::from(5_f32);
        let zero = FloatGene::from(0_f32);
        assert_eq!(*five.div(&zero).allele(), 5_f32);
    }

    #[test]
    fn chromosome_from_range() {
        let chromosome = FloatChromosome::from((10, -1.0..1.0));
        assert_eq!(chromosome.len(), 10);
        assert!(chromosome.is_valid());
        for gene in chromosome.iter() {
            assert!(gene.is_valid());
            assert!(*gene.allele() >= -1.0 && *gene.allele() <= 1.0);
        }
    }

    #[test]
    fn filtered_mutation_rejects_out_of_window_values() {
        let gene = FloatGene::new(5.0, 0.0..10.0, 0.0..10.0)
            .with_filter(std::sync::Arc::new(|v: &f32| *v >= 4.0 && *v <= 6.0));
        for _ in 0..20 {
            let mutated = gene.mutate().unwrap();
            assert!(*mutated.allele() >= 4.0 && *mutated.allele() <= 6.0);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn float_gene_round_trips_through_json() {
        let gene = FloatGene::from(0.5_f32..1.5_f32);
        let serialized = serde_json::to_string(&gene).unwrap();
        let deserialized: FloatGene = serde_json::from_str(&serialized).unwrap();
        assert_eq!(gene, deserialized);
    }
}
