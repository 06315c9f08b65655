use crate::{Chromosome, Valid};
use evolve_error::{EvolveResult, evolve_err};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// The genetic makeup of an individual: an ordered collection of [`Chromosome`]s.
///
/// ```text
/// Genotype:
/// [
///     Chromosome: [Gene, Gene, Gene],
///     Chromosome: [Gene, Gene, Gene]
/// ]
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Genotype<C: Chromosome> {
    chromosomes: Vec<C>,
}

impl<C: Chromosome> Genotype<C> {
    pub fn new(chromosomes: Vec<C>) -> Self {
        Genotype { chromosomes }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.chromosomes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, C> {
        self.chromosomes.iter_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        self.chromosomes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut C> {
        self.chromosomes.get_mut(index)
    }

    /// Like [`Genotype::get`], but reports an out-of-bounds index as an
    /// [`EvolveError::InvalidIndex`](evolve_error::EvolveError::InvalidIndex)
    /// rather than `None`.
    pub fn get_checked(&self, index: usize) -> EvolveResult<&C> {
        self.chromosomes.get(index).ok_or_else(|| {
            evolve_err!(
                InvalidIndex:
                "chromosome index {} out of bounds for genotype of length {}",
                index,
                self.chromosomes.len()
            )
        })
    }

    /// Flatten every gene's allele, in chromosome then gene order, into a
    /// single vector. Useful for reporting/inspecting a genotype independent
    /// of its chromosome boundaries.
    pub fn flatten(&self) -> Vec<&<C as Chromosome>::Gene> {
        self.chromosomes
            .iter()
            .flat_map(|chromosome| chromosome.genes().iter())
            .collect()
    }

    /// Rebuild a genotype of the same chromosome-count shape as `self`, but
    /// with the given chromosomes.
    pub fn duplicate_with_chromosomes(&self, chromosomes: Vec<C>) -> Self {
        Genotype { chromosomes }
    }
}

impl<C: Chromosome> Valid for Genotype<C> {
    fn is_valid(&self) -> bool {
        !self.chromosomes.is_empty()
            && self
                .chromosomes
                .iter()
                .all(|chromosome| chromosome.is_valid())
    }
}

impl<C: Chromosome> AsRef<[C]> for Genotype<C> {
    fn as_ref(&self) -> &[C] {
        &self.chromosomes
    }
}

impl<C: Chromosome> Index<usize> for Genotype<C> {
    type Output = C;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chromosomes[index]
    }
}

impl<C: Chromosome> IndexMut<usize> for Genotype<C> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.chromosomes[index]
    }
}

impl<C: Chromosome> From<C> for Genotype<C> {
    fn from(chromosome: C) -> Self {
        Genotype {
            chromosomes: vec![chromosome],
        }
    }
}

impl<C: Chromosome> From<Vec<C>> for Genotype<C> {
    fn from(chromosomes: Vec<C>) -> Self {
        Genotype { chromosomes }
    }
}

impl<C: Chromosome> IntoIterator for Genotype<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.into_iter()
    }
}

impl<C: Chromosome> FromIterator<C> for Genotype<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Genotype {
            chromosomes: iter.into_iter().collect(),
        }
    }
}

unsafe impl<C: Chromosome> Send for Genotype<C> {}
unsafe impl<C: Chromosome> Sync for Genotype<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FloatChromosome, FloatGene};

    #[test]
    fn get_checked_reports_out_of_bounds() {
        let genotype = Genotype::from(FloatChromosome::from(FloatGene::from(0.0..1.0)));
        assert!(genotype.get_checked(0).is_ok());
        let err = genotype.get_checked(1).unwrap_err();
        assert_eq!(err.code(), evolve_error::ErrorCode::InvalidIndex);
    }

    #[test]
    fn flatten_walks_every_gene_in_order() {
        let genotype = Genotype::from(vec![
            FloatChromosome::from(vec![0.0, 1.0]),
            FloatChromosome::from(vec![2.0]),
        ]);
        let flat = genotype.flatten();
        assert_eq!(flat.len(), 3);
        assert_eq!(*flat[2].allele(), 2.0);
    }
}
