use super::{Valid, gene::Gene};

/// The genetic makeup of one part of an individual: a light wrapper around a
/// slice of [`Gene`]s with the accessors crossovers and mutators need.
///
/// ```text
/// Chromosome: [Gene, Gene, Gene]
/// ```
pub trait Chromosome: Valid + Clone {
    type Gene: Gene;

    fn genes(&self) -> &[Self::Gene];
    fn genes_mut(&mut self) -> &mut [Self::Gene];

    /// Rebuild a chromosome of the same shape/config as `self`, but with the
    /// given genes. Used by crossovers and mutators that must hand back new
    /// chromosomes without access to each concrete constructor.
    fn duplicate_with_genes(&self, genes: Vec<Self::Gene>) -> Self;

    fn get(&self, index: usize) -> &Self::Gene {
        &self.genes()[index]
    }

    fn get_mut(&mut self, index: usize) -> &mut Self::Gene {
        &mut self.genes_mut()[index]
    }

    fn set(&mut self, index: usize, gene: Self::Gene) {
        self.genes_mut()[index] = gene;
    }

    fn len(&self) -> usize {
        self.genes().len()
    }

    fn is_empty(&self) -> bool {
        self.genes().is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, Self::Gene> {
        self.genes().iter()
    }

    fn iter_mut(&mut self) -> std::slice::IterMut<'_, Self::Gene> {
        self.genes_mut().iter_mut()
    }
}
