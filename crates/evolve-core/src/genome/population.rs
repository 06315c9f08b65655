use super::phenotype::Phenotype;
use crate::objectives::Scored;
use crate::{Chromosome, Optimize, Score};
use std::fmt::Debug;
use std::ops::{Index, IndexMut, Range};

/// A `Population` is a collection of `Phenotype` instances. This struct is the core collection of individuals
/// being evolved by the engine. It can be thought of as a Vec of `Phenotype`s and
/// is essentially a light wrapper around such a Vec. The `Population` struct, however, has some
/// additional functionality that allows for sorting and iteration over the individuals in the population.
///
/// # Type Parameters
/// - `C`: The type of chromosome used in the genotype, which must implement the `Chromosome` trait.
#[derive(Clone, Default)]
pub struct Population<C: Chromosome> {
    individuals: Vec<Phenotype<C>>,
    is_sorted: bool,
}

impl<C: Chromosome> Population<C> {
    /// Create a new instance of the Population with the given individuals.
    /// This will set the is_sorted flag to false.
    pub fn new(individuals: Vec<Phenotype<C>>) -> Self {
        Population {
            individuals,
            is_sorted: false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Phenotype<C>> {
        self.individuals.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Phenotype<C>> {
        self.is_sorted = false;
        self.individuals.get_mut(index)
    }

    pub fn push(&mut self, individual: Phenotype<C>) {
        self.is_sorted = false;
        self.individuals.push(individual);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phenotype<C>> {
        self.individuals.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Phenotype<C>> {
        self.is_sorted = false;
        self.individuals.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn clear(&mut self) {
        self.is_sorted = false;
        self.individuals.clear();
    }

    pub fn get_scores(&self) -> Vec<&Score> {
        self.individuals
            .iter()
            .filter_map(|individual| individual.score())
            .collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    pub fn set_sorted(&mut self, is_sorted: bool) {
        self.is_sorted = is_sorted;
    }

    /// Sort the individuals in the population by the given ranking direction.
    /// This will set the is_sorted flag to true. A no-op if the population
    /// is already known to be sorted.
    pub fn sort_by(&mut self, optimize: Optimize) {
        if self.is_sorted {
            return;
        }

        optimize.sort(self);

        self.is_sorted = true;
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get_pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> (&mut Phenotype<C>, &mut Phenotype<C>) {
        self.is_sorted = false;
        if first < second {
            let (left, right) = self.individuals.split_at_mut(second);
            (&mut left[first], &mut right[0])
        } else {
            let (left, right) = self.individuals.split_at_mut(first);
            (&mut right[0], &mut left[second])
        }
    }
}

impl<C: Chromosome> From<Vec<Phenotype<C>>> for Population<C> {
    fn from(individuals: Vec<Phenotype<C>>) -> Self {
        Population {
            individuals,
            is_sorted: false,
        }
    }
}

impl<C: Chromosome> AsRef<[Phenotype<C>]> for Population<C> {
    fn as_ref(&self) -> &[Phenotype<C>] {
        self.individuals.as_ref()
    }
}

impl<C: Chromosome> AsMut<[Phenotype<C>]> for Population<C> {
    fn as_mut(&mut self) -> &mut [Phenotype<C>] {
        self.is_sorted = false;
        self.individuals.as_mut()
    }
}

impl<C: Chromosome> Index<Range<usize>> for Population<C> {
    type Output = [Phenotype<C>];
    fn index(&self, index: Range<usize>) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<C: Chromosome> Index<usize> for Population<C> {
    type Output = Phenotype<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<C: Chromosome> IndexMut<usize> for Population<C> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.is_sorted = false;
        &mut self.individuals[index]
    }
}

impl<C: Chromosome> IntoIterator for Population<C> {
    type Item = Phenotype<C>;
    type IntoIter = std::vec::IntoIter<Phenotype<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<C: Chromosome> FromIterator<Phenotype<C>> for Population<C> {
    fn from_iter<I: IntoIterator<Item = Phenotype<C>>>(iter: I) -> Self {
        Population {
            individuals: iter.into_iter().collect(),
            is_sorted: false,
        }
    }
}

/// Create a new instance of the Population from the given size and closure.
/// This will iterate the given closure `size` times and collect
/// the results into a Vec of new individuals.
impl<C: Chromosome, F> From<(usize, F)> for Population<C>
where
    F: Fn() -> Phenotype<C>,
{
    fn from((size, f): (usize, F)) -> Self {
        let individuals = (0..size).map(|_| f()).collect();

        Population {
            individuals,
            is_sorted: false,
        }
    }
}

impl<C: Chromosome + Debug> Debug for Population<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Population [")?;
        for individual in &self.individuals {
            writeln!(f, "{:?},", individual)?;
        }
        write!(f, "]")
    }
}
