use crate::ProbabilityWheelIterator;
use evolve_core::{Chromosome, Optimize, Population, Select, validate_selection};
use evolve_error::EvolveResult;

/// Roulette-wheel selection: each individual's fitness is rescaled onto a
/// non-negative monotone scale via [`Optimize::fitness_transform`], then
/// normalized into a probability vector summing to 1 (falling back to a
/// uniform distribution when every transformed value is zero).
///
/// The `sorted` flag only changes whether `population` is pre-sorted before
/// sampling; since the probability assigned to an individual is computed
/// from its own score rather than its position, pre-sorting changes the
/// *order* ties are encountered in but not the sampling distribution itself.
#[derive(Debug, Default, Clone)]
pub struct RouletteSelector {
    sorted: bool,
}

impl RouletteSelector {
    pub fn new() -> Self {
        RouletteSelector { sorted: false }
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

impl<C: Chromosome + Clone> Select<C> for RouletteSelector {
    fn select(
        &self,
        population: &Population<C>,
        optimize: Optimize,
        count: usize,
    ) -> EvolveResult<Population<C>> {
        validate_selection(population, count)?;
        if count == 0 {
            return Ok(Population::new(Vec::new()));
        }

        let mut working = population.clone();
        if self.sorted {
            working.sort_by(optimize);
        }

        let raw_scores = working
            .iter()
            .map(|individual| individual.score().map(|s| s.as_f32()).unwrap_or(0.0))
            .collect::<Vec<_>>();

        let max = raw_scores.iter().cloned().fold(f32::MIN, f32::max);
        let weights = raw_scores
            .iter()
            .map(|&value| optimize.fitness_transform(value, max))
            .collect::<Vec<_>>();

        let selected = ProbabilityWheelIterator::new(&weights, count)
            .map(|idx| working[idx].clone())
            .collect::<Vec<_>>();

        Ok(Population::new(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evolve_core::{FloatChromosome, FloatGene, Phenotype, Score};

    fn scored_population(scores: &[f32]) -> Population<FloatChromosome> {
        scores
            .iter()
            .map(|&s| {
                let mut p = Phenotype::from((
                    vec![FloatChromosome::new(vec![FloatGene::from(0.0..1.0)])],
                    0,
                ));
                p.set_score(Some(Score::from(s)));
                p
            })
            .collect()
    }

    #[test]
    fn select_returns_requested_count() {
        let population = scored_population(&[1.0, 2.0, 3.0]);
        let selected = RouletteSelector::new()
            .select(&population, Optimize::Maximize, 25)
            .unwrap();
        assert_eq!(selected.len(), 25);
    }

    #[test]
    fn uniform_distribution_when_all_scores_equal() {
        let population = scored_population(&[5.0, 5.0, 5.0, 5.0]);
        let selected = RouletteSelector::new()
            .select(&population, Optimize::Maximize, 10)
            .unwrap();
        assert_eq!(selected.len(), 10);
    }

    #[test]
    fn sorted_flag_does_not_change_cardinality() {
        let population = scored_population(&[1.0, 9.0, 3.0, 7.0]);
        let unsorted = RouletteSelector::new()
            .select(&population, Optimize::Maximize, 50)
            .unwrap();
        let sorted = RouletteSelector::new()
            .sorted(true)
            .select(&population, Optimize::Maximize, 50)
            .unwrap();
        assert_eq!(unsorted.len(), sorted.len());
    }

    #[test]
    fn rejects_nonzero_count_against_empty_population() {
        let population: Population<FloatChromosome> = Population::new(Vec::new());
        assert!(
            RouletteSelector::new()
                .select(&population, Optimize::Maximize, 1)
                .is_err()
        );
    }
}
