use crate::{Chromosome, Gene, Genotype, Metric, Population, indexes, random_provider};
use evolve_error::{EvolveResult, evolve_bail, evolve_err};

/// This is the main trait that is used to define the different types of alterations that can be
/// performed on a population. The `Alter` trait is used to define the `alter` method that is used
/// to perform the alteration on the population. The `alter` method takes a mutable reference to
/// the population and a generation number as parameters. The `alter` method returns a vector of
/// `Metric` objects that represent the metrics that were collected during the alteration process.
///
/// An 'Alter' in a traditional genetic algorithm is a process that modifies the population of
/// individuals in some way. This can include operations such as mutation or crossover. The goal of
/// an alter is to introduce new genetic material into the population, which can help to improve
/// the overall fitness of the population. An alter is typically performed on a subset of the
/// population, rather than the entire population, allowing for more targeted modifications.
///
/// Because an `Alter` can be of type `Mutate` or `Crossover`, it is abstracted out of those core
/// traits into this trait.
pub trait Alter<C: Chromosome>: Send + Sync {
    fn alter(&self, population: &mut Population<C>, generation: usize) -> Vec<Metric>;
}

/// The `AlterResult` struct is used to represent the result of an
/// alteration operation. It contains the number of operations
/// performed and a vector of metrics that were collected
/// during the alteration process.
#[derive(Default)]
pub struct AlterResult(pub usize, pub Option<Vec<Metric>>);

impl AlterResult {
    pub fn count(&self) -> usize {
        self.0
    }

    pub fn metrics(&self) -> Option<&Vec<Metric>> {
        self.1.as_ref()
    }

    pub fn merge(&mut self, other: AlterResult) {
        let AlterResult(other_count, other_metrics) = other;

        self.0 += other_count;
        if let Some(metrics) = other_metrics {
            if let Some(self_metrics) = &mut self.1 {
                self_metrics.extend(metrics);
            } else {
                self.1 = Some(metrics);
            }
        }
    }
}

impl From<usize> for AlterResult {
    fn from(count: usize) -> Self {
        AlterResult(count, None)
    }
}

impl From<(usize, Vec<Metric>)> for AlterResult {
    fn from(value: (usize, Vec<Metric>)) -> Self {
        AlterResult(value.0, Some(value.1))
    }
}

impl From<(usize, Metric)> for AlterResult {
    fn from(value: (usize, Metric)) -> Self {
        AlterResult(value.0, Some(vec![value.1]))
    }
}

/// The `AlterAction` enum represents the different kinds of alterations that
/// can be performed on a population - either a mutation or a crossover.
pub enum AlterAction<C: Chromosome> {
    Mutate(&'static str, Box<dyn Mutate<C>>),
    Crossover(&'static str, Box<dyn Crossover<C>>),
}

impl<C: Chromosome> Alter<C> for AlterAction<C> {
    fn alter(&self, population: &mut Population<C>, generation: usize) -> Vec<Metric> {
        match &self {
            AlterAction::Mutate(name, m) => {
                let timer = std::time::Instant::now();
                let AlterResult(count, metrics) = m.mutate(population, generation);
                let metric = Metric::new_operations(name, count, timer.elapsed());

                match metrics {
                    Some(metrics) => metrics.into_iter().chain(std::iter::once(metric)).collect(),
                    None => vec![metric],
                }
            }
            AlterAction::Crossover(name, c) => {
                let timer = std::time::Instant::now();
                let AlterResult(count, metrics) = c.crossover(population, generation);
                let metric = Metric::new_operations(name, count, timer.elapsed());

                match metrics {
                    Some(metrics) => metrics.into_iter().chain(std::iter::once(metric)).collect(),
                    None => vec![metric],
                }
            }
        }
    }
}

/// Validates a rate used to gate a `Mutate` or `Crossover` operator,
/// returning `MutatorConfig`/`InvalidParameter` style errors matching the
/// wording `"<label> rate (<rate>) must be in 0.0..1.0"`.
pub fn validate_rate(rate: f32, label: &str) -> EvolveResult<()> {
    if !(0.0..=1.0).contains(&rate) {
        evolve_bail!(MutatorConfig: "{} rate ({}) must be in 0.0..1.0", label, rate);
    }
    Ok(())
}

/// The `Crossover` trait defines the K-ary crossover contract: given `K`
/// parent genotypes, produce `M` offspring genotypes.
///
/// Implementors combine aligned chromosomes (same chromosome index across
/// every parent) through [`Crossover::cross_chromosomes`]; each chromosome is
/// only combined with probability [`Crossover::chromosome_rate`], otherwise
/// parent-0's chromosome is copied unchanged. The top-level [`Crossover::rate`]
/// gates whether a given individual takes part in a mating event at all.
pub trait Crossover<C: Chromosome>: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>().split("::").last().unwrap()
    }

    /// Probability that a given individual is selected to mate at all.
    fn rate(&self) -> f32 {
        1.0
    }

    /// Probability each aligned chromosome is combined, rather than copied
    /// unchanged from parent-0.
    fn chromosome_rate(&self) -> f32 {
        1.0
    }

    /// Number of parent genotypes this operator consumes, `K`.
    fn num_parents(&self) -> usize {
        2
    }

    /// Number of offspring genotypes this operator produces, `M`.
    fn num_offspring(&self) -> usize {
        2
    }

    fn alterer(self) -> AlterAction<C>
    where
        Self: Sized + 'static,
    {
        AlterAction::Crossover(self.name(), Box::new(self))
    }

    #[inline]
    fn crossover(&self, population: &mut Population<C>, generation: usize) -> AlterResult {
        let mut result = AlterResult::default();
        let num_parents = self.num_parents();

        if population.len() < num_parents {
            return result;
        }

        for i in 0..population.len() {
            if random_provider::random::<f32>() < self.rate() {
                let parent_indexes = indexes::individual_indexes(i, population.len(), num_parents);
                result.merge(self.cross(population, &parent_indexes, generation));
            }
        }

        result
    }

    #[inline]
    fn cross(
        &self,
        population: &mut Population<C>,
        parent_indexes: &[usize],
        generation: usize,
    ) -> AlterResult {
        let parents = parent_indexes
            .iter()
            .map(|&idx| {
                population
                    .get(idx)
                    .expect("parent index in bounds")
                    .genotype()
                    .clone()
            })
            .collect::<Vec<_>>();

        let offspring = match self.cross_genotypes(&parents) {
            Ok(offspring) => offspring,
            Err(_) => return AlterResult::default(),
        };

        let mut count = 0;
        for (&idx, genotype) in parent_indexes.iter().zip(offspring) {
            let individual = population.get_mut(idx).expect("parent index in bounds");
            individual.set_genotype(genotype);
            individual.invalidate(generation);
            count += 1;
        }

        count.into()
    }

    /// Validates `parents` against the K-ary crossover contract and produces
    /// [`Crossover::num_offspring`] offspring genotypes.
    #[inline]
    fn cross_genotypes(&self, parents: &[Genotype<C>]) -> EvolveResult<Vec<Genotype<C>>> {
        if parents.len() != self.num_parents() {
            return Err(evolve_err!(
                Crossover: "expected {} parents, got {}",
                self.num_parents(),
                parents.len()
            ));
        }

        if parents.iter().any(|parent| parent.is_empty()) {
            return Err(evolve_err!(Crossover: "parent genotypes must not be empty"));
        }

        let chromosome_count = parents[0].len();
        if parents.iter().any(|parent| parent.len() != chromosome_count) {
            return Err(evolve_err!(
                Crossover: "all parent genotypes must have the same number of chromosomes"
            ));
        }

        let num_offspring = self.num_offspring();
        let mut offspring_chromosomes: Vec<Vec<C>> =
            (0..num_offspring).map(|_| Vec::with_capacity(chromosome_count)).collect();

        for chrom_idx in 0..chromosome_count {
            let aligned = parents
                .iter()
                .map(|parent| parent.get(chrom_idx).expect("chromosome index in bounds"))
                .collect::<Vec<_>>();

            let produced = if random_provider::random::<f32>() < self.chromosome_rate() {
                self.cross_chromosomes(&aligned)?
            } else {
                (0..num_offspring).map(|_| aligned[0].clone()).collect()
            };

            if produced.len() != num_offspring {
                return Err(evolve_err!(
                    Crossover: "crossover operator produced {} offspring chromosomes, expected {}",
                    produced.len(),
                    num_offspring
                ));
            }

            for (slot, chromosome) in offspring_chromosomes.iter_mut().zip(produced) {
                slot.push(chromosome);
            }
        }

        Ok(offspring_chromosomes.into_iter().map(Genotype::new).collect())
    }

    /// Combines one aligned set of parent chromosomes (same chromosome index
    /// across all parents) into [`Crossover::num_offspring`] child
    /// chromosomes.
    fn cross_chromosomes(&self, parents: &[&C]) -> EvolveResult<Vec<C>>;
}

/// The `Mutate` trait defines the three-level gated mutation contract:
/// individual rate, then chromosome rate, then gene rate, applied top-down
/// per generation as a nested Bernoulli schedule.
pub trait Mutate<C: Chromosome>: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>().split("::").last().unwrap()
    }

    /// Probability a given individual is considered for mutation at all.
    fn individual_rate(&self) -> f32 {
        1.0
    }

    /// Probability each chromosome of a selected individual is considered.
    fn chromosome_rate(&self) -> f32 {
        1.0
    }

    /// Probability each gene of a selected chromosome is replaced.
    fn gene_rate(&self) -> f32 {
        1.0
    }

    fn alterer(self) -> AlterAction<C>
    where
        Self: Sized + 'static,
    {
        AlterAction::Mutate(self.name(), Box::new(self))
    }

    #[inline]
    fn mutate(&self, population: &mut Population<C>, generation: usize) -> AlterResult {
        let mut result = AlterResult::default();

        for phenotype in population.iter_mut() {
            if random_provider::random::<f32>() < self.individual_rate() {
                let mutate_result = self.mutate_genotype(phenotype.genotype_mut());

                if mutate_result.count() > 0 {
                    phenotype.invalidate(generation);
                }

                result.merge(mutate_result);
            }
        }

        result
    }

    #[inline]
    fn mutate_genotype(&self, genotype: &mut Genotype<C>) -> AlterResult {
        let mut result = AlterResult::default();

        for chromosome in genotype.iter_mut() {
            if random_provider::random::<f32>() < self.chromosome_rate() {
                result.merge(self.mutate_chromosome(chromosome));
            }
        }

        result
    }

    #[inline]
    fn mutate_chromosome(&self, chromosome: &mut C) -> AlterResult {
        let mut count = 0;
        for gene in chromosome.iter_mut() {
            if random_provider::random::<f32>() < self.gene_rate() {
                *gene = self.mutate_gene(gene);
                count += 1;
            }
        }

        count.into()
    }

    #[inline]
    fn mutate_gene(&self, gene: &C::Gene) -> C::Gene {
        gene.new_instance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FloatChromosome, FloatGene, Phenotype};

    struct AlwaysMutate;

    impl Mutate<FloatChromosome> for AlwaysMutate {
        fn gene_rate(&self) -> f32 {
            1.0
        }
    }

    struct NeverChromosome;

    impl Mutate<FloatChromosome> for NeverChromosome {
        fn chromosome_rate(&self) -> f32 {
            0.0
        }
    }

    struct SwapCrossover;

    impl Crossover<FloatChromosome> for SwapCrossover {
        fn cross_chromosomes(&self, parents: &[&FloatChromosome]) -> EvolveResult<Vec<FloatChromosome>> {
            Ok(vec![parents[1].clone(), parents[0].clone()])
        }
    }

    fn sample_population(size: usize) -> Population<FloatChromosome> {
        Population::from((size, || {
            let genes = (0..3).map(|_| FloatGene::from(0.0..1.0)).collect::<Vec<_>>();
            Phenotype::from((vec![FloatChromosome::new(genes)], 0))
        }))
    }

    #[test]
    fn mutate_respects_individual_gate() {
        let mut population = sample_population(5);
        let result = NeverChromosome.mutate(&mut population, 1);
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn mutate_replaces_genes_when_all_gates_open() {
        let mut population = sample_population(1);
        let before = population.get(0).unwrap().genotype().clone();

        AlwaysMutate.mutate(&mut population, 1);

        let after = population.get(0).unwrap().genotype();
        assert_eq!(before.len(), after.len());
    }

    #[test]
    fn cross_genotypes_rejects_wrong_parent_count() {
        let genotype = Genotype::new(vec![FloatChromosome::new(vec![FloatGene::from(0.0..1.0)])]);
        let err = SwapCrossover.cross_genotypes(&[genotype]).unwrap_err();
        assert_eq!(err.code(), evolve_error::ErrorCode::Crossover);
    }

    #[test]
    fn cross_genotypes_rejects_empty_genotype() {
        let empty: Genotype<FloatChromosome> = Genotype::new(vec![]);
        let other = Genotype::new(vec![FloatChromosome::new(vec![FloatGene::from(0.0..1.0)])]);
        let err = SwapCrossover.cross_genotypes(&[empty, other]).unwrap_err();
        assert_eq!(err.code(), evolve_error::ErrorCode::Crossover);
    }

    #[test]
    fn cross_genotypes_produces_requested_offspring_count() {
        let parent_one = Genotype::new(vec![FloatChromosome::new(vec![FloatGene::from(0.0..1.0)])]);
        let parent_two = Genotype::new(vec![FloatChromosome::new(vec![FloatGene::from(0.0..1.0)])]);

        let offspring = SwapCrossover
            .cross_genotypes(&[parent_one, parent_two])
            .unwrap();

        assert_eq!(offspring.len(), SwapCrossover.num_offspring());
    }

    #[test]
    fn validate_rate_reports_out_of_range_rate() {
        let err = validate_rate(1.5, "gene").unwrap_err();
        assert!(err.to_string().contains("gene rate (1.5) must be in 0.0..1.0"));
    }
}
