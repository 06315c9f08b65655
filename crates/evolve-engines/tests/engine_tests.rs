use evolve_alters::{PMXCrossover, SwapMutator};
use evolve_core::genome::factory::{GenotypeFactory, PermutationChromosomeFactory};
use evolve_core::{EngineProblem, Gene, Optimize, Valid};
use evolve_engines::limit::GenerationCount;
use evolve_engines::Engine;
use std::sync::Arc;

fn tour_problem(cities: usize) -> EngineProblem<PermutationChromosomeFactory<usize>> {
    let alleles: Arc<[usize]> = (0..cities).collect::<Vec<_>>().into();
    let genotype_factory = GenotypeFactory::new(vec![PermutationChromosomeFactory::new(alleles)]);

    EngineProblem {
        objective: Optimize::Minimize,
        factory: Arc::new(move || genotype_factory.make()),
        fitness_fn: Arc::new(|genotype| {
            let tour = genotype.flatten();
            tour.windows(2)
                .map(|pair| (*pair[0].allele() as f32 - *pair[1].allele() as f32).abs())
                .sum()
        }),
    }
}

#[test]
fn permutation_tour_stays_valid_every_generation() {
    evolve_core::random_provider::set_seed(11);

    let engine = Engine::builder()
        .population_size(30)
        .problem(tour_problem(8))
        .optimize(Optimize::Minimize)
        .alter(PMXCrossover::new(0.7).unwrap().alterer())
        .alter(SwapMutator::new(0.1).unwrap().alterer())
        .limit(GenerationCount(25))
        .build()
        .unwrap();

    let result = engine.evolve().unwrap();

    for individual in result.population.iter() {
        let chromosome = individual.genotype().get(0).unwrap();
        assert!(chromosome.is_valid());
    }
}

#[test]
fn empty_explicit_limits_fail_at_build() {
    let err = Engine::builder()
        .problem(tour_problem(4))
        .limits(Vec::new())
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("Limits cannot be empty"));
}
