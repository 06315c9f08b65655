pub mod alter;
pub mod domain;
pub mod evaluator;
pub mod genome;
pub mod metric;
pub mod objectives;
pub mod problem;
pub mod selector;

pub use alter::{Alter, AlterAction, AlterResult, Crossover, Mutate, validate_rate};
pub use domain::*;
pub use evaluator::{Evaluator, ParallelEvaluator, SequentialEvaluator};
pub use genome::*;
pub use metric::{Metric, MetricSet, Statistic};
pub use objectives::{Optimize, Score, Scored};
pub use problem::{EngineProblem, Problem};
pub use selector::{Select, validate_selection};

pub mod prelude {
    pub use super::alter::{Alter, AlterAction, AlterResult, Crossover, Mutate, validate_rate};
    pub use super::domain::random_provider;
    pub use super::evaluator::{Evaluator, ParallelEvaluator, SequentialEvaluator};
    pub use super::genome::{
        ArithmeticGene, BitChromosome, BitGene, CharChromosome, CharGene, Chromosome,
        FloatChromosome, FloatGene, Gene, GenotypeFactory, IntChromosome, IntGene, Integer,
        PermutationChromosome, PermutationGene, Valid,
    };
    pub use super::metric::{Metric, MetricSet, Statistic};
    pub use super::objectives::{Optimize, Score, Scored};
    pub use super::problem::{EngineProblem, Problem};
    pub use super::selector::{Select, validate_selection};
}
