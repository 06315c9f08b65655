pub mod crossovers;
pub mod mutators;

pub use crossovers::{
    AverageCrossover, CombineCrossover, PMXCrossover, SinglePointCrossover, UniformCrossover,
};
pub use mutators::{
    ArithmeticMutator, BitFlipMutator, GaussianMutator, InversionMutator, SwapMutator, UniformMutator,
};
