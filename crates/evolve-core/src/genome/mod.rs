pub mod chromosomes;
pub mod factory;
pub mod genotype;
pub mod phenotype;
pub mod population;

pub use chromosomes::*;
pub use factory::*;
pub use genotype::*;
pub use phenotype::*;
pub use population::*;
