pub mod bit;
pub mod char;
pub mod chromosome;
pub mod float;
pub mod gene;
pub mod int;
pub mod permutation;

pub use bit::{BitChromosome, BitGene};
pub use char::{CharChromosome, CharGene};
pub use chromosome::*;
pub use float::{FloatChromosome, FloatGene};
pub use gene::{ArithmeticGene, BoundedGene, Filter, FilterableGene, Gene, Valid};
pub use int::{IntChromosome, IntGene, Integer};
pub use permutation::{PermutationChromosome, PermutationGene};
