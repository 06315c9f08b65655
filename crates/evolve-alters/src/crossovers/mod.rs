pub mod average;
pub mod combine;
pub mod pmx;
pub mod single_point;
pub mod uniform;

pub use average::AverageCrossover;
pub use combine::CombineCrossover;
pub use pmx::PMXCrossover;
pub use single_point::SinglePointCrossover;
pub use uniform::UniformCrossover;
