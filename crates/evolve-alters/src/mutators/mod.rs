pub mod arithmetic;
pub mod bit_flip;
pub mod gaussian;
pub mod invert;
pub mod swap;
pub mod uniform;

pub use arithmetic::ArithmeticMutator;
pub use bit_flip::BitFlipMutator;
pub use gaussian::GaussianMutator;
pub use invert::InversionMutator;
pub use swap::SwapMutator;
pub use uniform::UniformMutator;
