pub mod indexes;
pub mod random_provider;

pub use indexes::SubsetMode;
