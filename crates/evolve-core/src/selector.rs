use crate::Chromosome;
use crate::genome::population::Population;
use crate::objectives::Optimize;
use evolve_error::{EvolveResult, evolve_bail};

/// A trait for selection algorithms. Selection algorithms are used to select
/// individuals from a [Population] to be used in the next generation. The
/// selection process is (most of the time) based on the fitness of the individuals in the
/// [Population]. The selection process can be based on the fitness of the individuals
/// in the [Population], or it can be based on the individuals themselves.
///
/// Implementors select exactly `count` individuals, with replacement unless
/// documented otherwise. `count = 0` always returns an empty population;
/// `count > 0` against an empty `population` is an
/// [`evolve_error::ErrorCode::InvalidParameter`] error.
pub trait Select<C: Chromosome>: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .split("<")
            .next()
            .unwrap_or(std::any::type_name::<Self>())
            .split("::")
            .last()
            .unwrap_or("Unknown Selector")
    }

    fn select(
        &self,
        population: &Population<C>,
        optimize: Optimize,
        count: usize,
    ) -> EvolveResult<Population<C>>;
}

/// Shared precondition every [`Select`] implementation validates before
/// sampling: selecting a non-zero number of individuals from an empty
/// population is a configuration error, never a silently empty result.
pub fn validate_selection<C: Chromosome>(
    population: &Population<C>,
    count: usize,
) -> EvolveResult<()> {
    if count > 0 && population.is_empty() {
        evolve_bail!(
            InvalidParameter:
            "cannot select {} individuals from an empty population",
            count
        );
    }
    Ok(())
}
