use evolve_error::{EvolveResult, evolve_err};
use std::sync::Arc;

/// A [`Valid`] type can be checked for internal consistency. Chromosomes and
/// phenotypes use this to decide whether an individual should be discarded and
/// replaced during a generation.
pub trait Valid {
    fn is_valid(&self) -> bool {
        true
    }
}

/// A [`Gene`] is a single unit of information in a [`Chromosome`](super::Chromosome).
///
/// Any type implementing this trait can be used as a gene in a chromosome, and
/// therefore in any genetic algorithm built on top of this library.
pub trait Gene: Clone + Valid {
    type Allele;

    /// The value the gene "expresses".
    fn allele(&self) -> &Self::Allele;

    fn allele_mut(&mut self) -> &mut Self::Allele;

    /// Produce a fresh gene with a newly sampled allele, keeping the same
    /// bounds/filter configuration as `self`.
    fn new_instance(&self) -> Self;

    /// Produce a gene identical to `self` except for its allele.
    fn with_allele(&self, allele: &Self::Allele) -> Self;
}

/// A [`Gene`] whose allele is drawn from a closed range.
pub trait BoundedGene: Gene {
    fn min(&self) -> &Self::Allele;
    fn max(&self) -> &Self::Allele;

    fn bounds(&self) -> (&Self::Allele, &Self::Allele) {
        (self.min(), self.max())
    }
}

/// A [`Gene`] whose allele supports the arithmetic crossovers/mutators need:
/// blending two genes (`mean`) and the four basic operators.
pub trait ArithmeticGene: Gene {
    fn mean(&self, other: &Self) -> Self;
    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn div(&self, other: &Self) -> Self;
}

/// An acceptance predicate over a gene's allele, used by [`FilterableGene::mutate`]
/// to reject proposed alleles that don't satisfy a caller-supplied constraint.
pub type Filter<Allele> = Arc<dyn Fn(&Allele) -> bool + Send + Sync>;

/// Maximum number of rejection-sampling attempts [`FilterableGene::mutate`] makes
/// before giving up and reporting [`EvolveError::AbsurdOperation`](evolve_error::EvolveError::AbsurdOperation).
pub const MUTATE_ATTEMPTS: usize = 32;

/// A [`Gene`] that carries an optional [`Filter`] and exposes a fallible `mutate`
/// which rejection-samples [`Gene::new_instance`] until the filter accepts the
/// proposal, or gives up after [`MUTATE_ATTEMPTS`] tries.
pub trait FilterableGene: Gene {
    fn filter(&self) -> Option<&Filter<Self::Allele>>;

    fn accepts(&self, allele: &Self::Allele) -> bool {
        match self.filter() {
            Some(f) => f(allele),
            None => true,
        }
    }

    fn mutate(&self) -> EvolveResult<Self> {
        for _ in 0..MUTATE_ATTEMPTS {
            let candidate = self.new_instance();
            if self.accepts(candidate.allele()) {
                return Ok(candidate);
            }
        }

        Err(evolve_err!(
            AbsurdOperation:
            "gene mutation exhausted {} attempts without producing a value its filter accepts",
            MUTATE_ATTEMPTS
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct ToyGene {
        allele: i32,
        filter: Option<Filter<i32>>,
    }

    impl Valid for ToyGene {}

    impl Gene for ToyGene {
        type Allele = i32;

        fn allele(&self) -> &i32 {
            &self.allele
        }

        fn allele_mut(&mut self) -> &mut i32 {
            &mut self.allele
        }

        fn new_instance(&self) -> Self {
            ToyGene {
                allele: self.allele + 1,
                filter: self.filter.clone(),
            }
        }

        fn with_allele(&self, allele: &i32) -> Self {
            ToyGene {
                allele: *allele,
                filter: self.filter.clone(),
            }
        }
    }

    impl FilterableGene for ToyGene {
        fn filter(&self) -> Option<&Filter<i32>> {
            self.filter.as_ref()
        }
    }

    #[test]
    fn mutate_without_filter_always_succeeds() {
        let gene = ToyGene {
            allele: 0,
            filter: None,
        };
        assert_eq!(*gene.mutate().unwrap().allele(), 1);
    }

    #[test]
    fn mutate_exhausts_attempts_on_impossible_filter() {
        let gene = ToyGene {
            allele: 0,
            filter: Some(Arc::new(|_: &i32| false)),
        };
        let err = gene.mutate().unwrap_err();
        assert_eq!(err.code(), evolve_error::ErrorCode::AbsurdOperation);
    }

    #[test]
    fn mutate_retries_until_filter_accepts() {
        let gene = ToyGene {
            allele: 0,
            filter: Some(Arc::new(|v: &i32| *v >= 3)),
        };
        let mutated = gene.mutate().unwrap();
        assert!(*mutated.allele() >= 3);
    }
}
