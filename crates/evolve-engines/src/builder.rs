use crate::limit::GenerationCount;
use crate::{Composite, Engine, Identity, Interceptor, Limit, Listener};
use evolve_core::{AlterAction, Chromosome, Evaluator, Optimize, Population, Problem, Select, SequentialEvaluator};
use evolve_error::{EvolveError, EvolveResult, evolve_err};
use evolve_selectors::tournament::TournamentSelector;
use std::sync::Arc;

/// Fluent builder for [`Engine`]. The fitness problem is the only required
/// input; every other option defaults as documented on the corresponding
/// `with_*`/setter method.
///
/// `build()` collects every constraint violation found in a single
/// validation pass and reports them together as
/// [`evolve_error::EvolveError::Multiple`], rather than failing fast on the
/// first one.
pub struct EngineBuilder<C: Chromosome> {
    population_size: usize,
    survival_rate: f32,
    optimize: Optimize,
    problem: Option<Arc<dyn Problem<C>>>,
    selector: Arc<dyn Select<C>>,
    offspring_selector: Option<Arc<dyn Select<C>>>,
    survivor_selector: Option<Arc<dyn Select<C>>>,
    alterers: Vec<AlterAction<C>>,
    evaluator: Arc<dyn Evaluator<C>>,
    limits: Vec<Box<dyn Limit<C>>>,
    limits_set: bool,
    listeners: Vec<Arc<dyn Listener<C>>>,
    interceptor: Arc<dyn Interceptor<C>>,
}

impl<C: Chromosome + 'static> EngineBuilder<C> {
    pub(crate) fn new() -> Self {
        EngineBuilder {
            population_size: 50,
            survival_rate: 0.4,
            optimize: Optimize::Maximize,
            problem: None,
            selector: Arc::new(TournamentSelector::new(3)),
            offspring_selector: None,
            survivor_selector: None,
            alterers: Vec::new(),
            evaluator: Arc::new(SequentialEvaluator),
            limits: Vec::new(),
            limits_set: false,
            listeners: Vec::new(),
            interceptor: Arc::new(Identity),
        }
    }

    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn survival_rate(mut self, rate: f32) -> Self {
        self.survival_rate = rate;
        self
    }

    pub fn optimize(mut self, optimize: Optimize) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn problem<P: Problem<C> + 'static>(mut self, problem: P) -> Self {
        self.problem = Some(Arc::new(problem));
        self
    }

    /// Sets the default selector, used for both offspring and survivor
    /// selection unless overridden via [`Self::offspring_selector`] or
    /// [`Self::survivor_selector`].
    pub fn selector<S: Select<C> + 'static>(mut self, selector: S) -> Self {
        self.selector = Arc::new(selector);
        self
    }

    pub fn offspring_selector<S: Select<C> + 'static>(mut self, selector: S) -> Self {
        self.offspring_selector = Some(Arc::new(selector));
        self
    }

    pub fn survivor_selector<S: Select<C> + 'static>(mut self, selector: S) -> Self {
        self.survivor_selector = Some(Arc::new(selector));
        self
    }

    /// Appends an alterer, run in the order added.
    pub fn alter(mut self, action: AlterAction<C>) -> Self {
        self.alterers.push(action);
        self
    }

    pub fn evaluator<E: Evaluator<C> + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Arc::new(evaluator);
        self
    }

    /// Appends a termination condition.
    pub fn limit<L: Limit<C> + 'static>(mut self, limit: L) -> Self {
        self.limits.push(Box::new(limit));
        self.limits_set = true;
        self
    }

    /// Replaces the entire limits list. Passing an empty list is a
    /// configuration error reported at `build()`.
    pub fn limits(mut self, limits: Vec<Box<dyn Limit<C>>>) -> Self {
        self.limits = limits;
        self.limits_set = true;
        self
    }

    pub fn listener<L: Listener<C> + 'static>(mut self, listener: L) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }

    pub fn interceptor<I: Interceptor<C> + 'static>(mut self, interceptor: I) -> Self {
        self.interceptor = Arc::new(interceptor);
        self
    }

    pub fn build(self) -> EvolveResult<Engine<C>> {
        let mut errors = Vec::new();

        if self.population_size < 1 {
            errors.push(evolve_err!(
                InvalidConfig: "population size ({}) must be at least 1",
                self.population_size
            ));
        }

        if !(0.0..=1.0).contains(&self.survival_rate) {
            errors.push(evolve_err!(
                InvalidConfig: "survival rate ({}) must be in 0.0..1.0",
                self.survival_rate
            ));
        }

        if self.problem.is_none() {
            errors.push(evolve_err!(InvalidConfig: "a fitness problem is required"));
        }

        if self.limits_set && self.limits.is_empty() {
            errors.push(evolve_err!(InvalidConfig: "Limits cannot be empty"));
        }

        if !errors.is_empty() {
            return Err(EvolveError::multiple(errors));
        }

        let limits = if self.limits_set {
            self.limits
        } else {
            vec![Box::new(GenerationCount(100)) as Box<dyn Limit<C>>]
        };

        Ok(Engine {
            problem: self.problem.expect("validated above"),
            population_size: self.population_size,
            survival_rate: self.survival_rate,
            optimize: self.optimize,
            offspring_selector: self.offspring_selector.unwrap_or_else(|| Arc::clone(&self.selector)),
            survivor_selector: self.survivor_selector.unwrap_or(self.selector),
            alterer: Composite::new(self.alterers),
            evaluator: self.evaluator,
            limits,
            listeners: self.listeners,
            interceptor: self.interceptor,
            population: Population::new(Vec::new()),
            generation: 0,
        })
    }
}
