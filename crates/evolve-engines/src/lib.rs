pub mod alterer;
pub mod builder;
pub mod engine;
pub mod generation;
pub mod interceptor;
pub mod limit;
pub mod listener;

pub use alterer::Composite;
pub use builder::EngineBuilder;
pub use engine::Engine;
pub use generation::{EvolutionResult, Generation};
pub use interceptor::{Identity, Interceptor};
pub use limit::{GenerationCount, Limit, SteadyGenerations, TargetFitness};
pub use listener::{FnListener, Listener};

pub use evolve_alters::*;
pub use evolve_core::*;
pub use evolve_error::{EvolveError, ensure};
pub use evolve_selectors::*;

pub fn init_logging() {
    use std::sync::Once;
    static INIT_LOGGING: Once = Once::new();

    INIT_LOGGING.call_once(|| {
        use tracing_subscriber::fmt::format::FmtSpan;
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        std::panic::set_hook(Box::new(|info| {
            tracing::error!("PANIC: {}", info);
        }));

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                    .with_target(false)
                    .with_level(true)
                    .compact(),
            )
            .init();
    });
}
