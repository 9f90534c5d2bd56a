use crate::config::Config;
use tracing_subscriber::{
    EnvFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "info,roster_services=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Runs `f` with plain stderr logging.
///
/// The configuration decides the global subscriber, so anything logged while
/// loading it goes through this one instead.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    with_logging(env_filter(), std::io::stderr, f)
}

pub(crate) fn with_logging<W, T>(filter: EnvFilter, make_writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(make_writer),
    );
    tracing::subscriber::with_default(subscriber, f)
}

pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    if config.is_local() {
        // Local development: Pretty printing
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    } else {
        // Deployed: JSON logging in the Stackdriver format
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_stackdriver::layer())
            .try_init()?;
    }

    Ok(())
}
