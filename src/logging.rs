use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Builds the filter from `RUST_LOG`-style directives. Any directive given
/// replaces the `info` default; none (or an empty string) keeps it.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Installs the stderr formatter, filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::env_filter;

    use pretty_assertions::assert_eq;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::{EnvFilter, Layer, Registry};

    fn max_level(filter: &EnvFilter) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(filter)
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(max_level(&env_filter(None)), Some(LevelFilter::INFO));
        assert_eq!(max_level(&env_filter(Some(""))), Some(LevelFilter::INFO));
    }

    #[test]
    fn bare_level_overrides_the_default() {
        assert_eq!(max_level(&env_filter(Some("debug"))), Some(LevelFilter::DEBUG));
        assert_eq!(max_level(&env_filter(Some("warn"))), Some(LevelFilter::WARN));
    }

    #[test]
    fn target_directives_reach_library_traces() {
        assert_eq!(max_level(&env_filter(Some("business_catalog=trace"))), Some(LevelFilter::TRACE));
    }
}
