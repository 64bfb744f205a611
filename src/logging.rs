use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install the global tracing subscriber. `DIFFSUM_LOG` overrides the level;
/// `--verbose` lowers the default to DEBUG.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("DIFFSUM_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
