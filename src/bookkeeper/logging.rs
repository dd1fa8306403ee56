use env_logger::{Builder, Target};
use log::LevelFilter;

/// Logs go to stderr so they never interleave with command replies.
/// `RUST_LOG` takes precedence over the `-v` default.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();
}
