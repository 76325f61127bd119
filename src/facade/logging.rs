use descstat_config::LogLevel;
use log::LevelFilter;

/// Installs the global logger at `level` so messages from config loading
/// are not lost. `RUST_LOG` still wins when set. Later calls are no-ops.
pub fn init_logging(level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
    set_log_level(level);
}

/// Moves the level of the installed logger, e.g. once the config is known.
pub fn set_log_level(level: LogLevel) {
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(level.to_level_filter());
    }
}
