use log::LevelFilter;

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or everything down to
/// debug when `debug_mode` is on.
pub fn init_logging(debug_mode: bool) {
    let default_level = if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let env = env_logger::Env::default().default_filter_or(default_level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
