/// Initializes the global logger.
///
/// Warnings are always shown since non-fatal problems (missing hooks,
/// ignored variables) are reported through them.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
        .format_target(false)
        .format_timestamp(None)
        .init();
}
