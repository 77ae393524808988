use env_logger::Env;

/// Installs the global logger from `RUST_LOG`, falling back to `info`.
///
/// Safe to call more than once; only the first call installs a logger.
pub fn init_logging() {
    let env = Env::default().default_filter_or("info");

    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("logging initialized");
    }
}
