use log::LevelFilter;

/// Initialize the logger, letting `RUST_LOG` refine the given level
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
