/// Initializes `env_logger` for the binary.
///
/// `--verbose` enables per-file debug output, otherwise only info and above
/// is printed.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .init();
}
