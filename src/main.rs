//! archetype's main application entry point.

use archetype::{
    cli::get_args, error::default_error_handler, generator::generate, logger::init_logger,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let prompter = DialoguerPrompter::new();
    if let Err(err) = generate(
        &args.transformations,
        &args.source,
        &args.destination,
        args.inputs.as_slice(),
        &prompter,
    ) {
        default_error_handler(err);
    }
}
