use customer_filter::run;
use env_logger::Env;
use log::error;
use std::env::args;

fn main() {
    init_logging();

    if let Err(err) = run(args().collect()) {
        error!("{}", err);
    }
}

// RUST_LOG overrides the default 'info' level
fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
