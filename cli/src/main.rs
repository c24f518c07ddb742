use log::error;
use scriptkit_cli::{args::parse_args, run};
use scriptkit_core::{log::init_logger, panic::configure_panic};
use std::{io, process};

pub fn main() {
    let args = parse_args();

    if let Err(err) = init_logger(args.logdir.as_deref(), &args.log_level) {
        eprintln!("{err}");
        process::exit(1);
    }
    configure_panic();

    let stdout = io::stdout();
    if let Err(err) = run(&args, io::stdin().lock(), &mut stdout.lock()) {
        error!("{err}");
        process::exit(1);
    }
}
