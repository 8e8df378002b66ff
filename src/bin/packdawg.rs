//! packdawg - build and inspect packed DAWG word lists

use clap::Parser;
use std::io::{self, Write};
use std::process;

use packed_dawg::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = commands::execute(cli.command, &mut out).and_then(|()| Ok(out.flush()?));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
