use ansi_term::Style;
use clap::Parser;
use std::process;
use tinybasic::cli::{self, logger, Args};

fn main() {
    let args = Args::parse();

    if let Err(message) = logger::configure(args.verbose) {
        eprintln!("{}", message);
        process::exit(2);
    }

    if let Err(error) = cli::run(&args) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        process::exit(1);
    }
}
