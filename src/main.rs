mod cli;
mod config;
mod discover;
mod document;
mod error;
mod logger;
mod normalize;
mod run;

use std::env::args;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let (mut stdout, mut stderr) = (io::stdout(), io::stderr());
    let mut logger = logger::Logger::new(&mut stdout, &mut stderr);

    let behavior = cli::parse(args().skip(1));
    ExitCode::from(cli::execute(behavior, &mut logger))
}
