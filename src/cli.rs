use crate::config::Config;
use crate::error::Result;
use crate::logger::Logger;
use crate::run::run;
use indoc::indoc;
use std::io::Write;

const USAGE: &str = indoc! {"
    usage: keysort [--help|--version] [--target NAME] [BASE_DIR]

    Rewrite BASE_DIR/*/NAME with every JSON object's keys sorted.

    BASE_DIR defaults to configs/cameras.
    NAME defaults to thingino-camera.json.

    Files are overwritten in place. The first file that fails to parse stops
    the run; files sorted before it stay sorted.
"};

/// What we decide to do based on CLI arguments
#[derive(PartialEq, Debug)]
pub enum Behavior {
    Help,
    Version,
    UnexpectedArg(String),
    Sort(Config),
}

pub fn parse<S>(args: impl Iterator<Item = S>) -> Behavior
where
    S: AsRef<str>,
{
    let mut target: Option<String> = None;
    let mut base: Option<String> = None;
    let mut args = args.map(|a| a.as_ref().to_owned());
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" => return Behavior::Version,
            "--help" => return Behavior::Help,
            "--target" => match args.next() {
                Some(name) => target = Some(name),
                None => return Behavior::UnexpectedArg(arg),
            },
            flag if flag.starts_with("--") => return Behavior::UnexpectedArg(arg),
            _ if base.is_some() => return Behavior::UnexpectedArg(arg),
            _ => base = Some(arg),
        }
    }

    let cfg = match base {
        Some(base) => Config::new(base),
        None => Config::default(),
    };
    Behavior::Sort(match target {
        Some(name) => cfg.with_target(name),
        None => cfg,
    })
}

/// Run the behavior and return the process exit status.
pub fn execute<OUT, ERR>(behavior: Behavior, log: &mut Logger<OUT, ERR>) -> u8
where
    OUT: Write,
    ERR: Write,
{
    let result: Result<()> = match behavior {
        Behavior::Help => write!(log.stdout, "{}", USAGE).map_err(Into::into),
        Behavior::Version => {
            write!(log.stdout, "{}\n", env!("CARGO_PKG_VERSION")).map_err(Into::into)
        }
        Behavior::UnexpectedArg(a) => {
            let _ = write!(log.failure(), "Unexpected argument: {}\n", a);
            return 1;
        }
        Behavior::Sort(cfg) => run(&cfg, log).map(|_| ()),
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            // Nowhere left to report a failure to report.
            let _ = write!(log.failure(), "Failed to sort keys: {}\n", e);
            1
        }
    }
}
