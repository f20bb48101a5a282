mod config;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::Config;
use secure_random_string::{generate, Alphabet};

#[derive(Debug)]
enum Error {
    Usage(String),
    Argument(String),
    Generate(secure_random_string::Error),
    Config(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(e) => write!(f, "{}", e),
            Self::Argument(e) => write!(f, "{}", e),
            Self::Generate(e) => write!(f, "{}", e),
            Self::Config(e) => write!(f, "Could not read config file {}", e),
        }
    }
}

impl From<secure_random_string::Error> for Error {
    fn from(e: secure_random_string::Error) -> Self {
        Self::Generate(e)
    }
}

impl Error {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::Argument(_) => 2,
            Self::Generate(_) => 3,
            Self::Config(_) => 4,
        }
    }

    fn shows_usage(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

fn usage() -> String {
    format!(
        "Usage: {} length_of_string [allowed_characters] [--config FILE] [-h] [--help]\n \
         length_of_string: a positive whole number indicating the length of string to generate\n \
         allowed_characters: a string containing the characters to use in the string\n \
         --config FILE: read the default alphabet from a YAML config file\n \
         -h, --help: print this usage message",
        env!("CARGO_BIN_NAME")
    )
}

// clap's own help goes to stdout and is case sensitive, so it is handled here.
fn wants_help(args: &[OsString]) -> bool {
    args.iter().any(|arg| {
        let arg = arg.to_string_lossy();
        arg.eq_ignore_ascii_case("-h") || arg.eq_ignore_ascii_case("--help")
    })
}

fn setup_command_line_args() -> Command {
    clap::command!()
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("length")
                .value_name("length_of_string")
                .allow_hyphen_values(true)
                .help("Number of characters to generate"),
        )
        .arg(
            Arg::new("allowed_characters")
                .allow_hyphen_values(true)
                .help("Characters to draw from"),
        )
        .arg(
            Arg::new("extra")
                .action(ArgAction::Append)
                .num_args(1..)
                .allow_hyphen_values(true)
                .hide(true),
        )
        // No short form: "-c" must stay usable as an alphabet.
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Read defaults from a YAML config file"),
        )
}

// The config file is only consulted when no alphabet is given on the command line.
fn select_alphabet(matches: &ArgMatches) -> Result<Alphabet, Error> {
    if let Some(chars) = matches.get_one::<String>("allowed_characters") {
        log::debug!("Using alphabet from the command line");
        return Ok(Alphabet::from_string(chars)?);
    }
    let cfg = Config::resolve(matches.get_one::<String>("config").map(String::as_str))?;
    if let Some(chars) = &cfg.alphabet {
        log::debug!("Using alphabet from the config file");
        return Ok(Alphabet::from_string(chars)?);
    }
    log::debug!("Using default alphabet");
    Ok(Alphabet::from_default())
}

fn run(args: Vec<OsString>) -> Result<String, Error> {
    let missing = || {
        Error::Usage(
            "Missing command line arguments.  Use -h or --help for more information.".to_string(),
        )
    };
    let invalid = || {
        Error::Argument(
            "Invalid commandline argument.  Use -h or --help for more information.".to_string(),
        )
    };
    if args.len() <= 1 {
        return Err(missing());
    }

    let matches = setup_command_line_args()
        .try_get_matches_from(args)
        .map_err(|e| {
            log::debug!("Argument parsing failed: {}", e);
            invalid()
        })?;

    let length = matches.get_one::<String>("length").ok_or_else(missing)?;
    let length: i64 = length.parse().map_err(|e| {
        log::debug!("Could not parse length {:?}: {}", length, e);
        invalid()
    })?;
    log::debug!("Requested length: {}", length);

    if let Some(extra) = matches.get_many::<String>("extra") {
        log::warn!("Ignoring extra arguments: {:?}", extra.collect::<Vec<_>>());
    }

    let alphabet = select_alphabet(&matches)?;
    log::debug!("Alphabet has {} symbols", alphabet.len());

    Ok(generate(&alphabet, length)?)
}

struct TimeLogger {
    start: std::time::Instant,
}

impl Drop for TimeLogger {
    fn drop(&mut self) {
        log::debug!(
            "Run completed in {}",
            humantime::format_duration(self.start.elapsed())
        );
    }
}

fn main() -> ExitCode {
    let _time_logger = TimeLogger {
        start: std::time::Instant::now(),
    };

    pretty_env_logger::init();

    let args: Vec<OsString> = std::env::args_os().collect();
    if wants_help(args.get(1..).unwrap_or_default()) {
        eprintln!("{}", usage());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(generated) => {
            println!("Generated String: {}", generated);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.shows_usage() {
                eprintln!("{}", usage());
            }
            ExitCode::from(e.exit_code())
        }
    }
}
