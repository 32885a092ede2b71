//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Command, Error};
use lifegrid_lib::{Config, Coord, Simulation};
use log::LevelFilter;
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Environment variable for the default dimension.
const DIMENSION_VAR: &str = "LIFEGRID_DIMENSION";

/// Dimension used when `LIFEGRID_DIMENSION` is not a number.
const FALLBACK_DIMENSION: isize = 50;

/// How to print a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// `.` and `o`.
    Plaintext,
    /// A JSON object with the grid as a matrix of `0` and `1`.
    Json,
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) simulation: Simulation,
    pub(crate) generations: u64,
    pub(crate) interval: Duration,
    pub(crate) play: bool,
    pub(crate) format: Format,
    pub(crate) log_level: LevelFilter,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row.trim().parse().map_err(|e| format!("row: {}", e))?;
    let col = col.trim().parse().map_err(|e| format!("column: {}", e))?;
    Ok((row, col))
}

fn app() -> Command {
    command!()
        .long_about(
            "Conway's Game of Life on a finite square grid\n\
             \n\
             Cells outside the grid are always dead; nothing wraps around.\n\
             \n\
             The grid is displayed in Plaintext format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n",
        )
        .arg(
            Arg::new("DIMENSION")
                .help("Edge length of the grid")
                .long_help(
                    "Edge length of the grid\n\
                     Defaults to the value in the config file, then to the \
                     LIFEGRID_DIMENSION environment variable, then to 50.\n",
                )
                .index(1)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Starting pattern")
                .long_help(
                    "Starting pattern\n\
                     One of Empty, GliderGun, LWSS, Glider, Blinker, Block or Random. \
                     Case, '-' and '_' are ignored.\n",
                )
                .short('p')
                .long("pattern"),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .long_help(
                    "Number of generations to run\n\
                     With --play, 0 means playing until the grid stops changing.\n",
                )
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Milliseconds between two generations with --play")
                .short('i')
                .long("interval")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("TOGGLE")
                .help("Flips the cell at ROW,COL after placing the pattern")
                .short('t')
                .long("toggle")
                .value_name("ROW,COL")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .value_parser(parse_coord),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the Random pattern")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("DENSITY")
                .help("Probability for a cell of the Random pattern to be alive")
                .long("density")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a TOML, JSON or YAML file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Output format")
                .short('f')
                .long("format")
                .value_parser(["plaintext", "json", "p", "j"])
                .default_value("plaintext"),
        )
        .arg(
            Arg::new("PLAY")
                .help("Plays the simulation, printing every generation")
                .long("play")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("More logging, repeat for even more")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

/// Reads a configuration file, choosing the format by extension.
fn read_config(path: &Path) -> Result<Config, Error> {
    let invalid = |e: &dyn std::fmt::Display| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid config file {}: {}\n", path.display(), e),
        )
    };
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("cannot read {}: {}\n", path.display(), e),
        )
    })?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&text).map_err(|e| invalid(&e)),
        Some("json") => serde_json::from_str(&text).map_err(|e| invalid(&e)),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| invalid(&e)),
        _ => Err(invalid(&"unknown extension, expected toml, json or yaml")),
    }
}

/// The dimension given by the value of `LIFEGRID_DIMENSION`.
fn env_dimension(value: &str) -> isize {
    value.trim().parse().unwrap_or(FALLBACK_DIMENSION)
}

impl Args {
    /// Parses the command-line arguments and the environment.
    pub(crate) fn parse() -> Result<Self, Error> {
        Args::parse_from(env::args_os(), env::var(DIMENSION_VAR).ok())
    }

    /// Parses the given arguments, with `dimension_var` standing for the
    /// value of `LIFEGRID_DIMENSION`.
    pub(crate) fn parse_from<I, T>(args: I, dimension_var: Option<String>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().try_get_matches_from(args)?;
        let config = Args::config(&matches, dimension_var.as_deref())?;

        let format = match matches.get_one::<String>("FORMAT").map(String::as_str) {
            Some("json") | Some("j") => Format::Json,
            _ => Format::Plaintext,
        };
        let log_level = match matches.get_count("VERBOSE") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        let simulation = config
            .simulation()
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;

        Ok(Args {
            simulation,
            generations: config.max_generations.unwrap_or(0),
            interval: config.interval(),
            play: matches.get_flag("PLAY"),
            format,
            log_level,
        })
    }

    /// Builds the configuration: defaults, then the config file, then the
    /// environment, then the command line.
    fn config(matches: &ArgMatches, dimension_var: Option<&str>) -> Result<Config, Error> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        if let Some(value) = dimension_var {
            config = config.set_dimension(env_dimension(value));
        }
        if let Some(&dimension) = matches.get_one::<isize>("DIMENSION") {
            config = config.set_dimension(dimension);
        }
        if let Some(pattern) = matches.get_one::<String>("PATTERN") {
            config = config.set_pattern(pattern);
        }
        if let Some(&generations) = matches.get_one::<u64>("GENERATIONS") {
            config = config.set_max_generations(Some(generations).filter(|&g| g > 0));
        }
        if let Some(&interval) = matches.get_one::<u64>("INTERVAL") {
            config = config.set_interval_ms(interval);
        }
        if let Some(toggles) = matches.get_many::<Coord>("TOGGLE") {
            let mut all = config.toggles.clone();
            all.extend(toggles.copied());
            config = config.set_toggles(all);
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config = config.set_seed(seed);
        }
        if let Some(&density) = matches.get_one::<f64>("DENSITY") {
            config = config.set_density(density);
        }
        Ok(config)
    }
}
