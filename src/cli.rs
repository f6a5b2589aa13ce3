//! Command-line interface for the autoplay driver.

use lexopt::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Override the number of weeks to play.
    pub weeks: Option<u32>,
    /// Starting city key.
    pub city: String,
    /// YAML file overriding the default game config.
    pub config_file: Option<PathBuf>,
    /// YAML file replacing the built-in content catalog.
    pub catalog_file: Option<PathBuf>,
    /// Write the full message log as JSON here.
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            seed: None,
            weeks: None,
            city: "shanghai".to_string(),
            config_file: None,
            catalog_file: None,
            output_file: None,
            quiet: false,
            verbose: false,
        }
    }
}

pub fn parse_args() -> Result<CliArgs, lexopt::Error> {
    let mut args = lexopt::Parser::from_env();
    let mut cli_args = CliArgs::default();

    while let Some(arg) = args.next()? {
        match arg {
            Long("seed") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.seed = Some(val.parse()?);
                }
            }
            Long("weeks") | Short('w') => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.weeks = Some(val.parse()?);
                }
            }
            Long("city") | Short('c') => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.city = val.string()?;
                }
            }
            Long("config") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.config_file = Some(PathBuf::from(val.string()?));
                }
            }
            Long("catalog") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.catalog_file = Some(PathBuf::from(val.string()?));
                }
            }
            Long("output") | Short('o') => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.output_file = Some(PathBuf::from(val.string()?));
                }
            }
            Long("quiet") | Short('q') => cli_args.quiet = true,
            Long("verbose") | Short('v') => cli_args.verbose = true,
            Long("help") | Short('h') => {
                print_help();
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(cli_args)
}

fn print_help() {
    println!("\nCity Trader - autoplay simulation driver\n");
    println!("USAGE:");
    println!("    city-trader-sim [OPTIONS]\n");
    println!("OPTIONS:");
    println!("    --seed <N>          Random seed for reproducible runs");
    println!("    -w, --weeks <N>     Number of weeks to play (default 52)");
    println!("    -c, --city <KEY>    Starting city: beijing, shanghai, guangzhou, suzhou");
    println!("    --config <FILE>     Load game config overrides from YAML");
    println!("    --catalog <FILE>    Load a custom content catalog from YAML");
    println!("    -o, --output <FILE> Save the message log as JSON");
    println!("    -q, --quiet         Only print the final result");
    println!("    -v, --verbose       Print every narrative message as it happens");
    println!("    -h, --help          Print help information\n");
    println!("EXAMPLES:");
    println!("    # Reproducible full year starting in Beijing");
    println!("    city-trader-sim --seed 12345 --city beijing\n");
    println!("    # Short run with the log saved for inspection");
    println!("    city-trader-sim -w 10 -o session.json -v");
}
