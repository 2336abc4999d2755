use anyhow::bail;
use clap::Parser;
use log::LevelFilter;
use std::{path::PathBuf, str::FromStr};

use opacity_fix::logging::{DEFAULT_LOG_LEVEL, setup_logging};
use opacity_fix::run::{RunConfig, fix_directory};

#[derive(Parser, Debug)]
#[command(about = "Rewrite Flutter `.withValues(alpha: ...)` calls back to `.withOpacity(...)`.")]
#[command(version)]
struct Args {
    /// Directory in which to rewrite files
    #[arg(index = 1, value_parser = parse_directory, default_value = ".")]
    directory: PathBuf,

    /// Report the files that would change, without writing anything
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        value_parser = parse_log_level,
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: LevelFilter,
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("Invalid log level: {s}"))
}

fn parse_directory(dir: &str) -> anyhow::Result<PathBuf> {
    let path = PathBuf::from(dir);
    if path.exists() {
        Ok(path)
    } else {
        bail!("'{dir}' does not exist. Please provide a valid path.")
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level)?;

    let verb = if args.dry_run { "Would fix" } else { "Fixing" };
    let config = RunConfig {
        directory: args.directory,
        dry_run: args.dry_run,
    };
    let results = fix_directory(&config, |path| println!("{verb} {}", path.display()))?;
    print!("{results}");

    Ok(())
}
