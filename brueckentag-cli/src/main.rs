use anyhow::Result;
use brueckentag_holidays::{bridge_days_from_holidays, Region};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod ics;
mod plan_cmd;
mod state;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BRUECKENTAG_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "brueckentag",
    version = VERSION,
    about = "Plan vacation days around German public holidays and bridge days"
)]
struct Cli {
    /// Log to stderr (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a vacation plan for a year
    Plan(plan_cmd::PlanArgs),

    /// List public holidays and the derived bridge days
    Holidays {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        region: Option<Region>,

        /// feiertage-api style JSON file used instead of the built-in calendar
        #[arg(long)]
        holidays_json: Option<PathBuf>,
    },

    /// Manage ~/.brueckentag/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config (keeps an existing file)
    Init,

    /// Print the effective config
    Show,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Plan(args) => {
            let cfg = config::load_config()?;
            plan_cmd::run_plan(&args, &cfg)?;
        }

        Command::Holidays {
            year,
            region,
            holidays_json,
        } => {
            let cfg = config::load_config()?;
            let year = plan_cmd::resolve_year(year, &cfg);
            let region = region.unwrap_or(cfg.defaults.region);
            list_holidays(year, region, holidays_json)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn list_holidays(year: i32, region: Region, json: Option<PathBuf>) -> Result<()> {
    let holidays = plan_cmd::load_holidays(year, region, json.as_deref())?;
    let bridges = bridge_days_from_holidays(year, &holidays);

    println!("# Public holidays {} ({}, {})\n", year, region.code(), region.name());
    for (date, name) in &holidays {
        println!("{}  {}", date.format("%a %Y-%m-%d"), name);
    }

    println!("\n## Bridge days\n");
    if bridges.is_empty() {
        println!("(none)");
    }
    for date in &bridges {
        println!("{}", date.format("%a %Y-%m-%d"));
    }

    Ok(())
}
