// SPDX-License-Identifier: AGPL-3.0-or-later

//! CLI tool for wpak

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use colored::Colorize;
use std::path::PathBuf;

#[cfg(feature = "cli")]
use wpaklib::actions::{self, ListFormat, Tools};
#[cfg(feature = "cli")]
use wpaklib::{Config, DeviceContext, SystemRunner, Target};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "wpak")]
#[command(about = "Utility commands for wpctl, rofi, dunst", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Operate on audio source devices, instead of sinks
    #[arg(long, global = true)]
    source: bool,

    /// Configuration file (default: $XDG_CONFIG_HOME/wpak/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Toggle mute on default device
    Mute,
    /// Select default device via rofi
    Select,
    /// Select next default device
    Cycle,
    /// Turn volume up or down by DELTA%
    Volume {
        /// Signed percentage, e.g. 5 or -5
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    /// List devices, marking the default
    List {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: ListFormat,
    },
    /// Print a sample configuration file
    SampleConfig,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        eprintln!("{} {}", "[ERROR]".red(), e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> wpaklib::Result<()> {
    if let Commands::SampleConfig = cli.command {
        print!("{}", Config::sample_toml());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let ctx = DeviceContext::from_config(Target::from_source_flag(cli.source), &config);
    let runner = SystemRunner;
    let tools = Tools::new(&runner, &config);
    log::debug!("operating on {:?}", ctx.target);

    match &cli.command {
        Commands::Mute => actions::toggle_mute(&tools, &ctx),
        Commands::Select => actions::select_device(&tools, &ctx),
        Commands::Cycle => actions::cycle_device(&tools, &ctx),
        Commands::Volume { delta } => actions::turn_volume(&tools, &ctx, *delta),
        Commands::List { format } => {
            println!("{}", actions::list_devices(&tools, &ctx, *format)?);
            Ok(())
        }
        Commands::SampleConfig => Ok(()),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI features not enabled. Please compile with --features cli");
    std::process::exit(1);
}
