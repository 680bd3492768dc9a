use anyhow::Result;
use clap::{Arg, Command};
use colored::*;

use battwatch::commands;

fn main() -> Result<()> {
    battwatch::init_logging();

    let mut cli = Command::new("battwatch")
        .version("0.1.0")
        .author("Battwatch Contributors")
        .about("Battery notification daemon with adaptive polling")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("run")
                .about("Run the battery monitor in the foreground")
                .arg(
                    Arg::new("journal")
                        .long("journal")
                        .value_name("PATH")
                        .help("Write the event journal to PATH instead of the default location")
                )
        )
        .subcommand(
            Command::new("status")
                .about("Print the current battery state")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output as JSON (for scripting)")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("journal")
                .about("Inspect the event journal")
                .arg(
                    Arg::new("journal")
                        .long("journal")
                        .value_name("PATH")
                        .help("Read the event journal at PATH instead of the default location")
                )
                .arg(
                    Arg::new("tail")
                        .long("tail")
                        .value_name("N")
                        .help("Number of entries to show")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("20")
                )
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .help("Discard all journal entries")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("version")
                .about("Shows version information")
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1)
                )
        );

    let matches = cli.clone().get_matches();

    if matches.get_flag("version") {
        println!("battwatch version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("run", sub_matches)) => {
            commands::run::execute(sub_matches)?;
        }
        Some(("status", sub_matches)) => {
            commands::status::execute(sub_matches)?;
        }
        Some(("journal", sub_matches)) => {
            commands::journal::execute(sub_matches)?;
        }
        Some(("version", _)) => {
            commands::version::execute()?;
        }
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)?;
        }
        _ => {
            println!("Welcome to {}!", "battwatch".green().bold());
            println!("Use 'battwatch --help' for more information.");
        }
    }

    Ok(())
}
