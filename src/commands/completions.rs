use std::io;

use anyhow::{bail, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let shell_name = matches
        .get_one::<String>("shell")
        .map(String::as_str)
        .unwrap_or_default();

    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        other => bail!(
            "Unsupported shell: {} (supported: bash, zsh, fish, powershell, elvish)",
            other
        ),
    };

    generate(shell, cli, "battwatch", &mut io::stdout());
    Ok(())
}
