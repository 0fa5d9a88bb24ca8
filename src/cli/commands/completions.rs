//! `seedseal completions` — generate shell completion scripts.
//!
//! Usage:
//!   seedseal completions bash > ~/.local/share/bash-completion/completions/seedseal
//!   seedseal completions zsh > "${fpath[1]}/_seedseal"

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
