//! CLI module — Clap argument parser, input/output helpers, and command implementations.

pub mod clipboard;
pub mod commands;
pub mod input;
pub mod output;

use std::future::Future;
use std::path::{Path, PathBuf};

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, SeedSealError};

/// Environment variable read before any password prompt (CI/scripts).
pub const PASSWORD_ENV: &str = "SEEDSEAL_PASSWORD";

/// SeedSeal CLI: password-based encryption for wallet mnemonics.
#[derive(Parser)]
#[command(
    name = "seedseal",
    about = "Encrypt and recover wallet mnemonic phrases with a password",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding .seedseal.toml (default: current directory)
    #[arg(long, default_value = ".", global = true)]
    pub project_dir: String,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a mnemonic phrase (reads --input, piped stdin, or a prompt)
    Encrypt {
        /// Read the mnemonic from a .txt file
        #[arg(short, long)]
        input: Option<String>,

        /// Write the payload to this file instead of stdout
        #[arg(short, long, conflicts_with = "save")]
        output: Option<String>,

        /// Save the payload to a timestamped file in the configured output_dir
        #[arg(long)]
        save: bool,

        /// Copy the payload to the clipboard
        #[arg(long)]
        copy: bool,

        /// Skip the weak-password confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Decrypt a payload back into the mnemonic phrase
    Decrypt {
        /// Read the payload from a .txt file
        #[arg(short, long)]
        input: Option<String>,

        /// Copy the mnemonic to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Show payload metadata without decrypting
    Inspect {
        /// Read the payload from a .txt file
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Rate a password's strength (prompts if omitted)
    Strength {
        /// Password to rate (visible in shell history; prefer the prompt)
        password: Option<String>,
    },

    /// Generate a strong random password
    GeneratePassword {
        /// Copy the password to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// View the audit log of operations
    #[cfg(feature = "audit-log")]
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the password for decryption, trying in order:
/// 1. `SEEDSEAL_PASSWORD` env var (CI/scripts)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter decryption password")
        .interact()
        .map_err(|e| SeedSealError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for an encryption password with confirmation.
///
/// Also respects `SEEDSEAL_PASSWORD` for scripted usage.  Strength is
/// not enforced here; the `encrypt` command warns and asks instead.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Choose encryption password")
        .with_confirmation(
            "Confirm encryption password",
            "Passwords do not match, try again",
        )
        .interact()
        .map_err(|e| SeedSealError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

fn password_from_env() -> Option<Zeroizing<String>> {
    let pw = Zeroizing::new(std::env::var(PASSWORD_ENV).ok()?);
    if pw.trim().is_empty() {
        None
    } else {
        Some(pw)
    }
}

/// Resolve the project directory from the CLI arguments.
pub fn project_dir(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(&cli.project_dir))
}

/// Load settings for the project directory.
pub fn load_settings(cli: &Cli) -> Result<(PathBuf, Settings)> {
    let dir = project_dir(cli)?;
    let settings = Settings::load(&dir)?;
    Ok((dir, settings))
}

/// Record an audit event when the audit log is compiled in.
pub fn record(settings: &Settings, project_dir: &Path, op: &str, details: Option<&str>) {
    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(settings, project_dir, op, details);

    #[cfg(not(feature = "audit-log"))]
    let _ = (settings, project_dir, op, details);
}

/// Drive one of the async cipher operations to completion.
///
/// The CLI does nothing else concurrently, so a current-thread runtime is
/// enough; the KDF itself still runs on tokio's blocking pool.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| SeedSealError::CommandFailed(format!("async runtime: {e}")))?;
    Ok(runtime.block_on(future))
}
