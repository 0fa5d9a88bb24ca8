//! `seedseal encrypt` — encrypt a mnemonic phrase into a payload.

use std::path::Path;

use dialoguer::Confirm;

use crate::cipher;
use crate::config::Settings;
use crate::cli::input::{self, Echo};
use crate::cli::{block_on, clipboard, load_settings, output, prompt_new_password, record, Cli};
use crate::crypto::{evaluate_password_strength, is_common_password};
use crate::errors::{Result, SeedSealError};

/// Where the payload should go.
pub struct Destination<'a> {
    pub output: Option<&'a str>,
    pub save: bool,
    pub copy: bool,
}

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, input_path: Option<&str>, dest: &Destination, force: bool) -> Result<()> {
    let (project_dir, settings) = load_settings(cli)?;

    // 1. Read and check the mnemonic (12-24 words).
    let raw = input::read_input(input_path, "Enter mnemonic phrase", Echo::Hidden)?;
    let mnemonic = cipher::normalize_mnemonic(&raw)?;
    drop(raw);

    // 2. Password, then an advisory strength check.
    let password = prompt_new_password()?;
    if password.trim().is_empty() {
        return Err(SeedSealError::EmptyInput("encryption password"));
    }
    confirm_strength(&password, force)?;

    // 3. Encrypt.
    output::info("Encrypting...");
    let payload = block_on(cipher::encrypt(&mnemonic, &password))??;
    drop(password);
    drop(mnemonic);

    // 4. Deliver.
    let details = deliver(&payload, dest, &project_dir, &settings)?;
    record(&settings, &project_dir, "encrypt", Some(&details));

    output::tip("The password is the only way to recover this mnemonic. Store it separately.");
    output::tip("Keep the payload in a password manager or offline note, not email or cloud drives.");

    Ok(())
}

/// Warn about a weak password and ask whether to continue.
///
/// Strength never blocks encryption outright; `--force` skips the question.
fn confirm_strength(password: &str, force: bool) -> Result<()> {
    if is_common_password(password) {
        output::warning("This password contains a commonly used word or sequence.");
    }

    let strength = evaluate_password_strength(password);
    if strength.is_strong {
        return Ok(());
    }

    output::warning(&format!("Password strength is low: {}", strength.feedback));
    if force {
        return Ok(());
    }

    let proceed = Confirm::new()
        .with_prompt("Encrypt with this password anyway?")
        .default(false)
        .interact()
        .map_err(|e| {
            SeedSealError::CommandFailed(format!(
                "failed to read confirmation ({e}) — pass --force to skip it"
            ))
        })?;

    if proceed {
        Ok(())
    } else {
        Err(SeedSealError::UserCancelled)
    }
}

/// Write the payload to its destination and describe where it went.
fn deliver(
    payload: &str,
    dest: &Destination,
    project_dir: &Path,
    settings: &Settings,
) -> Result<String> {
    let details = if let Some(path) = dest.output {
        input::write_new_file(Path::new(path), payload)?;
        output::status(&format!("Payload written to {path}"));
        format!("file {path}")
    } else if dest.save {
        let path = settings.saved_payload_path(project_dir, chrono::Utc::now());
        input::write_new_file(&path, payload)?;
        output::status(&format!("Payload saved to {}", path.display()));
        format!("file {}", path.display())
    } else if dest.copy {
        "clipboard".to_string()
    } else {
        println!("{payload}");
        output::status("Encrypted successfully! Save the text above.");
        "stdout".to_string()
    };

    if dest.copy {
        clipboard::copy_and_clear(payload, settings.clipboard_clear_secs)?;
    }

    Ok(details)
}
