//! `seedseal decrypt` — recover a mnemonic from a payload.

use crate::cipher::{self, EncryptedPayload};
use crate::cli::input::{self, Echo};
use crate::cli::{block_on, clipboard, load_settings, output, prompt_password, record, Cli};
use crate::errors::{Result, SeedSealError};

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli, input_path: Option<&str>, copy: bool) -> Result<()> {
    let (project_dir, settings) = load_settings(cli)?;

    let payload = input::read_input(input_path, "Paste encrypted payload", Echo::Visible)?;
    if payload.trim().is_empty() {
        return Err(SeedSealError::EmptyInput("encrypted payload"));
    }

    // Reject a payload we cannot read before asking for the password.
    if let Err(e) = EncryptedPayload::parse_supported(&payload).and_then(|p| p.validate_shape()) {
        let outcome = match e {
            SeedSealError::UnsupportedFormat { .. } => "unsupported format",
            _ => "invalid payload",
        };
        record(&settings, &project_dir, "decrypt", Some(outcome));
        return Err(e);
    }

    let password = prompt_password()?;
    if password.trim().is_empty() {
        return Err(SeedSealError::EmptyInput("decryption password"));
    }

    output::info("Decrypting...");
    let result = block_on(cipher::decrypt(&payload, &password))?;
    drop(password);

    let mnemonic = match result {
        Ok(mnemonic) => {
            record(&settings, &project_dir, "decrypt", Some("ok"));
            mnemonic
        }
        Err(e) => {
            let outcome = match e {
                SeedSealError::DecryptionFailed => "failed",
                SeedSealError::UnsupportedFormat { .. } => "unsupported format",
                _ => "invalid payload",
            };
            record(&settings, &project_dir, "decrypt", Some(outcome));
            return Err(e);
        }
    };

    if copy {
        clipboard::copy_and_clear(&mnemonic, settings.clipboard_clear_secs)?;
    } else {
        println!("{}", mnemonic.as_str());
        output::status("Decrypted successfully!");
        output::tip("Clear your terminal scrollback once the mnemonic is written down.");
    }

    Ok(())
}
