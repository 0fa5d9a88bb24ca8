//! `seedseal generate-password` — print or copy a strong random password.

use crate::cli::{clipboard, load_settings, output, Cli};
use crate::crypto::generate_strong_password;
use crate::errors::Result;

/// Execute the `generate-password` command.
pub fn execute(cli: &Cli, copy: bool) -> Result<()> {
    let password = generate_strong_password();

    if copy {
        let (_, settings) = load_settings(cli)?;
        clipboard::copy_and_clear(&password, settings.clipboard_clear_secs)?;
    } else {
        println!("{}", password.as_str());
        output::tip("Write this down before using it; it cannot be recovered later.");
    }

    Ok(())
}
