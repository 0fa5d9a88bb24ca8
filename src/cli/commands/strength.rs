//! `seedseal strength` — rate a password without encrypting anything.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::crypto::{evaluate_password_strength, is_common_password};
use crate::errors::{Result, SeedSealError};

/// Execute the `strength` command.
pub fn execute(password: Option<&str>) -> Result<()> {
    let password = match password {
        Some(pw) => Zeroizing::new(pw.to_owned()),
        None => Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Password to rate")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| SeedSealError::CommandFailed(format!("password prompt: {e}")))?,
        ),
    };

    output::print_strength(&evaluate_password_strength(&password));

    if is_common_password(&password) {
        output::warning("Contains a commonly used word or sequence; pick something else.");
    }

    Ok(())
}
