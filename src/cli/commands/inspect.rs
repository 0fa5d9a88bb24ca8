//! `seedseal inspect` — show payload metadata without the password.

use crate::cipher::{self, EncryptedPayload};
use crate::cli::input::{self, Echo};
use crate::cli::{load_settings, output, record, Cli};
use crate::errors::Result;

/// Execute the `inspect` command.
pub fn execute(cli: &Cli, input_path: Option<&str>) -> Result<()> {
    let (project_dir, settings) = load_settings(cli)?;

    let text = input::read_input(input_path, "Paste encrypted payload", Echo::Visible)?;
    let payload = EncryptedPayload::parse(&text)?;
    let info = payload.info();

    output::print_payload_info(&info);

    if !info.supported {
        output::warning(&format!(
            "Unsupported format: this build reads version {} / {} only.",
            cipher::FORMAT_VERSION,
            cipher::ALGORITHM
        ));
    } else if let Err(e) = payload.validate_shape() {
        output::warning(&e.to_string());
    } else {
        output::success("Payload is well-formed and can be decrypted with its password.");
    }

    record(&settings, &project_dir, "inspect", Some(&format!("{} bytes", info.data_size)));

    Ok(())
}
