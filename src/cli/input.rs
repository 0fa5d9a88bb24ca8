//! Reading mnemonics/payloads and writing payload files.
//!
//! Input comes from, in order: a `.txt` file given with `--input`, piped
//! stdin, or an interactive prompt.  Everything read is held in
//! `Zeroizing` buffers since it may be a plaintext mnemonic.

use std::fs;
use std::io::{IsTerminal, Read, Write};
use std::path::Path;

use zeroize::Zeroizing;

use crate::errors::{Result, SeedSealError};

/// How an interactive prompt should echo input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    /// Hide typed characters (mnemonics).
    Hidden,
    /// Show typed characters (payloads).
    Visible,
}

/// Read text from `--input`, stdin, or a prompt.
pub fn read_input(path: Option<&str>, prompt: &str, echo: Echo) -> Result<Zeroizing<String>> {
    if let Some(path) = path {
        return read_text_file(Path::new(path));
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        stdin.lock().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let text = match echo {
        Echo::Hidden => dialoguer::Password::new().with_prompt(prompt).interact(),
        Echo::Visible => dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text(),
    }
    .map_err(|e| SeedSealError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(text))
}

/// Read a UTF-8 `.txt` file.
///
/// Only `.txt` files are accepted, so a binary file (or a wallet
/// database) passed by mistake is refused up front.
pub fn read_text_file(path: &Path) -> Result<Zeroizing<String>> {
    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(SeedSealError::InvalidInputFile(format!(
            "{} is not a .txt file",
            path.display()
        )));
    }

    let bytes = Zeroizing::new(fs::read(path).map_err(|e| {
        SeedSealError::InvalidInputFile(format!("cannot read {}: {e}", path.display()))
    })?);

    let text = std::str::from_utf8(&bytes).map_err(|_| {
        SeedSealError::InvalidInputFile(format!("{} is not valid UTF-8", path.display()))
    })?;

    Ok(Zeroizing::new(text.to_owned()))
}

/// Write `content` to a new file, refusing to overwrite anything.
///
/// Parent directories are created as needed.  On Unix the file is
/// owner-only (0o600).
pub fn write_new_file(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Err(SeedSealError::OutputExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            SeedSealError::OutputExists(path.to_path_buf())
        } else {
            SeedSealError::Io(e)
        }
    })?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}
