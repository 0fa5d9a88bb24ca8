//! Mnemonic input checks applied by the front end before encrypting.
//!
//! The cipher itself encrypts whatever text it is given; these rules only
//! catch obvious input mistakes (an empty box, a truncated paste).

use zeroize::Zeroizing;

use crate::errors::{Result, SeedSealError};

/// Fewest words accepted in a mnemonic phrase.
pub const MIN_WORDS: usize = 12;

/// Most words accepted in a mnemonic phrase.
pub const MAX_WORDS: usize = 24;

/// Trim the phrase, collapse runs of whitespace to a single space, and
/// require between 12 and 24 words.
pub fn normalize_mnemonic(input: &str) -> Result<Zeroizing<String>> {
    let words: Vec<&str> = input.split_whitespace().collect();
    if words.is_empty() {
        return Err(SeedSealError::EmptyInput("mnemonic"));
    }
    if !(MIN_WORDS..=MAX_WORDS).contains(&words.len()) {
        return Err(SeedSealError::InvalidMnemonic(words.len()));
    }
    Ok(Zeroizing::new(words.join(" ")))
}
