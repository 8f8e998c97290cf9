//! Terminal passphrase prompts
//!
//! Both prompts read from the controlling terminal, not stdin, so a seed
//! phrase can be piped in while the passphrase is still typed.

use std::path::Path;

use melt_core::{MeltError, Passphrase};
use zeroize::Zeroizing;

/// Provider asking for the passphrase of the key at `path`.
pub fn unlock(path: &Path) -> impl FnMut() -> Passphrase + '_ {
    move || {
        let answer = read_password(&format!(
            "Enter the passphrase to unlock \"{}\": ",
            path.display()
        ))?;
        Ok(non_empty(answer))
    }
}

/// Provider asking twice for the passphrase protecting a restored key.
pub fn new_passphrase() -> Passphrase {
    let first = read_password("Enter passphrase (empty for no passphrase): ")?;
    let second = read_password("Enter same passphrase again: ")?;
    confirm(first, second)
}

fn confirm(first: Zeroizing<String>, second: Zeroizing<String>) -> Passphrase {
    if first.as_bytes() != second.as_bytes() {
        return Err(MeltError::PassphraseUnavailable(
            "passphrases do not match".to_string(),
        ));
    }
    Ok(non_empty(first))
}

fn non_empty(answer: Zeroizing<String>) -> Option<Zeroizing<Vec<u8>>> {
    if answer.is_empty() {
        None
    } else {
        Some(Zeroizing::new(answer.as_bytes().to_vec()))
    }
}

fn read_password(prompt: &str) -> Result<Zeroizing<String>, MeltError> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| MeltError::PassphraseUnavailable(e.to_string()))
}
