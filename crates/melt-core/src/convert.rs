//! Backup and restore
//!
//! The two operations melt exists for. Interactive pieces (asking for a
//! passphrase) are injected through [`PassphraseProvider`] so this module
//! never touches a terminal.

use std::fmt;

use zeroize::Zeroizing;

use crate::container;
use crate::error::MeltError;
use crate::mnemonic::{self, Mnemonic};
use crate::seed::{key_from_seed, seed_of, Seed};
use crate::wordlist::resolve;

/// What a [`PassphraseProvider`] hands back.
pub type Passphrase = Result<Option<Zeroizing<Vec<u8>>>, MeltError>;

/// Supplies a passphrase on demand. `None` or an empty buffer means
/// "no passphrase".
pub trait PassphraseProvider {
    fn passphrase(&mut self) -> Passphrase;
}

impl<F> PassphraseProvider for F
where
    F: FnMut() -> Passphrase,
{
    fn passphrase(&mut self) -> Passphrase {
        self()
    }
}

/// Output of [`restore`]: both halves of the key, always together.
pub struct RestoredKey {
    /// OpenSSH private key, possibly encrypted.
    pub private_key: Zeroizing<String>,
    /// `authorized_keys` line, newline terminated.
    pub public_key: String,
    /// `SHA256:...` fingerprint of the public key.
    pub fingerprint: String,
}

impl fmt::Debug for RestoredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestoredKey")
            .field("public_key", &self.public_key)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

/// Turn an OpenSSH Ed25519 private key into a seed phrase.
///
/// If the key is encrypted, `provider` is asked once for its passphrase and
/// the parse is retried once; a second failure is final.
pub fn backup(
    container: &[u8],
    language: &str,
    provider: &mut dyn PassphraseProvider,
) -> Result<Mnemonic, MeltError> {
    let wordlist = resolve(language)?;

    let mut passphrase: Option<Zeroizing<Vec<u8>>> = None;
    let parsed = loop {
        match container::parse(container, passphrase.as_deref().map(Vec::as_slice)) {
            Err(MeltError::PassphraseRequired) if passphrase.is_none() => {
                log::debug!("key is encrypted, asking for its passphrase");
                passphrase = Some(provider.passphrase()?.unwrap_or_default());
            }
            Err(MeltError::PassphraseRequired) => return Err(MeltError::PassphraseIncorrect),
            result => break result?,
        }
    };

    let seed = seed_of(&parsed)?;
    let mnemonic = mnemonic::encode(seed.as_bytes(), wordlist)?;
    log::info!(
        "backed up key {} as {} {} words",
        container::fingerprint(&key_from_seed(&seed)),
        mnemonic.word_count(),
        wordlist.name()
    );
    Ok(mnemonic)
}

/// Rebuild an OpenSSH key pair from a seed phrase.
///
/// The language is resolved before anything else. `provider` is asked for
/// the passphrase protecting the new private key only once the phrase has
/// been validated.
pub fn restore(
    phrase: &str,
    language: &str,
    provider: &mut dyn PassphraseProvider,
    comment: &str,
) -> Result<RestoredKey, MeltError> {
    let wordlist = resolve(language)?;
    let entropy = mnemonic::decode(phrase, wordlist)?;
    let pair = key_from_seed(&Seed::from_slice(&entropy)?);

    let passphrase = provider.passphrase()?;
    let (private_key, public_key) =
        container::marshal(&pair, passphrase.as_deref().map(Vec::as_slice), comment)?;
    let fingerprint = container::fingerprint(&pair);

    log::info!(
        "restored key {} from {} words (encrypted: {})",
        fingerprint,
        wordlist.name(),
        passphrase.as_ref().is_some_and(|p| !p.is_empty())
    );

    Ok(RestoredKey {
        private_key,
        public_key,
        fingerprint,
    })
}
