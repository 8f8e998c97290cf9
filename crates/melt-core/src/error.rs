//! Error taxonomy shared by every conversion step.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeltError {
    #[error("language not supported: {0:?}")]
    NotFound(String),
    #[error("invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),
    #[error("invalid word count: {0}")]
    InvalidWordCount(usize),
    #[error("unknown word at position {0}")]
    UnknownWord(usize),
    #[error("seed phrase checksum mismatch")]
    ChecksumMismatch,
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error("key is encrypted, a passphrase is required")]
    PassphraseRequired,
    #[error("incorrect passphrase")]
    PassphraseIncorrect,
    #[error("could not parse key: {0}")]
    MalformedContainer(String),
    #[error("could not read passphrase: {0}")]
    PassphraseUnavailable(String),
    #[error("could not encode key: {0}")]
    Encoding(String),
}

impl MeltError {
    /// Whether asking the user for a passphrase could make a retry succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PassphraseRequired)
    }
}
