//! BIP-39 mnemonic codec
//!
//! Thin layer over the `bip39` crate. Entropy of 16–32 bytes (a multiple of
//! 4) gains a SHA-256 checksum and is split into 11-bit word indices, so a
//! 32-byte SSH seed becomes 24 words.
//!
//! The wordlist is always an explicit argument: decoding uses `parse_in`
//! with the caller's language and never auto-detects one.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::MeltError;
use crate::wordlist::Wordlist;

/// An ordered, checksummed sequence of words from a single wordlist.
pub struct Mnemonic {
    wordlist: &'static Wordlist,
    inner: bip39::Mnemonic,
}

impl Mnemonic {
    pub fn wordlist(&self) -> &'static Wordlist {
        self.wordlist
    }

    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.words()
    }

    /// Words joined by single ASCII spaces.
    pub fn phrase(&self) -> Zeroizing<String> {
        let mut phrase = Zeroizing::new(String::new());
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                phrase.push(' ');
            }
            phrase.push_str(word);
        }
        phrase
    }

    /// Parse and fully validate a phrase against `wordlist`.
    pub fn parse(phrase: &str, wordlist: &'static Wordlist) -> Result<Self, MeltError> {
        let inner = bip39::Mnemonic::parse_in(wordlist.language(), phrase).map_err(codec_error)?;
        Ok(Self { wordlist, inner })
    }

    /// The entropy this mnemonic encodes.
    pub fn to_entropy(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.inner.to_entropy())
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.wordlist.tag())
            .field("words", &self.word_count())
            .finish_non_exhaustive()
    }
}

/// Encode `entropy` as a mnemonic in `wordlist`.
///
/// # Example
/// ```
/// use melt_core::mnemonic::encode;
/// use melt_core::wordlist::ENGLISH;
///
/// let mnemonic = encode(&[0u8; 32], &ENGLISH).unwrap();
/// assert_eq!(mnemonic.word_count(), 24);
/// assert!(mnemonic.phrase().ends_with("abandon art"));
/// ```
pub fn encode(entropy: &[u8], wordlist: &'static Wordlist) -> Result<Mnemonic, MeltError> {
    let inner = bip39::Mnemonic::from_entropy_in(wordlist.language(), entropy).map_err(|e| match e {
        bip39::Error::BadEntropyBitCount(_) => MeltError::InvalidEntropyLength(entropy.len()),
        other => codec_error(other),
    })?;
    Ok(Mnemonic { wordlist, inner })
}

/// Decode a phrase back into its entropy, verifying the checksum.
///
/// Words may be separated by any Unicode whitespace and typed in any
/// Unicode normalization form; leading and trailing whitespace is ignored.
pub fn decode(phrase: &str, wordlist: &'static Wordlist) -> Result<Zeroizing<Vec<u8>>, MeltError> {
    Ok(Mnemonic::parse(phrase, wordlist)?.to_entropy())
}

fn codec_error(err: bip39::Error) -> MeltError {
    match err {
        bip39::Error::BadWordCount(count) => MeltError::InvalidWordCount(count),
        bip39::Error::UnknownWord(position) => MeltError::UnknownWord(position),
        bip39::Error::BadEntropyBitCount(bits) => MeltError::InvalidEntropyLength(bits / 8),
        bip39::Error::InvalidChecksum => MeltError::ChecksumMismatch,
        other => MeltError::Encoding(other.to_string()),
    }
}
