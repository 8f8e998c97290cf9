//! melt core
//!
//! Turns an Ed25519 SSH private key into a BIP-39 seed phrase and rebuilds
//! the key pair from that phrase.
//!
//! # Backup
//!
//! OpenSSH container → 32-byte seed → 24 words in the chosen language.
//!
//! # Restore
//!
//! Words → 32-byte seed → Ed25519 key pair → OpenSSH container (optionally
//! encrypted with a new passphrase) plus an `authorized_keys` line.
//!
//! The wordlist is always an explicit argument; nothing here keeps a
//! process-wide language setting.

pub mod container;
pub mod convert;
pub mod error;
pub mod memory;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

pub use container::{marshal, parse, ParsedKey};
pub use convert::{backup, restore, Passphrase, PassphraseProvider, RestoredKey};
pub use error::MeltError;
pub use mnemonic::{decode, encode, Mnemonic};
pub use seed::{key_from_seed, seed_of, KeyPair, Seed, SEED_LEN};
pub use wordlist::{resolve, Wordlist};
