//! Ed25519 seed handling
//!
//! The only key type melt can back up is Ed25519, whose whole secret is a
//! 32-byte seed. Everything else about the key pair is derived from it.

use std::fmt;

use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::Zeroizing;

use crate::container::ParsedKey;
use crate::error::MeltError;

/// Length of an Ed25519 seed in bytes.
pub const SEED_LEN: usize = 32;

/// The secret 32 bytes behind an Ed25519 key. Zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Build a seed from decoded entropy, which must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MeltError> {
        let array: [u8; SEED_LEN] = bytes
            .try_into()
            .map_err(|_| MeltError::InvalidEntropyLength(bytes.len()))?;
        Ok(Self::from_bytes(array))
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// An Ed25519 private key and its public half.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    signing: SigningKey,
}

impl KeyPair {
    pub fn seed(&self) -> Seed {
        Seed::from_bytes(self.signing.to_bytes())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }

    pub fn public_bytes(&self) -> [u8; 32] {
        self.signing.verifying_key().to_bytes()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.verifying_key())
            .finish_non_exhaustive()
    }
}

/// Derive the Ed25519 key pair for `seed`. Total and deterministic.
pub fn key_from_seed(seed: &Seed) -> KeyPair {
    KeyPair {
        signing: SigningKey::from_bytes(seed.as_bytes()),
    }
}

/// Pull the seed out of a parsed key; anything but Ed25519 is refused.
pub fn seed_of(key: &ParsedKey) -> Result<Seed, MeltError> {
    match key {
        ParsedKey::Ed25519(seed) => Ok(seed.clone()),
        ParsedKey::Other(algorithm) => Err(MeltError::UnsupportedKeyType(algorithm.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, Verifier};

    #[test]
    fn test_key_from_seed_is_deterministic() {
        let seed = Seed::from_bytes([9u8; SEED_LEN]);
        let a = key_from_seed(&seed);
        let b = key_from_seed(&seed);
        assert_eq!(a, b);
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.public_bytes(), b.public_bytes());
        assert_eq!(a.seed().as_bytes(), seed.as_bytes());
    }

    /// RFC 8032 test 1.
    #[test]
    fn test_rfc8032_public_key() {
        let seed = hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")
            .unwrap();
        let pair = key_from_seed(&Seed::from_slice(&seed).unwrap());
        assert_eq!(
            hex::encode(pair.public_bytes()),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );
    }

    #[test]
    fn test_different_seeds_different_keys() {
        let a = key_from_seed(&Seed::from_bytes([0u8; SEED_LEN]));
        let b = key_from_seed(&Seed::from_bytes([1u8; SEED_LEN]));
        assert_ne!(a.public_bytes(), b.public_bytes());
    }

    #[test]
    fn test_derived_key_signs() {
        let pair = key_from_seed(&Seed::from_bytes([3u8; SEED_LEN]));
        let signature = pair.signing.sign(b"melt");
        assert!(pair.verifying_key().verify(b"melt", &signature).is_ok());
    }

    #[test]
    fn test_seed_from_slice_checks_length() {
        assert_eq!(
            Seed::from_slice(&[0u8; 16]).unwrap_err(),
            MeltError::InvalidEntropyLength(16)
        );
        assert!(Seed::from_slice(&[0u8; SEED_LEN]).is_ok());
    }

    #[test]
    fn test_seed_of_rejects_other_algorithms() {
        let seed = Seed::from_bytes([5u8; SEED_LEN]);
        assert_eq!(seed_of(&ParsedKey::Ed25519(seed.clone())).unwrap(), seed);
        assert_eq!(
            seed_of(&ParsedKey::Other("ssh-rsa".to_string())).unwrap_err(),
            MeltError::UnsupportedKeyType("ssh-rsa".to_string())
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let seed = Seed::from_bytes([0xAB; SEED_LEN]);
        assert_eq!(format!("{:?}", seed), "Seed(..)");
        let pair = key_from_seed(&seed);
        assert!(format!("{:?}", pair).starts_with("KeyPair { public:"));
    }
}
