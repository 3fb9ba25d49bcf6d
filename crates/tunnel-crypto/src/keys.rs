//! Fixed-size key and nonce types
//!
//! Every type wraps a byte array of the exact wire size, so lengths are
//! checked once when bytes enter the crate and never again.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    CryptoError, CryptoProvider, CryptoResult, KEY_SIZE, NONCE_SIZE, PUBLIC_KEY_SIZE,
    SECRET_KEY_SIZE, SHARED_SECRET_SIZE, XNONCE_SIZE,
};

fn array_from_slice<const N: usize>(what: &'static str, bytes: &[u8]) -> CryptoResult<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| CryptoError::invalid_length(what, N, bytes.len()))
}

/// X25519 public key, safe to send to the peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        array_from_slice("public key", bytes).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

/// X25519 secret key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_SIZE]);

impl SecretKey {
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        array_from_slice("secret key", bytes).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; SECRET_KEY_SIZE]> for SecretKey {
    fn from(bytes: [u8; SECRET_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Output of a Diffie-Hellman exchange
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_SIZE]);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.0
    }
}

impl From<[u8; SHARED_SECRET_SIZE]> for SharedSecret {
    fn from(bytes: [u8; SHARED_SECRET_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// 256-bit key for the AEAD ciphers and the keyed hash
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_SIZE]);

impl SymmetricKey {
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        array_from_slice("symmetric key", bytes).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for SymmetricKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}

/// 96-bit nonce for ChaCha20Poly1305
///
/// Callers must never reuse a nonce with the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        array_from_slice("nonce", bytes).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

/// 192-bit nonce for XChaCha20Poly1305
///
/// Large enough to be drawn at random without tracking previous values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XNonce([u8; XNONCE_SIZE]);

impl XNonce {
    /// Draw a fresh nonce from the system CSPRNG
    pub fn random(provider: &CryptoProvider) -> Self {
        let mut bytes = [0u8; XNONCE_SIZE];
        provider.fill_random(&mut bytes);
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        array_from_slice("extended nonce", bytes).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; XNONCE_SIZE] {
        &self.0
    }
}

impl From<[u8; XNONCE_SIZE]> for XNonce {
    fn from(bytes: [u8; XNONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(PublicKey::from_slice(&[0u8; 31]).is_err());
        assert!(SecretKey::from_slice(&[0u8; 33]).is_err());
        assert!(SymmetricKey::from_slice(&[]).is_err());
        assert!(Nonce::from_slice(&[0u8; XNONCE_SIZE]).is_err());
        assert!(XNonce::from_slice(&[0u8; NONCE_SIZE]).is_err());

        match Nonce::from_slice(&[0u8; 8]) {
            Err(CryptoError::InvalidLength {
                expected, actual, ..
            }) => {
                assert_eq!(expected, NONCE_SIZE);
                assert_eq!(actual, 8);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_slice_accepts_exact_length() {
        let key = SymmetricKey::from_slice(&[7u8; KEY_SIZE]).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; KEY_SIZE]);

        let nonce = XNonce::from_slice(&[9u8; XNONCE_SIZE]).unwrap();
        assert_eq!(nonce.as_bytes(), &[9u8; XNONCE_SIZE]);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let secret = SecretKey::from([0xAB; SECRET_KEY_SIZE]);
        let key = SymmetricKey::from([0xAB; KEY_SIZE]);

        assert_eq!(format!("{:?}", secret), "SecretKey(..)");
        assert_eq!(format!("{:?}", key), "SymmetricKey(..)");
    }

    #[test]
    fn test_public_types_wire_format() {
        let public = PublicKey::from([0x42; PUBLIC_KEY_SIZE]);
        let encoded = bincode::serialize(&public).unwrap();
        assert_eq!(encoded, vec![0x42; PUBLIC_KEY_SIZE]);
        assert_eq!(bincode::deserialize::<PublicKey>(&encoded).unwrap(), public);

        let nonce = XNonce::from([0x11; XNONCE_SIZE]);
        let encoded = bincode::serialize(&nonce).unwrap();
        assert_eq!(encoded.len(), XNONCE_SIZE);
    }
}
