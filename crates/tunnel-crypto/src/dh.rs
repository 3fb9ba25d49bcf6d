//! X25519 key generation and Diffie-Hellman

use rand::rngs::OsRng;
use tracing::warn;
use x25519_dalek::StaticSecret;
use zeroize::Zeroizing;

use crate::{CryptoError, CryptoResult, PublicKey, SecretKey, SharedSecret};

/// Key pair for X25519 key exchange
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public: PublicKey,
    pub secret: SecretKey,
}

impl KeyPair {
    /// Generate a new key pair from the system CSPRNG
    pub(crate) fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        Self::from_static(&secret)
    }

    /// Rebuild a key pair from a stored secret key
    pub fn from_secret(secret: SecretKey) -> Self {
        let public = x25519_dalek::PublicKey::from(&StaticSecret::from(*secret.as_bytes()));
        Self {
            public: PublicKey::from(public.to_bytes()),
            secret,
        }
    }

    fn from_static(secret: &StaticSecret) -> Self {
        let public = x25519_dalek::PublicKey::from(secret);
        let secret_bytes = Zeroizing::new(secret.to_bytes());
        Self {
            public: PublicKey::from(public.to_bytes()),
            secret: SecretKey::from(*secret_bytes),
        }
    }
}

/// Perform Diffie-Hellman key exchange
///
/// Low-order peer keys yield an all-zero result; those are rejected and the
/// computed value is dropped (and zeroized) without being returned.
pub(crate) fn diffie_hellman(secret: &SecretKey, peer: &PublicKey) -> CryptoResult<SharedSecret> {
    let secret = StaticSecret::from(*secret.as_bytes());
    let shared = secret.diffie_hellman(&x25519_dalek::PublicKey::from(peer.to_bytes()));

    if !shared.was_contributory() {
        warn!("Rejected non-contributory X25519 public key");
        return Err(CryptoError::InvalidKeyMaterial);
    }

    Ok(SharedSecret::from(shared.to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_bytes(s: &str) -> [u8; 32] {
        hex::decode(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_dh_symmetry() {
        let alice = KeyPair::generate();
        let bob = KeyPair::generate();

        let ab = diffie_hellman(&alice.secret, &bob.public).unwrap();
        let ba = diffie_hellman(&bob.secret, &alice.public).unwrap();
        assert_eq!(ab.as_bytes(), ba.as_bytes());
    }

    #[test]
    fn test_rfc7748_vector() {
        let alice = KeyPair::from_secret(SecretKey::from(key_bytes(
            "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
        )));
        let bob = KeyPair::from_secret(SecretKey::from(key_bytes(
            "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
        )));

        assert_eq!(
            alice.public.to_bytes(),
            key_bytes("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
        );
        assert_eq!(
            bob.public.to_bytes(),
            key_bytes("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
        );

        let shared = diffie_hellman(&alice.secret, &bob.public).unwrap();
        assert_eq!(
            shared.as_bytes(),
            &key_bytes("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
        );
    }

    #[test]
    fn test_rejects_low_order_points() {
        let ours = KeyPair::generate();

        // u = 0 and u = 1 both lie in the small subgroup
        let mut one = [0u8; 32];
        one[0] = 1;

        for point in [[0u8; 32], one] {
            let result = diffie_hellman(&ours.secret, &PublicKey::from(point));
            assert!(matches!(result, Err(CryptoError::InvalidKeyMaterial)));
        }
    }

    #[test]
    fn test_from_secret_matches_generated() {
        let generated = KeyPair::generate();
        let rebuilt = KeyPair::from_secret(generated.secret.clone());
        assert_eq!(generated.public, rebuilt.public);
    }
}
