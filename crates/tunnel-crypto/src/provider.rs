//! Primitive provider, the public entry point for every operation

use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

use crate::{
    aead, dh, hash, is_initialized, CryptoError, CryptoResult, Digest, KeyPair, Nonce,
    PublicKey, SecretKey, SharedSecret, SymmetricKey, XNonce, KEY_SIZE, MAC_SIZE,
};

/// Handle to the crypto primitives
///
/// Holds no state. A value can only be obtained after [`crate::initialize`]
/// succeeded, so every method may assume the library is ready. The handle is
/// `Copy` and can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct CryptoProvider {
    _private: (),
}

impl CryptoProvider {
    /// Create a provider, failing if the library was not initialized
    pub fn new() -> CryptoResult<Self> {
        if !is_initialized() {
            return Err(CryptoError::NotInitialized);
        }
        Ok(Self { _private: () })
    }

    /// Fill `buf` from the system CSPRNG
    ///
    /// # Panics
    /// Panics if the OS entropy source fails. Weak randomness is never
    /// returned in its place.
    pub fn fill_random(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }

    /// Generate a random 256-bit symmetric key
    pub fn generate_key(&self) -> SymmetricKey {
        let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
        self.fill_random(&mut *bytes);
        SymmetricKey::from(*bytes)
    }

    /// Generate an X25519 key pair
    pub fn generate_keypair(&self) -> KeyPair {
        KeyPair::generate()
    }

    /// X25519 Diffie-Hellman between our secret and the peer's public key
    ///
    /// Returns [`CryptoError::InvalidKeyMaterial`] for low-order peer keys.
    pub fn dh(&self, secret: &SecretKey, peer: &PublicKey) -> CryptoResult<SharedSecret> {
        dh::diffie_hellman(secret, peer)
    }

    /// ChaCha20Poly1305 encryption, returns `plaintext.len() + TAG_SIZE` bytes
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        aad: &[u8],
        nonce: &Nonce,
        key: &SymmetricKey,
    ) -> CryptoResult<Vec<u8>> {
        aead::encrypt(plaintext, aad, nonce, key)
    }

    /// ChaCha20Poly1305 decryption
    ///
    /// Any failure, including input shorter than the tag, is reported as
    /// [`CryptoError::AuthenticationFailed`] and no plaintext is returned.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        aad: &[u8],
        nonce: &Nonce,
        key: &SymmetricKey,
    ) -> CryptoResult<Vec<u8>> {
        aead::decrypt(ciphertext, aad, nonce, key)
    }

    /// Encrypt `buffer` in place and append the tag
    pub fn encrypt_in_place(
        &self,
        buffer: &mut Vec<u8>,
        aad: &[u8],
        nonce: &Nonce,
        key: &SymmetricKey,
    ) -> CryptoResult<()> {
        aead::encrypt_in_place(buffer, aad, nonce, key)
    }

    /// Verify and decrypt `buffer` in place, leaving only the plaintext
    pub fn decrypt_in_place(
        &self,
        buffer: &mut Vec<u8>,
        aad: &[u8],
        nonce: &Nonce,
        key: &SymmetricKey,
    ) -> CryptoResult<()> {
        aead::decrypt_in_place(buffer, aad, nonce, key)
    }

    /// XChaCha20Poly1305 encryption
    pub fn xencrypt(
        &self,
        plaintext: &[u8],
        aad: &[u8],
        nonce: &XNonce,
        key: &SymmetricKey,
    ) -> CryptoResult<Vec<u8>> {
        aead::xencrypt(plaintext, aad, nonce, key)
    }

    /// XChaCha20Poly1305 decryption
    pub fn xdecrypt(
        &self,
        ciphertext: &[u8],
        aad: &[u8],
        nonce: &XNonce,
        key: &SymmetricKey,
    ) -> CryptoResult<Vec<u8>> {
        aead::xdecrypt(ciphertext, aad, nonce, key)
    }

    /// XChaCha20Poly1305 variant of [`Self::encrypt_in_place`]
    pub fn xencrypt_in_place(
        &self,
        buffer: &mut Vec<u8>,
        aad: &[u8],
        nonce: &XNonce,
        key: &SymmetricKey,
    ) -> CryptoResult<()> {
        aead::xencrypt_in_place(buffer, aad, nonce, key)
    }

    /// XChaCha20Poly1305 variant of [`Self::decrypt_in_place`]
    pub fn xdecrypt_in_place(
        &self,
        buffer: &mut Vec<u8>,
        aad: &[u8],
        nonce: &XNonce,
        key: &SymmetricKey,
    ) -> CryptoResult<()> {
        aead::xdecrypt_in_place(buffer, aad, nonce, key)
    }

    /// Unkeyed BLAKE2s-256
    pub fn hash(&self, input: &[u8]) -> Digest {
        hash::hash(input)
    }

    /// Keyed BLAKE2s
    ///
    /// `key` must be 1..=32 bytes and `out_len` 1..=32. Reference BLAKE2s
    /// treats an empty key as the unkeyed hash; that is rejected here so a
    /// missing key can never produce a publicly computable MAC.
    pub fn keyed_hash(&self, input: &[u8], key: &[u8], out_len: usize) -> CryptoResult<Vec<u8>> {
        hash::keyed_hash(input, key, out_len)
    }

    /// Keyed BLAKE2s with a 16-byte output, the short MAC used by the handshake
    pub fn mac(&self, input: &[u8], key: &[u8]) -> CryptoResult<[u8; MAC_SIZE]> {
        hash::mac(input, key)
    }
}
