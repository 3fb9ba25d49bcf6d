//! ChaCha20Poly1305 and XChaCha20Poly1305 authenticated encryption
//!
//! Both variants share the same sealing code; only the nonce width differs.

use chacha20poly1305::{
    aead::{consts::U32, Aead, AeadInPlace, KeyInit, KeySizeUser, Nonce as CipherNonce, Payload},
    ChaCha20Poly1305, XChaCha20Poly1305,
};
use tracing::debug;

use crate::{CryptoError, CryptoResult, Nonce, SymmetricKey, XNonce, TAG_SIZE};

/// Encrypt with ChaCha20Poly1305
///
/// Returns: [ciphertext][16-byte auth tag]
pub(crate) fn encrypt(
    plaintext: &[u8],
    aad: &[u8],
    nonce: &Nonce,
    key: &SymmetricKey,
) -> CryptoResult<Vec<u8>> {
    seal::<ChaCha20Poly1305>(key, nonce.as_bytes().into(), plaintext, aad)
}

/// Decrypt and verify with ChaCha20Poly1305
pub(crate) fn decrypt(
    ciphertext: &[u8],
    aad: &[u8],
    nonce: &Nonce,
    key: &SymmetricKey,
) -> CryptoResult<Vec<u8>> {
    open::<ChaCha20Poly1305>(key, nonce.as_bytes().into(), ciphertext, aad)
}

/// Encrypt with XChaCha20Poly1305
pub(crate) fn xencrypt(
    plaintext: &[u8],
    aad: &[u8],
    nonce: &XNonce,
    key: &SymmetricKey,
) -> CryptoResult<Vec<u8>> {
    seal::<XChaCha20Poly1305>(key, nonce.as_bytes().into(), plaintext, aad)
}

/// Decrypt and verify with XChaCha20Poly1305
pub(crate) fn xdecrypt(
    ciphertext: &[u8],
    aad: &[u8],
    nonce: &XNonce,
    key: &SymmetricKey,
) -> CryptoResult<Vec<u8>> {
    open::<XChaCha20Poly1305>(key, nonce.as_bytes().into(), ciphertext, aad)
}

/// Encrypt `buffer` in place with ChaCha20Poly1305 and append the tag
pub(crate) fn encrypt_in_place(
    buffer: &mut Vec<u8>,
    aad: &[u8],
    nonce: &Nonce,
    key: &SymmetricKey,
) -> CryptoResult<()> {
    seal_in_place::<ChaCha20Poly1305>(key, nonce.as_bytes().into(), buffer, aad)
}

/// Verify and decrypt `buffer` in place with ChaCha20Poly1305
pub(crate) fn decrypt_in_place(
    buffer: &mut Vec<u8>,
    aad: &[u8],
    nonce: &Nonce,
    key: &SymmetricKey,
) -> CryptoResult<()> {
    open_in_place::<ChaCha20Poly1305>(key, nonce.as_bytes().into(), buffer, aad)
}

/// Encrypt `buffer` in place with XChaCha20Poly1305 and append the tag
pub(crate) fn xencrypt_in_place(
    buffer: &mut Vec<u8>,
    aad: &[u8],
    nonce: &XNonce,
    key: &SymmetricKey,
) -> CryptoResult<()> {
    seal_in_place::<XChaCha20Poly1305>(key, nonce.as_bytes().into(), buffer, aad)
}

/// Verify and decrypt `buffer` in place with XChaCha20Poly1305
pub(crate) fn xdecrypt_in_place(
    buffer: &mut Vec<u8>,
    aad: &[u8],
    nonce: &XNonce,
    key: &SymmetricKey,
) -> CryptoResult<()> {
    open_in_place::<XChaCha20Poly1305>(key, nonce.as_bytes().into(), buffer, aad)
}

fn cipher<C>(key: &SymmetricKey) -> C
where
    C: KeyInit + KeySizeUser<KeySize = U32>,
{
    C::new(key.as_bytes().into())
}

fn seal<C>(
    key: &SymmetricKey,
    nonce: &CipherNonce<C>,
    plaintext: &[u8],
    aad: &[u8],
) -> CryptoResult<Vec<u8>>
where
    C: AeadInPlace + KeyInit + KeySizeUser<KeySize = U32>,
{
    cipher::<C>(key)
        .encrypt(nonce, Payload { msg: plaintext, aad })
        .map_err(|e| CryptoError::Encryption(e.to_string()))
}

fn open<C>(
    key: &SymmetricKey,
    nonce: &CipherNonce<C>,
    ciphertext: &[u8],
    aad: &[u8],
) -> CryptoResult<Vec<u8>>
where
    C: AeadInPlace + KeyInit + KeySizeUser<KeySize = U32>,
{
    if ciphertext.len() < TAG_SIZE {
        debug!("AEAD open failed");
        return Err(CryptoError::AuthenticationFailed);
    }

    cipher::<C>(key)
        .decrypt(nonce, Payload { msg: ciphertext, aad })
        .map_err(|_| {
            debug!("AEAD open failed");
            CryptoError::AuthenticationFailed
        })
}

fn seal_in_place<C>(
    key: &SymmetricKey,
    nonce: &CipherNonce<C>,
    buffer: &mut Vec<u8>,
    aad: &[u8],
) -> CryptoResult<()>
where
    C: AeadInPlace + KeyInit + KeySizeUser<KeySize = U32>,
{
    cipher::<C>(key)
        .encrypt_in_place(nonce, aad, buffer)
        .map_err(|e| CryptoError::Encryption(e.to_string()))
}

/// On failure the buffer still holds the untouched ciphertext.
fn open_in_place<C>(
    key: &SymmetricKey,
    nonce: &CipherNonce<C>,
    buffer: &mut Vec<u8>,
    aad: &[u8],
) -> CryptoResult<()>
where
    C: AeadInPlace + KeyInit + KeySizeUser<KeySize = U32>,
{
    if buffer.len() < TAG_SIZE {
        debug!("AEAD open failed");
        return Err(CryptoError::AuthenticationFailed);
    }

    cipher::<C>(key)
        .decrypt_in_place(nonce, aad, buffer)
        .map_err(|_| {
            debug!("AEAD open failed");
            CryptoError::AuthenticationFailed
        })
}
