//! BLAKE2s digest and keyed MAC

use blake2s_simd::Params;

use crate::{CryptoError, CryptoResult, DIGEST_SIZE, MAC_SIZE, MAX_HASH_KEY_SIZE};

/// Full-length unkeyed BLAKE2s output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

pub(crate) fn hash(input: &[u8]) -> Digest {
    let hash = Params::new().hash_length(DIGEST_SIZE).hash(input);
    let mut out = [0u8; DIGEST_SIZE];
    out.copy_from_slice(hash.as_bytes());
    Digest(out)
}

/// Keyed BLAKE2s with a caller-chosen output length
pub(crate) fn keyed_hash(input: &[u8], key: &[u8], out_len: usize) -> CryptoResult<Vec<u8>> {
    check_key(key)?;
    if out_len == 0 || out_len > DIGEST_SIZE {
        return Err(CryptoError::invalid_length("hash output", DIGEST_SIZE, out_len));
    }

    let hash = Params::new().hash_length(out_len).key(key).hash(input);
    Ok(hash.as_bytes().to_vec())
}

/// Keyed BLAKE2s truncated to [`MAC_SIZE`] bytes
pub(crate) fn mac(input: &[u8], key: &[u8]) -> CryptoResult<[u8; MAC_SIZE]> {
    check_key(key)?;

    let hash = Params::new().hash_length(MAC_SIZE).key(key).hash(input);
    let mut out = [0u8; MAC_SIZE];
    out.copy_from_slice(hash.as_bytes());
    Ok(out)
}

fn check_key(key: &[u8]) -> CryptoResult<()> {
    if key.is_empty() || key.len() > MAX_HASH_KEY_SIZE {
        return Err(CryptoError::invalid_length("hash key", MAX_HASH_KEY_SIZE, key.len()));
    }
    Ok(())
}
