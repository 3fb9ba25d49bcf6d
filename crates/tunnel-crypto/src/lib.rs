//! Tunnel Crypto - Primitive layer for the tunnel handshake suite
//!
//! Provides X25519 key exchange, ChaCha20Poly1305 / XChaCha20Poly1305
//! authenticated encryption and BLAKE2s hashing behind a single
//! [`CryptoProvider`]. Call [`initialize`] once before creating a provider.

mod aead;
mod dh;
mod error;
mod hash;
mod init;
mod keys;
mod provider;

pub use dh::*;
pub use error::*;
pub use hash::*;
pub use init::*;
pub use keys::*;
pub use provider::*;

/// Symmetric key size (256 bits / 32 bytes)
pub const KEY_SIZE: usize = 32;

/// Public key size (256 bits / 32 bytes)
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Secret key size (256 bits / 32 bytes)
pub const SECRET_KEY_SIZE: usize = 32;

/// Shared secret size (256 bits / 32 bytes)
pub const SHARED_SECRET_SIZE: usize = 32;

/// Nonce size for ChaCha20Poly1305 (96 bits / 12 bytes)
pub const NONCE_SIZE: usize = 12;

/// Nonce size for XChaCha20Poly1305 (192 bits / 24 bytes)
pub const XNONCE_SIZE: usize = 24;

/// Authentication tag size (128 bits / 16 bytes)
pub const TAG_SIZE: usize = 16;

/// Unkeyed BLAKE2s digest size (256 bits / 32 bytes)
pub const DIGEST_SIZE: usize = 32;

/// Short MAC size used by the handshake layer (128 bits / 16 bytes)
pub const MAC_SIZE: usize = 16;

/// Largest key accepted by the keyed hash
pub const MAX_HASH_KEY_SIZE: usize = 32;
