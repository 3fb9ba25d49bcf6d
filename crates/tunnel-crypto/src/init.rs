//! Process-wide library initialization

use std::sync::OnceLock;

use rand::{rngs::OsRng, RngCore};
use tracing::{error, info};
use zeroize::Zeroizing;

use crate::{CryptoError, CryptoResult};

/// Outcome of the first initialization attempt, shared by every caller
static INIT_STATUS: OnceLock<Result<(), String>> = OnceLock::new();

/// Initialize the crypto primitives.
///
/// Must be called before [`crate::CryptoProvider::new`]. Repeated and
/// concurrent calls are safe: the entropy probe runs once and every caller
/// observes the same result. A failure is permanent for the process.
pub fn initialize() -> CryptoResult<()> {
    INIT_STATUS
        .get_or_init(probe_entropy)
        .clone()
        .map_err(CryptoError::InitializationFailure)
}

/// Whether [`initialize`] has completed successfully
pub fn is_initialized() -> bool {
    matches!(INIT_STATUS.get(), Some(Ok(())))
}

fn probe_entropy() -> Result<(), String> {
    let mut probe = Zeroizing::new([0u8; 32]);

    match OsRng.try_fill_bytes(&mut *probe) {
        Ok(()) => {
            info!("Crypto primitives initialized");
            Ok(())
        }
        Err(e) => {
            error!("Entropy source unavailable: {}", e);
            Err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        initialize().unwrap();
        initialize().unwrap();
        assert!(is_initialized());
    }

    #[test]
    fn test_concurrent_initialize() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| initialize().is_ok()))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert!(is_initialized());
    }
}
