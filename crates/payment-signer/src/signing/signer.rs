use alloy_primitives::B256;

use crate::error::SignerError;

/// Trait for producing recoverable ECDSA signatures over a 32-byte
/// digest.
///
/// Implementations are sync — signing is CPU-bound. The seam exists so
/// the encoding and signature-splitting pipeline can be exercised with
/// a fake signer returning fixed bytes.
pub trait RecoverableSigner: Send + Sync {
    /// Sign a prehashed digest. Returns 65 bytes: 32 bytes r, 32 bytes
    /// s, 1 byte raw recovery id (0 or 1).
    fn sign_prehash(&self, digest: &B256) -> Result<[u8; 65], SignerError>;
}
