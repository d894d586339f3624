use alloy_primitives::{Address, B256};
use k256::ecdsa::{RecoveryId, Signature, signature::hazmat::PrehashSigner};

use crate::error::SignerError;
use crate::keystore::PrivateKey;

use super::signer::RecoverableSigner;

/// ECDSA signer on the secp256k1 curve producing Ethereum-compatible
/// recoverable signatures (65 bytes: r + s + recovery id).
///
/// Nonces are deterministic (RFC 6979), so a given digest and key
/// always yield the same signature. The recovery id enables
/// `ecrecover` in Solidity to derive the signer's address without the
/// public key.
pub struct Secp256k1Signer {
    key: PrivateKey,
}

impl Secp256k1Signer {
    pub fn new(key: PrivateKey) -> Self {
        Self { key }
    }

    /// Ethereum address of the signing key.
    pub fn address(&self) -> Address {
        self.key.address()
    }
}

impl RecoverableSigner for Secp256k1Signer {
    fn sign_prehash(&self, digest: &B256) -> Result<[u8; 65], SignerError> {
        let (signature, recovery_id): (Signature, RecoveryId) = self
            .key
            .signing_key()
            .sign_prehash(digest.as_slice())
            .map_err(|e| SignerError::SigningFailed(format!("secp256k1 sign_prehash: {e}")))?;

        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&signature.to_bytes());
        out[64] = recovery_id.to_byte();
        Ok(out)
    }
}
