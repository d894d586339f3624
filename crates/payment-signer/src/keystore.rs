use std::fmt;
use std::path::Path;

use alloy_primitives::{Address, keccak256};
use k256::ecdsa::{SigningKey, VerifyingKey};
use web3_keystore::{KeyStore, decrypt};

use crate::error::SignerError;

/// Private key recovered from an encrypted keystore.
///
/// Opaque by design: no accessor exposes the scalar, `Debug` is
/// redacted, and the type is not serializable. The only way to use it
/// is through the signing types.
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Load and decrypt a V3 (geth-style) JSON keystore file.
    ///
    /// Blocking file I/O — call once at startup, not per request.
    pub fn from_keystore(path: impl AsRef<Path>, passphrase: &str) -> Result<Self, SignerError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SignerError::KeyFileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let keystore: KeyStore = serde_json::from_slice(&bytes)
            .map_err(|e| SignerError::KeyDecryptionFailed(format!("not a valid keystore: {e}")))?;
        let key = decrypt(&keystore, passphrase)
            .map_err(|e| SignerError::KeyDecryptionFailed(e.to_string()))?;
        Self::from_slice(&key)
    }

    /// Construct from a raw 32-byte scalar, for callers that manage key
    /// material themselves (and for tests with fixed keys).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignerError> {
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| SignerError::KeyDecryptionFailed(format!("invalid key material: {e}")))?;
        Ok(Self { signing_key })
    }

    /// Ethereum address derived from the public key.
    pub fn address(&self) -> Address {
        address_of(self.signing_key.verifying_key())
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// keccak256 of the uncompressed public key (without the 0x04 tag),
/// last 20 bytes.
pub(crate) fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&digest[12..])
}
