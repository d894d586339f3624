use std::path::Path;

use alloy_primitives::{Address, B256};
use serde::Serialize;

use crate::encoding::PaymentParameters;
use crate::error::SignerError;
use crate::keystore::PrivateKey;

use super::secp256k1::Secp256k1Signer;
use super::signer::RecoverableSigner;

/// A signed payment message, ready for JSON delivery to the frontend
/// that forwards it to the verifying contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignedMessage {
    /// keccak256 digest that was signed.
    #[serde(rename = "h")]
    pub hash: B256,
    pub r: B256,
    pub s: B256,
    /// Recovery id offset by 27, per Ethereum convention. Always 27
    /// or 28.
    pub v: u8,
}

/// Signs payment parameter tuples for on-chain verification.
///
/// Holds the key for its lifetime. Signing never mutates it, so a
/// single instance may be shared across threads without locking.
pub struct PaymentSigner<S = Secp256k1Signer> {
    signer: S,
}

impl PaymentSigner<Secp256k1Signer> {
    /// Build a signer from an encrypted keystore file and passphrase.
    pub fn from_keystore(path: impl AsRef<Path>, passphrase: &str) -> Result<Self, SignerError> {
        let key = PrivateKey::from_keystore(path, passphrase)?;
        Ok(Self::new(Secp256k1Signer::new(key)))
    }

    /// Ethereum address of the signing key, as the verifying contract
    /// will recover it.
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

impl<S: RecoverableSigner> PaymentSigner<S> {
    pub fn new(signer: S) -> Self {
        Self { signer }
    }

    /// Sign the canonical digest of `params`.
    ///
    /// The 65-byte recoverable signature is split into its components;
    /// `v` is the raw recovery id plus 27.
    pub fn sign(&self, params: &PaymentParameters) -> Result<SignedMessage, SignerError> {
        let hash = params.digest();
        let sig = self.signer.sign_prehash(&hash)?;
        if sig[64] > 1 {
            return Err(SignerError::SigningFailed(format!(
                "recovery id must be 0 or 1, got {}",
                sig[64]
            )));
        }
        Ok(SignedMessage {
            hash,
            r: B256::from_slice(&sig[..32]),
            s: B256::from_slice(&sig[32..64]),
            v: sig[64] + 27,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{U256, address};

    /// Fake signer returning fixed bytes, so the split/normalize logic
    /// is checked independently of real cryptography.
    struct FixedSigner {
        sig: [u8; 65],
    }

    impl RecoverableSigner for FixedSigner {
        fn sign_prehash(&self, _digest: &B256) -> Result<[u8; 65], SignerError> {
            Ok(self.sig)
        }
    }

    struct FailingSigner;

    impl RecoverableSigner for FailingSigner {
        fn sign_prehash(&self, _digest: &B256) -> Result<[u8; 65], SignerError> {
            Err(SignerError::SigningFailed("bad key material".into()))
        }
    }

    fn params() -> PaymentParameters {
        PaymentParameters::new(
            address!("0000000000000000000000000000000000000001"),
            1,
            U256::from(42u64),
            U256::from(1_000_000_000_000_000_000u64),
        )
    }

    fn fixed_sig() -> [u8; 65] {
        let mut sig = [0u8; 65];
        sig[..32].copy_from_slice(&[0x11; 32]);
        sig[32..64].copy_from_slice(&[0x22; 32]);
        sig[64] = 1;
        sig
    }

    #[test]
    fn splits_signature_and_offsets_v() {
        let signer = PaymentSigner::new(FixedSigner { sig: fixed_sig() });
        let msg = signer.sign(&params()).unwrap();
        assert_eq!(msg.hash, params().digest());
        assert_eq!(msg.r, B256::from([0x11; 32]));
        assert_eq!(msg.s, B256::from([0x22; 32]));
        assert_eq!(msg.v, 28);
    }

    #[test]
    fn zero_recovery_id_maps_to_27() {
        let mut sig = fixed_sig();
        sig[64] = 0;
        let signer = PaymentSigner::new(FixedSigner { sig });
        assert_eq!(signer.sign(&params()).unwrap().v, 27);
    }

    #[test]
    fn out_of_range_recovery_id_is_rejected() {
        let mut sig = fixed_sig();
        sig[64] = 2;
        let signer = PaymentSigner::new(FixedSigner { sig });
        let err = signer.sign(&params()).unwrap_err();
        assert!(matches!(err, SignerError::SigningFailed(_)));
    }

    #[test]
    fn signing_failure_surfaces_without_partial_output() {
        let signer = PaymentSigner::new(FailingSigner);
        let err = signer.sign(&params()).unwrap_err();
        assert!(matches!(err, SignerError::SigningFailed(_)));
    }

    #[test]
    fn serializes_as_short_field_json() {
        let signer = PaymentSigner::new(FixedSigner { sig: fixed_sig() });
        let msg = signer.sign(&params()).unwrap();
        let value = serde_json::to_value(&msg).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(
            obj.keys().collect::<Vec<_>>(),
            ["h", "r", "s", "v"],
            "frontend contract expects exactly h/r/s/v"
        );
        assert_eq!(
            obj["r"].as_str().unwrap(),
            format!("0x{}", "11".repeat(32))
        );
        assert_eq!(obj["v"].as_u64().unwrap(), 28);
        assert!(obj["h"].as_str().unwrap().starts_with("0x"));
    }
}
