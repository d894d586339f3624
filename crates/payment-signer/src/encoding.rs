use std::str::FromStr;

use alloy_primitives::{Address, B256, U256, keccak256};

use crate::error::SignerError;

/// Length of the packed pre-hash buffer: 20 + 32 + 1 + 32.
pub const PACKED_LEN: usize = 85;

/// The payment fields covered by a signature.
///
/// Field order and widths mirror the verifying contract's
/// `keccak256(abi.encodePacked(payer, paymentNumber, paymentMethod,
/// chargeAmountInWei))` and must not be reordered or resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentParameters {
    pub payer: Address,
    pub payment_method: u8,
    pub payment_number: U256,
    pub charge_amount_in_wei: U256,
}

impl PaymentParameters {
    pub fn new(
        payer: Address,
        payment_method: u8,
        payment_number: U256,
        charge_amount_in_wei: U256,
    ) -> Self {
        Self {
            payer,
            payment_method,
            payment_number,
            charge_amount_in_wei,
        }
    }

    /// Parse untyped fields as they arrive from a frontend: a 0x-hex
    /// address and decimal (or 0x-hex) big integers. A value that does
    /// not fit its declared width fails with `ParameterOutOfRange`;
    /// nothing is ever truncated.
    pub fn parse(
        payer: &str,
        payment_method: u8,
        payment_number: &str,
        charge_amount_in_wei: &str,
    ) -> Result<Self, SignerError> {
        let payer =
            Address::from_str(payer).map_err(|_| SignerError::ParameterOutOfRange("payer"))?;
        let payment_number = U256::from_str(payment_number)
            .map_err(|_| SignerError::ParameterOutOfRange("payment_number"))?;
        let charge_amount_in_wei = U256::from_str(charge_amount_in_wei)
            .map_err(|_| SignerError::ParameterOutOfRange("charge_amount_in_wei"))?;
        Ok(Self::new(
            payer,
            payment_method,
            payment_number,
            charge_amount_in_wei,
        ))
    }

    /// Canonical packed encoding, bit-identical to the contract side:
    /// payer (20 bytes), payment number (32, big-endian), payment
    /// method (1), charge amount (32, big-endian).
    pub fn packed_bytes(&self) -> [u8; PACKED_LEN] {
        let mut buf = [0u8; PACKED_LEN];
        buf[..20].copy_from_slice(self.payer.as_slice());
        buf[20..52].copy_from_slice(&self.payment_number.to_be_bytes::<32>());
        buf[52] = self.payment_method;
        buf[53..].copy_from_slice(&self.charge_amount_in_wei.to_be_bytes::<32>());
        buf
    }

    /// keccak256 over the packed encoding. This is the digest that gets
    /// signed and that the contract recomputes.
    pub fn digest(&self) -> B256 {
        keccak256(self.packed_bytes())
    }
}
