pub mod encoding;
pub mod error;
pub mod keystore;
pub mod signing;

pub use encoding::PaymentParameters;
pub use error::SignerError;
pub use keystore::PrivateKey;
pub use signing::{PaymentSigner, RecoverableSigner, Secp256k1Signer, SignedMessage};
