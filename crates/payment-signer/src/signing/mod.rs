mod payment;
mod secp256k1;
mod signer;

pub use payment::{PaymentSigner, SignedMessage};
pub use secp256k1::Secp256k1Signer;
pub use signer::RecoverableSigner;
