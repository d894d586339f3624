use std::path::PathBuf;

/// Errors surfaced to the caller. Nothing is retried or logged
/// internally; recovery (e.g. re-prompting for a passphrase) is a
/// caller concern.
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("failed to read key file {}: {source}", path.display())]
    KeyFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decrypt keystore: {0}")]
    KeyDecryptionFailed(String),
    #[error("payment parameter does not fit its declared width: {0}")]
    ParameterOutOfRange(&'static str),
    #[error("ecdsa signing failed: {0}")]
    SigningFailed(String),
}
