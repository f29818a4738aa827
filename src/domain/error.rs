use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// The credential field is absent or empty at a point where a value
    /// is required (pre-save, verify).
    #[error("password field is inconsistent")]
    InconsistentCredential,

    #[error("hashing service error: {0}")]
    HashingService(#[from] ClientError),

    #[error("hashing client initialization failed: {0}")]
    ClientInitialization(ClientError),
}

/// Failure reported by the oblivious hashing client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("protocol error: {0}")]
    Protocol(String),
}
