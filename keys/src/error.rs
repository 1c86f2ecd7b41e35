use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("PEM error: {0}")]
    Pem(#[from] pem::error::Error),

    #[error("key generation error: {0}")]
    KeyGeneration(#[from] rsa::Error),

    #[error("PKCS#1 error: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
