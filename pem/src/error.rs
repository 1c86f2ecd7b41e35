use thiserror::Error;

/// Errors that can occur when parsing or decoding PEM-framed key material.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The text holds no decodable base64 payload between the encapsulation
    /// boundaries: the body is either empty or not valid base64.
    ///
    /// This is the codec's only hard failure. Decoding is deterministic, so
    /// retrying with the same input fails identically.
    #[error("invalid parameter: no decodable base64 payload")]
    InvalidParameter,

    /// The label in a boundary marker is not recognized
    #[error("invalid label")]
    InvalidLabel,

    /// Malformed boundary marker
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,
}
