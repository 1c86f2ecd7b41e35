//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait enables converting from a source type `T` to a
//! destination type `D`. It is used throughout the workspace to move key
//! material from framed text toward typed key values.
//!
//! # Design Pattern
//!
//! The decoder uses a two-trait pattern:
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! To add a new decodable type, implement both traits:
//!
//! ```no_run
//! use kagi::decoder::{Decoder, DecodableFrom};
//!
//! struct SourceType(Vec<u8>);
//! struct DestType(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! // 1. Mark the destination type as decodable from the source type
//! impl DecodableFrom<SourceType> for DestType {}
//!
//! // 2. Implement the decoder on the source type
//! impl Decoder<SourceType, DestType> for SourceType {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<DestType, Self::Error> {
//!         Ok(DestType(String::from_utf8_lossy(&self.0).to_string()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// This trait is implemented by the source type `T` to enable conversion
/// to the destination type `D`. The destination type must implement
/// `DecodableFrom<T>`.
///
/// A source may decode into several destinations (a `Pem` holds either a
/// public or a private key), so call sites annotate the destination:
///
/// ```ignore
/// use kagi::decoder::Decoder;
/// use pem::Pem;
///
/// let pem: Pem = text.decode()?;
/// let data: Vec<u8> = pem.decode()?;
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods. It constrains the `Decoder` trait so that a
/// conversion pair must be declared before it can be implemented, keeping
/// the set of valid conversions visible in one place per crate.
///
/// ```no_run
/// use kagi::decoder::DecodableFrom;
///
/// struct MySourceType;
/// struct MyDestType;
///
/// // Allow MyDestType to be decoded from MySourceType
/// impl DecodableFrom<MySourceType> for MyDestType {}
/// ```
pub trait DecodableFrom<T> {}
