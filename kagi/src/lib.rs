//! # kagi
//!
//! Core traits for converting key material between its representations.
//!
//! ## Overview
//!
//! The conversion pattern flows like this:
//! ```text
//! text → Pem → Vec<u8> → PublicKey / PrivateKey
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one type to the next,
//! and the `Encoder` trait to convert in the reverse direction.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) to
//! constrain which conversions exist. A key type can only be decoded from a
//! representation that explicitly opts in, so an invalid conversion is a
//! compile error rather than a runtime surprise.
//!
//! ## Example
//!
//! Specific implementations are provided by the `pem` and `keys` crates:
//!
//! ```ignore
//! use kagi::decoder::Decoder;
//! use pem::Pem;
//!
//! // Decode framed text to a Pem, then to the raw bytes of its body
//! let pem: Pem = "-----BEGIN PUBLIC KEY-----...".decode().unwrap();
//! let data: Vec<u8> = pem.decode().unwrap();
//! ```
//!
//! Encoding works in the reverse direction:
//!
//! ```ignore
//! use kagi::encoder::Encoder;
//! use keys::PublicKey;
//! use pem::Pem;
//!
//! let key = PublicKey::from_der(&[0x30, 0x00]);
//! let pem: Pem = key.encode().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
