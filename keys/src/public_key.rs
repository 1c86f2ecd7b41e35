//! RSA public key material.

use kagi::decoder::{DecodableFrom, Decoder};
use kagi::encoder::{EncodableTo, Encoder};
use pem::{Label, Pem};

use crate::error::Result;
use crate::wrapper::strip_public_key_wrapper;

/// An RSA public key held as bare PKCS#1 DER bytes.
///
/// Constructors accept both bare keys and keys wrapped in a
/// SubjectPublicKeyInfo; the wrapper is stripped on the way in. The bytes
/// are not validated beyond that — they are whatever survived the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    data: Vec<u8>,
}

impl PublicKey {
    /// Creates a `PublicKey` from DER bytes, stripping the
    /// SubjectPublicKeyInfo wrapper when one is present.
    pub fn from_der(data: &[u8]) -> Self {
        PublicKey {
            data: strip_public_key_wrapper(data).to_vec(),
        }
    }

    /// Creates a `PublicKey` from PEM formatted text.
    ///
    /// # Errors
    ///
    /// Fails when the text holds no decodable base64 payload.
    pub fn from_pem(text: &str) -> Result<Self> {
        let pem: Pem = text.decode()?;
        pem.decode()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl DecodableFrom<Pem> for PublicKey {}

impl Decoder<Pem, PublicKey> for Pem {
    type Error = crate::error::Error;

    fn decode(&self) -> Result<PublicKey> {
        let data: Vec<u8> = self.decode()?;
        Ok(PublicKey::from_der(&data))
    }
}

impl EncodableTo<PublicKey> for Pem {}

impl Encoder<PublicKey, Pem> for PublicKey {
    type Error = crate::error::Error;

    fn encode(&self) -> Result<Pem> {
        Ok(Pem::from_bytes(Label::PublicKey, &self.data))
    }
}

#[cfg(test)]
mod tests {
    use kagi::decoder::Decoder;
    use kagi::encoder::Encoder;
    use pem::{Label, Pem};

    use super::PublicKey;
    use crate::error::Error;

    // PKCS#1 RSAPublicKey: SEQUENCE { INTEGER 65537, INTEGER 3 }
    const BARE: [u8; 10] = [0x30, 0x08, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02, 0x01, 0x03];

    // The same key wrapped in a SubjectPublicKeyInfo
    const WRAPPED: [u8; 30] = [
        0x30, 0x1c, // SEQUENCE
        0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05,
        0x00, // AlgorithmIdentifier (rsaEncryption)
        0x03, 0x0b, 0x00, // BIT STRING, no unused bits
        0x30, 0x08, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02, 0x01, 0x03,
    ];

    #[test]
    fn test_from_der_strips_wrapper() {
        assert_eq!(BARE, PublicKey::from_der(&WRAPPED).as_bytes());
        assert_eq!(BARE, PublicKey::from_der(&BARE).as_bytes());
    }

    #[test]
    fn test_decode_from_pem() {
        let pem = Pem::from_bytes(Label::PublicKey, &WRAPPED);
        let key: PublicKey = pem.decode().unwrap();
        assert_eq!(BARE, key.as_bytes());
    }

    #[test]
    fn test_from_pem_round_trip() {
        let text = Pem::from_bytes(Label::PublicKey, &WRAPPED).to_string();

        let key = PublicKey::from_pem(&text).unwrap();
        assert_eq!(BARE, key.as_bytes());

        let framed: Pem = key.encode().unwrap();
        assert_eq!(Label::PublicKey, framed.label());
        assert!(framed.to_string().starts_with("-----BEGIN PUBLIC KEY-----"));

        let again: PublicKey = framed.decode().unwrap();
        assert_eq!(key, again);
    }

    #[test]
    fn test_from_pem_with_error() {
        let got = PublicKey::from_pem("garbage-not-base64");
        assert!(matches!(
            got,
            Err(Error::Pem(pem::error::Error::InvalidParameter))
        ));
    }
}
