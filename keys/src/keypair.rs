//! Asymmetric key pair generation.

use rand::rngs::OsRng;
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;

/// An asymmetric key pair freshly generated for one algorithm.
#[derive(Debug, Clone)]
pub struct KeyPair {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl KeyPair {
    /// Generates a key pair for `algorithm`.
    ///
    /// Generation is delegated to the `rsa` crate; both halves are exported
    /// as bare PKCS#1 DER.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying generator or the PKCS#1 export
    /// fails.
    pub fn generate(algorithm: Algorithm) -> Result<KeyPair> {
        let mut rng = OsRng;
        let private = RsaPrivateKey::new(&mut rng, algorithm.key_bits())?;
        let public = RsaPublicKey::from(&private);

        Ok(KeyPair {
            public_key: PublicKey::from_der(public.to_pkcs1_der()?.as_bytes()),
            private_key: PrivateKey::from_der(private.to_pkcs1_der()?.as_bytes()),
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Consumes the pair, returning both halves.
    pub fn into_keys(self) -> (PublicKey, PrivateKey) {
        (self.public_key, self.private_key)
    }
}

#[cfg(test)]
mod tests {
    use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
    use rsa::traits::PublicKeyParts;
    use rsa::{RsaPrivateKey, RsaPublicKey};

    use super::KeyPair;
    use crate::algorithm::Algorithm;

    #[test]
    fn test_generate_rsa_2048() {
        let pair = KeyPair::generate(Algorithm::Rsa2048).unwrap();

        let public = RsaPublicKey::from_pkcs1_der(pair.public_key().as_bytes()).unwrap();
        let private = RsaPrivateKey::from_pkcs1_der(pair.private_key().as_bytes()).unwrap();

        assert_eq!(256, public.size());
        assert_eq!(public, RsaPublicKey::from(&private));
    }
}
