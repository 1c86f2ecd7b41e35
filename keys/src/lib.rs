pub mod algorithm;
pub mod error;
pub mod keypair;
pub mod private_key;
pub mod public_key;
pub mod wrapper;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use keypair::KeyPair;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
