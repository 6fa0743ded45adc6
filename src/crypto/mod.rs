//! Elliptic-curve key generation.
//!
//! This module provides:
//! - Curve selection by name
//! - secp256k1 keypair generation from OS randomness or an injected RNG
//! - Public point derivation from a fixed secret scalar

mod curve;
mod keypair;

pub use curve::Curve;
pub use keypair::{Keypair, MAX_DRAWS};

/// Errors raised while producing a keypair.
#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),
    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(#[from] secp256k1::Error),
    #[error("Random source failure: {0}")]
    Entropy(#[from] rand::Error),
    #[error("Random source produced no valid scalar in {0} draws")]
    ExhaustedEntropy(usize),
}
