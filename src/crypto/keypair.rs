//! secp256k1 keypair generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use super::{Curve, GenerationFailure};

/// Upper bound on candidate scalars drawn before giving up on the random source.
///
/// An honest RNG lands outside `[1, n-1]` with probability below 2^-127 per draw.
pub const MAX_DRAWS: usize = 64;

/// A private scalar together with the affine coordinates of its public point.
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    /// The private key bytes (32 bytes, big-endian)
    secret_key: [u8; 32],
    /// Public point x coordinate
    public_x: [u8; 32],
    /// Public point y coordinate
    public_y: [u8; 32],
}

impl Keypair {
    /// Generates a new random keypair on `curve`.
    ///
    /// Randomness is drawn from the operating system.
    pub fn generate(curve: Curve) -> Result<Self, GenerationFailure> {
        Self::generate_with(curve, &mut OsRng)
    }

    /// Generates a keypair on `curve` from the given random source.
    ///
    /// Candidate scalars outside `[1, n-1]` are discarded and redrawn, at
    /// most [`MAX_DRAWS`] times.
    pub fn generate_with<R>(curve: Curve, rng: &mut R) -> Result<Self, GenerationFailure>
    where
        R: RngCore + CryptoRng,
    {
        let mut candidate = [0u8; 32];
        for _ in 0..MAX_DRAWS {
            rng.try_fill_bytes(&mut candidate)?;
            match SecretKey::from_slice(&candidate) {
                Ok(secret_key) => {
                    log::debug!("generated {} keypair", curve);
                    return Ok(Self::from_parts(curve, &secret_key));
                }
                Err(_) => log::debug!("discarding out-of-range {} scalar", curve),
            }
        }

        Err(GenerationFailure::ExhaustedEntropy(MAX_DRAWS))
    }

    /// Derives the keypair for a fixed secret scalar.
    ///
    /// Fails if the scalar is zero or not below the curve order.
    pub fn from_secret_key(curve: Curve, secret_bytes: [u8; 32]) -> Result<Self, GenerationFailure> {
        let secret_key = SecretKey::from_slice(&secret_bytes)?;
        Ok(Self::from_parts(curve, &secret_key))
    }

    fn from_parts(curve: Curve, secret_key: &SecretKey) -> Self {
        match curve {
            Curve::Secp256k1 => {
                let secp = Secp256k1::signing_only();
                let public_key = PublicKey::from_secret_key(&secp, secret_key);

                // Uncompressed SEC1: 0x04 || x || y
                let encoded = public_key.serialize_uncompressed();
                let mut public_x = [0u8; 32];
                let mut public_y = [0u8; 32];
                public_x.copy_from_slice(&encoded[1..33]);
                public_y.copy_from_slice(&encoded[33..65]);

                Self {
                    secret_key: secret_key.secret_bytes(),
                    public_x,
                    public_y,
                }
            }
        }
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.secret_key
    }

    /// Returns the public point x coordinate.
    pub fn public_x(&self) -> &[u8; 32] {
        &self.public_x
    }

    /// Returns the public point y coordinate.
    pub fn public_y(&self) -> &[u8; 32] {
        &self.public_y
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("secret_key", &"<redacted>")
            .field("public_x", &hex::encode(self.public_x))
            .field("public_y", &hex::encode(self.public_y))
            .finish()
    }
}
