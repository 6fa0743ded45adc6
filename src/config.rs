//! Command-line configuration for the key generator.

use clap::Parser;

use crate::crypto::{Curve, GenerationFailure};

/// Generate an elliptic-curve key pair and print it as uppercase hex
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Curve to generate the key pair on
    #[arg(short, long, default_value = "secp256k1")]
    pub curve: String,

    /// Derive the public key from this 32-byte hex secret instead of generating one
    #[arg(short = 'k', long)]
    pub secret_key: Option<String>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.curve()?;
        self.secret_key_bytes()?;
        Ok(())
    }

    /// Returns the selected curve
    pub fn curve(&self) -> Result<Curve, ConfigError> {
        Ok(self.curve.parse()?)
    }

    /// Returns the decoded secret key, if one was supplied
    pub fn secret_key_bytes(&self) -> Result<Option<[u8; 32]>, ConfigError> {
        let Some(ref secret_key) = self.secret_key else {
            return Ok(None);
        };

        let hex_str = secret_key
            .strip_prefix("0x")
            .unwrap_or(secret_key.as_str());

        if hex_str.len() != 64 {
            return Err(ConfigError::InvalidSecretKey(
                "Secret key must be exactly 64 hex characters".into(),
            ));
        }

        let bytes = hex::decode(hex_str)
            .map_err(|e| ConfigError::InvalidSecretKey(e.to_string()))?;

        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Some(out))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid curve: {0}")]
    InvalidCurve(#[from] GenerationFailure),
    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config(curve: &str, secret_key: Option<&str>) -> Config {
        Config {
            curve: curve.into(),
            secret_key: secret_key.map(Into::into),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::parse_from(["ecc-keygen"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.curve().unwrap(), Curve::Secp256k1);
        assert!(config.secret_key_bytes().unwrap().is_none());
    }

    #[test]
    fn test_invalid_curve() {
        let config = make_test_config("ed25519", None);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCurve(GenerationFailure::UnsupportedCurve(_)))
        ));
    }

    #[test]
    fn test_secret_key_decoding() {
        let hex_key = format!("0x{:064x}", 1);
        let config = make_test_config("secp256k1", Some(&hex_key));
        let bytes = config.secret_key_bytes().unwrap().unwrap();
        assert_eq!(bytes[31], 1);
        assert!(bytes[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_malformed_secret_key() {
        let short = make_test_config("secp256k1", Some("abcd"));
        assert!(matches!(short.validate(), Err(ConfigError::InvalidSecretKey(_))));

        let not_hex = make_test_config("secp256k1", Some(&"zz".repeat(32)));
        assert!(matches!(not_hex.validate(), Err(ConfigError::InvalidSecretKey(_))));
    }
}
