//! Named curve selection.

use std::fmt;
use std::str::FromStr;

use super::GenerationFailure;

/// A standardized elliptic curve the generator can produce keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    #[default]
    Secp256k1,
}

impl Curve {
    /// Byte length of a private scalar and of each public coordinate.
    #[inline]
    pub const fn field_size(self) -> usize {
        match self {
            Curve::Secp256k1 => 32,
        }
    }

    /// The canonical curve name.
    pub const fn name(self) -> &'static str {
        match self {
            Curve::Secp256k1 => "secp256k1",
        }
    }
}

impl FromStr for Curve {
    type Err = GenerationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "secp256k1" => Ok(Curve::Secp256k1),
            _ => Err(GenerationFailure::UnsupportedCurve(s.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_secp256k1() {
        assert_eq!("secp256k1".parse::<Curve>().unwrap(), Curve::Secp256k1);
        assert_eq!("SECP256K1".parse::<Curve>().unwrap(), Curve::Secp256k1);
    }

    #[test]
    fn test_unsupported_curve() {
        let err = "prime256v1".parse::<Curve>().unwrap_err();
        assert!(matches!(err, GenerationFailure::UnsupportedCurve(ref name) if name == "prime256v1"));
    }

    #[test]
    fn test_display_round_trips_name() {
        assert_eq!(Curve::default().to_string(), "secp256k1");
        assert_eq!(Curve::Secp256k1.field_size(), 32);
    }
}
