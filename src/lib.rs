//! # ecc_keygen
//!
//! One-shot elliptic-curve key pair generator.
//!
//! ## Architecture
//!
//! - `crypto`: Curve selection and keypair generation
//! - `output`: Uppercase hex rendering of a keypair
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod output;

pub use config::{Config, ConfigError};
pub use crypto::{Curve, GenerationFailure, Keypair};
pub use output::format_keypair;
