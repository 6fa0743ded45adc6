//! Elliptic-curve key pair generator CLI
//!
//! Usage:
//!   ecc-keygen                  # Generate a fresh secp256k1 key pair
//!   ecc-keygen -k 00..01        # Print the key pair for a known secret

use std::process;

use clap::Parser;

use ecc_keygen::{format_keypair, Config, Keypair};

fn main() {
    let config = Config::parse();
    env_logger::init();

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    match run(&config) {
        Ok(keypair) => print!("{}", format_keypair(&keypair)),
        Err(e) => {
            eprintln!("Key generation failed: {}", e);
            process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<Keypair, Box<dyn std::error::Error>> {
    let curve = config.curve()?;
    log::info!("curve: {}", curve);

    let keypair = match config.secret_key_bytes()? {
        Some(secret) => {
            log::info!("deriving public key from supplied secret");
            Keypair::from_secret_key(curve, secret)?
        }
        None => Keypair::generate(curve)?,
    };

    Ok(keypair)
}
