//! Text rendering of a generated keypair.

use crate::crypto::Keypair;

/// Renders the keypair in the fixed two-line layout.
///
/// The private key and the x and y coordinates are uppercase hex. The
/// coordinates are joined with no separator and no point-format tag:
///
/// ```text
/// private key:[<HEX>]
///
/// public key:[<HEX_X><HEX_Y>]
/// ```
pub fn format_keypair(keypair: &Keypair) -> String {
    format!(
        "private key:[{}]\n\npublic key:[{}]\n",
        private_key_hex(keypair),
        public_key_hex(keypair)
    )
}

/// Returns the private key as uppercase hex.
pub fn private_key_hex(keypair: &Keypair) -> String {
    hex::encode_upper(keypair.private_key_bytes())
}

/// Returns `x || y` as uppercase hex.
pub fn public_key_hex(keypair: &Keypair) -> String {
    let mut out = hex::encode_upper(keypair.public_x());
    out.push_str(&hex::encode_upper(keypair.public_y()));
    out
}
