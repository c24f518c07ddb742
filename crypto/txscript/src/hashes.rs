//! Hash functions used by the standard templates.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub const HASH160_SIZE: usize = 20;
pub const SHA256_SIZE: usize = 32;

pub fn sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(data).into()
}

/// Double SHA256, as used for transaction and block ids.
pub fn sha256d(data: &[u8]) -> [u8; SHA256_SIZE] {
    sha256(&sha256(data))
}

/// RIPEMD160(SHA256(data)), the hash committed to by P2PKH, P2SH and P2WPKH outputs.
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(sha256(data)).into()
}
