//! Deterministic short identifiers for rendered map artifacts.
//!
//! A key is the SHA-1 digest of the UTF-8 input, read as a big-endian unsigned
//! integer and written in base 36 (`0-9` then `a-z`). Map identifiers keep the
//! first [`MAP_ID_LENGTH`] characters.
//!
//! Recorded identifiers in catalogs are checked against this function, so the
//! output must never change for a given input.

use num::BigUint;
use sha1::{Digest, Sha1};

/// Number of base-36 characters kept for a map identifier.
pub const MAP_ID_LENGTH: usize = 6;

/// Full base-36 rendering of the SHA-1 digest of `text`.
pub fn alphanumeric(text: &str) -> String {
    let digest = Sha1::digest(text.as_bytes());
    BigUint::from_bytes_be(digest.as_slice()).to_str_radix(36)
}

/// Short map identifier for `text`.
///
/// ```
/// use hazard_inventory_core::key::derive_key;
///
/// assert_eq!(
///     derive_key("inunriver_historical_000000000WATCH_1980_rp01000"),
///     "gw4vgq"
/// );
/// ```
pub fn derive_key(text: &str) -> String {
    let mut key = alphanumeric(text);
    // base 36 output is ASCII so truncating on a byte index is safe
    key.truncate(MAP_ID_LENGTH);
    key
}
