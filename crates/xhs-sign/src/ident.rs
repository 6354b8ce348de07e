//! Opaque client identifier utilities.
//!
//! Independent of the signing pipeline. The web client derives its
//! visitor identifiers by base-36 encoding `(epoch_ms << 32) + random`,
//! joins two of them with `@` for its paired form, and builds 16-char
//! lowercase-hex trace ids for its `x-b3-traceid` header. The base-36
//! arithmetic is exact over the full `u128` range.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Digits of the base-36 alphabet.
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Alphabet for trace identifiers.
const TRACE_ALPHABET: &[u8; 16] = b"abcdef0123456789";

/// Largest random component the visitor recipe draws (2^31 - 2).
pub const VISITOR_RANDOM_MAX: u32 = 2_147_483_646;

/// Lowercase base-36 rendering of `n`, `"0"` for zero.
pub fn base36_encode(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut out = String::new();
    while n > 0 {
        out.push(BASE36_ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }
    out.chars().rev().collect()
}

/// Visitor identifier from an explicit timestamp and random component.
///
/// Encodes `(timestamp_ms << 32) + random` in base-36. Negative
/// timestamps clamp to the epoch.
pub fn visitor_id(timestamp_ms: i64, random: u32) -> String {
    let value = ((timestamp_ms.max(0) as u128) << 32) + random as u128;
    base36_encode(value)
}

/// Visitor identifier at the wall clock with a fresh random component.
pub fn fresh_visitor_id() -> String {
    let random = rand::thread_rng().gen_range(0..=VISITOR_RANDOM_MAX);
    visitor_id(now_ms(), random)
}

/// Two fresh visitor identifiers joined by `@`.
pub fn visitor_pair() -> String {
    format!("{}@{}", fresh_visitor_id(), fresh_visitor_id())
}

/// 16 random characters over `abcdef0123456789`.
pub fn trace_id() -> String {
    let mut rng = rand::thread_rng();
    (0..16)
        .map(|_| TRACE_ALPHABET[rng.gen_range(0..TRACE_ALPHABET.len())] as char)
        .collect()
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
