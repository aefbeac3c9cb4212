//! Stable string hash.
//!
//! The map needs a pseudo-random but repeatable choice per entity (which
//! texture a planet wears) and a short id for freshly authored records. Both
//! come from the same 31-multiplier rolling hash over UTF-16 code units with
//! 32-bit signed wraparound, so the result is identical on every platform and
//! matches what the fixture authors see in the browser.

#[cfg(test)]
#[path = "hash_test.rs"]
mod hash_test;

use crate::consts::TEXTURE_COUNT;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hash `s` into a non-negative integer.
///
/// `abs(i32::MIN)` does not fit in an `i32`, hence the `u32` result.
#[must_use]
pub fn string_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// One-based texture index for the entity with the given id, in `1..=TEXTURE_COUNT`.
#[must_use]
pub fn texture_index(id: &str) -> u32 {
    string_hash(id) % TEXTURE_COUNT + 1
}

/// Render `n` in lowercase base-36.
#[must_use]
pub fn to_base36(mut n: u32) -> String {
    if n == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}
