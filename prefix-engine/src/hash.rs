//! Content hashing for style cache keys
//!
//! 32-bit MurmurHash2 over the low byte of each UTF-16 code unit, rendered
//! in base 36. Class names produced with it match those of JavaScript
//! CSS-in-JS engines for the same source.

use alloc::string::String;
use alloc::vec::Vec;

const M: u32 = 0x5bd1_e995;

/// Hash `input` with the CSS-in-JS MurmurHash2 variant.
pub fn murmur2(input: &str) -> u32 {
    let bytes: Vec<u8> = input.encode_utf16().map(|unit| (unit & 0xff) as u8).collect();
    let mut h: u32 = 0;

    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> 24;
        h = k.wrapping_mul(M) ^ h.wrapping_mul(M);
    }

    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= u32::from(tail[1]) << 8;
    }
    if !tail.is_empty() {
        h ^= u32::from(tail[0]);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^ (h >> 15)
}

/// Hash `input` and render it in base 36.
pub fn hash_string(input: &str) -> String {
    to_base36(murmur2(input))
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return String::from("0");
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}
