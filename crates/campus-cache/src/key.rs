// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cache key derivation.

use campus_router::ChatDomain;

/// Only this many UTF-16 code units of the normalized message are hashed.
const HASHED_PREFIX_UNITS: usize = 50;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 32-bit rolling hash (`h = h * 31 + unit`, wrapping) over the UTF-16 code
/// units of `text`, rendered as the base-36 absolute value.
///
/// Keys produced by other deployments of the assistant use the same scheme,
/// so the output must stay bit-for-bit stable.
pub fn hash_message(text: &str) -> String {
    rolling_hash(text.encode_utf16())
}

/// Build the cache key for a message asked in `domain` under `context`
/// (a course code, or `university` for general questions).
///
/// The message is lowercased and trimmed and only its first 50 code units
/// contribute to the key. A cut inside a surrogate pair hashes the lone unit.
pub fn cache_key(domain: ChatDomain, context: &str, message: &str) -> String {
    let normalized = message.to_lowercase();
    let units = normalized.trim().encode_utf16().take(HASHED_PREFIX_UNITS);
    format!("ai_cache:{domain}:{context}:{}", rolling_hash(units))
}

fn rolling_hash(units: impl Iterator<Item = u16>) -> String {
    let hash = units.fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
