//! Const hashing of type paths.
//!
//! Identities are computed from path strings during const evaluation, so
//! `concat!(module_path!(), ..)` works at any derive site.

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Extract nibble N (0-15) from 64-bit FNV-1a hash
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    let hash = fnv1a_64_str(s);
    ((hash >> (n * 4)) & 0xF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_reference_values() {
        assert_eq!(fnv1a_64_str(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64_str("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_hash_nibble_reassembles_hash() {
        let s = "core::primitive::i32";
        let mut rebuilt: u64 = 0;
        let mut n = 0;
        while n < 16 {
            rebuilt |= (hash_nibble(s, n) as u64) << (n * 4);
            n += 1;
        }
        assert_eq!(rebuilt, fnv1a_64_str(s));
    }
}
