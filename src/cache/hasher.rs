//! Shard Routing Hash
//!
//! 64-bit FNV-1a over the key bytes. Only used to pick a shard, never persisted.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

// == FNV-1a ==
/// Hashes `key` with 64-bit FNV-1a.
#[inline]
pub fn fnv1a_64(key: &str) -> u64 {
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_offset_basis() {
        assert_eq!(fnv1a_64(""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_known_vectors() {
        // Reference values for FNV-1a 64
        assert_eq!(fnv1a_64("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a_64("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(fnv1a_64("user:42"), fnv1a_64("user:42"));
        assert_ne!(fnv1a_64("user:42"), fnv1a_64("user:43"));
    }
}
