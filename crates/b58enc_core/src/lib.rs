#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]
#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
pub use error::EncodeError;

/// The Bitcoin base58 alphabet. Index 0 stands for a zero byte.
pub const BASE58_ALPHABET: [u8; 58] = *b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const BASE58_ZERO: u8 = BASE58_ALPHABET[0];

pub const N_32: usize = 32;
pub const N_64: usize = 64;
pub const BASE58_ENCODED_32_MAX_LEN: usize = max_encoded_len(N_32); /* 44 */
pub const BASE58_ENCODED_64_MAX_LEN: usize = max_encoded_len(N_64); /* 88 */

/// Each limb of the intermediate form holds five base58 digits.
pub const DIGITS_PER_LIMB: usize = 5;
/// 58^5. Every limb is kept strictly below this.
pub const R1DIV: u64 = 656356768u64;
/// Divisors that peel the five digits out of a limb, most significant first.
pub const LIMB_DIVISORS: [u64; DIGITS_PER_LIMB] = [11316496, 195112, 3364, 58, 1];

/// Upper bound on the base58 length of any `n`-byte input.
///
/// An `n`-byte value needs at most ceil(n * log_58(256)) digits and
/// log_58(256) = 1.36565..., so rounding the factor up to 1.366 never
/// undercounts. An all-zero input needs exactly `n` characters, which is
/// also covered. The product is taken in u128 so it cannot overflow on
/// 32-bit targets; the result saturates at `usize::MAX`.
pub const fn max_encoded_len(n: usize) -> usize {
    // n + ceil(0.366 n) == ceil(1.366 n)
    let extra = (n as u128 * 366).div_ceil(1000);
    if extra > usize::MAX as u128 {
        usize::MAX
    } else {
        n.saturating_add(extra as usize)
    }
}

/// Number of base-58^5 limbs needed to hold any `n`-byte value.
pub const fn limb_count(n: usize) -> usize {
    max_encoded_len(n).div_ceil(DIGITS_PER_LIMB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_encoded_len() {
        assert_eq!(max_encoded_len(0), 0);
        assert_eq!(max_encoded_len(1), 2);
        assert_eq!(BASE58_ENCODED_32_MAX_LEN, 44);
        assert_eq!(BASE58_ENCODED_64_MAX_LEN, 88);
    }

    #[test]
    fn test_max_encoded_len_large_inputs() {
        // 4 MB: the plain `n * 1366` product would not fit a 32-bit usize
        assert_eq!(max_encoded_len(4_000_000), 5_464_000);
        assert_eq!(max_encoded_len(3_200_001), 4_371_202);
        assert_eq!(max_encoded_len(usize::MAX), usize::MAX);
        assert_eq!(limb_count(usize::MAX), usize::MAX.div_ceil(DIGITS_PER_LIMB));
    }

    #[test]
    fn test_limb_divisors_are_powers_of_58() {
        let mut power = 1u64;
        for divisor in LIMB_DIVISORS.iter().rev() {
            assert_eq!(*divisor, power);
            power *= 58;
        }
        assert_eq!(power, R1DIV);
    }

    #[test]
    fn test_limb_count() {
        assert_eq!(limb_count(0), 0);
        assert_eq!(limb_count(32), 9);
        assert_eq!(limb_count(64), 18);
    }

    #[test]
    fn test_alphabet_skips_confusable_chars() {
        for c in [b'0', b'O', b'I', b'l'] {
            assert!(!BASE58_ALPHABET.contains(&c));
        }
        assert_eq!(BASE58_ZERO, b'1');
    }
}
