use alloc::{string::String, vec, vec::Vec};
use core::iter;

use b58enc_core::{
    limb_count, EncodeError, BASE58_ALPHABET, BASE58_ENCODED_32_MAX_LEN,
    BASE58_ENCODED_64_MAX_LEN, BASE58_ZERO, DIGITS_PER_LIMB, LIMB_DIVISORS, N_32, N_64, R1DIV,
};

/* The input in intermediate form:
  X = sum_i limbs[i] * 58^(5*(limbs.len()-1-i))
with every limb < 58^5, plus the number of leading zero bytes, which the
numeric value alone cannot carry. */
struct Intermediate {
    in_leading_0s: usize,
    limbs: Vec<u64>,
}

#[inline(always)]
fn in_leading_0s(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| **b == 0).count()
}

#[inline(always)]
fn be_word(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, b| (acc << 8) | *b as u32)
}

/// `limbs = limbs * 2^32 + word`, keeping every limb below 58^5.
#[inline(always)]
fn add_word(limbs: &mut [u64], word: u32) {
    /* Every limb is < 58^5 < 2^30, so limb << 32 stays below 2^62 and the
    carry out of each step stays below 2^33. Neither can overflow a u64. */
    let mut carry = word as u64;
    for limb in limbs.iter_mut().rev() {
        let v = (*limb << 32) + carry;
        *limb = v % R1DIV;
        carry = v / R1DIV;
    }
    debug_assert_eq!(carry, 0, "limb array too short for input");
}

/// Split a limb into its five base58 digits, most significant first.
#[inline(always)]
fn limb_to_raw(limb: u64) -> [u8; DIGITS_PER_LIMB] {
    LIMB_DIVISORS.map(|divisor| ((limb / divisor) % 58) as u8)
}

impl Intermediate {
    fn from_bytes(bytes: &[u8]) -> Self {
        let in_leading_0s = in_leading_0s(bytes);
        let significant = &bytes[in_leading_0s..];
        let mut limbs = vec![0u64; limb_count(significant.len())];
        // a short head word first, so the rest splits into whole u32s
        let (head, body) = significant.split_at(significant.len() % 4);
        if !head.is_empty() {
            add_word(&mut limbs, be_word(head));
        }
        for word in body.chunks_exact(4) {
            add_word(&mut limbs, be_word(word));
        }
        Self {
            in_leading_0s,
            limbs,
        }
    }

    /// Base58 digits of the numeric value with its leading zero digits removed.
    fn significant_digits(&self) -> impl Iterator<Item = u8> + Clone + '_ {
        self.limbs
            .iter()
            .flat_map(|&limb| limb_to_raw(limb))
            .skip_while(|&digit| digit == 0)
    }

    fn len(&self) -> usize {
        self.in_leading_0s + self.significant_digits().count()
    }

    /* The raw digits carry no information about leading zero bytes, so
    emit exactly one '1' per leading zero byte and then the digits. */
    fn chars(&self) -> impl Iterator<Item = u8> + '_ {
        iter::repeat(BASE58_ZERO).take(self.in_leading_0s).chain(
            self.significant_digits()
                .map(|digit| BASE58_ALPHABET[digit as usize]),
        )
    }

    /// Write as many characters as fit and return how many were written.
    fn write_to(&self, out: &mut [u8]) -> usize {
        let mut written = 0;
        for (slot, c) in out.iter_mut().zip(self.chars()) {
            *slot = c;
            written += 1;
        }
        written
    }
}

/// Encode a byte sequence of any length.
///
/// Every leading zero byte becomes a leading `'1'`, and the empty input
/// encodes to the empty string.
///
/// # Examples
/// ```
/// assert_eq!(b58enc::encode(&[0, 0, 1]), "112");
/// assert_eq!(b58enc::encode(&[0, 0, 0]), "111");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    Intermediate::from_bytes(bytes)
        .chars()
        .map(char::from)
        .collect()
}

/// Encode into a caller-provided buffer.
///
/// Returns the number of bytes of `out` that hold the encoding. A buffer of
/// [`max_encoded_len`](crate::max_encoded_len)`(bytes.len())` bytes is always
/// enough; a shorter one works if the actual encoding fits. Otherwise
/// [`EncodeError::BufferTooSmall`] is returned and the contents of `out` are
/// unspecified.
///
/// # Examples
/// ```
/// let mut buf = [0u8; 8];
/// let len = b58enc::encode_into(b"\x00\x00\x01", &mut buf).unwrap();
/// assert_eq!(&buf[..len], b"112");
///
/// let mut tiny = [0u8; 2];
/// assert!(b58enc::encode_into(b"\x00\x00\x01", &mut tiny).is_err());
/// ```
pub fn encode_into(bytes: &[u8], out: &mut [u8]) -> Result<usize, EncodeError> {
    let intermediate = Intermediate::from_bytes(bytes);
    let needed = intermediate.len();
    if needed > out.len() {
        return Err(EncodeError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }
    Ok(intermediate.write_to(out))
}

/// Encode a 32-byte array.
///
/// Mutates the provided `out` array and returns a u8 `len`
/// which indicates how many bytes of the `out` array were actually written to.
/// The result we care about is `out[..len as usize]`.
///
/// # Examples
/// ```
/// let mut buf = [0u8; 44];
/// let bytes = &[
///     3, 96, 248, 147, 13, 172, 255, 232, 65, 40, 130, 50, 0, 237, 178, 231, 149, 163, 132,
///     76, 245, 80, 54, 234, 213, 92, 192, 177, 76, 239, 246, 83,
/// ];
/// let len = b58enc::encode_32(bytes, &mut buf);
/// assert_eq!(&buf[..len as usize], b"EBz7dzrn7hFigdbgYWmZBWsbsVYp8Sa1dQrssExKeQA");
/// assert_eq!(len, 43);
/// ```
#[inline]
pub fn encode_32(bytes: &[u8; N_32], out: &mut [u8; BASE58_ENCODED_32_MAX_LEN]) -> u8 {
    Intermediate::from_bytes(bytes).write_to(out) as u8
}

/// Encode a 64-byte array.
///
/// Same contract as [`encode_32`], with an 88-byte output buffer.
#[inline]
pub fn encode_64(bytes: &[u8; N_64], out: &mut [u8; BASE58_ENCODED_64_MAX_LEN]) -> u8 {
    Intermediate::from_bytes(bytes).write_to(out) as u8
}
