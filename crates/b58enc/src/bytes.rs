use alloc::{string::String, vec::Vec};

use b58enc_core::EncodeError;

use crate::encode::encode;

/// Build a byte buffer from a sequence of integers.
///
/// Fails on the first element outside `0..=255`, reporting its position and
/// value. Nothing is returned for the elements before it.
///
/// # Examples
/// ```
/// use b58enc::{bytes_from_values, EncodeError};
///
/// assert_eq!(bytes_from_values([0u16, 7, 255]), Ok(vec![0, 7, 255]));
/// assert_eq!(
///     bytes_from_values([3i32, -1]),
///     Err(EncodeError::InvalidByteValue { index: 1, value: -1 })
/// );
/// ```
pub fn bytes_from_values<I, T>(values: I) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = T>,
    T: Copy + Into<i128> + TryInto<u8>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            value.try_into().map_err(|_| EncodeError::InvalidByteValue {
                index,
                value: value.into(),
            })
        })
        .collect()
}

/// [`bytes_from_values`] followed by [`encode`](crate::encode).
pub fn encode_values<I, T>(values: I) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = T>,
    T: Copy + Into<i128> + TryInto<u8>,
{
    bytes_from_values(values).map(|bytes| encode(&bytes))
}
