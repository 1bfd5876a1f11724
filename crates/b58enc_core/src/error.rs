#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// An input element does not fit in a byte.
    InvalidByteValue { index: usize, value: i128 },
    /// The caller's output buffer cannot hold the encoding.
    BufferTooSmall { needed: usize, capacity: usize },
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            EncodeError::InvalidByteValue { index, value } => ::core::write!(
                formatter,
                "Byte value {} at index {} is outside 0..=255",
                value,
                index
            ),
            EncodeError::BufferTooSmall { needed, capacity } => ::core::write!(
                formatter,
                "Base58 output buffer too small: need {} bytes, have {}",
                needed,
                capacity
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            EncodeError::InvalidByteValue {
                index: 3,
                value: 256
            }
            .to_string(),
            "Byte value 256 at index 3 is outside 0..=255"
        );
        assert_eq!(
            EncodeError::BufferTooSmall {
                needed: 44,
                capacity: 10
            }
            .to_string(),
            "Base58 output buffer too small: need 44 bytes, have 10"
        );
    }
}
