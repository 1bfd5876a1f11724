#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod bytes;
mod encode;
pub use b58enc_core::{
    max_encoded_len, EncodeError, BASE58_ALPHABET, BASE58_ENCODED_32_MAX_LEN,
    BASE58_ENCODED_64_MAX_LEN,
};
pub use bytes::{bytes_from_values, encode_values};
pub use encode::{encode, encode_32, encode_64, encode_into};
