#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<i16>| {
    match b58enc::encode_values(values.iter().copied()) {
        Ok(encoded) => {
            let bytes: Vec<u8> = values.iter().map(|v| *v as u8).collect();
            assert_eq!(encoded, bs58::encode(bytes).into_string());
        }
        Err(b58enc::EncodeError::InvalidByteValue { index, value }) => {
            assert!(values[..index].iter().all(|v| (0..=255).contains(v)));
            assert_eq!(values[index] as i128, value);
            assert!(!(0..=255).contains(&value));
        }
        Err(err) => panic!("unexpected error: {err:?}"),
    }
});
