#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let correct = bs58::encode(data).into_string();
    let encoded = b58enc::encode(data);
    if correct != encoded {
        panic!("encode fuzz encoding failed: {:?}, {:?}", correct, encoded);
    }

    let mut buf = vec![0u8; b58enc::max_encoded_len(data.len())];
    let len = b58enc::encode_into(data, &mut buf).unwrap();
    assert_eq!(&buf[..len], encoded.as_bytes());

    let decoded = bs58::decode(&encoded).into_vec().unwrap();
    if decoded != data {
        panic!("encode round trip failed: {:?}, {:?}", data, decoded);
    }
});
