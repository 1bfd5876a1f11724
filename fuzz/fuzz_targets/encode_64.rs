#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 64]| {
    let correct = bs58::encode(data).into_string();
    let mut buf = [0u8; b58enc::BASE58_ENCODED_64_MAX_LEN];
    let len = b58enc::encode_64(&data, &mut buf);
    let encoded: String = buf[..len as usize].iter().map(|c| *c as char).collect();

    if correct != encoded {
        panic!("encode_64 fuzz encoding failed: {:?}, {:?}", correct, encoded);
    }
});
