#![no_main]

use libfuzzer_sys::fuzz_target;
use md5::{Digest, Md5};

fuzz_target!(|data: &[u8]| {
    let ours = md5_engine::transform(data);
    let reference = Md5::digest(data);

    assert_eq!(
        ours.as_slice(),
        reference.as_slice(),
        "Engine and reference MD5 differ!"
    );
    assert!(md5_engine::verify(data, &ours));
});
