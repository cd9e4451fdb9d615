#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Split size from first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;
    let inputs: Vec<&[u8]> = data[1..].chunks(chunk_size).collect();

    let batch = md5_engine::transform_batch(&inputs).unwrap();

    // Each batch entry must equal its own one-shot digest
    for (input, digest) in inputs.iter().zip(&batch) {
        assert_eq!(
            *digest,
            md5_engine::transform(input),
            "Batch and One-Shot approaches differ!"
        );
    }
});
