use bolero::check;
use md5_engine::{transform, verify};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let d = transform(data);
        assert!(verify(data, &d), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify(&corrupted_data, &d),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Corruption in the final byte (lands past the first block once len > 55)
        if data.len() > 1 {
            let mut corrupted_tail = data.clone();
            let last = corrupted_tail.len() - 1;
            corrupted_tail[last] ^= 0x80;
            assert!(
                !verify(&corrupted_tail, &d),
                "verify() succeeded with a corrupted trailing byte ({} byte input)",
                data.len()
            );
        }

        // 3. Digest Corruption
        let mut bad_d = d;
        bad_d[0] ^= 0xFF;

        assert!(
            !verify(data, &bad_d),
            "verify() succeeded on corrupted digest"
        );
    });
}
