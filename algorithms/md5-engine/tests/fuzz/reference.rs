use bolero::check;
use md5::{Digest as _, Md5};
use md5_engine::transform;

#[test]
fn fuzz_reference_equivalence() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // ENGINE
        // =============================================================================

        let ours = transform(data);

        // =============================================================================
        // REFERENCE (RustCrypto)
        // =============================================================================

        let theirs = Md5::digest(data);

        assert_eq!(
            ours.as_slice(),
            theirs.as_slice(),
            "Digest differs from reference for {} byte input",
            data.len()
        );
    });
}
