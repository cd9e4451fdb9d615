use bolero::check;
use md5_engine::{transform, transform_batch};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<Vec<u8>>>().for_each(|inputs| {
        // =============================================================================
        // BATCH EXECUTION (RAYON)
        // =============================================================================

        let slices: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();
        let Ok(batch) = transform_batch(&slices) else {
            panic!("In-memory inputs can never exceed the length limit");
        };

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================

        assert_eq!(batch.len(), inputs.len());
        for (input, digest) in inputs.iter().zip(&batch) {
            assert_eq!(*digest, transform(input), "Batch digest mismatch");
        }
    });
}
