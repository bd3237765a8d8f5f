use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub artifacts_transformed: IntCounter,
    pub words_mapped: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Self {
        let artifacts_transformed =
            IntCounter::new("artifacts_transformed", "Build artifacts rewritten").unwrap();
        let words_mapped = IntCounter::new(
            "words_mapped",
            "Eligible words assigned a replacement token",
        )
        .unwrap();
        registry
            .register(Box::new(artifacts_transformed.clone()))
            .unwrap();
        registry.register(Box::new(words_mapped.clone())).unwrap();
        Self {
            artifacts_transformed,
            words_mapped,
        }
    }
}
