// Shared proptest configuration for domain property tests.
//
// - PROPTEST_CASES: number of cases per property (default 32).
// - Run with a high case count: PROPTEST_CASES=2000 cargo test

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
