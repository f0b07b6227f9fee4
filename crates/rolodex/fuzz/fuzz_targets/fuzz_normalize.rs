//! Fuzz target for lenient normalization.
//!
//! This fuzzer tests that normalization:
//! 1. Never panics on any UTF-8 input
//! 2. Never panics on arbitrary parsed JSON shapes
//! 3. Always produces output that re-normalizes to itself

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex::Schema;

fuzz_target!(|data: &[u8]| {
    let verbose = Schema::new();
    let concise = match Schema::builder().concise(true).build() {
        Ok(schema) => schema,
        Err(_) => return,
    };

    if let Ok(input) = std::str::from_utf8(data) {
        // Raw text path - should never panic
        let first = verbose.normalize_json(input);
        let _ = concise.normalize_json(input);

        // Canonical output must be a fixed point
        assert_eq!(verbose.renormalize(&first), first);

        // Structured path, when the bytes happen to be JSON
        if let Ok(value) = serde_json::from_str(input) {
            let _ = verbose.normalize(Some(&value));
            let _ = concise.normalize(Some(&value));
        }
    }

    // Invalid UTF-8 handled through lossy conversion
    let lossy = String::from_utf8_lossy(data);
    let _ = verbose.normalize_json(&lossy);
});
