//! Fuzz target for strict validation.
//!
//! This fuzzer tests that validation:
//! 1. Never panics on any UTF-8 input
//! 2. Returns at most one error per call
//! 3. Accepts everything the normalizer emits

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex::Schema;

fuzz_target!(|data: &[u8]| {
    let schema = Schema::new();

    if let Ok(input) = std::str::from_utf8(data) {
        // Either outcome is fine; panicking is not
        let _ = schema.validate_json(input);

        if let Ok(value) = serde_json::from_str(input) {
            let _ = schema.validate(&value);

            // The lenient path's output always passes the strict path
            let canonical = schema.normalize(Some(&value));
            assert!(schema.validate(&canonical.to_json()).is_ok());
        }
    }

    let lossy = String::from_utf8_lossy(data);
    let _ = schema.validate_json(&lossy);
});
