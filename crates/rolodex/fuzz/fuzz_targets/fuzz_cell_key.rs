//! Fuzz target for flat cell name parsing.
//!
//! This fuzzer tests that cell name parsing:
//! 1. Never panics on any UTF-8 input
//! 2. Only accepts names that reproduce themselves exactly

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex::CellKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some(key) = CellKey::parse(input) {
            // Anything that parses must round-trip byte for byte
            assert_eq!(key.name(), input);
        }
    }
});
