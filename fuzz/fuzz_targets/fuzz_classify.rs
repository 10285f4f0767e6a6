#![no_main]

use libfuzzer_sys::fuzz_target;
use zhengjian::core::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let detected = classify(s);
        // A successful validation implies a detected type that accepts the input.
        if validate(s) {
            assert_ne!(detected, DocumentType::Unknown);
            assert!(detected.matches(s));
        }
        for t in DocumentType::ALL {
            let _ = t.matches(s);
        }
        let _ = is_other_document(s);
    }
});
