#![no_main]

use libfuzzer_sys::fuzz_target;
use zhengjian::core::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = parse(s);
        assert_eq!(parsed.valid, parsed.error.is_none());
        assert_eq!(parsed.valid, validate(s));
        let _ = sex_of(s);
        let _ = birth_date_of(s);
    }
});
