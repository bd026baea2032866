#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — any shape of expiry text is accepted.
        let _ = notafiscal::nfe::normalize_expiry(s);
    }
});
