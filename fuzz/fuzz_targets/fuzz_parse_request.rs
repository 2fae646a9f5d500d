#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → generate must not panic at any step.
        if let Ok(request) = facturen::delivery::parse_request(s) {
            let _ = facturen::delivery::generate(&request.building);
        }
    }
});
