#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // NUL-separated tokens, like a raw argv - parsing should never panic
        let args: Vec<&str> = line.split('\0').collect();
        if let Ok(options) = relo::parse(args) {
            assert!(!options.watches().is_empty());
            assert!(!options.command().is_empty());
            assert_eq!(options.group(), options.g());
        }
    }
});
