#![no_main]

use libfuzzer_sys::fuzz_target;
use melt_core::container::parse;

fuzz_target!(|data: &[u8]| {
    // No passphrase: the bcrypt round count comes from the input and would
    // let the fuzzer pick arbitrarily slow cases.
    let _ = parse(data, None);
});
