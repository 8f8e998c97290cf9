#![no_main]

use libfuzzer_sys::fuzz_target;
use melt_core::mnemonic::decode;
use melt_core::wordlist::supported;

fuzz_target!(|data: &[u8]| {
    // First byte picks the wordlist, the rest is the phrase.
    let Some((&pick, rest)) = data.split_first() else {
        return;
    };
    let lists = supported();
    let wordlist = lists[pick as usize % lists.len()];
    if let Ok(phrase) = std::str::from_utf8(rest) {
        if let Ok(entropy) = decode(phrase, wordlist) {
            assert!(matches!(entropy.len(), 16 | 20 | 24 | 28 | 32));
        }
    }
});
