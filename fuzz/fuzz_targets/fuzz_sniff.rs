#![no_main]

use libfuzzer_sys::fuzz_target;
use zenheif::Filetype;

// Sniffing must never panic, and truncating the input may only weaken the
// verdict to Maybe, never flip it to a different definite answer.
fuzz_target!(|data: &[u8]| {
    let full = zenheif::sniff(data);
    for cut in [4usize, 8, 12, 16, 24, 32] {
        if cut >= data.len() {
            break;
        }
        let partial = zenheif::sniff(&data[..cut]);
        assert!(partial == full || partial == Filetype::Maybe);
    }
});
