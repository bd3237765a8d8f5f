#![no_main]

use libfuzzer_sys::fuzz_target;
use script_obfuscator::obfuscator::Obfuscator;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    // Skip empty or extremely long inputs to focus fuzzing efforts
    if input.is_empty() || input.len() > 100_000 {
        return;
    }

    let words = vec![
        "renderOverlay".to_string(),
        "notifyUser".to_string(),
        "fetchOrders".to_string(),
    ];
    let mut obfuscator = Obfuscator::new(words);

    // Run twice through one session: the second pass exercises the mapping
    // reuse path on arbitrary text.
    let _ = obfuscator.obfuscate_text(&input);
    let _ = obfuscator.obfuscate_text(&input);
});
