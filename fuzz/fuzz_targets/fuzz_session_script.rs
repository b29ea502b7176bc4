#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(script) = std::str::from_utf8(data) {
        // Every parsed command must print back to something that parses the same
        if let Ok(commands) = geostage::parse_script(script) {
            for command in commands {
                let reparsed = geostage::Command::parse(&command.to_string(), 1);
                assert_eq!(reparsed.as_ref(), Ok(&command));
            }
        }
    }
});
