#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and catalog construction should never panic
        if let Ok(config) = toml::from_str::<geostage::Config>(content) {
            let _ = config.catalog();
            let _ = config.engine_options();
        }
    }
});
