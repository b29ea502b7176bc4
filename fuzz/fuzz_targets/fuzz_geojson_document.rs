#![no_main]

use geostage::domain::services::render_overlay;
use geostage::infrastructure::RetroStyler;
use geostage::GeoDocument;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and rendering arbitrary documents must never panic
    if let Ok(document) = GeoDocument::from_slice(data) {
        let overlay = render_overlay("fuzz", &document, &RetroStyler::new());
        assert_eq!(overlay.bounds(), document.bounds());
    }
});
