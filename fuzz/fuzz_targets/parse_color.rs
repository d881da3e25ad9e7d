#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use swatch::{ColorDatabase, ColorFormat};

static DB: OnceLock<ColorDatabase> = OnceLock::new();

fuzz_target!(|data: &str| {
    let db = DB.get_or_init(ColorDatabase::new);

    // Parsing must never panic, and anything that parses must format.
    if let Ok(color) = db.parse(data) {
        let _ = db.format(color, ColorFormat::Name);
        let _ = color.to_css_string();
        let _ = color.to_hex_string();
    }
});
