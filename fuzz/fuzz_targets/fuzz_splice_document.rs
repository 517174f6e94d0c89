#![no_main]

use libfuzzer_sys::fuzz_target;
use permstable::catalog::build_catalog;
use permstable::docgen::{RenderedTable, splice_document};

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = std::str::from_utf8(data) {
        let table = RenderedTable::from_catalog(&build_catalog());

        // A successful splice must be a fixed point.
        if let Ok(once) = splice_document(document, &table) {
            let twice = splice_document(&once, &table).expect("spliced output lost its markers");
            assert_eq!(once, twice);
        }
    }
});
