#![no_main]
use libfuzzer_sys::fuzz_target;
use runejson::{Error, Parser};

fuzz_target!(|data: &[u8]| {
    match Parser::new(data) {
        Ok(parser) => {
            if let Err(e) = parser.parse() {
                assert!(e.position <= parser.len(), "error past end: {:?}", e);
                assert_eq!(e.found.is_none(), e.position == parser.len());
            }
        }
        Err(Error::Utf8(_)) => {}
        Err(e) => panic!("unexpected construct error: {:?}", e),
    }
});
