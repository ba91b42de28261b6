#![no_main]

use ember_core::{ByteBuffer, LegacyValue};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode paths must reject malformed input without panicking
    if let Ok(text) = core::str::from_utf8(data) {
        let _ = ByteBuffer::from_hex(text, Some(32));
        let _ = ByteBuffer::bufferize(&LegacyValue::Str(text), None);
    }
    let buffer = ByteBuffer::from_bytes(data.to_vec(), Some(64));
    let _ = buffer.to_word_array();
    let _ = buffer.slice(data.len() % 97, None);
    let _ = buffer.reverse().to_hex();
});
