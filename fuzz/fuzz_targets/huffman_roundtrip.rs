#![no_main]
use huffman::HuffmanCoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    if text.is_empty() {
        return;
    }

    let coder = HuffmanCoder::from_text(&text).unwrap();
    let bits = coder.encode(&text).unwrap();
    let decoded = coder.decode(&bits).unwrap();
    assert_eq!(decoded, text.to_lowercase());
});
