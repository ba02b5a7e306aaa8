use huffman::HuffmanCoder;

fn main() {
    let sample = "the quick brown fox jumps over the lazy dog ".repeat(50);

    for _ in 0..1000 {
        let coder = HuffmanCoder::from_text(&sample).unwrap();
        let bits = coder.encode(&sample).unwrap();
        let text = coder.decode(&bits).unwrap();
        assert_eq!(text, sample);
    }
}
