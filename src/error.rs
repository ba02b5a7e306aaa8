//! Error types for the Huffman coder.

use thiserror::Error;

/// Error variants for coder construction, encoding, and decoding.
///
/// All of these are recoverable: the coder that reported the error remains
/// valid and can keep encoding and decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// Encode met a character that is not part of the coder's alphabet.
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(char),

    /// Decode met a character other than '0' or '1' in the bit-string.
    #[error("malformed input: expected '0' or '1', found {0:?}")]
    MalformedInput(char),

    /// Decode ran out of input in the middle of a codeword.
    #[error("truncated input: bit-string ends mid-codeword")]
    TruncatedInput,

    /// Construction was given an empty alphabet.
    #[error("empty input: at least one symbol is required")]
    EmptyInput,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
