//! # Huffman Coding
//!
//! *Optimal prefix-free codes for weighted alphabets.*
//!
//! ## Intuition First
//!
//! Morse code already knew the trick: give the common letters the short
//! signals. Huffman coding makes that intuition exact. Put every symbol of
//! the alphabet on a scale, then repeatedly glue the two lightest piles
//! together until a single tree remains. The path from the root down to a
//! symbol, read as left = 0 and right = 1, is its codeword: heavy symbols
//! stay near the root and get short codewords, rare symbols sink and get
//! long ones.
//!
//! Because every symbol sits on a *leaf*, no codeword is a prefix of
//! another, so the bit-stream needs no separators: the decoder just walks
//! the tree and emits a symbol every time it lands on a leaf.
//!
//! ## The Problem
//!
//! A fixed-width code spends the same number of bits on 'e' as on 'z'. For
//! skewed distributions that is pure waste: Shannon showed the achievable
//! minimum is the entropy of the distribution, and a good variable-length
//! code should get close to it without ever becoming ambiguous.
//!
//! ## Historical Context
//!
//! ```text
//! 1838  Morse/Vail  Shorter signals for commoner letters
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Top-down splitting (close, but suboptimal)
//! 1952  Huffman     Bottom-up merging (optimal), an MIT term paper
//! 1977  Ziv/Lempel  Dictionary coding, usually paired with Huffman
//! 1993  DEFLATE     Huffman inside zip, gzip, png
//! ```
//!
//! Fano offered his students a term paper on constructing the optimal
//! prefix code, without mentioning that he and Shannon had not managed it.
//! Huffman's insight was to build the tree bottom-up from the two rarest
//! symbols instead of splitting the alphabet top-down.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s \in S$ with weights $w_s$, choose codeword lengths
//! $\ell_s$ minimizing the expected length
//!
//! ```text
//! L = \sum_{s} w_s \ell_s    subject to    \sum_{s} 2^{-\ell_s} \le 1
//! ```
//!
//! The constraint is Kraft's inequality, exactly the condition that a
//! binary prefix-free code with those lengths exists. The greedy merge
//! attains the minimum, and $H(w) \le L < H(w) + 1$ where $H$ is the
//! Shannon entropy of the normalized weights.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ for $n$ distinct symbols (heap-based merge).
//! - **Encode**: $O(1)$ table lookup per character.
//! - **Decode**: $O(1)$ tree step per bit.
//!
//! ## Failure Modes
//!
//! 1. **Skewed alphabets**: a symbol with probability near 1 still costs a
//!    full bit per occurrence; arithmetic coding and ANS close that gap.
//! 2. **Stale tables**: codewords are only meaningful against the tree that
//!    produced them. Retrain the coder and old bit-strings are garbage.
//!
//! ## Implementation Notes
//!
//! This crate provides [`HuffmanCoder`], built either from a sample text
//! (characters weighted by relative frequency) or from caller-supplied
//! weights. Codewords and bit-streams are strings of '0'/'1' characters;
//! packing bits into bytes is left to the caller.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. & Thomas, J. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod huffman;
mod tree;

pub use error::{Error, Result};
pub use huffman::HuffmanCoder;
