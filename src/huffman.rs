//! The Huffman coder: construction, code-table derivation, encode, decode.

use std::collections::{BTreeMap, VecDeque};

use crate::error::{Error, Result};
use crate::tree::{self, Node};

/// A prefix coder over a fixed alphabet of characters.
///
/// A coder owns one Huffman tree and the code table derived from it; both
/// are immutable after construction, so `&self` encode and decode calls are
/// safe from any number of threads.
///
/// Training text and encode input are both lowercased (`str::to_lowercase`),
/// so a coder trained on mixed-case text has a lowercase alphabet and
/// [`decode`](Self::decode) returns lowercase text. Weights supplied through
/// [`from_weights`](Self::from_weights) are keyed by the caller's characters
/// as-is; encode still lowercases its input.
#[derive(Debug)]
pub struct HuffmanCoder {
    root: Node,
    codes: BTreeMap<char, String>,
}

impl HuffmanCoder {
    /// Build a coder from a sample text, weighting each character by its
    /// relative frequency in the sample.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if the text has no characters.
    pub fn from_text(text: &str) -> Result<Self> {
        let text = text.to_lowercase();
        let mut counts: BTreeMap<char, u64> = BTreeMap::new();
        for symbol in text.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        let total: u64 = counts.values().sum();
        Self::from_weights(
            counts
                .into_iter()
                .map(|(symbol, count)| (symbol, count as f64 / total as f64)),
        )
    }

    /// Build a coder from caller-supplied symbol weights.
    ///
    /// Weights need not sum to one; only their relative order matters for
    /// the shape of the tree. Zero weights are accepted. If a symbol occurs
    /// more than once, the last weight wins.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if no symbols are supplied.
    pub fn from_weights<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        let weights: BTreeMap<char, f64> = weights.into_iter().collect();
        if weights.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Leaves are numbered in symbol order; the merge loop continues the
        // numbering for internal nodes. See `tree::build` for the tie-break.
        let leaves = weights
            .into_iter()
            .enumerate()
            .map(|(seq, (symbol, weight))| Node::leaf(symbol, weight, seq as u64))
            .collect();

        let root = tree::build(leaves);
        let codes = derive_codes(&root);
        Ok(Self { root, codes })
    }

    /// Encode a text into a bit-string of '0'/'1' characters.
    ///
    /// The output is the bare concatenation of codewords, with no framing
    /// or length header.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] on the first character (after
    /// lowercasing) that is not in the coder's alphabet.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::new();
        for symbol in text.to_lowercase().chars() {
            match self.codes.get(&symbol) {
                Some(code) => bits.push_str(code),
                None => return Err(Error::UnknownSymbol(symbol)),
            }
        }
        Ok(bits)
    }

    /// Decode a bit-string produced by [`encode`](Self::encode).
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] on any character other than '0' or
    /// '1', and [`Error::TruncatedInput`] if the bit-string ends in the
    /// middle of a codeword.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut out = String::new();

        // A single-symbol alphabet has a leaf for a root and "0" as its one
        // codeword; a '1' bit can never complete a symbol.
        if let Node::Leaf { symbol, .. } = &self.root {
            for bit in bits.chars() {
                match bit {
                    '0' => out.push(*symbol),
                    '1' => return Err(Error::TruncatedInput),
                    other => return Err(Error::MalformedInput(other)),
                }
            }
            return Ok(out);
        }

        let mut cursor = &self.root;
        for bit in bits.chars() {
            cursor = match cursor {
                Node::Internal { left, right, .. } => match bit {
                    '0' => left,
                    '1' => right,
                    other => return Err(Error::MalformedInput(other)),
                },
                // the cursor is reset to the (internal) root after each leaf
                Node::Leaf { .. } => unreachable!(),
            };

            if let Node::Leaf { symbol, .. } = cursor {
                out.push(*symbol);
                cursor = &self.root;
            }
        }

        if !std::ptr::eq(cursor, &self.root) {
            return Err(Error::TruncatedInput);
        }
        Ok(out)
    }

    /// The symbol-to-codeword table.
    pub fn codes(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    /// The codeword assigned to `symbol`, if it is in the alphabet.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Expected codeword length: Σ weight(s) · len(code(s)) over the
    /// alphabet.
    ///
    /// With weights from [`from_text`](Self::from_text) this is the mean
    /// number of bits per input character.
    pub fn expected_code_length(&self) -> f64 {
        let mut total = 0.0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { symbol, weight, .. } => {
                    total += weight * self.codes[symbol].len() as f64;
                }
                Node::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        total
    }
}

/// Walk the tree breadth-first, accumulating the path to every leaf.
///
/// Left edges contribute '0', right edges '1'. A lone leaf at the root has
/// no edges and is assigned the one-bit code "0", so a single-symbol
/// alphabet still round-trips.
fn derive_codes(root: &Node) -> BTreeMap<char, String> {
    let mut codes = BTreeMap::new();
    let mut queue: VecDeque<(&Node, String)> = VecDeque::new();
    queue.push_back((root, String::new()));

    while let Some((node, path)) = queue.pop_front() {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if path.is_empty() {
                    String::from("0")
                } else {
                    path
                };
                codes.insert(*symbol, code);
            }
            Node::Internal { left, right, .. } => {
                queue.push_back((left, format!("{path}0")));
                queue.push_back((right, format!("{path}1")));
            }
        }
    }
    codes
}
