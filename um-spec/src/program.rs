//! # Boot Program Images
//!
//! A boot image is a raw stream of 32-bit words, each stored as 4 bytes in
//! big-endian order with no header or framing. The word sequence becomes the
//! initial contents of segment 0.

use crate::error::SpecError;
use crate::Word;
use serde::{Deserialize, Serialize};

/// A boot program: the ordered word sequence loaded into segment 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Instruction words in execution order
    pub words: Vec<Word>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Wrap an already-assembled word sequence
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse a raw boot image.
    ///
    /// Each word is assembled from 4 consecutive bytes, most significant byte
    /// first. A byte length that is not a multiple of 4 is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SpecError> {
        if bytes.len() % 4 != 0 {
            return Err(SpecError::TruncatedImage { len: bytes.len() });
        }

        let words = bytes
            .chunks_exact(4)
            .map(|chunk| Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { words })
    }

    /// Serialize back to the big-endian image format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.words.len() * 4);
        for word in &self.words {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
