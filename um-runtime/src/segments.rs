//! Segment store and identifier allocator
//!
//! Segments are owned, fixed-length arrays of words addressed by a u32
//! identifier. Segment 0 holds the running program; it is seeded at
//! construction and never passes through the public map/unmap operations.
//! Freed identifiers are recycled in FIFO order before the monotone counter
//! mints a fresh one.

use crate::error::{Result, RuntimeError};
use std::collections::{HashMap, VecDeque};
use um_spec::Word;

/// Identifier of the program segment
pub const PROGRAM_SEGMENT: u32 = 0;

#[derive(Debug, Clone)]
pub struct SegmentStore {
    /// Live segments keyed by identifier
    segments: HashMap<u32, Vec<Word>>,

    /// Identifiers returned by unmap, reused oldest-first
    free_ids: VecDeque<u32>,

    /// Next fresh identifier; starts at 1, segment 0 is never reissued
    next_id: u32,
}

impl SegmentStore {
    /// Create a store whose segment 0 holds the boot word sequence.
    pub fn new(program: Vec<Word>) -> Self {
        let mut segments = HashMap::new();
        segments.insert(PROGRAM_SEGMENT, program);
        SegmentStore {
            segments,
            free_ids: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Allocate a zeroed segment of `len` words and return its identifier.
    ///
    /// The oldest freed identifier is reused first; otherwise a fresh one is
    /// minted. Exhausting the 32-bit identifier space is fatal.
    pub fn map(&mut self, len: u32) -> Result<u32> {
        let id = match self.free_ids.pop_front() {
            Some(id) => id,
            None => {
                let id = self.next_id;
                self.next_id = self
                    .next_id
                    .checked_add(1)
                    .ok_or(RuntimeError::IdentifierSpaceExhausted)?;
                id
            }
        };
        self.segments.insert(id, vec![0; len as usize]);
        Ok(id)
    }

    /// Free the segment bound to `id` and queue the identifier for reuse.
    pub fn unmap(&mut self, id: u32) -> Result<()> {
        if id == PROGRAM_SEGMENT {
            return Err(RuntimeError::UnmapSegmentZero);
        }
        self.segments
            .remove(&id)
            .ok_or(RuntimeError::UnmappedSegment { id })?;
        self.free_ids.push_back(id);
        Ok(())
    }

    /// Read the word at `offset` in segment `id`.
    pub fn load(&self, id: u32, offset: u32) -> Result<Word> {
        let segment = self
            .segments
            .get(&id)
            .ok_or(RuntimeError::UnmappedSegment { id })?;
        segment
            .get(offset as usize)
            .copied()
            .ok_or(RuntimeError::OffsetOutOfRange {
                id,
                offset,
                len: segment.len(),
            })
    }

    /// Write `word` at `offset` in segment `id`.
    pub fn store(&mut self, id: u32, offset: u32, word: Word) -> Result<()> {
        let segment = self
            .segments
            .get_mut(&id)
            .ok_or(RuntimeError::UnmappedSegment { id })?;
        let len = segment.len();
        let slot = segment
            .get_mut(offset as usize)
            .ok_or(RuntimeError::OffsetOutOfRange { id, offset, len })?;
        *slot = word;
        Ok(())
    }

    /// Replace segment 0's contents with a deep copy of segment `id`.
    ///
    /// A copy rather than an aliasing swap: the machine may be executing out
    /// of segment 0 at this moment, and the source segment stays live and
    /// independently mutable afterwards. Loading segment 0 over itself is a
    /// no-op.
    pub fn load_program(&mut self, id: u32) -> Result<()> {
        if id == PROGRAM_SEGMENT {
            return Ok(());
        }
        let source = self
            .segments
            .get(&id)
            .ok_or(RuntimeError::UnmappedSegment { id })?
            .clone();
        self.segments.insert(PROGRAM_SEGMENT, source);
        Ok(())
    }

    /// Segment 0's word array, read by the fetch step.
    pub fn program(&self) -> &[Word] {
        // Segment 0 exists for the store's whole lifetime
        &self.segments[&PROGRAM_SEGMENT]
    }

    /// Whether `id` is bound to a live segment.
    pub fn is_mapped(&self, id: u32) -> bool {
        self.segments.contains_key(&id)
    }

    /// Length of the segment bound to `id`.
    pub fn segment_len(&self, id: u32) -> Result<usize> {
        self.segments
            .get(&id)
            .map(Vec::len)
            .ok_or(RuntimeError::UnmappedSegment { id })
    }

    /// Number of live segments, including segment 0.
    pub fn live_count(&self) -> usize {
        self.segments.len()
    }

    /// Release every segment and recycled identifier. Used by HALT.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.free_ids.clear();
    }
}
