//! Word-packed visited set for graph traversals.
//!
//! A traversal owns its `VisitedSet`, sized to the vertex count of the graph it
//! walks, so membership is a shift and a mask instead of a scan of the
//! result so far.

/// A dense bitset with one bit per vertex position.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    bits: usize,
    words: Vec<usize>,
}

const WORD_BITS: usize = usize::BITS as usize;

impl VisitedSet {
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            bits,
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bits
    }

    /// Number of positions currently marked.
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` iff `position` was not yet visited, marking it visited.
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    #[inline]
    pub(crate) fn try_visit(&mut self, position: usize) -> bool {
        assert!(position < self.bits, "position {position} out of bounds for n={}", self.bits);
        let (word, mask) = word_mask(position);
        let prev = self.words[word];
        self.words[word] = prev | mask;
        prev & mask == 0
    }

    /// # Panics
    /// Panics if `position >= self.len()`.
    #[inline]
    pub(crate) fn is_visited(&self, position: usize) -> bool {
        assert!(position < self.bits, "position {position} out of bounds for n={}", self.bits);
        let (word, mask) = word_mask(position);
        self.words[word] & mask != 0
    }
}

#[inline]
fn word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}
