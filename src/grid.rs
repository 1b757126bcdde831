//! Fixed-width row layout for card grids.
//!
//! [`paginate`] splits an ordered slice into consecutive rows of
//! `row_width` items; the last row may be shorter. Rows borrow from the
//! input, so the iterator is free to clone and restart.
//!
//! ```text
//! [a b c d e], width 2  →  [a b] [c d] [e]
//! ```

use std::num::NonZeroUsize;
use std::slice::Chunks;

/// Iterator over rows of a grid. See [`paginate`].
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    chunks: Chunks<'a, T>,
    width: usize,
}

/// Split `items` into rows of `row_width`.
pub fn paginate<T>(items: &[T], row_width: NonZeroUsize) -> Rows<'_, T> {
    Rows {
        chunks: items.chunks(row_width.get()),
        width: row_width.get(),
    }
}

impl<'a, T> Rows<'a, T> {
    /// Pair each row with the 1-based ordinal of its first item, so cards
    /// keep a running count across rows.
    pub fn with_ordinals(self) -> impl Iterator<Item = (usize, &'a [T])> {
        let width = self.width;
        self.enumerate().map(move |(row, items)| (row * width + 1, items))
    }
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}
