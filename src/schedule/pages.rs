//! Incremental hand-out of ranked results.

/// Cursor over a ranked list, handing it out in batches.
///
/// Items come out in exactly the order they were given; nothing is sorted or
/// filtered here.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    cursor: usize,
    batch_size: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// `batch_size` is used by [`next_page`](Self::next_page); zero is treated as one.
    pub fn new(items: &'a [T], batch_size: usize) -> Self {
        Self {
            items,
            cursor: 0,
            batch_size: batch_size.max(1),
        }
    }

    /// The next `n` items, fewer at the end, empty once exhausted.
    pub fn next_batch(&mut self, n: usize) -> &'a [T] {
        let start = self.cursor;
        let end = start.saturating_add(n).min(self.items.len());
        self.cursor = end;
        &self.items[start..end]
    }

    /// The next `batch_size` items.
    pub fn next_page(&mut self) -> &'a [T] {
        self.next_batch(self.batch_size)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Everything handed out so far.
    pub fn shown(&self) -> &'a [T] {
        &self.items[..self.cursor]
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl<'a, T> Iterator for Paginator<'a, T> {
    type Item = &'a [T];

    /// Yields pages of `batch_size` until exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.next_page())
        }
    }
}
