use std::collections::VecDeque;

use crate::core::row::Row;

/// Sliding window over the endless stream of rows.
///
/// Index 0 is the newest row (top of the screen); the back is the oldest.
/// The judgment row sits at a fixed index counted from the newest row, so it
/// always maps to the same screen position no matter how many rows have passed.
#[derive(Debug, Clone)]
pub struct Board {
    rows: VecDeque<Row>,
    capacity: usize,
    judgment_index: usize,
}

impl Board {
    pub fn new(capacity: usize, judgment_index: usize) -> Self {
        debug_assert!(judgment_index < capacity, "judgment row outside the board");
        Self {
            rows: VecDeque::with_capacity(capacity + 1),
            capacity,
            judgment_index,
        }
    }

    /// Insert a row at the incoming end, evicting the oldest row when full.
    /// Returns the evicted row, if any.
    pub fn push(&mut self, row: Row) -> Option<Row> {
        self.rows.push_front(row);
        let evicted = if self.rows.len() > self.capacity {
            self.rows.pop_back()
        } else {
            None
        };
        debug_assert!(self.rows.len() <= self.capacity, "board over capacity");
        evicted
    }

    /// Add a row at the departed end.
    #[cfg(test)]
    pub(crate) fn push_oldest(&mut self, row: Row) {
        debug_assert!(self.rows.len() < self.capacity, "board over capacity");
        self.rows.push_back(row);
    }

    /// The row currently being compared against the player, if it exists yet.
    pub fn judgment_row(&self) -> Option<&Row> {
        self.rows.get(self.judgment_index)
    }

    /// The row that becomes the judgment row after the next insertion.
    pub(crate) fn next_judgment_row_mut(&mut self) -> Option<&mut Row> {
        let idx = self.judgment_index.checked_sub(1)?;
        self.rows.get_mut(idx)
    }

    pub fn judgment_index(&self) -> usize {
        self.judgment_index
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Rows from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
