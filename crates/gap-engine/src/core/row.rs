use crate::core::rng::Rng;

/// One wall row. `true` cells block, `false` cells are gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<bool>,
}

impl Row {
    /// A row with every cell blocking.
    pub fn solid(width: usize) -> Self {
        Self {
            cells: vec![true; width],
        }
    }

    /// Build a row from explicit cells (`true` = blocking).
    pub fn from_cells(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cell at `col` blocks. Out-of-range columns block.
    pub fn is_blocking(&self, col: usize) -> bool {
        self.cells.get(col).copied().unwrap_or(true)
    }

    pub fn gap_count(&self) -> usize {
        self.cells.iter().filter(|&&c| !c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Open the cell at `col`. Only used for the start-of-session override.
    pub(crate) fn carve_gap(&mut self, col: usize) {
        if let Some(cell) = self.cells.get_mut(col) {
            *cell = false;
        }
    }
}

/// Generate a row of `width` cells with exactly `gap_count` gaps.
///
/// Shuffles the column indices and opens the first `gap_count` of them, so every
/// combination of gap positions is equally likely. `gap_count` is clamped to
/// `[1, width]`.
pub fn generate_row(rng: &mut Rng, width: usize, gap_count: usize) -> Row {
    let mut row = Row::solid(width);
    if width == 0 {
        return row;
    }
    let gaps = gap_count.clamp(1, width);
    let idxs = rng.permutation(width);
    for &i in &idxs[..gaps] {
        row.cells[i] = false;
    }
    row
}
