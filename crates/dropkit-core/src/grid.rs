#![forbid(unsafe_code)]

//! Fixed-coordinate grid model and cell mover.
//!
//! A [`Grid`] is a flat 2-D array of cells, each holding at most one piece
//! of content. There is no hierarchy and no reordering within a cell — the
//! only operation a drag can commit is relocating content from one
//! coordinate to another. The relocation is a *move*, not a swap: content
//! already at the destination is discarded.

/// A fixed 2-D array of optional cell contents, indexed by `(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cols: u16,
    rows: u16,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Create an empty grid with the given dimensions.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(cols as usize * rows as usize, || None);
        Self { cols, rows, cells }
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        if col < self.cols && row < self.rows {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    /// The content at `(col, row)`, if the cell is occupied and in bounds.
    #[must_use]
    pub fn get(&self, col: u16, row: u16) -> Option<&T> {
        self.index(col, row)
            .and_then(|i| self.cells[i].as_ref())
    }

    /// Put content into a cell, returning whatever it previously held.
    ///
    /// Out-of-bounds coordinates drop the content and return `None`.
    pub fn place(&mut self, col: u16, row: u16, content: T) -> Option<T> {
        match self.index(col, row) {
            Some(i) => self.cells[i].replace(content),
            None => None,
        }
    }

    /// Empty a cell, returning its content.
    pub fn take(&mut self, col: u16, row: u16) -> Option<T> {
        self.index(col, row).and_then(|i| self.cells[i].take())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl<T: Clone> Grid<T> {
    /// Relocate the content of one cell to another, producing a new grid.
    ///
    /// The destination's prior content (if any) is discarded; the source
    /// cell becomes empty. An empty source, identical coordinates, or any
    /// out-of-bounds coordinate leaves the grid unchanged — invalid
    /// gestures are normal input, not errors.
    #[must_use]
    pub fn move_content(&self, from: (u16, u16), to: (u16, u16)) -> Self {
        if from == to {
            return self.clone();
        }
        let (Some(fi), Some(ti)) = (self.index(from.0, from.1), self.index(to.0, to.1)) else {
            return self.clone();
        };
        if self.cells[fi].is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        next.cells[ti] = next.cells[fi].take();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(entries: &[((u16, u16), &str)]) -> Grid<String> {
        let mut grid = Grid::new(4, 3);
        for &((col, row), content) in entries {
            grid.place(col, row, content.to_string());
        }
        grid
    }

    #[test]
    fn new_grid_is_empty() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.occupied(), 0);
        assert!(grid.get(0, 0).is_none());
    }

    #[test]
    fn place_and_get() {
        let grid = grid_with(&[((1, 2), "a")]);
        assert_eq!(grid.get(1, 2).map(String::as_str), Some("a"));
        assert!(grid.get(2, 1).is_none());
    }

    #[test]
    fn place_returns_previous_content() {
        let mut grid = grid_with(&[((0, 0), "a")]);
        let prev = grid.place(0, 0, "b".to_string());
        assert_eq!(prev.as_deref(), Some("a"));
        assert_eq!(grid.get(0, 0).map(String::as_str), Some("b"));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = grid_with(&[((0, 0), "a")]);
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn move_relocates_content() {
        let grid = grid_with(&[((0, 0), "a")]);
        let out = grid.move_content((0, 0), (2, 1));
        assert!(out.get(0, 0).is_none());
        assert_eq!(out.get(2, 1).map(String::as_str), Some("a"));
        assert_eq!(out.occupied(), 1);
    }

    #[test]
    fn move_overwrites_destination() {
        // Move, not swap: X at the destination is discarded.
        let grid = grid_with(&[((0, 0), "a"), ((1, 1), "x")]);
        let out = grid.move_content((0, 0), (1, 1));
        assert!(out.get(0, 0).is_none());
        assert_eq!(out.get(1, 1).map(String::as_str), Some("a"));
        assert_eq!(out.occupied(), 1);
    }

    #[test]
    fn move_same_cell_is_noop() {
        let grid = grid_with(&[((1, 1), "a")]);
        let out = grid.move_content((1, 1), (1, 1));
        assert_eq!(out, grid);
    }

    #[test]
    fn move_empty_source_is_noop() {
        let grid = grid_with(&[((1, 1), "a")]);
        let out = grid.move_content((0, 0), (2, 2));
        assert_eq!(out, grid);
    }

    #[test]
    fn move_out_of_bounds_is_noop() {
        let grid = grid_with(&[((0, 0), "a")]);
        assert_eq!(grid.move_content((0, 0), (9, 9)), grid);
        assert_eq!(grid.move_content((9, 9), (0, 0)), grid);
    }

    #[test]
    fn move_does_not_mutate_input() {
        let grid = grid_with(&[((0, 0), "a")]);
        let before = grid.clone();
        let _ = grid.move_content((0, 0), (1, 0));
        assert_eq!(grid, before);
    }

    #[test]
    fn take_empties_cell() {
        let mut grid = grid_with(&[((2, 0), "a")]);
        assert_eq!(grid.take(2, 0).as_deref(), Some("a"));
        assert!(grid.get(2, 0).is_none());
        assert!(grid.take(2, 0).is_none());
    }
}
