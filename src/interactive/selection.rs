//! Cell selection as the player builds it
//!
//! Selection is restricted to chains of neighbouring cells. The engine
//! only re-checks that a submitted chain is straight.

use crate::core::{Board, Coordinate};

/// What happened when a cell was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Appended to the selection
    Selected,
    /// It was the last cell, so it was removed
    Deselected,
    /// Already part of the selection
    Ignored,
    /// Not next to the last cell; the selection starts over from it
    Restarted,
}

/// Ordered, duplicate-free list of picked cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Coordinate>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick `coord`
    pub fn toggle(&mut self, coord: Coordinate) -> SelectOutcome {
        let last = self.cells.last().copied();

        if last == Some(coord) {
            self.cells.pop();
            return SelectOutcome::Deselected;
        }

        if last.is_none_or(|last| last.is_adjacent(coord)) {
            if self.cells.contains(&coord) {
                return SelectOutcome::Ignored;
            }
            self.cells.push(coord);
            return SelectOutcome::Selected;
        }

        self.cells.clear();
        self.cells.push(coord);
        SelectOutcome::Restarted
    }

    /// Drop the most recently picked cell
    pub fn pop(&mut self) -> Option<Coordinate> {
        self.cells.pop()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[must_use]
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Letters under the selection, in pick order
    #[must_use]
    pub fn word(&self, board: &Board) -> String {
        board.spell(&self.cells).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn extends_with_neighbours() {
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(c(0, 0)), SelectOutcome::Selected);
        assert_eq!(sel.toggle(c(1, 1)), SelectOutcome::Selected);
        assert_eq!(sel.toggle(c(1, 2)), SelectOutcome::Selected);
        assert_eq!(sel.cells(), &[c(0, 0), c(1, 1), c(1, 2)]);
    }

    #[test]
    fn picking_last_deselects() {
        let mut sel = Selection::new();
        sel.toggle(c(4, 4));
        sel.toggle(c(4, 5));
        assert_eq!(sel.toggle(c(4, 5)), SelectOutcome::Deselected);
        assert_eq!(sel.cells(), &[c(4, 4)]);
    }

    #[test]
    fn revisiting_is_ignored() {
        let mut sel = Selection::new();
        sel.toggle(c(4, 4));
        sel.toggle(c(4, 5));
        sel.toggle(c(5, 5));
        assert_eq!(sel.toggle(c(4, 4)), SelectOutcome::Ignored);
        assert_eq!(sel.cells().len(), 3);
    }

    #[test]
    fn far_cell_restarts() {
        let mut sel = Selection::new();
        sel.toggle(c(0, 0));
        sel.toggle(c(0, 1));
        assert_eq!(sel.toggle(c(7, 7)), SelectOutcome::Restarted);
        assert_eq!(sel.cells(), &[c(7, 7)]);
    }

    #[test]
    fn spells_word() {
        let mut rows = vec!["XXXXXXXXXX"; 10];
        rows[2] = "XXDOGXXXXX";
        let board = Board::from_rows(&rows).unwrap();

        let mut sel = Selection::new();
        sel.toggle(c(2, 2));
        sel.toggle(c(2, 3));
        sel.toggle(c(2, 4));
        assert_eq!(sel.word(&board), "DOG");

        sel.pop();
        assert_eq!(sel.word(&board), "DO");
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.word(&board), "");
    }
}
