//! Transition table with completeness tracking.

use super::state::StateId;

/// Row-major `states × symbols` grid of successor states.
///
/// Cells start unset. `incomplete_cells` counts the cells that have never
/// been assigned and only moves down, once per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    states: usize,
    symbols: usize,
    cells: Vec<Option<StateId>>,
    incomplete: usize,
}

impl TransitionTable {
    /// Number of cells in a `states × symbols` table, or `None` on overflow.
    pub fn cell_count(states: usize, symbols: usize) -> Option<usize> {
        states.checked_mul(symbols)
    }

    /// Allocate a table with every cell unset.
    ///
    /// Returns `None` if the table size overflows or cannot be allocated.
    pub fn new(states: usize, symbols: usize) -> Option<Self> {
        let size = Self::cell_count(states, symbols)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).ok()?;
        cells.resize(size, None);
        Some(Self {
            states,
            symbols,
            cells,
            incomplete: size,
        })
    }

    /// Rebuild a table from stored cells, recounting the unset ones.
    ///
    /// Returns `None` if `cells` does not hold exactly `states * symbols`
    /// entries.
    pub fn from_cells(states: usize, symbols: usize, cells: Vec<Option<StateId>>) -> Option<Self> {
        if Self::cell_count(states, symbols) != Some(cells.len()) {
            return None;
        }
        let incomplete = cells.iter().filter(|cell| cell.is_none()).count();
        Some(Self {
            states,
            symbols,
            cells,
            incomplete,
        })
    }

    fn offset(&self, state: StateId, symbol: usize) -> Option<usize> {
        (state < self.states && symbol < self.symbols).then(|| state * self.symbols + symbol)
    }

    /// Successor of `(state, symbol)`; `None` if unset or out of bounds.
    pub fn get(&self, state: StateId, symbol: usize) -> Option<StateId> {
        self.offset(state, symbol).and_then(|at| self.cells[at])
    }

    /// Assign a cell and return its previous value.
    ///
    /// The incomplete counter drops only when the cell was unset. Out of
    /// bounds coordinates leave the table untouched and return `None`.
    pub fn set(&mut self, state: StateId, symbol: usize, target: StateId) -> Option<StateId> {
        let at = self.offset(state, symbol)?;
        let previous = self.cells[at].replace(target);
        if previous.is_none() {
            self.incomplete -= 1;
        }
        previous
    }

    pub fn incomplete_cells(&self) -> usize {
        self.incomplete
    }

    pub fn is_complete(&self) -> bool {
        self.incomplete == 0
    }

    pub fn states(&self) -> usize {
        self.states
    }

    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// Raw cells in row-major order.
    pub fn cells(&self) -> &[Option<StateId>] {
        &self.cells
    }

    /// Coordinates of every unset cell, row by row.
    pub fn unset(&self) -> impl Iterator<Item = (StateId, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(at, _)| (at / self.symbols, at % self.symbols))
    }
}
