use crate::cell::CellIx;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// The cells a search has not finalized yet, kept in an order that only changes through stable
/// re-sorting. Selecting the closest cell therefore breaks ties by the current order, starting
/// from row-major scan order.
#[derive(Clone, Debug)]
pub(crate) struct Frontier {
    cells: FxIndexSet<CellIx>,
}

impl Frontier {
    /// A frontier holding every cell of a grid with `len` cells.
    pub(crate) fn new(len: usize) -> Frontier {
        Frontier {
            cells: (0..len).collect(),
        }
    }

    /// Stably sorts the frontier by `distance` and removes the first cell.
    pub(crate) fn pop_closest<F>(&mut self, mut distance: F) -> Option<CellIx>
    where
        F: FnMut(CellIx) -> u32,
    {
        self.cells.sort_by(|&a, &b| distance(a).cmp(&distance(b)));
        self.cells.shift_remove_index(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn contains(&self, ix: CellIx) -> bool {
        self.cells.contains(&ix)
    }
}
