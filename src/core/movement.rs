use glam::IVec2;
use log::{debug, trace};
use crate::core::board::Board;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::direction::Direction;
use crate::core::models::{CellType, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved { cells_moved: usize },
    Blocked,
}

impl MoveResult {
    pub fn succeeded(self) -> bool {
        matches!(self, MoveResult::Moved { .. })
    }
}

/// Two-phase push: mark everything that has to move, then either apply or cancel.
///
/// Marks live in a scratch grid owned by the transaction, so nothing about a
/// resolution ever leaks into the board's cells.
pub struct MoveTransaction {
    marks: BoundedGrid<bool>,
    marked: Vec<IVec2>,
}

impl MoveTransaction {
    pub fn new(board: &Board) -> MoveTransaction {
        MoveTransaction {
            marks: BoundedGrid::new(board.size(), false),
            marked: Vec::new(),
        }
    }

    /// Whether the cell at `point`, its bonded group and whatever stands in
    /// their way can all shift by `delta`. Marks every cell that would move.
    pub fn can_move(&mut self, board: &Board, point: IVec2, delta: IVec2) -> bool {
        let mut pending = vec![point];
        while let Some(pos) = pending.pop() {
            let Some(cell) = board.get(pos) else {
                return false;
            };
            if self.marks[&pos] {
                continue;
            }
            match cell.kind {
                CellType::Wall => return false,
                CellType::Empty => continue,
                _ => {}
            }

            self.marks[&pos] = true;
            self.marked.push(pos);

            pending.extend(cell.connections.iter().map(|dir| pos + dir.to_vec()));
            pending.push(pos + delta);
        }
        true
    }

    /// Relocates every marked cell by `delta`. Vacated slots that nothing moves
    /// into become fresh floor in the board's current floor colour.
    pub fn apply(mut self, board: &mut Board, delta: IVec2) -> usize {
        let moving: Vec<_> = self.marked
            .iter()
            .map(|&pos| (pos + delta, board.vacate(pos)))
            .collect();
        for (destination, cell) in moving {
            board.set(destination, cell);
        }
        let moved = self.marked.len();
        self.cancel();
        moved
    }

    /// Drops every mark without touching the board.
    pub fn cancel(&mut self) {
        for pos in self.marked.drain(..) {
            self.marks[&pos] = false;
        }
    }

    #[cfg(test)]
    fn is_clean(&self) -> bool {
        self.marked.is_empty() && self.marks.iter().all(|(_, &marked)| !marked)
    }
}

/// Pushes every seed one step in `direction`, moving the player along with them,
/// or changes nothing at all if any part of any group is stuck.
pub fn attempt_move(
    board: &mut Board,
    player: &mut Player,
    seeds: &[IVec2],
    direction: Direction,
) -> MoveResult {
    let delta = direction.to_vec();
    let mut transaction = MoveTransaction::new(board);

    let mut success = true;
    for &seed in seeds {
        if !transaction.can_move(board, seed, delta) {
            trace!("seed {} cannot move {:?}", seed, direction);
            success = false;
        }
    }

    if !success {
        debug!("push {:?} from {} blocked", direction, player.position);
        transaction.cancel();
        return MoveResult::Blocked;
    }

    player.position += delta;
    let cells_moved = transaction.apply(board, delta);
    MoveResult::Moved { cells_moved }
}
