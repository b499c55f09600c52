use log::debug;
use crate::core::board::Board;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::direction::Direction;
use crate::core::models::{CellType, Connections};

/// Swaps floor and magic across the whole board.
///
/// Magic becomes floor, floor becomes magic, and the new magic cells are bonded
/// to every orthogonal neighbour that was floor before the flip, so the open
/// space turns into one rigid network. The background colour toggles.
pub fn flip_floor(board: &mut Board) {
    let was_empty = BoundedGrid::from_fn(board.size(), |pos| board[pos].is_empty());

    for (_, cell) in board.cells_mut() {
        if matches!(cell.kind, CellType::Empty | CellType::Magic) {
            cell.connections = Connections::NONE;
        }
    }

    for (_, cell) in board.cells_mut() {
        cell.kind = match cell.kind {
            CellType::Magic => CellType::Empty,
            CellType::Empty => CellType::Magic,
            other => other,
        };
    }

    for (pos, _) in was_empty.iter().filter(|&(_, &empty)| empty) {
        for dir in [Direction::East, Direction::South] {
            if was_empty.get(&(pos + dir.to_vec())).copied().unwrap_or(false) {
                board.bond(pos, dir);
            }
        }
    }

    let flipped = board.floor_color().flipped_floor();
    board.set_floor_color(flipped);
    debug!("floor flipped, background now {:?}", flipped);
}
