use glam::IVec2;
use log::debug;
use crate::core::board::Board;
use crate::core::direction::{Axis, Direction};
use crate::core::models::{CellType, Player};

/// The cells a laser beam crosses, in order, starting next to the emitter.
///
/// A beam passes floor and tunnels running along its own axis. It ends at the
/// board edge or at the first cell it cannot pass.
pub struct Beam<'a> {
    board: &'a Board,
    position: IVec2,
    step: IVec2,
    axis: Axis,
}

impl<'a> Beam<'a> {
    pub fn new(board: &'a Board, origin: IVec2, direction: Direction) -> Beam<'a> {
        Beam {
            board,
            position: origin,
            step: direction.to_vec(),
            axis: direction.axis(),
        }
    }

    /// The beam of the laser at `origin`, or `None` if there is no laser there.
    pub fn from_laser(board: &'a Board, origin: IVec2) -> Option<Beam<'a>> {
        let cell = board.get(origin)?;
        if cell.kind != CellType::Laser {
            return None;
        }
        Some(Beam::new(board, origin, cell.direction))
    }
}

impl Iterator for Beam<'_> {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        let next = self.position + self.step;
        let cell = self.board.get(next)?;
        let passable = cell.is_empty() || cell.is_tunnel_along(self.axis);
        if !passable {
            return None;
        }
        self.position = next;
        Some(next)
    }
}

/// Whether the laser at `origin` reaches the player. Marks the player dead if so.
pub fn fire_laser(board: &Board, origin: IVec2, player: &mut Player) -> bool {
    let Some(mut beam) = Beam::from_laser(board, origin) else {
        return false;
    };
    let hit = beam.any(|pos| pos == player.position);
    if hit {
        debug!("laser at {} hit the player at {}", origin, player.position);
        player.dead = true;
    }
    hit
}

/// Fires every laser on the board. Returns true if any of them hit the player.
pub fn fire_lasers(board: &Board, player: &mut Player) -> bool {
    let mut hit = false;
    for (origin, cell) in board.cells() {
        if cell.kind == CellType::Laser && fire_laser(board, origin, player) {
            hit = true;
        }
    }
    hit
}

/// How many cells the beam of the laser at `origin` crosses before it stops.
pub fn laser_length(board: &Board, origin: IVec2) -> usize {
    Beam::from_laser(board, origin).map_or(0, |beam| beam.count())
}
