use glam::IVec2;
use crate::core::board::Board;
use crate::core::models::Player;

/// One loaded level in play: the board and the player on it.
///
/// All mutation goes through `Game`'s methods; renderers only borrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) player: Player,
}

impl Game {
    pub fn new(board: Board, player: Player) -> Game {
        Game { board, player }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn in_bounds(&self, pos: IVec2) -> bool {
        self.board.in_bounds(pos)
    }

    pub fn level_complete(&self) -> bool {
        self.board.all_presents_open()
    }
}
