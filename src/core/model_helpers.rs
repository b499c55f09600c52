use crate::core::{Direction, GameUpdate, UserAction};

impl UserAction {
    pub fn all_moves() -> Vec<UserAction> {
        Direction::ALL.into_iter().map(UserAction::Move).collect()
    }
}

impl GameUpdate {
    /// Whether the update changed anything on the board or the player's position.
    pub fn moved(&self) -> bool {
        matches!(self, GameUpdate::Moved(_))
    }
}
