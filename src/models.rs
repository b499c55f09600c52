use crate::core::{Game, GameUpdate};

pub struct GameRenderState {
    pub game: Game,
    pub level_index: usize,
    pub level_count: usize,
    pub last_update: Option<GameUpdate>,
    pub message: Option<String>,
}
