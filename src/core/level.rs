use glam::IVec2;
use log::warn;
use serde::{Deserialize, Serialize};
use crate::core::board::Board;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::direction::Direction;
use crate::core::game::Game;
use crate::core::models::{Cell, Color, Player};

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("could not read level: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed level json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level has no cells")]
    EmptyGrid,
    #[error("column {column} has {found} cells, expected {expected}")]
    RaggedGrid { column: usize, expected: usize, found: usize },
    #[error("player at ({x}, {y}) is outside the {width}x{height} grid")]
    PlayerOutOfBounds { x: i32, y: i32, width: i32, height: i32 },
    #[error("unknown symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol { symbol: char, line: usize, column: usize },
    #[error("bond at line {line}, column {column} joins cells that cannot be bonded")]
    InvalidBond { line: usize, column: usize },
    #[error("level has no player")]
    MissingPlayer,
    #[error("level set is empty")]
    NoLevels,
    #[error("level has more than one player (second at line {line}, column {column})")]
    DuplicatePlayer { line: usize, column: usize },
    #[error("unknown facing {name:?}")]
    UnknownFacing { name: String },
    #[error("level cannot be written as text: {0}")]
    NotTextRepresentable(String),
}

/// The level record as stored on disk: `grid[x][y]`, numeric enums throughout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    pub player: PlayerData,
    pub floor_color: Color,
    pub grid: Vec<Vec<Cell>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlayerData {
    pub x: i32,
    pub y: i32,
    pub dir: Direction,
    #[serde(default)]
    pub grabbing: bool,
    #[serde(default)]
    pub dead: bool,
}

impl Game {
    /// Builds a fresh game from a level record. Grab and death state are not restored.
    pub fn from_level_data(data: LevelData) -> Result<Game, LevelError> {
        let width = data.grid.len();
        let height = data.grid.first().map_or(0, |column| column.len());
        if width == 0 || height == 0 {
            return Err(LevelError::EmptyGrid);
        }
        if let Some((column, cells)) = data.grid.iter().enumerate().find(|(_, c)| c.len() != height) {
            return Err(LevelError::RaggedGrid { column, expected: height, found: cells.len() });
        }

        let bounds = BoundsOriginRoot::new(width as i32, height as i32);
        let position = IVec2::new(data.player.x, data.player.y);
        if !bounds.contains(&position) {
            return Err(LevelError::PlayerOutOfBounds {
                x: position.x,
                y: position.y,
                width: bounds.width(),
                height: bounds.height(),
            });
        }

        let grid = BoundedGrid::from_fn(bounds, |pos| data.grid[pos.x as usize][pos.y as usize]);
        let board = Board::from_grid(grid, data.floor_color);
        let one_sided = board.one_sided_bonds();
        if !one_sided.is_empty() {
            warn!("level has {} one-sided bonds, first at {:?}", one_sided.len(), one_sided[0]);
        }

        Ok(Game::new(board, Player::new(position, data.player.dir)))
    }

    pub fn to_level_data(&self) -> LevelData {
        let board = &self.board;
        let grid = (0..board.width())
            .map(|x| (0..board.height()).map(|y| board[IVec2::new(x, y)]).collect())
            .collect();
        LevelData {
            player: PlayerData {
                x: self.player.position.x,
                y: self.player.position.y,
                dir: self.player.facing,
                grabbing: self.player.grabbing,
                dead: self.player.dead,
            },
            floor_color: board.floor_color(),
            grid,
        }
    }

    pub fn from_json(json: &str) -> Result<Game, LevelError> {
        let data: LevelData = serde_json::from_str(json)?;
        Game::from_level_data(data)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string(&self.to_level_data())?)
    }
}
