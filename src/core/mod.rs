mod model_helpers;
mod models;
mod update;
mod bounded_grid;
mod consts;
mod bounds;
mod direction;
mod board;
mod game;
mod movement;
mod floor_flip;
mod lasers;
mod level;

pub use models::{Cell, CellType, Color, Connections, GameChangeType, GameUpdate, InvalidEncoding, Player, UserAction};
pub use consts::*;
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use direction::{Axis, Direction, Relationship};
pub use board::Board;
pub use game::Game;
pub use movement::{attempt_move, MoveResult, MoveTransaction};
pub use floor_flip::flip_floor;
pub use lasers::{fire_laser, fire_lasers, laser_length, Beam};
pub use level::{LevelData, LevelError, PlayerData};
pub use update::step;
