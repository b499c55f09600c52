use glam::IVec2;
use log::trace;
use crate::core::direction::{Direction, Relationship};
use crate::core::floor_flip::flip_floor;
use crate::core::game::Game;
use crate::core::lasers::fire_lasers;
use crate::core::models::{CellType, GameChangeType, GameUpdate, UserAction};
use crate::core::movement::{attempt_move, MoveResult};

/// What a directional input turns into once facing, tunnels and grabbing are considered.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Refused,
    Push { seeds: Vec<IVec2>, flip: bool },
}

pub fn step(game: &mut Game, action: UserAction) -> GameUpdate {
    match action {
        UserAction::Move(direction) => game.act(direction),
        UserAction::Grab => GameUpdate::Grabbed { opened_present: game.grab() },
        UserAction::Release => {
            game.release();
            GameUpdate::Released
        }
    }
}

impl Game {
    /// Applies one directional input, then fires every laser.
    pub fn act(&mut self, move_dir: Direction) -> GameUpdate {
        if self.player.dead {
            return GameUpdate::Ignored;
        }
        let update = self.resolve_act(move_dir);
        fire_lasers(&self.board, &mut self.player);
        trace!("act {:?} -> {:?}, player now {:?}", move_dir, update, self.player);
        update
    }

    /// Starts holding whatever is in front. Opens a present found there and reports it.
    pub fn grab(&mut self) -> bool {
        self.player.grabbing = true;
        let grab_point = self.player.grab_point();
        match self.board.get_mut(grab_point) {
            Some(cell) if cell.kind == CellType::Present => {
                cell.open = true;
                true
            }
            _ => false,
        }
    }

    pub fn release(&mut self) {
        self.player.grabbing = false;
    }

    fn resolve_act(&mut self, move_dir: Direction) -> GameUpdate {
        let move_point = self.player.position + move_dir.to_vec();
        if !self.in_bounds(move_point) {
            return GameUpdate::Ignored;
        }

        if !self.player.grabbing && self.player.facing != move_dir {
            self.player.facing = move_dir;
            return GameUpdate::Turned(move_dir);
        }

        match self.resolve_seeds(move_dir, move_point) {
            Resolution::Refused => GameUpdate::Refused,
            Resolution::Push { seeds, flip } => {
                match attempt_move(&mut self.board, &mut self.player, &seeds, move_dir) {
                    MoveResult::Blocked => GameUpdate::Blocked,
                    MoveResult::Moved { cells_moved } => {
                        if flip {
                            flip_floor(&mut self.board);
                            GameUpdate::Moved(GameChangeType::FloorFlip)
                        } else if cells_moved > 0 {
                            GameUpdate::Moved(GameChangeType::PlayerAndCellsMove)
                        } else {
                            GameUpdate::Moved(GameChangeType::PlayerMove)
                        }
                    }
                }
            }
        }
    }

    fn resolve_seeds(&self, move_dir: Direction, move_point: IVec2) -> Resolution {
        let player = &self.player;
        let facing = player.facing;
        let relationship = move_dir.relationship(facing);
        let grab_point = player.grab_point();
        let move_axis = move_dir.axis();

        let player_cell = self.board[player.position];
        let move_cell = self.board[move_point];

        // A tunnel that runs along the facing axis is a passage, not something to hold.
        let grabbing = player.grabbing
            && self.board.get(grab_point).is_some_and(|cell| {
                !cell.is_empty() && !cell.is_tunnel_along(facing.axis())
            });
        let in_tunnel = player_cell.kind == CellType::Tunnel;
        let entering_tunnel = move_cell.is_tunnel_along(move_axis);

        let push = |seeds: Vec<IVec2>| Resolution::Push { seeds, flip: false };

        if in_tunnel {
            if move_axis != player_cell.axis {
                Resolution::Refused
            } else if player.grabbing && relationship == Relationship::Orthogonal {
                Resolution::Refused
            } else if grabbing {
                if relationship == Relationship::Parallel {
                    push(vec![move_point])
                } else {
                    Resolution::Refused
                }
            } else if move_cell.kind == CellType::Magic {
                Resolution::Push { seeds: vec![], flip: true }
            } else {
                push(vec![move_point])
            }
        } else if entering_tunnel {
            if !grabbing {
                return push(vec![]);
            }
            let mut seeds = vec![grab_point];
            if relationship == Relationship::Orthogonal {
                seeds.push(move_point);
            }
            push(seeds)
        } else {
            let mut seeds = vec![move_point];
            if grabbing {
                seeds.push(grab_point);
            }
            push(seeds)
        }
    }
}
