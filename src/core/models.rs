use glam::IVec2;
use serde::{Deserialize, Serialize};
use crate::core::direction::{Axis, Direction};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} encoding: {value}")]
pub struct InvalidEncoding {
    pub kind: &'static str,
    pub value: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellType {
    Empty = 0,
    Wall = 1,
    Tunnel = 2,
    Box = 3,
    Present = 4,
    Magic = 5,
    Laser = 6,
}

impl CellType {
    const ALL: [CellType; 7] = [
        CellType::Empty,
        CellType::Wall,
        CellType::Tunnel,
        CellType::Box,
        CellType::Present,
        CellType::Magic,
        CellType::Laser,
    ];

    /// Types that may carry bonds to their neighbours.
    pub fn is_continuous(self) -> bool {
        matches!(self, CellType::Wall | CellType::Box | CellType::Magic)
    }
}

impl From<CellType> for u8 {
    fn from(value: CellType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for CellType {
    type Error = InvalidEncoding;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CellType::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidEncoding { kind: "cell type", value: value as i64 })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Color {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Cyan = 4,
    Blue = 5,
    Purple = 6,
    Magenta = 7,
    Brown = 8,
    White = 9,
    Gray = 10,
    DarkGray = 11,
    Black = 12,
    Tan = 13,
    DarkTan = 14,
}

impl Color {
    const ALL: [Color; 15] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Purple,
        Color::Magenta,
        Color::Brown,
        Color::White,
        Color::Gray,
        Color::DarkGray,
        Color::Black,
        Color::Tan,
        Color::DarkTan,
    ];

    /// The background swaps between white and black; anything else counts as black.
    pub fn flipped_floor(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl From<Color> for u8 {
    fn from(value: Color) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for Color {
    type Error = InvalidEncoding;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidEncoding { kind: "color", value: value as i64 })
    }
}

/// One bit per direction, `1 << direction`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Connections(pub u8);

impl Connections {
    pub const NONE: Connections = Connections(0);

    pub fn has(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn set(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 & 0b1111 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.has(d))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "type")]
    pub kind: CellType,
    pub color: Color,
    pub connections: Connections,
    pub axis: Axis,
    pub direction: Direction,
    #[serde(default)]
    pub open: bool,
}

impl Cell {
    pub fn new(kind: CellType, color: Color) -> Cell {
        Cell {
            kind,
            color,
            connections: Connections::NONE,
            axis: Axis::Horizontal,
            direction: Direction::East,
            open: false,
        }
    }

    pub fn empty(floor_color: Color) -> Cell {
        Cell::new(CellType::Empty, floor_color)
    }

    pub fn wall() -> Cell {
        Cell::new(CellType::Wall, Color::DarkGray)
    }

    pub fn block() -> Cell {
        Cell::new(CellType::Box, Color::Brown)
    }

    pub fn present() -> Cell {
        Cell::new(CellType::Present, Color::Red)
    }

    pub fn magic() -> Cell {
        Cell::new(CellType::Magic, Color::Purple)
    }

    pub fn tunnel(axis: Axis) -> Cell {
        Cell {
            axis,
            ..Cell::new(CellType::Tunnel, Color::Gray)
        }
    }

    pub fn laser(direction: Direction) -> Cell {
        Cell {
            direction,
            ..Cell::new(CellType::Laser, Color::Red)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellType::Empty
    }

    /// A tunnel lets the player and beams through along its own axis only.
    pub fn is_tunnel_along(&self, axis: Axis) -> bool {
        self.kind == CellType::Tunnel && self.axis == axis
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Player {
    pub position: IVec2,
    pub facing: Direction,
    pub grabbing: bool,
    pub dead: bool,
}

impl Player {
    pub fn new(position: IVec2, facing: Direction) -> Player {
        Player {
            position,
            facing,
            grabbing: false,
            dead: false,
        }
    }

    /// The cell the player holds, or would hold, when grabbing.
    pub fn grab_point(&self) -> IVec2 {
        self.position + self.facing.to_vec()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    Grab,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameUpdate {
    /// Nothing happened: the player is dead or the step leaves the board.
    Ignored,
    Turned(Direction),
    Moved(GameChangeType),
    /// The tunnel rules forbid this move.
    Refused,
    /// Something in the pushed group could not move.
    Blocked,
    Grabbed { opened_present: bool },
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndCellsMove,
    FloorFlip,
}
