use glam::IVec2;
use serde::{Deserialize, Serialize};
use crate::core::models::InvalidEncoding;

/// Cardinal directions, encoded so that `axis = value & 1` and `opposite = (value + 2) & 3`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Axis {
    Horizontal = 0,
    Vertical = 1,
}

/// How a move direction relates to the way the player faces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Relationship {
    Parallel,
    Orthogonal,
    AntiParallel,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Direction> {
        Direction::ALL.get(index as usize).copied()
    }

    pub fn axis(self) -> Axis {
        if self.index() & 1 == 0 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn opposite(self) -> Direction {
        Direction::ALL[((self.index() + 2) & 3) as usize]
    }

    pub fn relationship(self, other: Direction) -> Relationship {
        match (other.index().wrapping_sub(self.index())) & 3 {
            0 => Relationship::Parallel,
            2 => Relationship::AntiParallel,
            _ => Relationship::Orthogonal,
        }
    }

    /// Unit step on the grid; y grows towards the south.
    pub fn to_vec(self) -> IVec2 {
        match self {
            Direction::East => IVec2::new(1, 0),
            Direction::South => IVec2::new(0, 1),
            Direction::West => IVec2::new(-1, 0),
            Direction::North => IVec2::new(0, -1),
        }
    }

    /// `None` for anything that is not a unit cardinal step.
    pub fn from_vec(vec: IVec2) -> Option<Direction> {
        match (vec.x, vec.y) {
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            (0, -1) => Some(Direction::North),
            _ => None,
        }
    }

    pub fn bit(self) -> u8 {
        1 << self.index()
    }

    pub fn opposite_bit(self) -> u8 {
        self.opposite().bit()
    }
}

impl From<Direction> for i8 {
    fn from(value: Direction) -> Self {
        value as i8
    }
}

impl TryFrom<i8> for Direction {
    type Error = InvalidEncoding;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Direction::from_index)
            .ok_or(InvalidEncoding { kind: "direction", value: value as i64 })
    }
}

impl From<Axis> for i8 {
    fn from(value: Axis) -> Self {
        value as i8
    }
}

impl TryFrom<i8> for Axis {
    type Error = InvalidEncoding;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::Horizontal),
            1 => Ok(Axis::Vertical),
            _ => Err(InvalidEncoding { kind: "axis", value: value as i64 }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn axis_follows_low_bit() {
        assert_eq!(Direction::East.axis(), Axis::Horizontal);
        assert_eq!(Direction::West.axis(), Axis::Horizontal);
        assert_eq!(Direction::South.axis(), Axis::Vertical);
        assert_eq!(Direction::North.axis(), Axis::Vertical);
    }

    #[test]
    fn relationship_classifies_every_pair() {
        for a in Direction::ALL {
            assert_eq!(a.relationship(a), Relationship::Parallel);
            assert_eq!(a.relationship(a.opposite()), Relationship::AntiParallel);
            for b in Direction::ALL {
                let expected = if a == b {
                    Relationship::Parallel
                } else if a.opposite() == b {
                    Relationship::AntiParallel
                } else {
                    Relationship::Orthogonal
                };
                assert_eq!(a.relationship(b), expected, "{:?} vs {:?}", a, b);
                assert_eq!(a.relationship(b), b.relationship(a));
            }
        }
    }

    #[test]
    fn bits_are_distinct_and_mirror_opposites() {
        let all_bits = Direction::ALL.iter().fold(0u8, |acc, d| {
            assert_eq!(acc & d.bit(), 0);
            acc | d.bit()
        });
        assert_eq!(all_bits, 0b1111);
        assert_eq!(Direction::East.opposite_bit(), Direction::West.bit());
        assert_eq!(Direction::South.opposite_bit(), Direction::North.bit());
        assert_eq!(Direction::West.opposite_bit(), Direction::East.bit());
        assert_eq!(Direction::North.opposite_bit(), Direction::South.bit());
    }

    #[test]
    fn from_vec_inverts_to_vec() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_vec(d.to_vec()), Some(d));
        }
        assert_eq!(Direction::from_vec(IVec2::new(1, 1)), None);
        assert_eq!(Direction::from_vec(IVec2::ZERO), None);
        assert_eq!(Direction::from_vec(IVec2::new(2, 0)), None);
    }

    #[test]
    fn decoding_rejects_none_sentinel() {
        assert!(Direction::try_from(-1i8).is_err());
        assert!(Direction::try_from(4i8).is_err());
        assert_eq!(Direction::try_from(3i8).ok(), Some(Direction::North));
        assert!(Axis::try_from(2i8).is_err());
    }
}
