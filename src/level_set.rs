use log::info;
use crate::core::{Game, LevelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelAction {
    First,
    Previous,
    Reset,
    Next,
    Last,
}

/// An ordered list of levels and the one currently being played.
///
/// Levels are kept as pristine templates; every (re)load hands out a fresh copy.
#[derive(Clone, Debug)]
pub struct LevelSet {
    levels: Vec<Game>,
    current: usize,
}

impl LevelSet {
    pub fn new(levels: Vec<Game>) -> Result<LevelSet, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }
        Ok(LevelSet { levels, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.levels.len()
    }

    /// A fresh copy of the current level.
    pub fn load_current(&self) -> Game {
        self.levels[self.current].clone()
    }

    /// Switches to `index`, clamped to the set, and loads it.
    pub fn go_to(&mut self, index: usize) -> Game {
        self.current = index.min(self.levels.len() - 1);
        info!("loading level {}/{}", self.current + 1, self.levels.len());
        self.load_current()
    }

    pub fn apply(&mut self, action: LevelAction) -> Game {
        let target = match action {
            LevelAction::First => 0,
            LevelAction::Previous => self.current.saturating_sub(1),
            LevelAction::Reset => self.current,
            LevelAction::Next if self.is_last() => self.current,
            LevelAction::Next => self.current + 1,
            LevelAction::Last => self.levels.len() - 1,
        };
        self.go_to(target)
    }
}
