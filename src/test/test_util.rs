pub use dissimilar::diff as __diff;
use crate::console_interface::{parse_level, render_game_to_string};
use crate::core::{step, Direction, Game, GameUpdate, Player, UserAction};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        $crate::assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub game: Game,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let game = match parse_level(level) {
            Ok(game) => game,
            Err(err) => panic!("level failed to parse: {}\n{}", err, level),
        };
        Self { game }
    }

    pub fn facing(mut self, direction: Direction) -> Self {
        self.game.player.facing = direction;
        self
    }

    pub fn player(&self) -> &Player {
        self.game.player()
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.game).trim_matches('\n').into()
    }

    pub fn act(&mut self, direction: Direction) -> GameUpdate {
        step(&mut self.game, UserAction::Move(direction))
    }

    pub fn grab(&mut self) -> bool {
        self.game.grab()
    }

    pub fn release(&mut self) {
        self.game.release()
    }

    pub fn assert_move(&mut self, direction: Direction) -> GameUpdate {
        let before = self.game_to_string();
        let update = self.act(direction);
        assert!(update.moved(), "Expected a move {:?}, got {:?}, in map\n{}", direction, update, before);
        update
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    /// Acts and checks that neither the board nor the player's position changed.
    pub fn assert_stuck(&mut self, direction: Direction) -> GameUpdate {
        let board = self.game.board().clone();
        let position = self.player().position;
        let update = self.act(direction);
        assert!(!update.moved(), "Expected no move {:?}, got {:?}", direction, update);
        assert_eq!(&board, self.game.board(), "board changed on {:?}", update);
        assert_eq!(position, self.player().position);
        update
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
