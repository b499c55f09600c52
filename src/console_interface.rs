use crate::core::{
    Axis, Board, BoundsOriginRoot, Cell, CellType, Direction, Game, LevelError, Player, UserAction,
    DEFAULT_FLOOR_COLOR, INPUT_POLL_INTERVAL,
};
use crate::level_set::LevelAction;
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use glam::IVec2;
use log::warn;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const BOND: char = '+';
const FACING_HEADER: &str = "facing ";

/// Parses the text level format.
///
/// Cells sit on even columns of even lines; a `+` between two cells (odd
/// column, or odd line) bonds them. See `cell_from_symbol` for the symbols.
/// An optional first line `facing <direction>` sets where the player looks;
/// without it the player faces east.
pub fn parse_level(s: &str) -> Result<Game, LevelError> {
    let mut lines: Vec<&str> = s.trim_matches(|c: char| c == '\n' || c == '\r').lines().collect();
    let mut facing = Direction::East;
    let mut first_line = 1;
    if let Some(name) = lines.first().copied().and_then(|line| line.strip_prefix(FACING_HEADER)) {
        let name = name.trim();
        facing = direction_from_name(name).ok_or_else(|| LevelError::UnknownFacing { name: name.to_string() })?;
        lines.remove(0);
        first_line = 2;
    }
    let height = lines.len().div_ceil(2);
    let width = lines
        .iter()
        .step_by(2)
        .map(|line| line.chars().count().div_ceil(2))
        .max()
        .unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(LevelError::EmptyGrid);
    }

    let mut board = Board::new(BoundsOriginRoot::new(width as i32, height as i32), DEFAULT_FLOOR_COLOR);
    let mut player = None;
    let mut bonds = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let pos = IVec2 { x: (j / 2) as i32, y: (i / 2) as i32 };
            let (line_no, column_no) = (i + first_line, j + 1);
            match (i % 2 == 1, j % 2 == 1) {
                (false, false) => {
                    let Some((cell, has_player)) = cell_from_symbol(ch) else {
                        return Err(LevelError::UnknownSymbol { symbol: ch, line: line_no, column: column_no });
                    };
                    board.set(pos, cell);
                    if has_player {
                        if player.is_some() {
                            return Err(LevelError::DuplicatePlayer { line: line_no, column: column_no });
                        }
                        player = Some(pos);
                    }
                }
                (false, true) if ch == BOND => bonds.push((pos, Direction::East, line_no, column_no)),
                (true, false) if ch == BOND => bonds.push((pos, Direction::South, line_no, column_no)),
                (_, _) if ch == ' ' => {}
                _ => return Err(LevelError::UnknownSymbol { symbol: ch, line: line_no, column: column_no }),
            }
        }
    }

    for (pos, dir, line, column) in bonds {
        let bondable = |p: IVec2| board.get(p).is_some_and(|c| c.kind.is_continuous());
        if !bondable(pos) || !bondable(pos + dir.to_vec()) {
            return Err(LevelError::InvalidBond { line, column });
        }
        board.bond(pos, dir);
    }

    let position = player.ok_or(LevelError::MissingPlayer)?;
    Ok(Game::new(board, Player::new(position, facing)))
}

fn direction_name(dir: Direction) -> &'static str {
    match dir {
        Direction::East => "east",
        Direction::South => "south",
        Direction::West => "west",
        Direction::North => "north",
    }
}

fn direction_from_name(name: &str) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&dir| direction_name(dir).eq_ignore_ascii_case(name))
}

/// Cell for a level symbol, and whether the player stands on it.
fn cell_from_symbol(ch: char) -> Option<(Cell, bool)> {
    let cell = match ch {
        '.' | ' ' => Cell::empty(DEFAULT_FLOOR_COLOR),
        '#' => Cell::wall(),
        '-' => Cell::tunnel(Axis::Horizontal),
        '|' => Cell::tunnel(Axis::Vertical),
        'o' => Cell::block(),
        '?' => Cell::present(),
        '*' => Cell { open: true, ..Cell::present() },
        '~' => Cell::magic(),
        '>' => Cell::laser(Direction::East),
        'v' => Cell::laser(Direction::South),
        '<' => Cell::laser(Direction::West),
        '^' => Cell::laser(Direction::North),
        '@' => return Some((Cell::empty(DEFAULT_FLOOR_COLOR), true)),
        '=' => return Some((Cell::tunnel(Axis::Horizontal), true)),
        '!' => return Some((Cell::tunnel(Axis::Vertical), true)),
        _ => return None,
    };
    Some((cell, false))
}

fn symbol_for(cell: &Cell, has_player: bool) -> char {
    if has_player {
        return match (cell.kind, cell.axis) {
            (CellType::Tunnel, Axis::Horizontal) => '=',
            (CellType::Tunnel, Axis::Vertical) => '!',
            _ => '@',
        };
    }
    match cell.kind {
        CellType::Empty => '.',
        CellType::Wall => '#',
        CellType::Tunnel => if cell.axis == Axis::Horizontal { '-' } else { '|' },
        CellType::Box => 'o',
        CellType::Present => if cell.open { '*' } else { '?' },
        CellType::Magic => '~',
        CellType::Laser => match cell.direction {
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
            Direction::North => '^',
        },
    }
}

pub fn render_game_to_string(game: &Game) -> String {
    let board = game.board();
    let player = game.player().position;
    let mut result = String::new();
    for y in 0..board.height() {
        let mut cells = String::new();
        let mut joins = String::new();
        for x in 0..board.width() {
            let pos = IVec2 { x, y };
            let cell = &board[pos];
            if x > 0 {
                let west = &board[IVec2 { x: x - 1, y }];
                cells.push(if west.connections.has(Direction::East) { BOND } else { ' ' });
                joins.push(' ');
            }
            cells.push(symbol_for(cell, pos == player));
            joins.push(if cell.connections.has(Direction::South) { BOND } else { ' ' });
        }
        result.push_str(cells.trim_end());
        result.push('\n');
        if y + 1 < board.height() {
            result.push_str(joins.trim_end());
            result.push('\n');
        }
    }
    result
}

/// The level as a text file, with a facing header when the player does not face east.
///
/// Fails if the text would play differently, such as bonds on cells that cannot
/// hold them. Colours have no text form; losing them is only logged.
pub fn level_to_text(game: &Game) -> Result<String, LevelError> {
    let facing = game.player().facing;
    let mut text = String::new();
    if facing != Direction::East {
        text.push_str(FACING_HEADER);
        text.push_str(direction_name(facing));
        text.push('\n');
    }
    text.push_str(&render_game_to_string(game));

    let reloaded = parse_level(&text)
        .map_err(|err| LevelError::NotTextRepresentable(err.to_string()))?;
    let board = game.board();
    if let Some((pos, cell)) = board.cells().find(|&(pos, cell)| !plays_the_same(cell, &reloaded.board()[pos])) {
        return Err(LevelError::NotTextRepresentable(format!(
            "cell at ({}, {}) is a {:?} the text format cannot describe",
            pos.x, pos.y, cell.kind
        )));
    }
    let recoloured = board.cells().filter(|&(pos, cell)| cell.color != reloaded.board()[pos].color).count();
    if recoloured > 0 || board.floor_color() != reloaded.board().floor_color() {
        warn!(
            "text level drops colours: {} cells recoloured, floor {:?} becomes {:?}",
            recoloured,
            board.floor_color(),
            reloaded.board().floor_color()
        );
    }
    Ok(text)
}

/// Compares the parts of a cell that change how the level plays.
fn plays_the_same(a: &Cell, b: &Cell) -> bool {
    a.kind == b.kind
        && a.connections == b.connections
        && (a.kind != CellType::Present || a.open == b.open)
        && (a.kind != CellType::Tunnel || a.axis == b.axis)
        && (a.kind != CellType::Laser || a.direction == b.direction)
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        let title = format!("Level {}/{}", state.level_index + 1, state.level_count);
        let board_color = if state.game.player().dead { Color::Red } else { Color::White };
        let game_paragraph = Paragraph::new(render_game_to_string(&state.game))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(board_color))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instructions = "WASD/arrows act, Space grab/release, F/P/R/N/L level, E export, Q quit";
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

fn status_line(state: &GameRenderState) -> String {
    let player = state.game.player();
    let mut status = format!("Facing {:?}", player.facing);
    if player.grabbing {
        status.push_str(" | holding");
    }
    if player.dead {
        status.push_str(" | Zapped! Press R to retry");
    } else if state.game.level_complete() {
        status.push_str(" | Level complete!");
    }
    if let Some(update) = &state.last_update {
        status = format!("{} | Last: {:?}", status, update);
    }
    if let Some(message) = &state.message {
        status = format!("{} | {}", status, message);
    }
    status
}

pub enum ConsoleInput {
    UserAction(UserAction),
    ToggleGrab,
    Level(LevelAction),
    Export,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(INPUT_POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            let act = |dir| ConsoleInput::UserAction(UserAction::Move(dir));
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => act(Direction::North),
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => act(Direction::South),
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => act(Direction::West),
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => act(Direction::East),
                KeyCode::Char(' ') => ConsoleInput::ToggleGrab,
                KeyCode::Char('f') | KeyCode::Char('F') => ConsoleInput::Level(LevelAction::First),
                KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::Level(LevelAction::Previous),
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Level(LevelAction::Reset),
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::Level(LevelAction::Next),
                KeyCode::Char('l') | KeyCode::Char('L') => ConsoleInput::Level(LevelAction::Last),
                KeyCode::Char('e') | KeyCode::Char('E') => ConsoleInput::Export,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
