// Terminal grab-and-push puzzle game with ratatui
// Controls: W/A/S/D or arrow keys act (the first press in a new direction turns), Space grabs
// or releases, F/P/R/N/L switch levels, E exports the level as JSON, Q quits.

use TunnelPushEngine::cli::{Cli, Mode};
use TunnelPushEngine::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, level_to_text, render_game, setup_terminal,
};
use TunnelPushEngine::core::{step, Game, GameUpdate, UserAction, EXPORT_DIR, LEVEL_COMPLETE_DELAY};
use TunnelPushEngine::level_set::{LevelAction, LevelSet};
use TunnelPushEngine::levels::{builtin_levels, is_json, load_level, load_levels};
use TunnelPushEngine::models::GameRenderState;
use clap::Parser;
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    match cli.mode.unwrap_or_default() {
        Mode::Play { levels, start } => {
            let mut level_set = if levels.is_empty() {
                builtin_levels()?
            } else {
                load_levels(&levels)?
            };
            let game = level_set.go_to(start);

            let mut terminal = setup_terminal()?;
            let result = run_interactive(&mut level_set, game, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
        Mode::Convert { input, output } => {
            convert(&input, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(log_file)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_out)))
        .init();
    Ok(())
}

fn run_interactive(
    level_set: &mut LevelSet,
    game: Game,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = GameRenderState {
        game,
        level_index: level_set.current_index(),
        level_count: level_set.len(),
        last_update: None,
        message: None,
    };
    render_game(terminal, &state)?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(action) => {
                state.last_update = Some(step(&mut state.game, action));
                state.message = None;
            }
            ConsoleInput::ToggleGrab => {
                let action = if state.game.player().grabbing {
                    UserAction::Release
                } else {
                    UserAction::Grab
                };
                let update = step(&mut state.game, action);
                state.last_update = Some(update);
                state.message = None;

                let opened = matches!(update, GameUpdate::Grabbed { opened_present: true });
                if opened && state.game.level_complete() {
                    render_game(terminal, &state)?;
                    std::thread::sleep(LEVEL_COMPLETE_DELAY);
                    if level_set.is_last() {
                        state.message = Some("All levels complete!".to_string());
                    } else {
                        switch_level(level_set, &mut state, LevelAction::Next);
                    }
                }
            }
            ConsoleInput::Level(action) => switch_level(level_set, &mut state, action),
            ConsoleInput::Export => {
                let path = export_level(&state.game, level_set.current_index())?;
                state.message = Some(format!("Exported to {}", path.display()));
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
        }
        render_game(terminal, &state)?;
    }

    Ok(())
}

fn switch_level(level_set: &mut LevelSet, state: &mut GameRenderState, action: LevelAction) {
    state.game = level_set.apply(action);
    state.level_index = level_set.current_index();
    state.last_update = None;
    state.message = None;
}

fn export_level(game: &Game, level_index: usize) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(EXPORT_DIR)?;
    let path = Path::new(EXPORT_DIR).join(format!("level_{:02}.json", level_index + 1));
    std::fs::write(&path, game.to_json()?)?;
    info!("exported level {} to {}", level_index + 1, path.display());
    Ok(path)
}

fn convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let game = load_level(input)?;
    let converted = if is_json(input) {
        level_to_text(&game)?
    } else {
        serde_json::to_string_pretty(&game.to_level_data())?
    };

    match output {
        Some(path) => {
            std::fs::write(path, converted)?;
            info!("converted {} to {}", input.display(), path.display());
        }
        None => println!("{}", converted),
    }
    Ok(())
}
