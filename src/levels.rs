use std::path::Path;
use crate::console_interface::parse_level;
use crate::core::{Game, LevelError};
use crate::level_set::LevelSet;

pub const BUILTIN_LEVELS: &[(&str, &str)] = &[
    ("first present", include_str!("../levels/01_first_present.txt")),
    ("bonded boxes", include_str!("../levels/02_bonded_boxes.txt")),
    ("tunnel", include_str!("../levels/03_tunnel.txt")),
    ("laser", include_str!("../levels/04_laser.txt")),
    ("magic", include_str!("../levels/05_magic.txt")),
];

pub fn builtin_levels() -> Result<LevelSet, LevelError> {
    let levels = BUILTIN_LEVELS
        .iter()
        .map(|(_, text)| parse_level(text))
        .collect::<Result<Vec<_>, _>>()?;
    LevelSet::new(levels)
}

/// Reads a level file: `.json` files hold a level record, anything else the text format.
pub fn load_level(path: &Path) -> Result<Game, LevelError> {
    let contents = std::fs::read_to_string(path)?;
    if is_json(path) {
        Game::from_json(&contents)
    } else {
        parse_level(&contents)
    }
}

pub fn load_levels(paths: &[impl AsRef<Path>]) -> Result<LevelSet, LevelError> {
    let levels = paths
        .iter()
        .map(|path| load_level(path.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    LevelSet::new(levels)
}

pub fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
