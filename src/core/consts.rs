use std::time::Duration;
use crate::core::models::Color;

pub const DEFAULT_FLOOR_COLOR: Color = Color::Black;
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Pause on a completed level before moving on to the next one.
pub const LEVEL_COMPLETE_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_LOG_FILE: &str = "exports/tunnel_push.log";
pub const EXPORT_DIR: &str = "exports";
