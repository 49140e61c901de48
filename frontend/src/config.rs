//! Board configuration, compiled into the bundle from `frontend/board.toml`

use shared::BoardConfig;

const BOARD_TOML: &str = include_str!("../board.toml");

/// Parse the bundled configuration. A broken file is logged and replaced by
/// the defaults so the board still comes up.
pub fn load_board_config() -> BoardConfig {
    match BoardConfig::from_toml_str(BOARD_TOML) {
        Ok(config) => {
            zoon::println!(
                "Board config loaded: {} library stickers, timer {}:{:02}",
                config.library.len(),
                config.timer.minutes,
                config.timer.seconds,
            );
            config
        }
        Err(error) => {
            zoon::eprintln!("{error}; using default board config");
            BoardConfig::default()
        }
    }
}
