//! CorkboardApp - owns the domains and lays out the page

use crate::board::Corkboard;
use crate::canvas::canvas;
use crate::config::load_board_config;
use crate::sticker_library::sticker_library;
use crate::toolbar::toolbar;
use shared::BoardConfig;
use std::sync::Arc;
use zoon::*;

pub struct CorkboardApp {
    /// Placement, timer and library settings
    pub config: Arc<BoardConfig>,

    /// Items, background and the events that change them
    pub board: Corkboard,
}

impl CorkboardApp {
    pub fn new() -> Self {
        let config = Arc::new(load_board_config());
        let board = Corkboard::new(&config);
        Self { config, board }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element {
        Column::new()
            .s(Height::screen())
            .s(Width::fill())
            .s(Background::new().color("#2e1f16"))
            .s(Font::new().family([
                FontFamily::new("Inter"),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .item(toolbar(&self.board))
            .item(sticker_library(&self.config.library))
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .s(Padding::all(10))
                    .child(canvas(&self.board, &self.config)),
            )
    }
}
