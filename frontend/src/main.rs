//! Corkboard entry point

use zoon::*;

mod app;
mod board;
mod canvas;
mod config;
mod dataflow;
mod dragging;
mod file_picker;
mod sticker_library;
mod timer_widget;
mod toolbar;

pub fn main() {
    let app = app::CorkboardApp::new();
    let root_element = app.root();
    start_app("app", move || root_element);
}
