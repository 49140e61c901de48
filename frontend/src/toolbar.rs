use crate::board::Corkboard;
use crate::file_picker::{background_picker, sticker_picker};
use zoon::*;

const BUTTON_COLOR: &str = "#5d4037";
const BUTTON_HOVER_COLOR: &str = "#795548";

/// Action buttons above the library.
pub fn toolbar(board: &Corkboard) -> impl Element {
    Row::new()
        .multiline()
        .s(Gap::both(8))
        .s(Padding::all(8))
        .s(Background::new().color("#3e2723"))
        .item(action_button("Add Note", {
            let note_added_relay = board.note_added_relay.clone();
            move || note_added_relay.send(())
        }))
        .item(background_picker(board))
        .item(sticker_picker(board))
        .item(action_button("Study Timer", {
            let timer_requested_relay = board.timer_requested_relay.clone();
            move || timer_requested_relay.send(())
        }))
        .item(clear_stickers_button(board))
        .item(action_button("Clear Canvas", {
            let canvas_cleared_relay = board.canvas_cleared_relay.clone();
            move || canvas_cleared_relay.send(())
        }))
}

/// Shows how many stickers would go.
fn clear_stickers_button(board: &Corkboard) -> impl Element {
    let stickers_cleared_relay = board.stickers_cleared_relay.clone();
    let hovered = Mutable::new(false);
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(4))
        .s(Background::new().color_signal(hovered.signal().map_bool(
            || BUTTON_HOVER_COLOR,
            || BUTTON_COLOR,
        )))
        .s(Font::new().color("#ffffff"))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label_signal(board.sticker_count_signal().map(|count| match count {
            0 => "Clear Stickers".to_string(),
            count => format!("Clear Stickers ({count})"),
        }))
        .on_press(move || stickers_cleared_relay.send(()))
}

pub fn action_button(label: &'static str, on_press: impl FnMut() + 'static) -> impl Element {
    let hovered = Mutable::new(false);
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(4))
        .s(Background::new().color_signal(hovered.signal().map_bool(
            || BUTTON_HOVER_COLOR,
            || BUTTON_COLOR,
        )))
        .s(Font::new().color("#ffffff"))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(label)
        .on_press(on_press)
}
