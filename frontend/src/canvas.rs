//! The corkboard canvas and the views of the items placed on it

use crate::board::Corkboard;
use crate::dragging::{ContainerHandle, make_draggable, shield_from_drag};
use crate::timer_widget::timer_panel;
use shared::{BoardConfig, ImageSource, ItemId, ItemKind, PlacedItem, Point};
use std::sync::Arc;
use zoon::events::{DragOver, Drop as DropEvent};
use zoon::*;

pub fn canvas(board: &Corkboard, config: &Arc<BoardConfig>) -> impl Element {
    let raw_canvas = RawHtmlEl::new("div");
    let container = ContainerHandle::new(raw_canvas.dom_element());

    raw_canvas
        .attr("id", "canvas")
        .style("position", "relative")
        .style("width", "100%")
        .style("height", "100%")
        .style("min-height", "480px")
        .style("overflow", "hidden")
        .style("border", "6px solid #6d4c2f")
        .style("box-sizing", "border-box")
        .style("background-color", "#c8a06a")
        .style("background-size", "cover")
        .style("background-position", "center")
        .style_signal(
            "background-image",
            board.background.signal_ref(|background| match background {
                Some(image) => format!("url(\"{}\")", image.url()),
                None => "none".to_string(),
            }),
        )
        .event_handler(|event: DragOver| event.prevent_default())
        .event_handler({
            let container = container.clone();
            let config = config.clone();
            let library_sticker_dropped_relay = board.library_sticker_dropped_relay.clone();
            move |event: DropEvent| {
                event.prevent_default();
                let Some(src) = event
                    .data_transfer()
                    .and_then(|data_transfer| data_transfer.get_data("text/plain").ok())
                else {
                    return;
                };
                if config.library_sticker(&src).is_none() {
                    zoon::eprintln!("Ignoring drop of unknown content '{src}'");
                    return;
                }
                let client = Point::new(f64::from(event.x()), f64::from(event.y()));
                let origin = container.bounds().drop_origin(client);
                library_sticker_dropped_relay.send((src, origin));
            }
        })
        .children_signal_vec(board.items.signal_vec().map({
            let board = board.clone();
            let config = config.clone();
            move |item| placed_item_view(item, &board, &config, container.clone())
        }))
}

fn placed_item_view(
    item: PlacedItem,
    board: &Corkboard,
    config: &BoardConfig,
    container: ContainerHandle,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let PlacedItem { id, kind, position } = item;
    let raw_el = match kind {
        ItemKind::Note { text } => note_view(id, text, board),
        ItemKind::Sticker { image } => sticker_view(&image),
        ItemKind::Timer => timer_panel(id, board.clone(), &config.timer),
    };
    make_draggable(raw_el, id, position, container, board.clone())
}

fn note_view(item_id: ItemId, text: String, board: &Corkboard) -> RawHtmlEl<web_sys::HtmlElement> {
    RawHtmlEl::new("div")
        .class("sticky-note")
        .style("width", "180px")
        .style("height", "160px")
        .style("padding", "6px")
        .style("box-sizing", "border-box")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("background", "#fff59d")
        .style("box-shadow", "2px 2px 6px rgba(0, 0, 0, 0.35)")
        .child(
            Button::new()
                .s(Align::new().right())
                .s(Padding::new().x(6).y(1))
                .s(Font::new().size(12).color("#6d4c2f"))
                .label("X")
                .on_press({
                    let board = board.clone();
                    move || board.remove_item(item_id)
                })
                .update_raw_el(shield_from_drag),
        )
        .child(
            TextArea::new()
                .s(Width::fill())
                .s(Height::fill())
                .s(Background::new().color("transparent"))
                .s(Font::new().size(15).color("#333333"))
                .placeholder(Placeholder::new("Enter note..."))
                .text(text)
                .label_hidden("note")
                .on_change({
                    let board = board.clone();
                    move |text| board.edit_note(item_id, text)
                })
                .update_raw_el(|raw_el| {
                    shield_from_drag(raw_el)
                        .style("border", "none")
                        .style("resize", "none")
                }),
        )
}

fn sticker_view(image: &ImageSource) -> RawHtmlEl<web_sys::HtmlElement> {
    RawHtmlEl::new("img")
        .class("sticker")
        .attr("src", image.url())
        .attr("alt", "sticker")
        .attr("draggable", "false")
        .style("width", "96px")
        .style("height", "auto")
}
