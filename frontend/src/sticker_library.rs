use shared::LibrarySticker;
use zoon::events::DragStart;
use zoon::*;

/// Preset stickers; dragging one onto the canvas places a copy there.
pub fn sticker_library(library: &[LibrarySticker]) -> impl Element {
    Row::new()
        .multiline()
        .s(Gap::both(10))
        .s(Padding::new().x(8).y(6))
        .s(Background::new().color("#4e342e"))
        .s(Font::new().color("#f5e6d3"))
        .item(Text::new("Sticker library:"))
        .items(library.iter().map(library_sticker))
}

fn library_sticker(sticker: &LibrarySticker) -> impl Element {
    let src = sticker.src.clone();
    let name = sticker.name.clone();
    Image::new()
        .url(sticker.src.clone())
        .description(sticker.name.clone())
        .s(Width::exact(48))
        .s(Height::exact(48))
        .s(Cursor::new(CursorIcon::Grab))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("draggable", "true")
                .attr("title", &name)
                .event_handler(move |event: DragStart| {
                    let Some(data_transfer) = event.data_transfer() else {
                        return;
                    };
                    if let Err(error) = data_transfer.set_data("text/plain", &src) {
                        zoon::eprintln!("Cannot start dragging {src}: {error:?}");
                    }
                })
        })
}
