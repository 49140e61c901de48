//! Local image pickers
//!
//! Chosen files never leave the browser. Each becomes an object URL that
//! stays valid until `release_image` revokes it, which the board does when
//! the sticker or background using it is destroyed.

use crate::board::Corkboard;
use shared::ImageSource;
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, Url};
use zoon::events::Change;
use zoon::*;

pub fn background_picker(board: &Corkboard) -> impl Element {
    let background_selected_relay = board.background_selected_relay.clone();
    picker("Upload Background", false, move |images| {
        let mut images = images.into_iter();
        if let Some(image) = images.next() {
            background_selected_relay.send(image);
        }
        images.for_each(|extra| release_image(&extra));
    })
}

pub fn sticker_picker(board: &Corkboard) -> impl Element {
    let stickers_uploaded_relay = board.stickers_uploaded_relay.clone();
    picker("Add Stickers", true, move |images| {
        stickers_uploaded_relay.send(images);
    })
}

/// Revoke the object URL behind an uploaded image. Library images are
/// served files and need nothing.
pub fn release_image(image: &ImageSource) {
    if let ImageSource::Uploaded { object_url } = image {
        if let Err(error) = Url::revoke_object_url(object_url) {
            zoon::eprintln!("Failed to revoke {object_url}: {error:?}");
        }
    }
}

/// A label styled as a button around a hidden file input. Cancelling the
/// dialog or choosing nothing calls nothing.
fn picker(
    label: &'static str,
    multiple: bool,
    on_selected: impl Fn(Vec<ImageSource>) + 'static,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let mut input = RawHtmlEl::new("input")
        .attr("type", "file")
        .attr("accept", "image/*")
        .style("display", "none");
    if multiple {
        input = input.attr("multiple", "");
    }
    let input = input.event_handler(move |event: Change| {
        let Some(input) = event.dyn_target::<HtmlInputElement>() else {
            return;
        };
        match selected_images(&input) {
            Ok(images) if images.is_empty() => {}
            Ok(images) => {
                zoon::println!("{label}: {} image(s) selected", images.len());
                on_selected(images);
            }
            Err(error) => zoon::eprintln!("{label}: cannot read selected files: {error:?}"),
        }
        // Picking the same file again must fire `change` again
        input.set_value("");
    });

    RawHtmlEl::new("label")
        .style("display", "inline-block")
        .style("padding", "6px 12px")
        .style("border-radius", "4px")
        .style("background", "#5d4037")
        .style("color", "#ffffff")
        .style("cursor", "pointer")
        .style("font-family", "sans-serif")
        .child(Text::new(label))
        .child(input)
}

fn selected_images(input: &HtmlInputElement) -> Result<Vec<ImageSource>, JsValue> {
    let Some(files) = input.files() else {
        return Ok(Vec::new());
    };
    let mut images = Vec::with_capacity(files.length() as usize);
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        match Url::create_object_url_with_blob(&file) {
            Ok(object_url) => images.push(ImageSource::Uploaded { object_url }),
            Err(error) => {
                images.iter().for_each(release_image);
                return Err(error);
            }
        }
    }
    Ok(images)
}
