//! Corkboard domain - the Container and the items placed on it
//!
//! One processor owns the authoritative `shared::Board` and mirrors every
//! structural change into the `items` ActorVec the canvas renders. Positions
//! and note text are written back to the model only; the DOM already shows
//! them, so they never trigger a re-render.

use crate::dataflow::{Actor, ActorVec, ActorVecHandle, Relay, relay};
use crate::file_picker::release_image;
use futures::{StreamExt, select};
use shared::{
    Board, BoardConfig, ImageSource, ItemId, ItemKind, PlacedItem, PlacementSection, Point,
};
use zoon::Signal;

#[derive(Clone)]
pub struct Corkboard {
    /// Placed items in insertion order
    pub items: ActorVec<PlacedItem>,
    /// Canvas background, `None` for the plain cork look
    pub background: Actor<Option<ImageSource>>,

    // === TOOLBAR & CANVAS EVENTS ===
    pub note_added_relay: Relay,
    pub canvas_cleared_relay: Relay,
    pub stickers_cleared_relay: Relay,
    pub timer_requested_relay: Relay,
    pub background_selected_relay: Relay<ImageSource>,
    pub stickers_uploaded_relay: Relay<Vec<ImageSource>>,
    pub library_sticker_dropped_relay: Relay<(String, Point)>,

    // === ITEM EVENTS (sent through the methods below) ===
    item_removed_relay: Relay<ItemId>,
    item_moved_relay: Relay<(ItemId, Point)>,
    note_edited_relay: Relay<(ItemId, String)>,
}

impl Corkboard {
    pub fn new(config: &BoardConfig) -> Self {
        let (note_added_relay, mut note_added_stream) = relay::<()>();
        let (canvas_cleared_relay, mut canvas_cleared_stream) = relay::<()>();
        let (stickers_cleared_relay, mut stickers_cleared_stream) = relay::<()>();
        let (timer_requested_relay, mut timer_requested_stream) = relay::<()>();
        let (background_selected_relay, mut background_selected_stream) = relay::<ImageSource>();
        let (stickers_uploaded_relay, mut stickers_uploaded_stream) = relay::<Vec<ImageSource>>();
        let (library_sticker_dropped_relay, mut library_sticker_dropped_stream) =
            relay::<(String, Point)>();
        let (item_removed_relay, mut item_removed_stream) = relay::<ItemId>();
        let (item_moved_relay, mut item_moved_stream) = relay::<(ItemId, Point)>();
        let (note_edited_relay, mut note_edited_stream) = relay::<(ItemId, String)>();

        let (background_changed_relay, mut background_changed_stream) =
            relay::<Option<ImageSource>>();

        let background = Actor::new(None, async move |state| {
            while let Some(background) = background_changed_stream.next().await {
                state.set_neq(background);
            }
        });

        let placement = config.placement.clone();
        let items = ActorVec::new(vec![], async move |items_handle| {
            let mut board = BoardMirror::new(items_handle, placement);
            let mut published_background: Option<ImageSource> = None;

            loop {
                select! {
                    event = note_added_stream.next() => {
                        match event {
                            Some(()) => board.add_note(),
                            None => break,
                        }
                    }
                    event = canvas_cleared_stream.next() => {
                        match event {
                            Some(()) => board.clear(),
                            None => break,
                        }
                    }
                    event = stickers_cleared_stream.next() => {
                        match event {
                            Some(()) => board.clear_stickers(),
                            None => break,
                        }
                    }
                    event = timer_requested_stream.next() => {
                        match event {
                            Some(()) => board.add_timer(),
                            None => break,
                        }
                    }
                    event = background_selected_stream.next() => {
                        match event {
                            Some(image) => board.set_background(image),
                            None => break,
                        }
                    }
                    event = stickers_uploaded_stream.next() => {
                        match event {
                            Some(images) => board.add_uploaded_stickers(images),
                            None => break,
                        }
                    }
                    event = library_sticker_dropped_stream.next() => {
                        match event {
                            Some((src, position)) => board.add_library_sticker(src, position),
                            None => break,
                        }
                    }
                    event = item_removed_stream.next() => {
                        match event {
                            Some(item_id) => board.remove(item_id),
                            None => break,
                        }
                    }
                    event = item_moved_stream.next() => {
                        match event {
                            Some((item_id, position)) => board.commit_position(item_id, position),
                            None => break,
                        }
                    }
                    event = note_edited_stream.next() => {
                        match event {
                            Some((item_id, text)) => board.edit_note(item_id, text),
                            None => break,
                        }
                    }
                }

                let current_background = board.background();
                if current_background != published_background {
                    published_background = current_background.clone();
                    background_changed_relay.send(current_background);
                }
            }
        });

        Self {
            items,
            background,
            note_added_relay,
            canvas_cleared_relay,
            stickers_cleared_relay,
            timer_requested_relay,
            background_selected_relay,
            stickers_uploaded_relay,
            library_sticker_dropped_relay,
            item_removed_relay,
            item_moved_relay,
            note_edited_relay,
        }
    }

    /// Delete button of a note, close button of a timer.
    pub fn remove_item(&self, item_id: ItemId) {
        self.item_removed_relay.send(item_id);
    }

    /// Record where a drag gesture left the item.
    pub fn commit_position(&self, item_id: ItemId, position: Point) {
        self.item_moved_relay.send((item_id, position));
    }

    pub fn edit_note(&self, item_id: ItemId, text: String) {
        self.note_edited_relay.send((item_id, text));
    }

    pub fn sticker_count_signal(&self) -> impl Signal<Item = usize> + Unpin + use<> {
        self.items
            .signal_ref(|items| items.iter().filter(|item| item.is_sticker()).count())
    }
}

/// The Board model plus the rendered list that must follow it.
struct BoardMirror {
    board: Board,
    rendered: ActorVecHandle<PlacedItem>,
    placement: PlacementSection,
}

impl BoardMirror {
    fn new(rendered: ActorVecHandle<PlacedItem>, placement: PlacementSection) -> Self {
        Self { board: Board::new(), rendered, placement }
    }

    fn place(&mut self, kind: ItemKind, position: Point) {
        let item = self.board.add(kind, position).clone();
        zoon::println!("Placed {} at ({}, {})", item.id, position.x, position.y);
        self.rendered.push_cloned(item);
    }

    fn add_note(&mut self) {
        self.place(ItemKind::Note { text: String::new() }, self.placement.note);
    }

    fn add_timer(&mut self) {
        self.place(ItemKind::Timer, self.placement.timer);
    }

    fn add_uploaded_stickers(&mut self, images: Vec<ImageSource>) {
        for image in images {
            self.place(ItemKind::Sticker { image }, self.placement.sticker);
        }
    }

    fn add_library_sticker(&mut self, src: String, position: Point) {
        self.place(ItemKind::Sticker { image: ImageSource::Library { src } }, position);
    }

    fn remove(&mut self, item_id: ItemId) {
        match self.board.remove(item_id) {
            Ok(item) => {
                if let Some(image) = item.uploaded_image() {
                    release_image(image);
                }
                self.rendered.retain(|rendered| rendered.id != item_id);
            }
            Err(error) => zoon::eprintln!("Cannot remove item: {error}"),
        }
    }

    fn clear(&mut self) {
        let clearance = self.board.clear();
        clearance
            .items
            .iter()
            .filter_map(PlacedItem::uploaded_image)
            .for_each(release_image);
        if let Some(background) = &clearance.background {
            release_image(background);
        }
        self.rendered.clear();
        zoon::println!("Canvas cleared ({} items)", clearance.items.len());
    }

    fn clear_stickers(&mut self) {
        let removed = self.board.clear_stickers();
        removed
            .iter()
            .filter_map(PlacedItem::uploaded_image)
            .for_each(release_image);
        let unrendered = self.rendered.retain(|item| !item.is_sticker());
        zoon::println!("Cleared {} stickers", unrendered);
    }

    fn set_background(&mut self, image: ImageSource) {
        if let Some(replaced) = self.board.set_background(image) {
            release_image(&replaced);
        }
    }

    fn commit_position(&mut self, item_id: ItemId, position: Point) {
        if let Err(error) = self.board.move_item(item_id, position) {
            zoon::eprintln!("Cannot record position: {error}");
        }
    }

    fn edit_note(&mut self, item_id: ItemId, text: String) {
        if let Err(error) = self.board.edit_note(item_id, text) {
            zoon::eprintln!("Cannot edit note: {error}");
        }
    }

    fn background(&self) -> Option<ImageSource> {
        self.board.background().cloned()
    }
}
