use crate::error::BoardError;
use crate::geometry::Point;
use indexmap::IndexMap;
use std::fmt;

// ===== ITEM TYPES =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Where an image's displayable content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A preset asset from the sticker library.
    Library { src: String },
    /// A browser object URL minted from a user-selected file. Whoever destroys
    /// the last owner must revoke it.
    Uploaded { object_url: String },
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            ImageSource::Library { src } => src,
            ImageSource::Uploaded { object_url } => object_url,
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, ImageSource::Uploaded { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Note { text: String },
    Sticker { image: ImageSource },
    Timer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub id: ItemId,
    pub kind: ItemKind,
    /// Container-relative top-left corner.
    pub position: Point,
}

impl PlacedItem {
    pub fn is_sticker(&self) -> bool {
        matches!(self.kind, ItemKind::Sticker { .. })
    }

    /// The uploaded image this item keeps alive, if any.
    pub fn uploaded_image(&self) -> Option<&ImageSource> {
        match &self.kind {
            ItemKind::Sticker { image } if image.is_uploaded() => Some(image),
            _ => None,
        }
    }
}

// ===== BOARD =====

/// Everything a full-canvas clear destroyed.
#[derive(Debug, Default, PartialEq)]
pub struct BoardClearance {
    pub items: Vec<PlacedItem>,
    pub background: Option<ImageSource>,
}

/// The container's model: an insertion-ordered set of placed items plus an
/// optional background image.
#[derive(Debug, Default)]
pub struct Board {
    items: IndexMap<ItemId, PlacedItem>,
    background: Option<ImageSource>,
    next_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ItemKind, position: Point) -> &PlacedItem {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items
            .entry(id)
            .or_insert(PlacedItem { id, kind, position })
    }

    pub fn remove(&mut self, id: ItemId) -> Result<PlacedItem, BoardError> {
        self.items
            .shift_remove(&id)
            .ok_or(BoardError::ItemNotFound(id))
    }

    pub fn clear(&mut self) -> BoardClearance {
        BoardClearance {
            items: self.items.drain(..).map(|(_, item)| item).collect(),
            background: self.background.take(),
        }
    }

    /// Remove only image stickers; notes and timers keep their order.
    pub fn clear_stickers(&mut self) -> Vec<PlacedItem> {
        let mut removed = Vec::new();
        self.items.retain(|_, item| {
            if item.is_sticker() {
                removed.push(item.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Returns the background that was replaced.
    pub fn set_background(&mut self, image: ImageSource) -> Option<ImageSource> {
        self.background.replace(image)
    }

    pub fn background(&self) -> Option<&ImageSource> {
        self.background.as_ref()
    }

    pub fn move_item(&mut self, id: ItemId, position: Point) -> Result<(), BoardError> {
        let item = self.items.get_mut(&id).ok_or(BoardError::ItemNotFound(id))?;
        item.position = position;
        Ok(())
    }

    pub fn edit_note(&mut self, id: ItemId, new_text: String) -> Result<(), BoardError> {
        let item = self.items.get_mut(&id).ok_or(BoardError::ItemNotFound(id))?;
        match &mut item.kind {
            ItemKind::Note { text } => {
                *text = new_text;
                Ok(())
            }
            _ => Err(BoardError::NotANote(id)),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.values()
    }

    #[cfg(test)]
    fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.get(&id)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    fn sticker_count(&self) -> usize {
        self.items().filter(|item| item.is_sticker()).count()
    }
}
