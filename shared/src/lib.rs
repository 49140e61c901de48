//! Target-independent corkboard core shared by the frontend and backend.
//!
//! Everything here is plain data and state machines: no DOM, no timers, no
//! async. The frontend plugs browser listeners and tick tasks into the
//! generic handle parameters of [`DragController`] and [`CountdownTimer`].

pub mod board;
pub mod config;
pub mod countdown;
pub mod drag;
pub mod error;
pub mod geometry;

pub use board::{Board, BoardClearance, ImageSource, ItemId, ItemKind, PlacedItem};
pub use config::{BoardConfig, LibrarySticker, PlacementSection, TimerSection};
pub use countdown::{CountdownTimer, TickGeneration, TickOutcome, TimerPhase};
pub use drag::{DragController, ReleasedGesture};
pub use error::{BoardError, ConfigError, TimeInputError};
pub use geometry::{Bounds, Point, Size};
