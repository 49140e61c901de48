//! Event streaming Relay on top of unbounded channels

use futures::channel::mpsc::{unbounded, UnboundedSender, UnboundedReceiver};
use std::sync::{Arc, OnceLock};

/// Typed event channel from UI handlers (or tick tasks) into an Actor.
///
/// Relays are named after the event source, `{source}_{event}_relay`:
/// - `note_added_relay` - toolbar "Add Note" pressed
/// - `start_pressed_relay` - timer panel "Start" pressed
/// - `tick_elapsed_relay` - the timer's tick task fired
///
/// # Examples
///
/// ```rust
/// let (item_removed_relay, mut item_removed_stream) = relay::<ItemId>();
///
/// // UI side
/// item_removed_relay.send(item_id);
///
/// // Actor side
/// while let Some(item_id) = item_removed_stream.next().await {
///     board.remove(item_id);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T = ()>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

/// Relay sent from a second code location (debug builds only)
#[cfg(debug_assertions)]
#[derive(Debug, Clone)]
pub enum RelayError {
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Send an event. Dropped silently if the Actor is gone, which happens
    /// when a widget is removed while one of its tasks is still winding down.
    ///
    /// Debug builds panic when the same relay is sent from two different
    /// code locations.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(e) = self.check_single_source() {
            panic!("{:?}", e);
        }

        let _ = self.sender.unbounded_send(value);
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use shared::Point;

    #[tokio::test]
    async fn test_relay_delivers_in_order() {
        let (note_edited_relay, mut note_edited_stream) = relay::<String>();

        for text in ["buy milk", "call Sam"] {
            note_edited_relay.send(text.to_string());
        }

        assert_eq!(note_edited_stream.next().await.as_deref(), Some("buy milk"));
        assert_eq!(note_edited_stream.next().await.as_deref(), Some("call Sam"));
    }

    #[tokio::test]
    async fn test_relay_send_after_actor_gone_is_discarded() {
        let (item_moved_relay, mut item_moved_stream) = relay::<Point>();
        // One emit site, as in the drag release handler
        let commit_position = |position| item_moved_relay.send(position);

        commit_position(Point::new(50.0, 80.0));
        assert_eq!(item_moved_stream.next().await, Some(Point::new(50.0, 80.0)));

        drop(item_moved_stream);
        commit_position(Point::new(60.0, 90.0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "MultipleEmitters")]
    fn test_relay_rejects_second_emitter() {
        let (canvas_cleared_relay, _stream) = relay::<()>();
        canvas_cleared_relay.send(());
        canvas_cleared_relay.send(());
    }
}
