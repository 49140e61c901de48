//! Local UI state Atom
//!
//! For state that belongs to one widget and no domain cares about, such as
//! the text currently typed into a timer field.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;

#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    setter: Relay<T>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + PartialEq + 'static,
{
    pub fn new(initial: T) -> Self {
        let (setter, mut setter_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(new_value) = setter_stream.next().await {
                state.set_neq(new_value);
            }
        });

        Self { actor, setter }
    }

    pub fn set(&self, value: T) {
        self.setter.send(value);
    }

    /// Current value, for event handlers that need a snapshot (a button
    /// press reading the field it sits next to).
    pub fn get_cloned(&self) -> T {
        self.actor.state.lock_ref().clone()
    }
}
