//! Single-value Actor
//!
//! An Actor owns a `Mutable<T>` and the task that mutates it. Everything else
//! only reads it through signals and talks to it through Relays.

use zoon::{Mutable, Signal, Task, TaskHandle};
use std::future::Future;
use std::sync::Arc;

/// Single-value state owned by one sequential processor task.
///
/// The processor task lives as long as the last clone of the Actor. Dropping
/// the Actor aborts the task and drops whatever the task owns, which is how
/// a timer panel's tick source dies with its panel.
///
/// # Examples
///
/// ```rust
/// let (start_pressed_relay, mut start_pressed_stream) = relay();
///
/// let panel = Actor::new(TimerPanel::default(), async move |state| {
///     while let Some((minutes, seconds)) = start_pressed_stream.next().await {
///         state.set_neq(TimerPanel::running(minutes, seconds));
///     }
/// });
///
/// Text::with_signal(panel.signal_ref(|panel| panel.display.clone()))
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(super) state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start the processor with the initial state.
    ///
    /// The processor usually loops over `select!` on its relay streams. It
    /// may own `!Send` resources (DOM handles, tick tasks); the browser runs
    /// it on the single UI thread.
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    /// Derived signal without cloning the whole state.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + Unpin + use<T, U, F>
    where
        F: Fn(&T) -> U + Unpin + 'static,
    {
        self.state.signal_ref(f)
    }
}
