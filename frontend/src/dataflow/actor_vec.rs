//! Collection Actor
//!
//! ActorVec wraps a `MutableVec<T>`; only its processor task mutates it, and
//! views bind to the VecDiff signal so that adding or removing one item never
//! re-renders the others.

use zoon::{MutableVec, Signal, SignalVecExt, SignalExt, Task, TaskHandle};
use std::future::Future;
use std::sync::Arc;

/// Insertion-ordered collection owned by one sequential processor task.
///
/// # Examples
///
/// ```rust
/// let (note_added_relay, mut note_added_stream) = relay();
///
/// let items = ActorVec::new(vec![], async move |items_handle| {
///     while let Some(()) = note_added_stream.next().await {
///         items_handle.push_cloned(board.add(note(), position).clone());
///     }
/// });
///
/// RawHtmlEl::new("div").children_signal_vec(items.signal_vec().map(item_view))
/// ```
#[derive(Clone, Debug)]
pub struct ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    vec: MutableVec<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_items: Vec<T>, processor: F) -> Self
    where
        F: FnOnce(ActorVecHandle<T>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let vec = MutableVec::new_with_values(initial_items);
        let vec_handle = ActorVecHandle {
            mutable_vec: vec.clone(),
        };
        let task_handle = Arc::new(Task::start_droppable(processor(vec_handle)));
        Self { vec, task_handle }
    }

    /// VecDiff signal for binding children.
    pub fn signal_vec(&self) -> impl zoon::SignalVec<Item = T> + Unpin + use<T> {
        self.vec.signal_vec_cloned()
    }

    /// Derived value over the whole collection, deduplicated.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + Unpin + use<T, U, F>
    where
        U: PartialEq + Copy + 'static,
        F: Fn(&[T]) -> U + Unpin + 'static,
    {
        self.vec
            .signal_vec_cloned()
            .to_signal_cloned()
            .map(move |vec| f(&vec))
            .dedupe()
    }
}

/// Mutation access, handed only to the ActorVec's processor.
pub struct ActorVecHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    mutable_vec: MutableVec<T>,
}

impl<T> ActorVecHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn push_cloned(&self, item: T) {
        self.mutable_vec.lock_mut().push_cloned(item);
    }

    /// Keep only matching items; returns how many were removed.
    pub fn retain<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut vec_guard = self.mutable_vec.lock_mut();
        let initial_len = vec_guard.len();
        vec_guard.retain(|item| f(item));
        initial_len - vec_guard.len()
    }

    pub fn clear(&self) {
        self.mutable_vec.lock_mut().clear();
    }
}
