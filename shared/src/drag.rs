//! Per-item drag gesture state machine.
//!
//! `L` is the gesture's listener guard: whatever keeps the global move and
//! release listeners registered. The controller owns at most one guard, and
//! a gesture's guard leaves the controller exactly once, on release (or is
//! dropped when a new press supersedes a lost release).

use crate::geometry::{Bounds, Point, Size};

#[derive(Debug)]
pub struct DragController<L> {
    state: DragState<L>,
}

#[derive(Debug)]
enum DragState<L> {
    Idle,
    Dragging(Gesture<L>),
}

#[derive(Debug)]
struct Gesture<L> {
    /// Press point relative to the item's top-left corner.
    grab_offset: Point,
    last_position: Option<Point>,
    listeners: L,
}

/// What a finished gesture hands back to the caller.
#[derive(Debug)]
pub struct ReleasedGesture<L> {
    pub listeners: L,
    /// Last clamped position written during the gesture; `None` for a click.
    pub final_position: Option<Point>,
}

impl<L> Default for DragController<L> {
    fn default() -> Self {
        Self { state: DragState::Idle }
    }
}

impl<L> DragController<L> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Idle → Dragging. `pointer` and `item_origin` are both client-space.
    ///
    /// A previous gesture that never saw its release is dropped before the
    /// new listeners are registered. If registration fails the controller
    /// stays Idle.
    pub fn press<E>(
        &mut self,
        pointer: Point,
        item_origin: Point,
        register: impl FnOnce() -> Result<L, E>,
    ) -> Result<(), E> {
        self.state = DragState::Idle;
        let listeners = register()?;
        self.state = DragState::Dragging(Gesture {
            grab_offset: pointer.offset_from(item_origin),
            last_position: None,
            listeners,
        });
        Ok(())
    }

    /// New clamped container-relative top-left for the dragged item, or
    /// `None` when no gesture is active.
    pub fn move_to(&mut self, pointer: Point, container: Bounds, item: Size) -> Option<Point> {
        let DragState::Dragging(gesture) = &mut self.state else {
            return None;
        };
        let top_left = container.to_local(pointer).offset_from(gesture.grab_offset);
        let position = container.clamp(top_left, item);
        gesture.last_position = Some(position);
        Some(position)
    }

    /// Dragging → Idle.
    pub fn release(&mut self) -> Option<ReleasedGesture<L>> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => None,
            DragState::Dragging(gesture) => Some(ReleasedGesture {
                listeners: gesture.listeners,
                final_position: gesture.last_position,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live listener registrations.
    struct ListenerGuard(Rc<Cell<usize>>);

    impl ListenerGuard {
        fn register(live: &Rc<Cell<usize>>) -> Result<Self, ()> {
            live.set(live.get() + 1);
            Ok(Self(live.clone()))
        }
    }

    impl Drop for ListenerGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    const CONTAINER: Bounds = Bounds::new(100.0, 50.0, 800.0, 600.0);
    const NOTE: Size = Size::new(200.0, 150.0);

    #[test]
    fn grab_offset_is_preserved_while_moving() {
        let live = Rc::new(Cell::new(0));
        let mut controller = DragController::new();

        // Item sits at container (40, 30) → client (140, 80); grabbed 15px in.
        controller
            .press(Point::new(155.0, 95.0), Point::new(140.0, 80.0), || {
                ListenerGuard::register(&live)
            })
            .unwrap();

        let moved = controller.move_to(Point::new(255.0, 195.0), CONTAINER, NOTE);
        assert_eq!(moved, Some(Point::new(140.0, 130.0)));
    }

    #[test]
    fn every_pointer_path_ends_inside_the_container() {
        let live = Rc::new(Cell::new(0));
        let mut controller = DragController::new();
        let path = [
            Point::new(-500.0, -500.0),
            Point::new(5000.0, 20.0),
            Point::new(300.0, 9000.0),
            Point::new(f64::NAN, 10.0),
            Point::new(101.0, 51.0),
            Point::new(2000.0, 2000.0),
        ];

        for start in [Point::new(100.0, 50.0), Point::new(850.0, 600.0)] {
            controller
                .press(start, start, || ListenerGuard::register(&live))
                .unwrap();
            for pointer in path {
                let position = controller.move_to(pointer, CONTAINER, NOTE).unwrap();
                assert!((0.0..=CONTAINER.width - NOTE.width).contains(&position.x));
                assert!((0.0..=CONTAINER.height - NOTE.height).contains(&position.y));
            }
            let released = controller.release().unwrap();
            let last = released.final_position.unwrap();
            assert!((0.0..=600.0).contains(&last.x));
            assert!((0.0..=450.0).contains(&last.y));
        }
    }

    #[test]
    fn release_hands_back_the_listeners() {
        let live = Rc::new(Cell::new(0));
        let mut controller = DragController::new();

        controller
            .press(Point::ORIGIN, Point::ORIGIN, || ListenerGuard::register(&live))
            .unwrap();
        assert!(controller.is_dragging());
        assert_eq!(live.get(), 1);

        let released = controller.release().unwrap();
        assert!(!controller.is_dragging());
        assert_eq!(released.final_position, None);
        drop(released);
        assert_eq!(live.get(), 0);

        assert!(controller.release().is_none());
        assert_eq!(controller.move_to(Point::ORIGIN, CONTAINER, NOTE), None);
    }

    #[test]
    fn repeated_drags_never_accumulate_listeners() {
        let live = Rc::new(Cell::new(0));
        let mut controller = DragController::new();

        for n in 0..10 {
            let pointer = Point::new(150.0 + n as f64, 100.0);
            controller
                .press(pointer, pointer, || ListenerGuard::register(&live))
                .unwrap();
            assert_eq!(live.get(), 1);
            controller.move_to(Point::new(400.0, 300.0), CONTAINER, NOTE);
            drop(controller.release());
            assert_eq!(live.get(), 0);
        }
    }

    #[test]
    fn press_without_release_replaces_the_stale_gesture() {
        let live = Rc::new(Cell::new(0));
        let mut controller = DragController::new();

        for _ in 0..3 {
            controller
                .press(Point::ORIGIN, Point::ORIGIN, || ListenerGuard::register(&live))
                .unwrap();
            assert_eq!(live.get(), 1);
        }
    }

    #[test]
    fn failed_registration_leaves_controller_idle() {
        let mut controller: DragController<ListenerGuard> = DragController::new();
        let result = controller.press(Point::ORIGIN, Point::ORIGIN, || Err("no window"));
        assert_eq!(result, Err("no window"));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn items_drag_independently() {
        let live = Rc::new(Cell::new(0));
        let mut note = DragController::new();
        let mut sticker: DragController<ListenerGuard> = DragController::new();

        note.press(Point::new(120.0, 70.0), Point::new(110.0, 60.0), || {
            ListenerGuard::register(&live)
        })
        .unwrap();

        assert!(note.is_dragging());
        assert!(!sticker.is_dragging());
        assert_eq!(sticker.move_to(Point::new(300.0, 300.0), CONTAINER, NOTE), None);
        assert!(sticker.release().is_none());
        assert_eq!(live.get(), 1);
    }
}
