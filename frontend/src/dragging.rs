//! Pointer dragging of placed items
//!
//! Data flows: PointerDown on item → window pointermove/pointerup listeners →
//! `DragController` (clamped positions) → inline `left`/`top` → release commits
//! the final position to the Corkboard.

use crate::board::Corkboard;
use gloo_events::EventListener;
use shared::{Bounds, DragController, ItemId, Point, Size};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use zoon::events::{MouseButton, PointerDown};
use zoon::*;

/// The canvas element items are clamped into.
#[derive(Clone)]
pub struct ContainerHandle {
    element: web_sys::HtmlElement,
}

impl ContainerHandle {
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self { element }
    }

    /// Padding box of the canvas in viewport coordinates, the box absolutely
    /// positioned children are laid out in.
    pub fn bounds(&self) -> Bounds {
        let rect = self.element.get_bounding_client_rect();
        Bounds::new(
            rect.left() + f64::from(self.element.client_left()),
            rect.top() + f64::from(self.element.client_top()),
            f64::from(self.element.client_width()),
            f64::from(self.element.client_height()),
        )
    }
}

/// Window listeners of one gesture; dropping it detaches them.
pub struct GestureListeners {
    _pointer_move: EventListener,
    _pointer_up: EventListener,
    _pointer_cancel: EventListener,
}

type SharedController = Rc<RefCell<DragController<GestureListeners>>>;

/// Everything a live gesture needs, captured by the window listeners.
#[derive(Clone)]
struct Gesture {
    controller: Weak<RefCell<DragController<GestureListeners>>>,
    element: web_sys::HtmlElement,
    container: ContainerHandle,
    board: Corkboard,
    item_id: ItemId,
}

impl Gesture {
    fn listen(self) -> Result<GestureListeners, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let pointer_move = {
            let gesture = self.clone();
            EventListener::new(&window, "pointermove", move |event| {
                if let Some(event) = event.dyn_ref::<web_sys::PointerEvent>() {
                    gesture.moved(client_point(event));
                }
            })
        };
        let pointer_up = {
            let gesture = self.clone();
            EventListener::new(&window, "pointerup", move |_| gesture.released())
        };
        let pointer_cancel = EventListener::new(&window, "pointercancel", move |_| self.released());

        Ok(GestureListeners {
            _pointer_move: pointer_move,
            _pointer_up: pointer_up,
            _pointer_cancel: pointer_cancel,
        })
    }

    fn moved(&self, pointer: Point) {
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let item = Size::new(
            f64::from(self.element.offset_width()),
            f64::from(self.element.offset_height()),
        );
        let position = controller
            .borrow_mut()
            .move_to(pointer, self.container.bounds(), item);
        if let Some(position) = position {
            if let Err(error) = place(&self.element, position) {
                zoon::eprintln!("Failed to move {}: {error:?}", self.item_id);
            }
        }
    }

    fn released(&self) {
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let Some(released) = controller.borrow_mut().release() else {
            return;
        };
        if let Some(position) = released.final_position {
            self.board.commit_position(self.item_id, position);
        }
        // This listener is still running; free them once the dispatch returns.
        let listeners = released.listeners;
        wasm_bindgen_futures::spawn_local(async move { drop(listeners) });
    }
}

/// Absolutely position `raw_el` at `position` and make it follow the pointer.
pub fn make_draggable(
    raw_el: RawHtmlEl<web_sys::HtmlElement>,
    item_id: ItemId,
    position: Point,
    container: ContainerHandle,
    board: Corkboard,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let element = raw_el.dom_element();
    let controller: SharedController = Rc::new(RefCell::new(DragController::new()));

    raw_el
        .style("position", "absolute")
        .style("left", &px(position.x))
        .style("top", &px(position.y))
        .style("cursor", "move")
        .style("touch-action", "none")
        .style("user-select", "none")
        .event_handler(move |event: PointerDown| {
            if event.button() != MouseButton::Left {
                return;
            }
            event.prevent_default();

            let rect = element.get_bounding_client_rect();
            let pointer = Point::new(f64::from(event.x()), f64::from(event.y()));
            let item_origin = Point::new(rect.left(), rect.top());
            let gesture = Gesture {
                controller: Rc::downgrade(&controller),
                element: element.clone(),
                container: container.clone(),
                board: board.clone(),
                item_id,
            };

            let pressed = controller
                .borrow_mut()
                .press(pointer, item_origin, || gesture.listen());
            if let Err(error) = pressed {
                zoon::eprintln!("Cannot drag {item_id}: {error:?}");
            }
        })
}

/// Presses on text fields and buttons inside an item edit or click them
/// instead of starting a drag.
pub fn shield_from_drag<R: RawEl>(raw_el: R) -> R {
    raw_el.event_handler(|event: PointerDown| {
        event.stop_propagation();
    })
}

fn place(element: &web_sys::HtmlElement, position: Point) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("left", &px(position.x))?;
    style.set_property("top", &px(position.y))
}

fn client_point(event: &web_sys::PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn px(value: f64) -> String {
    format!("{value}px")
}
