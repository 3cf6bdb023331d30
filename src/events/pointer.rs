use super::{dispatch, EventClosure};
use crate::frame::SharedView;
use crate::input;
use hexfield_core::InputEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-level move/up listeners, attached only during a mouse drag.
pub(super) struct DragTracking {
    document: web::EventTarget,
    on_move: js_sys::Function,
    on_up: js_sys::Function,
}

impl DragTracking {
    fn start(&self) {
        _ = self
            .document
            .add_event_listener_with_callback("mousemove", &self.on_move);
        _ = self
            .document
            .add_event_listener_with_callback("mouseup", &self.on_up);
    }

    pub(super) fn stop(&self) {
        _ = self
            .document
            .remove_event_listener_with_callback("mousemove", &self.on_move);
        _ = self
            .document
            .remove_event_listener_with_callback("mouseup", &self.on_up);
    }
}

pub(super) fn drag_tracking(
    document: &web::EventTarget,
    view: &SharedView,
    drag: &Rc<RefCell<Option<DragTracking>>>,
) -> (DragTracking, Vec<EventClosure>) {
    let move_view = view.clone();
    let on_move: EventClosure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            dispatch(&move_view, &ev, input::mouse_move(mouse));
        }
    }) as Box<dyn FnMut(_)>);

    let up_view = view.clone();
    let up_drag = drag.clone();
    let on_up: EventClosure = Closure::wrap(Box::new(move |ev: web::Event| {
        let response = dispatch(&up_view, &ev, InputEvent::PointerUp);
        if response.capture_ended {
            if let Some(tracking) = up_drag.borrow().as_ref() {
                tracking.stop();
            }
        }
    }) as Box<dyn FnMut(_)>);

    let tracking = DragTracking {
        document: document.clone(),
        on_move: on_move.as_ref().unchecked_ref::<js_sys::Function>().clone(),
        on_up: on_up.as_ref().unchecked_ref::<js_sys::Function>().clone(),
    };
    (tracking, vec![on_move, on_up])
}

pub(super) fn on_mouse_down(
    view: &SharedView,
    drag: &Rc<RefCell<Option<DragTracking>>>,
) -> EventClosure {
    let view = view.clone();
    let drag = drag.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let response = dispatch(&view, &ev, input::mouse_down(mouse));
        if response.capture_started {
            if let Some(tracking) = drag.borrow().as_ref() {
                tracking.start();
            }
        }
    }) as Box<dyn FnMut(_)>)
}

pub(super) fn on_wheel(view: &SharedView) -> EventClosure {
    let view = view.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() {
            dispatch(&view, &ev, input::wheel(wheel));
        }
    }) as Box<dyn FnMut(_)>)
}

pub(super) fn on_context_menu(view: &SharedView) -> EventClosure {
    let view = view.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        dispatch(&view, &ev, InputEvent::ContextMenu);
    }) as Box<dyn FnMut(_)>)
}
