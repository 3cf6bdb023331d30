//! DOM listeners feeding the orbit controller.
//!
//! Mouse, wheel, touch and context-menu listeners sit on the document, the
//! key listener on the window. Move/up listeners are only attached while a
//! mouse drag is running. [`ControlsBinding::dispose`] removes all of them.

use crate::frame::{SharedView, View};
use hexfield_core::{EventResponse, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod keyboard;
mod pointer;
mod touch;

pub(crate) type EventClosure = Closure<dyn FnMut(web::Event)>;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: EventClosure,
}

impl Listener {
    fn attach(target: &web::EventTarget, kind: &'static str, closure: EventClosure) -> Self {
        // non-passive so wheel and touch handlers may call preventDefault
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Hand one translated event to the controller and apply its verdict to the
/// DOM event.
pub(crate) fn dispatch(view: &SharedView, ev: &web::Event, input: InputEvent) -> EventResponse {
    let response = {
        let mut guard = view.borrow_mut();
        let View { camera, controls } = &mut *guard;
        controls.handle_event(camera, &input)
    };
    if response.prevent_default {
        ev.prevent_default();
    }
    if response.stop_propagation {
        ev.stop_propagation();
    }
    response
}

pub struct ControlsBinding {
    view: SharedView,
    listeners: Vec<Listener>,
    drag: Rc<RefCell<Option<pointer::DragTracking>>>,
    // keeps the drag closures alive while their functions may be attached
    drag_closures: Vec<EventClosure>,
    disposed: bool,
}

impl ControlsBinding {
    pub fn attach(document: &web::Document, window: &web::Window, view: SharedView) -> Self {
        let doc: &web::EventTarget = document.as_ref();
        let drag = Rc::new(RefCell::new(None));
        let (tracking, drag_closures) = pointer::drag_tracking(doc, &view, &drag);
        *drag.borrow_mut() = Some(tracking);

        let listeners = vec![
            Listener::attach(doc, "contextmenu", pointer::on_context_menu(&view)),
            Listener::attach(doc, "mousedown", pointer::on_mouse_down(&view, &drag)),
            Listener::attach(doc, "wheel", pointer::on_wheel(&view)),
            Listener::attach(doc, "touchstart", touch::on_touch_start(&view)),
            Listener::attach(doc, "touchend", touch::on_touch_end(&view)),
            Listener::attach(doc, "touchmove", touch::on_touch_move(&view)),
            Listener::attach(window.as_ref(), "keydown", keyboard::on_key_down(&view)),
        ];
        log::info!("[controls] attached {} listeners", listeners.len());

        Self {
            view,
            listeners,
            drag,
            drag_closures,
            disposed: false,
        }
    }

    /// Remove every listener and stop the controller.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        if let Some(tracking) = self.drag.borrow_mut().take() {
            tracking.stop();
        }
        self.drag_closures.clear();
        self.view.borrow_mut().controls.dispose();
        self.disposed = true;
        log::info!("[controls] disposed");
    }
}

/// Dispose the binding when the page is unloaded for good. Pages kept in the
/// back/forward cache keep their listeners.
pub fn dispose_on_pagehide(window: &web::Window, binding: Rc<RefCell<ControlsBinding>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if !ev.persisted() {
            binding.borrow_mut().dispose();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
