use super::{dispatch, EventClosure};
use crate::frame::SharedView;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys pan the view; everything else passes through untouched.
pub(super) fn on_key_down(view: &SharedView) -> EventClosure {
    let view = view.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(key) = ev.dyn_ref::<web::KeyboardEvent>() {
            dispatch(&view, &ev, input::key_down(key));
        }
    }) as Box<dyn FnMut(_)>)
}
