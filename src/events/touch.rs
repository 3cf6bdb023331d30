use super::{dispatch, EventClosure};
use crate::frame::SharedView;
use crate::input;
use hexfield_core::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn on_touch_start(view: &SharedView) -> EventClosure {
    let view = view.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(touch) = ev.dyn_ref::<web::TouchEvent>() {
            dispatch(&view, &ev, input::touch_start(touch));
        }
    }) as Box<dyn FnMut(_)>)
}

pub(super) fn on_touch_move(view: &SharedView) -> EventClosure {
    let view = view.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(touch) = ev.dyn_ref::<web::TouchEvent>() {
            dispatch(&view, &ev, input::touch_move(touch));
        }
    }) as Box<dyn FnMut(_)>)
}

pub(super) fn on_touch_end(view: &SharedView) -> EventClosure {
    let view = view.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        dispatch(&view, &ev, InputEvent::TouchEnd);
    }) as Box<dyn FnMut(_)>)
}
