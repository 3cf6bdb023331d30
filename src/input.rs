// DOM event → controller input translation.
use glam::DVec2;
use hexfield_core::{InputEvent, Key, MouseButton};
use web_sys as web;

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Page coordinates of every active touch, in list order.
pub fn touch_points(ev: &web::TouchEvent) -> Vec<DVec2> {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| DVec2::new(t.page_x() as f64, t.page_y() as f64))
        .collect()
}

pub fn mouse_down(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::PointerDown {
        button: MouseButton::from_dom_index(ev.button()),
        pos: client_pos(ev),
    }
}

pub fn mouse_move(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::PointerMove { pos: client_pos(ev) }
}

pub fn wheel(ev: &web::WheelEvent) -> InputEvent {
    InputEvent::Wheel {
        delta_y: ev.delta_y(),
    }
}

pub fn key_down(ev: &web::KeyboardEvent) -> InputEvent {
    InputEvent::KeyDown {
        key: Key::from_dom_key(&ev.key()),
    }
}

pub fn touch_start(ev: &web::TouchEvent) -> InputEvent {
    InputEvent::TouchStart {
        touches: touch_points(ev),
    }
}

pub fn touch_move(ev: &web::TouchEvent) -> InputEvent {
    InputEvent::TouchMove {
        touches: touch_points(ev),
    }
}
