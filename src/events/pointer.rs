use crate::audio::AudioRig;
use crate::constants::WHEEL_PIXELS_PER_NOTCH;
use crate::core::camera::OrbitControls;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub drag: Rc<RefCell<DragState>>,
    pub audio: Option<Rc<AudioRig>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "pointerdown", move |ev: web::PointerEvent| {
        // First gesture unlocks audio output
        if let Some(audio) = &w.audio {
            audio.resume();
        }
        {
            let mut ds = w.drag.borrow_mut();
            ds.active = true;
            ds.pointer_id = ev.pointer_id();
            ds.last_x = ev.client_x() as f32;
            ds.last_y = ev.client_y() as f32;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "pointermove", move |ev: web::PointerEvent| {
        let (dx, dy) = {
            let mut ds = w.drag.borrow_mut();
            if !ds.active || ds.pointer_id != ev.pointer_id() {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let delta = (x - ds.last_x, y - ds.last_y);
            ds.last_x = x;
            ds.last_y = y;
            delta
        };
        let height = w.canvas.client_height() as f32;
        w.controls.borrow_mut().rotate(dx, dy, height);
    });
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let target = w.canvas.clone();
        dom::add_listener(&target, event, move |ev: web::PointerEvent| {
            let mut ds = w.drag.borrow_mut();
            if ds.pointer_id == ev.pointer_id() {
                ds.active = false;
            }
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "wheel", move |ev: web::WheelEvent| {
        let notches = ev.delta_y() as f32 / WHEEL_PIXELS_PER_NOTCH;
        w.controls.borrow_mut().dolly(notches);
        ev.prevent_default();
    });
}
