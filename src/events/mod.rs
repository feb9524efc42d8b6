pub mod pointer;

use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use pointer::{wire_input_handlers, InputWiring};

/// Re-fit canvas, camera and render targets on every window resize.
pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        frame_ctx.borrow_mut().resize();
    });
}
