use crate::core::viewport::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn add_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current CSS size of the canvas and the window's pixel density.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let w = web::window()?;
    let rect = canvas.get_bounding_client_rect();
    Some(Viewport::new(
        rect.width(),
        rect.height(),
        w.device_pixel_ratio(),
    ))
}

/// Match the canvas backing store to its CSS size times the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let viewport = canvas_viewport(canvas)?;
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Some(viewport)
}

/// WebGPU is exposed as `navigator.gpu`.
pub fn webgpu_available(window: &web::Window) -> bool {
    let navigator = window.navigator();
    js_sys::Reflect::get(&navigator, &"gpu".into())
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

pub fn location_query(window: &web::Window) -> String {
    window.location().search().unwrap_or_default()
}
