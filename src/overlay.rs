use crate::constants::{CANVAS_ID, CONTAINER_ID, STATS_ID, UNSUPPORTED_MESSAGE};
use crate::core::stats::StatsSample;
use web_sys as web;

/// Replace the canvas with a static explanation. Used when rendering is impossible.
pub fn show_unsupported(document: &web::Document) {
    if let Some(canvas) = document.get_element_by_id(CANVAS_ID) {
        _ = canvas.set_attribute("style", "display:none");
    }
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        log::error!("missing #{}; cannot show unsupported message", CONTAINER_ID);
        return;
    };
    if let Ok(el) = document.create_element("div") {
        el.set_id("webgpu-error");
        el.set_text_content(Some(UNSUPPORTED_MESSAGE));
        _ = el.set_attribute(
            "style",
            "color: #cfe7ff; font: 15px system-ui; background: rgba(10, 14, 24, 0.9); \
             padding: 16px 20px; margin: 40px auto; max-width: 480px; border-radius: 6px; \
             border: 1px solid rgba(80, 110, 150, 0.35); text-align: center;",
        );
        _ = container.append_child(&el);
    }
}

/// Write the latest performance sample into the stats element, creating it on demand.
pub fn update_stats(document: &web::Document, sample: &StatsSample) {
    let el = match document.get_element_by_id(STATS_ID) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_id(STATS_ID);
            _ = el.set_attribute(
                "style",
                "position: fixed; top: 0; left: 0; color: #0ff; font: 11px monospace; \
                 background: rgba(0, 0, 32, 0.8); padding: 3px 6px; pointer-events: none;",
            );
            if let Some(body) = document.body() {
                _ = body.append_child(&el);
            }
            el
        }
    };
    el.set_text_content(Some(&format!(
        "{:.0} FPS ({:.0}-{:.0}) {:.1} ms",
        sample.fps, sample.min_fps, sample.max_fps, sample.frame_ms
    )));
}
