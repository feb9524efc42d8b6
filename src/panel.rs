use crate::constants::PANEL_ID;
use crate::core::params::ParamChange;
use crate::core::scene::BallKind;
use crate::core::{SPIKE_AMP_RANGE, SPIKE_HEIGHT_RANGE, SPIKE_WIDTH_RANGE};
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: impl std::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Build the dev panel and route widget edits into the frame context.
pub fn build(
    document: &web::Document,
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
) -> anyhow::Result<()> {
    let params = frame_ctx.borrow().params();
    let panel = document.create_element("div").map_err(js_err)?;
    panel.set_id(PANEL_ID);
    _ = panel.set_attribute(
        "style",
        "position: fixed; top: 8px; right: 8px; color: #cfe7ff; font: 12px system-ui; \
         background: rgba(10, 14, 24, 0.85); padding: 8px 10px; border-radius: 6px; \
         display: grid; grid-template-columns: auto 140px; gap: 4px 8px; align-items: center;",
    );

    add_ball_select(document, &panel, params.ball, frame_ctx.clone())?;
    add_slider(document, &panel, "amp", params.amp, SPIKE_AMP_RANGE, frame_ctx.clone())?;
    add_slider(document, &panel, "width", params.width, SPIKE_WIDTH_RANGE, frame_ctx.clone())?;
    add_slider(document, &panel, "height", params.height, SPIKE_HEIGHT_RANGE, frame_ctx)?;

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    body.append_child(&panel).map_err(js_err)?;
    log::info!("[panel] dev panel attached");
    Ok(())
}

fn add_label(document: &web::Document, panel: &web::Element, text: &str) -> anyhow::Result<()> {
    let label = document.create_element("label").map_err(js_err)?;
    label.set_text_content(Some(text));
    panel.append_child(&label).map_err(js_err)?;
    Ok(())
}

fn add_ball_select(
    document: &web::Document,
    panel: &web::Element,
    current: BallKind,
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
) -> anyhow::Result<()> {
    add_label(document, panel, "ball")?;
    let select: web::HtmlSelectElement = document
        .create_element("select")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    for kind in BallKind::ALL {
        let option: web::HtmlOptionElement = document
            .create_element("option")
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        option.set_value(kind.name());
        option.set_text(kind.name().trim_end_matches("-ball"));
        option.set_selected(kind == current);
        select.append_child(&option).map_err(js_err)?;
    }
    let select_read = select.clone();
    dom::add_listener(&select, "change", move |_ev: web::Event| {
        apply(&frame_ctx, "ball", &select_read.value());
    });
    panel.append_child(&select).map_err(js_err)?;
    Ok(())
}

fn add_slider(
    document: &web::Document,
    panel: &web::Element,
    key: &'static str,
    value: f32,
    (min, max): (f32, f32),
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
) -> anyhow::Result<()> {
    add_label(document, panel, key)?;
    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    input.set_type("range");
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    input.set_step(&((max - min) / 1000.0).to_string());
    input.set_value(&value.to_string());
    let input_read = input.clone();
    dom::add_listener(&input, "input", move |_ev: web::Event| {
        apply(&frame_ctx, key, &input_read.value());
    });
    panel.append_child(&input).map_err(js_err)?;
    Ok(())
}

fn apply(frame_ctx: &Rc<RefCell<FrameContext<'static>>>, key: &str, raw: &str) {
    match ParamChange::parse(key, raw) {
        Some(change) => frame_ctx.borrow_mut().apply_param(change),
        None => log::warn!("[panel] ignoring {}={:?}", key, raw),
    }
}
