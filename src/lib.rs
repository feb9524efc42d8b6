#![cfg(target_arch = "wasm32")]
use crate::audio::{AudioRig, SpectrumAnalyzer};
use crate::constants::CANVAS_ID;
use crate::core::camera::{Camera, OrbitControls};
use crate::core::config::AppConfig;
use crate::core::scene::Scene;
use crate::core::visualizer::Visualizer;
use crate::error::InitError;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod overlay;
#[cfg(feature = "dev-panel")]
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("audio-sphere starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Audio graph, falling back to a silent analyser when WebAudio is missing.
fn build_audio(cfg: &AppConfig) -> (Option<Rc<AudioRig>>, SpectrumAnalyzer) {
    match AudioRig::build(cfg.volume) {
        Ok(rig) => {
            let analyzer = rig.analyzer();
            rig.load(&cfg.track_url);
            (Some(Rc::new(rig)), analyzer)
        }
        Err(e) => {
            log::warn!("[audio] unavailable, visualizing silence: {:?}", e);
            (None, SpectrumAnalyzer::silent())
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(InitError::NoEnvironment("window"))?;
    let document = window
        .document()
        .ok_or(InitError::NoEnvironment("document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(InitError::MissingElement(CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| InitError::NotACanvas(CANVAS_ID))?;

    if !dom::webgpu_available(&window) {
        overlay::show_unsupported(&document);
        return Err(InitError::GraphicsUnavailable.into());
    }

    let cfg = AppConfig::from_query(&dom::location_query(&window));
    log::info!(
        "[init] ball={} volume={:.2} smoothing={} track={}",
        cfg.initial_ball.name(),
        cfg.volume,
        cfg.smoothing.is_some(),
        cfg.track_url
    );

    // Maintain canvas internal pixel size to match CSS size * capped pixel ratio
    let viewport = dom::sync_canvas_backing_size(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let gpu = match frame::init_gpu(&canvas).await {
        Ok(g) => g,
        Err(e) => {
            overlay::show_unsupported(&document);
            return Err(InitError::Renderer(format!("{:?}", e)).into());
        }
    };

    let mut scene = Scene::new(cfg.initial_ball);
    let (audio, analyzer) = build_audio(&cfg);
    let visualizer = Visualizer::new(analyzer, &mut scene).with_smoothing(cfg.smoothing);

    let camera = Camera::new(viewport.map(|v| v.aspect()).unwrap_or(1.0));
    let controls = Rc::new(RefCell::new(OrbitControls::new(&camera)));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controls: controls.clone(),
        drag: Rc::new(RefCell::new(events::pointer::DragState::default())),
        audio,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        visualizer,
        camera,
        controls,
        canvas,
        document.clone(),
        gpu,
    )));
    events::wire_resize(frame_ctx.clone());

    #[cfg(feature = "dev-panel")]
    if let Err(e) = panel::build(&document, frame_ctx.clone()) {
        log::warn!("[panel] could not build dev panel: {:?}", e);
    }

    frame::start_loop(frame_ctx);
    Ok(())
}
