use crate::audio::SpectrumAnalyzer;
use crate::core::camera::{Camera, OrbitControls};
use crate::core::glitch::scene_glitch_factor;
use crate::core::params::{PanelParams, ParamChange};
use crate::core::scene::Scene;
use crate::core::stats::FrameStats;
use crate::core::visualizer::Visualizer;
use crate::core::SOFT_GLITCH_INITIAL;
use crate::dom;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub visualizer: Visualizer<SpectrumAnalyzer>,
    pub camera: Camera,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub params: PanelParams,
    pub stats: FrameStats,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: render::GpuState<'a>,

    pub started: Instant,
    pub last_instant: Instant,
    pub glitch_factor: f32,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: Scene,
        visualizer: Visualizer<SpectrumAnalyzer>,
        camera: Camera,
        controls: Rc<RefCell<OrbitControls>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: render::GpuState<'a>,
    ) -> Self {
        let params = PanelParams {
            ball: scene.active().unwrap_or(PanelParams::default().ball),
            ..PanelParams::default()
        };
        let now = Instant::now();
        Self {
            scene,
            visualizer,
            camera,
            controls,
            params,
            stats: FrameStats::new(),
            canvas,
            document,
            gpu,
            started: now,
            last_instant: now,
            glitch_factor: SOFT_GLITCH_INITIAL,
        }
    }

    /// One animation tick: audio uniforms, glitch level, camera, then draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = now - self.started;
        let time_sec = elapsed.as_secs_f32();

        self.scene.set_time(time_sec);
        self.visualizer.update_spike(&mut self.scene, dt_sec);
        self.visualizer.update_color(&mut self.scene, dt_sec);
        self.glitch_factor = scene_glitch_factor(&self.scene);

        self.controls.borrow_mut().update(&mut self.camera);

        if let Some(sample) = self.stats.update(elapsed.as_secs_f64() * 1000.0) {
            overlay::update_stats(&self.document, &sample);
        }

        match self
            .gpu
            .render(&self.scene, &self.camera, time_sec, self.glitch_factor)
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }

    /// Follow the canvas to its new CSS size.
    pub fn resize(&mut self) {
        let Some(viewport) = dom::sync_canvas_backing_size(&self.canvas) else {
            return;
        };
        self.camera.set_aspect(viewport.aspect());
        let (w, h) = viewport.backing_size();
        self.gpu.resize(w, h);
        log::info!(
            "[gpu] resized to {}x{} (pixel ratio {:.2})",
            w,
            h,
            viewport.pixel_ratio()
        );
    }

    pub fn params(&self) -> PanelParams {
        self.params
    }

    pub fn apply_param(&mut self, change: ParamChange) {
        self.params.apply(&mut self.scene, change);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
