use crate::core::playback::{LoadTicket, PlaybackSlot};
use crate::core::spectrum::{average_frequency, FrequencyFrame};
use crate::core::visualizer::FrequencySource;
use crate::core::{FFT_SIZE, FREQUENCY_BIN_COUNT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type SharedSlot = Rc<RefCell<PlaybackSlot<web::AudioBuffer>>>;

fn js_err(e: impl std::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// FFT view over the playback graph. Reports silence when no analyser exists.
pub struct SpectrumAnalyzer {
    analyser: Option<web::AnalyserNode>,
    scratch: RefCell<Vec<u8>>,
}

impl SpectrumAnalyzer {
    pub fn silent() -> Self {
        Self {
            analyser: None,
            scratch: RefCell::new(Vec::new()),
        }
    }

    fn new(analyser: web::AnalyserNode) -> Self {
        let bins = analyser.frequency_bin_count() as usize;
        Self {
            analyser: Some(analyser),
            scratch: RefCell::new(vec![0; bins]),
        }
    }
}

impl FrequencySource for SpectrumAnalyzer {
    fn average_frequency(&self) -> f32 {
        let Some(a) = &self.analyser else {
            return 0.0;
        };
        let mut buf = self.scratch.borrow_mut();
        a.get_byte_frequency_data(&mut buf);
        average_frequency(&buf)
    }

    fn frequency_data(&self, out: &mut FrequencyFrame) {
        match &self.analyser {
            Some(a) => a.get_byte_frequency_data(out),
            None => out.fill(0),
        }
    }
}

/// Playback graph: looping buffer source -> gain -> {destination, analyser}.
pub struct AudioRig {
    ctx: web::AudioContext,
    gain: web::GainNode,
    analyser: web::AnalyserNode,
    slot: SharedSlot,
    source: Rc<RefCell<Option<web::AudioBufferSourceNode>>>,
    abort: RefCell<Option<web::AbortController>>,
}

impl AudioRig {
    pub fn build(volume: f32) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err)?;
        // The listener sits on the ball at the origin
        ctx.listener().set_position(0.0, 0.0, 0.0);

        let gain = web::GainNode::new(&ctx).map_err(js_err)?;
        gain.gain().set_value(volume);
        let analyser = web::AnalyserNode::new(&ctx).map_err(js_err)?;
        analyser.set_fft_size(FFT_SIZE as u32);
        if analyser.frequency_bin_count() as usize != FREQUENCY_BIN_COUNT {
            anyhow::bail!(
                "analyser exposes {} bins, expected {}",
                analyser.frequency_bin_count(),
                FREQUENCY_BIN_COUNT
            );
        }
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(js_err)?;
        gain.connect_with_audio_node(&analyser).map_err(js_err)?;
        log::info!(
            "[audio] graph ready: fft={} bins={} volume={:.2}",
            FFT_SIZE,
            analyser.frequency_bin_count(),
            volume
        );

        Ok(Self {
            ctx,
            gain,
            analyser,
            slot: Rc::new(RefCell::new(PlaybackSlot::new())),
            source: Rc::new(RefCell::new(None)),
            abort: RefCell::new(None),
        })
    }

    pub fn analyzer(&self) -> SpectrumAnalyzer {
        SpectrumAnalyzer::new(self.analyser.clone())
    }

    /// Browsers keep a fresh context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    /// Start fetching and decoding `url` without waiting for it.
    ///
    /// Supersedes any load in flight. On success the buffer is published to
    /// the slot and starts looping; on failure the slot records it and the
    /// analyser keeps reporting silence.
    pub fn load(&self, url: &str) {
        self.cancel_load();
        let ticket = self.slot.borrow_mut().begin_load(url);
        let controller = web::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        *self.abort.borrow_mut() = controller;

        let ctx = self.ctx.clone();
        let gain = self.gain.clone();
        let slot = self.slot.clone();
        let source = self.source.clone();
        let url = url.to_string();
        spawn_local(async move {
            let result = fetch_and_decode(&ctx, &url, signal.as_ref()).await;
            finish_load(&ctx, &gain, &slot, &source, ticket, &url, result);
        });
    }

    /// Abort the fetch in flight and revoke its ticket.
    pub fn cancel_load(&self) {
        if let Some(c) = self.abort.borrow_mut().take() {
            c.abort();
        }
        if self.slot.borrow_mut().cancel() {
            log::info!("[audio] pending load cancelled");
        }
    }
}

fn finish_load(
    ctx: &web::AudioContext,
    gain: &web::GainNode,
    slot: &SharedSlot,
    source: &Rc<RefCell<Option<web::AudioBufferSourceNode>>>,
    ticket: LoadTicket,
    url: &str,
    result: anyhow::Result<web::AudioBuffer>,
) {
    match result {
        Ok(buffer) => {
            if !slot.borrow_mut().publish(ticket, buffer.clone()) {
                log::info!("[audio] dropping stale load of {}", url);
                return;
            }
            match start_looping(ctx, gain, &buffer) {
                Ok(node) => {
                    log::info!(
                        "[audio] playing {} ({:.1}s, looped)",
                        url,
                        buffer.duration()
                    );
                    if let Some(old) = source.borrow_mut().replace(node) {
                        _ = old.stop();
                    }
                }
                Err(e) => log::warn!("[audio] could not start playback: {:?}", e),
            }
        }
        Err(e) => {
            if slot.borrow_mut().fail(ticket, format!("{:?}", e)) {
                log::warn!("[audio] failed to load {}: {:?}", url, e);
            }
        }
    }
}

async fn fetch_and_decode(
    ctx: &web::AudioContext,
    url: &str,
    signal: Option<&web::AbortSignal>,
) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let init = web::RequestInit::new();
    init.set_signal(signal);
    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} fetching {}", resp.status(), url);
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let bytes: js_sys::ArrayBuffer = bytes.dyn_into().map_err(js_err)?;
    let decoded = JsFuture::from(ctx.decode_audio_data(&bytes).map_err(js_err)?)
        .await
        .map_err(js_err)?;
    decoded.dyn_into::<web::AudioBuffer>().map_err(js_err)
}

fn start_looping(
    ctx: &web::AudioContext,
    gain: &web::GainNode,
    buffer: &web::AudioBuffer,
) -> anyhow::Result<web::AudioBufferSourceNode> {
    let node = web::AudioBufferSourceNode::new(ctx).map_err(js_err)?;
    node.set_buffer(Some(buffer));
    node.set_loop(true);
    node.connect_with_audio_node(gain).map_err(js_err)?;
    node.start().map_err(js_err)?;
    Ok(node)
}
