use crate::constants::{CLICK_SOUND_SELECTOR, SOUND_TOGGLE_ID};
use crate::dom::{self, EventListener};
use crate::storage::BrowserStore;
use folio_core::{AudioInit, SiteError, SiteResult, SoundKind, SoundPreference, ToneEnvelope};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// UI sound state: the persisted preference and a lazily created context.
pub struct SoundBoard {
    preference: SoundPreference,
    store: BrowserStore,
    context: AudioInit<web::AudioContext>,
    button: Option<web::Element>,
}

impl SoundBoard {
    pub fn new(document: &web::Document) -> Self {
        let store = BrowserStore::open();
        let board = Self {
            preference: SoundPreference::load(&store),
            store,
            context: AudioInit::default(),
            button: document.get_element_by_id(SOUND_TOGGLE_ID),
        };
        board.render_icon();
        board
    }

    pub fn toggle(&mut self) -> bool {
        let on = self.preference.toggle(&mut self.store);
        self.render_icon();
        log::info!("[sound] {}", self.preference.stored_value());
        on
    }

    /// Create the audio context if this is the first user gesture.
    pub fn ensure_context(&mut self) -> bool {
        self.context.get_or_try_init(create_context).is_some()
    }

    /// One short UI tone. Silent when sound is off or audio is unavailable.
    pub fn play(&mut self, kind: SoundKind) {
        if !self.preference.enabled() {
            return;
        }
        let Some(ctx) = self.context.get_or_try_init(create_context) else {
            return;
        };
        if let Err(e) = play_tone(ctx, kind.frequency_hz(), ToneEnvelope::UI) {
            log::debug!("[sound] playback error: {:?}", e);
        }
    }

    fn render_icon(&self) {
        if let Some(b) = &self.button {
            b.set_text_content(Some(self.preference.icon()));
        }
    }
}

fn create_context() -> SiteResult<web::AudioContext> {
    web::AudioContext::new().map_err(|e| SiteError::AudioUnavailable(format!("{:?}", e)))
}

// Sine one-shot with an exponential gain decay, then stop.
fn play_tone(
    audio_ctx: &web::AudioContext,
    frequency_hz: f32,
    envelope: ToneEnvelope,
) -> Result<(), JsValue> {
    let osc = audio_ctx.create_oscillator()?;
    osc.set_type(web::OscillatorType::Sine);
    let gain = audio_ctx.create_gain()?;
    let now = audio_ctx.current_time();
    let end = now + envelope.duration_sec;
    osc.frequency().set_value_at_time(frequency_hz, now)?;
    gain.gain().set_value_at_time(envelope.start_gain, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(envelope.end_gain, end)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&audio_ctx.destination())?;
    osc.start_with_when(now)?;
    osc.stop_with_when(end)?;
    Ok(())
}

/// First-click context creation, the toggle button and `[data-sound="click"]` elements.
pub fn wire(
    document: &web::Document,
    board: &Rc<RefCell<SoundBoard>>,
) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::new();

    let first_click = board.clone();
    listeners.push(EventListener::new(document, "click", move |_| {
        first_click.borrow_mut().ensure_context();
    })?);

    let toggle = board.clone();
    if let Some(l) = dom::add_click_listener(document, SOUND_TOGGLE_ID, move || {
        let mut b = toggle.borrow_mut();
        if b.toggle() {
            b.play(SoundKind::Toggle);
        }
    }) {
        listeners.push(l);
    }

    for el in dom::query_all(document, CLICK_SOUND_SELECTOR) {
        let click = board.clone();
        listeners.push(EventListener::new(&el, "click", move |_| {
            click.borrow_mut().play(SoundKind::Click);
        })?);
    }
    Ok(listeners)
}
