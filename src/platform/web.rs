//! Browser entry point
//!
//! The canvas renderer, starfield and identity picker live in JavaScript.
//! They drive the game through [`WebGame`]: forward taps and key presses to
//! `activate`, call `frame` from `requestAnimationFrame`, draw `snapshot`,
//! and play effects from `takeEvents`.

use wasm_bindgen::prelude::*;

use crate::persistence::LocalStorageStore;
use crate::session::Session;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Kokky Flight (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// New idle game with a random course
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        let seed = rand::random::<u64>();
        let session = Session::new(seed, Tuning::default(), LocalStorageStore::new())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { session })
    }

    /// Returns false when no identity has been chosen yet
    pub fn activate(&mut self) -> bool {
        self.session.activate()
    }

    #[wasm_bindgen(js_name = acceptsInput)]
    pub fn accepts_input(&self) -> bool {
        self.session.accepts_input()
    }

    #[wasm_bindgen(js_name = setIdentity)]
    pub fn set_identity(&mut self, token: &str) {
        self.session.set_identity(token);
    }

    /// Advance by one animation frame (`elapsed` in seconds)
    pub fn frame(&mut self, elapsed: f32) -> u32 {
        self.session.frame(elapsed)
    }

    /// Current frame as JSON
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_default()
    }

    /// Events since the last call as a JSON array (flaps, crashes, new bests)
    #[wasm_bindgen(js_name = takeEvents)]
    pub fn take_events(&mut self) -> String {
        serde_json::to_string(&self.session.take_events()).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = hudText)]
    pub fn hud_text(&self) -> String {
        self.session.snapshot().hud_text()
    }
}
