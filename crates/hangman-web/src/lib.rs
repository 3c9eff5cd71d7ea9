//! Browser bindings for a single hangman session.
//!
//! wasm-bindgen cannot export a stateful struct with engine generics, so the
//! runner lives in a `thread_local!` and every export is a free function.
//! Exports called before `hangman_init` do nothing and return empty values.

pub mod runner;

pub use runner::{state_code, SessionRunner};

use std::cell::RefCell;

use hangman_engine::InputEvent;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("Session not initialized. Call hangman_init() first.");
                None
            }
        }
    })
}

/// Create the runner from a settings document and an optional display document.
/// Returns false when either document fails to parse.
#[wasm_bindgen]
pub fn hangman_init(settings_json: &str, display_json: &str, scenario_parts: u32, seed: u32) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match SessionRunner::from_json(settings_json, display_json, scenario_parts) {
        Ok(runner) => {
            let runner = runner.with_seed(seed as u64);
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("hangman: initialized");
            true
        }
        Err(err) => {
            log::warn!("hangman: invalid configuration: {err}");
            false
        }
    }
}

/// Add the phrase lists of a catalog document. Returns the number of lists added.
#[wasm_bindgen]
pub fn hangman_load_catalog(json: &str) -> u32 {
    with_runner(|r| match r.load_catalog(json) {
        Ok(added) => added as u32,
        Err(err) => {
            log::warn!("hangman: {err}");
            0
        }
    })
    .unwrap_or(0)
}

#[wasm_bindgen]
pub fn hangman_start() -> bool {
    with_runner(|r| r.start().is_ok()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn hangman_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Queue a guess for the next tick. `codepoint` is the pressed key's Unicode scalar value.
#[wasm_bindgen]
pub fn hangman_guess(codepoint: u32) {
    match InputEvent::from_codepoint(codepoint) {
        Some(event) => {
            with_runner(|r| r.push_input(event));
        }
        None => log::debug!("hangman: ignoring key {codepoint:#x}"),
    }
}

#[wasm_bindgen]
pub fn hangman_pause() {
    with_runner(|r| r.push_input(InputEvent::Pause));
}

#[wasm_bindgen]
pub fn hangman_resume() {
    with_runner(|r| r.push_input(InputEvent::Resume));
}

#[wasm_bindgen]
pub fn hangman_restart() {
    with_runner(|r| r.push_input(InputEvent::Restart));
}

#[wasm_bindgen]
pub fn hangman_force_finish() {
    with_runner(|r| r.push_input(InputEvent::ForceFinish));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_glyphs_ptr() -> *const f32 {
    with_runner(|r| r.glyphs_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_glyph_count() -> u32 {
    with_runner(|r| r.glyph_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_state() -> u32 {
    with_runner(|r| state_code(r.state())).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_elapsed_seconds() -> f64 {
    with_runner(|r| r.elapsed_seconds()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_lives_remaining() -> u32 {
    with_runner(|r| r.lives_remaining()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_hint() -> Option<String> {
    with_runner(|r| r.hint()).flatten()
}

#[wasm_bindgen]
pub fn get_theme() -> Option<String> {
    with_runner(|r| r.theme()).flatten()
}

#[wasm_bindgen]
pub fn get_letters() -> String {
    with_runner(|r| r.letters()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_masked_phrase() -> String {
    with_runner(|r| r.masked()).unwrap_or_default()
}
