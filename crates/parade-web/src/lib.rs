//! WASM bridge for the parade motion engine.
//!
//! wasm-bindgen cannot export a stateful struct with host-driven callbacks
//! cleanly, so the runner lives in a `thread_local!` and every export goes
//! through `with_runner()`.
//!
//! Host contract:
//! - `parade_pointer_enter()` / `parade_pointer_leave()` return `LoopRequest`
//!   bits: 1 = arm the interval (`get_tick_interval_ms()`), 2 = clear it,
//!   4 = start requesting animation frames.
//! - `parade_tick()` returning false means clear the interval.
//! - `parade_frame(now)` returning false means stop requesting frames.
//! - After each frame, read `get_body_count()` × 2 floats from
//!   `get_positions_ptr()`.

pub mod runner;

pub use runner::ParadeRunner;

use std::cell::RefCell;

use parade_engine::{planet_parade, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ParadeRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut ParadeRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Parade not initialized. Call parade_init() first.");
        f(runner)
    })
}

fn install(runner: ParadeRunner) {
    let count = runner.body_count();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("parade: initialized with {} bodies", count);
}

fn init_host_hooks() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Initialize with the built-in nine-body planet parade.
#[wasm_bindgen]
pub fn parade_init() -> Result<(), JsValue> {
    init_host_hooks();
    let runner = ParadeRunner::new(&planet_parade()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(runner);
    Ok(())
}

/// Initialize from a JSON parade description.
#[wasm_bindgen]
pub fn parade_init_with_config(json: &str) -> Result<(), JsValue> {
    init_host_hooks();
    let runner = ParadeRunner::from_json(json).map_err(|e| {
        log::error!("parade: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    install(runner);
    Ok(())
}

#[wasm_bindgen]
pub fn parade_pointer_enter() -> u32 {
    with_runner(|r| r.push_input(InputEvent::PointerEnter).bits())
}

#[wasm_bindgen]
pub fn parade_pointer_leave() -> u32 {
    with_runner(|r| r.push_input(InputEvent::PointerLeave).bits())
}

#[wasm_bindgen]
pub fn parade_pointer_move(x: f64, y: f64) {
    with_runner(|r| {
        r.push_input(InputEvent::PointerMove { x, y });
    });
}

#[wasm_bindgen]
pub fn parade_tick() -> bool {
    with_runner(|r| r.tick())
}

#[wasm_bindgen]
pub fn parade_frame(now_ms: f64) -> bool {
    with_runner(|r| r.frame(now_ms))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_positions_ptr() -> *const f32 {
    with_runner(|r| r.positions_ptr())
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(|r| r.body_count())
}

#[wasm_bindgen]
pub fn get_tick_interval_ms() -> f64 {
    with_runner(|r| r.tick_interval_ms())
}

/// 0 = idle, 1 = active, 2 = returning.
#[wasm_bindgen]
pub fn get_engine_state() -> u32 {
    with_runner(|r| r.engine_state())
}
