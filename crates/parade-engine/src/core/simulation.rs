//! Headless host: drives a `MotionEngine` on virtual time.
//!
//! Plays the role a browser plays for the WASM build: it keeps a
//! fixed-interval timer and a frame callback, arms and disarms them as the
//! engine requests, and never runs either while it is disarmed. Frames are
//! spaced `frame_ms` apart; the tick timer is derived from elapsed frame
//! time through a `TickAccumulator`.

use crate::api::engine::MotionEngine;
use crate::api::types::LoopRequest;
use crate::core::time::TickAccumulator;

pub struct Simulation {
    engine: MotionEngine,
    /// Virtual clock in milliseconds.
    now_ms: f64,
    /// Spacing between frame callbacks in milliseconds.
    frame_ms: f64,
    ticker: TickAccumulator,
    ticks_armed: bool,
    frames_armed: bool,
    ticks_run: u32,
    frames_run: u32,
}

impl Simulation {
    pub fn new(engine: MotionEngine, frame_ms: f64) -> Self {
        let ticker = TickAccumulator::new(engine.config().tick_interval());
        Self {
            engine,
            now_ms: 0.0,
            frame_ms,
            ticker,
            ticks_armed: false,
            frames_armed: false,
            ticks_run: 0,
            frames_run: 0,
        }
    }

    pub fn pointer_enter(&mut self) -> LoopRequest {
        let request = self.engine.interaction_start();
        self.apply(request);
        request
    }

    pub fn pointer_leave(&mut self) -> LoopRequest {
        let request = self.engine.interaction_end();
        self.apply(request);
        request
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.engine.pointer_moved(x, y);
    }

    fn apply(&mut self, request: LoopRequest) {
        if request.start_ticks && !self.ticks_armed {
            self.ticks_armed = true;
            self.ticker.reset();
        }
        if request.stop_ticks {
            self.ticks_armed = false;
        }
        if request.start_frames {
            self.frames_armed = true;
        }
    }

    /// Advance virtual time by `ms`, firing every armed callback that falls due.
    pub fn advance(&mut self, ms: f64) {
        let end = self.now_ms + ms;
        while self.now_ms + self.frame_ms <= end + 1e-9 {
            self.now_ms += self.frame_ms;
            self.step();
        }
        self.now_ms = self.now_ms.max(end);
    }

    /// Advance frame by frame until the engine goes idle or `limit_ms` passes.
    /// Returns whether the engine went idle.
    pub fn run_until_idle(&mut self, limit_ms: f64) -> bool {
        let end = self.now_ms + limit_ms;
        while self.now_ms < end {
            if !self.frames_armed && !self.ticks_armed {
                return true;
            }
            self.now_ms += self.frame_ms;
            self.step();
        }
        !self.frames_armed && !self.ticks_armed
    }

    fn step(&mut self) {
        if self.ticks_armed {
            let due = self.ticker.accumulate(self.frame_ms / 1000.0);
            for _ in 0..due {
                self.ticks_run += 1;
                if !self.engine.tick().is_continue() {
                    self.ticks_armed = false;
                    break;
                }
            }
        }
        if self.frames_armed {
            self.frames_run += 1;
            if !self.engine.frame(self.now_ms).is_continue() {
                self.frames_armed = false;
            }
        }
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn ticks_run(&self) -> u32 {
        self.ticks_run
    }

    pub fn frames_run(&self) -> u32 {
        self.frames_run
    }
}
