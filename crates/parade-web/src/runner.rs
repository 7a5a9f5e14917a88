use parade_engine::{
    ConfigError, InputEvent, InputQueue, LoopControl, LoopRequest, MotionEngine, ParadeConfig,
};

/// Wires a `MotionEngine` to a browser host.
///
/// The host owns `setInterval` and `requestAnimationFrame`. Enter/leave are
/// dispatched immediately because their answer tells the host which timers
/// to arm; pointer moves are queued and drained at the start of the next
/// tick or frame.
pub struct ParadeRunner {
    engine: MotionEngine,
    input: InputQueue,
}

impl ParadeRunner {
    pub fn new(config: &ParadeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: MotionEngine::new(config)?,
            input: InputQueue::default(),
        })
    }

    /// Build from a JSON parade description.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(&ParadeConfig::from_json(json)?)
    }

    /// Push an input event; returns the loop request for enter/leave.
    pub fn push_input(&mut self, event: InputEvent) -> LoopRequest {
        match event {
            InputEvent::PointerMove { .. } => {
                self.input.push(event);
                LoopRequest::NONE
            }
            InputEvent::PointerEnter | InputEvent::PointerLeave => {
                // Samples queued before the transition still count.
                self.drain_input();
                self.engine.handle_input(event)
            }
        }
    }

    fn drain_input(&mut self) {
        for event in self.input.drain() {
            self.engine.handle_input(event);
        }
    }

    /// Interval callback. Returns whether to keep the interval armed.
    pub fn tick(&mut self) -> bool {
        self.drain_input();
        self.engine.tick() == LoopControl::Continue
    }

    /// Animation frame callback. Returns whether to request another frame.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.drain_input();
        self.engine.frame(now_ms) == LoopControl::Continue
    }

    // ---- Pointer accessors for zero-copy reads ----

    pub fn positions_ptr(&self) -> *const f32 {
        self.engine.snapshot().positions_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.engine.snapshot().len() as u32
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.engine.config().tick_interval_ms
    }

    pub fn engine_state(&self) -> u32 {
        self.engine.state().code()
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }
}
