use glam::DVec2;

use crate::api::config::{ConfigError, MotionConfig, ParadeConfig};
use crate::api::types::{LoopControl, LoopRequest};
use crate::components::body::OrbitalBody;
use crate::core::time::FrameClock;
use crate::input::queue::InputEvent;
use crate::renderer::snapshot::{BodyPosition, PositionBuffer};
use crate::systems::integrator::run_frame;
use crate::systems::proximity::ProximityField;
use crate::systems::return_planner::{begin_returns, cancel_return};
use crate::systems::speed::run_speed_tick;

/// Externally visible session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No loops running; every body rests.
    Idle,
    /// Pointer present; tick and frame loops running.
    Active,
    /// Pointer gone; frame loop carrying bodies home, tick loop stopped.
    Returning,
}

impl EngineState {
    /// Numeric code for hosts that cannot read enums (WASM).
    pub fn code(self) -> u32 {
        match self {
            EngineState::Idle => 0,
            EngineState::Active => 1,
            EngineState::Returning => 2,
        }
    }
}

/// Internal phase. `ReturnPending` is the gap between the pointer leaving
/// and the next frame, whose timestamp anchors every trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Active,
    ReturnPending,
    Returning,
}

/// The motion session: owns the bodies and composes the speed scheduler,
/// angle integrator and return planner behind an idempotent state machine.
///
/// The host owns the actual timers. Transitions return a [`LoopRequest`]
/// saying which timers to arm or disarm; `tick` and `frame` return a
/// [`LoopControl`] saying whether to schedule the next callback.
pub struct MotionEngine {
    config: MotionConfig,
    bodies: Vec<OrbitalBody>,
    field: ProximityField,
    clock: FrameClock,
    snapshot: PositionBuffer,
    phase: Phase,
}

impl MotionEngine {
    /// Build a session with every body parked on its rest angle.
    pub fn new(config: &ParadeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let motion = config.motion.clone();
        let bodies: Vec<OrbitalBody> = config.bodies.iter().map(OrbitalBody::new).collect();

        let mut snapshot = PositionBuffer::with_capacity(bodies.len());
        snapshot.write(&bodies, motion.center);

        Ok(Self {
            field: ProximityField::new(motion.center, motion.influence_radius),
            clock: FrameClock::new(
                motion.max_frame_dt_ms / 1000.0,
                motion.nominal_frame_dt_ms / 1000.0,
            ),
            config: motion,
            bodies,
            snapshot,
            phase: Phase::Idle,
        })
    }

    // -- Transitions --

    /// Pointer entered (or touch began). Cancels any return in flight.
    pub fn interaction_start(&mut self) -> LoopRequest {
        match self.phase {
            Phase::Active => LoopRequest::NONE,
            Phase::Idle => {
                self.clock.reset();
                self.phase = Phase::Active;
                log::info!("parade: idle -> active");
                LoopRequest {
                    start_ticks: true,
                    start_frames: true,
                    ..LoopRequest::NONE
                }
            }
            Phase::ReturnPending | Phase::Returning => {
                let now = self.clock.last_ms().unwrap_or(0.0);
                for body in self.bodies.iter_mut() {
                    cancel_return(body, now);
                }
                self.phase = Phase::Active;
                log::info!("parade: returning -> active");
                LoopRequest {
                    start_ticks: true,
                    ..LoopRequest::NONE
                }
            }
        }
    }

    /// Pointer left (or touch ended). Stops the tick loop now; returns are
    /// planned on the next frame.
    pub fn interaction_end(&mut self) -> LoopRequest {
        if self.phase != Phase::Active {
            return LoopRequest::NONE;
        }
        self.phase = Phase::ReturnPending;
        log::info!("parade: active -> returning");
        LoopRequest {
            stop_ticks: true,
            ..LoopRequest::NONE
        }
    }

    /// Pointer sample in the center's coordinate space.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.field.sample(DVec2::new(x, y));
    }

    /// Dispatch a queued input event.
    pub fn handle_input(&mut self, event: InputEvent) -> LoopRequest {
        match event {
            InputEvent::PointerEnter => self.interaction_start(),
            InputEvent::PointerLeave => self.interaction_end(),
            InputEvent::PointerMove { x, y } => {
                self.pointer_moved(x, y);
                LoopRequest::NONE
            }
        }
    }

    // -- Loop callbacks --

    /// Coarse tick: evolve every body's speed once.
    pub fn tick(&mut self) -> LoopControl {
        let interacting = self.phase == Phase::Active;
        let running = run_speed_tick(&mut self.bodies, self.field.value(), interacting);
        LoopControl::from_running(interacting && running)
    }

    /// Fine tick: integrate angles at host timestamp `now_ms` and rebuild
    /// the position snapshot.
    pub fn frame(&mut self, now_ms: f64) -> LoopControl {
        if self.phase == Phase::Idle {
            return LoopControl::Stop;
        }
        let dt = self.clock.advance(now_ms);

        if self.phase == Phase::ReturnPending {
            begin_returns(
                &mut self.bodies,
                now_ms,
                self.config.return_easing,
                self.config.min_return_secs,
                self.config.max_return_secs,
            );
            self.phase = Phase::Returning;
        }

        let moving = run_frame(&mut self.bodies, dt, now_ms);
        self.snapshot.write(&self.bodies, self.config.center);

        let running = moving || self.phase == Phase::Active;
        if !running {
            self.phase = Phase::Idle;
            log::info!("parade: returning -> idle");
        }
        LoopControl::from_running(running)
    }

    // -- Accessors --

    pub fn state(&self) -> EngineState {
        match self.phase {
            Phase::Idle => EngineState::Idle,
            Phase::Active => EngineState::Active,
            Phase::ReturnPending | Phase::Returning => EngineState::Returning,
        }
    }

    /// Whether the host's tick timer should currently be armed.
    pub fn is_ticking(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Whether the host's frame loop should currently be running.
    pub fn is_framing(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    pub fn proximity(&self) -> f64 {
        self.field.value()
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Positions from the most recent frame (or construction).
    pub fn positions(&self) -> &[BodyPosition] {
        self.snapshot.positions()
    }

    pub fn snapshot(&self) -> &PositionBuffer {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::BodyConfig;
    use crate::api::types::Direction;
    use crate::components::body::Motion;
    use crate::core::angle::normalize_angle;
    use crate::core::simulation::Simulation;
    use crate::presets::planet_parade;
    use std::f64::consts::PI;

    fn scenario_config() -> ParadeConfig {
        ParadeConfig {
            motion: MotionConfig {
                center: DVec2::new(450.0, 300.0),
                ..MotionConfig::default()
            },
            bodies: vec![BodyConfig {
                semi_major: 200.0,
                semi_minor: 120.0,
                direction: Direction::Forward,
                rest_angle: PI,
                max_speed: 6.0,
                accel_step: 0.8,
                decel_factor: 1.08,
            }],
        }
    }

    fn engine() -> MotionEngine {
        MotionEngine::new(&scenario_config()).unwrap()
    }

    #[test]
    fn snapshot_is_valid_before_first_frame() {
        let engine = engine();
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.positions().len(), 1);
        assert_eq!(engine.positions()[0].x, 250.0);
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = scenario_config();
        config.bodies[0].max_speed = 0.0;
        assert!(MotionEngine::new(&config).is_err());
    }

    #[test]
    fn start_arms_both_loops_once() {
        let mut engine = engine();
        let first = engine.interaction_start();
        assert!(first.start_ticks && first.start_frames && !first.stop_ticks);
        assert_eq!(engine.interaction_start(), LoopRequest::NONE);
        assert!(engine.is_ticking());
        assert!(engine.is_framing());
    }

    #[test]
    fn repeated_start_matches_single_start() {
        let mut once = engine();
        let mut twice = engine();
        once.pointer_moved(450.0, 300.0);
        twice.pointer_moved(450.0, 300.0);

        once.interaction_start();
        twice.interaction_start();
        twice.interaction_start();
        for i in 0..5 {
            once.tick();
            twice.tick();
            once.frame(i as f64 * 16.0);
            twice.frame(i as f64 * 16.0);
        }

        assert_eq!(once.state(), twice.state());
        assert_eq!(once.is_ticking(), twice.is_ticking());
        assert_eq!(once.bodies()[0].motion(), twice.bodies()[0].motion());
        assert_eq!(once.bodies()[0].angle(), twice.bodies()[0].angle());
    }

    #[test]
    fn end_outside_active_is_a_no_op() {
        let mut engine = engine();
        assert_eq!(engine.interaction_end(), LoopRequest::NONE);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn end_stops_ticks_and_plans_on_next_frame() {
        let mut engine = engine();
        engine.pointer_moved(450.0, 300.0);
        engine.interaction_start();
        engine.frame(0.0);
        engine.tick();
        engine.frame(16.0);

        let req = engine.interaction_end();
        assert!(req.stop_ticks && !req.start_frames);
        assert_eq!(engine.state(), EngineState::Returning);
        assert!(!engine.is_ticking());
        // Trajectory not planned until the next frame.
        assert!(matches!(engine.bodies()[0].motion(), Motion::Driven { .. }));

        assert!(engine.frame(32.0).is_continue());
        match engine.bodies()[0].motion() {
            Motion::Returning(t) => assert_eq!(t.start_ms, 32.0),
            other => panic!("expected a return, got {other:?}"),
        }
    }

    #[test]
    fn reenter_before_planning_frame_keeps_driving() {
        let mut engine = engine();
        engine.pointer_moved(450.0, 300.0);
        engine.interaction_start();
        engine.tick();
        engine.frame(0.0);
        let speed = engine.bodies()[0].speed();

        engine.interaction_end();
        assert_eq!(engine.state(), EngineState::Returning);
        let req = engine.interaction_start();
        assert!(req.start_ticks);
        assert!(!req.start_frames);
        assert_eq!(engine.state(), EngineState::Active);

        assert!(engine.frame(16.0).is_continue());
        assert_eq!(*engine.bodies()[0].motion(), Motion::Driven { speed });
        assert!(engine.is_ticking());
    }

    #[test]
    fn stray_tick_after_end_stops_and_decays() {
        let mut engine = engine();
        engine.pointer_moved(450.0, 300.0);
        engine.interaction_start();
        engine.tick();
        let before = engine.bodies()[0].speed();
        engine.interaction_end();
        assert_eq!(engine.tick(), LoopControl::Stop);
        assert!(engine.bodies()[0].speed() < before);
    }

    #[test]
    fn frames_continue_while_hovering_outside_field() {
        let mut engine = engine();
        engine.pointer_moved(5000.0, 5000.0);
        engine.interaction_start();
        for i in 0..20 {
            assert!(engine.tick().is_continue());
            assert!(engine.frame(i as f64 * 16.0).is_continue());
        }
        assert_eq!(engine.bodies()[0].speed(), 0.0);
        assert_eq!(engine.state(), EngineState::Active);
    }

    #[test]
    fn zero_speed_at_end_parks_immediately() {
        let mut engine = engine();
        engine.interaction_start();
        engine.frame(0.0);
        engine.interaction_end();
        assert_eq!(engine.frame(16.0), LoopControl::Stop);
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(engine.bodies()[0].is_at_rest());
    }

    #[test]
    fn stalled_frame_is_clamped() {
        let mut engine = engine();
        engine.pointer_moved(450.0, 300.0);
        engine.interaction_start();
        engine.tick();
        engine.frame(0.0);
        let before = engine.bodies()[0].angle();
        engine.frame(5000.0);
        let moved = engine.bodies()[0].angle() - before;
        assert!((moved - 0.8 * 0.016).abs() < 1e-9, "moved {moved}");
    }

    #[test]
    fn stray_frame_while_idle_stops() {
        let mut engine = engine();
        assert_eq!(engine.frame(0.0), LoopControl::Stop);
    }

    #[test]
    fn handle_input_dispatches() {
        let mut engine = engine();
        engine.handle_input(InputEvent::PointerMove { x: 450.0, y: 300.0 });
        assert_eq!(engine.proximity(), 1.0);
        assert!(engine.handle_input(InputEvent::PointerEnter).start_ticks);
        assert!(engine.handle_input(InputEvent::PointerLeave).stop_ticks);
    }

    #[test]
    fn scenario_saturates_then_lands_on_rest() {
        let mut sim = Simulation::new(engine(), 20.0);
        sim.pointer_move(450.0, 300.0);
        sim.pointer_enter();

        let mut saturated_at = None;
        for tick in 1..=10 {
            sim.advance(100.0);
            assert_eq!(sim.ticks_run(), tick);
            if saturated_at.is_none() && sim.engine().bodies()[0].speed() == 6.0 {
                saturated_at = Some(tick);
            }
        }
        assert_eq!(saturated_at, Some(8));

        sim.pointer_leave();
        let max_ms = sim.engine().config().max_return_secs * 1000.0;
        assert!(sim.run_until_idle(max_ms + 40.0));

        let body = &sim.engine().bodies()[0];
        assert_eq!(body.speed(), 0.0);
        assert!(body.is_at_rest());
        assert_eq!(normalize_angle(body.angle()), PI);
    }

    #[test]
    fn preset_converges_to_parade() {
        let config = planet_parade();
        let mut sim = Simulation::new(MotionEngine::new(&config).unwrap(), 16.0);
        sim.pointer_move(config.motion.center.x, config.motion.center.y);
        sim.pointer_enter();
        sim.advance(3000.0);
        assert!(sim.engine().bodies().iter().all(|b| b.speed() > 0.0));

        sim.pointer_leave();
        let max_ms = sim.engine().config().max_return_secs * 1000.0;
        assert!(sim.run_until_idle(max_ms + 32.0));
        assert_eq!(sim.engine().state(), EngineState::Idle);
        for (body, cfg) in sim.engine().bodies().iter().zip(&config.bodies) {
            assert!(body.is_at_rest());
            assert_eq!(body.angle(), cfg.rest_angle);
        }
    }

    #[test]
    fn return_never_rewinds() {
        let config = planet_parade();
        let mut sim = Simulation::new(MotionEngine::new(&config).unwrap(), 16.0);
        sim.pointer_move(config.motion.center.x, config.motion.center.y);
        sim.pointer_enter();
        sim.advance(1500.0);
        sim.pointer_leave();

        let mut prev: Vec<f64> = sim.engine().bodies().iter().map(|b| b.angle()).collect();
        // The first frame plans; from then on every step must follow direction.
        sim.advance(16.0);
        while sim.engine().state() != EngineState::Idle {
            sim.advance(16.0);
            for (i, body) in sim.engine().bodies().iter().enumerate() {
                if body.is_returning() {
                    let delta = body.angle() - prev[i];
                    assert!(delta * body.direction.sign() >= 0.0, "body {i} rewound by {delta}");
                }
                prev[i] = body.angle();
            }
        }
    }

    #[test]
    fn reentry_mid_return_resumes_without_jump() {
        let mut sim = Simulation::new(engine(), 20.0);
        sim.pointer_move(450.0, 300.0);
        sim.pointer_enter();
        sim.advance(1000.0);
        sim.pointer_leave();
        sim.advance(500.0);
        assert!(sim.engine().bodies()[0].is_returning());

        let req = sim.pointer_enter();
        assert!(req.start_ticks);
        assert!(!req.start_frames, "frame loop was already running");
        let body = &sim.engine().bodies()[0];
        assert!(matches!(body.motion(), Motion::Driven { .. }));
        assert!(body.speed() > 0.0 && body.speed() <= body.max_speed);
        assert_eq!(sim.engine().state(), EngineState::Active);
    }
}
